// src/bin/github_activity.rs

use toolshed::commands::activity::ActivityCli;
use toolshed::commands::common::parse_cli_args;
use toolshed::{initialize_environment, run_activity_command};
use log::error;

#[tokio::main]
async fn main() {
    initialize_environment();

    let cli: ActivityCli = parse_cli_args(std::env::args_os());

    if let Err(e) = run_activity_command(&cli.username).await {
        error!("Fetching activity for {} failed: {}", cli.username, e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
