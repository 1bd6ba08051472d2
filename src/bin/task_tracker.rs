// src/bin/task_tracker.rs

use toolshed::commands::common::parse_cli_args;
use toolshed::commands::task::TaskCli;
use toolshed::{initialize_environment, run_task_command};
use log::error;

fn main() {
    initialize_environment();

    let cli: TaskCli = parse_cli_args(std::env::args_os());

    if let Err(e) = run_task_command(cli.command) {
        error!("Task command failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
