// src/bin/expense_tracker.rs

use toolshed::commands::common::parse_cli_args;
use toolshed::commands::expense::ExpenseCli;
use toolshed::{initialize_environment, run_expense_command};
use log::error;

fn main() {
    initialize_environment();

    let cli: ExpenseCli = parse_cli_args(std::env::args_os());

    if let Err(e) = run_expense_command(cli.command) {
        error!("Expense command failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
