// src/commands/expense.rs

use chrono::{DateTime, Datelike, Utc};
use clap::{Parser, Subcommand};
use std::{error::Error, io::Write};

use crate::core::expense_tracker::ExpenseTracker;
use crate::core::models::Expense;
use crate::core::store::RecordStore;

#[derive(Parser, Debug)]
#[command(name = "expense_tracker", about = "Track expenses in a local JSON file")]
pub struct ExpenseCli {
    #[command(subcommand)]
    pub command: ExpenseCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ExpenseCommand {
    /// Record a new expense
    Add {
        /// Description of the expense
        #[arg(long)]
        description: String,
        /// Amount of the expense, must be positive
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
    },
    /// Change the description and/or amount of an expense
    Update {
        #[arg(long)]
        id: u32,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        amount: Option<f64>,
    },
    /// Delete an expense
    Delete {
        /// ID of the expense to delete
        #[arg(long)]
        id: u32,
    },
    /// List all expenses
    List,
    /// Show total expenses, optionally for one month of the current year
    Summary {
        /// Month number (1-12)
        #[arg(long)]
        month: Option<u32>,
    },
}

pub fn execute_command<S: RecordStore<Expense>, W: Write>(
    tracker: &mut ExpenseTracker<S>,
    command: ExpenseCommand,
    now: DateTime<Utc>,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    match command {
        ExpenseCommand::Add { description, amount } => {
            let expense = tracker.add_expense(description, amount, now)?;
            writeln!(output, "Expense added successfully (ID: {})", expense.id)?;
        }
        ExpenseCommand::Update { id, description, amount } => {
            match tracker.update_expense(id, description, amount)? {
                Some(_) => writeln!(output, "Expense updated successfully")?,
                None => writeln!(output, "Expense {} not found", id)?,
            }
        }
        ExpenseCommand::Delete { id } => match tracker.delete_expense(id)? {
            Some(_) => writeln!(output, "Expense deleted successfully")?,
            None => writeln!(output, "Expense {} not found", id)?,
        },
        ExpenseCommand::List => {
            let expenses = tracker.expenses()?;
            if expenses.is_empty() {
                writeln!(output, "No expenses found")?;
            } else {
                write!(output, "{}", format_expense_table(&expenses))?;
            }
        }
        ExpenseCommand::Summary { month } => {
            let summary = tracker.summary(month, now.year())?;
            writeln!(output, "{}", summary.headline())?;
        }
    }
    Ok(())
}

pub fn format_expense_table(expenses: &[Expense]) -> String {
    let mut table = format!("{:<4}{:<12}{:<14}{}\n", "ID", "Date", "Description", "Amount");
    for expense in expenses {
        table.push_str(&format!(
            "{:<4}{:<12}{:<14}${:.2}\n",
            expense.id,
            expense.date().format("%Y-%m-%d").to_string(),
            expense.description(),
            expense.amount()
        ));
    }
    table
}
