// src/core/expense_tracker.rs

use crate::core::error::TrackerError;
use crate::core::models::expense::{validate_amount, validate_description};
use crate::core::models::Expense;
use crate::core::store::{next_id, Record, RecordStore, StoreError};

use chrono::{DateTime, Month, Utc};
use log::{debug, info};

/// Total spent, either overall or for one month of a given year.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSummary {
    pub month: Option<Month>,
    pub total: f64,
}

impl ExpenseSummary {
    pub fn headline(&self) -> String {
        match self.month {
            Some(month) => format!("Total expenses for {}: ${:.2}", month.name(), self.total),
            None => format!("Total expenses: ${:.2}", self.total),
        }
    }
}

pub fn parse_month(month: u32) -> Result<Month, TrackerError> {
    u8::try_from(month)
        .ok()
        .filter(|m| (1..=12).contains(m))
        .and_then(|m| Month::try_from(m).ok())
        .ok_or(TrackerError::Invalid("month must be between 1 and 12"))
}

pub struct ExpenseTracker<S> {
    store: S,
}

impl<S: RecordStore<Expense>> ExpenseTracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn expenses(&self) -> Result<Vec<Expense>, StoreError> {
        self.store.records()
    }

    pub fn add_expense(&mut self, description: String, amount: f64, now: DateTime<Utc>) -> Result<Expense, TrackerError> {
        validate_description(&description)?;
        validate_amount(amount)?;

        let mut expenses = self.expenses()?;
        let expense = Expense::new(next_id(&expenses)?, description, amount, now)?;
        expenses.push(expense.clone());
        self.store.save(&expenses)?;

        info!("Added expense {} ({:.2})", expense.id(), expense.amount());
        Ok(expense)
    }

    /// Changes description and/or amount. `None` when no expense has this ID.
    pub fn update_expense(
        &mut self,
        id: u32,
        description: Option<String>,
        amount: Option<f64>,
    ) -> Result<Option<Expense>, TrackerError> {
        if description.is_none() && amount.is_none() {
            return Err(TrackerError::Invalid("nothing to update, pass --description and/or --amount"));
        }
        if let Some(description) = description.as_deref() {
            validate_description(description)?;
        }
        if let Some(amount) = amount {
            validate_amount(amount)?;
        }

        let mut expenses = self.expenses()?;
        let Some(expense) = expenses.iter_mut().find(|expense| expense.id() == id) else {
            debug!("Expense {} not found for update", id);
            return Ok(None);
        };
        if let Some(description) = description {
            expense.set_description(description)?;
        }
        if let Some(amount) = amount {
            expense.set_amount(amount)?;
        }
        let updated = expense.clone();
        self.store.save(&expenses)?;

        info!("Updated expense {}", id);
        Ok(Some(updated))
    }

    pub fn delete_expense(&mut self, id: u32) -> Result<Option<Expense>, StoreError> {
        let mut expenses = self.expenses()?;
        let Some(position) = expenses.iter().position(|expense| expense.id() == id) else {
            debug!("Expense {} not found for delete", id);
            return Ok(None);
        };
        let removed = expenses.remove(position);
        self.store.save(&expenses)?;

        info!("Deleted expense {}", id);
        Ok(Some(removed))
    }

    /// Sums all expenses, or only those dated in `month` of `year`.
    pub fn summary(&self, month: Option<u32>, year: i32) -> Result<ExpenseSummary, TrackerError> {
        let month = month.map(parse_month).transpose()?;
        let expenses = self.expenses()?;

        let total: f64 = match month {
            Some(month) => expenses
                .iter()
                .filter(|expense| expense.falls_in(year, month.number_from_month()))
                .map(Expense::amount)
                .sum(),
            None => expenses.iter().map(Expense::amount).sum(),
        };

        Ok(ExpenseSummary { month, total })
    }
}
