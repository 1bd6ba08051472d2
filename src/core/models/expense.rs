use chrono::{DateTime, Datelike, Utc};
use serde::{Serialize, Deserialize};

use crate::core::store::Record;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: u32,
    pub date: DateTime<Utc>,
    pub description: String,
    pub amount: f64,
}

impl Expense {
    pub fn new(id: u32, description: String, amount: f64, date: DateTime<Utc>) -> Result<Self, &'static str> {
        validate_description(&description)?;
        validate_amount(amount)?;

        Ok(Self {
            id,
            date,
            description,
            amount,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn set_description(&mut self, description: String) -> Result<(), &'static str> {
        validate_description(&description)?;
        self.description = description;
        Ok(())
    }

    pub fn set_amount(&mut self, amount: f64) -> Result<(), &'static str> {
        validate_amount(amount)?;
        self.amount = amount;
        Ok(())
    }

    pub fn falls_in(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }
}

impl Record for Expense {
    fn id(&self) -> u32 {
        self.id
    }
}

pub(crate) fn validate_description(description: &str) -> Result<(), &'static str> {
    if description.trim().is_empty() {
        return Err("description is required");
    }
    Ok(())
}

pub(crate) fn validate_amount(amount: f64) -> Result<(), &'static str> {
    // NaN fails this comparison too
    if !(amount > 0.0) || !amount.is_finite() {
        return Err("amount must be a positive number");
    }
    Ok(())
}
