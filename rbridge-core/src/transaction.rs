//! Normalized transaction record produced by every statement adapter

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use crate::categorizer::classify;

/// Whether a transaction decreases or increases the account balance
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum Direction {
    Expense,
    Income,
}

impl Direction {
    /// Label written to the `Income/Expense` column
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Expense => "Expense",
            Direction::Income => "Income",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A bank-agnostic transaction, categorized at construction and immutable afterwards.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NormalizedTransaction {
    date: NaiveDate,
    description: String,
    reference: Option<String>,
    /// Always non-negative; the sign lives in `direction`
    amount: Decimal,
    direction: Direction,
    category: &'static str,
    subcategory: &'static str,
    account: String,
}

impl NormalizedTransaction {
    /// Build a record and categorize its description.
    ///
    /// `amount` is stored as its absolute value.
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: Decimal,
        direction: Direction,
        account: impl Into<String>,
    ) -> Self {
        let description = description.into();
        let classification = classify(&description);
        Self {
            date,
            description,
            reference: None,
            amount: amount.abs(),
            direction,
            category: classification.category,
            subcategory: classification.subcategory,
            account: account.into(),
        }
    }

    /// Attach a reference/cheque number. Blank references are dropped.
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        let reference = reference.into();
        let trimmed = reference.trim();
        self.reference = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn subcategory(&self) -> &'static str {
        self.subcategory
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    /// Returns true if this is an expense
    pub fn is_expense(&self) -> bool {
        self.direction == Direction::Expense
    }

    /// Amount with expenses negative, for totals
    pub fn signed_amount(&self) -> Decimal {
        match self.direction {
            Direction::Expense => -self.amount,
            Direction::Income => self.amount,
        }
    }
}
