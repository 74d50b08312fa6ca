//! Transaction entry form: a two-state dialog with pure validation.

use thiserror::Error;

use crate::domain::{TransactionDraft, TransactionType};

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter a valid name: the name cannot be empty")]
    EmptyName,
    #[error("Enter a valid amount: `{0}` is not a number")]
    InvalidAmount(String),
    #[error("Enter a valid amount: the amount must be greater than zero")]
    NonPositiveAmount,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("The transaction form is not open. Use `add` to open it.")]
    NotOpen,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Checks raw form input and produces a draft ready to be recorded.
pub fn validate_entry(
    name: &str,
    amount: &str,
    kind: TransactionType,
) -> Result<TransactionDraft, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let raw_amount = amount.trim();
    let amount: f64 = raw_amount
        .parse()
        .ok()
        .filter(|value: &f64| value.is_finite())
        .ok_or_else(|| ValidationError::InvalidAmount(raw_amount.to_string()))?;
    if amount <= 0.0 {
        return Err(ValidationError::NonPositiveAmount);
    }
    Ok(TransactionDraft {
        name: name.to_string(),
        amount,
        kind,
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormVisibility {
    #[default]
    Hidden,
    Visible,
}

/// Entered values survive a failed submit and a cancel; only a successful
/// submit clears the name and amount.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionForm {
    visibility: FormVisibility,
    pub name: String,
    pub amount: String,
    pub kind: TransactionType,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self {
            visibility: FormVisibility::Hidden,
            name: String::new(),
            amount: String::new(),
            kind: TransactionType::Income,
        }
    }
}

impl TransactionForm {
    pub fn visibility(&self) -> FormVisibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == FormVisibility::Visible
    }

    pub fn open(&mut self) {
        self.visibility = FormVisibility::Visible;
    }

    pub fn cancel(&mut self) {
        self.visibility = FormVisibility::Hidden;
    }

    pub fn fill(
        &mut self,
        name: impl Into<String>,
        amount: impl Into<String>,
        kind: TransactionType,
    ) {
        self.name = name.into();
        self.amount = amount.into();
        self.kind = kind;
    }

    /// Validates the current values. On success the form closes and the
    /// name and amount fields are cleared; on failure nothing changes.
    pub fn submit(&mut self) -> Result<TransactionDraft, FormError> {
        if !self.is_open() {
            return Err(FormError::NotOpen);
        }
        let draft = validate_entry(&self.name, &self.amount, self.kind)?;
        self.name.clear();
        self.amount.clear();
        self.visibility = FormVisibility::Hidden;
        Ok(draft)
    }
}
