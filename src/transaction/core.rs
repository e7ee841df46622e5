//! Defines the core data models and validation boundary for transactions.

use std::{fmt::Display, str::FromStr};

use serde::Deserialize;
use time::{Date, macros::format_description};

use crate::{
    database_id::TransactionId,
    tag::Tag,
    validation::ValidationErrors,
};

/// The error returned when a string is neither "income" nor "expense".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("\"{0}\" is not a valid transaction type")]
pub struct ParseTransactionTypeError(pub String);

/// Whether a transaction records money earned or money spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    /// Money earned.
    Income,
    /// Money spent.
    Expense,
}

impl TransactionType {
    /// The storage and form-value representation.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// The user-facing label.
    pub fn label(self) -> &'static str {
        match self {
            TransactionType::Income => "Receita",
            TransactionType::Expense => "Despesa",
        }
    }
}

impl FromStr for TransactionType {
    type Err = ParseTransactionTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(ParseTransactionTypeError(other.to_owned())),
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Amounts are always positive; the direction of the money flow is carried by
/// [Transaction::transaction_type]. Use [Transaction::signed_amount] when a
/// signed value is needed, e.g. for the cash flow chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Whether this transaction is income or an expense.
    pub transaction_type: TransactionType,
    /// The amount of money spent or earned, always positive.
    pub amount: f64,
    /// The category of the transaction, from the set valid for its type.
    pub tag: Tag,
    /// When the transaction happened.
    pub date: Date,
    /// A text description of what the transaction was for.
    pub description: String,
}

impl Transaction {
    /// The amount with income positive and expenses negative.
    pub fn signed_amount(&self) -> f64 {
        match self.transaction_type {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

/// The raw form data for creating or editing a transaction.
///
/// Every field is a string so that the validation boundary can report a
/// per-field message instead of the form extractor rejecting the request
/// wholesale. Missing fields deserialize as empty strings for the same
/// reason.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransactionFormData {
    /// "income" or "expense".
    pub type_: String,
    /// The amount as entered, e.g. "1234.56".
    pub amount: String,
    /// The tag label as entered.
    pub tag: String,
    /// The date as entered, ISO-8601 ("2024-01-31").
    pub date: String,
    /// Free-text description.
    pub description: String,
}

/// A fully validated transaction, ready to be written to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    /// Whether this transaction is income or an expense.
    pub transaction_type: TransactionType,
    /// The amount of money spent or earned, strictly positive.
    pub amount: f64,
    /// The category of the transaction, from the set valid for its type.
    pub tag: Tag,
    /// When the transaction happened.
    pub date: Date,
    /// A non-empty text description.
    pub description: String,
}

impl TransactionDraft {
    /// Validate raw form data into a draft.
    ///
    /// # Errors
    /// Returns [ValidationErrors] listing every invalid field. The store is
    /// never touched for a submission with any invalid field.
    pub fn parse(form: &TransactionFormData) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let transaction_type = match TransactionType::from_str(&form.type_) {
            Ok(transaction_type) => Some(transaction_type),
            Err(_) => {
                errors.push("type_", "Tipo de transação inválido");
                None
            }
        };

        let description = form.description.trim();
        if description.is_empty() {
            errors.push("description", "Descrição é obrigatória");
        }

        let amount = match form.amount.trim().parse::<f64>() {
            Ok(amount) if amount > 0.0 && amount.is_finite() => Some(amount),
            Ok(_) => {
                errors.push("amount", "O valor deve ser positivo");
                None
            }
            Err(_) => {
                errors.push("amount", "Valor inválido");
                None
            }
        };

        let tag = transaction_type.and_then(
            |transaction_type| match Tag::parse(transaction_type, form.tag.trim()) {
                Ok(tag) => Some(tag),
                Err(_) => {
                    errors.push("tag", "Selecione uma categoria válida");
                    None
                }
            },
        );

        let date_format = format_description!("[year]-[month]-[day]");
        let date = match Date::parse(form.date.trim(), date_format) {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push("date", "Data inválida");
                None
            }
        };

        match (transaction_type, amount, tag, date) {
            (Some(transaction_type), Some(amount), Some(tag), Some(date))
                if errors.is_empty() =>
            {
                Ok(TransactionDraft {
                    transaction_type,
                    amount,
                    tag,
                    date,
                    description: description.to_owned(),
                })
            }
            _ => Err(errors),
        }
    }
}
