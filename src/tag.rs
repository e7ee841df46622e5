//! The closed tag enumerations used to categorize transactions and goals.
//!
//! The original data model kept tags as runtime-checked string sets, one per
//! transaction type. Here each set is a closed enum so an income transaction
//! cannot carry an expense tag (and vice versa) by construction. The display
//! labels are the user-facing category names and double as the storage
//! representation.

use std::{fmt::Display, str::FromStr};

use crate::transaction::TransactionType;

/// The error returned when a string does not name a tag in the expected set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("\"{0}\" is not a valid tag for this transaction type")]
pub struct ParseTagError(pub String);

/// Categories available for income transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncomeTag {
    /// Wages and salary payments.
    Salario,
    /// Freelance and contract work.
    Freelance,
    /// Dividends, interest and other investment returns.
    Investimentos,
    /// Gifts received.
    Presente,
    /// Income that fits no other category.
    Outros,
}

impl IncomeTag {
    /// Every income tag, in display order.
    pub const ALL: [IncomeTag; 5] = [
        IncomeTag::Salario,
        IncomeTag::Freelance,
        IncomeTag::Investimentos,
        IncomeTag::Presente,
        IncomeTag::Outros,
    ];

    /// The display label, which is also the storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            IncomeTag::Salario => "Salário",
            IncomeTag::Freelance => "Freelance",
            IncomeTag::Investimentos => "Investimentos",
            IncomeTag::Presente => "Presente",
            IncomeTag::Outros => "Outras Receitas",
        }
    }
}

impl FromStr for IncomeTag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| ParseTagError(s.to_owned()))
    }
}

impl Display for IncomeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Categories available for expense transactions.
///
/// Disjoint from [IncomeTag]: savings goals track income categories only, so
/// none of these labels may appear in the income set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpenseTag {
    /// Rent payments.
    Aluguel,
    /// Groceries.
    Supermercado,
    /// Public transport, fuel and ride hailing.
    Transporte,
    /// Leisure and entertainment.
    Lazer,
    /// Health care and medication.
    Saude,
    /// Courses, books and tuition.
    Educacao,
    /// Expenses that fit no other category.
    Outros,
}

impl ExpenseTag {
    /// Every expense tag, in display order.
    pub const ALL: [ExpenseTag; 7] = [
        ExpenseTag::Aluguel,
        ExpenseTag::Supermercado,
        ExpenseTag::Transporte,
        ExpenseTag::Lazer,
        ExpenseTag::Saude,
        ExpenseTag::Educacao,
        ExpenseTag::Outros,
    ];

    /// The display label, which is also the storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ExpenseTag::Aluguel => "Aluguel",
            ExpenseTag::Supermercado => "Supermercado",
            ExpenseTag::Transporte => "Transporte",
            ExpenseTag::Lazer => "Lazer",
            ExpenseTag::Saude => "Saúde",
            ExpenseTag::Educacao => "Educação",
            ExpenseTag::Outros => "Outras Despesas",
        }
    }
}

impl FromStr for ExpenseTag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| ParseTagError(s.to_owned()))
    }
}

impl Display for ExpenseTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A transaction's category, constrained to the set valid for its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// A tag from the income set.
    Income(IncomeTag),
    /// A tag from the expense set.
    Expense(ExpenseTag),
}

impl Tag {
    /// Parse `s` against the tag set valid for `transaction_type`.
    ///
    /// # Errors
    /// Returns a [ParseTagError] if `s` does not name a tag in that set.
    pub fn parse(transaction_type: TransactionType, s: &str) -> Result<Self, ParseTagError> {
        match transaction_type {
            TransactionType::Income => IncomeTag::from_str(s).map(Tag::Income),
            TransactionType::Expense => ExpenseTag::from_str(s).map(Tag::Expense),
        }
    }

    /// The transaction type whose tag set this tag belongs to.
    pub fn transaction_type(self) -> TransactionType {
        match self {
            Tag::Income(_) => TransactionType::Income,
            Tag::Expense(_) => TransactionType::Expense,
        }
    }

    /// The display label, which is also the storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Income(tag) => tag.as_str(),
            Tag::Expense(tag) => tag.as_str(),
        }
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
