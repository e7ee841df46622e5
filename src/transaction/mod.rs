//! Transaction management.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the validation boundary that guards the store
//! - Database functions for storing, querying, and managing transactions
//! - View handlers for transaction-related web pages

pub(crate) mod core;
mod create_endpoint;
mod create_page;
pub(crate) mod db;
mod delete_endpoint;
mod edit_endpoint;
mod edit_page;
mod form;
mod transactions_page;

pub use core::{Transaction, TransactionDraft, TransactionFormData, TransactionType};
pub use db::create_transaction_table;

pub(crate) use create_endpoint::create_transaction_endpoint;
pub(crate) use create_page::get_new_transaction_page;
pub(crate) use delete_endpoint::delete_transaction_endpoint;
pub(crate) use edit_endpoint::update_transaction_endpoint;
pub(crate) use edit_page::get_edit_transaction_page;
pub(crate) use transactions_page::get_transactions_page;
