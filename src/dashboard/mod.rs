//! Dashboard module
//!
//! Provides an overview page showing financial summary cards, charts built
//! from the transaction history, and savings goal progress.

mod aggregation;
mod cards;
mod charts;
mod handlers;

pub use aggregation::{goal_progress, percentage, total_by_type};
pub(crate) use handlers::get_dashboard_page;
