//! Summary cards for the dashboard.
//!
//! Shows the totals derived from the transaction snapshot: total income,
//! total expenses, and the resulting balance.

use maud::{Markup, html};

use crate::html::{CARD_STYLE, format_currency};

/// The derived totals shown in the summary cards.
pub(super) struct SummaryTotals {
    /// Sum of all income amounts.
    pub total_income: f64,
    /// Sum of all expense amounts.
    pub total_expenses: f64,
}

impl SummaryTotals {
    /// Income minus expenses.
    fn balance(&self) -> f64 {
        self.total_income - self.total_expenses
    }
}

/// Renders the three summary cards.
pub(super) fn summary_cards_view(totals: &SummaryTotals) -> Markup {
    let balance = totals.balance();
    let balance_style = if balance >= 0.0 {
        "text-green-600 dark:text-green-400"
    } else {
        "text-red-600 dark:text-red-400"
    };

    html! {
        section class="w-full mx-auto mb-4" {
            div class="grid grid-cols-1 md:grid-cols-3 gap-4" {
                (summary_card(
                    "Receitas Totais",
                    totals.total_income,
                    "text-green-600 dark:text-green-400",
                ))
                (summary_card(
                    "Despesas Totais",
                    totals.total_expenses,
                    "text-red-600 dark:text-red-400",
                ))
                (summary_card("Saldo", balance, balance_style))
            }
        }
    }
}

fn summary_card(title: &str, value: f64, value_style: &str) -> Markup {
    html! {
        div class=(CARD_STYLE) {
            p class="text-sm font-medium text-gray-600 dark:text-gray-400 mb-2" {
                (title)
            }

            p class={"text-2xl font-bold " (value_style)} {
                (format_currency(value))
            }
        }
    }
}
