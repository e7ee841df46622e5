//! Pure aggregation of transaction and goal snapshots.
//!
//! Everything here is a side-effect-free computation over in-memory slices:
//! totals by transaction type, goal progress, and the derived series the
//! dashboard charts are built from. No function in this module can fail for
//! validated input; empty snapshots produce zeros and empty series.

use std::collections::HashMap;

use time::Date;

use crate::{
    goal::Goal,
    tag::Tag,
    transaction::{Transaction, TransactionType},
};

/// How many transactions the recent-transactions bar chart shows.
pub(crate) const RECENT_TRANSACTION_COUNT: usize = 10;

/// Sum the amounts of every transaction of the given type.
///
/// Returns `0.0` for an empty snapshot. The sum is additive: splitting a
/// snapshot in two and summing each half gives the same result.
pub fn total_by_type(transactions: &[Transaction], transaction_type: TransactionType) -> f64 {
    transactions
        .iter()
        .filter(|transaction| transaction.transaction_type == transaction_type)
        .map(|transaction| transaction.amount)
        .sum()
}

/// The amount saved towards `goal`: the sum of the income transactions
/// carrying the goal's tag, capped at the goal's target amount.
///
/// The result is always in `0.0..=goal.target_amount`, no matter how much
/// income the snapshot contains.
pub fn goal_progress(goal: &Goal, transactions: &[Transaction]) -> f64 {
    let saved: f64 = transactions
        .iter()
        .filter(|transaction| transaction.tag == Tag::Income(goal.tag))
        .map(|transaction| transaction.amount)
        .sum();

    saved.min(goal.target_amount)
}

/// The share of `target` covered by `current`, as a value in `0.0..=100.0`.
///
/// Callers round the result for display. Validation rejects zero targets
/// before they are stored, so the division cannot normally degenerate; the
/// clamp still keeps the result well-defined for any input.
pub fn percentage(current: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }

    (current / target).clamp(0.0, 1.0) * 100.0
}

/// One point of the cash flow time series.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CashFlowPoint {
    /// When the transaction happened.
    pub date: Date,
    /// The signed amount: income positive, expenses negative.
    pub value: f64,
    /// The transaction's category label.
    pub tag: &'static str,
}

/// The signed amount of every transaction in snapshot order.
///
/// Income is positive, expenses are negative. The input order is preserved;
/// the store already returns transactions sorted by date.
pub(crate) fn cash_flow_series(transactions: &[Transaction]) -> Vec<CashFlowPoint> {
    transactions
        .iter()
        .map(|transaction| CashFlowPoint {
            date: transaction.date,
            value: transaction.signed_amount(),
            tag: transaction.tag.as_str(),
        })
        .collect()
}

/// Income and expense totals for one calendar date.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct IncomeExpensePoint {
    /// The calendar date the totals cover.
    pub date: Date,
    /// Total income on that date.
    pub income: f64,
    /// Total expenses on that date, as a positive number.
    pub expense: f64,
}

/// Per-date income and expense totals, dates ascending.
///
/// Dates with only income get a zero expense total and vice versa, so the
/// two stacked series always line up.
pub(crate) fn income_expense_series(transactions: &[Transaction]) -> Vec<IncomeExpensePoint> {
    let mut totals: HashMap<Date, (f64, f64)> = HashMap::new();

    for transaction in transactions {
        let entry = totals.entry(transaction.date).or_insert((0.0, 0.0));
        match transaction.transaction_type {
            TransactionType::Income => entry.0 += transaction.amount,
            TransactionType::Expense => entry.1 += transaction.amount,
        }
    }

    let mut dates: Vec<Date> = totals.keys().copied().collect();
    dates.sort_unstable();

    dates
        .into_iter()
        .map(|date| {
            let (income, expense) = totals[&date];
            IncomeExpensePoint {
                date,
                income,
                expense,
            }
        })
        .collect()
}

/// The label/value pairs for the income vs expense distribution pie.
pub(crate) fn distribution_series(transactions: &[Transaction]) -> Vec<(&'static str, f64)> {
    vec![
        ("Receitas", total_by_type(transactions, TransactionType::Income)),
        ("Despesas", total_by_type(transactions, TransactionType::Expense)),
    ]
}

/// Expense totals per category, largest first.
pub(crate) fn expense_tag_series(transactions: &[Transaction]) -> Vec<(&'static str, f64)> {
    let mut totals: HashMap<&'static str, f64> = HashMap::new();

    for transaction in transactions
        .iter()
        .filter(|transaction| transaction.transaction_type == TransactionType::Expense)
    {
        *totals.entry(transaction.tag.as_str()).or_insert(0.0) += transaction.amount;
    }

    let mut series: Vec<(&'static str, f64)> = totals.into_iter().collect();
    // Sort by amount descending, breaking ties by label so the order is stable.
    series.sort_by(|(label_a, amount_a), (label_b, amount_b)| {
        amount_b
            .total_cmp(amount_a)
            .then_with(|| label_a.cmp(label_b))
    });

    series
}

/// The `n` most recent transactions, in chronological order.
///
/// Ties on the same date keep their snapshot order, so two transactions on
/// the same day appear in the order they were recorded.
pub(crate) fn recent_transactions(transactions: &[Transaction], n: usize) -> Vec<&Transaction> {
    let mut by_date: Vec<&Transaction> = transactions.iter().collect();
    by_date.sort_by_key(|transaction| transaction.date);

    let start = by_date.len().saturating_sub(n);
    by_date.split_off(start)
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::{
        cash_flow_series, distribution_series, expense_tag_series, goal_progress,
        income_expense_series, percentage, recent_transactions, total_by_type,
    };
    use crate::{
        goal::Goal,
        tag::{ExpenseTag, IncomeTag, Tag},
        transaction::{Transaction, TransactionType},
    };

    fn income(id: i64, amount: f64, tag: IncomeTag, date: time::Date) -> Transaction {
        Transaction {
            id,
            transaction_type: TransactionType::Income,
            amount,
            tag: Tag::Income(tag),
            date,
            description: format!("receita {id}"),
        }
    }

    fn expense(id: i64, amount: f64, tag: ExpenseTag, date: time::Date) -> Transaction {
        Transaction {
            id,
            transaction_type: TransactionType::Expense,
            amount,
            tag: Tag::Expense(tag),
            date,
            description: format!("despesa {id}"),
        }
    }

    #[test]
    fn totals_match_the_recorded_amounts() {
        let transactions = vec![
            income(1, 1000.0, IncomeTag::Salario, date!(2024 - 01 - 01)),
            expense(2, 300.0, ExpenseTag::Aluguel, date!(2024 - 01 - 02)),
        ];

        assert_eq!(total_by_type(&transactions, TransactionType::Income), 1000.0);
        assert_eq!(total_by_type(&transactions, TransactionType::Expense), 300.0);
    }

    #[test]
    fn total_by_type_is_zero_for_empty_input() {
        assert_eq!(total_by_type(&[], TransactionType::Income), 0.0);
        assert_eq!(total_by_type(&[], TransactionType::Expense), 0.0);
    }

    #[test]
    fn total_by_type_is_additive_over_concatenation() {
        let first = vec![
            income(1, 100.0, IncomeTag::Salario, date!(2024 - 01 - 01)),
            expense(2, 40.0, ExpenseTag::Lazer, date!(2024 - 01 - 02)),
        ];
        let second = vec![
            income(3, 250.0, IncomeTag::Freelance, date!(2024 - 02 - 01)),
            income(4, 10.0, IncomeTag::Presente, date!(2024 - 02 - 14)),
        ];
        let combined: Vec<Transaction> =
            first.iter().chain(second.iter()).cloned().collect();

        for transaction_type in [TransactionType::Income, TransactionType::Expense] {
            assert_eq!(
                total_by_type(&combined, transaction_type),
                total_by_type(&first, transaction_type)
                    + total_by_type(&second, transaction_type),
            );
        }
    }

    #[test]
    fn goal_progress_sums_matching_income_only() {
        let goal = Goal {
            id: 1,
            name: "Viagem".to_owned(),
            target_amount: 5000.0,
            tag: IncomeTag::Salario,
        };
        let transactions = vec![
            income(1, 1000.0, IncomeTag::Salario, date!(2024 - 01 - 01)),
            income(2, 500.0, IncomeTag::Freelance, date!(2024 - 01 - 05)),
            expense(3, 300.0, ExpenseTag::Aluguel, date!(2024 - 01 - 02)),
            income(4, 800.0, IncomeTag::Salario, date!(2024 - 02 - 01)),
        ];

        assert_eq!(goal_progress(&goal, &transactions), 1800.0);
    }

    #[test]
    fn goal_progress_is_capped_at_the_target() {
        let goal = Goal {
            id: 1,
            name: "Viagem".to_owned(),
            target_amount: 2000.0,
            tag: IncomeTag::Salario,
        };
        let transactions = vec![
            income(1, 1500.0, IncomeTag::Salario, date!(2024 - 01 - 01)),
            income(2, 1000.0, IncomeTag::Salario, date!(2024 - 02 - 01)),
        ];

        let progress = goal_progress(&goal, &transactions);

        assert_eq!(progress, 2000.0);
        assert_eq!(percentage(progress, goal.target_amount), 100.0);
    }

    #[test]
    fn goal_progress_stays_within_bounds() {
        let goal = Goal {
            id: 1,
            name: "Viagem".to_owned(),
            target_amount: 750.0,
            tag: IncomeTag::Freelance,
        };

        let mut transactions = Vec::new();
        for id in 0..100 {
            transactions.push(income(
                id,
                37.5,
                IncomeTag::Freelance,
                date!(2024 - 01 - 01),
            ));

            let progress = goal_progress(&goal, &transactions);
            assert!(
                (0.0..=goal.target_amount).contains(&progress),
                "progress {progress} escaped [0, {}]",
                goal.target_amount
            );
        }
    }

    #[test]
    fn goal_progress_is_zero_for_empty_input() {
        let goal = Goal {
            id: 1,
            name: "Viagem".to_owned(),
            target_amount: 2000.0,
            tag: IncomeTag::Salario,
        };

        assert_eq!(goal_progress(&goal, &[]), 0.0);
    }

    #[test]
    fn percentage_is_clamped_and_scaled() {
        assert_eq!(percentage(0.0, 2000.0), 0.0);
        assert_eq!(percentage(500.0, 2000.0), 25.0);
        assert_eq!(percentage(2000.0, 2000.0), 100.0);
        assert_eq!(percentage(3000.0, 2000.0), 100.0);
        assert_eq!(percentage(-1.0, 2000.0), 0.0);
    }

    #[test]
    fn percentage_never_divides_by_zero() {
        assert_eq!(percentage(100.0, 0.0), 0.0);
        assert_eq!(percentage(0.0, 0.0), 0.0);
    }

    #[test]
    fn percentage_is_monotone_in_current() {
        let target = 1234.0;
        let mut previous = percentage(0.0, target);

        for step in 1..=200 {
            let current = step as f64 * 12.3;
            let next = percentage(current, target);
            assert!(
                next >= previous,
                "percentage({current}, {target}) = {next} < {previous}"
            );
            previous = next;
        }
    }

    #[test]
    fn cash_flow_series_signs_amounts_and_preserves_order() {
        let transactions = vec![
            income(1, 1000.0, IncomeTag::Salario, date!(2024 - 01 - 01)),
            expense(2, 300.0, ExpenseTag::Aluguel, date!(2024 - 01 - 02)),
        ];

        let series = cash_flow_series(&transactions);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].value, 1000.0);
        assert_eq!(series[0].tag, "Salário");
        assert_eq!(series[1].value, -300.0);
        assert_eq!(series[1].date, date!(2024 - 01 - 02));
    }

    #[test]
    fn income_expense_series_pairs_totals_per_date() {
        let transactions = vec![
            income(1, 1000.0, IncomeTag::Salario, date!(2024 - 01 - 01)),
            expense(2, 300.0, ExpenseTag::Aluguel, date!(2024 - 01 - 01)),
            expense(3, 50.0, ExpenseTag::Lazer, date!(2024 - 01 - 03)),
        ];

        let series = income_expense_series(&transactions);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date, date!(2024 - 01 - 01));
        assert_eq!(series[0].income, 1000.0);
        assert_eq!(series[0].expense, 300.0);
        assert_eq!(series[1].date, date!(2024 - 01 - 03));
        assert_eq!(series[1].income, 0.0);
        assert_eq!(series[1].expense, 50.0);
    }

    #[test]
    fn distribution_series_has_one_entry_per_type() {
        let transactions = vec![
            income(1, 1000.0, IncomeTag::Salario, date!(2024 - 01 - 01)),
            expense(2, 300.0, ExpenseTag::Aluguel, date!(2024 - 01 - 02)),
            expense(3, 200.0, ExpenseTag::Supermercado, date!(2024 - 01 - 03)),
        ];

        let series = distribution_series(&transactions);

        assert_eq!(series, vec![("Receitas", 1000.0), ("Despesas", 500.0)]);
    }

    #[test]
    fn expense_tag_series_sums_per_category_largest_first() {
        let transactions = vec![
            expense(1, 300.0, ExpenseTag::Aluguel, date!(2024 - 01 - 02)),
            expense(2, 150.0, ExpenseTag::Supermercado, date!(2024 - 01 - 03)),
            expense(3, 250.0, ExpenseTag::Supermercado, date!(2024 - 01 - 10)),
            income(4, 1000.0, IncomeTag::Salario, date!(2024 - 01 - 01)),
        ];

        let series = expense_tag_series(&transactions);

        assert_eq!(
            series,
            vec![("Supermercado", 400.0), ("Aluguel", 300.0)]
        );
    }

    #[test]
    fn recent_transactions_takes_the_latest_n_in_order() {
        let transactions = vec![
            income(1, 1.0, IncomeTag::Salario, date!(2024 - 01 - 01)),
            income(2, 2.0, IncomeTag::Salario, date!(2024 - 01 - 03)),
            income(3, 3.0, IncomeTag::Salario, date!(2024 - 01 - 02)),
            income(4, 4.0, IncomeTag::Salario, date!(2024 - 01 - 04)),
        ];

        let recent = recent_transactions(&transactions, 2);

        let ids: Vec<i64> = recent.iter().map(|transaction| transaction.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn recent_transactions_keeps_snapshot_order_for_ties() {
        let transactions = vec![
            income(1, 1.0, IncomeTag::Salario, date!(2024 - 01 - 01)),
            income(2, 2.0, IncomeTag::Freelance, date!(2024 - 01 - 01)),
            income(3, 3.0, IncomeTag::Presente, date!(2024 - 01 - 01)),
        ];

        let recent = recent_transactions(&transactions, 3);

        let ids: Vec<i64> = recent.iter().map(|transaction| transaction.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn empty_snapshot_produces_empty_series() {
        assert!(cash_flow_series(&[]).is_empty());
        assert!(income_expense_series(&[]).is_empty());
        assert!(expense_tag_series(&[]).is_empty());
        assert!(recent_transactions(&[], 10).is_empty());
        assert_eq!(distribution_series(&[]), vec![("Receitas", 0.0), ("Despesas", 0.0)]);
    }
}
