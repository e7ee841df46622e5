//! Chart generation and rendering for the dashboard.
//!
//! This module creates interactive ECharts visualizations for financial data:
//! - **Cash Flow Chart**: signed transaction amounts over time
//! - **Income vs Expenses Chart**: stacked per-date income and expense totals
//! - **Distribution Chart**: the income/expense split as a pie
//! - **Recent Transactions Chart**: the latest transactions as signed bars
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with corresponding HTML containers and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title, VisualMap, VisualMapPiece},
    element::{
        AreaStyle, AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger,
    },
    series::{Bar, Line, Pie},
};
use maud::{Markup, PreEscaped, html};
use time::{Date, macros::format_description};

use crate::{
    dashboard::aggregation::{
        RECENT_TRANSACTION_COUNT, cash_flow_series, distribution_series, expense_tag_series,
        income_expense_series, recent_transactions,
    },
    html::HeadElement,
    transaction::Transaction,
};

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML containers for dashboard charts.
pub(super) fn charts_view(charts: &[DashboardChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 xl:grid-cols-2 gap-4"
            {
                @for chart in charts {
                    div
                        id=(chart.id)
                        class="min-h-[380px] rounded dark:bg-gray-100"
                    {}
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// Formats a date the way the charts label their axes, e.g. "02/01/2024".
fn date_label(date: Date) -> String {
    let format = format_description!("[day]/[month]/[year]");

    date.format(format).unwrap_or_else(|_| date.to_string())
}

pub(super) fn cash_flow_chart(transactions: &[Transaction]) -> Chart {
    let series = cash_flow_series(transactions);
    // The category rides along in the axis label so the tooltip shows it,
    // matching what the tooltip of the original chart displayed.
    let labels: Vec<String> = series
        .iter()
        .map(|point| format!("{} ({})", date_label(point.date), point.tag))
        .collect();
    let values: Vec<f64> = series.iter().map(|point| point.value).collect();

    Chart::new()
        .title(
            Title::new()
                .text("Fluxo de Caixa")
                .subtext("Receitas positivas, despesas negativas"),
        )
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .visual_map(VisualMap::new().show(false).pieces(vec![
            VisualMapPiece::new().lte(-1).color("red"),
            VisualMapPiece::new().gte(0).color("green"),
        ]))
        .series(Line::new().name("Fluxo de Caixa").data(values))
}

pub(super) fn income_vs_expenses_chart(transactions: &[Transaction]) -> Chart {
    let series = income_expense_series(transactions);
    let labels: Vec<String> = series.iter().map(|point| date_label(point.date)).collect();
    let income: Vec<f64> = series.iter().map(|point| point.income).collect();
    let expenses: Vec<f64> = series.iter().map(|point| point.expense).collect();

    Chart::new()
        .title(
            Title::new()
                .text("Receitas vs Despesas")
                .subtext("Totais diários empilhados"),
        )
        .tooltip(currency_tooltip())
        .legend(Legend::new().top("1%").right("4%"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(
            Line::new()
                .name("Receita")
                .stack("total")
                .area_style(AreaStyle::new())
                .data(income),
        )
        .series(
            Line::new()
                .name("Despesa")
                .stack("total")
                .area_style(AreaStyle::new())
                .data(expenses),
        )
}

pub(super) fn distribution_chart(transactions: &[Transaction]) -> Chart {
    let data: Vec<(f64, String)> = distribution_series(transactions)
        .into_iter()
        .map(|(label, value)| (value, label.to_owned()))
        .collect();

    Chart::new()
        .title(Title::new().text("Distribuição de Receitas e Despesas"))
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .legend(Legend::new().bottom("1%"))
        .series(Pie::new().name("Distribuição").radius("55%").data(data))
}

pub(super) fn expenses_by_tag_chart(transactions: &[Transaction]) -> Chart {
    let data: Vec<(f64, String)> = expense_tag_series(transactions)
        .into_iter()
        .map(|(label, value)| (value, label.to_owned()))
        .collect();

    Chart::new()
        .title(Title::new().text("Despesas por Categoria"))
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .legend(Legend::new().bottom("1%"))
        .series(Pie::new().name("Despesas").radius("55%").data(data))
}

pub(super) fn recent_transactions_chart(transactions: &[Transaction]) -> Chart {
    let recent = recent_transactions(transactions, RECENT_TRANSACTION_COUNT);
    let labels: Vec<String> = recent
        .iter()
        .map(|transaction| transaction.description.clone())
        .collect();
    let values: Vec<f64> = recent
        .iter()
        .map(|transaction| transaction.signed_amount())
        .collect();

    Chart::new()
        .title(
            Title::new()
                .text("Últimas Transações")
                .subtext("Transações mais recentes"),
        )
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .visual_map(VisualMap::new().show(false).pieces(vec![
            VisualMapPiece::new().lte(-1).color("red"),
            VisualMapPiece::new().gte(0).color("green"),
        ]))
        .series(Bar::new().name("Valor").data(values))
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('pt-BR', {
              style: 'currency',
              currency: 'BRL'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::{
        DashboardChart, cash_flow_chart, charts_view, date_label, distribution_chart,
        expenses_by_tag_chart, income_vs_expenses_chart, recent_transactions_chart,
    };
    use crate::{
        tag::{ExpenseTag, IncomeTag, Tag},
        transaction::{Transaction, TransactionType},
    };

    fn sample_transactions() -> Vec<Transaction> {
        vec![
            Transaction {
                id: 1,
                transaction_type: TransactionType::Income,
                amount: 1000.0,
                tag: Tag::Income(IncomeTag::Salario),
                date: date!(2024 - 01 - 01),
                description: "Pagamento mensal".to_owned(),
            },
            Transaction {
                id: 2,
                transaction_type: TransactionType::Expense,
                amount: 300.0,
                tag: Tag::Expense(ExpenseTag::Aluguel),
                date: date!(2024 - 01 - 02),
                description: "Aluguel de janeiro".to_owned(),
            },
        ]
    }

    #[test]
    fn date_label_uses_brazilian_order() {
        assert_eq!(date_label(date!(2024 - 01 - 02)), "02/01/2024");
    }

    #[test]
    fn formatter_free_chart_options_are_valid_json() {
        // The other charts embed a JsFunction formatter, which ECharts needs
        // as a raw function and therefore is not strict JSON.
        let options = distribution_chart(&sample_transactions()).to_string();

        serde_json::from_str::<serde_json::Value>(&options)
            .expect("chart options should serialize to valid JSON");
    }

    #[test]
    fn every_chart_produces_options() {
        let transactions = sample_transactions();

        for chart in [
            cash_flow_chart(&transactions),
            income_vs_expenses_chart(&transactions),
            distribution_chart(&transactions),
            expenses_by_tag_chart(&transactions),
            recent_transactions_chart(&transactions),
        ] {
            assert!(!chart.to_string().is_empty());
        }
    }

    #[test]
    fn expenses_by_tag_chart_lists_expense_categories_only() {
        let options = expenses_by_tag_chart(&sample_transactions()).to_string();

        assert!(options.contains("Aluguel"));
        assert!(!options.contains("Salário"));
    }

    #[test]
    fn cash_flow_chart_labels_carry_date_and_category() {
        let options = cash_flow_chart(&sample_transactions()).to_string();

        assert!(options.contains("01/01/2024 (Salário)"));
        assert!(options.contains("02/01/2024 (Aluguel)"));
    }

    #[test]
    fn distribution_chart_includes_both_slices() {
        let options = distribution_chart(&sample_transactions()).to_string();

        assert!(options.contains("Receitas"));
        assert!(options.contains("Despesas"));
    }

    #[test]
    fn charts_view_renders_a_container_per_chart() {
        let charts = [
            DashboardChart {
                id: "cash-flow-chart",
                options: "{}".to_owned(),
            },
            DashboardChart {
                id: "distribution-chart",
                options: "{}".to_owned(),
            },
        ];

        let rendered = charts_view(&charts).into_string();

        assert!(rendered.contains("id=\"cash-flow-chart\""));
        assert!(rendered.contains("id=\"distribution-chart\""));
    }
}
