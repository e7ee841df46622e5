//! Dashboard HTTP handlers and view rendering.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    dashboard::{
        aggregation::{goal_progress, percentage, total_by_type},
        cards::{SummaryTotals, summary_cards_view},
        charts::{
            DashboardChart, cash_flow_chart, charts_script, charts_view, distribution_chart,
            expenses_by_tag_chart, income_vs_expenses_chart, recent_transactions_chart,
        },
    },
    goal::{Goal, db::get_all_goals},
    html::{CARD_STYLE, HeadElement, LINK_STYLE, base, format_currency, link},
    navigation::NavBar,
    transaction::{Transaction, TransactionType, db::get_all_transactions},
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The database connection for reading transactions and goals.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A goal with its derived progress, for the dashboard overview section.
struct GoalSummary {
    name: String,
    current_amount: f64,
    target_amount: f64,
    percent: f64,
}

/// Display a page with an overview of the user's data.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW);

    let transactions = get_all_transactions(&connection)
        .inspect_err(|error| tracing::error!("could not get transactions: {error}"))?;
    let goals = get_all_goals(&connection)
        .inspect_err(|error| tracing::error!("could not get goals: {error}"))?;

    if transactions.is_empty() {
        return Ok(dashboard_no_data_view(nav_bar).into_response());
    }

    let totals = SummaryTotals {
        total_income: total_by_type(&transactions, TransactionType::Income),
        total_expenses: total_by_type(&transactions, TransactionType::Expense),
    };
    let charts = build_dashboard_charts(&transactions);
    let goal_summaries = build_goal_summaries(&goals, &transactions);

    Ok(dashboard_view(nav_bar, &totals, &charts, &goal_summaries).into_response())
}

/// Creates the array of dashboard charts from transaction data.
fn build_dashboard_charts(transactions: &[Transaction]) -> [DashboardChart; 5] {
    [
        DashboardChart {
            id: "cash-flow-chart",
            options: cash_flow_chart(transactions).to_string(),
        },
        DashboardChart {
            id: "income-vs-expenses-chart",
            options: income_vs_expenses_chart(transactions).to_string(),
        },
        DashboardChart {
            id: "distribution-chart",
            options: distribution_chart(transactions).to_string(),
        },
        DashboardChart {
            id: "expenses-by-tag-chart",
            options: expenses_by_tag_chart(transactions).to_string(),
        },
        DashboardChart {
            id: "recent-transactions-chart",
            options: recent_transactions_chart(transactions).to_string(),
        },
    ]
}

fn build_goal_summaries(goals: &[Goal], transactions: &[Transaction]) -> Vec<GoalSummary> {
    goals
        .iter()
        .map(|goal| {
            let current_amount = goal_progress(goal, transactions);

            GoalSummary {
                name: goal.name.clone(),
                current_amount,
                target_amount: goal.target_amount,
                percent: percentage(current_amount, goal.target_amount),
            }
        })
        .collect()
}

/// Renders the dashboard page when no transaction data exists.
fn dashboard_no_data_view(nav_bar: NavBar) -> Markup {
    let nav_bar = nav_bar.into_html();
    let new_transaction_link = link(endpoints::NEW_TRANSACTION_VIEW, "adicionar uma transação");

    let content = html!(
        (nav_bar)

        div class="flex flex-col items-center px-6 py-8 mx-auto text-gray-900 dark:text-white"
        {
            h2 class="text-xl font-bold"
            {
                "Nada por aqui ainda..."
            }

            p
            {
                "Os gráficos aparecerão aqui assim que você registrar receitas
                e despesas. Comece por " (new_transaction_link) "."
            }
        }
    );

    base("Painel", &[], &content)
}

/// Renders the main dashboard page with cards, charts and goal progress.
fn dashboard_view(
    nav_bar: NavBar<'_>,
    totals: &SummaryTotals,
    charts: &[DashboardChart],
    goals: &[GoalSummary],
) -> Markup {
    let nav_bar = nav_bar.into_html();

    let content = html!(
        (nav_bar)

        div
            id="dashboard-content"
            class="flex flex-col items-center px-2 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            (summary_cards_view(totals))

            (charts_view(charts))

            (goals_section(goals))
        }
    );

    let scripts = [
        HeadElement::ScriptLink("/static/echarts.6.0.0.min.js".to_owned()),
        charts_script(charts),
    ];

    base("Painel", &scripts, &content)
}

fn goals_section(goals: &[GoalSummary]) -> Markup {
    html!(
        section class="w-full mx-auto mb-8"
        {
            div class="flex justify-between items-baseline mb-4"
            {
                h3 class="text-xl font-semibold" { "Metas Financeiras" }

                a href=(endpoints::GOALS_VIEW) class=(LINK_STYLE) { "Ver todas" }
            }

            @if goals.is_empty() {
                p class="text-gray-600 dark:text-gray-400"
                {
                    "Nenhuma meta definida ainda. Crie uma para acompanhar seu progresso."
                }
            } @else {
                div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4"
                {
                    @for goal in goals {
                        div class=(CARD_STYLE)
                        {
                            h4 class="font-semibold mb-2" { (goal.name) }

                            p class="text-sm text-gray-600 dark:text-gray-400 mb-1"
                            {
                                (format_currency(goal.current_amount))
                                " / "
                                (format_currency(goal.target_amount))
                            }

                            div
                                class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-2.5"
                                role="progressbar"
                                aria-valuenow=(format!("{:.0}", goal.percent))
                                aria-valuemin="0"
                                aria-valuemax="100"
                            {
                                @if goal.percent > 0.0 {
                                    div
                                        class="bg-blue-600 dark:bg-blue-500 h-2.5 rounded-full"
                                        style=(format!("width: {:.1}%", goal.percent))
                                    {}
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode};
    use rusqlite::Connection;
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        db::initialize,
        goal::{GoalDraft, db::create_goal},
        tag::{ExpenseTag, IncomeTag, Tag},
        test_utils::{assert_valid_html, parse_html_document},
        transaction::{
            TransactionDraft, TransactionType,
            db::create_transaction,
        },
    };

    use super::{DashboardState, get_dashboard_page};

    fn get_test_state() -> DashboardState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        DashboardState {
            db_connection: Arc::new(Mutex::new(conn)),
        }
    }

    fn seed_data(state: &DashboardState) {
        let connection = state.db_connection.lock().unwrap();
        create_transaction(
            TransactionDraft {
                transaction_type: TransactionType::Income,
                amount: 1000.0,
                tag: Tag::Income(IncomeTag::Salario),
                date: date!(2024 - 01 - 01),
                description: "Pagamento mensal".to_owned(),
            },
            &connection,
        )
        .unwrap();
        create_transaction(
            TransactionDraft {
                transaction_type: TransactionType::Expense,
                amount: 300.0,
                tag: Tag::Expense(ExpenseTag::Aluguel),
                date: date!(2024 - 01 - 02),
                description: "Aluguel de janeiro".to_owned(),
            },
            &connection,
        )
        .unwrap();
    }

    #[track_caller]
    fn assert_chart_exists(html: &Html, chart_id: &str) {
        let selector = Selector::parse(&format!("#{}", chart_id)).unwrap();
        assert!(
            html.select(&selector).next().is_some(),
            "Chart with id '{}' not found",
            chart_id
        );
    }

    #[tokio::test]
    async fn dashboard_page_loads_successfully() {
        let state = get_test_state();
        seed_data(&state);

        let response = get_dashboard_page(State(state)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        assert_chart_exists(&html, "cash-flow-chart");
        assert_chart_exists(&html, "income-vs-expenses-chart");
        assert_chart_exists(&html, "distribution-chart");
        assert_chart_exists(&html, "expenses-by-tag-chart");
        assert_chart_exists(&html, "recent-transactions-chart");

        let rendered = html.html();
        assert!(rendered.contains("Receitas Totais"));
        assert!(rendered.contains("R$1,000.00"));
        assert!(rendered.contains("Despesas Totais"));
        assert!(rendered.contains("R$300.00"));
        assert!(rendered.contains("Saldo"));
        assert!(rendered.contains("R$700.00"));
    }

    #[tokio::test]
    async fn displays_prompt_text_on_no_data() {
        let state = get_test_state();

        let response = get_dashboard_page(State(state)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html_document(response).await;
        assert!(html.html().contains("Nada por aqui ainda..."));
    }

    #[tokio::test]
    async fn shows_goal_progress_capped_at_target() {
        let state = get_test_state();
        seed_data(&state);
        {
            let connection = state.db_connection.lock().unwrap();
            create_goal(
                GoalDraft {
                    name: "Viagem".to_owned(),
                    target_amount: 500.0,
                    tag: IncomeTag::Salario,
                },
                &connection,
            )
            .unwrap();
        }

        let response = get_dashboard_page(State(state)).await.unwrap();
        let html = parse_html_document(response).await;

        let progress_selector = Selector::parse("[role=progressbar]").unwrap();
        let progress = html.select(&progress_selector).next().unwrap();
        assert_eq!(progress.value().attr("aria-valuenow"), Some("100"));
        assert!(html.html().contains("R$500.00 / R$500.00"));
    }
}
