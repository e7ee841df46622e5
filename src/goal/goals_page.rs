//! The page listing savings goals with their derived progress.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints, goal_progress, percentage,
    goal::{core::Goal, db::get_all_goals},
    html::{
        BUTTON_DELETE_STYLE, CARD_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TAG_BADGE_STYLE, base,
        format_currency,
    },
    navigation::NavBar,
    transaction::db::get_all_transactions,
};

/// The state needed for the goals page.
#[derive(Debug, Clone)]
pub struct GoalsPageState {
    /// The database connection for managing goals and transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for GoalsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A goal paired with the progress derived from the transaction snapshot.
struct GoalWithProgress {
    goal: Goal,
    current_amount: f64,
    percent: f64,
}

/// Render the goals page.
pub async fn get_goals_page(State(state): State<GoalsPageState>) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let goals = get_all_goals(&connection)
        .inspect_err(|error| tracing::error!("could not get goals: {error}"))?;
    let transactions = get_all_transactions(&connection)
        .inspect_err(|error| tracing::error!("could not get transactions: {error}"))?;

    let goals_with_progress: Vec<GoalWithProgress> = goals
        .into_iter()
        .map(|goal| {
            let current_amount = goal_progress(&goal, &transactions);
            let percent = percentage(current_amount, goal.target_amount);

            GoalWithProgress {
                goal,
                current_amount,
                percent,
            }
        })
        .collect();

    Ok(goals_view(&goals_with_progress).into_response())
}

fn goals_view(goals: &[GoalWithProgress]) -> Markup {
    let nav_bar = NavBar::new(endpoints::GOALS_VIEW).into_html();

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="relative w-full max-w-screen-lg"
            {
                div class="flex justify-between flex-wrap items-end mb-4"
                {
                    h1 class="text-xl font-bold" { "Metas Financeiras" }

                    a href=(endpoints::NEW_GOAL_VIEW) class=(LINK_STYLE)
                    {
                        "Nova Meta"
                    }
                }

                @if goals.is_empty() {
                    (empty_view())
                } @else {
                    div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4"
                    {
                        @for goal in goals {
                            (goal_card(goal))
                        }
                    }
                }
            }
        }
    );

    base("Metas", &[], &content)
}

fn goal_card(entry: &GoalWithProgress) -> Markup {
    let edit_url = endpoints::format_endpoint(endpoints::EDIT_GOAL_VIEW, entry.goal.id);
    let delete_url = endpoints::format_endpoint(endpoints::GOAL, entry.goal.id);

    html!(
        div class={"goal-card " (CARD_STYLE)}
        {
            div class="flex items-center justify-between mb-4"
            {
                h3 class="font-semibold" { (entry.goal.name) }

                div class="flex items-center gap-4"
                {
                    a href=(edit_url) class=(LINK_STYLE) { "Editar" }

                    button
                        hx-delete=(delete_url)
                        hx-confirm={
                            "Tem certeza? Você não poderá recuperar a meta '"
                            (entry.goal.name) "' excluída."
                        }
                        hx-target="closest .goal-card"
                        hx-target-error="#alert-container"
                        hx-swap="delete"
                        class=(BUTTON_DELETE_STYLE)
                    {
                        "Excluir"
                    }
                }
            }

            p class="text-sm text-gray-600 dark:text-gray-400 mb-1" { "Progresso" }

            p class="font-medium mb-2"
            {
                (format_currency(entry.current_amount))
                " / "
                (format_currency(entry.goal.target_amount))
            }

            (progress_bar(entry.percent))

            p class="text-sm text-gray-600 dark:text-gray-400 mt-2"
            {
                "Tag: "
                span class=(TAG_BADGE_STYLE) { (entry.goal.tag) }
            }
        }
    )
}

/// Renders a horizontal progress bar for a percentage in `0..=100`.
fn progress_bar(percent: f64) -> Markup {
    let clamped = percent.clamp(0.0, 100.0);
    let label = format!("{:.0}%", clamped);

    html! {
        div
            class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-2.5"
            role="progressbar"
            aria-valuenow=(format!("{:.0}", clamped))
            aria-valuemin="0"
            aria-valuemax="100"
        {
            @if clamped > 0.0 {
                div
                    class="bg-blue-600 dark:bg-blue-500 h-2.5 rounded-full transition-all"
                    style=(format!("width: {:.1}%", clamped))
                {}
            }
        }

        p class="text-sm font-semibold text-blue-600 dark:text-blue-400 mt-1" { (label) }
    }
}

fn empty_view() -> Markup {
    html!(
        div class="flex flex-col items-center py-8 text-center text-gray-900 dark:text-white"
        {
            p class="text-lg font-semibold mb-2" { "Defina suas metas financeiras!" }

            p class="text-gray-600 dark:text-gray-400"
            {
                "Clique em \"Nova Meta\" para começar a planejar seu futuro financeiro."
            }
        }
    )
}
