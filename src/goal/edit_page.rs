//! The page for editing an existing savings goal.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    database_id::GoalId,
    goal::{
        db::get_goal,
        form::{GoalFormDefaults, goal_form_fields},
    },
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, base},
    navigation::NavBar,
    validation::ValidationErrors,
};

/// The state needed to render the edit goal page.
#[derive(Debug, Clone)]
pub struct EditGoalPageState {
    /// The database connection for managing goals.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for EditGoalPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the page for editing the goal `goal_id`.
pub async fn get_edit_goal_page(
    State(state): State<EditGoalPageState>,
    Path(goal_id): Path<GoalId>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let goal = get_goal(goal_id, &connection)?;

    let nav_bar = NavBar::new(endpoints::GOALS_VIEW).into_html();
    let form = edit_goal_form_view(
        goal_id,
        &GoalFormDefaults::from_goal(&goal),
        &ValidationErrors::new(),
    );

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold mb-4" { "Editar Meta Financeira" }
            (form)
        }
    };

    Ok(base("Editar Meta", &[], &content).into_response())
}

/// The edit form, re-rendered with messages when validation fails.
pub(super) fn edit_goal_form_view(
    goal_id: GoalId,
    defaults: &GoalFormDefaults<'_>,
    errors: &ValidationErrors,
) -> Markup {
    let update_endpoint = endpoints::format_endpoint(endpoints::GOAL, goal_id);

    html! {
        form
            hx-put=(update_endpoint)
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            (goal_form_fields(defaults, errors))

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Atualizar Meta" }
        }
    }
}
