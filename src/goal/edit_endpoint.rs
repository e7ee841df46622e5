//! Defines the endpoint for updating an existing savings goal.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    database_id::GoalId,
    goal::{
        core::{GoalDraft, GoalFormData},
        db::update_goal,
        edit_page::edit_goal_form_view,
        form::GoalFormDefaults,
    },
};

/// The state needed to update a goal.
#[derive(Debug, Clone)]
pub struct UpdateGoalState {
    /// The database connection for managing goals.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for UpdateGoalState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for updating the goal `goal_id`.
///
/// Redirects to the goals view on success. A submission that fails validation
/// re-renders the edit form and leaves the stored goal untouched.
pub async fn update_goal_endpoint(
    State(state): State<UpdateGoalState>,
    Path(goal_id): Path<GoalId>,
    Form(form): Form<GoalFormData>,
) -> Response {
    let draft = match GoalDraft::parse(&form) {
        Ok(draft) => draft,
        Err(errors) => {
            return edit_goal_form_view(goal_id, &GoalFormDefaults::from_form(&form), &errors)
                .into_response();
        }
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    if let Err(error) = update_goal(goal_id, draft, &connection) {
        tracing::error!("could not update goal {goal_id}: {error}");

        return error.into_alert_response();
    }

    (
        HxRedirect(endpoints::GOALS_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
