//! Defines the endpoint for creating a new savings goal.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    goal::{
        core::{GoalDraft, GoalFormData},
        create_page::new_goal_form_view,
        db::create_goal,
        form::GoalFormDefaults,
    },
};

/// The state needed to create a goal.
#[derive(Debug, Clone)]
pub struct CreateGoalState {
    /// The database connection for managing goals.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateGoalState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for creating a new savings goal.
///
/// Redirects to the goals view on success. A submission that fails validation
/// (including a zero target amount) re-renders the form with a message next
/// to each invalid field and leaves the store untouched.
pub async fn create_goal_endpoint(
    State(state): State<CreateGoalState>,
    Form(form): Form<GoalFormData>,
) -> Response {
    let draft = match GoalDraft::parse(&form) {
        Ok(draft) => draft,
        Err(errors) => {
            return new_goal_form_view(&GoalFormDefaults::from_form(&form), &errors)
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

    if let Err(error) = create_goal(draft, &connection) {
        tracing::error!("could not create goal: {error}");

        return error.into_alert_response();
    }

    (
        HxRedirect(endpoints::GOALS_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
