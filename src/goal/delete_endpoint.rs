//! Defines the endpoint for deleting a savings goal.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::Response,
};
use rusqlite::Connection;

use crate::{AppState, Error, alert::Alert, database_id::GoalId, goal::db::delete_goal};

/// The state needed to delete a goal.
#[derive(Debug, Clone)]
pub struct DeleteGoalState {
    /// The database connection for managing goals.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteGoalState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for deleting the goal `goal_id`.
///
/// Returns an empty 200 response on success so htmx removes the goal card,
/// and an alert fragment when the goal no longer exists.
pub async fn delete_goal_endpoint(
    State(state): State<DeleteGoalState>,
    Path(goal_id): Path<GoalId>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match delete_goal(goal_id, &connection) {
        // The status code has to be 200 OK or htmx will not delete the card.
        Ok(()) => Alert::success("Meta excluída com sucesso!", "").into_response(StatusCode::OK),
        Err(error) => {
            tracing::error!("could not delete goal {goal_id}: {error}");
            error.into_alert_response()
        }
    }
}
