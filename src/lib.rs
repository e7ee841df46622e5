//! FinancePro is a web app for recording personal income and expenses and
//! tracking savings goals.
//!
//! This library provides an HTTP server that directly serves HTML pages: a
//! marketing landing page, a dashboard with charts built from the recorded
//! transactions, and htmx-driven forms for managing transactions and goals.
//! All derived values (totals, chart series, goal progress) are recomputed
//! from the stored transactions on every read; see [total_by_type],
//! [goal_progress] and [percentage] for the aggregation core.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod dashboard;
mod database_id;
mod db;
mod endpoints;
mod goal;
mod html;
mod internal_server_error;
mod landing;
mod logging;
mod navigation;
mod not_found;
mod routing;
mod tag;
#[cfg(test)]
mod test_utils;
mod timezone;
mod transaction;
mod validation;

pub use app_state::AppState;
pub use dashboard::{goal_progress, percentage, total_by_type};
pub use db::initialize as initialize_db;
pub use goal::Goal;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use tag::{ExpenseTag, IncomeTag, Tag};
pub use transaction::{Transaction, TransactionType};
pub use validation::{FieldError, ValidationErrors};

use crate::{
    alert::Alert,
    internal_server_error::{InternalServerErrorPage, render_internal_server_error},
    not_found::get_404_not_found_response,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A form submission failed validation.
    ///
    /// Carries one message per invalid field. The store is left unchanged;
    /// endpoints re-render the form with the messages inline.
    #[error("invalid form submission: {0}")]
    Validation(#[from] ValidationErrors),

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// Tried to update a transaction that does not exist
    #[error("tried to update a transaction that is not in the database")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction that does not exist
    #[error("tried to delete a transaction that is not in the database")]
    DeleteMissingTransaction,

    /// Tried to update a goal that does not exist
    #[error("tried to update a goal that is not in the database")]
    UpdateMissingGoal,

    /// Tried to delete a goal that does not exist
    #[error("tried to delete a goal that is not in the database")]
    DeleteMissingGoal,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                render_internal_server_error(InternalServerErrorPage::default())
            }
        }
    }
}

impl Error {
    fn into_alert_response(self) -> Response {
        match self {
            Error::Validation(errors) => {
                let details = errors
                    .iter()
                    .map(|error| error.message)
                    .collect::<Vec<_>>()
                    .join(". ");

                Alert::error("Preencha todos os campos corretamente.", &details)
                    .into_response(StatusCode::BAD_REQUEST)
            }
            Error::UpdateMissingTransaction => Alert::error(
                "Não foi possível atualizar a transação",
                "A transação não foi encontrada.",
            )
            .into_response(StatusCode::NOT_FOUND),
            Error::DeleteMissingTransaction => Alert::error(
                "Não foi possível excluir a transação",
                "A transação não foi encontrada. \
                Atualize a página para ver se ela já foi excluída.",
            )
            .into_response(StatusCode::NOT_FOUND),
            Error::UpdateMissingGoal => Alert::error(
                "Não foi possível atualizar a meta",
                "A meta não foi encontrada.",
            )
            .into_response(StatusCode::NOT_FOUND),
            Error::DeleteMissingGoal => Alert::error(
                "Não foi possível excluir a meta",
                "A meta não foi encontrada. \
                Atualize a página para ver se ela já foi excluída.",
            )
            .into_response(StatusCode::NOT_FOUND),
            _ => Alert::error(
                "Algo deu errado",
                "Ocorreu um erro inesperado, verifique os logs do servidor.",
            )
            .into_response(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}
