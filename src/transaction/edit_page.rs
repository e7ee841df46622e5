//! The page for editing an existing transaction.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    database_id::TransactionId,
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, base},
    navigation::NavBar,
    transaction::{
        db::get_transaction,
        form::{TransactionFormDefaults, transaction_form_fields, transaction_form_script},
    },
    validation::ValidationErrors,
};

/// The state needed to render the edit transaction page.
#[derive(Debug, Clone)]
pub struct EditTransactionPageState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for EditTransactionPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the page for editing the transaction `transaction_id`.
pub async fn get_edit_transaction_page(
    State(state): State<EditTransactionPageState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let transaction = get_transaction(transaction_id, &connection)?;

    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();
    let form = edit_transaction_form_view(
        transaction_id,
        &TransactionFormDefaults::from_transaction(&transaction),
        &ValidationErrors::new(),
    );

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold mb-4" { "Editar Transação" }
            (form)
        }
    };

    Ok(base("Editar Transação", &[transaction_form_script()], &content).into_response())
}

/// The edit form, re-rendered with messages when validation fails.
pub(super) fn edit_transaction_form_view(
    transaction_id: TransactionId,
    defaults: &TransactionFormDefaults<'_>,
    errors: &ValidationErrors,
) -> Markup {
    let update_endpoint = endpoints::format_endpoint(endpoints::TRANSACTION, transaction_id);

    html! {
        form
            data-transaction-form
            hx-put=(update_endpoint)
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            (transaction_form_fields(defaults, errors))

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Salvar Alterações" }
        }
    }
}
