//! Defines the endpoint for creating a new transaction.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    transaction::{
        core::{TransactionDraft, TransactionFormData},
        create_page::new_transaction_form_view,
        db::create_transaction,
        form::TransactionFormDefaults,
    },
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for creating a new transaction.
///
/// Redirects to the transactions view on success. A submission that fails
/// validation re-renders the form with a message next to each invalid field
/// and leaves the store untouched.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<TransactionFormData>,
) -> Response {
    let draft = match TransactionDraft::parse(&form) {
        Ok(draft) => draft,
        Err(errors) => {
            return new_transaction_form_view(
                &TransactionFormDefaults::from_form(&form),
                &errors,
            )
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

    if let Err(error) = create_transaction(draft, &connection) {
        tracing::error!("could not create transaction: {error}");

        return error.into_alert_response();
    }

    (
        HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use axum_extra::extract::Form;
    use rusqlite::Connection;

    use crate::{
        db::initialize,
        endpoints,
        tag::{IncomeTag, Tag},
        test_utils::{
            assert_field_error_message, assert_hx_redirect, assert_valid_html, must_get_form,
            parse_html_fragment,
        },
        transaction::{
            core::TransactionFormData,
            db::{count_transactions, get_transaction},
        },
    };

    use super::{CreateTransactionState, create_transaction_endpoint};

    fn get_test_state() -> CreateTransactionState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        CreateTransactionState {
            db_connection: Arc::new(Mutex::new(conn)),
        }
    }

    fn valid_form() -> TransactionFormData {
        TransactionFormData {
            type_: "income".to_owned(),
            amount: "1000".to_owned(),
            tag: "Salário".to_owned(),
            date: "2024-01-01".to_owned(),
            description: "Pagamento mensal".to_owned(),
        }
    }

    #[tokio::test]
    async fn can_create_transaction() {
        let state = get_test_state();

        let response = create_transaction_endpoint(State(state.clone()), Form(valid_form()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::TRANSACTIONS_VIEW);

        // The first transaction will have ID 1.
        let connection = state.db_connection.lock().unwrap();
        let transaction = get_transaction(1, &connection).unwrap();
        assert_eq!(transaction.amount, 1000.0);
        assert_eq!(transaction.tag, Tag::Income(IncomeTag::Salario));
        assert_eq!(transaction.description, "Pagamento mensal");
    }

    #[tokio::test]
    async fn rejects_invalid_form_and_leaves_store_unchanged() {
        let state = get_test_state();
        let form = TransactionFormData {
            description: "".to_owned(),
            amount: "-5".to_owned(),
            ..valid_form()
        };

        let response = create_transaction_endpoint(State(state.clone()), Form(form))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let form = must_get_form(&html);
        assert_field_error_message(&form, "Descrição é obrigatória");
        assert_field_error_message(&form, "O valor deve ser positivo");

        let connection = state.db_connection.lock().unwrap();
        assert_eq!(count_transactions(&connection), Ok(0));
    }

    #[tokio::test]
    async fn rejects_tag_from_the_wrong_set() {
        let state = get_test_state();
        let form = TransactionFormData {
            tag: "Aluguel".to_owned(),
            ..valid_form()
        };

        let response = create_transaction_endpoint(State(state.clone()), Form(form))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html_fragment(response).await;
        let form = must_get_form(&html);
        assert_field_error_message(&form, "Selecione uma categoria válida");

        let connection = state.db_connection.lock().unwrap();
        assert_eq!(count_transactions(&connection), Ok(0));
    }
}
