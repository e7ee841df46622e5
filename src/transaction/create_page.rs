//! The page for recording a new transaction.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::OffsetDateTime;

use crate::{
    AppState, endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, base},
    navigation::NavBar,
    timezone::local_date_today,
    transaction::form::{
        TransactionFormDefaults, transaction_form_fields, transaction_form_script,
    },
    validation::ValidationErrors,
};

/// The state needed to render the new transaction page.
#[derive(Debug, Clone)]
pub struct NewTransactionPageState {
    /// The local timezone as a canonical timezone name, e.g. "America/Sao_Paulo".
    pub local_timezone: String,
}

impl FromRef<AppState> for NewTransactionPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Render the page for creating a transaction.
pub async fn get_new_transaction_page(
    State(state): State<NewTransactionPageState>,
) -> Response {
    let today = local_date_today(&state.local_timezone)
        .unwrap_or_else(|| OffsetDateTime::now_utc().date());

    let nav_bar = NavBar::new(endpoints::NEW_TRANSACTION_VIEW).into_html();
    let form = new_transaction_form_view(
        &TransactionFormDefaults::for_new(today),
        &ValidationErrors::new(),
    );

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold mb-4" { "Adicionar Transação" }
            (form)
        }
    };

    base("Nova Transação", &[transaction_form_script()], &content).into_response()
}

/// The creation form, re-rendered with messages when validation fails.
pub(super) fn new_transaction_form_view(
    defaults: &TransactionFormDefaults<'_>,
    errors: &ValidationErrors,
) -> Markup {
    html! {
        form
            data-transaction-form
            hx-post=(endpoints::TRANSACTIONS_API)
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            (transaction_form_fields(defaults, errors))

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Adicionar Transação" }
        }
    }
}
