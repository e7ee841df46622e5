//! Defines the route handler for the page that displays transactions as a table.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    html::{
        LINK_STYLE, BUTTON_DELETE_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TAG_BADGE_STYLE, base, format_currency, link,
    },
    navigation::NavBar,
    transaction::{
        core::{Transaction, TransactionType},
        db::get_all_transactions,
    },
};

/// The state needed for the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsPageState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for TransactionsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the transactions table page.
pub async fn get_transactions_page(
    State(state): State<TransactionsPageState>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let mut transactions = get_all_transactions(&connection)
        .inspect_err(|error| tracing::error!("could not get transactions: {error}"))?;

    // Newest first for display.
    transactions.reverse();

    Ok(transactions_view(&transactions).into_response())
}

fn transactions_view(transactions: &[Transaction]) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="relative w-full max-w-screen-lg"
            {
                div class="flex justify-between flex-wrap items-end mb-4"
                {
                    h1 class="text-xl font-bold" { "Transações" }

                    a href=(endpoints::NEW_TRANSACTION_VIEW) class=(LINK_STYLE)
                    {
                        "Nova Transação"
                    }
                }

                @if transactions.is_empty() {
                    (empty_view())
                } @else {
                    div class="overflow-x-auto rounded-lg shadow dark:bg-gray-800"
                    {
                        table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                        {
                            thead class=(TABLE_HEADER_STYLE)
                            {
                                tr
                                {
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Data" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Descrição" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Valor" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Tipo" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Tag" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Ações" }
                                }
                            }

                            tbody
                            {
                                @for transaction in transactions {
                                    (table_row(transaction))
                                }
                            }
                        }
                    }
                }
            }
        }
    );

    base("Transações", &[], &content)
}

fn table_row(transaction: &Transaction) -> Markup {
    let is_income = transaction.transaction_type == TransactionType::Income;
    let row_style = if is_income {
        "bg-green-50 border-b dark:bg-gray-800 dark:border-gray-700"
    } else {
        "bg-red-50 border-b dark:bg-gray-800 dark:border-gray-700"
    };
    let amount_style = if is_income {
        "text-green-600 dark:text-green-400"
    } else {
        "text-red-600 dark:text-red-400"
    };

    let edit_url =
        endpoints::format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, transaction.id);
    let delete_url = endpoints::format_endpoint(endpoints::TRANSACTION, transaction.id);

    html!(
        tr class=(row_style)
        {
            td class=(TABLE_CELL_STYLE) { (transaction.date) }

            td class={(TABLE_CELL_STYLE) " text-gray-900 dark:text-white"}
            {
                (transaction.description)
            }

            td class={(TABLE_CELL_STYLE) " " (amount_style)}
            {
                (format_currency(transaction.amount))
            }

            td class={(TABLE_CELL_STYLE) " font-bold " (amount_style)}
            {
                (transaction.transaction_type.label())
            }

            td class=(TABLE_CELL_STYLE)
            {
                span class=(TAG_BADGE_STYLE) { (transaction.tag) }
            }

            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4"
                {
                    a href=(edit_url) class=(LINK_STYLE) { "Editar" }

                    button
                        hx-delete=(delete_url)
                        hx-confirm={
                            "Tem certeza? Você não poderá recuperar a transação '"
                            (transaction.description) "'."
                        }
                        hx-target="closest tr"
                        hx-target-error="#alert-container"
                        hx-swap="delete"
                        class=(BUTTON_DELETE_STYLE)
                    {
                        "Excluir"
                    }
                }
            }
        }
    )
}

fn empty_view() -> Markup {
    let new_transaction_link = link(endpoints::NEW_TRANSACTION_VIEW, "aqui");

    html!(
        div class="flex flex-col items-center py-8 text-gray-900 dark:text-white"
        {
            h2 class="text-xl font-bold" { "Nenhuma transação registrada ainda." }

            p
            {
                "Clique " (new_transaction_link) " para adicionar sua primeira
                receita ou despesa."
            }
        }
    )
}
