//! End-to-end tests that exercise the app through its router.

use axum::http::StatusCode;
use axum_test::TestServer;
use rusqlite::Connection;
use serde::Serialize;

use financepro_rs::{AppState, build_router};

fn get_test_server() -> TestServer {
    let connection = Connection::open_in_memory().expect("Could not open database in memory.");
    let state = AppState::new(connection, "Etc/UTC").expect("Could not create app state.");

    TestServer::try_new(build_router(state)).expect("Could not create test server.")
}

#[derive(Serialize)]
struct TransactionForm<'a> {
    type_: &'a str,
    amount: &'a str,
    tag: &'a str,
    date: &'a str,
    description: &'a str,
}

#[derive(Serialize)]
struct GoalForm<'a> {
    name: &'a str,
    target_amount: &'a str,
    tag: &'a str,
}

#[tokio::test]
async fn landing_page_shows_the_product_name() {
    let server = get_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("FinancePro"));
    assert!(response.text().contains("Revolucione sua Gestão Financeira"));
}

#[tokio::test]
async fn dashboard_shows_prompt_without_data() {
    let server = get_test_server();

    let response = server.get("/painel").await;

    response.assert_status_ok();
    assert!(response.text().contains("Nada por aqui ainda..."));
}

#[tokio::test]
async fn created_transaction_appears_on_the_transactions_page() {
    let server = get_test_server();

    let response = server
        .post("/api/transacoes")
        .form(&TransactionForm {
            type_: "income",
            amount: "1000",
            tag: "Salário",
            date: "2024-01-01",
            description: "Pagamento mensal",
        })
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get("hx-redirect").unwrap(),
        "/transacoes"
    );

    let page = server.get("/transacoes").await;
    page.assert_status_ok();
    assert!(page.text().contains("Pagamento mensal"));
    assert!(page.text().contains("R$1,000.00"));
    assert!(page.text().contains("Salário"));
}

#[tokio::test]
async fn invalid_transaction_is_rejected_with_field_errors() {
    let server = get_test_server();

    let response = server
        .post("/api/transacoes")
        .form(&TransactionForm {
            type_: "income",
            amount: "-10",
            tag: "Salário",
            date: "2024-01-01",
            description: "",
        })
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Descrição é obrigatória"));
    assert!(response.text().contains("O valor deve ser positivo"));

    // The rejected submission must not have reached the store.
    let page = server.get("/transacoes").await;
    assert!(page.text().contains("Nenhuma transação registrada ainda."));
}

#[tokio::test]
async fn dashboard_aggregates_created_transactions() {
    let server = get_test_server();

    server
        .post("/api/transacoes")
        .form(&TransactionForm {
            type_: "income",
            amount: "1000",
            tag: "Salário",
            date: "2024-01-01",
            description: "Pagamento mensal",
        })
        .await
        .assert_status(StatusCode::SEE_OTHER);
    server
        .post("/api/transacoes")
        .form(&TransactionForm {
            type_: "expense",
            amount: "300",
            tag: "Aluguel",
            date: "2024-01-02",
            description: "Aluguel de janeiro",
        })
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let page = server.get("/painel").await;

    page.assert_status_ok();
    let text = page.text();
    assert!(text.contains("R$1,000.00"));
    assert!(text.contains("R$300.00"));
    assert!(text.contains("R$700.00"));
    assert!(text.contains("cash-flow-chart"));
    assert!(text.contains("distribution-chart"));
}

#[tokio::test]
async fn goal_progress_is_derived_and_capped() {
    let server = get_test_server();

    server
        .post("/api/metas")
        .form(&GoalForm {
            name: "Viagem",
            target_amount: "2000",
            tag: "Salário",
        })
        .await
        .assert_status(StatusCode::SEE_OTHER);

    // 2500 of tagged income against a 2000 target: progress must cap at 2000.
    server
        .post("/api/transacoes")
        .form(&TransactionForm {
            type_: "income",
            amount: "2500",
            tag: "Salário",
            date: "2024-01-01",
            description: "Pagamento mensal",
        })
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let page = server.get("/metas").await;

    page.assert_status_ok();
    let text = page.text();
    assert!(text.contains("Viagem"));
    assert!(text.contains("R$2,000.00 / R$2,000.00"));
    assert!(text.contains("100%"));
}

#[tokio::test]
async fn goal_with_zero_target_is_rejected() {
    let server = get_test_server();

    let response = server
        .post("/api/metas")
        .form(&GoalForm {
            name: "Viagem",
            target_amount: "0",
            tag: "Salário",
        })
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("O valor alvo deve ser positivo"));

    let page = server.get("/metas").await;
    assert!(page.text().contains("Defina suas metas financeiras!"));
}

#[tokio::test]
async fn deleting_a_transaction_removes_it() {
    let server = get_test_server();

    server
        .post("/api/transacoes")
        .form(&TransactionForm {
            type_: "expense",
            amount: "55",
            tag: "Lazer",
            date: "2024-03-10",
            description: "Cinema",
        })
        .await
        .assert_status(StatusCode::SEE_OTHER);

    server
        .delete("/api/transacoes/1")
        .await
        .assert_status_ok();

    let page = server.get("/transacoes").await;
    assert!(page.text().contains("Nenhuma transação registrada ainda."));

    server
        .delete("/api/transacoes/1")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_returns_404_page() {
    let server = get_test_server();

    let response = server.get("/nao-existe").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().contains("404"));
}
