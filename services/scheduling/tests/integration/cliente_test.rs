use axum::http::StatusCode;
use serde_json::{Value, json};

use vetclinic_testing::fixture;

use crate::helpers::{ALERT_HEADER, PARAMS_HEADER, assert_error, create, header, test_server};

#[tokio::test]
async fn should_create_cliente_with_location_and_alert() {
    let server = test_server().await;
    let response = server
        .post("/api/clientes")
        .json(&fixture::cliente("Ana"))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(header(&response, "location"), "/api/clientes/1");
    assert_eq!(
        header(&response, ALERT_HEADER),
        "A new cliente is created with identifier 1"
    );
    assert_eq!(header(&response, PARAMS_HEADER), "1");

    let body = response.json::<Value>();
    assert_eq!(body["id"], 1);
    assert_eq!(body["nome"], "Ana");
    assert_eq!(body["email"], "ana@example.com");
    assert_eq!(body["cpf"], "123.456.789-00");
}

#[tokio::test]
async fn should_assign_distinct_ids() {
    let server = test_server().await;
    let first = create(&server, "clientes", fixture::cliente("Ana")).await;
    let second = create(&server, "clientes", fixture::cliente("Bia")).await;
    assert_ne!(first, second);

    let fetched = server.get(&format!("/api/clientes/{second}")).await;
    fetched.assert_status(StatusCode::OK);
    assert_eq!(fetched.json::<Value>()["nome"], "Bia");
}

#[tokio::test]
async fn should_accept_cliente_with_only_absent_fields() {
    let server = test_server().await;
    let response = server.post("/api/clientes").json(&json!({})).await;
    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["nome"], Value::Null);
    assert_eq!(body["telefone"], Value::Null);
}

#[tokio::test]
async fn should_reject_create_with_id() {
    let server = test_server().await;
    let body = fixture::with(fixture::cliente("Ana"), "id", json!(5));
    let response = server.post("/api/clientes").json(&body).await;
    assert_error(&response, StatusCode::BAD_REQUEST, "ID_EXISTS");

    let all = server.get("/api/clientes").await.json::<Vec<Value>>();
    assert!(all.is_empty());
}

#[tokio::test]
async fn should_reject_update_without_id() {
    let server = test_server().await;
    let response = server
        .put("/api/clientes")
        .json(&fixture::cliente("Ana"))
        .await;
    assert_error(&response, StatusCode::BAD_REQUEST, "ID_NULL");
}

#[tokio::test]
async fn should_not_insert_on_update_of_unknown_id() {
    let server = test_server().await;
    let body = fixture::with(fixture::cliente("Ana"), "id", json!(42));
    let response = server.put("/api/clientes").json(&body).await;
    assert_error(&response, StatusCode::NOT_FOUND, "CLIENTE_NOT_FOUND");

    let all = server.get("/api/clientes").await.json::<Vec<Value>>();
    assert!(all.is_empty());
}

#[tokio::test]
async fn should_update_cliente_and_resave_idempotently() {
    let server = test_server().await;
    let id = create(&server, "clientes", fixture::cliente("Ana")).await;

    let changed = fixture::with(
        fixture::with(fixture::cliente("Ana"), "id", json!(id)),
        "nome",
        json!("Ana Maria"),
    );
    let response = server.put("/api/clientes").json(&changed).await;
    response.assert_status(StatusCode::OK);
    assert_eq!(
        header(&response, ALERT_HEADER),
        format!("A cliente is updated with identifier {id}")
    );
    let updated = response.json::<Value>();
    assert_eq!(updated["nome"], "Ana Maria");

    let again = server.put("/api/clientes").json(&updated).await;
    again.assert_status(StatusCode::OK);
    assert_eq!(again.json::<Value>(), updated);

    let all = server.get("/api/clientes").await.json::<Vec<Value>>();
    assert_eq!(all, vec![updated]);
}

#[tokio::test]
async fn should_delete_then_report_not_found() {
    let server = test_server().await;
    let id = create(&server, "clientes", fixture::cliente("Ana")).await;

    let response = server.delete(&format!("/api/clientes/{id}")).await;
    response.assert_status(StatusCode::NO_CONTENT);
    assert_eq!(
        header(&response, ALERT_HEADER),
        format!("A cliente is deleted with identifier {id}")
    );

    let response = server.get(&format!("/api/clientes/{id}")).await;
    assert_error(&response, StatusCode::NOT_FOUND, "CLIENTE_NOT_FOUND");

    server
        .delete(&format!("/api/clientes/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn should_refuse_to_delete_cliente_that_owns_pets() {
    let server = test_server().await;
    let cliente = create(&server, "clientes", fixture::cliente("Ana")).await;
    create(&server, "pets", fixture::pet("Rex", cliente)).await;

    let response = server.delete(&format!("/api/clientes/{cliente}")).await;
    assert_error(&response, StatusCode::BAD_REQUEST, "STILL_REFERENCED");

    server
        .get(&format!("/api/clientes/{cliente}"))
        .await
        .assert_status(StatusCode::OK);
}

#[tokio::test]
async fn should_list_pets_and_agendamentos_of_cliente() {
    let server = test_server().await;
    let ana = create(&server, "clientes", fixture::cliente("Ana")).await;
    let bia = create(&server, "clientes", fixture::cliente("Bia")).await;
    let rex = create(&server, "pets", fixture::pet("Rex", ana)).await;
    let tom = create(&server, "pets", fixture::pet("Tom", ana)).await;
    create(&server, "pets", fixture::pet("Mia", bia)).await;
    let dr = create(&server, "usuarios", fixture::usuario("Dr. X")).await;
    let agendamento = create(
        &server,
        "agendamentos",
        fixture::agendamento("2024-01-01T10:00:00Z", ana, rex, dr),
    )
    .await;

    let pets = server
        .get(&format!("/api/clientes/{ana}/pets"))
        .await
        .json::<Vec<Value>>();
    let pet_ids: Vec<i64> = pets.iter().map(|p| p["id"].as_i64().unwrap()).collect();
    assert_eq!(pet_ids, vec![rex, tom]);

    let agendamentos = server
        .get(&format!("/api/clientes/{ana}/agendamentos"))
        .await
        .json::<Vec<Value>>();
    assert_eq!(agendamentos.len(), 1);
    assert_eq!(agendamentos[0]["id"], agendamento);

    let none = server
        .get(&format!("/api/clientes/{bia}/agendamentos"))
        .await
        .json::<Vec<Value>>();
    assert!(none.is_empty());

    let response = server.get("/api/clientes/999/pets").await;
    assert_error(&response, StatusCode::NOT_FOUND, "CLIENTE_NOT_FOUND");
}
