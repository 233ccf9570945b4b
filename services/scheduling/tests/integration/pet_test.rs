use axum::http::StatusCode;
use serde_json::{Value, json};

use vetclinic_testing::fixture;

use crate::helpers::{ALERT_HEADER, assert_error, create, header, test_server};

#[tokio::test]
async fn should_report_missing_pet() {
    let server = test_server().await;
    let response = server.get("/api/pets/999").await;
    assert_error(&response, StatusCode::NOT_FOUND, "PET_NOT_FOUND");
}

#[tokio::test]
async fn should_reject_non_numeric_pet_id() {
    let server = test_server().await;
    server
        .get("/api/pets/rex")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .delete("/api/pets/rex")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_create_pet_with_camel_case_fields() {
    let server = test_server().await;
    let cliente = create(&server, "clientes", fixture::cliente("Ana")).await;

    let response = server
        .post("/api/pets")
        .json(&fixture::pet("Rex", cliente))
        .await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(header(&response, "location"), "/api/pets/1");
    assert_eq!(
        header(&response, ALERT_HEADER),
        "A new pet is created with identifier 1"
    );
    let body = response.json::<Value>();
    assert_eq!(body["especieAnimal"], "cachorro");
    assert_eq!(body["raca"], "vira-lata");
    assert_eq!(body["cliente"], cliente);
}

#[tokio::test]
async fn should_create_pet_without_owner() {
    let server = test_server().await;
    let response = server.post("/api/pets").json(&json!({"nome": "Rex"})).await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["cliente"], Value::Null);
}

#[tokio::test]
async fn should_reject_pet_of_unknown_cliente() {
    let server = test_server().await;
    let response = server
        .post("/api/pets")
        .json(&fixture::pet("Rex", 77))
        .await;
    assert_error(&response, StatusCode::NOT_FOUND, "CLIENTE_NOT_FOUND");

    let all = server.get("/api/pets").await.json::<Vec<Value>>();
    assert!(all.is_empty());
}

#[tokio::test]
async fn should_move_pet_to_another_cliente() {
    let server = test_server().await;
    let ana = create(&server, "clientes", fixture::cliente("Ana")).await;
    let bia = create(&server, "clientes", fixture::cliente("Bia")).await;
    let rex = create(&server, "pets", fixture::pet("Rex", ana)).await;

    let body = fixture::with(fixture::pet("Rex", bia), "id", json!(rex));
    let response = server.put("/api/pets").json(&body).await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>()["cliente"], bia);

    let of_ana = server
        .get(&format!("/api/clientes/{ana}/pets"))
        .await
        .json::<Vec<Value>>();
    assert!(of_ana.is_empty());
}

#[tokio::test]
async fn should_refuse_to_delete_scheduled_pet() {
    let server = test_server().await;
    let cliente = create(&server, "clientes", fixture::cliente("Ana")).await;
    let pet = create(&server, "pets", fixture::pet("Rex", cliente)).await;
    let usuario = create(&server, "usuarios", fixture::usuario("Dr. X")).await;
    let agendamento = create(
        &server,
        "agendamentos",
        fixture::agendamento("2024-01-01T10:00:00Z", cliente, pet, usuario),
    )
    .await;

    let response = server.delete(&format!("/api/pets/{pet}")).await;
    assert_error(&response, StatusCode::BAD_REQUEST, "STILL_REFERENCED");

    server
        .delete(&format!("/api/agendamentos/{agendamento}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .delete(&format!("/api/pets/{pet}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);
}
