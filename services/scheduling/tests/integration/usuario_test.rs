use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use vetclinic_testing::fixture;

use crate::helpers::{assert_error, create, test_server};

#[tokio::test]
async fn should_ignore_delete_of_missing_usuario() {
    let server = test_server().await;
    server
        .delete("/api/usuarios/999")
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn should_stamp_registration_time_when_absent() {
    let server = test_server().await;
    let before = Utc::now();
    let response = server
        .post("/api/usuarios")
        .json(&fixture::usuario("Dr. X"))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["usuarioTipo"], "VETERINARIO");
    let stamped: DateTime<Utc> = body["dataCadastro"].as_str().unwrap().parse().unwrap();
    assert!(stamped >= before - chrono::Duration::seconds(1));
}

#[tokio::test]
async fn should_accept_legacy_timestamp_layout() {
    let server = test_server().await;
    let body = fixture::with(
        fixture::usuario("Dr. X"),
        "dataCadastro",
        json!("2024-01-01 09:00:00"),
    );
    let response = server.post("/api/usuarios").json(&body).await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.json::<Value>()["dataCadastro"],
        "2024-01-01T09:00:00.000Z"
    );
}

#[tokio::test]
async fn should_keep_registration_time_on_update() {
    let server = test_server().await;
    let body = fixture::with(
        fixture::usuario("Dr. X"),
        "dataCadastro",
        json!("2024-01-01T09:00:00Z"),
    );
    let id = create(&server, "usuarios", body).await;

    let update = json!({"id": id, "nome": "Dra. Y", "usuarioTipo": "ADMINISTRADOR"});
    let response = server.put("/api/usuarios").json(&update).await;
    response.assert_status(StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["nome"], "Dra. Y");
    assert_eq!(body["usuarioTipo"], "ADMINISTRADOR");
    assert_eq!(body["dataCadastro"], "2024-01-01T09:00:00.000Z");
}

#[tokio::test]
async fn should_report_update_of_unknown_usuario() {
    let server = test_server().await;
    let response = server
        .put("/api/usuarios")
        .json(&json!({"id": 5, "nome": "Dr. X"}))
        .await;
    assert_error(&response, StatusCode::NOT_FOUND, "USUARIO_NOT_FOUND");
}

#[tokio::test]
async fn should_reject_unknown_usuario_tipo() {
    let server = test_server().await;
    let body = fixture::with(fixture::usuario("Dr. X"), "usuarioTipo", json!("GERENTE"));
    let response = server.post("/api/usuarios").json(&body).await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}
