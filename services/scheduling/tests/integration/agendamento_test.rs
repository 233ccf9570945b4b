use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};

use vetclinic_testing::fixture;

use crate::helpers::{ALERT_HEADER, assert_error, create, header, test_server};

struct Clinic {
    cliente: i64,
    pets: [i64; 2],
    usuarios: [i64; 2],
}

async fn clinic(server: &TestServer) -> Clinic {
    let cliente = create(server, "clientes", fixture::cliente("Ana")).await;
    let rex = create(server, "pets", fixture::pet("Rex", cliente)).await;
    let tom = create(server, "pets", fixture::pet("Tom", cliente)).await;
    let dr_x = create(server, "usuarios", fixture::usuario("Dr. X")).await;
    let dr_y = create(server, "usuarios", fixture::usuario("Dr. Y")).await;
    Clinic {
        cliente,
        pets: [rex, tom],
        usuarios: [dr_x, dr_y],
    }
}

#[tokio::test]
async fn should_schedule_once_per_pet() {
    let server = test_server().await;
    let ana = create(&server, "clientes", json!({"nome": "Ana"})).await;
    let rex = create(&server, "pets", json!({"nome": "Rex", "cliente": ana})).await;
    let dr = create(&server, "usuarios", json!({"nome": "Dr. X"})).await;
    assert_eq!((ana, rex, dr), (1, 1, 1));

    let response = server
        .post("/api/agendamentos")
        .json(&fixture::agendamento("2024-01-01T10:00:00Z", ana, rex, dr))
        .await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(header(&response, "location"), "/api/agendamentos/1");
    assert_eq!(
        header(&response, ALERT_HEADER),
        "A new agendamento is created with identifier 1"
    );
    let body = response.json::<Value>();
    assert_eq!(
        body,
        json!({
            "id": 1,
            "data": "2024-01-01T10:00:00.000Z",
            "cliente": 1,
            "pet": 1,
            "usuario": 1,
        })
    );

    let other_dr = create(&server, "usuarios", json!({"nome": "Dr. Y"})).await;
    let response = server
        .post("/api/agendamentos")
        .json(&fixture::agendamento("2024-01-02T10:00:00Z", ana, rex, other_dr))
        .await;
    assert_error(&response, StatusCode::BAD_REQUEST, "PET_ALREADY_SCHEDULED");

    let all = server.get("/api/agendamentos").await.json::<Vec<Value>>();
    assert_eq!(all, vec![body]);
}

#[tokio::test]
async fn should_schedule_once_per_usuario() {
    let server = test_server().await;
    let c = clinic(&server).await;
    create(
        &server,
        "agendamentos",
        fixture::agendamento("2024-01-01T10:00:00Z", c.cliente, c.pets[0], c.usuarios[0]),
    )
    .await;

    let response = server
        .post("/api/agendamentos")
        .json(&fixture::agendamento(
            "2024-01-01T11:00:00Z",
            c.cliente,
            c.pets[1],
            c.usuarios[0],
        ))
        .await;
    assert_error(&response, StatusCode::BAD_REQUEST, "USUARIO_ALREADY_SCHEDULED");
}

#[tokio::test]
async fn should_report_missing_references() {
    let server = test_server().await;
    let c = clinic(&server).await;

    let response = server
        .post("/api/agendamentos")
        .json(&fixture::agendamento("2024-01-01T10:00:00Z", 99, c.pets[0], c.usuarios[0]))
        .await;
    assert_error(&response, StatusCode::NOT_FOUND, "CLIENTE_NOT_FOUND");

    let response = server
        .post("/api/agendamentos")
        .json(&fixture::agendamento("2024-01-01T10:00:00Z", c.cliente, 99, c.usuarios[0]))
        .await;
    assert_error(&response, StatusCode::NOT_FOUND, "PET_NOT_FOUND");

    let response = server
        .post("/api/agendamentos")
        .json(&fixture::agendamento("2024-01-01T10:00:00Z", c.cliente, c.pets[0], 99))
        .await;
    assert_error(&response, StatusCode::NOT_FOUND, "USUARIO_NOT_FOUND");
}

#[tokio::test]
async fn should_resave_and_reassign_agendamento() {
    let server = test_server().await;
    let c = clinic(&server).await;
    let id = create(
        &server,
        "agendamentos",
        fixture::agendamento("2024-01-01 10:00:00", c.cliente, c.pets[0], c.usuarios[0]),
    )
    .await;
    let stored = server
        .get(&format!("/api/agendamentos/{id}"))
        .await
        .json::<Value>();
    assert_eq!(stored["data"], "2024-01-01T10:00:00.000Z");

    let again = server.put("/api/agendamentos").json(&stored).await;
    again.assert_status(StatusCode::OK);
    assert_eq!(again.json::<Value>(), stored);

    let moved = fixture::with(stored.clone(), "pet", json!(c.pets[1]));
    let moved = fixture::with(moved, "usuario", json!(c.usuarios[1]));
    let response = server.put("/api/agendamentos").json(&moved).await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>()["pet"], c.pets[1]);

    let freed = server
        .post("/api/agendamentos")
        .json(&fixture::agendamento(
            "2024-01-03T10:00:00Z",
            c.cliente,
            c.pets[0],
            c.usuarios[0],
        ))
        .await;
    freed.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn should_not_insert_on_update_of_unknown_agendamento() {
    let server = test_server().await;
    let c = clinic(&server).await;
    let body = fixture::with(
        fixture::agendamento("2024-01-01T10:00:00Z", c.cliente, c.pets[0], c.usuarios[0]),
        "id",
        json!(7),
    );
    let response = server.put("/api/agendamentos").json(&body).await;
    assert_error(&response, StatusCode::NOT_FOUND, "AGENDAMENTO_NOT_FOUND");

    let all = server.get("/api/agendamentos").await.json::<Vec<Value>>();
    assert!(all.is_empty());
}

#[tokio::test]
async fn should_delete_agendamento_idempotently() {
    let server = test_server().await;
    let c = clinic(&server).await;
    let id = create(
        &server,
        "agendamentos",
        fixture::agendamento("2024-01-01T10:00:00Z", c.cliente, c.pets[0], c.usuarios[0]),
    )
    .await;

    for _ in 0..2 {
        server
            .delete(&format!("/api/agendamentos/{id}"))
            .await
            .assert_status(StatusCode::NO_CONTENT);
    }
    let response = server.get(&format!("/api/agendamentos/{id}")).await;
    assert_error(&response, StatusCode::NOT_FOUND, "AGENDAMENTO_NOT_FOUND");
}

#[tokio::test]
async fn should_refuse_to_move_agendamento_onto_booked_pet_or_usuario() {
    let server = test_server().await;
    let c = clinic(&server).await;
    create(
        &server,
        "agendamentos",
        fixture::agendamento("2024-01-01T10:00:00Z", c.cliente, c.pets[0], c.usuarios[0]),
    )
    .await;
    let second = create(
        &server,
        "agendamentos",
        fixture::agendamento("2024-01-02T10:00:00Z", c.cliente, c.pets[1], c.usuarios[1]),
    )
    .await;
    let stored = server
        .get(&format!("/api/agendamentos/{second}"))
        .await
        .json::<Value>();

    let onto_pet = fixture::with(stored.clone(), "pet", json!(c.pets[0]));
    let response = server.put("/api/agendamentos").json(&onto_pet).await;
    assert_error(&response, StatusCode::BAD_REQUEST, "PET_ALREADY_SCHEDULED");

    let onto_usuario = fixture::with(stored.clone(), "usuario", json!(c.usuarios[0]));
    let response = server.put("/api/agendamentos").json(&onto_usuario).await;
    assert_error(&response, StatusCode::BAD_REQUEST, "USUARIO_ALREADY_SCHEDULED");

    let unchanged = server
        .get(&format!("/api/agendamentos/{second}"))
        .await
        .json::<Value>();
    assert_eq!(unchanged, stored);
    assert_eq!(unchanged["pet"], c.pets[1]);
    assert_eq!(unchanged["usuario"], c.usuarios[1]);
}

#[tokio::test]
async fn should_refuse_to_delete_scheduled_usuario() {
    let server = test_server().await;
    let c = clinic(&server).await;
    create(
        &server,
        "agendamentos",
        fixture::agendamento("2024-01-01T10:00:00Z", c.cliente, c.pets[0], c.usuarios[0]),
    )
    .await;

    let response = server
        .delete(&format!("/api/usuarios/{}", c.usuarios[0]))
        .await;
    assert_error(&response, StatusCode::BAD_REQUEST, "STILL_REFERENCED");

    server
        .get(&format!("/api/usuarios/{}", c.usuarios[0]))
        .await
        .assert_status(StatusCode::OK);
}
