use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use vetclinic_core::health::{healthz, readiness};
use vetclinic_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    agendamento::{
        create_agendamento, delete_agendamento, get_agendamento, get_agendamentos,
        update_agendamento,
    },
    cliente::{
        create_cliente, delete_cliente, get_cliente, get_cliente_agendamentos, get_cliente_pets,
        get_clientes, update_cliente,
    },
    pet::{create_pet, delete_pet, get_pet, get_pets, update_pet},
    usuario::{create_usuario, delete_usuario, get_usuario, get_usuarios, update_usuario},
};
use crate::state::AppState;

/// `GET /readyz`: 200 while the database answers a ping, 503 otherwise.
async fn readyz(State(state): State<AppState>) -> StatusCode {
    readiness(state.db.ping().await)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Clientes
        .route(
            "/api/clientes",
            post(create_cliente).put(update_cliente).get(get_clientes),
        )
        .route("/api/clientes/{id}", get(get_cliente).delete(delete_cliente))
        .route("/api/clientes/{id}/pets", get(get_cliente_pets))
        .route(
            "/api/clientes/{id}/agendamentos",
            get(get_cliente_agendamentos),
        )
        // Pets
        .route("/api/pets", post(create_pet).put(update_pet).get(get_pets))
        .route("/api/pets/{id}", get(get_pet).delete(delete_pet))
        // Usuarios
        .route(
            "/api/usuarios",
            post(create_usuario).put(update_usuario).get(get_usuarios),
        )
        .route("/api/usuarios/{id}", get(get_usuario).delete(delete_usuario))
        // Agendamentos
        .route(
            "/api/agendamentos",
            post(create_agendamento)
                .put(update_agendamento)
                .get(get_agendamentos),
        )
        .route(
            "/api/agendamentos/{id}",
            get(get_agendamento).delete(delete_agendamento),
        )
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
