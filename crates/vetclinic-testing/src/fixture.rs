//! JSON request bodies for the scheduling endpoints.
//!
//! Keys are the wire names (camelCase); relationship slots are bare ids.

use serde_json::{Value, json};

pub fn cliente(nome: &str) -> Value {
    json!({
        "nome": nome,
        "email": format!("{}@example.com", nome.to_lowercase()),
        "endereco": "Rua das Flores, 10",
        "telefone": "11 99999-0000",
        "cpf": "123.456.789-00",
    })
}

pub fn pet(nome: &str, cliente: i64) -> Value {
    json!({
        "nome": nome,
        "especieAnimal": "cachorro",
        "raca": "vira-lata",
        "cliente": cliente,
    })
}

pub fn usuario(nome: &str) -> Value {
    json!({
        "nome": nome,
        "usuarioTipo": "VETERINARIO",
    })
}

pub fn agendamento(data: &str, cliente: i64, pet: i64, usuario: i64) -> Value {
    json!({
        "data": data,
        "cliente": cliente,
        "pet": pet,
        "usuario": usuario,
    })
}

/// Copy of `body` with `key` set to `value`.
pub fn with(mut body: Value, key: &str, value: Value) -> Value {
    if let Some(map) = body.as_object_mut() {
        map.insert(key.to_owned(), value);
    }
    body
}
