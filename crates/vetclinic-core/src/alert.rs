//! Entity alert headers.
//!
//! Mutating endpoints tell the client what happened through two headers:
//! `x-{app}-alert` carries a human readable message and `x-{app}-params` the
//! identifier of the affected record.

use std::fmt::Display;

use axum::http::{HeaderMap, HeaderName, HeaderValue};

#[derive(Debug, Clone)]
pub struct EntityAlert {
    alert: HeaderName,
    params: HeaderName,
}

impl EntityAlert {
    /// Returns `None` when `application_name` cannot be used inside a header name.
    pub fn new(application_name: &str) -> Option<Self> {
        let alert = HeaderName::from_bytes(format!("x-{application_name}-alert").as_bytes()).ok()?;
        let params =
            HeaderName::from_bytes(format!("x-{application_name}-params").as_bytes()).ok()?;
        Some(Self { alert, params })
    }

    pub fn created(&self, entity: &str, id: impl Display) -> HeaderMap {
        self.headers(format!("A new {entity} is created with identifier {id}"), id)
    }

    pub fn updated(&self, entity: &str, id: impl Display) -> HeaderMap {
        self.headers(format!("A {entity} is updated with identifier {id}"), id)
    }

    pub fn deleted(&self, entity: &str, id: impl Display) -> HeaderMap {
        self.headers(format!("A {entity} is deleted with identifier {id}"), id)
    }

    fn headers(&self, message: String, id: impl Display) -> HeaderMap {
        let mut map = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&message) {
            map.insert(self.alert.clone(), value);
        }
        if let Ok(value) = HeaderValue::from_str(&id.to_string()) {
            map.insert(self.params.clone(), value);
        }
        map
    }
}
