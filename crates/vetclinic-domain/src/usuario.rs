//! Staff (usuario) domain types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Staff classification.
///
/// Wire and storage format: the upper-case variant name (e.g. `"VETERINARIO"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UsuarioTipo {
    Veterinario,
    Atendente,
    Administrador,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown usuario tipo: {0}")]
pub struct UnknownUsuarioTipo(pub String);

impl UsuarioTipo {
    pub const ALL: [Self; 3] = [Self::Veterinario, Self::Atendente, Self::Administrador];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Veterinario => "VETERINARIO",
            Self::Atendente => "ATENDENTE",
            Self::Administrador => "ADMINISTRADOR",
        }
    }
}

impl fmt::Display for UsuarioTipo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UsuarioTipo {
    type Err = UnknownUsuarioTipo;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tipo| tipo.as_str() == s)
            .ok_or_else(|| UnknownUsuarioTipo(s.to_owned()))
    }
}
