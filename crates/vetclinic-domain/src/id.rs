//! Newtype wrappers for surrogate keys.
//!
//! Every record is keyed by a database-assigned `i64`. The wrappers keep a
//! `PetId` from being passed where a `UsuarioId` is expected; on the wire they
//! serialize as the bare number.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! surrogate_key {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub i64);

        impl $name {
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

surrogate_key!(
    /// Identifies a customer (pet owner).
    ClienteId
);

surrogate_key!(
    /// Identifies a pet.
    PetId
);

surrogate_key!(
    /// Identifies a staff member.
    UsuarioId
);

surrogate_key!(
    /// Identifies an appointment.
    AgendamentoId
);
