//! sea-orm entities for the scheduling service tables.

pub mod agendamento;
pub mod cliente;
pub mod pet;
pub mod usuario;
