pub mod agendamento;
pub mod crud;
pub mod pet;
pub mod usuario;
