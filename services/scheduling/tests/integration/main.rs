
mod agendamento_test;
mod cliente_test;
mod pet_test;
mod usuario_test;
