pub mod commands;
pub mod deck;
pub mod quiz;
pub mod trace_init;
