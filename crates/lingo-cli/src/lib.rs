pub mod commands;
pub mod input;
pub mod report;
pub mod trace_init;
