// src/infrastructure/mod.rs
pub mod console;
pub mod time;
