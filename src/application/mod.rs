// src/application/mod.rs
pub mod checks;
pub mod dto;
pub mod error;
pub mod ports;

pub use error::ApplicationResult;
