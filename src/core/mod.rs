// src/core/mod.rs
pub mod engine;
pub mod grammar;
pub mod scale;
pub mod types;
