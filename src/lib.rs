// Re-export the core modules so hosts depend on one crate
pub use wucore::{error, model, render, store, view};

// Host-facing modules live here
pub mod config;
pub mod controller;
pub mod seed;
