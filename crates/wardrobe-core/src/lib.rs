//! Core library for the Seasonal Wardrobe service.
//!
//! Everything here is independent of HTTP: the web crate wires these pieces
//! into axum handlers.

pub mod chat;
pub mod config;
pub mod error;
pub mod model;
pub mod outfit;
pub mod session;
pub mod tips;
pub mod weather;
