//! cirrus CLI library
//!
//! Exposes the invocation pipeline (registry, dispatcher, binder, renderer,
//! transport) for integration testing. The binary entry point is in main.rs.

pub mod api;
pub mod auth;
pub mod binder;
pub mod commands;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod plugin;
pub mod registry;
pub mod render;

/// Name of the installed binary
pub const BIN_NAME: &str = "cirrus";
