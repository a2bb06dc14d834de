//! webhook-relay: stateless webhook delivery relay
//!
//! A library for validating webhook delivery descriptions, performing the
//! described HTTP POST and translating the outcome into a caller response.

pub mod config;
pub mod relay;
pub mod server;
pub mod webhook;
