//! Host-facing bindings for the Pali script viewer.
//!
//! Conversion and search live in `pali-core`; the stateful session in
//! `pali-session`. This crate exports them through UniFFI.

uniffi::setup_scaffolding!();

pub mod api;
mod trace_init;
