//! Contact form core.
//!
//! # Responsibility
//! - Validate form input per field, including honeypot bot detection.
//! - Orchestrate message submission through an external transport.
//!
//! # Invariants
//! - Invalid input is never handed to the transport.
//! - A tripped honeypot never produces a user-visible field error.
//! - Form contents are never written to logs.

pub mod service;
pub mod validation;
