//! Infrastructure adapters. Implement ports.
//!
//! Model service, photo capture, terminal UI. Map errors to DomainError.

pub mod ai;
pub mod capture;
pub mod ui;
