//! Application use cases. Orchestrate domain logic via ports.

pub mod stylist_service;

pub use stylist_service::{FALLBACK_CHAT_REPLY, StylistService};
