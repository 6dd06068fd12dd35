//! ixora-stylist: personal styling assistant over a hosted generative model,
//! with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
