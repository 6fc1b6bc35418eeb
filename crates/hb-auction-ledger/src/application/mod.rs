//! Application layer: service orchestration over the ports.

pub mod service;
