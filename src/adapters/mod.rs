//! Adapters - implementations of ports and the delivery surface.

pub mod ai;
pub mod http;
pub mod sentiment;
