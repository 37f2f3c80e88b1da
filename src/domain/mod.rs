//! Domain layer: value objects, pricing rules and the ports to external collaborators.

pub mod cart;
pub mod money;
pub mod order;
pub mod payment;
pub mod ports;
pub mod pricing;
