// Domain layer: models and the deployer port. No I/O here.

pub mod model;
pub mod ports;
