// Domain layer: animal model and the storage port.

pub mod model;
pub mod ports;
