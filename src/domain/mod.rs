// Domain layer: bounds, batch records and the config port.

pub mod model;
pub mod ports;
