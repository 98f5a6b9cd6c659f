// Domain layer: plain models and the output port. No I/O lives here.

pub mod model;
pub mod ports;
