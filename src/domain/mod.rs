// Domain layer: the greeted value, the success marker and the output port.

pub mod model;
pub mod ports;
