// Domain layer: value types, ports, and the pure breed logic. No I/O here.

pub mod model;
pub mod ports;
pub mod services;
