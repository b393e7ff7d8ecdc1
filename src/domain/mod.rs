// Domain layer: value objects and the dictionary boundary. No I/O here.

pub mod dictionary;
pub mod model;
pub mod ports;
