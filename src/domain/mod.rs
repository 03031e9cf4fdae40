// Domain layer: puzzle and report models plus the ports the runner is written against.

pub mod model;
pub mod ports;
