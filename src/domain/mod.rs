// Domain layer: value types and the capability traits (ports) the core depends on.
// Host facilities (serial devices, process spawning) live behind these traits.

pub mod model;
pub mod ports;
