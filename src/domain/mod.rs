// Domain layer: revision model and the ports the adapter talks to.

pub mod model;
pub mod ports;
