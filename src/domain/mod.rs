// Domain layer: core models and ports. Behaviour lives in `core`.

pub mod model;
pub mod ports;
