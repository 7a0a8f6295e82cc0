// Domain layer: core models and ports (interfaces). No HTTP or provider
// details here.

pub mod model;
pub mod ports;
