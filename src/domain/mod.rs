// Domain layer: models, ports and the pure normalize/summary steps.

pub mod model;
pub mod normalizer;
pub mod ports;
pub mod summary;
