// Domain layer: the classpath model and the ports it is written against.

pub mod model;
pub mod ports;
