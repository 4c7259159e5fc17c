// Domain layer: people, courses and departments plus the Person capability trait.

pub mod model;
pub mod person;
pub mod ports;
