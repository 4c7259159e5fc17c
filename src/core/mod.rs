pub mod enrollment;
pub mod gradebook;
pub mod showcase;
