mod field;
mod particle;
mod stepper;
mod wave;

pub use field::{FieldState, QuantumField};
pub use particle::{EntangledPair, Particle};
pub use wave::Wave;
