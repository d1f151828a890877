pub mod compose;
pub mod domain;

pub use compose::{compose, SineTerm, WaveSet, COMPONENT_TERMS};
pub use domain::{generate_domain, generate_from_spec, Domain};
