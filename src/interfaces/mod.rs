//! Adapters between the validation core and the outside world.

pub mod csv;
