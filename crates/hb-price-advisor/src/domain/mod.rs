//! Pure advisory logic: no ports, no IO.

pub mod errors;
pub mod fallback;
pub mod suggestion;
pub mod value_objects;
