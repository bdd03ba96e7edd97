//! Detection components

pub mod indicator;
pub mod sensor;
pub mod state;


pub use indicator::*;
pub use sensor::*;
pub use state::*;
