//! Components

pub mod errors;
pub mod map;
pub mod provider;
mod registry;

pub use errors::ComponentResolutionError;
pub use map::*;
pub use provider::*;
pub use registry::ComponentRegistry;
