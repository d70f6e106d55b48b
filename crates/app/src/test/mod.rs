pub mod components;
pub mod themes;

pub use context::TestContext;
