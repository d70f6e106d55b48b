//! Theme Handlers

pub(crate) mod css;
pub(crate) mod get;
pub(crate) mod save;
