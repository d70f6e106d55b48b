//! Server actions: trusted, in-process entry points used by route handlers
//! and the CLI.

mod theme;

pub use theme::{SaveThemeFailure, SaveThemeResult, ThemeActions};
