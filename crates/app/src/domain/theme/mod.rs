//! Theme tokens and their CSS custom property form.

pub mod declarations;
pub mod schema;
pub mod surface;
pub mod tokens;

pub use declarations::{
    Declaration, parse_declaration_block, theme_to_style_tag, tokens_to_declaration_block,
};
pub use schema::ThemeConfigSchema;
pub use surface::{Headless, StyleMap, ThemeSurface, apply_to_document};
pub use tokens::*;
