//! Theme fixtures.

use serde_json::{Value, json};

/// A theme with only the required tokens.
pub fn minimal_theme_json() -> Value {
    json!({
        "colors": {
            "primary": { "r": 59, "g": 130, "b": 246 },
            "background": { "primary": { "r": 255, "g": 255, "b": 255 } },
            "text": { "primary": { "r": 17, "g": 24, "b": 39 } }
        },
        "typography": {
            "fontFamily": { "sans": "Inter, sans-serif" }
        },
        "spacing": {
            "xs": "0.25rem",
            "sm": "0.5rem",
            "md": "1rem",
            "lg": "1.5rem",
            "xl": "2rem"
        },
        "borderRadius": {
            "sm": "0.125rem",
            "md": "0.375rem",
            "lg": "0.5rem"
        }
    })
}

/// A theme with every optional token set.
pub fn full_theme_json() -> Value {
    json!({
        "colors": {
            "primary": { "r": 59, "g": 130, "b": 246 },
            "secondary": { "r": 100, "g": 116, "b": 139 },
            "accent": { "r": 236, "g": 72, "b": 153, "alpha": 0.9 },
            "success": { "r": 34, "g": 197, "b": 94 },
            "warning": { "r": 234, "g": 179, "b": 8 },
            "error": { "r": 239, "g": 68, "b": 68 },
            "background": {
                "primary": { "r": 255, "g": 255, "b": 255 },
                "secondary": { "r": 249, "g": 250, "b": 251 },
                "tertiary": { "r": 243, "g": 244, "b": 246 }
            },
            "text": {
                "primary": { "r": 17, "g": 24, "b": 39 },
                "secondary": { "r": 75, "g": 85, "b": 99 },
                "tertiary": { "r": 156, "g": 163, "b": 175 }
            },
            "border": { "r": 229, "g": 231, "b": 235 }
        },
        "typography": {
            "fontFamily": {
                "sans": "Inter, sans-serif",
                "mono": "JetBrains Mono, monospace",
                "serif": "Georgia, serif"
            },
            "heading": { "fontSize": "2rem", "fontWeight": 700 },
            "body": { "fontSize": "1rem", "fontWeight": "normal" }
        },
        "spacing": {
            "xs": "0.25rem",
            "sm": "0.5rem",
            "md": "1rem",
            "lg": "1.5rem",
            "xl": "2rem",
            "2xl": "3rem",
            "3xl": "4rem"
        },
        "borderRadius": {
            "sm": "0.125rem",
            "md": "0.375rem",
            "lg": "0.5rem",
            "full": "9999px"
        },
        "shadows": {
            "sm": "0 1px 2px 0 rgb(0 0 0 / 0.05)",
            "md": "0 4px 6px -1px rgb(0 0 0 / 0.1)",
            "lg": "0 10px 15px -3px rgb(0 0 0 / 0.1)",
            "xl": "0 20px 25px -5px rgb(0 0 0 / 0.1)"
        },
        "transitions": {
            "fast": "150ms",
            "base": "250ms",
            "slow": "400ms"
        }
    })
}
