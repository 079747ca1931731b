//! Export - token sets as CSS, SCSS, Tailwind and JS artifacts plus a guide
//!
//! Every emitted token passes the allow-list check first, so an export only
//! ever contains tokens that are in the system.
//!
//! # Module Structure
//!
//! - `css` / `scss` / `tailwind` / `javascript` - one text artifact each
//! - `guide` - the markdown implementation guide
//! - `package` - the zip bundle of all of the above

mod css;
mod guide;
mod javascript;
mod package;
mod scss;
mod tailwind;

pub use css::export_to_css;
pub use guide::generate_guide;
pub use javascript::export_to_javascript;
pub use package::{create_export_package, export_file_name, write_export_package, EXPORT_FILES};
pub use scss::export_to_scss;
pub use tailwind::export_to_tailwind;

use crate::designs::{is_token_allowed, DesignSystem, TokenScale, TokenValue};

/// Entries of `scale` that the system's allow-list permits, in document order
fn allowed_entries<'a>(
    system: &'a DesignSystem,
    scale: &'a TokenScale,
    category: &'a str,
    subcategory: Option<&'a str>,
) -> impl Iterator<Item = (&'a String, &'a TokenValue)> + 'a {
    let allowed = system.allowed_tokens.as_ref();
    scale
        .iter()
        .filter(move |(key, _)| is_token_allowed(allowed, category, subcategory, key))
}

/// Single-quoted JS string literal
fn js_string(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Numbers stay bare, strings are quoted, other JSON leaves keep their JSON text
fn js_value(value: &TokenValue) -> String {
    match value {
        TokenValue::Number(n) => n.to_string(),
        TokenValue::Text(s) => js_string(s),
        TokenValue::Other(v) => v.to_string(),
    }
}

/// Bare identifier when possible, quoted otherwise (`'500'`, `'2xl'`)
fn js_key(key: &str) -> String {
    let mut chars = key.chars();
    let is_ident = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if is_ident {
        key.to_string()
    } else {
        js_string(key)
    }
}

/// `name: { key: value, ... },` at the given indent, allowed entries only
fn push_js_block(
    out: &mut String,
    indent: &str,
    name: &str,
    system: &DesignSystem,
    scale: &TokenScale,
    category: &str,
    subcategory: Option<&str>,
) {
    out.push_str(&format!("{}{}: {{\n", indent, name));
    for (key, value) in allowed_entries(system, scale, category, subcategory) {
        out.push_str(&format!("{}  {}: {},\n", indent, js_key(key), js_value(value)));
    }
    out.push_str(&format!("{}}},\n", indent));
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
