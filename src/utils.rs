//! Shared string helpers for token names and values

use std::sync::OnceLock;

use regex::Regex;

fn uppercase() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([A-Z])").expect("Invalid regex"))
}

fn millis() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+ms").expect("Invalid regex"))
}

/// Convert a camelCase token key to kebab-case.
///
/// Every capital gets its own hyphen, so runs split letter by letter
/// (`fontXL` → `font-x-l`) and a leading capital yields a leading hyphen.
///
/// ```
/// use design_studio::utils::camel_to_kebab;
///
/// assert_eq!(camel_to_kebab("modalBackdrop"), "modal-backdrop");
/// assert_eq!(camel_to_kebab("ringWidth"), "ring-width");
/// assert_eq!(camel_to_kebab("md"), "md");
/// ```
pub fn camel_to_kebab(key: &str) -> String {
    uppercase().replace_all(key, "-$1").to_lowercase()
}

/// First `\d+ms` in a transition value, or the whole value when there is none.
///
/// `"250ms ease-in-out"` gives `"250ms"`; `"0.3s ease"` is returned unchanged.
pub fn extract_duration(value: &str) -> &str {
    millis()
        .find(value)
        .map(|m| m.as_str())
        .unwrap_or(value)
}
