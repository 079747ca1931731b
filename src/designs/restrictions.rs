//! Token restriction lookup
//!
//! Every lookup degrades to "allowed" when the allow-list is silent or shaped
//! unexpectedly. Only an explicit array can exclude a key.

use super::allowed::{AllowedTokens, Restriction};
use super::types::DesignSystem;
use crate::config::DEFAULT_RESTRICTION_CLASS;

/// Whether `key` is permitted in `category` (and optionally `subcategory`).
///
/// An empty subcategory is treated the same as none.
pub fn is_token_allowed(
    allowed: Option<&AllowedTokens>,
    category: &str,
    subcategory: Option<&str>,
    key: &str,
) -> bool {
    let Some(allowed) = allowed else {
        return true;
    };
    let Some(restriction) = allowed.category(category) else {
        return true;
    };
    let subcategory = subcategory.filter(|s| !s.is_empty());

    match (subcategory, restriction) {
        (Some(sub), Restriction::Nested(_)) => match restriction.subcategory_keys(sub) {
            Some(keys) => keys.contains(&key),
            None => true,
        },
        (_, Restriction::Keys(_)) => restriction
            .flat_keys()
            .is_some_and(|keys| keys.contains(&key)),
        _ => true,
    }
}

/// CSS class for a token that failed the allow-list check
pub fn restriction_class(is_allowed: bool) -> &'static str {
    if is_allowed {
        ""
    } else {
        DEFAULT_RESTRICTION_CLASS
    }
}

/// Whether the allow-list names `category` at all
pub fn has_category_restrictions(allowed: Option<&AllowedTokens>, category: &str) -> bool {
    allowed.is_some_and(|a| a.category(category).is_some())
}

/// Restriction view over one design system, used by the gallery and the CLI
#[derive(Debug, Clone, Copy)]
pub struct TokenRestrictions<'a> {
    allowed: Option<&'a AllowedTokens>,
    class: &'a str,
}

impl<'a> TokenRestrictions<'a> {
    pub fn new(system: &'a DesignSystem) -> Self {
        Self {
            allowed: system.allowed_tokens.as_ref(),
            class: DEFAULT_RESTRICTION_CLASS,
        }
    }

    /// Use a configured class name instead of `token-restricted`
    pub fn with_class(mut self, class: &'a str) -> Self {
        self.class = class;
        self
    }

    pub fn allowed_tokens(&self) -> Option<&'a AllowedTokens> {
        self.allowed
    }

    pub fn has_restrictions(&self) -> bool {
        self.allowed.is_some()
    }

    pub fn check_token(&self, category: &str, subcategory: Option<&str>, key: &str) -> bool {
        is_token_allowed(self.allowed, category, subcategory, key)
    }

    /// Restriction class for a token; always empty for systems without an allow-list
    pub fn token_class(&self, category: &str, subcategory: Option<&str>, key: &str) -> &'a str {
        if !self.has_restrictions() || self.check_token(category, subcategory, key) {
            ""
        } else {
            self.class
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn allow(value: serde_json::Value) -> AllowedTokens {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_no_allow_list_allows_everything() {
        for (category, sub, key) in [
            ("colors", Some("primary"), "500"),
            ("spacing", None, "xl"),
            ("unknown", Some(""), ""),
        ] {
            assert!(is_token_allowed(None, category, sub, key));
        }
    }

    #[test]
    fn test_unlisted_category_is_allowed() {
        let allowed = allow(json!({"spacing": ["sm"]}));
        assert!(is_token_allowed(Some(&allowed), "borderRadius", None, "full"));
    }

    #[test]
    fn test_flat_array_is_membership() {
        let allowed = allow(json!({"spacing": ["sm", "md"]}));
        assert!(is_token_allowed(Some(&allowed), "spacing", None, "sm"));
        assert!(is_token_allowed(Some(&allowed), "spacing", None, "md"));
        assert!(!is_token_allowed(Some(&allowed), "spacing", None, "lg"));
    }

    #[test]
    fn test_flat_array_ignores_subcategory() {
        let allowed = allow(json!({"spacing": ["sm"]}));
        assert!(is_token_allowed(Some(&allowed), "spacing", Some("x"), "sm"));
        assert!(!is_token_allowed(Some(&allowed), "spacing", Some("x"), "lg"));
    }

    #[test]
    fn test_mixed_type_array_is_membership() {
        let allowed = allow(json!({"spacing": ["sm", 1], "opacity": [true]}));
        assert!(is_token_allowed(Some(&allowed), "spacing", None, "sm"));
        assert!(!is_token_allowed(Some(&allowed), "spacing", None, "lg"));
        assert!(!is_token_allowed(Some(&allowed), "spacing", None, "1"));
        assert!(!is_token_allowed(Some(&allowed), "opacity", None, "disabled"));
    }

    #[test]
    fn test_empty_array_excludes_everything() {
        let allowed = allow(json!({"shadows": []}));
        assert!(!is_token_allowed(Some(&allowed), "shadows", None, "sm"));
    }

    #[test]
    fn test_nested_subcategory_membership() {
        let allowed = allow(json!({"colors": {"primary": ["500", "600"]}}));
        assert!(is_token_allowed(Some(&allowed), "colors", Some("primary"), "500"));
        assert!(!is_token_allowed(Some(&allowed), "colors", Some("primary"), "400"));
        // Subcategory without a restriction
        assert!(is_token_allowed(Some(&allowed), "colors", Some("neutral"), "400"));
    }

    #[test]
    fn test_non_array_shapes_default_to_allowed() {
        let allowed = allow(json!({
            "colors": {"primary": true},
            "grid": "12",
            "navigationPattern": "sidebar"
        }));
        assert!(is_token_allowed(Some(&allowed), "colors", Some("primary"), "500"));
        assert!(is_token_allowed(Some(&allowed), "grid", None, "columns"));
        // Nested category queried without a subcategory
        assert!(is_token_allowed(Some(&allowed), "colors", None, "500"));
        assert!(is_token_allowed(Some(&allowed), "colors", Some(""), "500"));
    }

    #[test]
    fn test_category_helpers() {
        let allowed = allow(json!({"spacing": ["sm"]}));
        assert!(has_category_restrictions(Some(&allowed), "spacing"));
        assert!(!has_category_restrictions(Some(&allowed), "colors"));
        assert!(!has_category_restrictions(None, "spacing"));
        assert_eq!(restriction_class(true), "");
        assert_eq!(restriction_class(false), "token-restricted");
    }
}
