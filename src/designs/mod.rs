//! Design System Module
//!
//! The token model and the pure functions that operate on it:
//! - `types` - DesignSystem / DesignTokens serde model
//! - `allowed` - optional per-system allow-lists
//! - `restrictions` - `is_token_allowed` and the restriction view
//! - `animation` - per-component, per-state animation resolution
//! - `loader` - reading `{id}.json` documents
//!
//! # Usage
//! ```ignore
//! use design_studio::designs::{is_token_allowed, load_design_systems};
//!
//! let systems = load_design_systems(&dir, &["material", "pliability"]);
//! let allowed = systems[0].allowed_tokens.as_ref();
//! let ok = is_token_allowed(allowed, "colors", Some("primary"), "500");
//! ```

pub mod allowed;
pub mod animation;
mod loader;
mod restrictions;
mod types;

pub use allowed::{AllowedTokens, Restriction};
pub use animation::{
    all_animation_classes, allowed_animation_types, animation_class_name, animation_style,
    is_valid_animation_intensity, is_valid_animation_type, merge_animation_config,
    resolve_animation, should_reduce_motion, AnimatedComponent, AnimationClasses,
    AnimationConfig, AnimationIntensity, AnimationOverride, AnimationType, Animations,
    ComponentAnimator, InteractionState,
};
pub use loader::{load_design_system, load_design_systems};
pub use restrictions::{
    has_category_restrictions, is_token_allowed, restriction_class, TokenRestrictions,
};
pub use types::{
    Borders, Colors, DesignSystem, DesignSystemMeta, DesignTokens, Elevation, Layout,
    Surfaces, SystemStatus, TokenScale, TokenValue, Typography,
};


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_token_restrictions_view() {
        let system = restricted_system();
        let view = TokenRestrictions::new(&system);
        assert!(view.has_restrictions());
        assert!(view.check_token("colors", Some("primary"), "500"));
        assert_eq!(view.token_class("colors", Some("primary"), "400"), "token-restricted");
        assert_eq!(view.token_class("colors", Some("primary"), "600"), "");
        assert_eq!(view.with_class("off-system").token_class("spacing", None, "lg"), "off-system");
    }

    #[test]
    fn test_unrestricted_view_never_marks() {
        let system = full_system();
        let view = TokenRestrictions::new(&system);
        assert!(!view.has_restrictions());
        assert_eq!(view.token_class("spacing", None, "anything"), "");
    }

    #[test]
    fn test_allowed_animation_types() {
        assert_eq!(
            allowed_animation_types(&restricted_system()),
            vec![AnimationType::Lift, AnimationType::Fade]
        );
        assert_eq!(
            allowed_animation_types(&full_system()).len(),
            AnimationType::all().len()
        );
    }

    #[test]
    fn test_status_and_display_name() {
        let system = restricted_system();
        assert_eq!(system.status, Some(SystemStatus::Experimental));
        assert_eq!(system.display_name(), "Restricted 🧪 Experimental");
        assert_eq!(full_system().display_name(), "Full");
        assert_eq!(system.meta().id, "restricted");
    }

    #[test]
    fn test_document_order_is_kept() {
        let system = full_system();
        let keys: Vec<&str> = system.tokens.spacing.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["xs", "sm", "md", "lg"]);
        let primary: Vec<&str> = system
            .tokens
            .colors
            .primary
            .as_ref()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(primary, vec!["50", "500", "600", "900"]);
    }
}
