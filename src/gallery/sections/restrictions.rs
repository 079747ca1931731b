//! Allow-list summary: the restricted categories with every token flagged.
//!
//! Systems without an allow-list render an empty view. A group appears only
//! when the allow-list names its category (or subcategory).

use crate::designs::{DesignSystem, TokenRestrictions};
use crate::gallery::{Section, SectionView};

pub struct TokenRestrictionsSection;

impl Section for TokenRestrictionsSection {
    fn id(&self) -> &'static str {
        "restrictions"
    }

    fn name(&self) -> &'static str {
        "Token Restrictions in This System"
    }

    fn category(&self) -> &'static str {
        "Governance"
    }

    fn render(&self, system: &DesignSystem, restrictions: &TokenRestrictions<'_>) -> SectionView {
        let view = SectionView::new(self.name());
        let Some(allowed) = restrictions.allowed_tokens() else {
            return view;
        };
        let tokens = &system.tokens;
        let typography = &tokens.typography;
        let colors = &tokens.colors;

        let names = |category: &str| allowed.category(category).is_some();
        let names_sub = |category: &str, sub: &str| allowed.names_subcategory(category, sub);

        view.with_scale(
            "Border Radius",
            tokens.border_radius.as_ref().filter(|_| names("borderRadius")),
            restrictions,
            "borderRadius",
            None,
        )
        .with_scale(
            "Spacing",
            Some(&tokens.spacing).filter(|_| names("spacing")),
            restrictions,
            "spacing",
            None,
        )
        .with_scale(
            "Font Weights",
            typography
                .font_weight
                .as_ref()
                .filter(|_| names_sub("typography", "fontWeight")),
            restrictions,
            "typography",
            Some("fontWeight"),
        )
        .with_scale(
            "Font Sizes",
            typography
                .font_size
                .as_ref()
                .filter(|_| names_sub("typography", "fontSize")),
            restrictions,
            "typography",
            Some("fontSize"),
        )
        .with_scale(
            "Primary",
            colors.primary.as_ref().filter(|_| names_sub("colors", "primary")),
            restrictions,
            "colors",
            Some("primary"),
        )
        .with_scale(
            "Secondary",
            colors
                .secondary
                .as_ref()
                .filter(|_| names_sub("colors", "secondary")),
            restrictions,
            "colors",
            Some("secondary"),
        )
    }
}
