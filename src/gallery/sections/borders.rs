//! Border widths and styles, plus the radius scale they pair with

use crate::designs::{DesignSystem, TokenRestrictions};
use crate::gallery::{Section, SectionView};

pub struct BorderSystemSection;

impl Section for BorderSystemSection {
    fn id(&self) -> &'static str {
        "borders"
    }

    fn name(&self) -> &'static str {
        "Border System"
    }

    fn category(&self) -> &'static str {
        "Surface"
    }

    fn render(&self, system: &DesignSystem, restrictions: &TokenRestrictions<'_>) -> SectionView {
        let tokens = &system.tokens;
        let borders = tokens.borders.as_ref();
        SectionView::new(self.name())
            .with_scale(
                "Border Widths",
                borders.and_then(|b| b.widths.as_ref()),
                restrictions,
                "borders",
                Some("widths"),
            )
            .with_scale(
                "Border Styles",
                borders.and_then(|b| b.styles.as_ref()),
                restrictions,
                "borders",
                Some("styles"),
            )
            .with_scale(
                "Border Radius",
                tokens.border_radius.as_ref(),
                restrictions,
                "borderRadius",
                None,
            )
    }
}
