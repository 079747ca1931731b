//! Border radius and shadows

use crate::designs::{DesignSystem, TokenRestrictions};
use crate::gallery::{Section, SectionView, TokenGroup};

pub struct ShapeSection;

impl Section for ShapeSection {
    fn id(&self) -> &'static str {
        "shape"
    }

    fn name(&self) -> &'static str {
        "Shape"
    }

    fn category(&self) -> &'static str {
        "Surface"
    }

    fn render(&self, system: &DesignSystem, restrictions: &TokenRestrictions<'_>) -> SectionView {
        let tokens = &system.tokens;
        let mut view = SectionView::new(self.name());
        if let Some(radius) = &tokens.border_radius {
            view = view.with_group(TokenGroup::from_scale(
                "Border Radius",
                radius,
                restrictions,
                "borderRadius",
                None,
            ));
        }
        if let Some(shadows) = &tokens.shadows {
            view = view.with_group(TokenGroup::from_scale(
                "Shadows",
                shadows,
                restrictions,
                "shadows",
                None,
            ));
        }
        view
    }
}
