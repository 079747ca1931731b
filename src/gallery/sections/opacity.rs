use crate::designs::{DesignSystem, TokenRestrictions};
use crate::gallery::{Section, SectionView};

pub struct OpacitySection;

impl Section for OpacitySection {
    fn id(&self) -> &'static str {
        "opacity"
    }

    fn name(&self) -> &'static str {
        "Opacity Scale"
    }

    fn category(&self) -> &'static str {
        "Surface"
    }

    fn render(&self, system: &DesignSystem, restrictions: &TokenRestrictions<'_>) -> SectionView {
        SectionView::new(self.name()).with_scale(
            "Opacity",
            system.tokens.opacity.as_ref(),
            restrictions,
            "opacity",
            None,
        )
    }
}
