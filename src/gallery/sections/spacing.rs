use crate::designs::{DesignSystem, TokenRestrictions};
use crate::gallery::{Section, SectionView, TokenGroup};

pub struct SpacingSection;

impl Section for SpacingSection {
    fn id(&self) -> &'static str {
        "spacing"
    }

    fn name(&self) -> &'static str {
        "Spacing Scale"
    }

    fn category(&self) -> &'static str {
        "Foundation"
    }

    fn render(&self, system: &DesignSystem, restrictions: &TokenRestrictions<'_>) -> SectionView {
        SectionView::new(self.name()).with_group(TokenGroup::from_scale(
            "Spacing",
            &system.tokens.spacing,
            restrictions,
            "spacing",
            None,
        ))
    }
}
