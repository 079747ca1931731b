use crate::designs::{DesignSystem, TokenRestrictions};
use crate::gallery::{Section, SectionView, TokenGroup};

pub struct TypographySection;

impl Section for TypographySection {
    fn id(&self) -> &'static str {
        "typography"
    }

    fn name(&self) -> &'static str {
        "Typography"
    }

    fn category(&self) -> &'static str {
        "Foundation"
    }

    fn render(&self, system: &DesignSystem, restrictions: &TokenRestrictions<'_>) -> SectionView {
        let typography = &system.tokens.typography;
        let scales = [
            ("Font Families", "fontFamily", &typography.font_family),
            ("Font Sizes", "fontSize", &typography.font_size),
            ("Font Weights", "fontWeight", &typography.font_weight),
            ("Line Heights", "lineHeight", &typography.line_height),
        ];

        let mut view = SectionView::new(self.name());
        for (title, subcategory, scale) in scales {
            if let Some(scale) = scale {
                view = view.with_group(TokenGroup::from_scale(
                    title,
                    scale,
                    restrictions,
                    "typography",
                    Some(subcategory),
                ));
            }
        }
        view
    }
}
