//! Color palette - every color group, one row per shade

use crate::designs::{DesignSystem, TokenRestrictions, TokenScale, TokenValue};
use crate::gallery::{title_case, Section, SectionView, TokenGroup};

pub struct ColorPaletteSection;

impl Section for ColorPaletteSection {
    fn id(&self) -> &'static str {
        "colors"
    }

    fn name(&self) -> &'static str {
        "Color Palette"
    }

    fn category(&self) -> &'static str {
        "Foundation"
    }

    fn render(&self, system: &DesignSystem, restrictions: &TokenRestrictions<'_>) -> SectionView {
        system
            .tokens
            .colors
            .groups()
            .into_iter()
            .fold(SectionView::new(self.name()), |view, (group, scale)| {
                // Swatches only make sense for string color values
                let swatches: TokenScale = scale
                    .iter()
                    .filter(|(_, value)| matches!(value, TokenValue::Text(_)))
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                view.with_group(TokenGroup::from_scale(
                    title_case(group),
                    &swatches,
                    restrictions,
                    "colors",
                    Some(group),
                ))
            })
    }
}
