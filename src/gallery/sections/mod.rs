//! Section definitions for the gallery.
//! Sections are manually registered in get_all_sections().

mod borders;
mod color_palette;
mod elevation;
mod focus_states;
mod layout_grid;
mod motion;
mod opacity;
mod restrictions;
mod shape;
mod spacing;
mod surfaces;
mod typography;

use super::SectionEntry;
use std::sync::OnceLock;

pub use borders::BorderSystemSection;
pub use color_palette::ColorPaletteSection;
pub use elevation::ElevationSection;
pub use focus_states::FocusStatesSection;
pub use layout_grid::LayoutGridSection;
pub use motion::MotionSection;
pub use opacity::OpacitySection;
pub use restrictions::TokenRestrictionsSection;
pub use shape::ShapeSection;
pub use spacing::SpacingSection;
pub use surfaces::SurfacesSection;
pub use typography::TypographySection;

/// Static storage for all sections
static ALL_SECTIONS: OnceLock<Vec<SectionEntry>> = OnceLock::new();

/// Get all registered sections
pub fn get_all_sections() -> &'static Vec<SectionEntry> {
    ALL_SECTIONS.get_or_init(|| {
        vec![
            // Foundation
            SectionEntry::new(Box::new(ColorPaletteSection)),
            SectionEntry::new(Box::new(TypographySection)),
            SectionEntry::new(Box::new(SpacingSection)),
            SectionEntry::new(Box::new(LayoutGridSection)),
            // Surface
            SectionEntry::new(Box::new(ShapeSection)),
            SectionEntry::new(Box::new(ElevationSection)),
            SectionEntry::new(Box::new(BorderSystemSection)),
            SectionEntry::new(Box::new(SurfacesSection)),
            SectionEntry::new(Box::new(OpacitySection)),
            // Interaction
            SectionEntry::new(Box::new(FocusStatesSection)),
            // Motion
            SectionEntry::new(Box::new(MotionSection)),
            // Governance
            SectionEntry::new(Box::new(TokenRestrictionsSection)),
        ]
    })
}
