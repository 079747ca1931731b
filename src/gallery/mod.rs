//! Gallery - text previews of the active token set
//!
//! # Components
//!
//! - [`Section`] - trait for one previewable slice of the tokens
//! - [`SectionView`] / [`TokenGroup`] / [`TokenRow`] - rendered output
//! - [`all_sections`], [`sections_by_category`] - the registry
//!
//! # Usage
//!
//! ```ignore
//! use design_studio::gallery::{find_section, Section};
//!
//! let entry = find_section("colors").unwrap();
//! let view = entry.section.render(studio.selected(), &studio.restrictions());
//! println!("{}", view.render_text());
//! ```

mod registry;
mod section;
mod sections;

pub use registry::{all_categories, all_sections, find_section, sections_by_category, SectionEntry};
pub use section::{title_case, Section, SectionView, TokenGroup, TokenRow};
pub use sections::{
    BorderSystemSection, ColorPaletteSection, ElevationSection, FocusStatesSection,
    LayoutGridSection, MotionSection, OpacitySection, ShapeSection, SpacingSection,
    SurfacesSection, TokenRestrictionsSection, TypographySection,
};

#[cfg(test)]
#[path = "gallery_tests.rs"]
mod tests;
