//! Grid system, container widths and breakpoints

use crate::designs::{DesignSystem, TokenRestrictions};
use crate::gallery::{Section, SectionView};

pub struct LayoutGridSection;

impl Section for LayoutGridSection {
    fn id(&self) -> &'static str {
        "layout"
    }

    fn name(&self) -> &'static str {
        "Layout & Grid"
    }

    fn category(&self) -> &'static str {
        "Foundation"
    }

    fn render(&self, system: &DesignSystem, restrictions: &TokenRestrictions<'_>) -> SectionView {
        let tokens = &system.tokens;
        let layout = tokens.layout.as_ref();
        SectionView::new(self.name())
            .with_scale("Grid System", tokens.grid.as_ref(), restrictions, "grid", None)
            .with_scale(
                "Container Widths",
                layout.and_then(|l| l.containers.as_ref()),
                restrictions,
                "layout",
                Some("containers"),
            )
            .with_scale(
                "Breakpoints",
                layout.and_then(|l| l.breakpoints.as_ref()),
                restrictions,
                "layout",
                Some("breakpoints"),
            )
    }
}
