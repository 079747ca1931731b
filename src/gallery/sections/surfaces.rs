use crate::designs::{DesignSystem, TokenRestrictions};
use crate::gallery::{Section, SectionView};

pub struct SurfacesSection;

impl Section for SurfacesSection {
    fn id(&self) -> &'static str {
        "surfaces"
    }

    fn name(&self) -> &'static str {
        "Surfaces"
    }

    fn category(&self) -> &'static str {
        "Surface"
    }

    fn render(&self, system: &DesignSystem, restrictions: &TokenRestrictions<'_>) -> SectionView {
        let surfaces = system.tokens.surfaces.as_ref();
        SectionView::new(self.name())
            .with_scale(
                "Background Hierarchy",
                surfaces.and_then(|s| s.background.as_ref()),
                restrictions,
                "surfaces",
                Some("background"),
            )
            .with_scale(
                "Surface Elevations",
                surfaces.and_then(|s| s.surface.as_ref()),
                restrictions,
                "surfaces",
                Some("surface"),
            )
    }
}
