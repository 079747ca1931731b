use crate::designs::{DesignSystem, TokenRestrictions};
use crate::gallery::{Section, SectionView, TokenGroup};

pub struct ElevationSection;

impl Section for ElevationSection {
    fn id(&self) -> &'static str {
        "elevation"
    }

    fn name(&self) -> &'static str {
        "Elevation"
    }

    fn category(&self) -> &'static str {
        "Surface"
    }

    fn render(&self, system: &DesignSystem, restrictions: &TokenRestrictions<'_>) -> SectionView {
        let mut view = SectionView::new(self.name());
        let Some(elevation) = &system.tokens.elevation else {
            return view;
        };
        if let Some(levels) = &elevation.levels {
            view = view.with_group(TokenGroup::from_scale(
                "Levels",
                levels,
                restrictions,
                "elevation",
                Some("levels"),
            ));
        }
        if let Some(z_index) = &elevation.z_index {
            view = view.with_group(TokenGroup::from_scale(
                "Z-Index",
                z_index,
                restrictions,
                "elevation",
                Some("zIndex"),
            ));
        }
        view
    }
}
