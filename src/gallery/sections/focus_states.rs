//! Focus ring and outline tokens

use crate::designs::{DesignSystem, TokenRestrictions};
use crate::gallery::{Section, SectionView};

pub struct FocusStatesSection;

impl Section for FocusStatesSection {
    fn id(&self) -> &'static str {
        "focus"
    }

    fn name(&self) -> &'static str {
        "Focus States"
    }

    fn category(&self) -> &'static str {
        "Interaction"
    }

    fn render(&self, system: &DesignSystem, restrictions: &TokenRestrictions<'_>) -> SectionView {
        SectionView::new(self.name()).with_scale(
            "Focus Properties",
            system.tokens.focus_states.as_ref(),
            restrictions,
            "focusStates",
            None,
        )
    }
}
