//! Transitions plus the resolved animation class of every component and state

use crate::designs::{
    allowed_animation_types, should_reduce_motion, AnimatedComponent, ComponentAnimator,
    DesignSystem, InteractionState, TokenRestrictions,
};
use crate::gallery::{title_case, Section, SectionView, TokenGroup};

pub struct MotionSection;

impl Section for MotionSection {
    fn id(&self) -> &'static str {
        "animations"
    }

    fn name(&self) -> &'static str {
        "Animations"
    }

    fn category(&self) -> &'static str {
        "Motion"
    }

    fn render(&self, system: &DesignSystem, restrictions: &TokenRestrictions<'_>) -> SectionView {
        let mut view = SectionView::new(self.name());
        if let Some(transitions) = &system.tokens.transitions {
            view = view.with_group(TokenGroup::from_scale(
                "Transitions",
                transitions,
                restrictions,
                "transitions",
                None,
            ));
        }

        let animations = system.tokens.animations.as_ref();
        for &component in AnimatedComponent::all() {
            let animator = ComponentAnimator::new(animations, component);
            let mut group = TokenGroup::new(title_case(component.as_str()));
            for &state in InteractionState::all() {
                let class = animator.class(state);
                let value = if class.is_empty() { "-".to_string() } else { class };
                group.push(state.as_str(), value);
            }
            view = view.with_group(group);
        }

        let mut allowed = TokenGroup::new("Allowed Types");
        let reduce = if should_reduce_motion(animations) { "yes" } else { "no" };
        allowed.push("reduce motion", reduce);
        let permitted = allowed_animation_types(system);
        let types: Vec<&str> = permitted.iter().map(|t| t.as_str()).collect();
        allowed.push("types", types.join(", "));
        view.with_group(allowed)
    }
}
