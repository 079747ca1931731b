//! Studio state: the loaded systems, the current selection and the style root
//!
//! Selecting a system replaces the selection wholesale and re-applies its
//! tokens to the port. Nothing is cached between selections.

use tracing::{info, instrument, warn};

use crate::config::Config;
use crate::designs::{
    load_design_systems, AnimatedComponent, ComponentAnimator, DesignSystem, DesignSystemMeta,
    TokenRestrictions,
};
use crate::error::{DesignStudioError, Result};
use crate::theme::{apply_design_tokens, ThemePort};

pub struct DesignStudio<P: ThemePort> {
    systems: Vec<DesignSystem>,
    selected: usize,
    port: P,
    restriction_class: String,
}

impl<P: ThemePort> DesignStudio<P> {
    /// Take ownership of the loaded systems and apply the first one.
    ///
    /// Fails with `NoSystems` when nothing loaded.
    pub fn new(systems: Vec<DesignSystem>, port: P) -> Result<Self> {
        if systems.is_empty() {
            return Err(DesignStudioError::NoSystems);
        }
        let mut studio = Self {
            systems,
            selected: 0,
            port,
            restriction_class: crate::config::DEFAULT_RESTRICTION_CLASS.to_string(),
        };
        studio.apply_selected();
        Ok(studio)
    }

    /// Load the configured systems and select the configured default, if it loaded
    #[instrument(name = "studio_load", skip_all)]
    pub fn load(config: &Config, port: P) -> Result<Self> {
        let systems = load_design_systems(&config.get_systems_dir(), &config.get_system_ids());
        let mut studio = Self::new(systems, port)?;
        studio.restriction_class = config.get_restriction_class().to_string();

        if let Some(id) = config.get_default_system() {
            if studio.position(id).is_some() {
                studio.select(id)?;
            } else {
                warn!(system_id = id, "Configured default system did not load, keeping the first");
            }
        }
        Ok(studio)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.systems.iter().position(|s| s.id == id)
    }

    fn apply_selected(&mut self) {
        let system = &self.systems[self.selected];
        apply_design_tokens(system, &mut self.port);
        info!(
            event_type = "system_selected",
            system_id = %system.id,
            "Selected design system"
        );
    }

    /// Select by id and apply its tokens
    pub fn select(&mut self, id: &str) -> Result<&DesignSystem> {
        let index = self
            .position(id)
            .ok_or_else(|| DesignStudioError::UnknownSystem(id.to_string()))?;
        self.selected = index;
        self.apply_selected();
        Ok(self.selected())
    }

    /// Cycle forward, wrapping to the first system
    pub fn select_next(&mut self) -> &DesignSystem {
        self.selected = (self.selected + 1) % self.systems.len();
        self.apply_selected();
        self.selected()
    }

    /// Cycle backward, wrapping to the last system
    pub fn select_previous(&mut self) -> &DesignSystem {
        self.selected = if self.selected == 0 {
            self.systems.len() - 1
        } else {
            self.selected - 1
        };
        self.apply_selected();
        self.selected()
    }

    pub fn selected(&self) -> &DesignSystem {
        &self.systems[self.selected]
    }

    pub fn available(&self) -> &[DesignSystem] {
        &self.systems
    }

    pub fn metas(&self) -> Vec<DesignSystemMeta> {
        self.systems.iter().map(DesignSystem::meta).collect()
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    /// Restriction view over the selected system, using the configured class
    pub fn restrictions(&self) -> TokenRestrictions<'_> {
        TokenRestrictions::new(self.selected()).with_class(&self.restriction_class)
    }

    pub fn animator(&self, component: AnimatedComponent) -> ComponentAnimator<'_> {
        ComponentAnimator::new(self.selected().tokens.animations.as_ref(), component)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::designs::fixtures::{full_system, restricted_system};
    use crate::designs::InteractionState;
    use crate::theme::StyleRoot;
    use std::fs;
    use tempfile::TempDir;

    fn studio() -> DesignStudio<StyleRoot> {
        DesignStudio::new(vec![full_system(), restricted_system()], StyleRoot::new()).unwrap()
    }

    #[test]
    fn test_empty_is_no_systems() {
        let err = DesignStudio::new(Vec::new(), StyleRoot::new()).err().unwrap();
        assert!(matches!(err, DesignStudioError::NoSystems));
    }

    #[test]
    fn test_first_system_applied_on_start() {
        let studio = studio();
        assert_eq!(studio.selected().id, "full");
        assert_eq!(studio.port().get_property("--spacing-md"), Some("16px"));
    }

    #[test]
    fn test_select_replaces_and_reapplies() {
        let mut studio = studio();
        studio.select("restricted").unwrap();
        assert_eq!(studio.selected().id, "restricted");
        assert_eq!(studio.port().get_property("--spacing-md"), Some("12px"));
        // Optional categories from the previous system persist
        assert!(studio.port().get_property("--shadow-sm").is_some());
    }

    #[test]
    fn test_select_unknown_keeps_selection() {
        let mut studio = studio();
        let err = studio.select("missing").unwrap_err();
        assert!(matches!(err, DesignStudioError::UnknownSystem(ref id) if id == "missing"));
        assert_eq!(studio.selected().id, "full");
    }

    #[test]
    fn test_cycling_wraps() {
        let mut studio = studio();
        assert_eq!(studio.select_next().id, "restricted");
        assert_eq!(studio.select_next().id, "full");
        assert_eq!(studio.select_previous().id, "restricted");
    }

    #[test]
    fn test_views_follow_selection() {
        let mut studio = studio();
        assert!(!studio.restrictions().has_restrictions());
        assert_eq!(
            studio.animator(AnimatedComponent::Button).class(InteractionState::Hover),
            "animation-ripple-medium"
        );

        studio.select("restricted").unwrap();
        assert!(studio.restrictions().has_restrictions());
        assert!(!studio.animator(AnimatedComponent::Button).has_animations());
        assert_eq!(studio.metas().len(), 2);
    }

    #[test]
    fn test_load_uses_configured_default_and_class() {
        let dir = TempDir::new().unwrap();
        for system in [full_system(), restricted_system()] {
            fs::write(
                dir.path().join(format!("{}.json", system.id)),
                serde_json::to_string(&system).unwrap(),
            )
            .unwrap();
        }
        let config = Config {
            systems_dir: Some(dir.path().to_string_lossy().into_owned()),
            systems: Some(vec!["full".into(), "broken".into(), "restricted".into()]),
            default_system: Some("restricted".into()),
            restriction_class: Some("off-system".into()),
            ..Default::default()
        };

        let studio = DesignStudio::load(&config, StyleRoot::new()).unwrap();
        assert_eq!(studio.available().len(), 2);
        assert_eq!(studio.selected().id, "restricted");
        assert_eq!(
            studio.restrictions().token_class("spacing", None, "lg"),
            "off-system"
        );
    }

    #[test]
    fn test_bundled_systems_load() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("design-systems");
        let config = Config {
            systems_dir: Some(dir.to_string_lossy().into_owned()),
            ..Default::default()
        };
        let mut studio = DesignStudio::load(&config, StyleRoot::new()).unwrap();
        let ids: Vec<&str> = studio.available().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["material", "apple", "github", "pliability"]);

        studio.select("pliability").unwrap();
        let restrictions = studio.restrictions();
        assert!(restrictions.check_token("colors", Some("primary"), "600"));
        assert!(!restrictions.check_token("colors", Some("primary"), "700"));
        assert_eq!(studio.port().get_property("--color-primary-500"), Some("#2f9c85"));
    }

    #[test]
    fn test_load_with_nothing_on_disk_fails() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            systems_dir: Some(dir.path().to_string_lossy().into_owned()),
            ..Default::default()
        };
        let err = DesignStudio::load(&config, StyleRoot::new()).err().unwrap();
        assert!(matches!(err, DesignStudioError::NoSystems));
    }
}
