//! Animation configuration and resolution
//!
//! A design system attaches animations per component kind and per interaction
//! state. `default` is the fallback for any component or state without an
//! explicit override. Resolution never mixes the two for a single state.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::types::{deserialize_name, DesignSystem};

static ANIMATION_TYPES: [AnimationType; 11] = [
    AnimationType::Ripple,
    AnimationType::Lift,
    AnimationType::Scale,
    AnimationType::Glow,
    AnimationType::Slide,
    AnimationType::Bounce,
    AnimationType::Fade,
    AnimationType::Shimmer,
    AnimationType::Rotate,
    AnimationType::Pulse,
    AnimationType::None,
];

static ANIMATION_INTENSITIES: [AnimationIntensity; 3] = [
    AnimationIntensity::Subtle,
    AnimationIntensity::Medium,
    AnimationIntensity::Bold,
];

/// Animation effect. `None` is a sentinel that renders no class.
///
/// Names outside the known set load as `Other` and still render a class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AnimationType {
    #[default]
    None,
    Ripple,
    Lift,
    Scale,
    Glow,
    Slide,
    Bounce,
    Fade,
    Shimmer,
    Rotate,
    Pulse,
    Other(String),
}

impl AnimationType {
    /// Showcase order: every effect, then the `none` sentinel
    pub fn all() -> &'static [AnimationType] {
        &ANIMATION_TYPES
    }

    pub fn as_str(&self) -> &str {
        match self {
            AnimationType::None => "none",
            AnimationType::Ripple => "ripple",
            AnimationType::Lift => "lift",
            AnimationType::Scale => "scale",
            AnimationType::Glow => "glow",
            AnimationType::Slide => "slide",
            AnimationType::Bounce => "bounce",
            AnimationType::Fade => "fade",
            AnimationType::Shimmer => "shimmer",
            AnimationType::Rotate => "rotate",
            AnimationType::Pulse => "pulse",
            AnimationType::Other(name) => name,
        }
    }

    /// Known effect for `name`, or `Other` carrying the name as written
    pub fn from_name(name: String) -> Self {
        name.parse().unwrap_or(AnimationType::Other(name))
    }
}

impl fmt::Display for AnimationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse: only the known effects (used by the CLI and validators)
impl FromStr for AnimationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|t| t.as_str() == s)
            .cloned()
            .ok_or_else(|| format!("unknown animation type '{}'", s))
    }
}

impl Serialize for AnimationType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AnimationType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_name(deserializer).map(Self::from_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AnimationIntensity {
    Subtle,
    #[default]
    Medium,
    Bold,
    Other(String),
}

impl AnimationIntensity {
    pub fn all() -> &'static [AnimationIntensity] {
        &ANIMATION_INTENSITIES
    }

    pub fn as_str(&self) -> &str {
        match self {
            AnimationIntensity::Subtle => "subtle",
            AnimationIntensity::Medium => "medium",
            AnimationIntensity::Bold => "bold",
            AnimationIntensity::Other(name) => name,
        }
    }

    pub fn from_name(name: String) -> Self {
        name.parse().unwrap_or(AnimationIntensity::Other(name))
    }
}

impl FromStr for AnimationIntensity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|i| i.as_str() == s)
            .cloned()
            .ok_or_else(|| format!("unknown animation intensity '{}'", s))
    }
}

impl Serialize for AnimationIntensity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AnimationIntensity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_name(deserializer).map(Self::from_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionState {
    Hover,
    Active,
    Focus,
}

impl InteractionState {
    pub fn all() -> &'static [InteractionState] {
        &[
            InteractionState::Hover,
            InteractionState::Active,
            InteractionState::Focus,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionState::Hover => "hover",
            InteractionState::Active => "active",
            InteractionState::Focus => "focus",
        }
    }
}

impl FromStr for InteractionState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| format!("unknown interaction state '{}'", s))
    }
}

/// UI component kinds that can carry their own animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimatedComponent {
    Button,
    Card,
    Input,
    Navigation,
    List,
    Dropdown,
}

impl AnimatedComponent {
    pub fn all() -> &'static [AnimatedComponent] {
        &[
            AnimatedComponent::Button,
            AnimatedComponent::Card,
            AnimatedComponent::Input,
            AnimatedComponent::Navigation,
            AnimatedComponent::List,
            AnimatedComponent::Dropdown,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimatedComponent::Button => "button",
            AnimatedComponent::Card => "card",
            AnimatedComponent::Input => "input",
            AnimatedComponent::Navigation => "navigation",
            AnimatedComponent::List => "list",
            AnimatedComponent::Dropdown => "dropdown",
        }
    }
}

impl FromStr for AnimatedComponent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown component '{}'", s))
    }
}

/// One animation: effect, intensity and timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// A missing `type` loads as `none`
    #[serde(rename = "type", default)]
    pub kind: AnimationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<AnimationIntensity>,
    /// `fast` / `base` / `slow` (transition tokens) or a raw CSS duration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<String>,
}

impl AnimationConfig {
    pub fn new(kind: AnimationType) -> Self {
        Self {
            kind,
            intensity: None,
            duration: None,
            easing: None,
        }
    }

    pub fn with_intensity(mut self, intensity: AnimationIntensity) -> Self {
        self.intensity = Some(intensity);
        self
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn with_easing(mut self, easing: impl Into<String>) -> Self {
        self.easing = Some(easing.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateAnimations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover: Option<AnimationConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<AnimationConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<AnimationConfig>,
}

impl StateAnimations {
    pub fn get(&self, state: InteractionState) -> Option<&AnimationConfig> {
        match state {
            InteractionState::Hover => self.hover.as_ref(),
            InteractionState::Active => self.active.as_ref(),
            InteractionState::Focus => self.focus.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentAnimations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button: Option<StateAnimations>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<StateAnimations>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<StateAnimations>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation: Option<StateAnimations>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<StateAnimations>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropdown: Option<StateAnimations>,
}

impl ComponentAnimations {
    pub fn get(&self, component: AnimatedComponent) -> Option<&StateAnimations> {
        match component {
            AnimatedComponent::Button => self.button.as_ref(),
            AnimatedComponent::Card => self.card.as_ref(),
            AnimatedComponent::Input => self.input.as_ref(),
            AnimatedComponent::Navigation => self.navigation.as_ref(),
            AnimatedComponent::List => self.list.as_ref(),
            AnimatedComponent::Dropdown => self.dropdown.as_ref(),
        }
    }
}

/// Named keyframe definition plus the config that drives it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomAnimation {
    pub keyframes: String,
    pub config: AnimationConfig,
}

/// The `animations` token category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<StateAnimations>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<ComponentAnimations>,
    /// Honor prefers-reduced-motion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduce_motion: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<IndexMap<String, CustomAnimation>>,
}

// ============================================================================
// Resolution
// ============================================================================

/// Component override for `state` if one exists, otherwise the default for `state`
pub fn resolve_animation(
    animations: Option<&Animations>,
    component: AnimatedComponent,
    state: InteractionState,
) -> Option<&AnimationConfig> {
    let animations = animations?;

    let override_config = animations
        .components
        .as_ref()
        .and_then(|c| c.get(component))
        .and_then(|s| s.get(state));

    override_config.or_else(|| animations.default.as_ref().and_then(|d| d.get(state)))
}

/// `animation-{type}-{intensity}`, or an empty string for no animation
pub fn animation_class_name(config: Option<&AnimationConfig>) -> String {
    match config {
        None => String::new(),
        Some(c) if c.kind == AnimationType::None => String::new(),
        Some(c) => format!(
            "animation-{}-{}",
            c.kind.as_str(),
            c.intensity.as_ref().map_or("medium", AnimationIntensity::as_str)
        ),
    }
}

const DURATION_TOKENS: &[&str] = &["fast", "base", "slow"];

/// Style properties for a config, in `--animation-duration`, `--animation-easing` order
pub fn animation_style(config: Option<&AnimationConfig>) -> Vec<(String, String)> {
    let Some(config) = config else {
        return Vec::new();
    };

    let mut style = Vec::with_capacity(2);
    if let Some(duration) = config.duration.as_deref().filter(|d| !d.is_empty()) {
        let value = if DURATION_TOKENS.contains(&duration) {
            format!("var(--transition-{})", duration)
        } else {
            duration.to_string()
        };
        style.push(("--animation-duration".to_string(), value));
    }
    if let Some(easing) = config.easing.as_deref().filter(|e| !e.is_empty()) {
        style.push(("--animation-easing".to_string(), easing.to_string()));
    }
    style
}

/// Class names for one component across hover, active and focus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimationClasses {
    pub hover: String,
    pub active: String,
    pub focus: String,
}

impl AnimationClasses {
    pub fn any(&self) -> bool {
        !(self.hover.is_empty() && self.active.is_empty() && self.focus.is_empty())
    }
}

pub fn all_animation_classes(
    animations: Option<&Animations>,
    component: AnimatedComponent,
) -> AnimationClasses {
    let class_for =
        |state| animation_class_name(resolve_animation(animations, component, state));
    AnimationClasses {
        hover: class_for(InteractionState::Hover),
        active: class_for(InteractionState::Active),
        focus: class_for(InteractionState::Focus),
    }
}

/// Whether animations should honor prefers-reduced-motion; true unless a system opts out
pub fn should_reduce_motion(animations: Option<&Animations>) -> bool {
    animations.and_then(|a| a.reduce_motion).unwrap_or(true)
}

pub fn is_valid_animation_type(value: &str) -> bool {
    value.parse::<AnimationType>().is_ok()
}

pub fn is_valid_animation_intensity(value: &str) -> bool {
    value.parse::<AnimationIntensity>().is_ok()
}

/// Partial config layered over a base with [`merge_animation_config`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationOverride {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AnimationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<AnimationIntensity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<String>,
}

/// Fields set in `patch` win. An override without a base starts from `none`.
pub fn merge_animation_config(
    base: Option<&AnimationConfig>,
    patch: Option<&AnimationOverride>,
) -> Option<AnimationConfig> {
    match (base, patch) {
        (None, None) => None,
        (Some(base), None) => Some(base.clone()),
        (base, Some(patch)) => {
            let base = base
                .cloned()
                .unwrap_or_else(|| AnimationConfig::new(AnimationType::None));
            Some(AnimationConfig {
                kind: patch.kind.clone().unwrap_or(base.kind),
                intensity: patch.intensity.clone().or(base.intensity),
                duration: patch.duration.clone().or(base.duration),
                easing: patch.easing.clone().or(base.easing),
            })
        }
    }
}

/// Animation types the system permits, in showcase order.
/// An absent or empty `animations.types` allow-list permits every type.
pub fn allowed_animation_types(system: &DesignSystem) -> Vec<AnimationType> {
    let allowed = system
        .allowed_tokens
        .as_ref()
        .and_then(|a| a.animation_types())
        .filter(|types| !types.is_empty());

    match allowed {
        None => AnimationType::all().to_vec(),
        Some(types) => AnimationType::all()
            .iter()
            .filter(|t| types.contains(&t.as_str()))
            .cloned()
            .collect(),
    }
}

// ============================================================================
// Per-component view
// ============================================================================

/// Animation lookups bound to one component of one system
#[derive(Debug, Clone, Copy)]
pub struct ComponentAnimator<'a> {
    animations: Option<&'a Animations>,
    component: AnimatedComponent,
}

impl<'a> ComponentAnimator<'a> {
    pub fn new(animations: Option<&'a Animations>, component: AnimatedComponent) -> Self {
        Self {
            animations,
            component,
        }
    }

    pub fn component(&self) -> AnimatedComponent {
        self.component
    }

    pub fn animation(&self, state: InteractionState) -> Option<&'a AnimationConfig> {
        resolve_animation(self.animations, self.component, state)
    }

    pub fn classes(&self) -> AnimationClasses {
        all_animation_classes(self.animations, self.component)
    }

    pub fn class(&self, state: InteractionState) -> String {
        animation_class_name(self.animation(state))
    }

    /// Style properties for `state`, hover when none is given
    pub fn style(&self, state: Option<InteractionState>) -> Vec<(String, String)> {
        animation_style(self.animation(state.unwrap_or(InteractionState::Hover)))
    }

    pub fn has_animations(&self) -> bool {
        self.classes().any()
    }

    pub fn is_reduced_motion(&self) -> bool {
        should_reduce_motion(self.animations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn animations() -> Animations {
        serde_json::from_value(json!({
            "default": {
                "hover": {"type": "lift", "intensity": "subtle", "duration": "base"},
                "active": {"type": "scale"},
                "focus": {"type": "glow", "duration": "220ms", "easing": "ease-out"}
            },
            "components": {
                "button": {
                    "hover": {"type": "ripple", "intensity": "bold"},
                    "focus": {"type": "none"}
                }
            },
            "reduceMotion": false
        }))
        .unwrap()
    }

    #[test]
    fn test_component_override_wins() {
        let a = animations();
        let config = resolve_animation(Some(&a), AnimatedComponent::Button, InteractionState::Hover)
            .unwrap();
        assert_eq!(config.kind, AnimationType::Ripple);
        // No fields borrowed from the default hover config
        assert_eq!(config.duration, None);
    }

    #[test]
    fn test_falls_back_to_default_per_state() {
        let a = animations();
        let active =
            resolve_animation(Some(&a), AnimatedComponent::Button, InteractionState::Active)
                .unwrap();
        assert_eq!(active.kind, AnimationType::Scale);

        let card_hover =
            resolve_animation(Some(&a), AnimatedComponent::Card, InteractionState::Hover).unwrap();
        assert_eq!(card_hover.kind, AnimationType::Lift);
    }

    #[test]
    fn test_absent_animations_resolve_to_none() {
        assert!(
            resolve_animation(None, AnimatedComponent::Input, InteractionState::Focus).is_none()
        );
        let empty = Animations::default();
        assert!(
            resolve_animation(Some(&empty), AnimatedComponent::Input, InteractionState::Focus)
                .is_none()
        );
    }

    #[test]
    fn test_class_name() {
        assert_eq!(animation_class_name(None), "");
        assert_eq!(
            animation_class_name(Some(&AnimationConfig::new(AnimationType::None))),
            ""
        );
        let lift = AnimationConfig::new(AnimationType::Lift);
        assert_eq!(animation_class_name(Some(&lift)), "animation-lift-medium");
        // Idempotent
        assert_eq!(
            animation_class_name(Some(&lift)),
            animation_class_name(Some(&lift))
        );
        let bold = lift.with_intensity(AnimationIntensity::Bold);
        assert_eq!(animation_class_name(Some(&bold)), "animation-lift-bold");
    }

    #[test]
    fn test_style_maps_duration_tokens() {
        let base = AnimationConfig::new(AnimationType::Fade).with_duration("base");
        assert_eq!(
            animation_style(Some(&base)),
            vec![(
                "--animation-duration".to_string(),
                "var(--transition-base)".to_string()
            )]
        );

        let raw = AnimationConfig::new(AnimationType::Fade)
            .with_duration("220ms")
            .with_easing("ease-in-out");
        assert_eq!(
            animation_style(Some(&raw)),
            vec![
                ("--animation-duration".to_string(), "220ms".to_string()),
                ("--animation-easing".to_string(), "ease-in-out".to_string()),
            ]
        );
        assert!(animation_style(None).is_empty());
    }

    #[test]
    fn test_all_classes_and_reduce_motion() {
        let a = animations();
        let classes = all_animation_classes(Some(&a), AnimatedComponent::Button);
        assert_eq!(classes.hover, "animation-ripple-bold");
        assert_eq!(classes.active, "animation-scale-medium");
        assert_eq!(classes.focus, "");
        assert!(classes.any());

        assert!(!should_reduce_motion(Some(&a)));
        assert!(should_reduce_motion(None));
        assert!(should_reduce_motion(Some(&Animations::default())));
    }

    #[test]
    fn test_validation() {
        assert!(is_valid_animation_type("shimmer"));
        assert!(is_valid_animation_type("none"));
        assert!(!is_valid_animation_type("wobble"));
        assert!(is_valid_animation_intensity("subtle"));
        assert!(!is_valid_animation_intensity("extreme"));
        assert_eq!("pulse".parse::<AnimationType>(), Ok(AnimationType::Pulse));
    }

    #[test]
    fn test_unknown_names_load_and_render() {
        let config: AnimationConfig =
            serde_json::from_value(json!({"type": "wobble", "intensity": "extreme"})).unwrap();
        assert_eq!(config.kind, AnimationType::Other("wobble".to_string()));
        assert_eq!(animation_class_name(Some(&config)), "animation-wobble-extreme");
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({"type": "wobble", "intensity": "extreme"})
        );

        // Strict parsing still rejects them
        assert!("wobble".parse::<AnimationType>().is_err());
    }

    #[test]
    fn test_missing_or_non_string_type() {
        let untyped: AnimationConfig = serde_json::from_value(json!({"duration": "fast"})).unwrap();
        assert_eq!(untyped.kind, AnimationType::None);
        assert_eq!(animation_class_name(Some(&untyped)), "");

        let numeric: AnimationConfig = serde_json::from_value(json!({"type": 3})).unwrap();
        assert_eq!(animation_class_name(Some(&numeric)), "animation-3-medium");
    }

    #[test]
    fn test_merge() {
        let base = AnimationConfig::new(AnimationType::Lift).with_duration("fast");
        let patch = AnimationOverride {
            intensity: Some(AnimationIntensity::Bold),
            ..Default::default()
        };

        assert_eq!(merge_animation_config(None, None), None);
        assert_eq!(merge_animation_config(Some(&base), None), Some(base.clone()));

        let merged = merge_animation_config(Some(&base), Some(&patch)).unwrap();
        assert_eq!(merged.kind, AnimationType::Lift);
        assert_eq!(merged.intensity, Some(AnimationIntensity::Bold));
        assert_eq!(merged.duration.as_deref(), Some("fast"));

        let from_nothing = merge_animation_config(None, Some(&patch)).unwrap();
        assert_eq!(from_nothing.kind, AnimationType::None);
    }

    #[test]
    fn test_component_animator() {
        let a = animations();
        let card = ComponentAnimator::new(Some(&a), AnimatedComponent::Card);
        assert_eq!(card.class(InteractionState::Hover), "animation-lift-subtle");
        assert_eq!(
            card.style(None),
            vec![(
                "--animation-duration".to_string(),
                "var(--transition-base)".to_string()
            )]
        );
        assert!(card.has_animations());
        assert!(!card.is_reduced_motion());

        let bare = ComponentAnimator::new(None, AnimatedComponent::List);
        assert!(!bare.has_animations());
        assert!(bare.is_reduced_motion());
    }

    #[test]
    fn test_custom_keyframes_deserialize() {
        let a: Animations = serde_json::from_value(json!({
            "custom": {
                "wiggle": {
                    "keyframes": "@keyframes wiggle { 50% { transform: rotate(3deg); } }",
                    "config": {"type": "rotate", "intensity": "subtle"}
                }
            }
        }))
        .unwrap();
        let custom = a.custom.unwrap();
        assert_eq!(custom["wiggle"].config.kind, AnimationType::Rotate);
    }
}
