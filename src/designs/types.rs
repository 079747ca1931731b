//! Design system type definitions
//!
//! Contains the serde model for one design system document:
//! - DesignSystem, SystemStatus, DesignSystemMeta
//! - DesignTokens and its category structs (Colors, Typography, Layout, ...)
//! - TokenValue / TokenScale, the leaf representation shared by every category
//!
//! Token scales keep the order of the source document so that palettes list
//! `50, 100, ... 900` and scales list `xs, sm, md, ...` as authored.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::allowed::AllowedTokens;
use super::animation::Animations;

// ============================================================================
// Leaf values
// ============================================================================

/// A single concrete token value: a CSS string or a bare number (weights, line heights, z-indexes).
///
/// Any other JSON leaf (`true`, `null`, ...) is kept as written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Number(serde_json::Number),
    Text(String),
    Other(Value),
}

impl TokenValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::Text(s) => Some(s),
            TokenValue::Number(_) | TokenValue::Other(_) => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, TokenValue::Number(_))
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Number(n) => write!(f, "{}", n),
            TokenValue::Text(s) => f.write_str(s),
            TokenValue::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        TokenValue::Text(value.to_string())
    }
}

impl From<i64> for TokenValue {
    fn from(value: i64) -> Self {
        TokenValue::Number(value.into())
    }
}

/// Read an enum name leniently: strings as written, any other JSON value in its text form
pub(crate) fn deserialize_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(name) => name,
        other => other.to_string(),
    })
}

/// Ordered key → value mapping for one token scale (e.g. a color palette or the spacing scale)
pub type TokenScale = IndexMap<String, TokenValue>;

// ============================================================================
// Categories
// ============================================================================

/// Color system. Every group is optional so partial palettes load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Colors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<TokenScale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<TokenScale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neutral: Option<TokenScale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<TokenScale>,
    /// success / warning / error / info
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic: Option<TokenScale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TokenScale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<TokenScale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<TokenScale>,
}

impl Colors {
    /// Defined color groups in canonical order, paired with their names
    pub fn groups(&self) -> Vec<(&'static str, &TokenScale)> {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("neutral", &self.neutral),
            ("accent", &self.accent),
            ("semantic", &self.semantic),
            ("text", &self.text),
            ("background", &self.background),
            ("border", &self.border),
        ]
        .into_iter()
        .filter_map(|(name, scale)| scale.as_ref().map(|s| (name, s)))
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<TokenScale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<TokenScale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<TokenScale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<TokenScale>,
}

/// Breakpoints and container widths
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakpoints: Option<TokenScale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub containers: Option<TokenScale>,
}

/// Shadow levels plus z-index layering
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Elevation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub levels: Option<TokenScale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<TokenScale>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Borders {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widths: Option<TokenScale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<TokenScale>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Surfaces {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<TokenScale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<TokenScale>,
}

/// All design tokens for a design system.
///
/// `colors`, `typography` and `spacing` are required; everything else is optional
/// so that partial token sets still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignTokens {
    pub colors: Colors,
    pub typography: Typography,
    pub spacing: TokenScale,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<TokenScale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadows: Option<TokenScale>,
    /// fast / base / slow durations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transitions: Option<TokenScale>,
    /// columns / gutter / margin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<TokenScale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<Elevation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<TokenScale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borders: Option<Borders>,
    /// ringWidth / ringOffset / ringColor / outlineStyle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_states: Option<TokenScale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surfaces: Option<Surfaces>,
    /// camelCase styling keys (backgroundColor, activeColor, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation: Option<TokenScale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animations: Option<Animations>,
}

// ============================================================================
// Design system
// ============================================================================

/// Lifecycle status shown next to a system in the selector
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SystemStatus {
    #[default]
    Active,
    Deprecated,
    Experimental,
    /// Unrecognised status, kept as written and shown without a badge
    Other(String),
}

impl SystemStatus {
    pub fn as_str(&self) -> &str {
        match self {
            SystemStatus::Active => "active",
            SystemStatus::Deprecated => "deprecated",
            SystemStatus::Experimental => "experimental",
            SystemStatus::Other(name) => name,
        }
    }

    /// Badge text; active and unrecognised systems carry no badge
    pub fn label(&self) -> &'static str {
        match self {
            SystemStatus::Active | SystemStatus::Other(_) => "",
            SystemStatus::Deprecated => "⚠️ Deprecated",
            SystemStatus::Experimental => "🧪 Experimental",
        }
    }
}

impl Serialize for SystemStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SystemStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = deserialize_name(deserializer)?;
        let known = match name.as_str() {
            "active" => Some(SystemStatus::Active),
            "deprecated" => Some(SystemStatus::Deprecated),
            "experimental" => Some(SystemStatus::Experimental),
            _ => None,
        };
        Ok(known.unwrap_or(SystemStatus::Other(name)))
    }
}

/// Complete design system definition, one per JSON document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSystem {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SystemStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_tokens: Option<AllowedTokens>,
    pub tokens: DesignTokens,
    /// The document this system was parsed from, including fields the model ignores
    #[serde(skip)]
    source: Option<Value>,
}

impl DesignSystem {
    /// Parse a system and keep the document for a verbatim echo
    pub fn from_document(document: Value) -> serde_json::Result<Self> {
        let mut system: DesignSystem = serde_json::from_value(document.clone())?;
        system.source = Some(document);
        Ok(system)
    }

    /// The source document when known, otherwise the model serialized
    pub fn document(&self) -> serde_json::Result<Value> {
        match &self.source {
            Some(document) => Ok(document.clone()),
            None => serde_json::to_value(self),
        }
    }

    pub fn meta(&self) -> DesignSystemMeta {
        DesignSystemMeta {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            status: self.status.clone(),
        }
    }

    /// Selector label: the name plus a status badge when one applies
    pub fn display_name(&self) -> String {
        match self.status.as_ref().map(SystemStatus::label).filter(|l| !l.is_empty()) {
            Some(label) => format!("{} {}", self.name, label),
            None => self.name.clone(),
        }
    }
}

/// Design system metadata (for listing)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSystemMeta {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SystemStatus>,
}
