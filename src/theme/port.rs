//! The style root that design tokens are written to

use indexmap::IndexMap;

/// A global style scope that accepts CSS custom properties.
///
/// Properties are never removed; setting an existing name overwrites it in place.
pub trait ThemePort {
    fn set_property(&mut self, name: &str, value: &str);
    fn get_property(&self, name: &str) -> Option<&str>;
}

/// In-memory style root. Keeps first-insertion order so rendering is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRoot {
    properties: IndexMap<String, String>,
}

impl StyleRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as a `:root { ... }` block
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.iter() {
            css.push_str(&format!("  {}: {};\n", name, value));
        }
        css.push_str("}\n");
        css
    }
}

impl ThemePort for StyleRoot {
    fn set_property(&mut self, name: &str, value: &str) {
        // IndexMap::insert keeps the original slot for an existing key
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn get_property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }
}
