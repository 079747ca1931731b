use crate::designs::{DesignSystem, TokenRestrictions, TokenScale};

/// A gallery section renders one slice of the active token set for preview.
///
/// Sections are stateless; everything they show comes from the system and
/// restriction view passed to `render`.
pub trait Section: Send + Sync {
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;
    fn category(&self) -> &'static str;
    fn render(&self, system: &DesignSystem, restrictions: &TokenRestrictions<'_>) -> SectionView;
}

/// One rendered token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRow {
    pub label: String,
    pub value: String,
    pub restricted: bool,
    /// Restriction class, empty when the token is in the system
    pub class: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenGroup {
    pub name: String,
    pub rows: Vec<TokenRow>,
}

impl TokenGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Rows for every entry of `scale`, checked against `category` / `subcategory`
    pub fn from_scale(
        name: impl Into<String>,
        scale: &TokenScale,
        restrictions: &TokenRestrictions<'_>,
        category: &str,
        subcategory: Option<&str>,
    ) -> Self {
        let rows = scale
            .iter()
            .map(|(key, value)| {
                let class = restrictions.token_class(category, subcategory, key);
                TokenRow {
                    label: key.clone(),
                    value: value.to_string(),
                    restricted: !restrictions.check_token(category, subcategory, key),
                    class: class.to_string(),
                }
            })
            .collect();
        Self {
            name: name.into(),
            rows,
        }
    }

    pub fn push(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.rows.push(TokenRow {
            label: label.into(),
            value: value.into(),
            restricted: false,
            class: String::new(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Rendered output of a section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionView {
    pub title: String,
    pub groups: Vec<TokenGroup>,
}

impl SectionView {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            groups: Vec::new(),
        }
    }

    /// Adds `group` unless it has no rows
    pub fn with_group(mut self, group: TokenGroup) -> Self {
        if !group.is_empty() {
            self.groups.push(group);
        }
        self
    }

    /// Adds a group built from `scale` when the scale is defined
    pub fn with_scale(
        self,
        name: &str,
        scale: Option<&TokenScale>,
        restrictions: &TokenRestrictions<'_>,
        category: &str,
        subcategory: Option<&str>,
    ) -> Self {
        match scale {
            Some(scale) => self.with_group(TokenGroup::from_scale(
                name,
                scale,
                restrictions,
                category,
                subcategory,
            )),
            None => self,
        }
    }

    pub fn group(&self, name: &str) -> Option<&TokenGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn rows(&self) -> impl Iterator<Item = &TokenRow> {
        self.groups.iter().flat_map(|g| g.rows.iter())
    }

    /// Plain-text rendering; restricted rows carry their class in brackets
    pub fn render_text(&self) -> String {
        let mut out = format!("== {} ==\n", self.title);
        if self.groups.is_empty() {
            out.push_str("  (no tokens)\n");
        }
        for group in &self.groups {
            out.push_str(&format!("\n{}\n", group.name));
            let width = group.rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
            for row in &group.rows {
                out.push_str(&format!("  {:<width$}  {}", row.label, row.value, width = width));
                if !row.class.is_empty() {
                    out.push_str(&format!("  [{}]", row.class));
                }
                out.push('\n');
            }
        }
        out
    }
}

/// "primary" → "Primary"
pub fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
