//! Section registry - manual registration, collected in `sections::get_all_sections()`

use super::Section;

/// Entry for a registered section
pub struct SectionEntry {
    pub section: Box<dyn Section>,
}

impl SectionEntry {
    pub fn new(section: Box<dyn Section>) -> Self {
        Self { section }
    }
}

/// Get all registered sections, in gallery order
pub fn all_sections() -> impl Iterator<Item = &'static SectionEntry> {
    super::sections::get_all_sections().iter()
}

/// Find sections by category
pub fn sections_by_category(category: &str) -> Vec<&'static SectionEntry> {
    all_sections()
        .filter(|e| e.section.category() == category)
        .collect()
}

/// Get unique categories
pub fn all_categories() -> Vec<&'static str> {
    let mut categories: Vec<_> = all_sections().map(|e| e.section.category()).collect();
    categories.sort();
    categories.dedup();
    categories
}

pub fn find_section(id: &str) -> Option<&'static SectionEntry> {
    all_sections().find(|e| e.section.id() == id)
}
