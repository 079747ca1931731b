use crate::designs::{DesignSystem, TokenScale};
use crate::utils::camel_to_kebab;

use super::allowed_entries;

fn banner(title: &str) -> String {
    format!(
        "\n// ========================================\n// {}\n// ========================================\n",
        title
    )
}

fn push_scale(
    scss: &mut String,
    system: &DesignSystem,
    scale: &TokenScale,
    prefix: &str,
    category: &str,
    subcategory: Option<&str>,
) {
    for (key, value) in allowed_entries(system, scale, category, subcategory) {
        scss.push_str(&format!("${}-{}: {};\n", prefix, key, value));
    }
}

/// SCSS `$variables`, same names as the CSS export
pub fn export_to_scss(system: &DesignSystem) -> String {
    let tokens = &system.tokens;
    let mut scss = format!(
        "//\n// {} Design System - SCSS Variables\n// {}\n//\n// Only the allowed tokens for this design system are included.\n//\n",
        system.name, system.description
    );

    scss.push_str(&banner("COLORS"));
    let colors = &tokens.colors;
    for (title, group, scale) in [
        ("Primary Colors", "primary", &colors.primary),
        ("Secondary Colors", "secondary", &colors.secondary),
        ("Neutral Colors", "neutral", &colors.neutral),
        ("Accent Colors", "accent", &colors.accent),
    ] {
        if let Some(scale) = scale {
            scss.push_str(&format!("\n// {}\n", title));
            push_scale(&mut scss, system, scale, &format!("color-{}", group), "colors", Some(group));
        }
    }
    if let Some(semantic) = &colors.semantic {
        scss.push_str("\n// Semantic Colors\n");
        push_scale(&mut scss, system, semantic, "color", "colors", Some("semantic"));
    }

    scss.push_str(&banner("TYPOGRAPHY"));
    let typography = &tokens.typography;
    for (title, prefix, subcategory, scale) in [
        ("Font Families", "font-family", "fontFamily", &typography.font_family),
        ("Font Sizes", "font-size", "fontSize", &typography.font_size),
        ("Font Weights", "font-weight", "fontWeight", &typography.font_weight),
    ] {
        if let Some(scale) = scale {
            scss.push_str(&format!("\n// {}\n", title));
            push_scale(&mut scss, system, scale, prefix, "typography", Some(subcategory));
        }
    }

    scss.push_str(&banner("SPACING"));
    push_scale(&mut scss, system, &tokens.spacing, "spacing", "spacing", None);

    for (title, prefix, category, scale) in [
        ("BORDER RADIUS", "border-radius", "borderRadius", &tokens.border_radius),
        ("SHADOWS", "shadow", "shadows", &tokens.shadows),
        ("TRANSITIONS", "transition", "transitions", &tokens.transitions),
    ] {
        if let Some(scale) = scale {
            scss.push_str(&banner(title));
            push_scale(&mut scss, system, scale, prefix, category, None);
        }
    }

    if let Some(navigation) = &tokens.navigation {
        scss.push_str(&banner("NAVIGATION"));
        for (key, value) in allowed_entries(system, navigation, "navigation", None) {
            scss.push_str(&format!("$nav-{}: {};\n", camel_to_kebab(key), value));
        }
    }

    scss
}
