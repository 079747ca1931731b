use crate::designs::{DesignSystem, TokenScale};
use crate::utils::camel_to_kebab;

use super::allowed_entries;

fn banner(title: &str) -> String {
    format!(
        "\n  /* ========================================\n     {}\n     ======================================== */\n",
        title
    )
}

/// Append `--{prefix}-{key}: value;` for every allowed entry
fn push_scale(
    css: &mut String,
    system: &DesignSystem,
    scale: &TokenScale,
    prefix: &str,
    category: &str,
    subcategory: Option<&str>,
) {
    for (key, value) in allowed_entries(system, scale, category, subcategory) {
        css.push_str(&format!("  --{}-{}: {};\n", prefix, key, value));
    }
}

/// CSS custom properties inside a single `:root` block
pub fn export_to_css(system: &DesignSystem) -> String {
    let tokens = &system.tokens;
    let mut css = format!(
        "/**\n * {} Design System - CSS Custom Properties\n * {}\n *\n * Only the allowed tokens for this design system are included.\n */\n\n:root {{",
        system.name, system.description
    );

    css.push_str(&banner("COLORS"));
    let colors = &tokens.colors;
    for (title, group, scale) in [
        ("Primary Colors", "primary", &colors.primary),
        ("Secondary Colors", "secondary", &colors.secondary),
        ("Neutral Colors", "neutral", &colors.neutral),
        ("Accent Colors", "accent", &colors.accent),
    ] {
        if let Some(scale) = scale {
            css.push_str(&format!("\n  /* {} */\n", title));
            push_scale(&mut css, system, scale, &format!("color-{}", group), "colors", Some(group));
        }
    }
    // Semantic colors drop the group name: --color-success
    if let Some(semantic) = &colors.semantic {
        css.push_str("\n  /* Semantic Colors */\n");
        push_scale(&mut css, system, semantic, "color", "colors", Some("semantic"));
    }
    for (title, group, scale) in [
        ("Text Colors", "text", &colors.text),
        ("Background Colors", "background", &colors.background),
        ("Border Colors", "border", &colors.border),
    ] {
        if let Some(scale) = scale {
            css.push_str(&format!("\n  /* {} */\n", title));
            push_scale(&mut css, system, scale, &format!("color-{}", group), "colors", Some(group));
        }
    }

    css.push_str(&banner("TYPOGRAPHY"));
    let typography = &tokens.typography;
    for (title, prefix, subcategory, scale) in [
        ("Font Families", "font-family", "fontFamily", &typography.font_family),
        ("Font Sizes", "font-size", "fontSize", &typography.font_size),
        ("Font Weights", "font-weight", "fontWeight", &typography.font_weight),
        ("Line Heights", "line-height", "lineHeight", &typography.line_height),
    ] {
        if let Some(scale) = scale {
            css.push_str(&format!("\n  /* {} */\n", title));
            push_scale(&mut css, system, scale, prefix, "typography", Some(subcategory));
        }
    }

    css.push_str(&banner("SPACING"));
    push_scale(&mut css, system, &tokens.spacing, "spacing", "spacing", None);

    for (title, prefix, category, scale) in [
        ("BORDER RADIUS", "border-radius", "borderRadius", &tokens.border_radius),
        ("SHADOWS", "shadow", "shadows", &tokens.shadows),
        ("TRANSITIONS", "transition", "transitions", &tokens.transitions),
    ] {
        if let Some(scale) = scale {
            css.push_str(&banner(title));
            push_scale(&mut css, system, scale, prefix, category, None);
        }
    }

    if let Some(navigation) = &tokens.navigation {
        css.push_str(&banner("NAVIGATION"));
        for (key, value) in allowed_entries(system, navigation, "navigation", None) {
            css.push_str(&format!("  --nav-{}: {};\n", camel_to_kebab(key), value));
        }
    }

    if let Some(widths) = tokens.borders.as_ref().and_then(|b| b.widths.as_ref()) {
        css.push_str(&banner("BORDERS"));
        css.push_str("\n  /* Border Widths */\n");
        push_scale(&mut css, system, widths, "border-width", "borders", Some("widths"));
    }

    if let Some(opacity) = &tokens.opacity {
        css.push_str(&banner("OPACITY"));
        push_scale(&mut css, system, opacity, "opacity", "opacity", None);
    }

    css.push_str("}\n");
    css
}
