use crate::designs::DesignSystem;
use crate::utils::extract_duration;

use super::{allowed_entries, js_key, js_string, js_value, push_js_block};

/// `theme.extend` fragment for a Tailwind config
pub fn export_to_tailwind(system: &DesignSystem) -> String {
    let tokens = &system.tokens;
    let mut config = format!(
        "/**\n * {} Design System - Tailwind Configuration\n * {}\n *\n * Only the allowed tokens for this design system are included.\n *\n * Usage: Extend your existing tailwind.config.js with these values\n */\n\nmodule.exports = {{\n  theme: {{\n    extend: {{\n      colors: {{\n",
        system.name, system.description
    );

    let colors = &tokens.colors;
    for (group, scale) in [
        ("primary", &colors.primary),
        ("secondary", &colors.secondary),
        ("neutral", &colors.neutral),
        ("accent", &colors.accent),
    ] {
        if let Some(scale) = scale {
            push_js_block(&mut config, "        ", group, system, scale, "colors", Some(group));
        }
    }
    // Semantic colors sit directly under `colors`
    if let Some(semantic) = &colors.semantic {
        for (name, value) in allowed_entries(system, semantic, "colors", Some("semantic")) {
            config.push_str(&format!("        {}: {},\n", js_key(name), js_value(value)));
        }
    }
    config.push_str("      },\n");

    let typography = &tokens.typography;
    for (name, subcategory, scale) in [
        ("fontFamily", "fontFamily", &typography.font_family),
        ("fontSize", "fontSize", &typography.font_size),
        ("fontWeight", "fontWeight", &typography.font_weight),
    ] {
        if let Some(scale) = scale {
            push_js_block(&mut config, "      ", name, system, scale, "typography", Some(subcategory));
        }
    }

    push_js_block(&mut config, "      ", "spacing", system, &tokens.spacing, "spacing", None);

    for (name, category, scale) in [
        ("borderRadius", "borderRadius", &tokens.border_radius),
        ("boxShadow", "shadows", &tokens.shadows),
    ] {
        if let Some(scale) = scale {
            push_js_block(&mut config, "      ", name, system, scale, category, None);
        }
    }

    if let Some(transitions) = &tokens.transitions {
        config.push_str("      transitionDuration: {\n");
        for (key, value) in allowed_entries(system, transitions, "transitions", None) {
            let value = value.to_string();
            config.push_str(&format!(
                "        {}: {},\n",
                js_key(key),
                js_string(extract_duration(&value))
            ));
        }
        config.push_str("      },\n");
    }

    config.push_str("    },\n  },\n  plugins: [],\n};\n");
    config
}
