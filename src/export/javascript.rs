use crate::designs::DesignSystem;

use super::push_js_block;

/// ES module exporting `designTokens` (named and default)
pub fn export_to_javascript(system: &DesignSystem) -> String {
    let tokens = &system.tokens;
    let mut js = format!(
        "/**\n * {} Design System - JavaScript/TypeScript Tokens\n * {}\n *\n * Only the allowed tokens for this design system are included.\n */\n\nexport const designTokens = {{\n",
        system.name, system.description
    );

    js.push_str("  colors: {\n");
    for (group, scale) in tokens.colors.groups() {
        push_js_block(&mut js, "    ", group, system, scale, "colors", Some(group));
    }
    js.push_str("  },\n");

    js.push_str("  typography: {\n");
    let typography = &tokens.typography;
    for (name, scale) in [
        ("fontFamily", &typography.font_family),
        ("fontSize", &typography.font_size),
        ("fontWeight", &typography.font_weight),
        ("lineHeight", &typography.line_height),
    ] {
        if let Some(scale) = scale {
            push_js_block(&mut js, "    ", name, system, scale, "typography", Some(name));
        }
    }
    js.push_str("  },\n");

    push_js_block(&mut js, "  ", "spacing", system, &tokens.spacing, "spacing", None);

    for (name, scale) in [
        ("borderRadius", &tokens.border_radius),
        ("shadows", &tokens.shadows),
        ("transitions", &tokens.transitions),
        // Navigation keeps its camelCase keys here
        ("navigation", &tokens.navigation),
    ] {
        if let Some(scale) = scale {
            push_js_block(&mut js, "  ", name, system, scale, name, None);
        }
    }

    js.push_str("};\n\nexport default designTokens;\n");
    js
}
