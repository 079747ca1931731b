//! Markdown implementation guide bundled with every export

use crate::designs::{AllowedTokens, DesignSystem};

use super::EXPORT_FILES;

const NOT_SPECIFIED: &str = "Not specified";

fn push_list(guide: &mut String, label: &str, keys: Option<Vec<&str>>) {
    if let Some(keys) = keys {
        guide.push_str(&format!("- **{}**: {}\n", label, keys.join(", ")));
    }
}

fn restrictions_section(allowed: &AllowedTokens) -> String {
    let mut out = String::from(
        "## Token Restrictions\n\n\
         **This design system has specific token restrictions.** Only the tokens included in \
         this export are allowed to be used. Do not use tokens that are not present in these files.\n\n\
         ### Allowed Tokens\n\n",
    );

    if allowed.category("colors").is_some() {
        out.push_str("#### Colors\n");
        for (label, sub) in [
            ("Primary shades", "primary"),
            ("Secondary shades", "secondary"),
            ("Neutral shades", "neutral"),
        ] {
            push_list(&mut out, label, allowed.subcategory_keys("colors", sub));
        }
        out.push('\n');
    }

    if allowed.category("typography").is_some() {
        out.push_str("#### Typography\n");
        for (label, sub) in [
            ("Font weights", "fontWeight"),
            ("Font sizes", "fontSize"),
            ("Line heights", "lineHeight"),
        ] {
            push_list(&mut out, label, allowed.subcategory_keys("typography", sub));
        }
        out.push('\n');
    }

    for (title, category) in [
        ("Spacing", "spacing"),
        ("Border Radius", "borderRadius"),
        ("Shadows", "shadows"),
        ("Transitions", "transitions"),
    ] {
        if let Some(keys) = allowed.keys(category) {
            out.push_str(&format!("#### {}\n", title));
            out.push_str(&format!("- **Allowed values**: {}\n\n", keys.join(", ")));
        }
    }

    if let Some(types) = allowed.animation_types() {
        out.push_str("#### Animations\n");
        out.push_str(&format!("- **Allowed types**: {}\n\n", types.join(", ")));
    }

    out
}

/// Guide for implementing the exported system in a React application
pub fn generate_guide(system: &DesignSystem) -> String {
    let allowed = system.allowed_tokens.as_ref();
    let navigation = allowed
        .and_then(AllowedTokens::navigation_pattern)
        .unwrap_or(NOT_SPECIFIED);

    let mut guide = format!(
        "# {name} - AI Implementation Guide\n\n\
         ## Overview\n{description}\n\n\
         **Navigation Pattern**: {navigation}\n\n\
         This design system export contains all the design tokens you need to implement the \
         {name} design system in a React application.\n\n---\n\n",
        name = system.name,
        description = system.description,
        navigation = navigation,
    );

    match allowed {
        Some(allowed) => guide.push_str(&restrictions_section(allowed)),
        None => guide.push_str(
            "## Token Restrictions\n\nThis design system does not restrict its tokens. \
             Every token in the export may be used.\n\n",
        ),
    }

    guide.push_str("---\n\n## What's Included\n\nThis export package contains:\n\n");
    for (i, (file, description)) in EXPORT_FILES.iter().enumerate() {
        guide.push_str(&format!("{}. `{}` - {}\n", i + 1, file, description));
    }

    guide.push_str(
        "\n---\n\n## Implementation Guide for React\n\n\
         ### Option 1: CSS Custom Properties (Recommended)\n\n\
         Import `css-variables.css` once at the root of the app, then reference the variables:\n\n\
         ```css\n\
         .button {\n  \
           background-color: var(--color-primary-600);\n  \
           padding: var(--spacing-sm) var(--spacing-lg);\n  \
           border-radius: var(--border-radius-md);\n  \
           font-size: var(--font-size-base);\n  \
           transition: all var(--transition-base);\n\
         }\n\
         ```\n\n\
         ### Option 2: Tailwind CSS\n\n\
         Merge the exported `tailwind.config.js` into your own config and use the generated \
         classes (`bg-primary-600`, `rounded-md`, `shadow-sm`).\n\n\
         ### Option 3: JavaScript Module (CSS-in-JS)\n\n\
         ```tsx\n\
         import { designTokens } from './design-tokens';\n\n\
         const style = {\n  \
           backgroundColor: designTokens.colors.primary['600'],\n  \
           padding: `${designTokens.spacing.sm} ${designTokens.spacing.lg}`,\n\
         };\n\
         ```\n\n---\n\n",
    );

    guide.push_str(&format!(
        "## Design Principles\n\n\
         1. **Use only the allowed tokens** - Don't use tokens not present in the export\n\
         2. **Follow the navigation pattern** - Implement navigation as specified: {}\n\
         3. **Maintain consistency** - Use the same token for the same purpose across all components\n\
         4. **Respect the hierarchy** - Use lighter shades for backgrounds and darker shades for text\n\
         5. **Consider states** - Implement hover, focus and active states with the token scale\n\n---\n\n",
        navigation
    ));

    guide.push_str(
        "## Token Naming Convention\n\n\
         - **Colors**: `--color-{category}-{shade}` (e.g. `--color-primary-600`)\n\
         - **Typography**: `--font-{property}-{value}` (e.g. `--font-size-base`)\n\
         - **Spacing**: `--spacing-{size}` (e.g. `--spacing-md`)\n\
         - **Border Radius**: `--border-radius-{size}` (e.g. `--border-radius-lg`)\n\
         - **Shadows**: `--shadow-{size}` (e.g. `--shadow-md`)\n\
         - **Navigation**: `--nav-{property}` (e.g. `--nav-background-color`)\n\n---\n\n\
         **Remember**: Only use the tokens that are included in this export.\n",
    );

    guide
}
