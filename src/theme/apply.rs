//! Token application: design system → CSS custom properties

use tracing::info;

use super::port::ThemePort;
use crate::designs::{DesignSystem, TokenScale};
use crate::utils::camel_to_kebab;

/// Key transform applied before a token key becomes part of a variable name
#[derive(Clone, Copy)]
enum KeyStyle {
    Verbatim,
    Kebab,
}

/// Writes one scale and returns how many properties it set
fn apply_scale<P: ThemePort + ?Sized>(
    port: &mut P,
    prefix: &str,
    scale: Option<&TokenScale>,
    key_style: KeyStyle,
) -> usize {
    let Some(scale) = scale else {
        return 0;
    };
    for (key, value) in scale {
        let key = match key_style {
            KeyStyle::Verbatim => key.clone(),
            KeyStyle::Kebab => camel_to_kebab(key),
        };
        port.set_property(&format!("--{}-{}", prefix, key), &value.to_string());
    }
    scale.len()
}

/// Write every defined token of `system` onto `port`.
///
/// Colors, typography and spacing always run. Optional categories that the
/// system omits are skipped, so variables a previous system set for them stay
/// on the port. Animations are resolved per component and never flattened here.
pub fn apply_design_tokens<P: ThemePort + ?Sized>(system: &DesignSystem, port: &mut P) {
    use KeyStyle::{Kebab, Verbatim};

    let tokens = &system.tokens;
    let mut count = 0;

    for (group, scale) in tokens.colors.groups() {
        count += apply_scale(port, &format!("color-{}", group), Some(scale), Verbatim);
    }

    let typography = &tokens.typography;
    count += apply_scale(port, "font-family", typography.font_family.as_ref(), Verbatim);
    count += apply_scale(port, "font-size", typography.font_size.as_ref(), Verbatim);
    count += apply_scale(port, "font-weight", typography.font_weight.as_ref(), Verbatim);
    count += apply_scale(port, "line-height", typography.line_height.as_ref(), Verbatim);

    count += apply_scale(port, "spacing", Some(&tokens.spacing), Verbatim);

    count += apply_scale(port, "border-radius", tokens.border_radius.as_ref(), Verbatim);
    count += apply_scale(port, "shadow", tokens.shadows.as_ref(), Verbatim);
    count += apply_scale(port, "transition", tokens.transitions.as_ref(), Verbatim);
    count += apply_scale(port, "grid", tokens.grid.as_ref(), Verbatim);

    if let Some(layout) = &tokens.layout {
        count += apply_scale(port, "breakpoint", layout.breakpoints.as_ref(), Verbatim);
        count += apply_scale(port, "container", layout.containers.as_ref(), Verbatim);
    }

    if let Some(elevation) = &tokens.elevation {
        count += apply_scale(port, "elevation", elevation.levels.as_ref(), Verbatim);
        count += apply_scale(port, "z-index", elevation.z_index.as_ref(), Kebab);
    }

    count += apply_scale(port, "opacity", tokens.opacity.as_ref(), Verbatim);

    if let Some(borders) = &tokens.borders {
        count += apply_scale(port, "border-width", borders.widths.as_ref(), Verbatim);
        count += apply_scale(port, "border-style", borders.styles.as_ref(), Verbatim);
    }

    count += apply_scale(port, "focus", tokens.focus_states.as_ref(), Kebab);

    if let Some(surfaces) = &tokens.surfaces {
        count += apply_scale(port, "surface-background", surfaces.background.as_ref(), Verbatim);
        count += apply_scale(port, "surface", surfaces.surface.as_ref(), Verbatim);
    }

    count += apply_scale(port, "nav", tokens.navigation.as_ref(), Kebab);

    info!(
        event_type = "tokens_applied",
        system_id = %system.id,
        properties = count,
        "Applied design tokens"
    );
}
