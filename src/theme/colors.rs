//! Color constants for the SACTIFI palette.
//!
//! These are emitted as CSS custom properties by [`root_variables`];
//! `GLOBAL_STYLES` only ever refers to the variables.

// === VOID (Backgrounds) ===
pub const VOID: &str = "#050508";
pub const VOID_LIGHTER: &str = "#0a0a12";
pub const SURFACE: &str = "rgba(255, 255, 255, 0.03)";
pub const SURFACE_HOVER: &str = "rgba(255, 255, 255, 0.06)";
pub const BORDER: &str = "rgba(255, 255, 255, 0.08)";
pub const BORDER_STRONG: &str = "rgba(255, 255, 255, 0.16)";

// === PRIMARY (Links, Active State, Glow) ===
pub const PRIMARY: &str = "#00d4ff";
pub const PRIMARY_GLOW: &str = "rgba(0, 212, 255, 0.35)";

// === ACCENT (Gradients, Highlights) ===
pub const ACCENT: &str = "#7c3aed";
pub const ACCENT_GLOW: &str = "rgba(124, 58, 237, 0.35)";

// === SEMANTIC ===
pub const GREEN: &str = "#10b981";
pub const GREEN_GLOW: &str = "rgba(16, 185, 129, 0.3)";
pub const DANGER: &str = "#ef4444";
pub const DANGER_GLOW: &str = "rgba(239, 68, 68, 0.3)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f5f7fa";
pub const TEXT_SECONDARY: &str = "rgba(245, 247, 250, 0.72)";
pub const TEXT_MUTED: &str = "rgba(245, 247, 250, 0.48)";

const PALETTE: [(&str, &str); 17] = [
    ("void", VOID),
    ("void-lighter", VOID_LIGHTER),
    ("surface", SURFACE),
    ("surface-hover", SURFACE_HOVER),
    ("border", BORDER),
    ("border-strong", BORDER_STRONG),
    ("primary", PRIMARY),
    ("primary-glow", PRIMARY_GLOW),
    ("accent", ACCENT),
    ("accent-glow", ACCENT_GLOW),
    ("green", GREEN),
    ("green-glow", GREEN_GLOW),
    ("danger", DANGER),
    ("danger-glow", DANGER_GLOW),
    ("text-primary", TEXT_PRIMARY),
    ("text-secondary", TEXT_SECONDARY),
    ("text-muted", TEXT_MUTED),
];

/// `:root` block declaring every palette colour plus the brand gradient.
pub fn root_variables() -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in PALETTE {
        css.push_str(&format!("  --{name}: {value};\n"));
    }
    css.push_str(&format!(
        "  --gradient: linear-gradient(135deg, {PRIMARY} 0%, {ACCENT} 100%);\n}}\n"
    ));
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::GLOBAL_STYLES;

    #[test]
    fn declares_brand_colours() {
        let css = root_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--primary: #00d4ff;"));
        assert!(css.contains("--primary-glow: rgba(0, 212, 255, 0.35);"));
        assert!(css.contains("--gradient: linear-gradient(135deg, #00d4ff 0%, #7c3aed 100%);"));
    }

    #[test]
    fn every_variable_the_stylesheet_reads_is_declared() {
        let css = root_variables();
        for (name, _) in PALETTE {
            let var = format!("var(--{name})");
            if GLOBAL_STYLES.contains(&var) {
                assert!(css.contains(&format!("--{name}:")), "undeclared {name}");
            }
        }
        assert!(!GLOBAL_STYLES.contains("--primary: "));
    }
}
