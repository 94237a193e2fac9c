//! Dashboard color palette and stylesheet.
//!
//! Dark slate background with teal accents. Band colors come from
//! [`HealthBand::color`](crate::domain::HealthBand::color).

/// Dashboard color palette (CSS hex).
pub struct DashboardTheme;

impl DashboardTheme {
    // === Primary Colors ===

    /// Deep teal
    pub const PRIMARY: &'static str = "#0D9488";

    /// Lighter teal for highlights
    pub const PRIMARY_LIGHT: &'static str = "#2DD4BF";

    /// Blue used for input bars
    pub const INFO: &'static str = "#3B82F6";

    // === Background Colors ===

    pub const BG_DARK: &'static str = "#0F172A";
    pub const BG_SURFACE: &'static str = "#1E293B";
    pub const BG_CARD: &'static str = "#334155";

    // === Text Colors ===

    pub const TEXT_PRIMARY: &'static str = "#F8FAFC";
    pub const TEXT_SECONDARY: &'static str = "#94A3B8";
    pub const TEXT_MUTED: &'static str = "#64748B";

    /// Rose, for error messages
    pub const DANGER: &'static str = "#F43F5E";

    /// Format an RGB triple as a CSS hex color.
    #[must_use]
    pub fn hex((r, g, b): (u8, u8, u8)) -> String {
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// Page stylesheet.
    #[must_use]
    pub fn stylesheet() -> String {
        format!(
            "body {{ background: {bg}; color: {text}; font-family: system-ui, sans-serif; margin: 0; }}\n\
             main {{ max-width: 720px; margin: 2rem auto; padding: 0 1rem; }}\n\
             h1 {{ color: {primary_light}; font-weight: 600; }}\n\
             form, .panel {{ background: {surface}; border: 1px solid {card}; border-radius: 8px; padding: 1rem; margin-bottom: 1rem; }}\n\
             label {{ display: block; color: {secondary}; margin: .5rem 0 .25rem; }}\n\
             input {{ background: {bg}; color: {text}; border: 1px solid {card}; border-radius: 4px; padding: .4rem; width: 12rem; }}\n\
             button {{ background: {primary}; color: {text}; border: 0; border-radius: 4px; padding: .5rem 1.25rem; margin-top: 1rem; cursor: pointer; }}\n\
             .prompt {{ color: {muted}; }}\n\
             .error {{ color: {danger}; }}\n\
             footer {{ color: {muted}; font-size: .8rem; }}\n",
            bg = Self::BG_DARK,
            surface = Self::BG_SURFACE,
            card = Self::BG_CARD,
            text = Self::TEXT_PRIMARY,
            secondary = Self::TEXT_SECONDARY,
            muted = Self::TEXT_MUTED,
            primary = Self::PRIMARY,
            primary_light = Self::PRIMARY_LIGHT,
            danger = Self::DANGER,
        )
    }
}
