//! Design tokens shared by the inline styles of the widgets.
//!
//! The stylesheet in `assets/main.css` carries the class-based rules (spinner
//! animation, hover affordances, dropdown chrome); anything computed at render
//! time pulls its values from here so the two stay in step.

/// Colour palette.
pub mod color {
    pub const SURFACE: &str = "#ffffff";
    pub const SURFACE_MUTED: &str = "#f3f4f6";
    pub const BORDER: &str = "#d1d5db";
    pub const TEXT: &str = "#111827";
    pub const TEXT_MUTED: &str = "#6b7280";
    pub const ACCENT: &str = "#2563eb";
    pub const DANGER: &str = "#dc2626";
    pub const TOOLTIP_BG: &str = "#111827";
    pub const TOOLTIP_TEXT: &str = "#f9fafb";
    /// Lightbox backdrop, black at 90%.
    pub const BACKDROP: &str = "rgba(0, 0, 0, 0.9)";
}

/// Spacing scale in rem.
pub mod spacing {
    pub const XS: &str = "0.25rem";
    pub const SM: &str = "0.5rem";
    pub const MD: &str = "1rem";
    pub const LG: &str = "1.5rem";
}

pub mod radius {
    pub const SM: &str = "4px";
    pub const MD: &str = "8px";
    pub const PILL: &str = "999px";
}

/// Stacking order, lowest first.
pub mod layer {
    pub const DROPDOWN: u32 = 20;
    pub const TOOLTIP: u32 = 30;
    pub const LIGHTBOX: u32 = 50;
}

/// Opacity of an attachment image while it is still loading.
pub const LOADING_OPACITY: f32 = 0.5;

pub const THUMBNAIL_MAX_WIDTH: &str = "320px";
pub const THUMBNAIL_MAX_HEIGHT: &str = "240px";

/// Transition applied to the lightbox image when scale or pan changes.
pub const ZOOM_TRANSITION: &str = "transform 0.2s ease-out";
