//! User interface components.
//!
//! Each widget owns only its own view state. `listener` holds the hook the
//! lightbox and the multi-select use to subscribe to document-wide events.

pub mod gallery;          // Demo page hosting the widgets (public for routing)
pub mod image_attachment; // Thumbnail with load/error states
pub mod lightbox;         // Full-screen image viewer
pub mod listener;         // Document listeners scoped to a component
pub mod multi_select;     // Searchable multi-select dropdown
pub mod tooltip;          // Hover tooltip with show delay
