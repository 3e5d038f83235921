//! Server-side renders of the widgets in their initial state.

use std::rc::Rc;

use chat_media_widgets::{App, ImageAttachment, ImageLightbox, SearchableMultiSelect, Tooltip};
use dioxus::history::{History, MemoryHistory};
use dioxus::prelude::*;

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn render_app_at(path: &str) -> String {
    let history = Rc::new(MemoryHistory::with_initial_path(path)) as Rc<dyn History>;
    let mut dom = VirtualDom::new(App).with_root_context(history);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn gallery_renders_inside_the_page_frame() {
    let html = render_app_at("/");
    assert!(html.contains("page-header"), "{html}");
    assert!(html.contains("Chat media"), "{html}");
    assert!(html.contains("Shared images"), "{html}");
}

#[test]
fn unknown_path_names_the_missing_page() {
    let html = render_app_at("/missing/page");
    assert!(html.contains("page-header"), "{html}");
    assert!(html.contains("Nothing lives at /missing/page."), "{html}");
    assert!(html.contains("Back to the gallery"), "{html}");
}

#[test]
fn attachment_starts_dimmed_with_a_spinner() {
    fn app() -> Element {
        rsx! { ImageAttachment { url: "a.jpg", alt: "A cat" } }
    }
    let html = render(app);
    assert!(html.contains(r#"src="a.jpg""#), "{html}");
    assert!(html.contains(r#"alt="A cat""#), "{html}");
    assert!(html.contains("spinner"), "{html}");
    assert!(html.contains("opacity: 0.5"), "{html}");
    assert!(!html.contains("Failed to load image"), "{html}");
    assert!(!html.contains("lightbox-backdrop"), "{html}");
}

#[test]
fn closed_lightbox_renders_nothing() {
    fn app() -> Element {
        rsx! {
            ImageLightbox { is_open: false, url: "a.jpg", on_close: |_| {} }
        }
    }
    let html = render(app);
    assert!(!html.contains("lightbox"), "{html}");
    assert!(!html.contains("a.jpg"), "{html}");
}

#[test]
fn open_lightbox_starts_at_full_size() {
    fn app() -> Element {
        rsx! {
            ImageLightbox { is_open: true, url: "a.jpg", on_close: |_| {} }
        }
    }
    let html = render(app);
    assert!(html.contains("lightbox-backdrop"), "{html}");
    assert!(html.contains("100%"), "{html}");
    assert!(html.contains("scale(1)"), "{html}");
    assert!(html.contains(r#"title="Zoom out""#), "{html}");
    assert!(html.contains(r#"title="Download""#), "{html}");
}

#[test]
fn multi_select_shows_selection_as_tags_and_starts_closed() {
    fn app() -> Element {
        rsx! {
            SearchableMultiSelect {
                options: vec!["blue".to_string(), "black".to_string(), "red".to_string()],
                selected: vec!["red".to_string()],
                on_toggle: |_| {},
            }
        }
    }
    let html = render(app);
    assert!(html.contains("multi-select-tag"), "{html}");
    assert!(html.contains("Remove red"), "{html}");
    assert!(html.contains("Select..."), "{html}");
    assert!(!html.contains("multi-select-menu"), "{html}");
    assert!(!html.contains("No results found"), "{html}");
}

#[test]
fn tooltip_is_hidden_until_hovered() {
    fn app() -> Element {
        rsx! {
            Tooltip { content: rsx! { "Oct 18, 2026 at 14:05" }, delay_ms: 200u64,
                span { "5m ago" }
            }
        }
    }
    let html = render(app);
    assert!(html.contains("5m ago"), "{html}");
    assert!(!html.contains("Oct 18, 2026"), "{html}");
    assert!(!html.contains("tooltip-bubble"), "{html}");
}
