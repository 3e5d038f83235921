//! Full-screen image viewer with zoom, drag panning, download and dismissal.

use dioxus::{
    logger::tracing::warn,
    prelude::*,
};

use crate::{
    config::use_ui_config,
    download::save_image,
    style::{color, layer, radius, spacing, ZOOM_TRANSITION},
    ui::listener::{use_document_listener, DocumentEvent},
};

const ZOOM_IN_ICON: Asset = asset!("/assets/zoom-in.svg");
const ZOOM_OUT_ICON: Asset = asset!("/assets/zoom-out.svg");
const DOWNLOAD_ICON: Asset = asset!("/assets/download.svg");
const CLOSE_ICON: Asset = asset!("/assets/close.svg");

pub const MIN_SCALE: f64 = 1.0;
pub const MAX_SCALE: f64 = 3.0;
pub const ZOOM_STEP: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Grab {
    pointer: (f64, f64),
    origin: (f64, f64),
    moved: bool,
}

/// Zoom and pan of the image inside an open lightbox.
///
/// A fresh value is made every time the viewer opens, which is what puts the
/// scale back to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    scale: f64,
    offset: (f64, f64),
    /// Pan allowed on each axis at scale 1.
    extent: f64,
    grab: Option<Grab>,
    /// Set when a drag that moved has just ended; swallows the click the
    /// browser sends after the pointer is released over the backdrop.
    swallow_click: bool,
}

impl ViewTransform {
    pub fn new(extent: f64) -> Self {
        Self {
            scale: MIN_SCALE,
            offset: (0.0, 0.0),
            extent: extent.max(0.0),
            grab: None,
            swallow_click: false,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> (f64, f64) {
        self.offset
    }

    pub fn can_zoom_in(&self) -> bool {
        self.scale < MAX_SCALE
    }

    pub fn can_zoom_out(&self) -> bool {
        self.scale > MIN_SCALE
    }

    pub fn zoom_in(&mut self) {
        self.scale = (self.scale + ZOOM_STEP).min(MAX_SCALE);
        self.offset = self.clamp(self.offset);
    }

    pub fn zoom_out(&mut self) {
        self.scale = (self.scale - ZOOM_STEP).max(MIN_SCALE);
        self.offset = self.clamp(self.offset);
    }

    /// Largest pan on each axis at the current scale.
    pub fn bound(&self) -> f64 {
        self.extent * self.scale
    }

    fn clamp(&self, (x, y): (f64, f64)) -> (f64, f64) {
        let b = self.bound();
        (x.clamp(-b, b), y.clamp(-b, b))
    }

    pub fn begin_drag(&mut self, pointer: (f64, f64)) {
        self.swallow_click = false;
        self.grab = Some(Grab {
            pointer,
            origin: self.offset,
            moved: false,
        });
    }

    pub fn drag_to(&mut self, pointer: (f64, f64)) {
        let Some(grab) = self.grab.as_mut() else {
            return;
        };
        let target = (
            grab.origin.0 + pointer.0 - grab.pointer.0,
            grab.origin.1 + pointer.1 - grab.pointer.1,
        );
        grab.moved |= pointer != grab.pointer;
        self.offset = self.clamp(target);
    }

    pub fn end_drag(&mut self) {
        if let Some(grab) = self.grab.take() {
            self.swallow_click = grab.moved;
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }

    /// True once after a drag that moved, for the click that trails it.
    pub fn take_drag_click(&mut self) -> bool {
        std::mem::take(&mut self.swallow_click)
    }

    /// The trailing click landed on the image instead of the backdrop.
    pub fn clear_drag_click(&mut self) {
        self.swallow_click = false;
    }

    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.offset.0, self.offset.1, self.scale
        )
    }
}

/// Modal image viewer. Renders nothing unless `is_open`.
///
/// Backdrop clicks, the close button and Escape all call `on_close`. A failed
/// download is logged and, when given, reported through `on_download_error`;
/// the viewer itself never changes because of it.
#[component]
pub fn ImageLightbox(
    is_open: bool,
    url: String,
    alt: Option<String>,
    on_close: EventHandler<()>,
    on_download_error: Option<EventHandler<String>>,
) -> Element {
    if !is_open {
        return rsx! {};
    }
    rsx! {
        LightboxOverlay { url, alt, on_close, on_download_error }
    }
}

#[component]
fn LightboxOverlay(
    url: String,
    alt: Option<String>,
    on_close: EventHandler<()>,
    on_download_error: Option<EventHandler<String>>,
) -> Element {
    let config = use_ui_config();
    let extent = config.drag_extent_px;
    let mut view = use_signal(move || ViewTransform::new(extent));

    use_document_listener(DocumentEvent::KeyDown("Escape"), on_close);

    let on_backdrop = move |_: MouseEvent| {
        if view.write().take_drag_click() {
            return;
        }
        on_close.call(());
    };
    let on_close_button = move |e: MouseEvent| {
        e.stop_propagation();
        on_close.call(());
    };
    let on_zoom_in = move |e: MouseEvent| {
        e.stop_propagation();
        view.write().zoom_in();
    };
    let on_zoom_out = move |e: MouseEvent| {
        e.stop_propagation();
        view.write().zoom_out();
    };
    let on_download = {
        let url = url.clone();
        move |e: MouseEvent| {
            e.stop_propagation();
            let url = url.clone();
            let config = config.clone();
            spawn(async move {
                if let Err(err) = save_image(&url, &config).await {
                    warn!("Failed to download image {url}: {err:?}");
                    if let Some(report) = on_download_error {
                        report.call(err.to_string());
                    }
                }
            });
        }
    };
    let on_grab = move |e: MouseEvent| {
        e.prevent_default();
        let p = e.client_coordinates();
        view.write().begin_drag((p.x, p.y));
    };
    let on_pointer_move = move |e: MouseEvent| {
        if !view.read().is_dragging() {
            return;
        }
        let p = e.client_coordinates();
        view.write().drag_to((p.x, p.y));
    };
    let on_release = move |_: MouseEvent| {
        view.write().end_drag();
    };

    let v = view();
    let percent = (v.scale() * 100.0).round() as u32;
    let image_style = format!(
        "transform: {}; transition: {}; cursor: {}; max-width: 90vw; max-height: 85vh; user-select: none;",
        v.css_transform(),
        if v.is_dragging() { "none" } else { ZOOM_TRANSITION },
        if v.is_dragging() { "grabbing" } else { "grab" },
    );
    let alt = alt.unwrap_or_default();

    rsx! {
        div {
            class: "lightbox-backdrop",
            role: "dialog",
            aria_modal: "true",
            style: backdrop_style(),
            onclick: on_backdrop,
            onmousemove: on_pointer_move,
            onmouseup: on_release,
            onmouseleave: move |_: MouseEvent| view.write().end_drag(),
            div {
                class: "lightbox-toolbar",
                style: toolbar_style(),
                button {
                    class: "lightbox-control",
                    title: "Zoom out",
                    disabled: !v.can_zoom_out(),
                    onclick: on_zoom_out,
                    img { src: ZOOM_OUT_ICON, alt: "Zoom out" }
                }
                span { class: "lightbox-scale", "{percent}%" }
                button {
                    class: "lightbox-control",
                    title: "Zoom in",
                    disabled: !v.can_zoom_in(),
                    onclick: on_zoom_in,
                    img { src: ZOOM_IN_ICON, alt: "Zoom in" }
                }
                button {
                    class: "lightbox-control",
                    title: "Download",
                    onclick: on_download,
                    img { src: DOWNLOAD_ICON, alt: "Download" }
                }
                button {
                    class: "lightbox-control",
                    title: "Close",
                    onclick: on_close_button,
                    img { src: CLOSE_ICON, alt: "Close" }
                }
            }
            div {
                class: "lightbox-image-wrapper",
                onclick: move |e: MouseEvent| {
                    e.stop_propagation();
                    view.write().clear_drag_click();
                },
                img {
                    src: "{url}",
                    alt: "{alt}",
                    draggable: "false",
                    style: image_style,
                    onmousedown: on_grab,
                }
            }
        }
    }
}

fn backdrop_style() -> String {
    format!(
        "
        position: fixed;
        inset: 0;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
        background: {};
        z-index: {};
        ",
        color::BACKDROP,
        layer::LIGHTBOX,
    )
}

fn toolbar_style() -> String {
    format!(
        "
        position: absolute;
        top: {md};
        right: {md};
        display: flex;
        align-items: center;
        gap: {sm};
        padding: {xs};
        border-radius: {radius};
        background: rgba(0, 0, 0, 0.5);
        color: {fg};
        z-index: 1;
        ",
        md = spacing::MD,
        sm = spacing::SM,
        xs = spacing::XS,
        radius = radius::MD,
        fg = color::SURFACE,
    )
}
