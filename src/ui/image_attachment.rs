use dioxus::prelude::*;

use crate::{
    style::{self, color, radius, spacing},
    ui::lightbox::ImageLightbox,
};

const IMAGE_OFF_ICON: Asset = asset!("/assets/image-off.svg");

/// Outcome of the single load attempt an attachment makes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed,
}

impl LoadState {
    /// `Loaded` and `Failed` are final; later events change nothing.
    pub fn on_load(self) -> Self {
        match self {
            LoadState::Loading => LoadState::Loaded,
            done => done,
        }
    }

    pub fn on_error(self) -> Self {
        match self {
            LoadState::Loading => LoadState::Failed,
            done => done,
        }
    }

    pub fn is_loading(self) -> bool {
        self == LoadState::Loading
    }

    pub fn has_error(self) -> bool {
        self == LoadState::Failed
    }

    /// The viewer only opens on an image that actually arrived.
    pub fn can_open(self) -> bool {
        self == LoadState::Loaded
    }
}

/// [`LoadState`] tagged with the url it was observed for. Any other url reads
/// as `Loading` until events for it arrive, so a host that swaps the url gets
/// a fresh load attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachmentLoad {
    url: String,
    state: LoadState,
}

impl AttachmentLoad {
    pub fn state_for(&self, url: &str) -> LoadState {
        if self.url == url {
            self.state
        } else {
            LoadState::Loading
        }
    }

    pub fn on_load(&mut self, url: &str) {
        self.state = self.state_for(url).on_load();
        self.url = url.to_string();
    }

    pub fn on_error(&mut self, url: &str) {
        self.state = self.state_for(url).on_error();
        self.url = url.to_string();
    }
}

/// Thumbnail of an image attached to a message. Clicking a loaded thumbnail
/// opens it in an [`ImageLightbox`].
#[component]
pub fn ImageAttachment(url: String, alt: Option<String>) -> Element {
    let mut load = use_signal(AttachmentLoad::default);
    let mut lightbox_open = use_signal(|| false);

    let state = load.read().state_for(&url);
    let alt_text = alt.clone().unwrap_or_else(|| "Image attachment".to_string());
    let container_class = if state.can_open() { "image-attachment loaded" } else { "image-attachment" };
    let container_style = format!(
        "position: relative; display: inline-block; overflow: hidden; border-radius: {}; background: {}; cursor: {};",
        radius::MD,
        color::SURFACE_MUTED,
        if state.can_open() { "zoom-in" } else { "default" },
    );
    let image_style = format!(
        "display: block; max-width: {}; max-height: {}; opacity: {}; transition: opacity 0.2s;",
        style::THUMBNAIL_MAX_WIDTH,
        style::THUMBNAIL_MAX_HEIGHT,
        if state.is_loading() { style::LOADING_OPACITY } else { 1.0 },
    );
    let error_style = format!(
        "display: flex; flex-direction: column; align-items: center; gap: {}; padding: {}; color: {}; font-size: 0.875rem;",
        spacing::SM,
        spacing::LG,
        color::TEXT_MUTED,
    );

    rsx! {
        div {
            class: container_class,
            style: container_style,
            onclick: {
                let url = url.clone();
                move |_: MouseEvent| {
                    if load.read().state_for(&url).can_open() {
                        lightbox_open.set(true);
                    }
                }
            },
            if state.has_error() {
                div { class: "image-attachment-error", style: error_style,
                    img { src: IMAGE_OFF_ICON, alt: "" }
                    span { "Failed to load image" }
                }
            } else {
                img {
                    src: "{url}",
                    alt: "{alt_text}",
                    style: image_style,
                    onload: {
                        let url = url.clone();
                        move |_| load.write().on_load(&url)
                    },
                    onerror: {
                        let url = url.clone();
                        move |_| load.write().on_error(&url)
                    },
                }
                if state.is_loading() {
                    div { class: "image-attachment-spinner-wrap",
                        div { class: "spinner", role: "status", aria_label: "Loading image" }
                    }
                }
                if state.can_open() {
                    div { class: "image-attachment-hover" }
                }
            }
        }
        if lightbox_open() {
            ImageLightbox {
                is_open: true,
                url: url.clone(),
                alt,
                on_close: move |_| lightbox_open.set(false),
            }
        }
    }
}
