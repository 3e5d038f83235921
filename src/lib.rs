use dioxus::prelude::*;

pub mod config;
pub mod download;
pub mod style;
pub mod ui;
pub mod utils;

pub use config::UiConfig;
pub use ui::image_attachment::ImageAttachment;
pub use ui::lightbox::ImageLightbox;
pub use ui::multi_select::SearchableMultiSelect;
pub use ui::tooltip::Tooltip;

use ui::gallery::Gallery;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(PageFrame)]
        #[route("/")]
        Gallery {},
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

/// Header and centred content column around every page.
#[component]
fn PageFrame() -> Element {
    let gap = style::spacing::MD;
    rsx! {
        div { class: "page",
            header { class: "page-header", style: "padding: {gap};",
                Link { class: "page-title", to: Route::Gallery {}, "Chat media" }
            }
            main {
                class: "page-body",
                style: "max-width: 720px; margin: 0 auto; padding: {gap};",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        h1 { "Not found" }
        p { "Nothing lives at /{path}." }
        Link { to: Route::Gallery {}, "Back to the gallery" }
    }
}
