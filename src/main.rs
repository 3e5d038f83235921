use chat_media_widgets::{App, config};
use dioxus::{logger::tracing::warn, prelude::*};

fn main() {
    let (cfg, load_err) = match config::load() {
        Ok(cfg) => (cfg, None),
        Err(e) => (Default::default(), Some(e)),
    };
    dioxus::logger::init(cfg.level()).unwrap();
    if let Some(e) = load_err {
        warn!("Could not load ui config, using defaults: {e:?}");
    }

    LaunchBuilder::new()
        .with_context(cfg)
        .launch(App)
}
