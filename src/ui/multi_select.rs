//! Dropdown for picking several strings out of a list, with a search box.
//!
//! The component never stores the selection. It renders what the caller
//! passes in `selected` and reports every toggle through `on_toggle`; adding or
//! removing the value is up to the caller.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

use crate::{
    style::{color, layer, radius, spacing},
    ui::listener::{use_document_listener, DocumentEvent},
};

const CHEVRON_ICON: Asset = asset!("/assets/chevron-down.svg");

static NEXT_ROOT_ID: AtomicU64 = AtomicU64::new(1);

/// Options containing `search`, ignoring case. An empty search keeps all.
pub fn filter_options(options: &[String], search: &str) -> Vec<String> {
    if search.is_empty() {
        return options.to_vec();
    }
    let needle = search.to_lowercase();
    options
        .iter()
        .filter(|o| o.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

fn option_class(selected: bool) -> &'static str {
    if selected {
        "multi-select-option selected"
    } else {
        "multi-select-option"
    }
}

/// Open/closed state of the menu and the text typed into its search box.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropdownState {
    open: bool,
    search: String,
}

impl DropdownState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: String) {
        self.search = search;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open = true;
        }
    }

    /// Closing always forgets the search text.
    pub fn close(&mut self) {
        self.open = false;
        self.search.clear();
    }
}

#[component]
pub fn SearchableMultiSelect(
    options: Vec<String>,
    selected: Vec<String>,
    on_toggle: EventHandler<String>,
    #[props(default = "Select...".to_string())] placeholder: String,
) -> Element {
    let root_id = use_hook(|| format!("multi-select-{}", NEXT_ROOT_ID.fetch_add(1, Ordering::Relaxed)));
    let mut dropdown = use_signal(DropdownState::default);

    let close_outside = use_callback(move |_: ()| {
        if dropdown.peek().is_open() {
            dropdown.write().close();
        }
    });
    use_document_listener(DocumentEvent::PointerDownOutside(root_id.clone()), close_outside);

    let state = dropdown();
    let open = state.is_open();
    let search = state.search().to_string();
    let filtered = filter_options(&options, &search);
    let gap = spacing::XS;
    let menu_style = format!(
        "
        position: absolute;
        top: calc(100% + {xs});
        left: 0;
        right: 0;
        padding: {xs};
        border: 1px solid {border};
        border-radius: {radius};
        background: {bg};
        box-shadow: 0 4px 12px rgba(0,0,0,.12);
        z-index: {z};
        ",
        xs = spacing::XS,
        border = color::BORDER,
        radius = radius::MD,
        bg = color::SURFACE,
        z = layer::DROPDOWN,
    );

    rsx! {
        div {
            id: "{root_id}",
            class: "multi-select",
            style: "position: relative; display: flex; flex-direction: column; gap: {gap};",
            if !selected.is_empty() {
                div { class: "multi-select-tags",
                    for value in selected.iter().cloned() {
                        span { key: "{value}", class: "multi-select-tag",
                            "{value}"
                            button {
                                class: "multi-select-tag-remove",
                                r#type: "button",
                                title: "Remove {value}",
                                onclick: {
                                    let value = value.clone();
                                    move |_: MouseEvent| on_toggle.call(value.clone())
                                },
                                "×"
                            }
                        }
                    }
                }
            }
            button {
                class: "multi-select-trigger",
                r#type: "button",
                aria_expanded: open,
                onclick: move |_: MouseEvent| dropdown.write().toggle(),
                span { "{placeholder}" }
                img { src: CHEVRON_ICON, alt: "" }
            }
            if open {
                div { class: "multi-select-menu", style: menu_style,
                    input {
                        class: "multi-select-search",
                        r#type: "text",
                        placeholder: "Search...",
                        autofocus: true,
                        value: "{search}",
                        oninput: move |e: Event<FormData>| dropdown.write().set_search(e.value()),
                    }
                    if filtered.is_empty() {
                        div { class: "multi-select-empty", "No results found" }
                    } else {
                        ul { class: "multi-select-options",
                            for value in filtered {
                                li {
                                    key: "{value}",
                                    class: option_class(selected.contains(&value)),
                                    onclick: {
                                        let value = value.clone();
                                        move |_: MouseEvent| on_toggle.call(value.clone())
                                    },
                                    span { class: "multi-select-check",
                                        if selected.contains(&value) { "✓" }
                                    }
                                    "{value}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colours() -> Vec<String> {
        ["blue", "black", "red"].map(String::from).to_vec()
    }

    #[test]
    fn filters_by_substring() {
        assert_eq!(filter_options(&colours(), "bl"), vec!["blue", "black"]);
        assert_eq!(filter_options(&colours(), "e"), vec!["blue", "red"]);
    }

    #[test]
    fn filter_ignores_case() {
        assert_eq!(filter_options(&colours(), "BL"), vec!["blue", "black"]);
        let mixed = vec!["Dark Blue".to_string(), "teal".to_string()];
        assert_eq!(filter_options(&mixed, "dark b"), vec!["Dark Blue"]);
    }

    #[test]
    fn empty_search_keeps_everything() {
        assert_eq!(filter_options(&colours(), ""), colours());
    }

    #[test]
    fn no_match_is_empty() {
        assert!(filter_options(&colours(), "green").is_empty());
    }

    #[test]
    fn closing_clears_search() {
        let mut state = DropdownState::default();
        state.toggle();
        assert!(state.is_open());
        state.set_search("bl".into());

        state.close();
        assert!(!state.is_open());
        assert_eq!(state.search(), "");
    }

    #[test]
    fn toggling_closed_clears_search_too() {
        let mut state = DropdownState::default();
        state.toggle();
        state.set_search("re".into());
        state.toggle();
        assert!(!state.is_open());
        assert_eq!(state.search(), "");

        state.toggle();
        assert!(state.is_open());
        assert_eq!(state.search(), "");
    }
}
