//! Demo page hosting every widget: a chat-style feed of image messages and a
//! tag filter whose selection this page owns.

use chrono::{DateTime, Duration, Local, Utc};
use dioxus::prelude::*;

use crate::{
    style::{color, spacing},
    ui::{image_attachment::ImageAttachment, multi_select::SearchableMultiSelect, tooltip::Tooltip},
    utils::{format_date, format_relative, format_time},
};

#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub id: u32,
    pub author: String,
    pub caption: String,
    pub image_url: String,
    pub sent_at: DateTime<Utc>,
    pub tags: Vec<String>,
}

/// Adds `value` to the selection, or removes it if already there.
pub fn toggle_membership(selected: &mut Vec<String>, value: String) {
    if let Some(pos) = selected.iter().position(|v| *v == value) {
        selected.remove(pos);
    } else {
        selected.push(value);
    }
}

/// Items carrying at least one selected tag; everything when nothing is
/// selected.
pub fn matching_items<'a>(items: &'a [FeedItem], selected: &[String]) -> Vec<&'a FeedItem> {
    items
        .iter()
        .filter(|item| selected.is_empty() || item.tags.iter().any(|t| selected.contains(t)))
        .collect()
}

/// Sorted, de-duplicated tags across all items.
pub fn all_tags(items: &[FeedItem]) -> Vec<String> {
    let mut tags: Vec<String> = items.iter().flat_map(|i| i.tags.iter().cloned()).collect();
    tags.sort();
    tags.dedup();
    tags
}

fn sample_feed(now: DateTime<Utc>) -> Vec<FeedItem> {
    let item = |id, author: &str, caption: &str, image_url: &str, ago: Duration, tags: &[&str]| FeedItem {
        id,
        author: author.to_string(),
        caption: caption.to_string(),
        image_url: image_url.to_string(),
        sent_at: now - ago,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    };
    vec![
        item(
            1,
            "Ana",
            "Ridge line just before sunset",
            "https://picsum.photos/id/1018/1200/800",
            Duration::minutes(4),
            &["landscape", "blue"],
        ),
        item(
            2,
            "Ben",
            "Found this one in the archive",
            "https://picsum.photos/id/1025/900/1200",
            Duration::hours(3),
            &["animals", "black"],
        ),
        item(
            3,
            "Ana",
            "This link is broken on purpose",
            "https://example.invalid/missing.png",
            Duration::hours(30),
            &["broken"],
        ),
        item(
            4,
            "Chidi",
            "Harbour at dawn",
            "https://picsum.photos/id/1043/1200/800",
            Duration::days(9),
            &["landscape", "red"],
        ),
    ]
}

#[component]
pub fn Gallery() -> Element {
    let now = Utc::now();
    let feed = use_hook(|| sample_feed(now));
    let mut selected: Signal<Vec<String>> = use_signal(Vec::new);

    let tags = all_tags(&feed);
    let chosen = selected();
    let visible: Vec<FeedItem> = matching_items(&feed, &chosen).into_iter().cloned().collect();
    let gap = spacing::MD;
    let muted = color::TEXT_MUTED;

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: {gap};",
            h1 { "Shared images" }
            SearchableMultiSelect {
                options: tags,
                selected: chosen.clone(),
                placeholder: "Filter by tag",
                on_toggle: move |value: String| selected.with_mut(|s| toggle_membership(s, value)),
            }
            if visible.is_empty() {
                p { style: "color: {muted};", "Nothing matches the selected tags." }
            }
            for (id, item) in visible.into_iter().map(|i| (i.id, i)) {
                FeedEntry { key: "{id}", item, now }
            }
        }
    }
}

#[component]
fn FeedEntry(item: FeedItem, now: DateTime<Utc>) -> Element {
    let local = item.sent_at.with_timezone(&Local);
    let relative = format_relative(&item.sent_at, &now);
    let full = format!("{} at {}", format_date(&local), format_time(&local));

    rsx! {
        article { class: "feed-entry",
            header { class: "feed-entry-meta",
                strong { "{item.author}" }
                Tooltip {
                    content: rsx! { "{full}" },
                    span { class: "feed-entry-time", "{relative}" }
                }
            }
            p { "{item.caption}" }
            ImageAttachment { url: item.image_url.clone(), alt: item.caption.clone() }
        }
    }
}
