//! Document-wide event subscriptions scoped to a component's lifetime.
//!
//! Dioxus only delivers events to elements it renders, so listening on the
//! whole document goes through `document::eval`: a small script installs the
//! handler and forwards matching events back over the eval channel. The
//! handler is registered under an id unique to the owning component and
//! removed again when that component is dropped.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

/// Which document events are forwarded.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentEvent {
    /// `keydown` for one key, matched on `KeyboardEvent.key`.
    KeyDown(&'static str),
    /// `mousedown` whose target lies outside the element with this id.
    PointerDownOutside(String),
}

impl DocumentEvent {
    fn dom_event(&self) -> &'static str {
        match self {
            DocumentEvent::KeyDown(_) => "keydown",
            DocumentEvent::PointerDownOutside(_) => "mousedown",
        }
    }

    /// JS boolean expression over the event `e` deciding whether to forward it.
    fn predicate(&self) -> String {
        match self {
            DocumentEvent::KeyDown(key) => format!("e.key === {}", js_string(key)),
            DocumentEvent::PointerDownOutside(id) => format!(
                "(() => {{ const root = document.getElementById({}); return !root || !root.contains(e.target); }})()",
                js_string(id)
            ),
        }
    }
}

fn js_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

fn slot(id: u64) -> String {
    format!("dx-listener-{id}")
}

pub(crate) fn attach_script(id: u64, event: &DocumentEvent) -> String {
    let slot = js_string(&slot(id));
    format!(
        r#"window.__dxListeners = window.__dxListeners || {{}};
const handler = (e) => {{ if ({predicate}) {{ dioxus.send(true); }} }};
window.__dxListeners[{slot}] = handler;
document.addEventListener("{dom_event}", handler);"#,
        predicate = event.predicate(),
        dom_event = event.dom_event(),
    )
}

pub(crate) fn detach_script(id: u64, event: &DocumentEvent) -> String {
    let slot = js_string(&slot(id));
    format!(
        r#"const store = window.__dxListeners || {{}};
const handler = store[{slot}];
if (handler) {{
    document.removeEventListener("{dom_event}", handler);
    delete store[{slot}];
}}"#,
        dom_event = event.dom_event(),
    )
}

/// Calls `handler` for every matching document event while the calling
/// component is mounted.
///
/// The subscription is made once, on first render. The forwarding task is
/// owned by the component's scope and the DOM handler is removed in
/// `use_drop`, so unmounting releases both whatever path led there.
pub fn use_document_listener(event: DocumentEvent, handler: EventHandler<()>) {
    let id = use_hook(|| NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed));
    let event = use_hook(|| event);

    let attach = event.clone();
    use_future(move || {
        let script = attach_script(id, &attach);
        async move {
            let mut eval = document::eval(&script);
            loop {
                match eval.recv::<bool>().await {
                    Ok(_) => handler.call(()),
                    Err(e) => {
                        warn!("document listener {id} stopped: {e:?}");
                        break;
                    }
                }
            }
        }
    });

    use_drop(move || {
        debug!("detaching document listener {id}");
        // Best effort. Nothing awaits this once the scope is gone, and a
        // handler left behind only writes to a closed channel.
        drop(document::eval(&detach_script(id, &event)));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_listener_filters_on_key() {
        let script = attach_script(7, &DocumentEvent::KeyDown("Escape"));
        assert!(script.contains(r#"document.addEventListener("keydown", handler)"#));
        assert!(script.contains(r#"e.key === "Escape""#));
        assert!(script.contains(r#"window.__dxListeners["dx-listener-7"] = handler"#));
    }

    #[test]
    fn outside_listener_checks_containment() {
        let script = attach_script(3, &DocumentEvent::PointerDownOutside("multi-select-3".into()));
        assert!(script.contains(r#""mousedown""#));
        assert!(script.contains(r#"document.getElementById("multi-select-3")"#));
        assert!(script.contains("!root.contains(e.target)"));
    }

    #[test]
    fn detach_removes_the_same_slot_and_event() {
        let event = DocumentEvent::KeyDown("Escape");
        let script = detach_script(7, &event);
        assert!(script.contains(r#"store["dx-listener-7"]"#));
        assert!(script.contains(r#"document.removeEventListener("keydown", handler)"#));
    }

    #[test]
    fn ids_are_escaped() {
        let script = attach_script(1, &DocumentEvent::PointerDownOutside(r#"a"b"#.into()));
        assert!(script.contains(r#"getElementById("a\"b")"#));
    }
}
