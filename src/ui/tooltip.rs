//! Hover tooltip with a show delay.

use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;

use crate::config::use_ui_config;
use crate::style::{color, layer, radius, spacing};
use crate::utils::sleep;

/// Hover state of a tooltip: whether the label shows, and the delayed show
/// that is waiting to fire.
///
/// `H` is the handle of the scheduled show, so a leave can cancel exactly the
/// task it replaces and an enter never schedules a second one.
#[derive(Debug)]
pub struct HoverIntent<H> {
    visible: bool,
    pending: Option<H>,
}

impl<H> Default for HoverIntent<H> {
    fn default() -> Self {
        Self {
            visible: false,
            pending: None,
        }
    }
}

impl<H> HoverIntent<H> {
    /// Whether a pointer-enter should schedule a show. False while one is
    /// already pending or the label is up.
    pub fn should_arm(&self) -> bool {
        !self.visible && self.pending.is_none()
    }

    pub fn arm(&mut self, handle: H) {
        self.pending = Some(handle);
    }

    /// The scheduled show ran out its delay. Returns false for a stale fire
    /// whose hover already ended.
    pub fn fire(&mut self) -> bool {
        if self.pending.take().is_some() {
            self.visible = true;
            true
        } else {
            false
        }
    }

    /// Pointer left: hide at once and hand back the pending show for the
    /// caller to cancel.
    pub fn leave(&mut self) -> Option<H> {
        self.visible = false;
        self.pending.take()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

fn bubble_style() -> String {
    format!(
        "
        position: absolute;
        bottom: calc(100% + {gap});
        left: 50%;
        transform: translateX(-50%);
        padding: {gap} {pad};
        border-radius: {radius};
        background: {bg};
        color: {fg};
        font-size: 0.75rem;
        white-space: nowrap;
        pointer-events: none;
        z-index: {z};
        ",
        gap = spacing::XS,
        pad = spacing::SM,
        radius = radius::SM,
        bg = color::TOOLTIP_BG,
        fg = color::TOOLTIP_TEXT,
        z = layer::TOOLTIP,
    )
}

/// Wraps `children` and shows `content` above them once the pointer has
/// rested for `delay_ms` (the configured default when omitted).
///
/// The delayed show is a task owned by this component's scope, so unmounting
/// mid-delay drops it along with everything else.
#[component]
pub fn Tooltip(content: Element, delay_ms: Option<u64>, children: Element) -> Element {
    let config = use_ui_config();
    let delay = Duration::from_millis(delay_ms.unwrap_or(config.tooltip_delay_ms));
    let mut hover = use_signal(HoverIntent::<Task>::default);

    let on_enter = move |_: MouseEvent| {
        if !hover.read().should_arm() {
            return;
        }
        let task = spawn(async move {
            sleep(delay).await;
            hover.write().fire();
        });
        hover.write().arm(task);
    };
    let on_leave = move |_: MouseEvent| {
        if let Some(task) = hover.write().leave() {
            task.cancel();
        }
    };

    rsx! {
        span {
            class: "tooltip-anchor",
            style: "position: relative; display: inline-block;",
            onmouseenter: on_enter,
            onmouseleave: on_leave,
            {children}
            if hover.read().is_visible() {
                div {
                    class: "tooltip-bubble",
                    role: "tooltip",
                    style: bubble_style(),
                    {content}
                }
            }
        }
    }
}
