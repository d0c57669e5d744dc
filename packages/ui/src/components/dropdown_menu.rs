//! Row action menu: a trigger button and a floating panel in fixed position, so it is
//! never clipped by the scrolling table around it.

use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

use crate::dom::{self, Rect};
use crate::icons::FaEllipsisVertical;
use crate::Icon;

pub const MENU_WIDTH: f64 = 192.0;
const ITEM_HEIGHT: f64 = 40.0;
const MENU_PADDING: f64 = 16.0;
const GAP: f64 = 8.0;

/// Where the panel goes, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MenuPlacement {
    pub top: f64,
    pub left: f64,
    pub upward: bool,
}

/// Place a panel of `item_count` rows next to `trigger`. It opens upward only when the
/// estimated height does not fit below but does fit above, and is right-aligned to the
/// trigger while staying 8px inside the viewport.
pub fn place_menu(trigger: Rect, viewport: (f64, f64), item_count: usize) -> MenuPlacement {
    let (width, height) = viewport;
    let menu_height = item_count as f64 * ITEM_HEIGHT + MENU_PADDING;
    let space_below = height - trigger.bottom;
    let upward = space_below < menu_height && trigger.top > menu_height;

    let top = if upward {
        trigger.top - menu_height - GAP
    } else {
        trigger.bottom + GAP
    };
    let left = (trigger.right - MENU_WIDTH)
        .max(GAP)
        .min(width - MENU_WIDTH - GAP);
    MenuPlacement {
        top: top.max(GAP),
        left,
        upward,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemVariant {
    #[default]
    Default,
    Danger,
}

impl ItemVariant {
    fn class(&self) -> &'static str {
        match self {
            ItemVariant::Default => {
                "block w-full text-left px-4 py-2 text-sm transition-colors text-neutral-300 hover:bg-neutral-800 hover:text-neutral-100"
            }
            ItemVariant::Danger => {
                "block w-full text-left px-4 py-2 text-sm transition-colors text-error-500 hover:bg-error-500/10 hover:text-error-400"
            }
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct DropdownItem {
    pub label: String,
    pub variant: ItemVariant,
    pub on_select: Callback<()>,
}

impl DropdownItem {
    pub fn new(label: impl Into<String>, on_select: impl FnMut(()) + 'static) -> Self {
        Self {
            label: label.into(),
            variant: ItemVariant::Default,
            on_select: Callback::new(on_select),
        }
    }

    pub fn danger(mut self) -> Self {
        self.variant = ItemVariant::Danger;
        self
    }
}

static NEXT_MENU_ID: AtomicU64 = AtomicU64::new(0);

/// DOM ids of a menu's trigger and panel; outside clicks are tested against both.
fn menu_ids(menu_id: u64) -> (String, String) {
    (
        format!("dropdown-trigger-{menu_id}"),
        format!("dropdown-panel-{menu_id}"),
    )
}

#[component]
pub fn DropdownMenu(
    items: Vec<DropdownItem>,
    /// Trigger content; a vertical ellipsis when absent.
    #[props(default)]
    trigger: Option<Element>,
) -> Element {
    let menu_id = use_hook(|| NEXT_MENU_ID.fetch_add(1, Ordering::Relaxed));
    let (trigger_id, panel_id) = menu_ids(menu_id);
    let mut open = use_signal(|| false);

    rsx! {
        div {
            class: "relative",
            button {
                id: "{trigger_id}",
                r#type: "button",
                class: "flex items-center justify-center w-8 h-8 rounded-md text-neutral-400 hover:text-neutral-100 hover:bg-neutral-800 transition-colors",
                aria_label: "Menu de ações",
                onclick: move |evt| {
                    evt.stop_propagation();
                    open.toggle();
                },
                if let Some(content) = trigger {
                    {content}
                } else {
                    Icon { icon: FaEllipsisVertical, width: 16, height: 16 }
                }
            }
            if open() {
                MenuPanel {
                    trigger_id: trigger_id.clone(),
                    panel_id,
                    items,
                    on_close: move |_| open.set(false),
                }
            }
        }
    }
}

/// Mounted while the menu is open; owns the window listeners.
#[component]
fn MenuPanel(
    trigger_id: String,
    panel_id: String,
    items: Vec<DropdownItem>,
    on_close: EventHandler<()>,
) -> Element {
    let count = items.len();
    let measure = {
        let trigger_id = trigger_id.clone();
        move || {
            let trigger = dom::element_rect(&trigger_id)?;
            let viewport = dom::viewport()?;
            Some(place_menu(trigger, viewport, count))
        }
    };
    let mut placement = use_signal({
        let measure = measure.clone();
        move || measure().unwrap_or_default()
    });

    use_hook({
        let trigger_id = trigger_id.clone();
        let panel_id = panel_id.clone();
        move || {
            let outside = dom::listen("mousedown", false, move |evt| {
                if !evt.target_within(&[trigger_id.as_str(), panel_id.as_str()]) {
                    on_close.call(());
                }
            });
            let remeasure = move |_| {
                if let Some(next) = measure() {
                    placement.set(next);
                }
            };
            let scroll = dom::listen("scroll", true, remeasure.clone());
            let resize = dom::listen("resize", false, remeasure);
            Rc::new((outside, scroll, resize))
        }
    });

    let MenuPlacement { top, left, .. } = placement();
    rsx! {
        div {
            id: "{panel_id}",
            class: "fixed z-[1000] w-48 rounded-md bg-neutral-900 border border-neutral-800 shadow-lg focus:outline-none",
            style: "top: {top}px; left: {left}px;",
            div {
                class: "py-1",
                role: "menu",
                for (index, item) in items.into_iter().enumerate() {
                    button {
                        key: "{index}",
                        r#type: "button",
                        role: "menuitem",
                        class: item.variant.class(),
                        onclick: move |evt| {
                            evt.stop_propagation();
                            item.on_select.call(());
                            on_close.call(());
                        },
                        "{item.label}"
                    }
                }
            }
        }
    }
}
