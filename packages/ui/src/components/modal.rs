use std::rc::Rc;

use dioxus::prelude::*;

use crate::dom;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl ModalSize {
    fn class(&self) -> &'static str {
        match self {
            ModalSize::Sm => "sm:max-w-sm",
            ModalSize::Md => "sm:max-w-lg",
            ModalSize::Lg => "sm:max-w-4xl",
            ModalSize::Xl => "sm:max-w-6xl",
        }
    }
}

/// Dialog over a dimmed backdrop. Closes on backdrop click and on Escape; full screen on
/// small viewports.
#[component]
pub fn Modal(
    open: bool,
    on_close: EventHandler<()>,
    title: String,
    #[props(default)] size: ModalSize,
    #[props(default)] footer: Option<Element>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }
    rsx! {
        ModalPanel { on_close, title, size, footer, {children} }
    }
}

/// Mounted only while the modal is open, so the Escape listener and the scroll lock live
/// exactly as long as the dialog.
#[component]
fn ModalPanel(
    on_close: EventHandler<()>,
    title: String,
    size: ModalSize,
    footer: Option<Element>,
    children: Element,
) -> Element {
    use_hook(|| {
        dom::lock_body_scroll(true);
        Rc::new(dom::listen("keydown", false, move |evt| {
            if evt.key().as_deref() == Some("Escape") {
                on_close.call(());
            }
        }))
    });
    use_drop(|| dom::lock_body_scroll(false));

    let size_class = size.class();
    rsx! {
        div {
            class: "fixed inset-0 z-[100] flex items-center justify-center p-4",
            div {
                class: "absolute inset-0 bg-black/60",
                aria_hidden: "true",
                onclick: move |_| on_close.call(()),
            }
            div {
                class: "relative w-full rounded-xl bg-neutral-900 border border-neutral-800 shadow-xl outline outline-1 -outline-offset-1 outline-white/10 max-h-[90vh] flex flex-col max-sm:fixed max-sm:inset-0 max-sm:max-h-none max-sm:rounded-none max-sm:border-0 {size_class}",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "modal-title",
                div {
                    class: "px-4 py-4 sm:px-6 border-b border-neutral-800",
                    h2 { id: "modal-title", class: "text-lg font-semibold text-neutral-100", "{title}" }
                }
                div { class: "flex-1 overflow-y-auto px-4 py-4 sm:px-6", {children} }
                if let Some(footer) = footer {
                    div {
                        class: "flex items-center justify-end gap-3 border-t border-neutral-800 px-4 py-4 sm:px-6",
                        {footer}
                    }
                }
            }
        }
    }
}
