//! Transient notifications stacked in the top-right corner.
//!
//! [`ToastProvider`] owns one [`ToastQueue`] for the whole app; screens reach it through
//! [`use_toast`]. Each rendered toast removes itself after [`TOAST_DURATION`] unless it
//! was closed first.

use std::time::Duration;

use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaCircleInfo, FaCircleXmark, FaTriangleExclamation, FaXmark};
use crate::timer;
use crate::Icon;

pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
    Info,
    Warning,
}

impl ToastKind {
    fn border_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "border-green-500",
            ToastKind::Error => "border-error-500",
            ToastKind::Info => "border-primary-600",
            ToastKind::Warning => "border-yellow-500",
        }
    }

    fn icon_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "text-green-500",
            ToastKind::Error => "text-error-500",
            ToastKind::Info => "text-primary-600",
            ToastKind::Warning => "text-yellow-500",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// Active toasts in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    entries: Vec<ToastEntry>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(ToastEntry {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|entry| entry.id != id);
    }

    pub fn entries(&self) -> &[ToastEntry] {
        &self.entries
    }
}

/// Distance from the top of the viewport for the toast at `index`.
pub fn stack_offset(index: usize) -> usize {
    16 + index * 80
}

/// Handle to the app's toast queue.
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    queue: Signal<ToastQueue>,
}

impl Toaster {
    pub fn show(mut self, message: impl Into<String>, kind: ToastKind) {
        self.queue.write().push(message, kind);
    }

    pub fn success(self, message: impl Into<String>) {
        self.show(message, ToastKind::Success);
    }

    pub fn error(self, message: impl Into<String>) {
        self.show(message, ToastKind::Error);
    }

    pub fn dismiss(mut self, id: u64) {
        self.queue.write().dismiss(id);
    }
}

pub fn use_toast() -> Toaster {
    use_context::<Toaster>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let queue = use_signal(ToastQueue::default);
    use_context_provider(|| Toaster { queue });

    rsx! {
        {children}
        ToastContainer {}
    }
}

#[component]
fn ToastContainer() -> Element {
    let toaster = use_toast();
    let stacked: Vec<(usize, ToastEntry)> = toaster
        .queue
        .read()
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| (stack_offset(index), entry.clone()))
        .collect();

    rsx! {
        for (offset, entry) in stacked {
            div {
                key: "{entry.id}",
                class: "fixed right-4 z-[9999]",
                style: "top: {offset}px;",
                ToastView { entry }
            }
        }
    }
}

#[component]
fn ToastView(entry: ToastEntry) -> Element {
    let toaster = use_toast();
    let id = entry.id;
    use_hook(move || {
        spawn(async move {
            timer::sleep(TOAST_DURATION).await;
            toaster.dismiss(id);
        })
    });

    let border = entry.kind.border_class();
    let icon_class = entry.kind.icon_class();
    rsx! {
        div {
            class: "bg-neutral-900 border-l-4 {border} border-neutral-800 px-4 py-3 rounded-md shadow-lg flex items-center gap-3 min-w-[300px] max-w-md",
            span {
                class: "{icon_class}",
                {match entry.kind {
                    ToastKind::Success => rsx! { Icon { icon: FaCircleCheck, width: 20, height: 20 } },
                    ToastKind::Error => rsx! { Icon { icon: FaCircleXmark, width: 20, height: 20 } },
                    ToastKind::Warning => rsx! { Icon { icon: FaTriangleExclamation, width: 20, height: 20 } },
                    ToastKind::Info => rsx! { Icon { icon: FaCircleInfo, width: 20, height: 20 } },
                }}
            }
            div {
                class: "flex-1",
                p { class: "text-sm font-medium text-neutral-100", "{entry.message}" }
            }
            button {
                r#type: "button",
                class: "text-neutral-400 hover:text-neutral-200 transition-colors",
                aria_label: "Fechar",
                onclick: move |_| toaster.dismiss(id),
                Icon { icon: FaXmark, width: 16, height: 16 }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let mut queue = ToastQueue::default();
        let first = queue.push("Atleta criado com sucesso!", ToastKind::Success);
        let second = queue.push("Erro ao salvar atleta", ToastKind::Error);
        assert_ne!(first, second);
        let messages: Vec<_> = queue.entries().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["Atleta criado com sucesso!", "Erro ao salvar atleta"]);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut queue = ToastQueue::default();
        let a = queue.push("a", ToastKind::Info);
        let b = queue.push("b", ToastKind::Warning);
        let c = queue.push("c", ToastKind::Success);
        queue.dismiss(b);
        let ids: Vec<_> = queue.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, [a, c]);

        queue.dismiss(b);
        assert_eq!(queue.entries().len(), 2);

        // Ids are not reused after a dismissal.
        let d = queue.push("d", ToastKind::default());
        assert!(d > c);
        assert_eq!(queue.entries()[2].kind, ToastKind::Success);
    }

    #[test]
    fn test_stack_offset() {
        assert_eq!(stack_offset(0), 16);
        assert_eq!(stack_offset(2), 176);
    }
}
