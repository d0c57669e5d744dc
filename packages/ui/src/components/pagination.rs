use api::PaginationData;
use dioxus::prelude::*;

use super::{Button, ButtonSize, ButtonVariant};
use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::pagination::{has_next, has_previous, item_range, page_items, PageItem};
use crate::Icon;

#[component]
pub fn Pagination(pagination: PaginationData, on_page_change: EventHandler<u32>) -> Element {
    let PaginationData {
        total,
        page,
        limit,
        total_pages,
    } = pagination;
    let (first, last) = item_range(page, limit, total);
    let can_go_back = has_previous(page);
    let can_go_forward = has_next(page, total_pages);

    rsx! {
        div {
            class: "flex items-center justify-between border-t border-neutral-800 px-4 py-3 sm:px-6",
            div {
                class: "flex flex-1 justify-between sm:hidden",
                Button {
                    variant: ButtonVariant::Neutral,
                    size: ButtonSize::Sm,
                    disabled: !can_go_back,
                    onclick: move |_| on_page_change.call(page.saturating_sub(1)),
                    "Anterior"
                }
                Button {
                    variant: ButtonVariant::Neutral,
                    size: ButtonSize::Sm,
                    disabled: !can_go_forward,
                    onclick: move |_| on_page_change.call(page + 1),
                    "Próxima"
                }
            }
            div {
                class: "hidden sm:flex sm:flex-1 sm:items-center sm:justify-between",
                p {
                    class: "text-sm text-neutral-400",
                    "Mostrando "
                    span { class: "font-medium text-neutral-100", "{first}" }
                    " até "
                    span { class: "font-medium text-neutral-100", "{last}" }
                    " de "
                    span { class: "font-medium text-neutral-100", "{total}" }
                    " resultados"
                }
                nav {
                    aria_label: "Pagination",
                    class: "isolate inline-flex -space-x-px rounded-md",
                    button {
                        r#type: "button",
                        class: "relative inline-flex items-center rounded-l-md px-2 py-2 text-neutral-400 border border-neutral-800 bg-neutral-900 hover:bg-neutral-800 focus:z-20 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: !can_go_back,
                        onclick: move |_| on_page_change.call(page.saturating_sub(1)),
                        span { class: "sr-only", "Anterior" }
                        Icon { icon: FaChevronLeft, width: 14, height: 14 }
                    }
                    for (index, item) in page_items(page, total_pages).into_iter().enumerate() {
                        {match item {
                            PageItem::Ellipsis => rsx! {
                                span {
                                    key: "ellipsis-{index}",
                                    class: "relative inline-flex items-center px-4 py-2 text-sm font-semibold text-neutral-400 border border-neutral-800 bg-neutral-900",
                                    "..."
                                }
                            },
                            PageItem::Page(number) => rsx! {
                                button {
                                    key: "{number}",
                                    r#type: "button",
                                    class: if number == page { "relative inline-flex items-center px-4 py-2 text-sm font-semibold focus:z-20 z-10 bg-primary-600 text-white" } else { "relative inline-flex items-center px-4 py-2 text-sm font-semibold focus:z-20 text-neutral-200 border border-neutral-800 bg-neutral-900 hover:bg-neutral-800" },
                                    onclick: move |_| on_page_change.call(number),
                                    "{number}"
                                }
                            },
                        }}
                    }
                    button {
                        r#type: "button",
                        class: "relative inline-flex items-center rounded-r-md px-2 py-2 text-neutral-400 border border-neutral-800 bg-neutral-900 hover:bg-neutral-800 focus:z-20 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: !can_go_forward,
                        onclick: move |_| on_page_change.call(page + 1),
                        span { class: "sr-only", "Próxima" }
                        Icon { icon: FaChevronRight, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}
