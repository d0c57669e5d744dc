use std::rc::Rc;

use api::PaginationData;
use dioxus::prelude::*;

use super::Pagination;

pub const EMPTY_MESSAGE: &str = "Nenhum registro encontrado";

/// One table column: a header and how to render the cell for a row.
pub struct Column<T> {
    pub key: &'static str,
    pub label: &'static str,
    pub class: &'static str,
    render: Rc<dyn Fn(&T) -> Element>,
}

impl<T> Column<T> {
    /// A plain text cell read from the row.
    pub fn text(key: &'static str, label: &'static str, value: impl Fn(&T) -> String + 'static) -> Self {
        Self::custom(key, label, move |row| {
            let text = value(row);
            rsx! { "{text}" }
        })
    }

    /// A cell with arbitrary markup.
    pub fn custom(key: &'static str, label: &'static str, render: impl Fn(&T) -> Element + 'static) -> Self {
        Self {
            key,
            label,
            class: "",
            render: Rc::new(render),
        }
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.class = class;
        self
    }

    pub fn render(&self, row: &T) -> Element {
        (self.render)(row)
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            label: self.label,
            class: self.class,
            render: self.render.clone(),
        }
    }
}

impl<T> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.label == other.label
            && self.class == other.class
            && Rc::ptr_eq(&self.render, &other.render)
    }
}

#[component]
pub fn Table<T: Clone + PartialEq + 'static>(
    rows: Vec<T>,
    columns: Vec<Column<T>>,
    #[props(default = EMPTY_MESSAGE.to_string())] empty_message: String,
    #[props(default)] on_row_click: Option<EventHandler<T>>,
    #[props(default)] pagination: Option<PaginationData>,
    #[props(default)] on_page_change: EventHandler<u32>,
) -> Element {
    let span = columns.len().to_string();
    let row_class = if on_row_click.is_some() {
        "cursor-pointer hover:bg-neutral-800/50"
    } else {
        ""
    };

    rsx! {
        div {
            class: "px-4 sm:px-6 lg:px-8",
            div {
                class: "flow-root",
                div {
                    class: "-mx-4 -my-2 overflow-x-auto sm:-mx-6 lg:-mx-8",
                    div {
                        class: "inline-block min-w-full py-2 align-middle sm:px-6 lg:px-8",
                        div {
                            class: "overflow-hidden border border-neutral-800 sm:rounded-lg",
                            table {
                                class: "relative min-w-full divide-y divide-neutral-800",
                                thead {
                                    class: "bg-neutral-900",
                                    tr {
                                        for column in columns.iter() {
                                            th {
                                                key: "{column.key}",
                                                scope: "col",
                                                class: "py-3.5 px-3 text-left text-sm font-semibold text-neutral-200 {column.class}",
                                                "{column.label}"
                                            }
                                        }
                                    }
                                }
                                tbody {
                                    class: "divide-y divide-neutral-800 bg-neutral-900/50",
                                    if rows.is_empty() {
                                        tr {
                                            td {
                                                colspan: "{span}",
                                                class: "py-12 text-center text-sm text-neutral-400",
                                                "{empty_message}"
                                            }
                                        }
                                    }
                                    for (index, row) in rows.into_iter().enumerate() {
                                        tr {
                                            key: "{index}",
                                            class: row_class,
                                            onclick: {
                                                let row = row.clone();
                                                move |_| {
                                                    if let Some(handler) = on_row_click {
                                                        handler.call(row.clone());
                                                    }
                                                }
                                            },
                                            for column in columns.iter() {
                                                td {
                                                    key: "{column.key}",
                                                    class: "py-4 px-3 text-sm whitespace-nowrap text-neutral-300 {column.class}",
                                                    {column.render(&row)}
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            if let Some(pagination) = pagination {
                div {
                    class: "mt-6",
                    Pagination { pagination, on_page_change }
                }
            }
        }
    }
}
