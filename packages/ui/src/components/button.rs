use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Neutral,
    Accent,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-primary-600 text-white hover:bg-primary-700 focus:ring-primary-600"
            }
            ButtonVariant::Neutral => {
                "bg-neutral-800 text-neutral-100 hover:bg-neutral-700 focus:ring-neutral-600 border border-neutral-700"
            }
            ButtonVariant::Accent => "bg-accent-500 text-white hover:bg-accent-600 focus:ring-accent-500",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "px-3 py-1.5 text-sm",
            ButtonSize::Md => "px-4 py-2 text-sm",
            ButtonSize::Lg => "px-6 py-3 text-base",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant_class = variant.class();
    let size_class = size.class();
    rsx! {
        button {
            r#type: r#type,
            class: "font-medium rounded-md transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-neutral-950 disabled:opacity-50 disabled:cursor-not-allowed {variant_class} {size_class} {class}",
            disabled,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
