use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    Primary,
    Accent,
    #[default]
    Neutral,
}

#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let variant_class = match variant {
        BadgeVariant::Primary => "bg-primary-600/20 text-primary-400 border border-primary-600/30",
        BadgeVariant::Accent => "bg-accent-500/20 text-accent-400 border border-accent-500/30",
        BadgeVariant::Neutral => "bg-neutral-800 text-neutral-300 border border-neutral-700",
    };
    rsx! {
        span {
            class: "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {variant_class} {class}",
            {children}
        }
    }
}

/// Ativo / Inativo pill used by both listings.
#[component]
pub fn StatusBadge(active: bool) -> Element {
    rsx! {
        Badge {
            variant: if active { BadgeVariant::Primary } else { BadgeVariant::Neutral },
            if active { "Ativo" } else { "Inativo" }
        }
    }
}
