//! Reusable button component

use dioxus::prelude::*;

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Teal background - for primary actions
    Primary,
    /// Border only - for secondary navigation
    Outline,
    /// No background - text only with hover
    Ghost,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    /// Standard padding
    Medium,
    /// Hero/submit sizing
    Large,
}

/// Reusable button component with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] id: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let base = "inline-flex items-center justify-center gap-2 rounded-lg transition-colors";

    let padding = match size {
        ButtonSize::Medium => "px-4 py-2",
        ButtonSize::Large => "px-12 py-4 text-xl",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => "bg-teal-700 text-white hover:bg-teal-600",
        ButtonVariant::Outline => "border border-teal-700 text-teal-700 hover:bg-teal-50",
        ButtonVariant::Ghost => "text-teal-100 hover:text-white",
    };

    let disabled_class = if disabled {
        "opacity-50 cursor-not-allowed"
    } else {
        ""
    };

    let extra = class.unwrap_or_default();
    let full_class = format!("{base} {padding} {variant_class} {disabled_class} {extra}");

    rsx! {
        button {
            class: "{full_class}",
            id: id.as_deref(),
            r#type,
            disabled,
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}
