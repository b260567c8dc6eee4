//! Reusable text input component

use dioxus::prelude::*;

/// Single-line input with consistent styling. Covers the text, email,
/// tel, and date inputs of the booking form via the `r#type` prop.
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "text")] r#type: &'static str,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] id: Option<&'static str>,
    #[props(default)] min: Option<String>,
    #[props(default)] disabled: bool,
) -> Element {
    let base = "mt-1 w-full rounded-lg border border-stone-300 bg-white px-3 py-2 text-stone-800 placeholder-stone-400 focus:outline-none focus:ring-1 focus:ring-teal-600";

    let disabled_class = if disabled {
        "opacity-50 cursor-not-allowed"
    } else {
        ""
    };

    rsx! {
        input {
            r#type,
            class: "{base} {disabled_class}",
            id,
            value: "{value}",
            placeholder,
            min: min.as_deref(),
            disabled,
            oninput: move |e| on_input.call(e.value()),
        }
    }
}
