//! Styled native select

use dioxus::prelude::*;

/// Native `<select>` with a placeholder option. Options are
/// (value, label) pairs; the placeholder maps to the empty value.
#[component]
pub fn SelectField(
    value: String,
    onchange: EventHandler<String>,
    placeholder: &'static str,
    options: Vec<(String, String)>,
    #[props(default)] id: Option<&'static str>,
    #[props(default)] disabled: bool,
) -> Element {
    let base = "mt-1 w-full rounded-lg border border-stone-300 bg-white px-3 py-2 text-stone-800 focus:outline-none focus:ring-1 focus:ring-teal-600";

    let disabled_class = if disabled {
        "opacity-50 cursor-not-allowed"
    } else {
        ""
    };

    rsx! {
        select {
            class: "{base} {disabled_class}",
            id,
            value: "{value}",
            disabled,
            onchange: move |e| onchange.call(e.value()),
            option { value: "", disabled: true, selected: value.is_empty(), "{placeholder}" }
            for (option_value, label) in options {
                option {
                    value: "{option_value}",
                    selected: option_value == value,
                    "{label}"
                }
            }
        }
    }
}
