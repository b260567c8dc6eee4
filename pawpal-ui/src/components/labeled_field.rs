//! Label + input + inline validation message

use dioxus::prelude::*;

/// Wraps one form control with its label and, when present, the
/// validation message rendered directly underneath.
#[component]
pub fn LabeledField(
    label: &'static str,
    #[props(default)] html_for: Option<&'static str>,
    #[props(default)] error: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div {
            label {
                r#for: html_for,
                class: "text-sm font-medium text-stone-700",
                "{label}"
            }
            {children}
            if let Some(message) = error {
                p { class: "text-sm text-red-500 mt-1", "{message}" }
            }
        }
    }
}
