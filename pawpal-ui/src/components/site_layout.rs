//! Site chrome: navigation bar and footer.

use dioxus::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant, PawIcon};
use crate::display_types::NavItem;

/// Top navigation bar with the PawPal wordmark and static links.
#[component]
pub fn SiteNavView(nav_items: Vec<NavItem>, on_nav_click: EventHandler<String>) -> Element {
    rsx! {
        nav { class: "w-full bg-teal-800 px-6 py-6 flex justify-between items-center",
            div { class: "flex items-center gap-2 text-2xl font-bold text-white",
                PawIcon { class: "w-6 h-6" }
                "PawPal"
            }
            div { class: "hidden md:flex space-x-8",
                for item in nav_items {
                    button {
                        class: if item.is_active {
                            "text-sm uppercase tracking-wider text-amber-200"
                        } else {
                            "text-sm uppercase tracking-wider text-teal-100 hover:text-amber-200 transition-colors"
                        },
                        onclick: {
                            let id = item.id.clone();
                            move |_| on_nav_click.call(id.clone())
                        },
                        "{item.label}"
                    }
                }
            }
        }
    }
}

/// Page footer with service links and a booking call to action.
#[component]
pub fn SiteFooterView(on_nav_click: EventHandler<String>) -> Element {
    rsx! {
        footer { class: "w-full bg-teal-800 py-12 px-6",
            div { class: "max-w-5xl mx-auto grid md:grid-cols-3 gap-8",
                div {
                    h3 { class: "text-2xl font-bold text-white mb-4", "PawPal" }
                    p { class: "text-teal-100",
                        "Connecting loving pet owners with trusted care professionals."
                    }
                }
                div {
                    h4 { class: "font-semibold text-white mb-4", "Company" }
                    ul { class: "space-y-2",
                        li {
                            button {
                                class: "text-teal-100 hover:text-white transition-colors",
                                onclick: move |_| on_nav_click.call("services".to_string()),
                                "Services"
                            }
                        }
                        li {
                            button {
                                class: "text-teal-100 hover:text-white transition-colors",
                                onclick: move |_| on_nav_click.call("reviews".to_string()),
                                "Testimonials"
                            }
                        }
                    }
                }
                div {
                    h4 { class: "font-semibold text-white mb-4", "Contact" }
                    p { class: "text-teal-100",
                        "Ready to give your pet the care they deserve?"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Medium,
                        class: "mt-4 border-teal-100 text-teal-100 hover:text-teal-800 hover:bg-teal-100",
                        onclick: move |_| on_nav_click.call("booking".to_string()),
                        "Get Started"
                    }
                }
            }
            div { class: "max-w-5xl mx-auto border-t border-teal-600 mt-8 pt-8 text-center",
                p { class: "text-teal-100",
                    "© 2024 PawPal. Caring for pets with love and expertise."
                }
            }
        }
    }
}
