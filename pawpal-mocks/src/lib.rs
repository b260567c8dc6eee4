//! pawpal-mocks - Design previews for the PawPal booking views
//!
//! A minimal web app that renders every view with fixture data. Form
//! states can be forced through a `?state=` URL parameter for
//! screenshot generation, and an interactive demo runs the whole
//! submission workflow against the in-memory client.

pub mod demo_data;
pub mod pages;

use dioxus::prelude::*;
use pages::{BookingDemo, BookingStates, MockIndex};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    MockIndex {},
    #[route("/booking-form?:state")]
    BookingStates { state: Option<String> },
    #[route("/booking-demo")]
    BookingDemo {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen bg-stone-50", Router::<Route> {} }
    }
}
