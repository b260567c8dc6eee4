//! pawpal-web - The PawPal scheduling web app

pub mod api;
pub mod pages;
pub mod query;

use dioxus::prelude::*;
use pages::{Booking, Home, Reviews, Services, SiteLayout};
use query::BookingQuery;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/services")]
    Services {},
    #[route("/reviews")]
    Reviews {},
    #[route("/booking?:..query")]
    Booking { query: BookingQuery },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen bg-stone-50", Router::<Route> {} }
    }
}
