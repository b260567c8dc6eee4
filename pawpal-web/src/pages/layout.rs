use crate::query::BookingQuery;
use crate::Route;
use dioxus::prelude::*;
use pawpal_ui::{NavItem, SiteFooterView, SiteNavView};

#[component]
pub fn SiteLayout() -> Element {
    let current_route = use_route::<Route>();

    let nav_items = vec![
        NavItem {
            id: "home".to_string(),
            label: "Home".to_string(),
            is_active: matches!(current_route, Route::Home {}),
        },
        NavItem {
            id: "services".to_string(),
            label: "Services".to_string(),
            is_active: matches!(current_route, Route::Services {}),
        },
        NavItem {
            id: "reviews".to_string(),
            label: "Reviews".to_string(),
            is_active: matches!(current_route, Route::Reviews {}),
        },
        NavItem {
            id: "booking".to_string(),
            label: "Book Now".to_string(),
            is_active: matches!(current_route, Route::Booking { .. }),
        },
    ];

    let navigate = use_callback(move |id: String| {
        match id.as_str() {
            "home" => navigator().push(Route::Home {}),
            "services" => navigator().push(Route::Services {}),
            "reviews" => navigator().push(Route::Reviews {}),
            "booking" => navigator().push(Route::Booking {
                query: BookingQuery::default(),
            }),
            _ => None,
        };
    });

    rsx! {
        SiteNavView { nav_items, on_nav_click: move |id| navigate.call(id) }
        Outlet::<Route> {}
        SiteFooterView { on_nav_click: move |id| navigate.call(id) }
    }
}
