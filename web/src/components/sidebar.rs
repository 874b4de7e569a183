use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

struct NavEntry {
    href: &'static str,
    label: &'static str,
    icon: &'static str,
}

const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry { href: "/", label: "Dashboard", icon: "📊" },
    NavEntry { href: "/calendar", label: "Calendar", icon: "🗓️" },
    NavEntry { href: "/bookings", label: "Bookings", icon: "📒" },
    NavEntry { href: "/customers", label: "Customers", icon: "👤" },
    NavEntry { href: "/staff", label: "Staff", icon: "💇" },
    NavEntry { href: "/treatments", label: "Treatments", icon: "✂️" },
    NavEntry { href: "/branches", label: "Branches", icon: "🏠" },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;

    let link_class = move |href: &'static str| {
        let path = pathname.get();
        let active = if href == "/" {
            path == "/"
        } else {
            path.starts_with(href)
        };
        if active {
            "sidebar__link sidebar__link--active"
        } else {
            "sidebar__link"
        }
    };

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">
                <A href="/" attr:class="sidebar__logo">
                    "Salon Admin"
                </A>
            </div>

            <div class="sidebar__links">
                {NAV_ENTRIES
                    .iter()
                    .map(|entry| {
                        let href = entry.href;
                        view! {
                            <A href=href attr:class=move || link_class(href)>
                                <span class="sidebar__icon">{entry.icon}</span>
                                {entry.label}
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
