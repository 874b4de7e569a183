use leptos::prelude::*;
use shared_types::BookingStatus;

fn badge_colors(status: BookingStatus) -> (&'static str, &'static str) {
    match status {
        BookingStatus::Scheduled => ("#fef3c7", "#92400e"),
        BookingStatus::Confirmed => ("#dbeafe", "#1e40af"),
        BookingStatus::Completed => ("#d1fae5", "#065f46"),
        BookingStatus::Cancelled => ("#fee2e2", "#991b1b"),
        BookingStatus::NoShow => ("#e5e7eb", "#374151"),
    }
}

#[component]
pub fn StatusBadge(status: BookingStatus) -> impl IntoView {
    let (background, color) = badge_colors(status);
    view! {
        <span
            class="status-badge"
            style=format!(
                "background: {}; color: {}; padding: 0.15rem 0.6rem; border-radius: 999px; font-size: 0.8rem; font-weight: 600; white-space: nowrap;",
                background, color,
            )
        >
            {status.label()}
        </span>
    }
}
