use chrono::{Duration, Local, NaiveDate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared_types::{BoardConfig, BookingWithRelations, LaneScheme};
use thaw::*;

use super::booking_panel::BookingPanel;
use super::day_grid::DayGrid;
use super::draft::{local_instant, move_payload, BookingDraft};
use super::week_grid::{week_start, WeekGrid};
use crate::components::{ErrorView, LoadingView};
use crate::scheduling::{conflict_message, find_conflict, GridConfig};
use crate::server::{
    create_booking, delete_booking, list_active_branches, list_active_staff,
    list_active_treatments, list_bookings_in_range, list_customers, update_booking,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BoardMode {
    Day,
    Week,
}

/// The scheduling board: a day view with one lane per staff member and a
/// week view with one lane per day, sharing the booking panel, the
/// drag-to-reschedule flow and the reload machinery.
#[component]
pub fn ScheduleBoardPage() -> impl IntoView {
    let grid = GridConfig::default();
    let board = BoardConfig::new(LaneScheme::ByStaff);

    let selected_day = RwSignal::new(Local::now().date_naive());
    let mode = RwSignal::new(BoardMode::Day);

    let bookings = RwSignal::new(Vec::<BookingWithRelations>::new());
    let loading = RwSignal::new(true);
    let load_error = RwSignal::new(None::<String>);
    let board_notice = RwSignal::new(None::<String>);

    let panel = RwSignal::new(None::<BookingDraft>);
    let panel_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let moving = RwSignal::new(None::<String>);

    // Bumped after every successful mutation to refetch the visible range.
    let reload_tick = RwSignal::new(0u64);
    // Monotonic tag per load; a response carrying an old tag is stale (the
    // user has already navigated on) and is dropped instead of applied.
    let request_seq = StoredValue::new(0u64);

    Effect::new(move |_| {
        let day = selected_day.get();
        let board_mode = mode.get();
        reload_tick.track();

        let (from_day, to_day) = match board_mode {
            BoardMode::Day => (day, day + Duration::days(1)),
            BoardMode::Week => {
                let monday = week_start(day);
                (monday, monday + Duration::days(7))
            }
        };
        let (Some(start), Some(end)) = (local_instant(from_day, 0), local_instant(to_day, 0))
        else {
            return;
        };

        let req = request_seq.get_value() + 1;
        request_seq.set_value(req);
        loading.set(true);
        spawn_local(async move {
            let result = list_bookings_in_range(start, end).await;
            if request_seq.get_value() != req {
                return;
            }
            match result {
                Ok(rows) => {
                    bookings.set(rows);
                    load_error.set(None);
                }
                Err(e) => load_error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    });

    let customers_res = Resource::new(|| (), |_| async { list_customers().await });
    let staff_res = Resource::new(|| (), |_| async { list_active_staff().await });
    let treatments_res = Resource::new(|| (), |_| async { list_active_treatments().await });
    let branches_res = Resource::new(|| (), |_| async { list_active_branches().await });

    let customers = Signal::derive(move || {
        customers_res.get().and_then(|r| r.ok()).unwrap_or_default()
    });
    let staff_list =
        Signal::derive(move || staff_res.get().and_then(|r| r.ok()).unwrap_or_default());
    let treatments = Signal::derive(move || {
        treatments_res.get().and_then(|r| r.ok()).unwrap_or_default()
    });
    let branches =
        Signal::derive(move || branches_res.get().and_then(|r| r.ok()).unwrap_or_default());

    // day-view lane filters; empty string means "all"
    let staff_filter = RwSignal::new(String::new());
    let branch_filter = RwSignal::new(String::new());
    let visible_staff = Signal::derive(move || {
        let staff_choice = staff_filter.get();
        let branch_choice = branch_filter.get();
        staff_list
            .get()
            .into_iter()
            .filter(|s| staff_choice.is_empty() || s.id == staff_choice)
            .filter(|s| {
                branch_choice.is_empty() || s.branch_id.as_deref() == Some(branch_choice.as_str())
            })
            .collect::<Vec<_>>()
    });

    let close_panel = move || {
        panel.set(None);
        panel_error.set(None);
    };

    // click on empty day-grid space: lane key is the staff id
    let open_create_for_staff = move |staff_id: String, start_min: i64| {
        panel_error.set(None);
        panel.set(Some(BookingDraft::for_slot(
            selected_day.get_untracked(),
            &staff_id,
            start_min,
        )));
    };

    // click on empty week-grid space: lane key is the day
    let open_create_on_day = move |day_key: String, start_min: i64| {
        if let Ok(day) = NaiveDate::parse_from_str(&day_key, "%Y-%m-%d") {
            panel_error.set(None);
            panel.set(Some(BookingDraft::for_slot(day, "", start_min)));
        }
    };

    let open_edit = move |row: BookingWithRelations| {
        panel_error.set(None);
        panel.set(Some(BookingDraft::for_booking(&row)));
    };

    let save_draft = move |draft: BookingDraft| {
        if let Err(message) = draft.validate() {
            panel_error.set(Some(message));
            return;
        }
        let (Some(start), Some(end)) = (draft.start_at(), draft.end_at()) else {
            panel_error.set(Some("The selected time is not valid".to_string()));
            return;
        };
        let rows = bookings.get_untracked();
        if let Some(hit) = find_conflict(
            &rows,
            &board,
            &draft.staff_id,
            start,
            end,
            draft.id.as_deref(),
        ) {
            panel_error.set(Some(conflict_message(hit)));
            return;
        }
        let Some(payload) = draft.payload() else {
            return;
        };

        saving.set(true);
        spawn_local(async move {
            let result = match draft.id.clone() {
                Some(id) => update_booking(id, payload).await.map(|_| ()),
                None => create_booking(payload).await.map(|_| ()),
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    panel.set(None);
                    panel_error.set(None);
                    reload_tick.update(|n| *n += 1);
                }
                Err(e) => panel_error.set(Some(e.to_string())),
            }
        });
    };

    let remove_booking = move |id: String| {
        let confirmed = web_sys::window()
            .and_then(|win| win.confirm_with_message("Delete this booking?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        saving.set(true);
        spawn_local(async move {
            let result = delete_booking(id).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    panel.set(None);
                    panel_error.set(None);
                    reload_tick.update(|n| *n += 1);
                }
                Err(e) => panel_error.set(Some(e.to_string())),
            }
        });
    };

    // shared tail of both drop handlers: conflict-check then patch
    let move_booking = move |booking_id: String,
                             staff_id: String,
                             start: chrono::DateTime<chrono::Utc>,
                             end: chrono::DateTime<chrono::Utc>| {
        let rows = bookings.get_untracked();
        if let Some(hit) = find_conflict(&rows, &board, &staff_id, start, end, Some(&booking_id)) {
            board_notice.set(Some(conflict_message(hit)));
            return;
        }
        board_notice.set(None);
        moving.set(Some(booking_id.clone()));
        spawn_local(async move {
            let result = update_booking(booking_id, move_payload(&staff_id, start, end)).await;
            moving.set(None);
            match result {
                Ok(_) => reload_tick.update(|n| *n += 1),
                Err(e) => board_notice.set(Some(e.to_string())),
            }
        });
    };

    let drop_on_staff = move |booking_id: String, staff_id: String, start_min: i64| {
        let rows = bookings.get_untracked();
        let Some(existing) = rows.iter().find(|b| b.booking.id == booking_id).cloned() else {
            return;
        };
        let duration = existing.booking.end_at - existing.booking.start_at;
        let Some(start) = local_instant(selected_day.get_untracked(), start_min) else {
            return;
        };
        move_booking(booking_id, staff_id, start, start + duration);
    };

    let drop_on_day = move |booking_id: String, day_key: String, start_min: i64| {
        let Ok(day) = NaiveDate::parse_from_str(&day_key, "%Y-%m-%d") else {
            return;
        };
        let rows = bookings.get_untracked();
        let Some(existing) = rows.iter().find(|b| b.booking.id == booking_id).cloned() else {
            return;
        };
        let duration = existing.booking.end_at - existing.booking.start_at;
        let Some(start) = local_instant(day, start_min) else {
            return;
        };
        move_booking(
            booking_id,
            existing.booking.staff_id.clone(),
            start,
            start + duration,
        );
    };

    let step = move |direction: i64| {
        let days = match mode.get_untracked() {
            BoardMode::Day => 1,
            BoardMode::Week => 7,
        };
        selected_day.update(|day| *day += Duration::days(direction * days));
    };

    let header_label = move || match mode.get() {
        BoardMode::Day => selected_day.get().format("%A, %d %B %Y").to_string(),
        BoardMode::Week => format!(
            "Week of {}",
            week_start(selected_day.get()).format("%d.%m.%Y")
        ),
    };

    let mode_button = move |target: BoardMode, label: &'static str| {
        view! {
            <Button
                appearance=Signal::derive(move || if mode.get() == target {
                    ButtonAppearance::Primary
                } else {
                    ButtonAppearance::Subtle
                })
                on_click=move |_| mode.set(target)
            >
                {label}
            </Button>
        }
    };

    view! {
        <div class="board-page">
            <div class="board-header">
                <h1>"Calendar"</h1>
                <div class="board-header__nav">
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| step(-1)>
                        "←"
                    </Button>
                    <span class="board-header__label">{header_label}</span>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| step(1)>
                        "→"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::default()
                        on_click=move |_| selected_day.set(Local::now().date_naive())
                    >
                        "Today"
                    </Button>
                </div>
                <div class="board-header__filters">
                    <select
                        class="board-header__filter"
                        on:change=move |ev| branch_filter.set(event_target_value(&ev))
                    >
                        <option value="">"All branches"</option>
                        {move || {
                            branches
                                .get()
                                .into_iter()
                                .map(|b| view! { <option value=b.id.clone()>{b.name.clone()}</option> })
                                .collect_view()
                        }}
                    </select>
                    <select
                        class="board-header__filter"
                        on:change=move |ev| staff_filter.set(event_target_value(&ev))
                    >
                        <option value="">"All staff"</option>
                        {move || {
                            staff_list
                                .get()
                                .into_iter()
                                .map(|s| view! { <option value=s.id.clone()>{s.name.clone()}</option> })
                                .collect_view()
                        }}
                    </select>
                </div>
                <div class="board-header__modes">
                    {mode_button(BoardMode::Day, "Day")}
                    {mode_button(BoardMode::Week, "Week")}
                </div>
            </div>

            {move || load_error.get().map(|message| view! { <ErrorView message=message/> })}
            {move || board_notice.get().map(|message| view! { <ErrorView message=message/> })}

            {move || {
                if loading.get() && bookings.get().is_empty() {
                    view! { <LoadingView message="Loading bookings...".to_string()/> }.into_any()
                } else {
                    match mode.get() {
                        BoardMode::Day => view! {
                            <DayGrid
                                grid=grid
                                staff=visible_staff
                                bookings=bookings
                                moving_id=moving
                                on_slot_click=open_create_for_staff
                                on_booking_click=open_edit
                                on_booking_drop=drop_on_staff
                            />
                        }
                        .into_any(),
                        BoardMode::Week => view! {
                            <WeekGrid
                                grid=grid
                                selected_day=selected_day
                                bookings=bookings
                                moving_id=moving
                                on_slot_click=open_create_on_day
                                on_booking_click=open_edit
                                on_booking_drop=drop_on_day
                            />
                        }
                        .into_any(),
                    }
                }
            }}

            {move || {
                panel
                    .get()
                    .map(|draft| {
                        view! {
                            <div class="booking-panel-overlay">
                                <BookingPanel
                                    draft=draft
                                    customers=customers
                                    staff=staff_list
                                    treatments=treatments
                                    branches=branches
                                    error=panel_error
                                    saving=saving
                                    on_save=save_draft
                                    on_delete=remove_booking
                                    on_close=close_panel
                                />
                            </div>
                        }
                    })
            }}
        </div>
    }
}
