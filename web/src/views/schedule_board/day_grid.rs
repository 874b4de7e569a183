use chrono::{DateTime, Local, Timelike, Utc};
use leptos::prelude::*;
use shared_types::{BookingWithRelations, Staff};
use wasm_bindgen::JsCast;

use crate::scheduling::{layout_events, GridConfig, ScheduleEvent};

/// Local-clock minutes from midnight for a stored UTC instant.
pub fn local_minutes(instant: DateTime<Utc>) -> i64 {
    let local = instant.with_timezone(&Local);
    (local.hour() * 60 + local.minute()) as i64
}

/// Vertical pointer offset within the element the handler is attached to.
/// `None` outside the browser or when the target is not an element.
pub fn pointer_offset_px(ev: &web_sys::MouseEvent) -> Option<f64> {
    let element = ev.current_target()?.dyn_into::<web_sys::Element>().ok()?;
    let rect = element.get_bounding_client_rect();
    Some(ev.client_y() as f64 - rect.top())
}

fn dragged_booking_id(ev: &web_sys::DragEvent) -> Option<String> {
    let data = ev.data_transfer()?;
    let id = data.get_data("text/plain").ok()?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// One day, one column per staff member. Bookings inside a lane are packed
/// side by side when they overlap; empty space is clickable and lanes accept
/// drops of dragged booking blocks.
#[component]
pub fn DayGrid(
    grid: GridConfig,
    #[prop(into)] staff: Signal<Vec<Staff>>,
    #[prop(into)] bookings: Signal<Vec<BookingWithRelations>>,
    #[prop(into)] moving_id: Signal<Option<String>>,
    on_slot_click: impl Fn(String, i64) + Copy + Send + Sync + 'static,
    on_booking_click: impl Fn(BookingWithRelations) + Copy + Send + Sync + 'static,
    on_booking_drop: impl Fn(String, String, i64) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let window_height = grid.window_px_height();

    view! {
        <div class="board-grid">
            <div class="board-grid__header">
                <div class="board-grid__gutter-header"></div>
                {move || {
                    staff
                        .get()
                        .into_iter()
                        .map(|member| {
                            view! {
                                <div class="board-grid__lane-header">{member.name.clone()}</div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="board-grid__body" style=format!("height: {}px;", window_height)>
                <TimeGutter grid=grid/>
                {move || {
                    staff
                        .get()
                        .into_iter()
                        .map(|member| {
                            let staff_id = member.id.clone();
                            view! {
                                <BookingLane
                                    grid=grid
                                    lane_key=staff_id.clone()
                                    bookings=Signal::derive(move || {
                                        bookings
                                            .get()
                                            .into_iter()
                                            .filter(|b| b.booking.staff_id == staff_id)
                                            .collect::<Vec<_>>()
                                    })
                                    moving_id=moving_id
                                    on_slot_click=on_slot_click
                                    on_booking_click=on_booking_click
                                    on_booking_drop=on_booking_drop
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
pub fn TimeGutter(grid: GridConfig) -> impl IntoView {
    view! {
        <div class="board-grid__gutter">
            {grid
                .slots()
                .into_iter()
                .filter(|slot| slot.minute == 0)
                .map(|slot| {
                    let top = grid.offset_px(slot.minutes_from_midnight());
                    view! {
                        <div class="board-grid__hour-label" style=format!("top: {}px;", top)>
                            {slot.label()}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// One droppable lane. `lane_key` is reported back on clicks and drops; for
/// the day board it is a staff id, for the week board a day stamp.
#[component]
pub fn BookingLane(
    grid: GridConfig,
    lane_key: String,
    #[prop(into)] bookings: Signal<Vec<BookingWithRelations>>,
    #[prop(into)] moving_id: Signal<Option<String>>,
    on_slot_click: impl Fn(String, i64) + Copy + Send + Sync + 'static,
    on_booking_click: impl Fn(BookingWithRelations) + Copy + Send + Sync + 'static,
    on_booking_drop: impl Fn(String, String, i64) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let click_key = lane_key.clone();
    let drop_key = lane_key.clone();

    let hour_lines = grid
        .slots()
        .into_iter()
        .filter(|slot| slot.minute == 0)
        .map(|slot| {
            let top = grid.offset_px(slot.minutes_from_midnight());
            view! { <div class="board-grid__hour-line" style=format!("top: {}px;", top)></div> }
        })
        .collect_view();

    view! {
        <div
            class="board-grid__lane"
            on:click=move |ev| {
                if let Some(offset) = pointer_offset_px(&ev) {
                    let slot = grid.slot_at_offset(offset);
                    on_slot_click(click_key.clone(), slot.minutes_from_midnight());
                }
            }
            on:dragover=move |ev| ev.prevent_default()
            on:drop=move |ev| {
                ev.prevent_default();
                ev.stop_propagation();
                if let (Some(id), Some(offset)) =
                    (dragged_booking_id(&ev), pointer_offset_px(&ev))
                {
                    let slot = grid.slot_at_offset(offset);
                    on_booking_drop(id, drop_key.clone(), slot.minutes_from_midnight());
                }
            }
        >
            {hour_lines}
            {move || {
                let rows = bookings.get();
                let events: Vec<ScheduleEvent> = rows
                    .iter()
                    .map(|b| ScheduleEvent {
                        id: b.booking.id.clone(),
                        start_min: local_minutes(b.booking.start_at),
                        end_min: local_minutes(b.booking.end_at),
                    })
                    .collect();
                layout_events(&events)
                    .into_iter()
                    .filter_map(|laid| {
                        let row = rows.iter().find(|b| b.booking.id == laid.id)?.clone();
                        let (top, height) = grid.event_px(laid.start_min, laid.end_min)?;
                        Some((laid, row, top, height))
                    })
                    .map(|(laid, row, top, height)| {
                        view! {
                            <BookingBlock
                                row=row
                                top=top
                                height=height
                                column=laid.column
                                column_count=laid.column_count
                                moving_id=moving_id
                                on_booking_click=on_booking_click
                            />
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn BookingBlock(
    row: BookingWithRelations,
    top: f64,
    height: f64,
    column: usize,
    column_count: usize,
    #[prop(into)] moving_id: Signal<Option<String>>,
    on_booking_click: impl Fn(BookingWithRelations) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let id = row.booking.id.clone();
    let drag_id = id.clone();
    let moving_class_id = id.clone();
    let clicked = row.clone();

    let width_pct = 100.0 / column_count as f64;
    let left_pct = width_pct * column as f64;

    let start = row.booking.start_at.with_timezone(&Local).format("%H:%M");
    let end = row.booking.end_at.with_timezone(&Local).format("%H:%M");
    let time_label = format!("{} - {}", start, end);
    let customer = row.customer_label();
    let treatment = row.treatment_label();
    let status = row.booking.status;

    view! {
        <div
            class="booking-block"
            class:booking-block--moving=move || moving_id.get().as_deref() == Some(moving_class_id.as_str())
            class:booking-block--cancelled=status == shared_types::BookingStatus::Cancelled
            style=format!(
                "top: {}px; height: {}px; left: {}%; width: calc({}% - 2px);",
                top, height, left_pct, width_pct,
            )
            draggable="true"
            on:dragstart=move |ev| {
                if let Some(data) = ev.data_transfer() {
                    let _ = data.set_data("text/plain", &drag_id);
                }
            }
            on:click=move |ev| {
                ev.stop_propagation();
                on_booking_click(clicked.clone());
            }
        >
            <span class="booking-block__time">{time_label}</span>
            <span class="booking-block__customer">{customer}</span>
            <span class="booking-block__treatment">{treatment}</span>
        </div>
    }
}
