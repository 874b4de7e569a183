use chrono::{Datelike, Duration, Local, NaiveDate};
use leptos::prelude::*;
use shared_types::BookingWithRelations;

use super::day_grid::{BookingLane, TimeGutter};
use crate::scheduling::GridConfig;

/// Monday of the week containing `day`.
pub fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(day.weekday().num_days_from_monday() as i64)
}

/// The same operating window, one lane per day of the selected week. Lane
/// keys are ISO dates so a drop reports which day the booking landed on.
#[component]
pub fn WeekGrid(
    grid: GridConfig,
    #[prop(into)] selected_day: Signal<NaiveDate>,
    #[prop(into)] bookings: Signal<Vec<BookingWithRelations>>,
    #[prop(into)] moving_id: Signal<Option<String>>,
    on_slot_click: impl Fn(String, i64) + Copy + Send + Sync + 'static,
    on_booking_click: impl Fn(BookingWithRelations) + Copy + Send + Sync + 'static,
    on_booking_drop: impl Fn(String, String, i64) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let window_height = grid.window_px_height();

    let days = move || {
        let monday = week_start(selected_day.get());
        (0..7).map(|i| monday + Duration::days(i)).collect::<Vec<_>>()
    };

    view! {
        <div class="board-grid board-grid--week">
            <div class="board-grid__header">
                <div class="board-grid__gutter-header"></div>
                {move || {
                    days()
                        .into_iter()
                        .map(|day| {
                            let today = Local::now().date_naive() == day;
                            view! {
                                <div
                                    class="board-grid__lane-header"
                                    class:board-grid__lane-header--today=today
                                >
                                    {day.format("%a %d.%m.").to_string()}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="board-grid__body" style=format!("height: {}px;", window_height)>
                <TimeGutter grid=grid/>
                {move || {
                    days()
                        .into_iter()
                        .map(|day| {
                            view! {
                                <BookingLane
                                    grid=grid
                                    lane_key=day.format("%Y-%m-%d").to_string()
                                    bookings=Signal::derive(move || {
                                        bookings
                                            .get()
                                            .into_iter()
                                            .filter(|b| {
                                                b.booking.start_at.with_timezone(&Local).date_naive()
                                                    == day
                                            })
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_start_is_monday() {
        // 2025-06-18 is a Wednesday
        let wednesday = NaiveDate::from_ymd_opt(2025, 6, 18).unwrap();
        assert_eq!(
            week_start(wednesday),
            NaiveDate::from_ymd_opt(2025, 6, 16).unwrap()
        );
        // a Monday maps to itself
        let monday = NaiveDate::from_ymd_opt(2025, 6, 16).unwrap();
        assert_eq!(week_start(monday), monday);
        // a Sunday belongs to the week started six days earlier
        let sunday = NaiveDate::from_ymd_opt(2025, 6, 22).unwrap();
        assert_eq!(week_start(sunday), monday);
    }
}
