use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared_types::{BoardConfig, BookingStatus, BookingWithRelations, LaneScheme};
use thaw::*;

use super::schedule_board::booking_panel::BookingPanel;
use super::schedule_board::draft::BookingDraft;
use crate::components::{ErrorView, LoadingView, StatusBadge};
use crate::scheduling::{conflict_message, find_conflict};
use crate::server::{
    create_booking, delete_booking, list_active_branches, list_active_staff,
    list_active_treatments, list_bookings, list_customers, update_booking, update_booking_status,
};

#[component]
pub fn BookingsPage() -> impl IntoView {
    let board = BoardConfig::new(LaneScheme::ByStaff);

    let reload = RwSignal::new(0u64);
    let rows = Resource::new(move || reload.get(), |_| async { list_bookings().await });
    let action_error = RwSignal::new(None::<String>);

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

    let panel = RwSignal::new(None::<BookingDraft>);
    let panel_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let close_panel = move || {
        panel.set(None);
        panel_error.set(None);
    };

    let open_create = move |_| {
        panel_error.set(None);
        // new bookings default to today, 09:00
        panel.set(Some(BookingDraft::for_slot(
            Local::now().date_naive(),
            "",
            9 * 60,
        )));
    };

    let open_edit = move |row: BookingWithRelations| {
        panel_error.set(None);
        panel.set(Some(BookingDraft::for_booking(&row)));
    };

    let loaded_rows = move || {
        rows.get_untracked()
            .and_then(|r| r.ok())
            .unwrap_or_default()
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
        let loaded = loaded_rows();
        if let Some(hit) = find_conflict(
            &loaded,
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
                    reload.update(|n| *n += 1);
                }
                Err(e) => panel_error.set(Some(e.to_string())),
            }
        });
    };

    let set_status = move |id: String, current: BookingStatus, next: BookingStatus| {
        if !current.can_transition_to(next, false) {
            action_error.set(Some(format!(
                "Cannot change a {} booking to {}",
                current.label(),
                next.label()
            )));
            return;
        }
        spawn_local(async move {
            match update_booking_status(id, next).await {
                Ok(_) => {
                    action_error.set(None);
                    reload.update(|n| *n += 1);
                }
                Err(e) => action_error.set(Some(e.to_string())),
            }
        });
    };

    let remove = move |id: String| {
        let confirmed = web_sys::window()
            .and_then(|win| win.confirm_with_message("Delete this booking?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match delete_booking(id).await {
                Ok(()) => {
                    panel.set(None);
                    reload.update(|n| *n += 1);
                }
                Err(e) => action_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="page-container">
            <div class="page-header">
                <h1>"Bookings"</h1>
                <Button appearance=ButtonAppearance::Primary on_click=open_create>
                    "New Booking"
                </Button>
            </div>

            {move || action_error.get().map(|message| view! { <ErrorView message=message/> })}

            <Suspense fallback=move || view! { <LoadingView message="Loading bookings...".to_string()/> }>
                {move || {
                    match rows.get() {
                        Some(Ok(bookings)) => {
                            if bookings.is_empty() {
                                view! {
                                    <div class="empty-state">
                                        <p>"No bookings yet. Create one or use the calendar."</p>
                                    </div>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"When"</th>
                                                <th>"Customer"</th>
                                                <th>"Staff"</th>
                                                <th>"Treatment"</th>
                                                <th>"Branch"</th>
                                                <th>"Status"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {bookings
                                                .into_iter()
                                                .map(|row| {
                                                    view! {
                                                        <BookingRow
                                                            row=row
                                                            set_status=set_status
                                                            on_edit=open_edit
                                                            remove=remove
                                                        />
                                                    }
                                                })
                                                .collect_view()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                        }
                        Some(Err(e)) => view! { <ErrorView message=e.to_string()/> }.into_any(),
                        None => view! { <LoadingView/> }.into_any(),
                    }
                }}
            </Suspense>

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
                                    on_delete=remove
                                    on_close=close_panel
                                />
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn BookingRow(
    row: BookingWithRelations,
    set_status: impl Fn(String, BookingStatus, BookingStatus) + Copy + Send + Sync + 'static,
    on_edit: impl Fn(BookingWithRelations) + Copy + Send + Sync + 'static,
    remove: impl Fn(String) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let id = row.booking.id.clone();
    let delete_id = id.clone();
    let edit_row = row.clone();
    let status = row.booking.status;

    let start = row.booking.start_at.with_timezone(&Local);
    let end = row.booking.end_at.with_timezone(&Local);
    let when = format!(
        "{} {} - {}",
        start.format("%d.%m.%Y"),
        start.format("%H:%M"),
        end.format("%H:%M"),
    );

    view! {
        <tr>
            <td>{when}</td>
            <td>{row.customer_label()}</td>
            <td>{row.staff_label()}</td>
            <td>{row.treatment_label()}</td>
            <td>{row.branch_label()}</td>
            <td>
                <StatusBadge status=status/>
                <select
                    class="status-select"
                    on:change=move |ev| {
                        if let Some(next) = BookingStatus::parse(&event_target_value(&ev)) {
                            set_status(id.clone(), status, next);
                        }
                    }
                >
                    {BookingStatus::ALL
                        .into_iter()
                        .map(|s| {
                            view! {
                                <option value=s.as_str() selected=s == status>
                                    {s.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </td>
            <td class="data-table__actions">
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_edit(edit_row.clone())
                >
                    "Edit"
                </Button>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| remove(delete_id.clone())
                >
                    "Delete"
                </Button>
            </td>
        </tr>
    }
}
