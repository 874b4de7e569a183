use chrono::{NaiveDate, NaiveTime, Timelike};
use leptos::prelude::*;
use shared_types::{BookingStatus, Branch, Customer, Staff, Treatment};
use thaw::*;

use super::draft::BookingDraft;
use crate::components::ErrorView;

/// Side panel for creating or editing a booking. Instantiated fresh each
/// time the panel opens; the seed draft fills the form and the parent gets a
/// rebuilt draft back on save.
#[component]
pub fn BookingPanel(
    draft: BookingDraft,
    #[prop(into)] customers: Signal<Vec<Customer>>,
    #[prop(into)] staff: Signal<Vec<Staff>>,
    #[prop(into)] treatments: Signal<Vec<Treatment>>,
    #[prop(into)] branches: Signal<Vec<Branch>>,
    error: RwSignal<Option<String>>,
    #[prop(into)] saving: Signal<bool>,
    on_save: impl Fn(BookingDraft) + Copy + Send + Sync + 'static,
    on_delete: impl Fn(String) + Copy + Send + Sync + 'static,
    on_close: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let editing_id = draft.id.clone();
    let is_edit = draft.is_edit();
    let delete_id = editing_id.clone();

    let customer_id = RwSignal::new(draft.customer_id.clone());
    let staff_id = RwSignal::new(draft.staff_id.clone());
    let treatment_id = RwSignal::new(draft.treatment_id.clone());
    let branch_id = RwSignal::new(draft.branch_id.clone());
    let day = RwSignal::new(draft.day.format("%Y-%m-%d").to_string());
    let start = RwSignal::new(format!(
        "{:02}:{:02}",
        draft.start_min / 60,
        draft.start_min % 60
    ));
    let duration = RwSignal::new(draft.duration_min.to_string());
    let status = RwSignal::new(draft.status);
    let note = RwSignal::new(draft.note.clone());

    // selecting a treatment pulls in its standard duration
    let on_treatment_change = move |ev: leptos::ev::Event| {
        let id = event_target_value(&ev);
        if let Some(treatment) = treatments
            .get_untracked()
            .into_iter()
            .find(|t| t.id == id)
        {
            duration.set(treatment.duration_min.to_string());
        }
        treatment_id.set(id);
    };

    let handle_save = move |_| {
        let Ok(parsed_day) = NaiveDate::parse_from_str(&day.get_untracked(), "%Y-%m-%d") else {
            error.set(Some("Please pick a valid date".to_string()));
            return;
        };
        let Ok(parsed_start) = NaiveTime::parse_from_str(&start.get_untracked(), "%H:%M") else {
            error.set(Some("Please pick a valid start time".to_string()));
            return;
        };
        let Ok(parsed_duration) = duration.get_untracked().trim().parse::<i64>() else {
            error.set(Some("Duration must be a number of minutes".to_string()));
            return;
        };

        on_save(BookingDraft {
            id: editing_id.clone(),
            customer_id: customer_id.get_untracked(),
            staff_id: staff_id.get_untracked(),
            treatment_id: treatment_id.get_untracked(),
            branch_id: branch_id.get_untracked(),
            day: parsed_day,
            start_min: (parsed_start.hour() * 60 + parsed_start.minute()) as i64,
            duration_min: parsed_duration,
            status: status.get_untracked(),
            note: note.get_untracked(),
        });
    };

    view! {
        <div class="booking-panel">
            <div class="booking-panel__header">
                <h2>{if is_edit { "Edit Booking" } else { "New Booking" }}</h2>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close()>
                    "×"
                </Button>
            </div>

            <div class="booking-panel__body">
                {move || error.get().map(|message| view! { <ErrorView message=message/> })}

                <label class="booking-panel__field">
                    <span>"Customer"</span>
                    <select on:change=move |ev| customer_id.set(event_target_value(&ev))>
                        <option value="" selected=customer_id.get_untracked().is_empty()>
                            "Select a customer"
                        </option>
                        {move || {
                            let current = customer_id.get_untracked();
                            customers
                                .get()
                                .into_iter()
                                .map(|c| {
                                    let selected = c.id == current;
                                    view! {
                                        <option value=c.id.clone() selected=selected>
                                            {format!("{} {}", c.first_name, c.last_name)}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>

                <label class="booking-panel__field">
                    <span>"Staff"</span>
                    <select on:change=move |ev| staff_id.set(event_target_value(&ev))>
                        <option value="" selected=staff_id.get_untracked().is_empty()>
                            "Select a staff member"
                        </option>
                        {move || {
                            let current = staff_id.get_untracked();
                            staff
                                .get()
                                .into_iter()
                                .map(|s| {
                                    let selected = s.id == current;
                                    view! {
                                        <option value=s.id.clone() selected=selected>
                                            {s.name.clone()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>

                <label class="booking-panel__field">
                    <span>"Treatment"</span>
                    <select on:change=on_treatment_change>
                        <option value="" selected=treatment_id.get_untracked().is_empty()>
                            "No treatment"
                        </option>
                        {move || {
                            let current = treatment_id.get_untracked();
                            treatments
                                .get()
                                .into_iter()
                                .map(|t| {
                                    let selected = t.id == current;
                                    view! {
                                        <option value=t.id.clone() selected=selected>
                                            {format!("{} ({} min)", t.name, t.duration_min)}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>

                <label class="booking-panel__field">
                    <span>"Branch"</span>
                    <select on:change=move |ev| branch_id.set(event_target_value(&ev))>
                        <option value="" selected=branch_id.get_untracked().is_empty()>
                            "No branch"
                        </option>
                        {move || {
                            let current = branch_id.get_untracked();
                            branches
                                .get()
                                .into_iter()
                                .map(|b| {
                                    let selected = b.id == current;
                                    view! {
                                        <option value=b.id.clone() selected=selected>
                                            {b.name.clone()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>

                <div class="booking-panel__row">
                    <label class="booking-panel__field">
                        <span>"Date"</span>
                        <input
                            type="date"
                            prop:value=move || day.get()
                            on:change=move |ev| day.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="booking-panel__field">
                        <span>"Start"</span>
                        <input
                            type="time"
                            step="900"
                            prop:value=move || start.get()
                            on:change=move |ev| start.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="booking-panel__field">
                        <span>"Duration (min)"</span>
                        <Input value=duration/>
                    </label>
                </div>

                <label class="booking-panel__field">
                    <span>"Status"</span>
                    <select on:change=move |ev| {
                        if let Some(parsed) = BookingStatus::parse(&event_target_value(&ev)) {
                            status.set(parsed);
                        }
                    }>
                        {BookingStatus::ALL
                            .into_iter()
                            .map(|s| {
                                let selected = s == status.get_untracked();
                                view! {
                                    <option value=s.as_str() selected=selected>
                                        {s.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>

                <label class="booking-panel__field">
                    <span>"Note"</span>
                    <Textarea value=note/>
                </label>
            </div>

            <div class="booking-panel__footer">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=saving
                    on_click=handle_save
                >
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </Button>
                {delete_id
                    .map(|id| {
                        view! {
                            <Button
                                appearance=ButtonAppearance::default()
                                on_click=move |_| on_delete(id.clone())
                            >
                                "Delete"
                            </Button>
                        }
                    })}
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close()>
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}
