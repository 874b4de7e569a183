use leptos::prelude::*;
use leptos::task::spawn_local;
use shared_types::{Treatment, TreatmentPayload};
use thaw::*;

use super::customers::blank_to_none;
use crate::components::{ErrorView, LoadingView};
use crate::server::{create_treatment, delete_treatment, list_treatments, update_treatment};

#[component]
pub fn TreatmentsPage() -> impl IntoView {
    let reload = RwSignal::new(0u64);
    let rows = Resource::new(move || reload.get(), |_| async { list_treatments().await });

    let form = RwSignal::new(None::<Option<Treatment>>);
    let form_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let close_form = move || {
        form.set(None);
        form_error.set(None);
    };

    let save = move |id: Option<String>, payload: TreatmentPayload| {
        if payload.name.trim().is_empty() {
            form_error.set(Some("Name is required".to_string()));
            return;
        }
        if payload.duration_min <= 0 {
            form_error.set(Some("Duration must be a positive number of minutes".to_string()));
            return;
        }
        saving.set(true);
        spawn_local(async move {
            let result = match id {
                Some(id) => update_treatment(id, payload).await.map(|_| ()),
                None => create_treatment(payload).await.map(|_| ()),
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    form.set(None);
                    form_error.set(None);
                    reload.update(|n| *n += 1);
                }
                Err(e) => form_error.set(Some(e.to_string())),
            }
        });
    };

    let remove = move |id: String| {
        spawn_local(async move {
            match delete_treatment(id).await {
                Ok(()) => reload.update(|n| *n += 1),
                Err(e) => form_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="page-container">
            <div class="page-header">
                <h1>"Treatments"</h1>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| {
                        form_error.set(None);
                        form.set(Some(None));
                    }
                >
                    "New Treatment"
                </Button>
            </div>

            <Suspense fallback=move || view! { <LoadingView message="Loading treatments...".to_string()/> }>
                {move || {
                    match rows.get() {
                        Some(Ok(treatments)) => {
                            if treatments.is_empty() {
                                view! {
                                    <div class="empty-state">
                                        <p>"No treatments yet."</p>
                                    </div>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Name"</th>
                                                <th>"Duration"</th>
                                                <th>"Price"</th>
                                                <th>"Active"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {treatments
                                                .into_iter()
                                                .map(|treatment| {
                                                    let edit_row = treatment.clone();
                                                    let delete_id = treatment.id.clone();
                                                    view! {
                                                        <tr>
                                                            <td>{treatment.name.clone()}</td>
                                                            <td>{format!("{} min", treatment.duration_min)}</td>
                                                            <td>{format!("€{:.2}", treatment.price_eur)}</td>
                                                            <td>{if treatment.active { "Yes" } else { "No" }}</td>
                                                            <td class="data-table__actions">
                                                                <Button
                                                                    appearance=ButtonAppearance::Subtle
                                                                    on_click=move |_| {
                                                                        form_error.set(None);
                                                                        form.set(Some(Some(edit_row.clone())));
                                                                    }
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
                form.get()
                    .map(|seed| {
                        view! {
                            <div class="form-overlay">
                                <TreatmentForm
                                    seed=seed
                                    error=form_error
                                    saving=saving
                                    on_save=save
                                    on_close=close_form
                                />
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn TreatmentForm(
    seed: Option<Treatment>,
    error: RwSignal<Option<String>>,
    #[prop(into)] saving: Signal<bool>,
    on_save: impl Fn(Option<String>, TreatmentPayload) + Copy + Send + Sync + 'static,
    on_close: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let id = seed.as_ref().map(|t| t.id.clone());
    let is_edit = id.is_some();

    let name = RwSignal::new(seed.as_ref().map(|t| t.name.clone()).unwrap_or_default());
    let duration = RwSignal::new(
        seed.as_ref()
            .map(|t| t.duration_min.to_string())
            .unwrap_or_else(|| "45".to_string()),
    );
    let price = RwSignal::new(
        seed.as_ref()
            .map(|t| format!("{:.2}", t.price_eur))
            .unwrap_or_default(),
    );
    let color = RwSignal::new(
        seed.as_ref()
            .and_then(|t| t.color.clone())
            .unwrap_or_else(|| "#22c55e".to_string()),
    );
    let active = RwSignal::new(seed.as_ref().map(|t| t.active).unwrap_or(true));

    let submit = move |_| {
        let Ok(duration_min) = duration.get_untracked().trim().parse::<i32>() else {
            error.set(Some("Duration must be a number of minutes".to_string()));
            return;
        };
        let Ok(price_eur) = price.get_untracked().trim().parse::<f64>() else {
            error.set(Some("Price must be a number".to_string()));
            return;
        };
        on_save(
            id.clone(),
            TreatmentPayload {
                name: name.get_untracked().trim().to_string(),
                duration_min,
                price_eur,
                color: blank_to_none(&color.get_untracked()),
                active: active.get_untracked(),
            },
        );
    };

    view! {
        <div class="form-card">
            <div class="form-card__header">
                <h2>{if is_edit { "Edit Treatment" } else { "New Treatment" }}</h2>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close()>
                    "×"
                </Button>
            </div>

            {move || error.get().map(|message| view! { <ErrorView message=message/> })}

            <label class="form-card__field">
                <span>"Name"</span>
                <Input value=name/>
            </label>
            <label class="form-card__field">
                <span>"Duration (min)"</span>
                <Input value=duration/>
            </label>
            <label class="form-card__field">
                <span>"Price (EUR)"</span>
                <Input value=price/>
            </label>
            <label class="form-card__field">
                <span>"Calendar color"</span>
                <input
                    type="color"
                    prop:value=move || color.get()
                    on:change=move |ev| color.set(event_target_value(&ev))
                />
            </label>
            <label class="form-card__field form-card__field--inline">
                <input
                    type="checkbox"
                    prop:checked=move || active.get()
                    on:change=move |ev| active.set(event_target_checked(&ev))
                />
                <span>"Active (offered for new bookings)"</span>
            </label>

            <div class="form-card__footer">
                <Button appearance=ButtonAppearance::Primary disabled=saving on_click=submit>
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close()>
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}
