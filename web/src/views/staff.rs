use leptos::prelude::*;
use leptos::task::spawn_local;
use shared_types::{Branch, Staff, StaffPayload};
use thaw::*;

use super::customers::blank_to_none;
use crate::components::{ErrorView, LoadingView};
use crate::server::{create_staff, delete_staff, list_active_branches, list_staff, update_staff};

#[component]
pub fn StaffPage() -> impl IntoView {
    let reload = RwSignal::new(0u64);
    let rows = Resource::new(move || reload.get(), |_| async { list_staff().await });
    let branches_res = Resource::new(|| (), |_| async { list_active_branches().await });
    let branches = Signal::derive(move || {
        branches_res.get().and_then(|r| r.ok()).unwrap_or_default()
    });

    let form = RwSignal::new(None::<Option<Staff>>);
    let form_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let close_form = move || {
        form.set(None);
        form_error.set(None);
    };

    let save = move |id: Option<String>, payload: StaffPayload| {
        if payload.name.trim().is_empty() {
            form_error.set(Some("Name is required".to_string()));
            return;
        }
        saving.set(true);
        spawn_local(async move {
            let result = match id {
                Some(id) => update_staff(id, payload).await.map(|_| ()),
                None => create_staff(payload).await.map(|_| ()),
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
            match delete_staff(id).await {
                Ok(()) => reload.update(|n| *n += 1),
                Err(e) => form_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="page-container">
            <div class="page-header">
                <h1>"Staff"</h1>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| {
                        form_error.set(None);
                        form.set(Some(None));
                    }
                >
                    "New Staff Member"
                </Button>
            </div>

            <Suspense fallback=move || view! { <LoadingView message="Loading staff...".to_string()/> }>
                {move || {
                    match rows.get() {
                        Some(Ok(members)) => {
                            if members.is_empty() {
                                view! {
                                    <div class="empty-state">
                                        <p>"No staff members yet."</p>
                                    </div>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Name"</th>
                                                <th>"Role"</th>
                                                <th>"Color"</th>
                                                <th>"Active"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {members
                                                .into_iter()
                                                .map(|member| {
                                                    let edit_row = member.clone();
                                                    let delete_id = member.id.clone();
                                                    let swatch = member
                                                        .color
                                                        .clone()
                                                        .unwrap_or_else(|| "#94a3b8".to_string());
                                                    view! {
                                                        <tr>
                                                            <td>{member.name.clone()}</td>
                                                            <td>{member.role.clone().unwrap_or_default()}</td>
                                                            <td>
                                                                <span
                                                                    class="color-swatch"
                                                                    style=format!("background: {};", swatch)
                                                                ></span>
                                                            </td>
                                                            <td>{if member.active { "Yes" } else { "No" }}</td>
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
                                <StaffForm
                                    seed=seed
                                    branches=branches
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
fn StaffForm(
    seed: Option<Staff>,
    #[prop(into)] branches: Signal<Vec<Branch>>,
    error: RwSignal<Option<String>>,
    #[prop(into)] saving: Signal<bool>,
    on_save: impl Fn(Option<String>, StaffPayload) + Copy + Send + Sync + 'static,
    on_close: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let id = seed.as_ref().map(|s| s.id.clone());
    let is_edit = id.is_some();

    let name = RwSignal::new(seed.as_ref().map(|s| s.name.clone()).unwrap_or_default());
    let role = RwSignal::new(
        seed.as_ref()
            .and_then(|s| s.role.clone())
            .unwrap_or_default(),
    );
    let color = RwSignal::new(
        seed.as_ref()
            .and_then(|s| s.color.clone())
            .unwrap_or_else(|| "#6366f1".to_string()),
    );
    let branch_id = RwSignal::new(
        seed.as_ref()
            .and_then(|s| s.branch_id.clone())
            .unwrap_or_default(),
    );
    let active = RwSignal::new(seed.as_ref().map(|s| s.active).unwrap_or(true));

    let submit = move |_| {
        on_save(
            id.clone(),
            StaffPayload {
                name: name.get_untracked().trim().to_string(),
                role: blank_to_none(&role.get_untracked()),
                color: blank_to_none(&color.get_untracked()),
                branch_id: blank_to_none(&branch_id.get_untracked()),
                active: active.get_untracked(),
            },
        );
    };

    view! {
        <div class="form-card">
            <div class="form-card__header">
                <h2>{if is_edit { "Edit Staff Member" } else { "New Staff Member" }}</h2>
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
                <span>"Role"</span>
                <Input value=role/>
            </label>
            <label class="form-card__field">
                <span>"Calendar color"</span>
                <input
                    type="color"
                    prop:value=move || color.get()
                    on:change=move |ev| color.set(event_target_value(&ev))
                />
            </label>
            <label class="form-card__field">
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
            <label class="form-card__field form-card__field--inline">
                <input
                    type="checkbox"
                    prop:checked=move || active.get()
                    on:change=move |ev| active.set(event_target_checked(&ev))
                />
                <span>"Active (shown on the board)"</span>
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
