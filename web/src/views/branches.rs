use leptos::prelude::*;
use leptos::task::spawn_local;
use shared_types::{Branch, BranchPayload};
use thaw::*;

use super::customers::blank_to_none;
use crate::components::{ErrorView, LoadingView};
use crate::server::{create_branch, delete_branch, list_branches, update_branch};

#[component]
pub fn BranchesPage() -> impl IntoView {
    let reload = RwSignal::new(0u64);
    let rows = Resource::new(move || reload.get(), |_| async { list_branches().await });

    let form = RwSignal::new(None::<Option<Branch>>);
    let form_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let close_form = move || {
        form.set(None);
        form_error.set(None);
    };

    let save = move |id: Option<String>, payload: BranchPayload| {
        if payload.name.trim().is_empty() {
            form_error.set(Some("Name is required".to_string()));
            return;
        }
        saving.set(true);
        spawn_local(async move {
            let result = match id {
                Some(id) => update_branch(id, payload).await.map(|_| ()),
                None => create_branch(payload).await.map(|_| ()),
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
            match delete_branch(id).await {
                Ok(()) => reload.update(|n| *n += 1),
                Err(e) => form_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="page-container">
            <div class="page-header">
                <h1>"Branches"</h1>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| {
                        form_error.set(None);
                        form.set(Some(None));
                    }
                >
                    "New Branch"
                </Button>
            </div>

            <Suspense fallback=move || view! { <LoadingView message="Loading branches...".to_string()/> }>
                {move || {
                    match rows.get() {
                        Some(Ok(branches)) => {
                            if branches.is_empty() {
                                view! {
                                    <div class="empty-state">
                                        <p>"No branches yet."</p>
                                    </div>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Name"</th>
                                                <th>"Address"</th>
                                                <th>"Phone"</th>
                                                <th>"Active"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {branches
                                                .into_iter()
                                                .map(|branch| {
                                                    let edit_row = branch.clone();
                                                    let delete_id = branch.id.clone();
                                                    view! {
                                                        <tr>
                                                            <td>{branch.name.clone()}</td>
                                                            <td>{branch.address.clone().unwrap_or_default()}</td>
                                                            <td>{branch.phone.clone().unwrap_or_default()}</td>
                                                            <td>{if branch.active { "Yes" } else { "No" }}</td>
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
                                <BranchForm
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
fn BranchForm(
    seed: Option<Branch>,
    error: RwSignal<Option<String>>,
    #[prop(into)] saving: Signal<bool>,
    on_save: impl Fn(Option<String>, BranchPayload) + Copy + Send + Sync + 'static,
    on_close: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let id = seed.as_ref().map(|b| b.id.clone());
    let is_edit = id.is_some();

    let name = RwSignal::new(seed.as_ref().map(|b| b.name.clone()).unwrap_or_default());
    let address = RwSignal::new(
        seed.as_ref()
            .and_then(|b| b.address.clone())
            .unwrap_or_default(),
    );
    let phone = RwSignal::new(
        seed.as_ref()
            .and_then(|b| b.phone.clone())
            .unwrap_or_default(),
    );
    let active = RwSignal::new(seed.as_ref().map(|b| b.active).unwrap_or(true));

    let submit = move |_| {
        on_save(
            id.clone(),
            BranchPayload {
                name: name.get_untracked().trim().to_string(),
                address: blank_to_none(&address.get_untracked()),
                phone: blank_to_none(&phone.get_untracked()),
                active: active.get_untracked(),
            },
        );
    };

    view! {
        <div class="form-card">
            <div class="form-card__header">
                <h2>{if is_edit { "Edit Branch" } else { "New Branch" }}</h2>
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
                <span>"Address"</span>
                <Input value=address/>
            </label>
            <label class="form-card__field">
                <span>"Phone"</span>
                <Input value=phone/>
            </label>
            <label class="form-card__field form-card__field--inline">
                <input
                    type="checkbox"
                    prop:checked=move || active.get()
                    on:change=move |ev| active.set(event_target_checked(&ev))
                />
                <span>"Active"</span>
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
