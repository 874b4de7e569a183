use leptos::prelude::*;
use leptos::task::spawn_local;
use shared_types::{Customer, CustomerPayload};
use thaw::*;

use crate::components::{ErrorView, LoadingView};
use crate::server::{create_customer, delete_customer, list_customers, update_customer};

#[component]
pub fn CustomersPage() -> impl IntoView {
    let reload = RwSignal::new(0u64);
    let rows = Resource::new(move || reload.get(), |_| async { list_customers().await });

    // None = closed, Some(None) = create, Some(Some(row)) = edit
    let form = RwSignal::new(None::<Option<Customer>>);
    let form_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let open_create = move |_| {
        form_error.set(None);
        form.set(Some(None));
    };
    let close_form = move || {
        form.set(None);
        form_error.set(None);
    };

    let save = move |id: Option<String>, payload: CustomerPayload| {
        if payload.first_name.trim().is_empty() || payload.last_name.trim().is_empty() {
            form_error.set(Some("First and last name are required".to_string()));
            return;
        }
        saving.set(true);
        spawn_local(async move {
            let result = match id {
                Some(id) => update_customer(id, payload).await.map(|_| ()),
                None => create_customer(payload).await.map(|_| ()),
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
            match delete_customer(id).await {
                Ok(()) => reload.update(|n| *n += 1),
                Err(e) => form_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="page-container">
            <div class="page-header">
                <h1>"Customers"</h1>
                <Button appearance=ButtonAppearance::Primary on_click=open_create>
                    "New Customer"
                </Button>
            </div>

            <Suspense fallback=move || view! { <LoadingView message="Loading customers...".to_string()/> }>
                {move || {
                    match rows.get() {
                        Some(Ok(customers)) => {
                            if customers.is_empty() {
                                view! {
                                    <div class="empty-state">
                                        <p>"No customers yet. Add your first one."</p>
                                    </div>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Name"</th>
                                                <th>"Email"</th>
                                                <th>"Phone"</th>
                                                <th>"Note"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {customers
                                                .into_iter()
                                                .map(|customer| {
                                                    let edit_row = customer.clone();
                                                    let delete_id = customer.id.clone();
                                                    view! {
                                                        <tr>
                                                            <td>
                                                                {format!(
                                                                    "{} {}",
                                                                    customer.first_name,
                                                                    customer.last_name,
                                                                )}
                                                            </td>
                                                            <td>{customer.email.clone().unwrap_or_default()}</td>
                                                            <td>{customer.phone.clone().unwrap_or_default()}</td>
                                                            <td>{customer.note.clone().unwrap_or_default()}</td>
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
                        Some(Err(e)) => {
                            view! { <ErrorView message=e.to_string()/> }.into_any()
                        }
                        None => view! { <LoadingView/> }.into_any(),
                    }
                }}
            </Suspense>

            {move || {
                form.get()
                    .map(|seed| {
                        view! {
                            <div class="form-overlay">
                                <CustomerForm
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
fn CustomerForm(
    seed: Option<Customer>,
    error: RwSignal<Option<String>>,
    #[prop(into)] saving: Signal<bool>,
    on_save: impl Fn(Option<String>, CustomerPayload) + Copy + Send + Sync + 'static,
    on_close: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let id = seed.as_ref().map(|c| c.id.clone());
    let is_edit = id.is_some();

    let first_name = RwSignal::new(seed.as_ref().map(|c| c.first_name.clone()).unwrap_or_default());
    let last_name = RwSignal::new(seed.as_ref().map(|c| c.last_name.clone()).unwrap_or_default());
    let email = RwSignal::new(
        seed.as_ref()
            .and_then(|c| c.email.clone())
            .unwrap_or_default(),
    );
    let phone = RwSignal::new(
        seed.as_ref()
            .and_then(|c| c.phone.clone())
            .unwrap_or_default(),
    );
    let note = RwSignal::new(
        seed.as_ref()
            .and_then(|c| c.note.clone())
            .unwrap_or_default(),
    );

    let submit = move |_| {
        on_save(
            id.clone(),
            CustomerPayload {
                first_name: first_name.get_untracked().trim().to_string(),
                last_name: last_name.get_untracked().trim().to_string(),
                email: blank_to_none(&email.get_untracked()),
                phone: blank_to_none(&phone.get_untracked()),
                note: blank_to_none(&note.get_untracked()),
            },
        );
    };

    view! {
        <div class="form-card">
            <div class="form-card__header">
                <h2>{if is_edit { "Edit Customer" } else { "New Customer" }}</h2>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close()>
                    "×"
                </Button>
            </div>

            {move || error.get().map(|message| view! { <ErrorView message=message/> })}

            <label class="form-card__field">
                <span>"First name"</span>
                <Input value=first_name/>
            </label>
            <label class="form-card__field">
                <span>"Last name"</span>
                <Input value=last_name/>
            </label>
            <label class="form-card__field">
                <span>"Email"</span>
                <Input value=email/>
            </label>
            <label class="form-card__field">
                <span>"Phone"</span>
                <Input value=phone/>
            </label>
            <label class="form-card__field">
                <span>"Note"</span>
                <Textarea value=note/>
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

pub(crate) fn blank_to_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
