use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

#[component]
pub fn NotFound() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div style="display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 60vh; text-align: center; gap: 1rem;">
            <div style="font-size: 5rem; font-weight: 800; color: #cbd5e1;">"404"</div>
            <h1 style="margin: 0;">"Page Not Found"</h1>
            <p style="color: #64748b; margin: 0;">
                "The page you are looking for does not exist or has been moved."
            </p>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| navigate("/", Default::default())
            >
                "Back to Dashboard"
            </Button>
        </div>
    }
}
