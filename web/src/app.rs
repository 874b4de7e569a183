use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::components::sidebar::Sidebar;
use crate::views::bookings::BookingsPage;
use crate::views::branches::BranchesPage;
use crate::views::customers::CustomersPage;
use crate::views::dashboard::DashboardPage;
use crate::views::not_found::NotFound;
use crate::views::schedule_board::ScheduleBoardPage;
use crate::views::staff::StaffPage;
use crate::views::treatments::TreatmentsPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/web.css"/>

        // sets the document title
        <Title text="Salon Admin"/>

        <ConfigProvider>
            <Router>
                <div class="app-layout">
                    <Sidebar/>
                    <main class="app-content">
                        <Routes fallback=NotFound>
                            <Route path=StaticSegment("") view=DashboardPage/>
                            <Route path=StaticSegment("calendar") view=ScheduleBoardPage/>
                            <Route path=StaticSegment("bookings") view=BookingsPage/>
                            <Route path=StaticSegment("customers") view=CustomersPage/>
                            <Route path=StaticSegment("staff") view=StaffPage/>
                            <Route path=StaticSegment("treatments") view=TreatmentsPage/>
                            <Route path=StaticSegment("branches") view=BranchesPage/>
                        </Routes>
                    </main>
                </div>
            </Router>
        </ConfigProvider>
    }
}
