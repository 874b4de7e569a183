use leptos::prelude::*;
use leptos_router::components::A;

/// Landing page with placeholder figures. The tiles and charts are static
/// mock data until reporting queries land; only the quick links are live.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let revenue_by_weekday: [(&str, f64); 7] = [
        ("Mon", 420.0),
        ("Tue", 380.0),
        ("Wed", 510.0),
        ("Thu", 640.0),
        ("Fri", 830.0),
        ("Sat", 960.0),
        ("Sun", 150.0),
    ];
    let max_revenue = 960.0;

    view! {
        <div class="dashboard-container">
            <div class="dashboard-header">
                <h1>"Dashboard"</h1>
                <p class="dashboard-subtitle">"An overview of your studio at a glance."</p>
            </div>

            <div class="dashboard-grid">
                <DashboardTile
                    title="Today's Bookings".to_string()
                    value="12".to_string()
                    subtitle="appointments scheduled".to_string()
                    icon="📅".to_string()
                    link="/calendar".to_string()
                />
                <DashboardTile
                    title="New Customers".to_string()
                    value="5".to_string()
                    subtitle="this week".to_string()
                    icon="👤".to_string()
                    link="/customers".to_string()
                />
                <DashboardTile
                    title="Utilization".to_string()
                    value="78%".to_string()
                    subtitle="of bookable hours".to_string()
                    icon="📈".to_string()
                    link="/calendar".to_string()
                />
                <DashboardTile
                    title="This Week".to_string()
                    value="€3,890".to_string()
                    subtitle="estimated revenue".to_string()
                    icon="💶".to_string()
                    link="/bookings".to_string()
                />
            </div>

            <div class="dashboard-chart">
                <h2>"Revenue by Weekday"</h2>
                <div class="dashboard-chart__bars">
                    {revenue_by_weekday
                        .into_iter()
                        .map(|(label, value)| {
                            let height = value / max_revenue * 100.0;
                            view! {
                                <div class="dashboard-chart__col">
                                    <div
                                        class="dashboard-chart__bar"
                                        style=format!("height: {:.0}%;", height)
                                        title=format!("€{:.0}", value)
                                    ></div>
                                    <span class="dashboard-chart__label">{label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="quick-actions">
                <h2>"Quick Actions"</h2>
                <div class="actions-grid">
                    <A href="/calendar">
                        <div class="action-button">
                            <div class="action-icon">"🗓️"</div>
                            <div class="action-text">"Open Calendar"</div>
                        </div>
                    </A>
                    <A href="/bookings">
                        <div class="action-button">
                            <div class="action-icon">"📒"</div>
                            <div class="action-text">"Manage Bookings"</div>
                        </div>
                    </A>
                    <A href="/customers">
                        <div class="action-button">
                            <div class="action-icon">"👤"</div>
                            <div class="action-text">"Customers"</div>
                        </div>
                    </A>
                    <A href="/treatments">
                        <div class="action-button">
                            <div class="action-icon">"✂️"</div>
                            <div class="action-text">"Treatments"</div>
                        </div>
                    </A>
                </div>
            </div>
        </div>
    }
}

#[component]
fn DashboardTile(
    title: String,
    value: String,
    subtitle: String,
    icon: String,
    link: String,
) -> impl IntoView {
    view! {
        <A href=link>
            <div class="dashboard-tile">
                <div class="dashboard-tile__icon">{icon}</div>
                <div class="dashboard-tile__value">{value}</div>
                <div class="dashboard-tile__title">{title}</div>
                <div class="dashboard-tile__subtitle">{subtitle}</div>
            </div>
        </A>
    }
}
