use crate::components::analytics_card::AnalyticsCard;
use crate::components::notes_board::NotesBoard;
use crate::components::weather_card::WeatherCard;
use crate::routes::MainRoute;
use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

/// Dashboard page component
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{"Dashboard"}</h1>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                // Users manager card
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineUsers} class="w-6 h-6" />
                            {"Users Manager"}
                        </h2>
                        <p>{"Browse the user directory, their posts and their todos."}</p>
                        <div class="card-actions justify-end">
                            <Link<MainRoute> to={MainRoute::Users} classes="btn btn-primary">
                                {"Manage users"}
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>

                // Weather card
                <WeatherCard />
            </div>

            <NotesBoard />

            <AnalyticsCard />
        </div>
    }
}
