use crate::api::DashboardClient;
use crate::components::error_notice::ErrorNotice;
use crate::components::loading::Loading;
use crate::routes::MainRoute;
use yew::prelude::*;
use yew_hooks::{UseAsyncOptions, use_async_with_options};
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

/// Remote user directory, one card per user.
#[function_component(UsersPage)]
pub fn users_page() -> Html {
    let users = use_async_with_options(
        async move { DashboardClient::shared().fetch_users().await },
        UseAsyncOptions::enable_auto(),
    );

    let on_retry = {
        let users = users.clone();
        Callback::from(move |_: MouseEvent| {
            users.run();
        })
    };

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{"Users"}</h1>

            if users.loading {
                <Loading />
            } else if users.error.is_some() {
                <ErrorNotice
                    message="Unable to fetch user data. Please try again."
                    on_retry={on_retry}
                />
            } else if let Some(list) = &users.data {
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    { for list.iter().map(|user| {
                        let detail = MainRoute::UserDetail { id: user.id };
                        html! {
                            <div class="card bg-base-200 shadow-xl" key={user.id}>
                                <div class="card-body">
                                    <h2 class="card-title">{ &user.name }</h2>
                                    <p class="text-sm text-base-content/70">{ format!("@{}", user.username) }</p>
                                    <p class="text-sm">{ &user.email }</p>
                                    <p class="text-sm flex items-center gap-1">
                                        <Icon icon_id={IconId::HeroiconsOutlineMapPin} class="w-4 h-4" />
                                        { user.city().unwrap_or("N/A") }
                                    </p>
                                    <div class="card-actions justify-end">
                                        <Link<MainRoute> to={detail} classes="btn btn-primary btn-sm">
                                            {"View details"}
                                        </Link<MainRoute>>
                                    </div>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            }
        </div>
    }
}
