use strum::IntoEnumIterator;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

use crate::components::{header_nav_item::HeaderNavItem, user_dropdown::UserDropdown};
use crate::models::app_state::AppState;
use crate::routes::MainRoute;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current_route: MainRoute,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let is_authenticated = use_selector(|state: &AppState| state.session.is_authenticated);

    let nav_items: Html = MainRoute::iter()
        .filter(|route| route.nav_label().is_some())
        .map(|route| {
            html! {
                <HeaderNavItem
                    route={route}
                    current_route={props.current_route.clone()}
                />
            }
        })
        .collect();

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<MainRoute> to={MainRoute::Dashboard} classes="btn btn-ghost text-lg">
                {"Homeboard"}
            </Link<MainRoute>>
            <div class="dropdown dropdown-end sm:hidden">
                <button class="btn btn-soft">
                    <Icon icon_id={IconId::HeroiconsOutlineBars3} class="w-5 h-5" />
                </button>
                <ul
                    tabindex="0"
                    class="dropdown-content menu z-[1] bg-base-200 p-6 rounded-box shadow w-56 gap-2"
                >
                    { nav_items.clone() }
                </ul>
            </div>
            <ul class="hidden menu sm:menu-horizontal">
                { nav_items }
            </ul>
            <div class="flex items-center gap-2">
                if *is_authenticated {
                    <UserDropdown />
                } else {
                    <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary btn-sm">
                        {"Sign in"}
                    </Link<MainRoute>>
                }
            </div>
        </nav>
    }
}
