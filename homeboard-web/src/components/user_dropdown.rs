use crate::{models::app_state::AppState, routes::MainRoute, session};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

/// Signed-in identity menu with the sign-out action.
///
/// Renders nothing while signed out; the header swaps in a login link
/// instead.
#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let navigator = use_navigator();
    let (state, dispatch) = use_store::<AppState>();
    let Some(user) = state.session.user.clone() else {
        return html! {};
    };

    let logout_button = {
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            dispatch.reduce_mut(|state| session::logout(&mut state.session));
            if let Some(navigator) = &navigator {
                navigator.push(&MainRoute::Home);
            }
        });
        html! {
            <li><a {onclick}>{"Sign out"}</a></li>
        }
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle mb-1">
                <Icon icon_id={IconId::HeroiconsOutlineUserCircle} class="w-6 h-6" />
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">{ &user.name }</div>
                    <div class="text-xs text-base-content/70">{ &user.email }</div>
                </li>
                <div class="divider my-0"></div>
                {logout_button}
            </ul>
        </div>
    }
}
