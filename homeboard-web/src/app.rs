use crate::routes::{MainRoute, switch};
use yew::{Html, function_component, html};
use yew_router::prelude::*;

/// Root component wiring the browser router to the route table.
///
/// Session rehydration happens inside the [`AppState`](crate::models::app_state::AppState)
/// store the first time a route guard reads it, so there is nothing async to
/// wait for before routing.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={switch} />
        </BrowserRouter>
    }
}
