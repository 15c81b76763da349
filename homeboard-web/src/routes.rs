use crate::{
    containers::layout::Layout,
    models::app_state::AppState,
    pages::{DashboardPage, LoginPage, UserDetailPage, UsersPage},
};
use gloo_console::log;
use strum::EnumIter;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/users")]
    Users,
    #[at("/users/:id")]
    UserDetail { id: i64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Label shown in the header nav; `None` keeps a route out of the nav.
    #[must_use]
    pub fn nav_label(&self) -> Option<&'static str> {
        match self {
            Self::Dashboard => Some("Dashboard"),
            Self::Users => Some("Users"),
            Self::Home | Self::UserDetail { .. } | Self::NotFound => None,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    let is_authenticated = session.is_authenticated;

    match props.route.clone() {
        MainRoute::Home => {
            if is_authenticated {
                html! { <Redirect<MainRoute> to={MainRoute::Dashboard} /> }
            } else {
                html! { <LoginPage /> }
            }
        }
        MainRoute::Dashboard => {
            if !is_authenticated {
                return html! { <Redirect<MainRoute> to={MainRoute::Home} /> };
            }
            html! {
                <Layout current_route={MainRoute::Dashboard}>
                    <DashboardPage />
                </Layout>
            }
        }
        MainRoute::Users => {
            if !is_authenticated {
                return html! { <Redirect<MainRoute> to={MainRoute::Home} /> };
            }
            html! {
                <Layout current_route={MainRoute::Users}>
                    <UsersPage />
                </Layout>
            }
        }
        MainRoute::UserDetail { id } => {
            if !is_authenticated {
                return html! { <Redirect<MainRoute> to={MainRoute::Home} /> };
            }
            html! {
                <Layout current_route={MainRoute::Users}>
                    <UserDetailPage {id} />
                </Layout>
            }
        }
        MainRoute::NotFound => {
            // Unknown paths land on the dashboard when signed in, else on login.
            if is_authenticated {
                html! { <Redirect<MainRoute> to={MainRoute::Dashboard} /> }
            } else {
                html! { <Redirect<MainRoute> to={MainRoute::Home} /> }
            }
        }
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log!(format!("Switching to route: {route:?}"));
    html! { <MainRouteView {route} /> }
}
