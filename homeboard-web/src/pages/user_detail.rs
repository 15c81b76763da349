use crate::api::DashboardClient;
use crate::components::error_notice::ErrorNotice;
use crate::components::loading::Loading;
use crate::components::post_list::PostList;
use crate::components::todo_list::TodoList;
use crate::routes::MainRoute;
use crate::stores::todo_overrides;
use shared::models::{FetchError, OverrideMap, Post, Todo, User, effective_completion};
use yew::prelude::*;
use yew_hooks::{UseAsyncHandle, use_async};
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

#[derive(Clone, PartialEq)]
struct UserDetailData {
    user: User,
    posts: Vec<Post>,
    todos: Vec<Todo>,
}

#[derive(Properties, PartialEq)]
pub struct UserDetailPageProps {
    pub id: i64,
}

/// Profile, posts and todos for one directory user.
///
/// Completion checkmarks and the completed counter reflect this device's
/// overrides, not the raw remote flags.
#[function_component(UserDetailPage)]
pub fn user_detail_page(props: &UserDetailPageProps) -> Html {
    let detail: UseAsyncHandle<UserDetailData, FetchError> = {
        let id = props.id;
        use_async(async move {
            let client = DashboardClient::shared();
            let user = client.fetch_user(id).await?;
            let posts = client.fetch_posts_by_user(id).await?;
            let todos = client.fetch_todos_by_user(id).await?;
            Ok(UserDetailData { user, posts, todos })
        })
    };

    let overrides = use_state(|| todo_overrides::load(props.id));

    // Refetch and reload overrides whenever the route id changes.
    {
        let detail = detail.clone();
        let overrides = overrides.clone();
        use_effect_with(props.id, move |&id| {
            overrides.set(todo_overrides::load(id));
            detail.run();
            || ()
        });
    }

    let on_toggle = {
        let overrides = overrides.clone();
        let user_id = props.id;
        Callback::from(move |todo: Todo| {
            let mut next = (*overrides).clone();
            todo_overrides::toggle(user_id, &mut next, &todo);
            overrides.set(next);
        })
    };

    let on_retry = {
        let detail = detail.clone();
        Callback::from(move |_: MouseEvent| {
            detail.run();
        })
    };

    html! {
        <div class="p-4 space-y-6">
            <Link<MainRoute> to={MainRoute::Users} classes="btn btn-ghost btn-sm">
                <Icon icon_id={IconId::HeroiconsOutlineArrowLeft} class="w-4 h-4" />
                {"Back to users"}
            </Link<MainRoute>>

            if detail.loading {
                <Loading />
            } else if detail.error.is_some() {
                <ErrorNotice
                    message="Unable to fetch user data. Please try again."
                    on_retry={on_retry}
                />
            } else if let Some(data) = &detail.data {
                { render_detail(data, &overrides, on_toggle) }
            }
        </div>
    }
}

fn render_detail(data: &UserDetailData, overrides: &OverrideMap, on_toggle: Callback<Todo>) -> Html {
    let completed_count = data
        .todos
        .iter()
        .filter(|todo| effective_completion(overrides, todo))
        .count();

    html! {
        <>
            <div class="card bg-base-200 shadow-xl">
                <div class="card-body">
                    <h1 class="card-title text-2xl">{ &data.user.name }</h1>
                    <p class="text-sm text-base-content/70">{ format!("@{}", data.user.username) }</p>
                    <p class="text-sm">{ &data.user.email }</p>
                    <p class="text-sm flex items-center gap-1">
                        <Icon icon_id={IconId::HeroiconsOutlineMapPin} class="w-4 h-4" />
                        { data.user.city().unwrap_or("N/A") }
                    </p>
                </div>
            </div>

            <div class="stats shadow w-full">
                <div class="stat">
                    <div class="stat-title">{"Posts"}</div>
                    <div class="stat-value text-primary">{ data.posts.len() }</div>
                </div>
                <div class="stat">
                    <div class="stat-title">{"Completed todos"}</div>
                    <div class="stat-value text-success">{ completed_count }</div>
                    <div class="stat-desc">{ format!("of {}", data.todos.len()) }</div>
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <PostList posts={data.posts.clone()} />
                <TodoList
                    todos={data.todos.clone()}
                    overrides={overrides.clone()}
                    on_toggle={on_toggle}
                />
            </div>
        </>
    }
}
