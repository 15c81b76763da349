use shared::models::Post;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct PostListProps {
    pub posts: Vec<Post>,
}

#[function_component(PostList)]
pub fn post_list(props: &PostListProps) -> Html {
    html! {
        <div class="card bg-base-200 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">
                    <Icon icon_id={IconId::HeroiconsOutlineDocumentText} class="w-6 h-6" />
                    { format!("Posts ({})", props.posts.len()) }
                </h2>
                if props.posts.is_empty() {
                    <p class="text-base-content/60">{"No posts yet."}</p>
                } else {
                    <ul class="space-y-3">
                        { for props.posts.iter().map(|post| html! {
                            <li key={post.id} class="bg-base-100 rounded-lg p-3">
                                <p class="font-medium">{ &post.title }</p>
                                <p class="text-sm text-base-content/70 mt-1">{ &post.body }</p>
                            </li>
                        }) }
                    </ul>
                }
            </div>
        </div>
    }
}
