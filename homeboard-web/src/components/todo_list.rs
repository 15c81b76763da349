use shared::models::{OverrideMap, Todo, effective_completion};
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct TodoListProps {
    pub todos: Vec<Todo>,
    pub overrides: OverrideMap,
    pub on_toggle: Callback<Todo>,
}

/// Checklist of one user's todos.
///
/// Each checkbox shows the effective completion, the remote flag shadowed
/// by any local override. Toggling emits the full todo so the parent can
/// record the new override.
#[function_component(TodoList)]
pub fn todo_list(props: &TodoListProps) -> Html {
    html! {
        <div class="card bg-base-200 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">
                    <Icon icon_id={IconId::HeroiconsOutlineCheckCircle} class="w-6 h-6" />
                    { format!("Todos ({})", props.todos.len()) }
                </h2>
                if props.todos.is_empty() {
                    <p class="text-base-content/60">{"No todos yet."}</p>
                } else {
                    <ul class="space-y-2">
                        { for props.todos.iter().map(|todo| {
                            let done = effective_completion(&props.overrides, todo);
                            let onchange = {
                                let on_toggle = props.on_toggle.clone();
                                let todo = todo.clone();
                                Callback::from(move |_: Event| on_toggle.emit(todo.clone()))
                            };
                            let title_class = if done {
                                "line-through text-base-content/50"
                            } else {
                                ""
                            };
                            html! {
                                <li key={todo.id} class="flex items-center gap-3 bg-base-100 rounded-lg p-3">
                                    <input
                                        type="checkbox"
                                        class="checkbox checkbox-success"
                                        checked={done}
                                        {onchange}
                                    />
                                    <span class={title_class}>{ &todo.title }</span>
                                </li>
                            }
                        }) }
                    </ul>
                }
            </div>
        </div>
    }
}
