use shared::models::{Note, NoteList, NotePriority};
use strum::IntoEnumIterator;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::stores::notes;

/// Prioritized sticky notes, persisted on this device only.
///
/// The canonical list lives in component state; every mutation goes through
/// [`crate::stores::notes`] so storage stays in step with what is shown.
#[function_component(NotesBoard)]
pub fn notes_board() -> Html {
    let notes_state = use_state(notes::load);
    let draft_text = use_state(String::new);
    let draft_priority = use_state(NotePriority::default);

    let on_text_input = {
        let draft_text = draft_text.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                draft_text.set(input.value());
            }
        })
    };

    let on_priority_change = {
        let draft_priority = draft_priority.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            if let Ok(priority) = select.value().parse::<NotePriority>() {
                draft_priority.set(priority);
            }
        })
    };

    let on_add = {
        let notes_state = notes_state.clone();
        let draft_text = draft_text.clone();
        let draft_priority = draft_priority.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut next = (*notes_state).clone();
            if notes::add(&mut next, &draft_text, *draft_priority) {
                notes_state.set(next);
                draft_text.set(String::new());
                draft_priority.set(NotePriority::default());
            }
        })
    };

    let grouped = notes_state.grouped();

    html! {
        <div class="card bg-base-200 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">
                    <Icon icon_id={IconId::HeroiconsOutlinePencilSquare} class="w-6 h-6" />
                    {"Notes"}
                </h2>

                <form class="flex flex-col sm:flex-row gap-2" onsubmit={on_add}>
                    <input
                        type="text"
                        class="input input-bordered flex-grow"
                        placeholder="Write a note"
                        value={(*draft_text).clone()}
                        oninput={on_text_input}
                    />
                    <select class="select select-bordered" onchange={on_priority_change}>
                        { for NotePriority::iter().map(|priority| html! {
                            <option
                                value={priority.to_string()}
                                selected={priority == *draft_priority}
                            >
                                { priority.label() }
                            </option>
                        }) }
                    </select>
                    <button type="submit" class="btn btn-primary">{"Add"}</button>
                </form>

                if notes_state.is_empty() {
                    <p class="text-base-content/60 mt-2">{"No notes yet. Add one above."}</p>
                } else {
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mt-2">
                        { for NotePriority::iter().map(|priority| {
                            render_bucket(priority, grouped.bucket(priority), &notes_state)
                        }) }
                    </div>
                }
            </div>
        </div>
    }
}

fn render_bucket(
    priority: NotePriority,
    bucket: &[Note],
    notes_state: &UseStateHandle<NoteList>,
) -> Html {
    let badge_class = match priority {
        NotePriority::Important => "badge-error",
        NotePriority::Normal => "badge-info",
        NotePriority::Delayed => "badge-warning",
    };

    html! {
        <div key={priority.to_string()} class="bg-base-100 rounded-lg p-3">
            <div class={classes!("badge", badge_class, "mb-2")}>{ priority.label() }</div>
            if bucket.is_empty() {
                <p class="text-xs text-base-content/50">{"Nothing here."}</p>
            } else {
                <ul class="space-y-2">
                    { for bucket.iter().map(|note| render_note(note, notes_state)) }
                </ul>
            }
        </div>
    }
}

fn render_note(note: &Note, notes_state: &UseStateHandle<NoteList>) -> Html {
    let on_reassign = {
        let notes_state = notes_state.clone();
        let id = note.id;
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            let Ok(priority) = select.value().parse::<NotePriority>() else {
                return;
            };
            let mut next = (*notes_state).clone();
            if notes::set_priority(&mut next, id, priority) {
                notes_state.set(next);
            }
        })
    };

    let on_delete = {
        let notes_state = notes_state.clone();
        let id = note.id;
        Callback::from(move |_: MouseEvent| {
            let mut next = (*notes_state).clone();
            if notes::remove(&mut next, id) {
                notes_state.set(next);
            }
        })
    };

    html! {
        <li key={note.id.to_string()} class="bg-base-200 rounded-lg p-2 space-y-1">
            <p class="text-sm break-words">{ &note.text }</p>
            <p class="text-xs text-base-content/50">{ note.created_at }</p>
            <div class="flex items-center justify-between gap-2">
                <select class="select select-bordered select-xs" onchange={on_reassign}>
                    { for NotePriority::iter().map(|priority| html! {
                        <option
                            value={priority.to_string()}
                            selected={priority == note.priority}
                        >
                            { priority.label() }
                        </option>
                    }) }
                </select>
                <button class="btn btn-ghost btn-xs text-error" onclick={on_delete}>
                    <Icon icon_id={IconId::HeroiconsOutlineTrash} class="w-4 h-4" />
                </button>
            </div>
        </li>
    }
}
