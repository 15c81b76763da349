use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct ErrorNoticeProps {
    pub message: AttrValue,
    pub on_retry: Callback<MouseEvent>,
}

/// Inline failure banner with a retry button.
#[function_component(ErrorNotice)]
pub fn error_notice(props: &ErrorNoticeProps) -> Html {
    html! {
        <div class="alert alert-error shadow-lg">
            <Icon icon_id={IconId::HeroiconsOutlineExclamationTriangle} class="w-6 h-6" />
            <span>{ &props.message }</span>
            <button class="btn btn-sm" onclick={props.on_retry.clone()}>
                {"Retry"}
            </button>
        </div>
    }
}
