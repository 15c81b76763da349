pub(crate) mod analytics_card;
pub(crate) mod error_notice;
pub(crate) mod header_nav_item;
pub(crate) mod loading;
pub(crate) mod notes_board;
pub(crate) mod post_list;
pub(crate) mod todo_list;
pub(crate) mod user_dropdown;
pub(crate) mod weather_card;
