mod dashboard;
mod login;
mod user_detail;
mod users;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use user_detail::UserDetailPage;
pub use users::UsersPage;
