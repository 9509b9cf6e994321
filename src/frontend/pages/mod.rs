//! One component per page id

mod authors;
mod blog;
mod dashboard;
mod editor;
mod home;
mod login;
mod my_posts;
mod post;
mod search;
mod settings;

pub use authors::AuthorPage;
pub use blog::BlogListingPage;
pub use dashboard::DashboardPage;
pub use editor::EditorPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use my_posts::MyPostsPage;
pub use post::SinglePostPage;
pub use search::SearchResultsPage;
pub use settings::SettingsPage;
