pub mod login;
pub mod not_found;
pub mod todos;

pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use todos::TodoListPage;
