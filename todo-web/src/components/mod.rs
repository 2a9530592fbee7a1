pub(crate) mod error_banner;
pub(crate) mod filter_bar;
pub(crate) mod loading;
pub(crate) mod new_todo_form;
pub(crate) mod route_guard;
pub(crate) mod todo_item;

// Re-export components for convenience
pub use error_banner::ErrorBanner;
pub use filter_bar::FilterBar;
pub use loading::Loading;
pub use new_todo_form::NewTodoForm;
pub use route_guard::RouteGuard;
pub use todo_item::TodoItem;
