//! UI Components
//!
//! Leptos components for the to-do list.

mod todo_form;
mod todo_item;
mod todo_list;
mod filter_bar;
mod stats_bar;
mod bulk_actions;
mod notification_toast;

pub use todo_form::TodoForm;
pub use todo_item::TodoItem;
pub use todo_list::TodoListView;
pub use filter_bar::FilterBar;
pub use stats_bar::StatsBar;
pub use bulk_actions::BulkActions;
pub use notification_toast::NotificationToast;
