//! UI Components
//!
//! Leptos components for the login and task list views.

mod login_page;
mod new_task_input;
mod task_footer;
mod task_item;
mod todo_page;

pub use login_page::LoginPage;
pub use new_task_input::NewTaskInput;
pub use task_footer::TaskFooter;
pub use task_item::TaskItem;
pub use todo_page::TodoPage;
