pub mod model;
pub mod parse;
pub mod repository;
pub mod store;

pub use model::task::{Priority, Task, Urgency};
pub use parse::{parse_date, parse_priority, parse_time};
pub use repository::{FileTaskRepository, TaskRepository};
pub use store::TaskStore;
