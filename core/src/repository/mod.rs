pub mod file;
pub mod traits;

pub use file::FileTaskRepository;
pub use traits::TaskRepository;
