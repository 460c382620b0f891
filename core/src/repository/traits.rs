use crate::model::task::Task;
use anyhow::Result;

/// Whole-collection persistence: the store is read once at startup and
/// written back once on exit.
pub trait TaskRepository {
    fn load(&self) -> Result<Vec<Task>>;
    fn save(&self, tasks: &[Task]) -> Result<()>;
}
