use anyhow::{anyhow, Result};

use crate::model::task::Task;

/// Ordered collection of tasks. Positions are 1-based, matching the numbers
/// shown in the printed table, and shift down when an earlier task is
/// deleted.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn remove(&mut self, number: usize) -> Result<Task> {
        self.check_bounds(number)?;
        Ok(self.tasks.remove(number - 1))
    }

    pub fn get_mut(&mut self, number: usize) -> Result<&mut Task> {
        self.check_bounds(number)?;
        Ok(&mut self.tasks[number - 1])
    }

    fn check_bounds(&self, number: usize) -> Result<()> {
        if number == 0 || number > self.tasks.len() {
            return Err(anyhow!(
                "task number {} out of range 1-{}",
                number,
                self.tasks.len()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Priority;
    use chrono::{NaiveDate, NaiveTime};

    fn task(name: &str) -> Task {
        Task::new(
            vec![name.to_string()],
            Priority::Normal,
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        )
    }

    fn store_of(names: &[&str]) -> TaskStore {
        TaskStore::from_tasks(names.iter().map(|n| task(n)).collect())
    }

    #[test]
    fn test_remove_renumbers_later_tasks() {
        let mut store = store_of(&["a", "b", "c", "d"]);
        let removed = store.remove(2).unwrap();
        assert_eq!(removed.text, vec!["b".to_string()]);

        let names: Vec<&str> = store
            .tasks()
            .iter()
            .map(|t| t.text[0].as_str())
            .collect();
        assert_eq!(names, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut store = store_of(&["a", "b"]);
        assert!(store.remove(0).is_err());
        assert!(store.remove(3).is_err());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_edit_date_touches_only_that_field() {
        let mut store = store_of(&["a", "b", "c"]);
        let before: Vec<Task> = store.tasks().to_vec();

        let new_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        store.get_mut(2).unwrap().date = new_date;

        assert_eq!(store.tasks()[0], before[0]);
        assert_eq!(store.tasks()[2], before[2]);
        let edited = &store.tasks()[1];
        assert_eq!(edited.date, new_date);
        assert_eq!(edited.text, before[1].text);
        assert_eq!(edited.priority, before[1].priority);
        assert_eq!(edited.time, before[1].time);
    }

    #[test]
    fn test_duplicates_permitted() {
        let mut store = TaskStore::new();
        store.push(task("same"));
        store.push(task("same"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.tasks()[0], store.tasks()[1]);
    }
}
