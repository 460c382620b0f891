use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use crate::model::task::Task;
use crate::repository::traits::TaskRepository;

const DEFAULT_FILE_NAME: &str = "tasklist.json";

/// JSON file persistence. The default location is `tasklist.json` in the
/// working directory; tests and the `--file` flag inject their own path.
#[derive(Clone)]
pub struct FileTaskRepository {
    file_path: PathBuf,
}

impl FileTaskRepository {
    pub fn new(file_path: Option<PathBuf>) -> Self {
        FileTaskRepository {
            file_path: file_path.unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_NAME)),
        }
    }
}

impl TaskRepository for FileTaskRepository {
    fn load(&self) -> Result<Vec<Task>> {
        if !self.file_path.exists() {
            debug!(path = %self.file_path.display(), "no task file, starting empty");
            return Ok(Vec::new());
        }
        let file = File::open(&self.file_path)
            .with_context(|| format!("failed to open task file '{}'", self.file_path.display()))?;
        let reader = BufReader::new(file);
        // A malformed file is a hard error: starting empty would overwrite
        // the user's data on the next save.
        let tasks: Vec<Task> = serde_json::from_reader(reader)
            .with_context(|| format!("corrupt task file '{}'", self.file_path.display()))?;
        debug!(count = tasks.len(), path = %self.file_path.display(), "loaded task file");
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        // temp file → fsync → rename, so a crash mid-write cannot clobber
        // the existing file.
        let tmp_path = self.file_path.with_extension("json.tmp");
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create directory '{}'", parent.display())
                })?;
            }
        }

        let file = File::create(&tmp_path)
            .with_context(|| format!("failed to create temp file '{}'", tmp_path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, tasks)?;
        writer.flush()?;
        writer.get_ref().sync_all().context("failed to sync temp file")?;

        fs::rename(&tmp_path, &self.file_path).with_context(|| {
            format!("failed to replace task file '{}'", self.file_path.display())
        })?;
        debug!(count = tasks.len(), path = %self.file_path.display(), "saved task file");
        Ok(())
    }
}
