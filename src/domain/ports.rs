use crate::domain::model::{Board, ExportPlan, ExportSummary};
use crate::utils::error::Result;
use chrono::{DateTime, FixedOffset};
use std::path::Path;

pub trait Storage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
    /// Creates `path` and any missing parents; an existing directory is fine.
    fn create_dir(&self, path: &Path) -> Result<()>;
    /// Writes `data` to `path`, replacing any existing file.
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
    /// Sets both access and modification time of `path`.
    fn set_file_times(&self, path: &Path, time: DateTime<FixedOffset>) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
    /// Directory the `<board>_markdown` tree is created in.
    fn output_base(&self) -> &Path;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Board>;
    fn transform(&self, board: Board) -> Result<ExportPlan>;
    fn load(&self, plan: ExportPlan) -> Result<ExportSummary>;
}
