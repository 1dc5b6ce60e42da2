pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{etl::EtlEngine, pipeline::MarkdownPipeline};
pub use utils::error::{ExportError, Result};
