use crate::core::layout::{list_directories, output_root, ListIndex};
use crate::core::render::render_card;
use crate::domain::model::{Board, ExportPlan, ExportSummary};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;
use chrono::{Local, NaiveDate};

/// Board export to markdown tree.
///
/// `extract` parses the export file, `transform` plans directories and
/// renders every card, `load` creates the directories and writes the files
/// in card order. Later cards overwrite earlier ones that map to the same path.
pub struct MarkdownPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    export_date: NaiveDate,
}

impl<S: Storage, C: ConfigProvider> MarkdownPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            export_date: Local::now().date_naive(),
        }
    }

    pub fn with_export_date(mut self, export_date: NaiveDate) -> Self {
        self.export_date = export_date;
        self
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for MarkdownPipeline<S, C> {
    fn extract(&self) -> Result<Board> {
        let path = self.config.input_path();
        tracing::debug!("Reading board export from {}", path.display());

        let data = self.storage.read_file(path)?;
        let board: Board = serde_json::from_slice(&data)?;

        tracing::debug!(
            "Parsed board '{}' with {} lists and {} cards",
            board.name,
            board.lists.len(),
            board.cards.len()
        );
        Ok(board)
    }

    fn transform(&self, board: Board) -> Result<ExportPlan> {
        let root = output_root(self.config.output_base(), &board.name);
        let index = ListIndex::new(&board.lists);
        let list_dirs = list_directories(&root, &board, &index);

        let documents = board
            .cards
            .iter()
            .map(|card| {
                let list_name = index.resolve_name(card.id_list.as_deref());
                render_card(card, list_name, self.export_date)
            })
            .collect();

        Ok(ExportPlan {
            output_root: root,
            list_dirs,
            documents,
        })
    }

    fn load(&self, plan: ExportPlan) -> Result<ExportSummary> {
        self.storage.create_dir(&plan.output_root)?;

        for dir in &plan.list_dirs {
            self.storage.create_dir(dir)?;
            println!("Created directory: {}", dir.display());
        }

        for document in &plan.documents {
            let path = plan.output_root.join(document.relative_path());
            self.storage
                .write_file(&path, document.content.as_bytes())?;

            match document.modified {
                Some(modified) => {
                    self.storage.set_file_times(&path, modified)?;
                    println!(
                        "Created: {} (modified: {})",
                        document.file_name,
                        modified.format("%Y-%m-%d %H:%M:%S")
                    );
                }
                None => println!("Created: {}", document.file_name),
            }
        }

        Ok(ExportSummary {
            output_root: plan.output_root,
            files_written: plan.documents.len(),
        })
    }
}
