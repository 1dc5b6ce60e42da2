use crate::domain::model::ExportSummary;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use std::collections::HashSet;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<ExportSummary> {
        tracing::info!("Starting board export");

        // Extract
        let board = self.pipeline.extract()?;
        let list_count = board
            .lists
            .iter()
            .map(|list| list.id.as_str())
            .collect::<HashSet<_>>()
            .len();
        println!("Converting board '{}' to markdown...", board.name);
        println!("Found {} lists and {} cards", list_count, board.cards.len());

        // Transform
        let plan = self.pipeline.transform(board)?;
        tracing::debug!(
            "Planned {} directories and {} documents",
            plan.list_dirs.len(),
            plan.documents.len()
        );

        // Load
        let summary = self.pipeline.load(plan)?;
        println!(
            "\nConversion complete! {} markdown files created in '{}' directory",
            summary.files_written,
            summary.output_root.display()
        );

        Ok(summary)
    }
}
