use clap::Subcommand;

/// Analysis commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AnalysisCommands {
    /// Per-topic totals, percentage and status.
    Show { subject_id: String },
    /// Status tally and the suggested focus topic.
    Summary { subject_id: String },
    /// AI study recommendations for each topic.
    Suggest { subject_id: String },
}
