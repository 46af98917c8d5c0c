use clap::{Args, Subcommand};

use crate::cli::subcommands::{AnalysisCommands, PaperCommands, SubjectCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Subject, paper and question counts.
    Dashboard,
    /// Subjects and their syllabi.
    Subject {
        #[command(subcommand)]
        action: SubjectCommands,
    },
    /// Exam papers and the pending paper draft.
    Paper {
        #[command(subcommand)]
        action: PaperCommands,
    },
    /// Topic-wise performance analysis.
    Analysis {
        #[command(subcommand)]
        action: AnalysisCommands,
    },
    /// Dump JSON schema for a persisted type.
    Schema(SchemaArgs),
}

/// Arguments for `acad schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// One of: subject, exam-paper, analysis-result, study-recommendation
    pub type_name: String,
}
