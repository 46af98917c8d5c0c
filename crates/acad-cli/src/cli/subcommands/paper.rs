use clap::Subcommand;

/// Exam paper commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PaperCommands {
    /// Extract questions from paper text and stage them as a draft.
    #[command(group(
        clap::ArgGroup::new("source").required(true).args(["text", "file"])
    ))]
    Map {
        #[arg(long)]
        subject: String,
        #[arg(long)]
        name: Option<String>,
        /// Paper text.
        #[arg(long)]
        text: Option<String>,
        /// Read paper text from a file.
        #[arg(long)]
        file: Option<String>,
    },
    /// Show the pending draft.
    Draft,
    /// Enter marks for a draft question (1-based index).
    Mark {
        index: usize,
        #[arg(allow_negative_numbers = true)]
        obtained: f64,
        #[arg(long, allow_negative_numbers = true)]
        allotted: Option<f64>,
    },
    /// Save the pending draft as an exam paper.
    Finalize,
    /// Drop the pending draft.
    Discard,
    /// List exam papers.
    List {
        #[arg(long)]
        subject: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get an exam paper by ID.
    Get { id: String },
    /// Delete an exam paper.
    Delete { id: String },
}
