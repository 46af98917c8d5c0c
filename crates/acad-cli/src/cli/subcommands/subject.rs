use clap::Subcommand;

/// Subject commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SubjectCommands {
    /// Create a subject with an AI-generated syllabus.
    Create {
        name: String,
        /// Read official syllabus text from a file.
        #[arg(long, conflicts_with = "syllabus")]
        syllabus_file: Option<String>,
        /// Official syllabus text.
        #[arg(long)]
        syllabus: Option<String>,
    },
    /// Create a subject from a JSON array of topics (no AI call).
    Import {
        name: String,
        #[arg(long)]
        topics_file: String,
    },
    /// List subjects.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a subject by ID.
    Get { id: String },
    /// Delete a subject and all of its papers.
    Delete { id: String },
}
