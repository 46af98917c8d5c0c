mod analysis;
mod paper;
mod subject;

pub use analysis::AnalysisCommands;
pub use paper::PaperCommands;
pub use subject::SubjectCommands;
