use acad_core::analysis::AnalysisResult;
use acad_core::entities::{ExamPaper, StudyRecommendation, Subject};
use schemars::schema_for;
use serde::Deserialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::commands::shared::parse::parse_enum;
use crate::output::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum SchemaType {
    Subject,
    ExamPaper,
    AnalysisResult,
    StudyRecommendation,
}

/// Handle `acad schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_json(&args.type_name)?, flags.format)
}

fn schema_json(type_name: &str) -> anyhow::Result<serde_json::Value> {
    let schema = match parse_enum::<SchemaType>(type_name, "schema type")? {
        SchemaType::Subject => schema_for!(Subject),
        SchemaType::ExamPaper => schema_for!(ExamPaper),
        SchemaType::AnalysisResult => schema_for!(AnalysisResult),
        SchemaType::StudyRecommendation => schema_for!(StudyRecommendation),
    };
    Ok(serde_json::to_value(schema)?)
}
