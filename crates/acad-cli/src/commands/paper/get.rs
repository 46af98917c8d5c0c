use acad_core::entities::{ExamPaper, Question, Subject};
use acad_core::responses::PaperSummary;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
pub(super) struct PaperDetailResponse<'a> {
    summary: PaperSummary,
    questions: &'a [Question],
}

impl<'a> PaperDetailResponse<'a> {
    pub(super) fn new(paper: &'a ExamPaper, subjects: &[Subject]) -> Self {
        Self {
            summary: PaperSummary::from_paper(paper, subjects),
            questions: &paper.questions,
        }
    }
}

pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let paper = ctx.store.require_paper(id)?;
    output(
        &PaperDetailResponse::new(paper, ctx.store.subjects()),
        flags.format,
    )
}
