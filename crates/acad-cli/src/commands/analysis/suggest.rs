use acad_ai::StudyAssistant;
use acad_core::entities::StudyRecommendation;
use acad_store::{KvStore, StudyStore};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;
use crate::ui;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecommendationsResponse {
    subject_id: String,
    recommendations: Vec<StudyRecommendation>,
}

pub(crate) struct SuggestOutcome {
    pub recommendations: Vec<StudyRecommendation>,
    pub ai_failed: bool,
}

pub async fn run(subject_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let assistant = ctx.assistant()?;

    let progress = Progress::spinner("Asking the study assistant...");
    let outcome = suggest(&ctx.store, &assistant, subject_id).await;
    progress.finish(&outcome, "Recommendations unavailable");
    let outcome = outcome?;

    if outcome.ai_failed {
        ui::notice("study recommendations are unavailable right now; try again later");
    }
    output(
        &RecommendationsResponse {
            subject_id: subject_id.to_string(),
            recommendations: outcome.recommendations,
        },
        flags.format,
    )
}

/// Ask for recommendations on the subject's current analysis. Advisory: a
/// failed AI call yields no recommendations rather than an error.
pub(crate) async fn suggest<S, A>(
    store: &StudyStore<S>,
    assistant: &A,
    subject_id: &str,
) -> anyhow::Result<SuggestOutcome>
where
    S: KvStore,
    A: StudyAssistant,
{
    let subject = store.require_subject(subject_id)?;
    let results = store.analysis(subject_id);
    if results.is_empty() {
        return Ok(SuggestOutcome {
            recommendations: Vec::new(),
            ai_failed: false,
        });
    }

    match assistant
        .generate_study_recommendations(&results, &subject.name)
        .await
    {
        Ok(recommendations) => Ok(SuggestOutcome {
            recommendations,
            ai_failed: false,
        }),
        Err(error) => {
            tracing::warn!(%error, subject = subject_id, "study recommendations failed");
            Ok(SuggestOutcome {
                recommendations: Vec::new(),
                ai_failed: true,
            })
        }
    }
}
