//! `StudyStore`: the explicit state container for subjects and papers.
//!
//! Both collections are held in memory and written back as full snapshots
//! after every mutation (last write wins). Loading never fails: an absent or
//! unparseable entry becomes an empty collection.

use acad_core::analysis::{AnalysisResult, compute_analysis};
use acad_core::draft::DraftPaper;
use acad_core::entities::{ExamPaper, Subject};
use acad_core::errors::CoreError;
use acad_core::responses::{DashboardStats, PaperSummary};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use crate::error::StoreError;
use crate::kv::{DRAFT_KEY, KvStore, PAPERS_KEY, SUBJECTS_KEY};

pub struct StudyStore<S> {
    kv: S,
    subjects: Vec<Subject>,
    papers: Vec<ExamPaper>,
}

impl<S: KvStore> StudyStore<S> {
    /// Load both collections from `kv`.
    pub fn load(kv: S) -> Self {
        let subjects = read_collection(&kv, SUBJECTS_KEY);
        let papers = read_collection(&kv, PAPERS_KEY);
        tracing::debug!(
            subjects = subjects.len(),
            papers = papers.len(),
            "loaded study snapshot"
        );
        Self {
            kv,
            subjects,
            papers,
        }
    }

    #[must_use]
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    #[must_use]
    pub fn papers(&self) -> &[ExamPaper] {
        &self.papers
    }

    #[must_use]
    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|subject| subject.id == id)
    }

    #[must_use]
    pub fn paper(&self, id: &str) -> Option<&ExamPaper> {
        self.papers.iter().find(|paper| paper.id == id)
    }

    /// Papers belonging to `subject_id`, in insertion order.
    pub fn papers_for_subject<'a>(
        &'a self,
        subject_id: &'a str,
    ) -> impl Iterator<Item = &'a ExamPaper> + 'a {
        self.papers
            .iter()
            .filter(move |paper| paper.subject_id == subject_id)
    }

    /// Look up a subject, reporting an unknown id as [`CoreError::NotFound`].
    ///
    /// # Errors
    ///
    /// [`StoreError::Core`] if no subject has this id.
    pub fn require_subject(&self, id: &str) -> Result<&Subject, StoreError> {
        self.subject(id).ok_or_else(|| not_found("subject", id))
    }

    /// Look up a paper, reporting an unknown id as [`CoreError::NotFound`].
    ///
    /// # Errors
    ///
    /// [`StoreError::Core`] if no paper has this id.
    pub fn require_paper(&self, id: &str) -> Result<&ExamPaper, StoreError> {
        self.paper(id).ok_or_else(|| not_found("exam paper", id))
    }

    /// Append a subject and persist.
    ///
    /// # Errors
    ///
    /// [`CoreError::Validation`] for a blank name or an id already in use;
    /// [`StoreError`] if the snapshot cannot be written.
    pub fn add_subject(&mut self, subject: Subject) -> Result<&Subject, StoreError> {
        if subject.name.trim().is_empty() {
            return Err(CoreError::Validation("subject name must not be empty".into()).into());
        }
        if self.subject(&subject.id).is_some() {
            return Err(
                CoreError::Validation(format!("subject id '{}' already exists", subject.id))
                    .into(),
            );
        }
        tracing::debug!(id = %subject.id, topics = subject.syllabus.len(), "adding subject");
        self.subjects.push(subject);
        self.persist()?;
        Ok(&self.subjects[self.subjects.len() - 1])
    }

    /// Append a paper and persist. The paper's subject must exist.
    ///
    /// # Errors
    ///
    /// [`CoreError::NotFound`] for an unknown subject;
    /// [`StoreError`] if the snapshot cannot be written.
    pub fn add_paper(&mut self, paper: ExamPaper) -> Result<&ExamPaper, StoreError> {
        self.require_subject(&paper.subject_id)?;
        tracing::debug!(id = %paper.id, subject = %paper.subject_id, "adding exam paper");
        self.papers.push(paper);
        if let Err(error) = self.persist() {
            self.papers.pop();
            return Err(error);
        }
        Ok(&self.papers[self.papers.len() - 1])
    }

    /// Delete a subject and every paper referencing it.
    ///
    /// Returns the number of papers removed with the subject.
    ///
    /// # Errors
    ///
    /// [`CoreError::NotFound`] for an unknown subject;
    /// [`StoreError`] if the snapshot cannot be written.
    pub fn remove_subject(&mut self, id: &str) -> Result<usize, StoreError> {
        let position = self
            .subjects
            .iter()
            .position(|subject| subject.id == id)
            .ok_or_else(|| not_found("subject", id))?;
        self.subjects.remove(position);

        let before = self.papers.len();
        self.papers.retain(|paper| paper.subject_id != id);
        let removed = before - self.papers.len();

        tracing::debug!(id, papers_removed = removed, "removed subject");
        self.persist()?;
        Ok(removed)
    }

    /// Delete one paper.
    ///
    /// # Errors
    ///
    /// [`CoreError::NotFound`] for an unknown paper;
    /// [`StoreError`] if the snapshot cannot be written.
    pub fn remove_paper(&mut self, id: &str) -> Result<ExamPaper, StoreError> {
        let position = self
            .papers
            .iter()
            .position(|paper| paper.id == id)
            .ok_or_else(|| not_found("exam paper", id))?;
        let paper = self.papers.remove(position);
        self.persist()?;
        Ok(paper)
    }

    /// Topic-wise analysis of `subject_id` over the current collections.
    #[must_use]
    pub fn analysis(&self, subject_id: &str) -> Vec<AnalysisResult> {
        compute_analysis(subject_id, &self.subjects, &self.papers)
    }

    #[must_use]
    pub fn dashboard(&self) -> DashboardStats {
        DashboardStats::collect(&self.subjects, &self.papers)
    }

    /// Score summaries of all papers, optionally restricted to one subject.
    #[must_use]
    pub fn paper_summaries(&self, subject_id: Option<&str>) -> Vec<PaperSummary> {
        self.papers
            .iter()
            .filter(|paper| subject_id.is_none_or(|id| paper.subject_id == id))
            .map(|paper| PaperSummary::from_paper(paper, &self.subjects))
            .collect()
    }

    // ── Draft staging ──────────────────────────────────────────────

    /// The pending draft, if one is stored and readable.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be read.
    pub fn draft(&self) -> Result<Option<DraftPaper>, StoreError> {
        let Some(raw) = self.kv.get(DRAFT_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(draft) => Ok(Some(draft)),
            Err(error) => {
                tracing::warn!(%error, "ignoring unreadable paper draft");
                Ok(None)
            }
        }
    }

    /// Store `draft`, replacing any previous one. Its subject must exist.
    ///
    /// # Errors
    ///
    /// [`CoreError::NotFound`] for an unknown subject;
    /// [`StoreError`] if the draft cannot be written.
    pub fn save_draft(&mut self, draft: &DraftPaper) -> Result<(), StoreError> {
        self.require_subject(&draft.subject_id)?;
        let raw = serde_json::to_string(draft)?;
        self.kv.put(DRAFT_KEY, &raw)
    }

    /// Drop the pending draft.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be written.
    pub fn clear_draft(&mut self) -> Result<(), StoreError> {
        self.kv.remove(DRAFT_KEY)
    }

    /// Finalize the pending draft into a saved paper dated `now`.
    ///
    /// The draft is cleared before the paper is written, so a draft can never
    /// be saved twice. If the paper cannot be written the draft is put back.
    ///
    /// # Errors
    ///
    /// [`CoreError::NotFound`] when there is no draft or its subject was
    /// deleted; [`CoreError::Validation`] for an empty draft;
    /// [`StoreError`] on write failure.
    pub fn finalize_draft(&mut self, now: DateTime<Utc>) -> Result<ExamPaper, StoreError> {
        let draft = self.draft()?.ok_or_else(|| not_found("draft", "pending"))?;
        self.require_subject(&draft.subject_id)?;
        let paper = draft.clone().finalize(now)?;

        self.clear_draft()?;
        let added = self.add_paper(paper.clone()).map(|_| ());
        if let Err(error) = added {
            if let Err(restore) = self.save_draft(&draft) {
                tracing::warn!(%restore, "failed to restore paper draft");
            }
            return Err(error);
        }
        Ok(paper)
    }

    /// Access the backing store.
    #[must_use]
    pub const fn kv(&self) -> &S {
        &self.kv
    }

    /// Write both collections as full snapshots.
    fn persist(&mut self) -> Result<(), StoreError> {
        let subjects = serde_json::to_string(&self.subjects)?;
        let papers = serde_json::to_string(&self.papers)?;
        self.kv.put(SUBJECTS_KEY, &subjects)?;
        self.kv.put(PAPERS_KEY, &papers)?;
        Ok(())
    }
}

fn read_collection<T, S>(kv: &S, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: KvStore,
{
    let raw = match kv.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(error) => {
            tracing::warn!(key, %error, "failed to read snapshot; starting empty");
            return Vec::new();
        }
    };
    serde_json::from_str(&raw).unwrap_or_else(|error| {
        tracing::warn!(key, %error, "invalid snapshot; starting empty");
        Vec::new()
    })
}

fn not_found(entity_type: &str, id: &str) -> StoreError {
    StoreError::Core(CoreError::NotFound {
        entity_type: entity_type.to_string(),
        id: id.to_string(),
    })
}
