//! # acad-store
//!
//! Snapshot persistence for AcademiSync state.
//!
//! Subjects and exam papers live in a [`StudyStore`], which keeps both
//! collections in memory and rewrites them in full under fixed keys
//! (`acad_subjects`, `acad_papers`) after every mutation. The pending paper
//! draft is kept under `acad_draft`.
//!
//! Storage goes through the [`KvStore`] trait: [`FileKvStore`] writes one JSON
//! file per key inside the data directory, [`MemoryKvStore`] keeps everything
//! in process.

pub mod error;
pub mod file;
pub mod kv;
pub mod store;

pub use error::StoreError;
pub use file::FileKvStore;
pub use kv::{DRAFT_KEY, KvStore, MemoryKvStore, PAPERS_KEY, SUBJECTS_KEY};
pub use store::StudyStore;
