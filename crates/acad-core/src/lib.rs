//! # acad-core
//!
//! Core types, ID generation, and error types for AcademiSync.
//!
//! This crate provides the foundational types shared across all AcademiSync crates:
//! - Entity structs for subjects, syllabi, exam papers, and questions
//! - Status tiers and recommendation priorities
//! - The topic-wise performance aggregator and its focus summary
//! - Draft paper staging (mark entry before a paper is persisted)
//! - Dashboard and paper summary response types
//! - ID prefix constants and generation helpers
//! - Cross-cutting error types

pub mod analysis;
pub mod draft;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
