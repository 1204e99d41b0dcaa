//! Advantage-index scoring for civil-service job postings.
//!
//! The engine is a pure function over a validated [`domain::AnswerSet`]:
//! three scoring blocks (posting-objective, candidate-profile and
//! personal-context) sum into a 0-100 composite index that drives the
//! classification band, structural alerts, categorized observations and the
//! strategic narrative.

pub mod domain;
mod engine;
mod insights;
pub mod session;
mod tables;
pub mod views;

pub use engine::compute;
pub use tables::preparation_time_points;
