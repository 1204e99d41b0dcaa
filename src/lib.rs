//! Concurso Advisor: scores how attractive a civil-service job posting is
//! for a specific candidate and serves the result over a CLI and a small
//! HTTP API.

pub mod cli;
pub mod config;
pub mod error;
pub mod scenarios;
pub mod scoring;
pub mod server;
pub mod telemetry;
