pub mod answers;
pub mod config;
pub mod dimension;
pub mod engine;
pub mod error;
pub mod export;
pub mod insight;
pub mod questionnaire;
pub mod report;
pub mod reporter;
pub mod scoring;
pub mod store;
pub mod telemetry;
