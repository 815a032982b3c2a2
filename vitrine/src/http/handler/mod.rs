pub mod analytics;
pub mod analyze_job;
pub mod chat;
pub mod contact;
