pub mod health;
pub mod insights;
pub mod mood_logs;
pub mod selection;
