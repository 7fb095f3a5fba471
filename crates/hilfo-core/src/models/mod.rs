pub mod bank;
pub mod item;
pub mod language;
pub mod report;
pub mod response;
pub mod score;
pub mod subscale;
