pub mod presenter;
pub mod report;
