pub mod assignment;
pub mod errors;
pub mod exercise;
pub mod person;
pub mod plan;
pub mod program;
pub mod variant;
