pub mod analyze;
pub mod backend;
pub mod examples;
pub mod generate;
