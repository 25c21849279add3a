pub mod handlers;
pub mod narrative;
pub mod prompts;
pub mod scoring;
pub mod trait_table;
