pub mod domain;
pub mod errors;
pub mod orchestrator;
pub mod pipeline;
pub mod traits;
