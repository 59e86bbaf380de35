//! CLI-facing workflow, decoupled from argument parsing

pub mod orchestration;

pub use orchestration::{
    collect_releases, run_generate_workflow, Collected, GenerateWorkflowArgs, WorkflowResult,
};
