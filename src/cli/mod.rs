//! Command-line workflow, independent of argument parsing

pub mod orchestration;

pub use orchestration::{run_workflow, WorkflowArgs, WorkflowResult};
