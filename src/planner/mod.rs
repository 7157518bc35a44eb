pub mod history;
pub mod list;
pub mod task;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlannerError {
    #[error("task {0} not found")]
    TaskNotFound(String),
    #[error("tag \"{0}\" not found")]
    TagNotFound(String),
}
