mod patient;
mod reporting_tree;
mod triage_queue;

pub mod errors;
pub mod traversal;
pub(crate) mod utils;

pub use patient::Patient;
pub use reporting_tree::{DoctorNode, ReportingTree, Side};
pub use triage_queue::TriageQueue;
