use crate::Side;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TreeError {
    #[error("Parent '{parent}' not found in the tree.")]
    ParentNotFound { parent: String },

    #[error("Side must be 'left' or 'right', got '{side}'.")]
    InvalidSide { side: String },

    #[error("{} child already exists for '{}'.", .side.title(), .parent)]
    SideOccupied { parent: String, side: Side },
}
