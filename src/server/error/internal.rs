use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Assignment row has no provider ID for its kind.
    ///
    /// Every assignment must carry `chef_id` for chef assignments and `farmer_id` for
    /// farmer assignments. Results in a 500 Internal Server Error with a generic
    /// message returned to client.
    #[error("Assignment {assignment_id} has no provider ID for its kind")]
    AssignmentProviderMissing {
        /// The malformed assignment
        assignment_id: i32,
    },

    /// Record disappeared between writing it and reading it back.
    #[error("{entity} {id} missing after write")]
    MissingAfterWrite {
        /// Entity name
        entity: &'static str,
        /// Record ID
        id: i32,
    },
}
