use thiserror::Error;

/// Convenient result alias for the skyroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an operation names a vertex that is not in the graph.
    #[error("vertex {vertex} does not exist")]
    VertexNotFound { vertex: String },

    /// Raised when an operation names an edge that is not in the graph.
    /// For undirected graphs a missing mirror counts as a missing edge.
    #[error("edge {origin} -> {destination} does not exist")]
    EdgeNotFound { origin: String, destination: String },

    /// Raised when a call violates a documented precondition, such as
    /// querying edge weights on an unweighted graph.
    #[error("invariant violation: {message}")]
    InvariantViolation { message: String },

    /// Raised when a route query names an airport code missing from the
    /// network.
    #[error("unknown airport code: {code}")]
    UnknownAirport { code: String },

    /// Raised when no route could be found between two airports.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a computed route plan lacks any steps.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Raised when an edges file row cannot be interpreted.
    #[error("malformed dataset row {row}: {message}")]
    Dataset { row: usize, message: String },

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}
