use thiserror::Error;

/// Convenient result alias for the MapAnalyzer library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the input does not start with a `start\tend` header line.
    #[error("road map is missing the start/end header line")]
    MissingEndpoints,

    /// Raised when a line of the road map cannot be parsed.
    #[error("malformed road map at line {line}: {message}")]
    MalformedInput { line: u64, message: String },

    /// Raised when two roads share the same identifier.
    #[error("duplicate road id {id} at line {line}")]
    DuplicateRoadId { id: u64, line: u64 },

    /// Raised when a point name is not an endpoint of any road.
    #[error("unknown point name: {name}{}", format_suggestions(.suggestions))]
    UnknownPoint {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when the road map contains no roads at all.
    #[error("road map contains no roads")]
    EmptyRoadMap,

    /// Raised when the barely connected map cannot reach the end point.
    #[error("no route found between {start} and {end} on the barely connected map")]
    RouteNotFound { start: String, end: String },

    /// Raised when a ratio would divide by a zero total.
    #[error("{ratio} ratio is undefined because its reference total is zero")]
    UndefinedRatio { ratio: &'static str },

    /// Raised when summed road distances do not fit in a `u64`.
    #[error("total road distance exceeds {}", u64::MAX)]
    DistanceOverflow,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for tab-separated reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for JSON serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    match suggestions {
        [] => String::new(),
        [only] => format!(". Did you mean '{}'?", only),
        many => format!(
            ". Did you mean one of: {}?",
            many.iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}
