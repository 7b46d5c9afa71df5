//! Errors raised at the edges of the core: loading records and configuring a window.

/// Errors from record sources and from invalid configuration values.
///
/// Aggregation itself never fails; these only come from the collaborator seam.
#[derive(Clone, Debug, PartialEq)]
pub enum StatsError {
    /// Reading the record source failed.
    Io(String),
    /// A CSV data row (1-based, header excluded) could not be turned into a record.
    Csv { row: usize, message: String },
    /// Row size must be a finite, positive number.
    InvalidItemSize(f64),
    /// Sort key was not `games` or `win_rate`.
    UnknownSortKey(String),
    /// Mode was not Ranked, Rating, or DC.
    UnknownMode(String),
}

impl std::fmt::Display for StatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsError::Io(msg) => write!(f, "Could not read records: {}", msg),
            StatsError::Csv { row, message } => write!(f, "Invalid record at row {}: {}", row, message),
            StatsError::InvalidItemSize(size) => write!(f, "Row size must be positive (got {})", size),
            StatsError::UnknownSortKey(key) => write!(f, "Unknown sort key '{}' (use games or win_rate)", key),
            StatsError::UnknownMode(mode) => write!(f, "Unknown mode '{}' (use Ranked, Rating or DC)", mode),
        }
    }
}

impl std::error::Error for StatsError {}

impl From<std::io::Error> for StatsError {
    fn from(e: std::io::Error) -> Self {
        StatsError::Io(e.to_string())
    }
}
