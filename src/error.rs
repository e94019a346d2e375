use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for configuration and construction.
///
/// The per-particle hot paths (trial moves, wall offsets, force evaluation) never
/// return errors; their preconditions are checked with debug assertions. Everything
/// that builds the inputs for those paths validates here instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid user or API parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Degenerate geometry (e.g., zero-length plane normal or cylinder axis).
    #[error("numerical error: {0}")]
    MathError(String),

    /// A fixed-capacity wall list is full.
    #[error("too many {kind} walls: capacity is {capacity}")]
    CapacityExceeded {
        /// Wall kind ("sphere", "cylinder" or "plane").
        kind: &'static str,
        /// Maximum number of walls of this kind.
        capacity: usize,
    },

    /// Malformed configuration document.
    #[error(transparent)]
    Config(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_informative() {
        let e = Error::InvalidParam("max_angle must be > 0".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid parameter"));
        assert!(msg.contains("max_angle"));
    }

    #[test]
    fn capacity_error_names_kind() {
        let e = Error::CapacityExceeded {
            kind: "plane",
            capacity: 40,
        };
        let msg = e.to_string();
        assert!(msg.contains("plane"));
        assert!(msg.contains("40"));
    }

    #[test]
    fn config_error_converts() {
        let parse: std::result::Result<u32, _> = serde_json::from_str("not json");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn result_type_alias_compiles() -> Result<()> {
        Ok(())
    }
}
