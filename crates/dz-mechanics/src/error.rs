//! Error types for the mechanics engine.

/// Errors that can occur during mechanics operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MechError {
    /// A combatant profile is malformed or out of range.
    #[error("invalid combatant: {0}")]
    InvalidCombatant(String),

    /// Combat options are out of range.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// A probability map was normalized by zero or a non-finite value.
    #[error("cannot normalize by {0}")]
    InvalidDivisor(f64),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            MechError::InvalidCombatant("dice stat 9 outside 1..=8".to_string()).to_string(),
            "invalid combatant: dice stat 9 outside 1..=8"
        );
        assert_eq!(
            MechError::InvalidOptions("rounds must be at least 1".to_string()).to_string(),
            "invalid options: rounds must be at least 1"
        );
        assert_eq!(
            MechError::InvalidDivisor(0.0).to_string(),
            "cannot normalize by 0"
        );
    }
}
