use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatError {
    /// Attack invoked with no weapon installed.
    Unarmed,
}

impl fmt::Display for CombatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatError::Unarmed => write!(f, "attack with no weapon equipped"),
        }
    }
}

impl std::error::Error for CombatError {}
