use std::fmt;

use super::model::BarKind;

/// Rejected bar mutation. Never fatal: the bar system logs it and carries on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BarError {
    /// Negative or non-finite amount passed to `deplete` / `regenerate`.
    InvalidAmount { amount: f32 },
    /// Depletion requested on a bar that is already at zero.
    Empty { kind: BarKind },
}

impl fmt::Display for BarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BarError::InvalidAmount { amount } => write!(f, "invalid bar amount: {amount}"),
            BarError::Empty { kind } => write!(f, "{kind:?} bar is already empty"),
        }
    }
}

impl std::error::Error for BarError {}
