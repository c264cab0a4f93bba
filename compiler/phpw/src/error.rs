//! Emission errors.

use phpw_io::SinkError;

/// Error produced by a [`PhpWriter`](crate::PhpWriter) operation.
///
/// Argument errors are raised before anything is written. Sink failures
/// are forwarded as they happen; fragments already accepted by the sink
/// are not rolled back.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// A trait was declared with a parent class or interfaces.
    #[error("trait {name} cannot extend or implement")]
    TraitSupertypes { name: String },

    /// `use` was emitted with an empty trait list.
    #[error("trait use needs at least one trait")]
    NoTraits,

    /// An `end_*` call had no matching `begin_*`.
    #[error("{op} called with no open block")]
    Unbalanced { op: &'static str },

    /// A whole-line construct was started in the middle of a line.
    #[error("{op} must start a new line")]
    NotAtLineStart { op: &'static str },

    /// Generation finished with blocks still open.
    #[error("{depth} block(s) still open")]
    UnclosedBlocks { depth: usize },

    #[error(transparent)]
    Sink(#[from] SinkError),
}

impl EmitError {
    /// Whether the caller passed arguments that could never be emitted.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            EmitError::TraitSupertypes { .. } | EmitError::NoTraits => true,
            EmitError::Sink(err) => err.is_invalid_argument(),
            EmitError::Unbalanced { .. }
            | EmitError::NotAtLineStart { .. }
            | EmitError::UnclosedBlocks { .. } => false,
        }
    }

    /// Whether the call sequence itself was malformed.
    pub fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            EmitError::Unbalanced { .. }
                | EmitError::NotAtLineStart { .. }
                | EmitError::UnclosedBlocks { .. }
        )
    }
}
