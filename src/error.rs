//! Error taxonomy.
//!
//! Contract violations (caller bugs) surface as [`Error`]; data-dependent
//! "no result" cases are plain `Option::None` and are never routed through
//! this type.

use thiserror::Error;

use crate::modifiers::ModifierFlags;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The same modifier was passed both as implicit (baked into the
    /// translated character) and explicit (requested for display).
    #[error("implicit and explicit modifier flags overlap: {0:?}")]
    OverlappingModifierFlags(ModifierFlags),

    /// Shortcut dictionary without the required "keyCode" entry.
    #[error("shortcut dictionary has no \"keyCode\" entry")]
    MissingKeyCode,

    /// Shortcut dictionary entry present but of the wrong type.
    #[error("shortcut dictionary entry \"{0}\" has an unexpected type")]
    InvalidDictionaryEntry(&'static str),
}
