// TAGEX - tagex-error
// Module: Exception Kinds
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Exception kinds and the built-in catalog.
//!
//! A kind is the implied type name of an exception. The eight built-in kinds
//! carry canonical default messages; any other name is a [`Kind::Custom`].
//! The catalog is a set of constants and is never mutated.

use core::fmt;

/// Name of the `Application` kind
pub const APPLICATION: &str = "Application";
/// Name of the `Argument` kind
pub const ARGUMENT: &str = "Argument";
/// Name of the `ArgumentNull` kind
pub const ARGUMENT_NULL: &str = "ArgumentNull";
/// Name of the `ArgumentOutOfRange` kind
pub const ARGUMENT_OUT_OF_RANGE: &str = "ArgumentOutOfRange";
/// Name of the `InvalidOperation` kind
pub const INVALID_OPERATION: &str = "InvalidOperation";
/// Name of the `NotSupported` kind
pub const NOT_SUPPORTED: &str = "NotSupported";
/// Name of the `IO` kind
pub const IO: &str = "IO";
/// Name of the `Timeout` kind
pub const TIMEOUT: &str = "Timeout";

/// Kind name of a generic native error.
///
/// Values of this kind keep the `"<kind>: <message>"` rendering when they are
/// converted.
pub const NATIVE_ERROR: &str = "Error";

// Default message templates. `{0}` is the parameter name, `{1}`/`{2}` the
// rendered range bounds.

/// Default `Argument` message
pub const ARGUMENT_TEMPLATE: &str = "The argument \"{0}\" is invalid.";
/// Default `ArgumentNull` message
pub const ARGUMENT_NULL_TEMPLATE: &str = "The argument \"{0}\" cannot be null.";
/// `ArgumentOutOfRange` message without bounds
pub const OUT_OF_RANGE_TEMPLATE: &str =
    "The value of the argument \"{0}\" is outside of the allowable range.";
/// `ArgumentOutOfRange` message with a lower bound
pub const OUT_OF_RANGE_MIN_TEMPLATE: &str =
    "The value of the argument \"{0}\" must be greater-than-or-equal to {1}.";
/// `ArgumentOutOfRange` message with both bounds
pub const OUT_OF_RANGE_MIN_MAX_TEMPLATE: &str = "The value of the argument \"{0}\" must be \
                                                 greater-than-or-equal to {1} and \
                                                 less-than-or-equal-to {2}.";
/// Default `InvalidOperation` message
pub const INVALID_OPERATION_MESSAGE: &str =
    "Operation is not valid due to the current state of the object.";
/// Default `NotSupported` message
pub const NOT_SUPPORTED_MESSAGE: &str = "Operation is not supported.";
/// Default `IO` message
pub const IO_MESSAGE: &str = "An IO error occurred.";
/// Default `Timeout` message
pub const TIMEOUT_MESSAGE: &str = "Operation timed-out before completing.";

/// The implied type of an exception.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    /// General purpose application error
    Application,
    /// An invalid argument was passed to a function
    Argument,
    /// A missing argument was passed to a function
    ArgumentNull,
    /// An argument was outside the range the function accepts
    ArgumentOutOfRange,
    /// The operation is not valid in the object's current state
    InvalidOperation,
    /// The operation is not supported by the object
    NotSupported,
    /// An IO error occurred
    Io,
    /// The operation timed out before completing
    Timeout,
    /// Any other kind name
    Custom(String),
}

impl Kind {
    /// Map a kind name to a kind.
    ///
    /// Built-in names map to their variant; everything else, including the
    /// empty string, becomes [`Kind::Custom`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::builtin(name).unwrap_or_else(|| Self::Custom(name.to_owned()))
    }

    fn builtin(name: &str) -> Option<Self> {
        match name {
            APPLICATION => Some(Self::Application),
            ARGUMENT => Some(Self::Argument),
            ARGUMENT_NULL => Some(Self::ArgumentNull),
            ARGUMENT_OUT_OF_RANGE => Some(Self::ArgumentOutOfRange),
            INVALID_OPERATION => Some(Self::InvalidOperation),
            NOT_SUPPORTED => Some(Self::NotSupported),
            IO => Some(Self::Io),
            TIMEOUT => Some(Self::Timeout),
            _ => None,
        }
    }

    /// The kind name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Application => APPLICATION,
            Self::Argument => ARGUMENT,
            Self::ArgumentNull => ARGUMENT_NULL,
            Self::ArgumentOutOfRange => ARGUMENT_OUT_OF_RANGE,
            Self::InvalidOperation => INVALID_OPERATION,
            Self::NotSupported => NOT_SUPPORTED,
            Self::Io => IO,
            Self::Timeout => TIMEOUT,
            Self::Custom(name) => name,
        }
    }

    /// Returns true for `Argument`, `ArgumentNull` and `ArgumentOutOfRange`.
    #[must_use]
    pub const fn is_argument_family(&self) -> bool {
        matches!(self, Self::Argument | Self::ArgumentNull | Self::ArgumentOutOfRange)
    }

    /// The catalog's default message template, if the kind has one.
    ///
    /// `Application` and custom kinds have none; they fall back to
    /// [`Kind::fallback_message`].
    #[must_use]
    pub const fn default_template(&self) -> Option<&'static str> {
        match self {
            Self::Argument => Some(ARGUMENT_TEMPLATE),
            Self::ArgumentNull => Some(ARGUMENT_NULL_TEMPLATE),
            Self::ArgumentOutOfRange => Some(OUT_OF_RANGE_TEMPLATE),
            Self::InvalidOperation => Some(INVALID_OPERATION_MESSAGE),
            Self::NotSupported => Some(NOT_SUPPORTED_MESSAGE),
            Self::Io => Some(IO_MESSAGE),
            Self::Timeout => Some(TIMEOUT_MESSAGE),
            Self::Application | Self::Custom(_) => None,
        }
    }

    /// The message used when no template is supplied: `Error of type <kind>`.
    #[must_use]
    pub fn fallback_message(&self) -> String {
        format!("Error of type {}", self.name())
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for Kind {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for Kind {
    fn from(name: String) -> Self {
        Self::builtin(&name).unwrap_or(Self::Custom(name))
    }
}

impl From<&String> for Kind {
    fn from(name: &String) -> Self {
        Self::from_name(name)
    }
}

impl From<&Kind> for Kind {
    fn from(kind: &Kind) -> Self {
        kind.clone()
    }
}
