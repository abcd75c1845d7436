// TAGEX - tagex-format
// Module: Template Errors
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Errors raised while resolving a message template.

use thiserror::Error;

/// A template could not be resolved against the supplied arguments.
///
/// Byte positions refer to the template string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A positional placeholder refers past the end of the argument list
    #[error("placeholder {{{index}}} has no matching argument ({count} supplied)")]
    MissingIndex {
        /// Index named by the placeholder
        index: usize,
        /// Number of positional arguments supplied
        count: usize,
    },

    /// A named placeholder has no entry in the argument map
    #[error("placeholder {{{key}}} has no matching named argument")]
    MissingKey {
        /// Key named by the placeholder
        key: String,
    },

    /// A non-numeric placeholder was used with positional arguments
    #[error("placeholder {{{placeholder}}} is not a positional index")]
    NotAnIndex {
        /// The placeholder text
        placeholder: String,
    },

    /// Placeholders were used but no arguments were supplied
    #[error("placeholder {{{placeholder}}} used without arguments")]
    NoArguments {
        /// The placeholder text
        placeholder: String,
    },

    /// `{}` with nothing inside
    #[error("empty placeholder at byte {position}")]
    EmptyPlaceholder {
        /// Position of the opening brace
        position: usize,
    },

    /// `{` never closed before the end of the template or the next `{`
    #[error("unclosed placeholder starting at byte {position}")]
    UnclosedPlaceholder {
        /// Position of the opening brace
        position: usize,
    },

    /// A lone `}` outside a placeholder
    #[error("unmatched '}}' at byte {position}")]
    UnmatchedBrace {
        /// Position of the stray brace
        position: usize,
    },
}
