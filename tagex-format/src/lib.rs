// TAGEX - tagex-format
// Module: TAGEX Template Formatting
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Message template formatting for TAGEX.
//!
//! Exception messages are written as templates and resolved against either a
//! sequence of arguments (`{0}`, `{1}`, ...) or a single mapping (`{name}`).
//! This crate is the pure `format(template, args)` function the exception
//! constructors consume.
//!
//! ```
//! use tagex_format::{args, format};
//!
//! let message = format("Your {0} doesn't work with my {1}", &args!["foo", "bar"]).unwrap();
//! assert_eq!(message, "Your foo doesn't work with my bar");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Argument sets
pub mod args;
/// Template errors
pub mod error;
/// Placeholder resolution
pub mod template;
/// Argument values
pub mod value;

#[macro_use]
mod macros;

pub use args::Args;
pub use error::FormatError;
pub use template::format;
pub use value::Value;
