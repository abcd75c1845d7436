// TAGEX - tagex-error
// Module: TAGEX Exceptions
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Typed, named exceptions for TAGEX.
//!
//! An exception is an error value with a *kind* (its implied type name), a
//! message resolved from a template, and a set of kind tags that make it
//! testable without a type hierarchy.
//!
//! # Built-in kinds
//!
//! - `Application`: general purpose application error
//! - `Argument`, `ArgumentNull`, `ArgumentOutOfRange`: bad function arguments,
//!   carrying the offending parameter name
//! - `InvalidOperation`, `NotSupported`: operations that cannot run
//! - `IO`, `Timeout`: failures of the environment
//!
//! Any other name is a custom kind.
//!
//! # Identity
//!
//! Kind tests are structural. A value is an error when it exposes a name, a
//! message and a trace through [`ErrorLike`]; it is an exception of kind `K`
//! when it carries the tag for `K`. Errors from elsewhere are retrofitted in
//! place with [`convert`].
//!
//! # Usage
//!
//! ```
//! use tagex_error::{
//!     args, convert, factory, is_exception_of_kind, is_io_exception, Exception,
//! };
//!
//! let e = factory::invalid_operation(Some("Cannot {0} a closed stream."), args!["read"])?;
//! assert_eq!(e.to_string(), "Cannot read a closed stream.");
//! assert!(is_exception_of_kind(&e, "InvalidOperation")?);
//!
//! let io = std::io::Error::other("disk on fire");
//! let mut adopted = Exception::from_error(&io);
//! convert(&mut adopted)?;
//! assert!(is_exception_of_kind(&adopted, "Error")?);
//! assert!(!is_io_exception(&adopted));
//! # Ok::<(), tagex_error::ArgumentException>(())
//! ```
//!
//! Misuse of the API (an empty kind or parameter name, arguments that do not
//! fit a template, converting something that is not an error) is reported as
//! an [`ArgumentException`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// The argument exception family
pub mod argument;
/// In-place conversion
pub mod conversion;
/// The exception value
pub mod errors;
/// Built-in kind factory
pub mod factory;
/// Structural identity and kind predicates
pub mod identity;
/// Exception kinds and catalog messages
pub mod kinds;

#[macro_use]
mod macros;
mod trace;

pub use argument::ArgumentException;
pub use conversion::{convert, Taggable};
pub use errors::Exception;
pub use identity::{
    is_application_exception, is_argument_exception, is_argument_null_exception,
    is_argument_out_of_range_exception, is_exception_of_kind, is_exception_tagged,
    is_invalid_operation_exception, is_io_exception, is_not_supported_exception,
    is_timeout_exception, looks_like_error, looks_like_error_of_kind, ErrorLike, Rendering,
    TagSet,
};
pub use kinds::Kind;
pub use tagex_format::{args, Args, FormatError, Value};

/// Result of a fallible TAGEX operation.
///
/// Failures are themselves exceptions of the argument family.
pub type Result<T> = core::result::Result<T, ArgumentException>;
