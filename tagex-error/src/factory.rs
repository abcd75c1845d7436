// TAGEX - tagex-error
// Module: Exception Factory
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Factory functions for the built-in exception kinds.
//!
//! Each function passes straight through to a constructor, the built-in ones
//! with their catalog default message; none adds validation of its own.

use tagex_format::{Args, Value};

use crate::{argument::ArgumentException, errors::Exception, kinds::Kind, Result};

/// Build an exception of `kind`, falling back to the catalog default message.
fn with_default(kind: Kind, message: Option<&str>, args: impl Into<Args>) -> Result<Exception> {
    let template = message.or(kind.default_template());
    Exception::new(kind, template, args)
}

/// Create a general purpose application exception
pub fn application(message: Option<&str>, args: impl Into<Args>) -> Result<Exception> {
    with_default(Kind::Application, message, args)
}

/// Create an `Argument` exception for `parameter_name`
pub fn argument(
    parameter_name: &str,
    message: Option<&str>,
    args: impl Into<Args>,
) -> Result<ArgumentException> {
    ArgumentException::new(parameter_name, message, args)
}

/// Create an `ArgumentNull` exception for `parameter_name`
pub fn argument_null(parameter_name: &str) -> Result<ArgumentException> {
    ArgumentException::null(parameter_name)
}

/// Create an `ArgumentOutOfRange` exception for `parameter_name`
pub fn argument_out_of_range(
    parameter_name: &str,
    min: Option<Value>,
    max: Option<Value>,
) -> Result<ArgumentException> {
    ArgumentException::out_of_range(parameter_name, min, max)
}

/// Create an `InvalidOperation` exception
pub fn invalid_operation(message: Option<&str>, args: impl Into<Args>) -> Result<Exception> {
    with_default(Kind::InvalidOperation, message, args)
}

/// Create a `NotSupported` exception
pub fn not_supported(message: Option<&str>, args: impl Into<Args>) -> Result<Exception> {
    with_default(Kind::NotSupported, message, args)
}

/// Create an `IO` exception
pub fn io(message: Option<&str>, args: impl Into<Args>) -> Result<Exception> {
    with_default(Kind::Io, message, args)
}

/// Create a `Timeout` exception
pub fn timeout(message: Option<&str>, args: impl Into<Args>) -> Result<Exception> {
    with_default(Kind::Timeout, message, args)
}

/// Create an exception of any kind name.
///
/// Without a message it is `Error of type <kind_name>`, also for names that
/// match a built-in kind.
pub fn custom(kind_name: &str, message: Option<&str>, args: impl Into<Args>) -> Result<Exception> {
    Exception::new(kind_name, message, args)
}
