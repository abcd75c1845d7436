// TAGEX - tagex-error
// Module: Argument Exceptions
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The argument family: `Argument`, `ArgumentNull` and `ArgumentOutOfRange`.
//!
//! These are the exceptions raised for bad function arguments, and the error
//! type of every fallible operation in this crate.

use core::{fmt, ops::Deref};

use tagex_format::{Args, FormatError, Value};

use crate::{
    conversion::Taggable,
    errors::Exception,
    identity::{ErrorLike, TagSet},
    kinds::{
        Kind, ARGUMENT_NULL_TEMPLATE, ARGUMENT_TEMPLATE, OUT_OF_RANGE_MIN_MAX_TEMPLATE,
        OUT_OF_RANGE_MIN_TEMPLATE, OUT_OF_RANGE_TEMPLATE,
    },
    trace::trace_event,
    Result,
};

/// Parameter name reported when a parameter name is missing
const PARAMETER_NAME_PARAMETER: &str = "parameterName";
/// Parameter name reported when a non-argument kind is requested
const KIND_PARAMETER: &str = "kind";
/// Parameter name reported when arguments do not fit a template
const ARGS_PARAMETER: &str = "args";

/// An exception about a specific function parameter.
///
/// Always of an argument-family kind and always carrying a non-empty
/// parameter name. Dereferences to [`Exception`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentException(Exception);

impl ArgumentException {
    /// An `Argument` exception: `The argument "<param>" is invalid.`, followed
    /// by `message` formatted with `args` when one is given.
    ///
    /// # Errors
    ///
    /// `ArgumentNull` on `parameterName` if `parameter_name` is empty, or
    /// `Argument` on `args` if the arguments do not fit `message`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagex_error::{args, ArgumentException};
    ///
    /// let e = ArgumentException::new("port", Some("Expected {0}."), args!["a number"])?;
    /// assert_eq!(e.message(), "The argument \"port\" is invalid. Expected a number.");
    /// assert_eq!(e.parameter_name(), "port");
    /// # Ok::<(), ArgumentException>(())
    /// ```
    pub fn new(parameter_name: &str, message: Option<&str>, args: impl Into<Args>) -> Result<Self> {
        Self::build(Kind::Argument, ARGUMENT_TEMPLATE, parameter_name, message.unwrap_or_default(), args)
    }

    /// An `ArgumentNull` exception: `The argument "<param>" cannot be null.`
    ///
    /// # Errors
    ///
    /// `ArgumentNull` on `parameterName` if `parameter_name` is empty.
    pub fn null(parameter_name: &str) -> Result<Self> {
        Self::build(Kind::ArgumentNull, ARGUMENT_NULL_TEMPLATE, parameter_name, "", Args::None)
    }

    /// An `ArgumentOutOfRange` exception describing the allowed bounds.
    ///
    /// Without `min` the range is not described and `max` is ignored. Numeric
    /// bounds are rendered bare, anything else in double quotes.
    ///
    /// # Errors
    ///
    /// `ArgumentNull` on `parameterName` if `parameter_name` is empty.
    pub fn out_of_range(parameter_name: &str, min: Option<Value>, max: Option<Value>) -> Result<Self> {
        let (template, mut defaults) = match (min, max) {
            (None, _) => (OUT_OF_RANGE_TEMPLATE, Vec::new()),
            (Some(min), None) => (OUT_OF_RANGE_MIN_TEMPLATE, vec![render_bound(min)]),
            (Some(min), Some(max)) => {
                (OUT_OF_RANGE_MIN_MAX_TEMPLATE, vec![render_bound(min), render_bound(max)])
            },
        };
        defaults.insert(0, Value::from(parameter_name));
        Self::compose(Kind::ArgumentOutOfRange, template, defaults, parameter_name, "", Args::None)
    }

    /// Build an argument-family exception from its parts.
    ///
    /// `default_message` is resolved with the parameter name as `{0}`. A
    /// non-empty `extra` is resolved against `args` (verbatim when `args` is
    /// empty) and appended after a single space.
    ///
    /// # Errors
    ///
    /// - `Argument` on `kind` if `kind` is not an argument-family kind
    /// - `ArgumentNull` on `parameterName` if `parameter_name` is empty
    /// - `Argument` on `args` if the arguments do not fit `extra`
    pub fn build(
        kind: impl Into<Kind>,
        default_message: &str,
        parameter_name: &str,
        extra: &str,
        args: impl Into<Args>,
    ) -> Result<Self> {
        let defaults = vec![Value::from(parameter_name)];
        Self::compose(kind.into(), default_message, defaults, parameter_name, extra, args.into())
    }

    fn compose(
        kind: Kind,
        default_message: &str,
        defaults: Vec<Value>,
        parameter_name: &str,
        extra: &str,
        args: impl Into<Args>,
    ) -> Result<Self> {
        if !kind.is_argument_family() {
            return Err(Self::invalid(KIND_PARAMETER, ""));
        }
        if parameter_name.is_empty() {
            return Err(Self::missing(PARAMETER_NAME_PARAMETER));
        }

        let mut message = tagex_format::format(default_message, &Args::Positional(defaults))?;
        if !extra.is_empty() {
            let args = args.into();
            message.push(' ');
            if args.is_empty() {
                message.push_str(extra);
            } else {
                message.push_str(&tagex_format::format(extra, &args)?);
            }
        }

        trace_event!(debug, kind = %kind, parameter = parameter_name, "argument exception built");
        Ok(Self(Exception::assemble(kind, message, Some(parameter_name.to_owned()))))
    }

    /// `ArgumentNull` on one of this crate's own parameters.
    ///
    /// Built without validation so that reporting a missing parameter name
    /// cannot itself fail.
    pub(crate) fn missing(parameter_name: &'static str) -> Self {
        let message = ARGUMENT_NULL_TEMPLATE.replacen("{0}", parameter_name, 1);
        Self(Exception::assemble(Kind::ArgumentNull, message, Some(parameter_name.to_owned())))
    }

    /// `Argument` on one of this crate's own parameters, with optional detail.
    pub(crate) fn invalid(parameter_name: &'static str, detail: &str) -> Self {
        let mut message = ARGUMENT_TEMPLATE.replacen("{0}", parameter_name, 1);
        if !detail.is_empty() {
            message.push(' ');
            message.push_str(detail);
        }
        Self(Exception::assemble(Kind::Argument, message, Some(parameter_name.to_owned())))
    }

    /// The offending parameter
    pub fn parameter_name(&self) -> &str {
        self.0.parameter_name().unwrap_or_default()
    }

    /// Unwrap into the underlying exception.
    pub fn into_exception(self) -> Exception {
        self.0
    }
}

fn render_bound(bound: Value) -> Value {
    if bound.is_numeric() { bound } else { Value::Text(format!("\"{bound}\"")) }
}

impl Deref for ArgumentException {
    type Target = Exception;

    fn deref(&self) -> &Exception {
        &self.0
    }
}

impl AsRef<Exception> for ArgumentException {
    fn as_ref(&self) -> &Exception {
        &self.0
    }
}

impl fmt::Display for ArgumentException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ArgumentException {}

impl ErrorLike for ArgumentException {
    fn error_name(&self) -> Option<&str> {
        self.0.error_name()
    }

    fn error_message(&self) -> Option<&str> {
        self.0.error_message()
    }

    fn error_trace(&self) -> Option<&str> {
        self.0.error_trace()
    }

    fn error_tags(&self) -> Option<&TagSet> {
        self.0.error_tags()
    }
}

impl Taggable for ArgumentException {
    fn tag_slot(&mut self) -> &mut Option<TagSet> {
        self.0.tag_slot()
    }
}

impl From<ArgumentException> for Exception {
    fn from(error: ArgumentException) -> Self {
        error.0
    }
}

impl TryFrom<Exception> for ArgumentException {
    type Error = Exception;

    /// Succeeds for argument-family exceptions that name their parameter.
    fn try_from(exception: Exception) -> core::result::Result<Self, Exception> {
        let named = exception.parameter_name().is_some_and(|name| !name.is_empty());
        if exception.kind().is_argument_family() && named {
            Ok(Self(exception))
        } else {
            Err(exception)
        }
    }
}

impl From<FormatError> for ArgumentException {
    fn from(error: FormatError) -> Self {
        Self::invalid(ARGS_PARAMETER, &error.to_string())
    }
}
