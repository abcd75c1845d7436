// TAGEX - tagex-error
// Module: Error Identity Model
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Structural error identity.
//!
//! Whether a value is an error, and of which kind, is decided from the
//! accessors it exposes through [`ErrorLike`] and from the tags attached to
//! it, never from its concrete type. This lets errors that were built outside
//! this crate be tested the same way once they have been converted.

use std::collections::BTreeSet;

use crate::{
    argument::ArgumentException,
    kinds::{
        APPLICATION, ARGUMENT, ARGUMENT_NULL, ARGUMENT_OUT_OF_RANGE, INVALID_OPERATION, IO,
        NATIVE_ERROR, NOT_SUPPORTED, TIMEOUT,
    },
    Result,
};

/// Parameter name reported when a kind-name argument is missing
const KIND_NAME_PARAMETER: &str = "kindName";

/// How a tagged value renders through `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rendering {
    /// The message, verbatim
    Message,
    /// `"<kind>: <message>"`, or `<kind>` alone when the message is empty
    Qualified,
}

impl Rendering {
    /// Rendering attached when a value of the given kind is first tagged.
    #[must_use]
    pub fn for_kind(kind_name: &str) -> Self {
        if kind_name == NATIVE_ERROR {
            Self::Qualified
        } else {
            Self::Message
        }
    }
}

/// The tags attached to a converted value.
///
/// Holds every kind name the value has been tagged with, and the rendering
/// chosen when the first tag was attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSet {
    kinds: BTreeSet<String>,
    rendering: Rendering,
}

impl TagSet {
    /// An empty tag set with the given rendering.
    #[must_use]
    pub const fn new(rendering: Rendering) -> Self {
        Self { kinds: BTreeSet::new(), rendering }
    }

    /// Attach the tag for `kind_name`. Returns false if it was already present.
    pub fn insert(&mut self, kind_name: &str) -> bool {
        if self.kinds.contains(kind_name) {
            return false;
        }
        self.kinds.insert(kind_name.to_owned())
    }

    /// Returns true if the tag for `kind_name` is attached.
    #[must_use]
    pub fn contains(&self, kind_name: &str) -> bool {
        self.kinds.contains(kind_name)
    }

    /// Tagged kind names, in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.kinds.iter().map(String::as_str)
    }

    /// Number of attached kind tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Returns true if no kind tag is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// The rendering attached with the first tag.
    #[must_use]
    pub const fn rendering(&self) -> Rendering {
        self.rendering
    }
}

/// The structural surface of an error.
///
/// A value looks like an error when it exposes a name, a message and a
/// diagnostic trace. Implement this for foreign error types to make them
/// testable; implement [`Taggable`](crate::Taggable) as well to make them
/// convertible.
pub trait ErrorLike {
    /// The kind name, if the value has one
    fn error_name(&self) -> Option<&str>;

    /// The message, if the value has one
    fn error_message(&self) -> Option<&str>;

    /// The diagnostic trace, if the value has one
    fn error_trace(&self) -> Option<&str>;

    /// The attached tags; `None` until the value has been converted
    fn error_tags(&self) -> Option<&TagSet> {
        None
    }
}

impl<T: ErrorLike + ?Sized> ErrorLike for &T {
    fn error_name(&self) -> Option<&str> {
        (**self).error_name()
    }

    fn error_message(&self) -> Option<&str> {
        (**self).error_message()
    }

    fn error_trace(&self) -> Option<&str> {
        (**self).error_trace()
    }

    fn error_tags(&self) -> Option<&TagSet> {
        (**self).error_tags()
    }
}

impl<T: ErrorLike + ?Sized> ErrorLike for Box<T> {
    fn error_name(&self) -> Option<&str> {
        (**self).error_name()
    }

    fn error_message(&self) -> Option<&str> {
        (**self).error_message()
    }

    fn error_trace(&self) -> Option<&str> {
        (**self).error_trace()
    }

    fn error_tags(&self) -> Option<&TagSet> {
        (**self).error_tags()
    }
}

/// Returns true if `value` exposes a name, a message and a trace.
pub fn looks_like_error<V: ErrorLike + ?Sized>(value: &V) -> bool {
    value.error_name().is_some() && value.error_message().is_some() && value.error_trace().is_some()
}

/// Returns true if `value` looks like an error and its name is `kind_name`.
///
/// # Errors
///
/// An `ArgumentNull` exception if `kind_name` is empty.
pub fn looks_like_error_of_kind<V: ErrorLike + ?Sized>(value: &V, kind_name: &str) -> Result<bool> {
    require_kind_name(kind_name)?;
    Ok(looks_like_error(value) && value.error_name() == Some(kind_name))
}

/// Returns true if `value` looks like an error and has been tagged.
pub fn is_exception_tagged<V: ErrorLike + ?Sized>(value: &V) -> bool {
    looks_like_error(value) && value.error_tags().is_some()
}

/// Returns true if `value` is tagged and carries the tag for `kind_name`.
///
/// # Errors
///
/// An `ArgumentNull` exception if `kind_name` is empty.
pub fn is_exception_of_kind<V: ErrorLike + ?Sized>(value: &V, kind_name: &str) -> Result<bool> {
    require_kind_name(kind_name)?;
    Ok(has_kind_tag(value, kind_name))
}

fn has_kind_tag<V: ErrorLike + ?Sized>(value: &V, kind_name: &str) -> bool {
    is_exception_tagged(value) && value.error_tags().is_some_and(|tags| tags.contains(kind_name))
}

fn require_kind_name(kind_name: &str) -> Result<()> {
    if kind_name.is_empty() {
        return Err(ArgumentException::missing(KIND_NAME_PARAMETER));
    }
    Ok(())
}

/// Returns true if `value` is tagged as an `Application` exception.
pub fn is_application_exception<V: ErrorLike + ?Sized>(value: &V) -> bool {
    has_kind_tag(value, APPLICATION)
}

/// Returns true if `value` is tagged as an `Argument` exception.
pub fn is_argument_exception<V: ErrorLike + ?Sized>(value: &V) -> bool {
    has_kind_tag(value, ARGUMENT)
}

/// Returns true if `value` is tagged as an `ArgumentNull` exception.
pub fn is_argument_null_exception<V: ErrorLike + ?Sized>(value: &V) -> bool {
    has_kind_tag(value, ARGUMENT_NULL)
}

/// Returns true if `value` is tagged as an `ArgumentOutOfRange` exception.
pub fn is_argument_out_of_range_exception<V: ErrorLike + ?Sized>(value: &V) -> bool {
    has_kind_tag(value, ARGUMENT_OUT_OF_RANGE)
}

/// Returns true if `value` is tagged as an `InvalidOperation` exception.
pub fn is_invalid_operation_exception<V: ErrorLike + ?Sized>(value: &V) -> bool {
    has_kind_tag(value, INVALID_OPERATION)
}

/// Returns true if `value` is tagged as a `NotSupported` exception.
pub fn is_not_supported_exception<V: ErrorLike + ?Sized>(value: &V) -> bool {
    has_kind_tag(value, NOT_SUPPORTED)
}

/// Returns true if `value` is tagged as an `IO` exception.
pub fn is_io_exception<V: ErrorLike + ?Sized>(value: &V) -> bool {
    has_kind_tag(value, IO)
}

/// Returns true if `value` is tagged as a `Timeout` exception.
pub fn is_timeout_exception<V: ErrorLike + ?Sized>(value: &V) -> bool {
    has_kind_tag(value, TIMEOUT)
}
