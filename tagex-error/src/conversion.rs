// TAGEX - tagex-error
// Module: Exception Conversion
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! In-place conversion of error-like values into tagged exceptions.

use crate::{
    argument::ArgumentException,
    identity::{looks_like_error, ErrorLike, Rendering, TagSet},
    trace::trace_event,
    Result,
};

/// Parameter name reported when a value cannot be converted
const VALUE_PARAMETER: &str = "value";

/// An error-like value whose tag set can be attached in place.
pub trait Taggable: ErrorLike {
    /// The slot holding the value's tags
    fn tag_slot(&mut self) -> &mut Option<TagSet>;
}

impl<T: Taggable + ?Sized> Taggable for Box<T> {
    fn tag_slot(&mut self) -> &mut Option<TagSet> {
        (**self).tag_slot()
    }
}

/// Retrofit `value` with kind tags and hand the same value back.
///
/// An untagged value gets a tag set first. Values named `Error` keep the
/// `"<kind>: <message>"` rendering; every other kind renders as its message.
/// The tag for the value's own kind is then ensured. Converting twice changes
/// nothing.
///
/// # Errors
///
/// `Argument` on parameter `value` if `value` does not look like an error.
///
/// # Examples
///
/// ```
/// use tagex_error::{convert, is_exception_tagged, Exception};
///
/// let io = std::io::Error::other("disk on fire");
/// let mut e = Exception::from_error(&io);
/// assert!(!is_exception_tagged(&e));
///
/// convert(&mut e)?;
/// assert!(is_exception_tagged(&e));
/// assert_eq!(e.to_string(), "Error: disk on fire");
/// # Ok::<(), tagex_error::ArgumentException>(())
/// ```
pub fn convert<V: Taggable + ?Sized>(value: &mut V) -> Result<&mut V> {
    if !looks_like_error(&*value) {
        trace_event!(debug, "conversion rejected a value that does not look like an error");
        return Err(ArgumentException::invalid(VALUE_PARAMETER, ""));
    }
    tag_in_place(value);
    Ok(value)
}

pub(crate) fn tag_in_place<V: Taggable + ?Sized>(value: &mut V) {
    let Some(kind_name) = value.error_name().map(str::to_owned) else {
        return;
    };
    let tags = value.tag_slot().get_or_insert_with(|| TagSet::new(Rendering::for_kind(&kind_name)));
    if tags.insert(&kind_name) {
        trace_event!(debug, kind = %kind_name, tags = tags.len(), "value tagged");
    } else {
        trace_event!(trace, kind = %kind_name, "value already tagged");
    }
}
