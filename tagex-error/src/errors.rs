// TAGEX - tagex-error
// Module: Exception Base Type
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The exception value and its constructors.

use core::fmt;

use tagex_format::Args;

use crate::{
    argument::ArgumentException,
    conversion::{tag_in_place, Taggable},
    identity::{ErrorLike, Rendering, TagSet},
    kinds::Kind,
    trace::trace_event,
    Result,
};

/// Parameter name reported when an exception kind is missing
const KIND_PARAMETER: &str = "kind";
/// Parameter name reported when a native error name is missing
const NAME_PARAMETER: &str = "name";

/// A typed, named error.
///
/// Every exception carries a [`Kind`], a fully resolved message and a
/// diagnostic trace line. Exceptions built by this crate are tagged with
/// their own kind, so the predicates in [`identity`](crate::identity) answer
/// for them. Plain errors adopted through [`Exception::from_error`] or
/// [`Exception::native`] start untagged and gain their tags through
/// [`convert`](crate::convert).
///
/// Kind and message never change after construction; only the tag set can be
/// extended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exception {
    kind: Kind,
    message: String,
    trace: String,
    parameter_name: Option<String>,
    tags: Option<TagSet>,
}

impl Exception {
    /// Create an exception of `kind`.
    ///
    /// Without a template (or with an empty one) the message is
    /// `Error of type <kind>`. A template is resolved against `args`; when no
    /// arguments are supplied it is taken verbatim.
    ///
    /// # Errors
    ///
    /// - `ArgumentNull` on parameter `kind` if the kind name is empty
    /// - `Argument` on parameter `args` if the arguments do not fit the
    ///   template
    ///
    /// # Examples
    ///
    /// ```
    /// use tagex_error::{args, Exception};
    ///
    /// let e = Exception::new("CustomError", Some("Your {0} doesn't work with my {1}"), args!["foo", "bar"])?;
    /// assert_eq!(e.message(), "Your foo doesn't work with my bar");
    /// assert_eq!(Exception::new("Foo", None, ())?.message(), "Error of type Foo");
    /// # Ok::<(), tagex_error::ArgumentException>(())
    /// ```
    pub fn new(kind: impl Into<Kind>, template: Option<&str>, args: impl Into<Args>) -> Result<Self> {
        let kind = kind.into();
        if kind.name().is_empty() {
            return Err(ArgumentException::missing(KIND_PARAMETER));
        }
        let message = match template {
            Some(template) if !template.is_empty() => resolve(template, &args.into())?,
            _ => kind.fallback_message(),
        };
        trace_event!(debug, kind = %kind, "exception built");
        Ok(Self::assemble(kind, message, None))
    }

    /// Build and tag an exception from parts that are already validated.
    pub(crate) fn assemble(kind: Kind, message: String, parameter_name: Option<String>) -> Self {
        let trace = format!("{kind}: {message}");
        let mut exception = Self {
            kind,
            message,
            trace,
            parameter_name,
            tags: Some(TagSet::new(Rendering::Message)),
        };
        tag_in_place(&mut exception);
        exception
    }

    /// Create an untagged plain error with the given name and message.
    ///
    /// # Errors
    ///
    /// `ArgumentNull` on parameter `name` if `name` is empty.
    pub fn native(name: &str, message: impl Into<String>) -> Result<Self> {
        if name.is_empty() {
            return Err(ArgumentException::missing(NAME_PARAMETER));
        }
        let message = message.into();
        let trace = if message.is_empty() { name.to_owned() } else { format!("{name}: {message}") };
        Ok(Self { kind: Kind::from_name(name), message, trace, parameter_name: None, tags: None })
    }

    /// Adopt a standard library error as an untagged plain error.
    ///
    /// The name is the short type name of `E` (`std::io::Error` becomes
    /// `Error`), the message its `Display` output and the trace its `Debug`
    /// output.
    pub fn from_error<E: std::error::Error + ?Sized>(error: &E) -> Self {
        Self {
            kind: Kind::from_name(short_type_name::<E>()),
            message: error.to_string(),
            trace: format!("{error:?}"),
            parameter_name: None,
            tags: None,
        }
    }

    /// Tag this value with its own kind and return it.
    ///
    /// The owned counterpart of [`convert`](crate::convert); an exception
    /// always looks like an error, so this cannot fail.
    #[must_use]
    pub fn into_tagged(mut self) -> Self {
        tag_in_place(&mut self);
        self
    }

    /// The kind
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// The kind name
    pub fn name(&self) -> &str {
        self.kind.name()
    }

    /// The resolved message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The diagnostic trace line
    pub fn trace(&self) -> &str {
        &self.trace
    }

    /// The offending parameter, for the argument family
    pub fn parameter_name(&self) -> Option<&str> {
        self.parameter_name.as_deref()
    }

    /// Returns true once the value has been tagged.
    pub fn is_exception(&self) -> bool {
        self.tags.is_some()
    }

    /// Returns true if the value carries the tag for `kind_name`.
    pub fn has_tag(&self, kind_name: &str) -> bool {
        self.tags.as_ref().is_some_and(|tags| tags.contains(kind_name))
    }

    /// Kind names this value has been tagged with.
    pub fn tagged_kinds(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().flat_map(TagSet::iter)
    }

    /// The attached tag set, if any
    pub fn tags(&self) -> Option<&TagSet> {
        self.tags.as_ref()
    }
}

fn resolve(template: &str, args: &Args) -> Result<String> {
    if args.is_empty() {
        return Ok(template.to_owned());
    }
    Ok(tagex_format::format(template, args)?)
}

/// Last path segment of a type name, generics stripped.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = core::any::type_name::<T>();
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::").next().unwrap_or(path)
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tags.as_ref().map(TagSet::rendering) {
            Some(Rendering::Message) => f.write_str(&self.message),
            Some(Rendering::Qualified) | None if self.message.is_empty() => f.write_str(self.name()),
            Some(Rendering::Qualified) | None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for Exception {}

impl ErrorLike for Exception {
    fn error_name(&self) -> Option<&str> {
        Some(self.name())
    }

    fn error_message(&self) -> Option<&str> {
        Some(&self.message)
    }

    fn error_trace(&self) -> Option<&str> {
        Some(&self.trace)
    }

    fn error_tags(&self) -> Option<&TagSet> {
        self.tags.as_ref()
    }
}

impl Taggable for Exception {
    fn tag_slot(&mut self) -> &mut Option<TagSet> {
        &mut self.tags
    }
}
