// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![allow(clippy::unwrap_used)]
//! Conversion of native and foreign errors.

use proptest::prelude::*;
use tagex_error::{
    convert, factory, is_exception_of_kind, is_exception_tagged, is_timeout_exception,
    looks_like_error, looks_like_error_of_kind, ErrorLike, Exception, TagSet, Taggable,
};

#[test]
fn plain_error_is_an_error_but_not_an_exception() {
    let io = std::io::Error::other("");
    let e = Exception::from_error(&io);

    assert!(looks_like_error(&e));
    assert!(!is_exception_tagged(&e));
    assert!(looks_like_error_of_kind(&e, "Error").unwrap());
    assert!(!is_exception_of_kind(&e, "Error").unwrap());
}

#[test]
fn native_error_adoption() {
    let parse = "ten".parse::<u8>().unwrap_err();
    let mut e = Exception::from_error(&parse);
    assert!(!is_exception_tagged(&e));

    convert(&mut e).unwrap();
    assert!(looks_like_error(&e));
    assert!(is_exception_tagged(&e));
    assert!(is_exception_of_kind(&e, "ParseIntError").unwrap());
    assert!(looks_like_error_of_kind(&e, "ParseIntError").unwrap());
    assert_eq!(e.to_string(), parse.to_string());
}

#[test]
fn converted_generic_error_renders_qualified() {
    let mut empty = Exception::native("Error", "").unwrap();
    convert(&mut empty).unwrap();
    assert_eq!(empty.to_string(), "Error");

    let mut with_message = Exception::from_error(&std::io::Error::other("Message"));
    convert(&mut with_message).unwrap();
    assert_eq!(with_message.to_string(), "Error: Message");
}

#[test]
fn converting_a_built_exception_is_a_no_op() {
    let mut e = factory::timeout(None, ()).unwrap();
    let before = e.clone();
    convert(&mut e).unwrap();
    assert_eq!(e, before);
    assert!(is_timeout_exception(&e));
}

#[test]
fn argument_exceptions_convert_in_place() {
    let mut e = factory::argument_null("param1").unwrap();
    let before = e.clone();
    let same = convert(&mut e).unwrap();
    assert_eq!(*same, before);
}

/// A library error that predates the exception model.
#[derive(Debug)]
struct LegacyError {
    code: u16,
    trace: Option<String>,
    tags: Option<TagSet>,
}

impl ErrorLike for LegacyError {
    fn error_name(&self) -> Option<&str> {
        Some("LegacyError")
    }

    fn error_message(&self) -> Option<&str> {
        Some(if self.code == 0 { "ok" } else { "failed" })
    }

    fn error_trace(&self) -> Option<&str> {
        self.trace.as_deref()
    }

    fn error_tags(&self) -> Option<&TagSet> {
        self.tags.as_ref()
    }
}

impl Taggable for LegacyError {
    fn tag_slot(&mut self) -> &mut Option<TagSet> {
        &mut self.tags
    }
}

#[test]
fn foreign_errors_need_a_trace_to_convert() {
    let mut traceless = LegacyError { code: 7, trace: None, tags: None };
    let error = convert(&mut traceless).unwrap_err();
    assert_eq!(error.parameter_name(), "value");
    assert!(traceless.tags.is_none());

    let mut traced = LegacyError { code: 7, trace: Some("legacy::run".to_owned()), tags: None };
    convert(&mut traced).unwrap();
    assert!(is_exception_of_kind(&traced, "LegacyError").unwrap());
    assert!(!is_exception_of_kind(&traced, "Error").unwrap());
}

proptest! {
    #[test]
    fn conversion_is_idempotent(name in "[A-Za-z][A-Za-z0-9]{0,15}", message in ".{0,40}") {
        let mut e = Exception::native(&name, message).unwrap();
        convert(&mut e).unwrap();
        let once = e.clone();
        convert(&mut e).unwrap();

        prop_assert_eq!(&e, &once);
        prop_assert_eq!(e.tagged_kinds().count(), 1);
        prop_assert!(is_exception_of_kind(&e, &name).unwrap());
    }

    #[test]
    fn tagged_values_answer_for_their_own_kind(name in "[A-Za-z][A-Za-z0-9]{0,15}") {
        let e = factory::custom(&name, None, ()).unwrap();
        prop_assert!(is_exception_tagged(&e));
        prop_assert!(is_exception_of_kind(&e, e.name()).unwrap());
    }
}
