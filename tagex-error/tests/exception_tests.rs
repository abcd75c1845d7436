// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![allow(clippy::unwrap_used)]
//! Behaviour of the built-in kinds and the exception constructors.

use std::collections::HashMap;

use tagex_error::{
    args, exception, factory, is_application_exception, is_argument_exception,
    is_argument_null_exception, is_argument_out_of_range_exception, is_exception_of_kind,
    is_invalid_operation_exception, is_io_exception, looks_like_error_of_kind, Args, Exception,
    Kind, Value,
};

#[test]
fn application_without_message() {
    let e = factory::application(None, ()).unwrap();
    assert_eq!(e.name(), "Application");
    assert_eq!(e.message(), "Error of type Application");
    assert!(is_application_exception(&e));
}

#[test]
fn invalid_operation_with_and_without_message() {
    let default = factory::invalid_operation(None, ()).unwrap();
    assert_eq!(default.name(), "InvalidOperation");
    assert!(is_invalid_operation_exception(&default));

    let explicit = factory::invalid_operation(Some("Test invalid op"), ()).unwrap();
    assert_eq!(explicit.message(), "Test invalid op");
    assert_eq!(explicit.to_string(), "Test invalid op");
}

#[test]
fn argument_messages_and_parameter() {
    let bare = factory::argument("param1", None, ()).unwrap();
    assert_eq!(bare.name(), "Argument");
    assert_eq!(bare.message(), "The argument \"param1\" is invalid.");
    assert_eq!(bare.parameter_name(), "param1");
    assert!(is_argument_exception(&bare));

    let detailed = factory::argument("param1", Some("The {0} is required."), args!["foo"]).unwrap();
    assert_eq!(detailed.message(), "The argument \"param1\" is invalid. The foo is required.");
    assert_eq!(detailed.parameter_name(), "param1");
}

#[test]
fn argument_null_short_circuit() {
    let e = factory::argument_null("param1").unwrap();
    assert_eq!(e.message(), "The argument \"param1\" cannot be null.");
    assert_eq!(e.parameter_name(), "param1");
    assert!(is_argument_null_exception(&e));
    assert!(!is_argument_exception(&e));
}

#[test]
fn range_boundary_messages() {
    let prefix = "The value of the argument \"param1\"";
    let cases = [
        (None, None, format!("{prefix} is outside of the allowable range.")),
        (Some(Value::from(1)), None, format!("{prefix} must be greater-than-or-equal to 1.")),
        (
            Some(Value::from(1)),
            Some(Value::from(10)),
            format!("{prefix} must be greater-than-or-equal to 1 and less-than-or-equal-to 10."),
        ),
        (Some(Value::from("a")), None, format!("{prefix} must be greater-than-or-equal to \"a\".")),
        (
            Some(Value::from(0.5)),
            Some(Value::from("z")),
            format!("{prefix} must be greater-than-or-equal to 0.5 and less-than-or-equal-to \"z\"."),
        ),
    ];

    for (min, max, expected) in cases {
        let e = factory::argument_out_of_range("param1", min, max).unwrap();
        assert_eq!(e.message(), expected);
        assert_eq!(e.parameter_name(), "param1");
        assert!(is_argument_out_of_range_exception(&e));
    }
}

#[test]
fn required_parameter_name_is_enforced() {
    let error = factory::argument_null("").unwrap_err();
    assert_eq!(error.kind(), &Kind::ArgumentNull);
    assert_eq!(error.parameter_name(), "parameterName");
    assert!(is_argument_null_exception(&error));

    assert!(factory::argument("", None, ()).is_err());
    assert!(factory::argument_out_of_range("", None, None).is_err());
}

#[test]
fn default_message_derivation() {
    assert_eq!(factory::custom("Foo", None, ()).unwrap().message(), "Error of type Foo");
    assert_eq!(exception!("Foo").unwrap().message(), "Error of type Foo");
}

#[test]
fn positional_array_and_named_formatting_agree() {
    let expected = "Your foo doesn't work with my bar";
    let template = Some("Your {0} doesn't work with my {1}");

    let variadic = factory::custom("CustomError", template, args!["foo", "bar"]).unwrap();
    let array = factory::custom("CustomError", template, ["foo", "bar"]).unwrap();
    let named = factory::custom(
        "CustomError",
        Some("Your {a} doesn't work with my {b}"),
        HashMap::from([("a", "foo"), ("b", "bar")]),
    )
    .unwrap();

    for e in [&variadic, &array, &named] {
        assert_eq!(e.name(), "CustomError");
        assert_eq!(e.message(), expected);
    }
    assert_eq!(variadic, array);
}

#[test]
fn custom_kinds_answer_only_for_themselves() {
    let e = factory::custom("FooBar", None, ()).unwrap();
    assert!(e.is_exception());
    assert!(is_exception_of_kind(&e, "FooBar").unwrap());
    assert!(!is_exception_of_kind(&e, "Application").unwrap());
    assert!(!is_application_exception(&e));
    assert!(!looks_like_error_of_kind(&e, "Application").unwrap());
    assert!(looks_like_error_of_kind(&e, "FooBar").unwrap());
}

#[test]
fn tag_isolation() {
    let application = factory::application(None, ()).unwrap();
    let io = factory::io(None, ()).unwrap();

    assert!(is_exception_of_kind(&application, "Application").unwrap());
    assert!(!is_exception_of_kind(&io, "Application").unwrap());
    assert!(!is_io_exception(&application));
    assert!(!is_application_exception(&io));
    assert!(is_io_exception(&io));
    assert!(!looks_like_error_of_kind(&application, "IOException").unwrap());
}

#[test]
fn display_is_the_message() {
    let e = factory::invalid_operation(Some("Message"), ()).unwrap();
    assert_eq!(e.to_string(), "Message");

    let boxed: Box<dyn std::error::Error> = Box::new(e);
    assert_eq!(boxed.to_string(), "Message");
}

#[test]
fn format_failures_are_argument_exceptions() {
    let error = Exception::new("Foo", Some("{missing}"), Args::named([("present", 1)])).unwrap_err();
    assert!(is_argument_exception(&error));
    assert_eq!(error.parameter_name(), "args");
}

#[test]
fn argument_exceptions_propagate_with_question_mark() {
    fn open(path: &str) -> tagex_error::Result<Exception> {
        if path.is_empty() {
            return Err(factory::argument_null("path")?);
        }
        factory::io(Some("Could not open {0}."), args![path])
    }

    assert_eq!(open("/etc/x").unwrap().message(), "Could not open /etc/x.");
    assert_eq!(open("").unwrap_err().message(), "The argument \"path\" cannot be null.");
}

#[test]
fn exceptions_cross_threads() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<Exception>();
    assert_send_sync::<tagex_error::ArgumentException>();

    let e = factory::timeout(None, ()).unwrap();
    let message = std::thread::spawn(move || e.message().to_owned()).join().unwrap();
    assert_eq!(message, "Operation timed-out before completing.");
}
