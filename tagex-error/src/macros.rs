// TAGEX - tagex-error
// Module: Exception Macros
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Macros for building exceptions inline.

/// Create an [`Exception`](crate::Exception) of the given kind.
///
/// `exception!(kind)` uses the default message; `exception!(kind, template,
/// args..)` resolves the template against the positional arguments. Evaluates
/// to a [`Result`](crate::Result).
///
/// # Examples
///
/// ```
/// use tagex_error::{exception, Kind};
///
/// let e = exception!("CustomError", "Your {0} doesn't work with my {1}", "foo", "bar")?;
/// assert_eq!(e.message(), "Your foo doesn't work with my bar");
///
/// let e = exception!(Kind::Io)?;
/// assert_eq!(e.message(), "Error of type IO");
/// # Ok::<(), tagex_error::ArgumentException>(())
/// ```
#[macro_export]
macro_rules! exception {
    ($kind:expr) => {
        $crate::Exception::new($kind, ::core::option::Option::None, $crate::Args::None)
    };
    ($kind:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::Exception::new(
            $kind,
            ::core::option::Option::Some($template),
            $crate::args![$($arg),*],
        )
    };
}
