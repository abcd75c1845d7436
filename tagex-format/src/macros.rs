// TAGEX - tagex-format
// Module: Argument Macros
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Macros for building argument sets inline.

/// Build an [`Args`](crate::Args) set.
///
/// - `args![]` is the empty set
/// - `args!["foo", 2, true]` is a positional set
/// - `args!{"a" => "foo", "b" => 2}` is a named set
///
/// # Examples
///
/// ```
/// use tagex_format::{args, format};
///
/// assert_eq!(format("{0}-{1}", &args!["a", 1]).unwrap(), "a-1");
/// assert_eq!(format("{x}", &args! {"x" => 2.5}).unwrap(), "2.5");
/// assert!(args![].is_empty());
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::None
    };
    ($($key:tt => $value:expr),+ $(,)?) => {{
        let mut entries = ::std::collections::BTreeMap::new();
        $(
            entries.insert(::std::string::String::from($key), $crate::Value::from($value));
        )+
        $crate::Args::Named(entries)
    }};
    ($($value:expr),+ $(,)?) => {
        $crate::Args::Positional(::std::vec![$($crate::Value::from($value)),+])
    };
}
