// TAGEX - tagex-format
// Module: Argument Sets
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Argument sets resolved against template placeholders.
//!
//! An argument set is either a sequence (placeholders `{0}`, `{1}`, ...) or a
//! single mapping (placeholders `{name}`). The shape is chosen by the caller;
//! templates are resolved against whatever shape was supplied.

use std::collections::{BTreeMap, HashMap};

use crate::{FormatError, Value};

/// Arguments for a message template.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Args {
    /// No arguments; templates are used verbatim by callers
    #[default]
    None,
    /// Sequence matched against `{N}` placeholders
    Positional(Vec<Value>),
    /// Mapping matched against `{key}` placeholders
    Named(BTreeMap<String, Value>),
}

impl Args {
    /// Build a positional argument set.
    pub fn positional<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::Positional(values.into_iter().map(Into::into).collect())
    }

    /// Build a named argument set.
    pub fn named<I, K, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<Value>,
    {
        Self::Named(entries.into_iter().map(|(key, value)| (key.into(), value.into())).collect())
    }

    /// Number of supplied arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Positional(values) => values.len(),
            Self::Named(entries) => entries.len(),
        }
    }

    /// Returns true when no arguments were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve the text between a pair of braces to an argument.
    pub(crate) fn lookup(&self, placeholder: &str) -> Result<&Value, FormatError> {
        match self {
            Self::None => Err(FormatError::NoArguments { placeholder: placeholder.to_owned() }),
            Self::Positional(values) => {
                let index = placeholder.parse::<usize>().map_err(|_| FormatError::NotAnIndex {
                    placeholder: placeholder.to_owned(),
                })?;
                values.get(index).ok_or(FormatError::MissingIndex { index, count: values.len() })
            },
            Self::Named(entries) => entries
                .get(placeholder)
                .ok_or_else(|| FormatError::MissingKey { key: placeholder.to_owned() }),
        }
    }
}

impl From<()> for Args {
    fn from((): ()) -> Self {
        Self::None
    }
}

impl From<Value> for Args {
    fn from(value: Value) -> Self {
        Self::Positional(vec![value])
    }
}

impl From<&str> for Args {
    fn from(value: &str) -> Self {
        Self::Positional(vec![Value::from(value)])
    }
}

impl From<String> for Args {
    fn from(value: String) -> Self {
        Self::Positional(vec![Value::from(value)])
    }
}

impl<T: Into<Value>> From<Vec<T>> for Args {
    fn from(values: Vec<T>) -> Self {
        Self::positional(values)
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Args {
    fn from(values: [T; N]) -> Self {
        Self::positional(values)
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Args {
    fn from(values: &[T]) -> Self {
        Self::positional(values.iter().cloned())
    }
}

impl<K: Into<String>, T: Into<Value>> From<BTreeMap<K, T>> for Args {
    fn from(entries: BTreeMap<K, T>) -> Self {
        Self::named(entries)
    }
}

impl<K: Into<String>, T: Into<Value>, S> From<HashMap<K, T, S>> for Args {
    fn from(entries: HashMap<K, T, S>) -> Self {
        Self::named(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes_from_conversions() {
        assert_eq!(Args::from(()), Args::None);
        assert_eq!(Args::from(["a", "b"]).len(), 2);
        assert_eq!(Args::from(vec![1, 2, 3]).len(), 3);
        assert_eq!(Args::from("solo"), Args::Positional(vec![Value::from("solo")]));

        let mut map = HashMap::new();
        map.insert("a", "foo");
        assert!(matches!(Args::from(map), Args::Named(ref entries) if entries.len() == 1));
    }

    #[test]
    fn positional_lookup() {
        let args = Args::positional(["x", "y"]);
        assert_eq!(args.lookup("1"), Ok(&Value::from("y")));
        assert_eq!(args.lookup("2"), Err(FormatError::MissingIndex { index: 2, count: 2 }));
        assert_eq!(
            args.lookup("name"),
            Err(FormatError::NotAnIndex { placeholder: "name".to_owned() })
        );
    }

    #[test]
    fn named_lookup() {
        let args = Args::named([("a", 1), ("b", 2)]);
        assert_eq!(args.lookup("b"), Ok(&Value::from(2)));
        assert_eq!(args.lookup("c"), Err(FormatError::MissingKey { key: "c".to_owned() }));
        assert!(Args::None.is_empty());
    }
}
