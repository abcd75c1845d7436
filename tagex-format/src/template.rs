// TAGEX - tagex-format
// Module: Template Resolution
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Placeholder scanning and substitution.

use crate::{Args, FormatError};

/// Resolve `template` against `args`.
///
/// `{N}` selects a positional argument, `{key}` a named one. `{{` and `}}`
/// produce literal braces. A template without placeholders is returned
/// unchanged whatever the arguments are.
///
/// # Errors
///
/// Returns a [`FormatError`] when a placeholder has no matching argument or
/// the braces in the template are unbalanced.
///
/// # Examples
///
/// ```
/// use tagex_format::{format, Args};
///
/// let positional = format("Your {0} doesn't work with my {1}", &Args::positional(["foo", "bar"]));
/// assert_eq!(positional.unwrap(), "Your foo doesn't work with my bar");
///
/// let named = format("Your {a} doesn't work with my {b}", &Args::named([("a", "foo"), ("b", "bar")]));
/// assert_eq!(named.unwrap(), "Your foo doesn't work with my bar");
/// ```
pub fn format(template: &str, args: &Args) -> Result<String, FormatError> {
    let mut output = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((position, ch)) = chars.next() {
        match ch {
            '{' => {
                if chars.next_if(|&(_, next)| next == '{').is_some() {
                    output.push('{');
                    continue;
                }

                let mut placeholder = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, '{')) | None => {
                            return Err(FormatError::UnclosedPlaceholder { position });
                        },
                        Some((_, inner)) => placeholder.push(inner),
                    }
                }

                if placeholder.is_empty() {
                    return Err(FormatError::EmptyPlaceholder { position });
                }
                output.push_str(&args.lookup(&placeholder)?.to_string());
            },
            '}' => {
                if chars.next_if(|&(_, next)| next == '}').is_none() {
                    return Err(FormatError::UnmatchedBrace { position });
                }
                output.push('}');
            },
            _ => output.push(ch),
        }
    }

    Ok(output)
}
