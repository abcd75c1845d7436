// TAGEX - tagex
// Module: TAGEX
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! TAGEX: typed, named exceptions.
//!
//! Brings together the exception model of [`tagex_error`] and the message
//! templates of [`tagex_format`]. Most users only need the prelude:
//!
//! ```
//! use tagex::prelude::*;
//!
//! fn connect(port: u32) -> Result<(), Exception> {
//!     if port > 65535 {
//!         let e = factory::argument_out_of_range("port", Some(Value::from(1)), Some(Value::from(65535)))?;
//!         return Err(e.into());
//!     }
//!     Err(factory::timeout(Some("No answer on port {0}."), args![port])?)
//! }
//!
//! let refused = connect(70000).unwrap_err();
//! assert!(is_argument_out_of_range_exception(&refused));
//!
//! let late = connect(8080).unwrap_err();
//! assert!(is_timeout_exception(&late));
//! assert_eq!(late.to_string(), "No answer on port 8080.");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]

/// Commonly used types, traits and functions
pub mod prelude;

pub use tagex_error::{
    args, argument, conversion, convert, errors, exception, factory, identity, kinds,
    ArgumentException, ErrorLike, Exception, Kind, Result, TagSet, Taggable,
};
pub use tagex_format::{format, Args, FormatError, Value};
