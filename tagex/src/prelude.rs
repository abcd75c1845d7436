// TAGEX - tagex
// Module: TAGEX Prelude
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for tagex
//!
//! Re-exports the exception types, the kind predicates and the factory so a
//! single glob import covers typical use.

pub use core::fmt::{Debug, Display};

pub use tagex_error::{
    args, convert, exception, factory, is_application_exception, is_argument_exception,
    is_argument_null_exception, is_argument_out_of_range_exception, is_exception_of_kind,
    is_exception_tagged, is_invalid_operation_exception, is_io_exception,
    is_not_supported_exception, is_timeout_exception, looks_like_error, looks_like_error_of_kind,
    ArgumentException, ErrorLike, Exception, Kind, Rendering, TagSet, Taggable,
};
pub use tagex_format::{format, Args, FormatError, Value};
