// TAGEX - tagex-error
// Module: Tracing Support
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Structured tracing for construction and conversion.
//!
//! Wraps the `tracing` event macros so call sites stay the same whether or
//! not the `tracing` feature is enabled. With the feature off the events and
//! their field expressions compile away.

/// Emit a `tracing` event at the given level when the feature is enabled.
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        ::tracing::$level!($($arg)+);
    }};
}

pub(crate) use trace_event;
