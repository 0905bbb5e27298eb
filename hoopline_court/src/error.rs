// Copyright 2026 the Hoopline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Errors reported by Hoopline operations.
///
/// Every error is raised synchronously at the point where invalid input is
/// seen. Operations are pure, so retrying with the same input fails the same
/// way.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// The league name is not one of `nba`, `wnba`, `ncaa`, `fiba`.
    #[error("unknown court type `{0}`; expected one of nba, wnba, ncaa, fiba")]
    UnknownCourtType(String),
    /// The unit name is not one of `ft` or `m`.
    #[error("unknown units `{0}`; expected `ft` or `m`")]
    UnknownUnits(String),
    /// The orientation tag is not one of the six court framings.
    #[error("invalid orientation `{0}`; expected one of h, v, hl, hr, vu, vd")]
    InvalidOrientation(String),
    /// The origin tag is not one of the five origin conventions.
    #[error(
        "invalid origin `{0}`; expected one of center, top-left, bottom-left, top-right, bottom-right"
    )]
    InvalidOrigin(String),
    /// A court dimension was zero, negative or not finite.
    #[error("invalid court dimension `{name}` = {value}; dimensions must be positive")]
    InvalidDimension {
        /// Name of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// Parallel sequences that must have equal length do not.
    #[error("shape mismatch: `{left}` has {left_len} elements but `{right}` has {right_len}")]
    ShapeMismatch {
        /// Name of the first sequence.
        left: &'static str,
        /// Length of the first sequence.
        left_len: usize,
        /// Name of the second sequence.
        right: &'static str,
        /// Length of the second sequence.
        right_len: usize,
    },
    /// The requested line style is not supported.
    #[error("unsupported line style `{0}`; expected one of solid, comet, fade, comet-fade")]
    UnsupportedLineStyle(String),
    /// A style parameter is out of its valid range.
    #[error("invalid style value `{name}` = {value}")]
    InvalidStyleValue {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// No color ramp is registered under the given name.
    #[error("unknown color ramp `{0}`")]
    UnknownColorRamp(String),
    /// A grid was requested with zero bins along an axis.
    #[error("invalid bin count {nx}x{ny}; both axes need at least one bin")]
    InvalidBinCount {
        /// Bins along x.
        nx: usize,
        /// Bins along y.
        ny: usize,
    },
}

impl Error {
    /// Builds a [`Error::ShapeMismatch`] if `left_len != right_len`.
    pub fn check_same_len(
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    ) -> Result<(), Self> {
        if left_len == right_len {
            Ok(())
        } else {
            Err(Self::ShapeMismatch {
                left,
                left_len,
                right,
                right_len,
            })
        }
    }
}
