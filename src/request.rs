//! The crop/resize request for one batch run.
//!
//! Users supply dimensions as free text (form fields, CLI arguments). A
//! [`RequestForm`] holds that raw input; [`BatchRequest::parse`] validates it
//! once, up front, into an immutable value the orchestrator consumes. Any
//! parse failure rejects the whole call before a single file is touched.

use crate::imaging::Dimensions;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RequestError {
    #[error("{field} must be an integer, got {value:?}")]
    NotAnInteger { field: &'static str, value: String },
    #[error("{field} must be greater than 0, got {value}")]
    NonPositive { field: &'static str, value: i64 },
    #[error("{field} must be at most {max}, got {value}", max = MAX_DIMENSION)]
    TooLarge { field: &'static str, value: i64 },
}

/// Largest accepted width or height: the signed 32-bit integer range.
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

/// Raw, unvalidated user input for a batch run.
///
/// Dimension fields of a disabled feature are never looked at.
#[derive(Debug, Clone, Default)]
pub struct RequestForm {
    pub enable_crop: bool,
    pub crop_width: String,
    pub crop_height: String,
    pub enable_resize: bool,
    pub resize_width: String,
    pub resize_height: String,
    pub prefix: String,
}

/// Validated crop/resize request.
///
/// `crop` is applied before `resize`. Both hold positive dimensions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchRequest {
    pub crop: Option<Dimensions>,
    pub resize: Option<Dimensions>,
    pub prefix: String,
}

impl BatchRequest {
    /// Validate a [`RequestForm`].
    pub fn parse(form: &RequestForm) -> Result<Self, RequestError> {
        let crop = if form.enable_crop {
            Some(Dimensions::new(
                parse_dimension("crop width", &form.crop_width)?,
                parse_dimension("crop height", &form.crop_height)?,
            ))
        } else {
            None
        };

        let resize = if form.enable_resize {
            Some(Dimensions::new(
                parse_dimension("resize width", &form.resize_width)?,
                parse_dimension("resize height", &form.resize_height)?,
            ))
        } else {
            None
        };

        Ok(Self {
            crop,
            resize,
            prefix: form.prefix.trim().to_string(),
        })
    }
}

/// Parse one dimension field: a positive integer, surrounding whitespace allowed.
fn parse_dimension(field: &'static str, text: &str) -> Result<u32, RequestError> {
    let value: i64 = text
        .trim()
        .parse()
        .map_err(|_| RequestError::NotAnInteger {
            field,
            value: text.to_string(),
        })?;

    if value <= 0 {
        return Err(RequestError::NonPositive { field, value });
    }
    u32::try_from(value)
        .ok()
        .filter(|v| *v <= MAX_DIMENSION)
        .ok_or(RequestError::TooLarge { field, value })
}
