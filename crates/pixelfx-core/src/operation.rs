//! Transformation selectors and their typed parameters.
//!
//! [`Operation`] carries the parameters for each of the nine transformations;
//! [`OperationKind`] is the parameterless selector used by callers that pick
//! an operation by name or numeric code before collecting parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::clamp::{is_between, MAX_CHANNEL};
use crate::error::{ProcessError, Result};
use crate::gamma::GammaTables;

/// Largest brightness offset magnitude.
pub const MAX_BRIGHTNESS_DELTA: i32 = MAX_CHANNEL as i32;

/// Target colour and allowed distance for tolerance detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToleranceParams {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    /// Euclidean distance in RGB space; must be non-negative.
    pub tolerance: i32,
}

impl ToleranceParams {
    pub fn new(red: u8, green: u8, blue: u8, tolerance: i32) -> Self {
        Self {
            red,
            green,
            blue,
            tolerance,
        }
    }

    /// Squared tolerance, widened so large tolerances cannot overflow.
    #[inline]
    pub fn tolerance_squared(&self) -> i64 {
        let t = self.tolerance as i64;
        t * t
    }
}

/// A transformation together with its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Operation {
    /// Keep red, zero green and blue.
    RedChannelOnly,
    /// Keep green, zero red and blue.
    GreenChannelOnly,
    /// Keep blue, zero red and green.
    BlueChannelOnly,
    /// BT.709 luma in all three channels.
    Grayscale,
    /// `255 - c` per channel.
    Invert,
    /// Add an offset in `-255..=255` to every channel.
    Brightness(i32),
    /// Scale distance from mid-gray by a finite factor.
    Contrast(f64),
    /// Per-channel lookup tables.
    Gamma(GammaTables),
    /// Binary mask: white within tolerance of a target colour, black outside.
    ToleranceDetect(ToleranceParams),
}

impl Operation {
    /// Validating constructor for [`Operation::Brightness`].
    pub fn brightness(delta: i32) -> Result<Self> {
        let op = Operation::Brightness(delta);
        op.validate()?;
        Ok(op)
    }

    /// Validating constructor for [`Operation::Contrast`].
    pub fn contrast(factor: f64) -> Result<Self> {
        let op = Operation::Contrast(factor);
        op.validate()?;
        Ok(op)
    }

    /// Build [`Operation::Gamma`] from per-channel gamma values.
    pub fn gamma(red: f64, green: f64, blue: f64) -> Result<Self> {
        Ok(Operation::Gamma(GammaTables::from_gammas(red, green, blue)?))
    }

    /// Validating constructor for [`Operation::ToleranceDetect`].
    pub fn tolerance_detect(red: u8, green: u8, blue: u8, tolerance: i32) -> Result<Self> {
        let op = Operation::ToleranceDetect(ToleranceParams::new(red, green, blue, tolerance));
        op.validate()?;
        Ok(op)
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::RedChannelOnly => OperationKind::RedChannelOnly,
            Operation::GreenChannelOnly => OperationKind::GreenChannelOnly,
            Operation::BlueChannelOnly => OperationKind::BlueChannelOnly,
            Operation::Grayscale => OperationKind::Grayscale,
            Operation::Invert => OperationKind::Invert,
            Operation::Brightness(_) => OperationKind::Brightness,
            Operation::Contrast(_) => OperationKind::Contrast,
            Operation::Gamma(_) => OperationKind::Gamma,
            Operation::ToleranceDetect(_) => OperationKind::ToleranceDetect,
        }
    }

    /// Check the parameters without touching any pixels.
    pub fn validate(&self) -> Result<()> {
        match self {
            Operation::Brightness(delta) => {
                if !is_between(*delta, -MAX_BRIGHTNESS_DELTA, MAX_BRIGHTNESS_DELTA) {
                    return Err(ProcessError::invalid(
                        "brightness",
                        format!(
                            "must be within -{max}..={max}, got {}",
                            delta,
                            max = MAX_BRIGHTNESS_DELTA
                        ),
                    ));
                }
            }
            Operation::Contrast(factor) => {
                if !factor.is_finite() {
                    return Err(ProcessError::invalid(
                        "contrast",
                        format!("must be finite, got {}", factor),
                    ));
                }
            }
            Operation::ToleranceDetect(params) => {
                if params.tolerance < 0 {
                    return Err(ProcessError::invalid(
                        "tolerance",
                        format!("must be non-negative, got {}", params.tolerance),
                    ));
                }
            }
            Operation::RedChannelOnly
            | Operation::GreenChannelOnly
            | Operation::BlueChannelOnly
            | Operation::Grayscale
            | Operation::Invert
            | Operation::Gamma(_) => {}
        }
        Ok(())
    }
}

/// Parameterless selector for the nine transformations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum OperationKind {
    RedChannelOnly = 0,
    GreenChannelOnly = 1,
    BlueChannelOnly = 2,
    Grayscale = 3,
    Invert = 4,
    Brightness = 5,
    Contrast = 6,
    Gamma = 7,
    ToleranceDetect = 8,
}

impl OperationKind {
    pub const ALL: [OperationKind; 9] = [
        OperationKind::RedChannelOnly,
        OperationKind::GreenChannelOnly,
        OperationKind::BlueChannelOnly,
        OperationKind::Grayscale,
        OperationKind::Invert,
        OperationKind::Brightness,
        OperationKind::Contrast,
        OperationKind::Gamma,
        OperationKind::ToleranceDetect,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OperationKind::RedChannelOnly => "red_channel_only",
            OperationKind::GreenChannelOnly => "green_channel_only",
            OperationKind::BlueChannelOnly => "blue_channel_only",
            OperationKind::Grayscale => "grayscale",
            OperationKind::Invert => "invert",
            OperationKind::Brightness => "brightness",
            OperationKind::Contrast => "contrast",
            OperationKind::Gamma => "gamma",
            OperationKind::ToleranceDetect => "tolerance_detect",
        }
    }

    /// Whether the transformation needs caller-supplied parameters.
    pub fn takes_parameters(self) -> bool {
        matches!(
            self,
            OperationKind::Brightness
                | OperationKind::Contrast
                | OperationKind::Gamma
                | OperationKind::ToleranceDetect
        )
    }

    /// The parameterless [`Operation`] for this kind.
    ///
    /// Fails with [`ProcessError::UnsupportedOperation`] for kinds that need
    /// parameters.
    pub fn to_operation(self) -> Result<Operation> {
        match self {
            OperationKind::RedChannelOnly => Ok(Operation::RedChannelOnly),
            OperationKind::GreenChannelOnly => Ok(Operation::GreenChannelOnly),
            OperationKind::BlueChannelOnly => Ok(Operation::BlueChannelOnly),
            OperationKind::Grayscale => Ok(Operation::Grayscale),
            OperationKind::Invert => Ok(Operation::Invert),
            OperationKind::Brightness
            | OperationKind::Contrast
            | OperationKind::Gamma
            | OperationKind::ToleranceDetect => Err(ProcessError::UnsupportedOperation(format!(
                "`{}` requires parameters",
                self.name()
            ))),
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for OperationKind {
    type Error = ProcessError;

    fn try_from(code: u8) -> Result<Self> {
        OperationKind::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| ProcessError::UnsupportedOperation(format!("code {}", code)))
    }
}

impl FromStr for OperationKind {
    type Err = ProcessError;

    fn from_str(s: &str) -> Result<Self> {
        OperationKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ProcessError::UnsupportedOperation(s.to_string()))
    }
}
