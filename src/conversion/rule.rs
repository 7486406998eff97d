use serde::{Deserialize, Serialize};

use super::UnitError;

/// How a unit maps onto its category's base unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ConversionRule {
    /// `base = value * factor`
    Linear { factor: f64 },
    /// `base = value * scale + offset`
    Affine { scale: f64, offset: f64 },
}

impl ConversionRule {
    /// The rule of a base unit
    pub const IDENTITY: ConversionRule = ConversionRule::Linear { factor: 1.0 };

    pub const fn linear(factor: f64) -> Self {
        ConversionRule::Linear { factor }
    }

    pub const fn affine(scale: f64, offset: f64) -> Self {
        ConversionRule::Affine { scale, offset }
    }

    /// Map a value in this unit onto the base unit
    #[inline]
    pub fn to_base(&self, value: f64) -> f64 {
        match *self {
            ConversionRule::Linear { factor } => value * factor,
            ConversionRule::Affine { scale, offset } => value * scale + offset,
        }
    }

    /// Map a base-unit value back into this unit
    #[inline]
    pub fn from_base(&self, base: f64) -> f64 {
        match *self {
            ConversionRule::Linear { factor } => base / factor,
            ConversionRule::Affine { scale, offset } => (base - offset) / scale,
        }
    }

    pub fn is_affine(&self) -> bool {
        matches!(self, ConversionRule::Affine { .. })
    }

    /// True if this rule leaves base values unchanged
    pub fn is_identity(&self) -> bool {
        match *self {
            ConversionRule::Linear { factor } => factor == 1.0,
            ConversionRule::Affine { scale, offset } => scale == 1.0 && offset == 0.0,
        }
    }

    /// Reject rules that cannot be inverted or produce non-finite results
    pub fn validate(&self, unit: &str) -> Result<(), UnitError> {
        let reason = match *self {
            ConversionRule::Linear { factor } if !factor.is_finite() || factor == 0.0 => {
                Some(format!("factor must be finite and non-zero, got {factor}"))
            }
            ConversionRule::Affine { scale, .. } if !scale.is_finite() || scale == 0.0 => {
                Some(format!("scale must be finite and non-zero, got {scale}"))
            }
            ConversionRule::Affine { offset, .. } if !offset.is_finite() => {
                Some(format!("offset must be finite, got {offset}"))
            }
            _ => None,
        };

        match reason {
            Some(reason) => Err(UnitError::InvalidRule {
                unit: unit.to_string(),
                reason,
            }),
            None => Ok(()),
        }
    }
}
