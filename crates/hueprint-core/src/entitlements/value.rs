//! Typed feature values.
//!
//! Stored plans encode a feature as a boolean (access flag) or an integer
//! (quota, `-1` = unlimited). The sentinel is decoded into
//! [`Quota::Unlimited`] at the serde boundary and never reaches arithmetic.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use crate::constants::UNLIMITED_SENTINEL;

/// A numeric allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quota {
    Limited(u32),
    Unlimited,
}

impl Quota {
    pub const NONE: Quota = Quota::Limited(0);

    pub fn is_unlimited(&self) -> bool {
        matches!(self, Self::Unlimited)
    }

    /// `f64::INFINITY` for unlimited, the count otherwise.
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Limited(n) => f64::from(*n),
            Self::Unlimited => f64::INFINITY,
        }
    }

    /// Remaining allowance after `used`. Unlimited stays unlimited; a finite
    /// quota bottoms out at zero.
    pub fn remaining(&self, used: u32) -> Quota {
        match self {
            Self::Limited(n) => Self::Limited(n.saturating_sub(used)),
            Self::Unlimited => Self::Unlimited,
        }
    }

    /// Whether `amount` more units fit in this allowance.
    pub fn allows(&self, amount: u32) -> bool {
        match self {
            Self::Limited(n) => amount <= *n,
            Self::Unlimited => true,
        }
    }

    /// Decode a stored integer. `-1` is unlimited; any other negative value
    /// is invalid and resolves to zero.
    pub fn from_raw(raw: i64) -> Self {
        if raw == UNLIMITED_SENTINEL {
            return Self::Unlimited;
        }
        if raw < 0 {
            warn!(raw, "negative quota in stored plan, treating as 0");
            return Self::NONE;
        }
        Self::Limited(u32::try_from(raw).unwrap_or(u32::MAX))
    }

    /// Decode a stored float. Editors that only have a number type write
    /// `5.0` for 5; integral values decode like integers, anything else
    /// resolves to zero.
    pub fn from_raw_f64(raw: f64) -> Self {
        if raw.is_finite() && raw.fract() == 0.0 {
            return Self::from_raw(raw as i64);
        }
        warn!(raw, "non-integral quota in stored plan, treating as 0");
        Self::NONE
    }

    /// Encode for storage.
    pub fn to_raw(&self) -> i64 {
        match self {
            Self::Limited(n) => i64::from(*n),
            Self::Unlimited => UNLIMITED_SENTINEL,
        }
    }
}

impl fmt::Display for Quota {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limited(n) => write!(f, "{}", n),
            Self::Unlimited => f.write_str("Unlimited"),
        }
    }
}

/// A plan's value for one feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureValue {
    Access(bool),
    Quota(Quota),
}

impl FeatureValue {
    pub const UNLIMITED: FeatureValue = FeatureValue::Quota(Quota::Unlimited);

    pub fn limited(n: u32) -> Self {
        Self::Quota(Quota::Limited(n))
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawFeatureValue {
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl Serialize for FeatureValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = match self {
            Self::Access(flag) => RawFeatureValue::Bool(*flag),
            Self::Quota(quota) => RawFeatureValue::Int(quota.to_raw()),
        };
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FeatureValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawFeatureValue::deserialize(deserializer)? {
            RawFeatureValue::Bool(flag) => Self::Access(flag),
            RawFeatureValue::Int(raw) => Self::Quota(Quota::from_raw(raw)),
            RawFeatureValue::Float(raw) => Self::Quota(Quota::from_raw_f64(raw)),
        })
    }
}
