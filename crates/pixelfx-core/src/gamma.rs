//! Gamma correction lookup tables.
//!
//! Varying gamma per channel changes both brightness and the ratios between
//! red, green and blue. Each channel gets its own pre-computed 256-entry table
//! so that applying gamma costs one lookup per channel.

use serde::{Deserialize, Serialize};

use crate::clamp::{is_between, to_channel, MAX_CHANNEL};
use crate::error::{ProcessError, Result};

/// Lower end of the gamma range offered to users.
pub const MIN_GAMMA: f64 = 0.2;

/// Upper end of the gamma range offered to users.
pub const MAX_GAMMA: f64 = 5.0;

/// Number of entries in a channel lookup table.
pub const TABLE_LEN: usize = 256;

/// Pre-computed channel lookup: `table[input] = output`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct GammaTable {
    table: [u8; TABLE_LEN],
}

impl GammaTable {
    /// Build the table for gamma `gamma`.
    ///
    /// `table[i] = clamp(round(255 * (i / 255)^(1 / gamma)))`.
    /// Fails for non-finite or non-positive gamma. Values outside
    /// [`MIN_GAMMA`]..=[`MAX_GAMMA`] are accepted.
    pub fn from_gamma(gamma: f64) -> Result<Self> {
        if !gamma.is_finite() || gamma <= 0.0 {
            return Err(ProcessError::invalid(
                "gamma",
                format!("must be finite and positive, got {}", gamma),
            ));
        }
        if gamma == 1.0 {
            return Ok(Self::identity());
        }

        let max = MAX_CHANNEL as f64;
        let exponent = 1.0 / gamma;
        let mut table = [0u8; TABLE_LEN];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = to_channel(max * (i as f64 / max).powf(exponent));
        }
        Ok(Self { table })
    }

    /// Table mapping every value to itself.
    pub fn identity() -> Self {
        let mut table = [0u8; TABLE_LEN];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = i as u8;
        }
        Self { table }
    }

    /// Wrap an existing table.
    pub fn from_array(table: [u8; TABLE_LEN]) -> Self {
        Self { table }
    }

    /// Whether the gamma falls in the range offered to users.
    pub fn is_typical_gamma(gamma: f64) -> bool {
        is_between(gamma, MIN_GAMMA, MAX_GAMMA)
    }

    #[inline]
    pub fn lookup(&self, value: u8) -> u8 {
        self.table[value as usize]
    }

    pub fn is_identity(&self) -> bool {
        self.table.iter().enumerate().all(|(i, &v)| v == i as u8)
    }

    pub fn as_array(&self) -> &[u8; TABLE_LEN] {
        &self.table
    }
}

impl Default for GammaTable {
    fn default() -> Self {
        Self::identity()
    }
}

impl TryFrom<Vec<u8>> for GammaTable {
    type Error = ProcessError;

    fn try_from(values: Vec<u8>) -> Result<Self> {
        let len = values.len();
        let table: [u8; TABLE_LEN] = values.try_into().map_err(|_| {
            ProcessError::invalid(
                "gamma table",
                format!("expected {} entries, got {}", TABLE_LEN, len),
            )
        })?;
        Ok(Self { table })
    }
}

impl From<GammaTable> for Vec<u8> {
    fn from(table: GammaTable) -> Self {
        table.table.to_vec()
    }
}

/// One lookup table per channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GammaTables {
    pub red: GammaTable,
    pub green: GammaTable,
    pub blue: GammaTable,
}

impl GammaTables {
    pub fn new(red: GammaTable, green: GammaTable, blue: GammaTable) -> Self {
        Self { red, green, blue }
    }

    /// Build all three tables from per-channel gamma values.
    pub fn from_gammas(red: f64, green: f64, blue: f64) -> Result<Self> {
        Ok(Self {
            red: GammaTable::from_gamma(red)?,
            green: GammaTable::from_gamma(green)?,
            blue: GammaTable::from_gamma(blue)?,
        })
    }

    pub fn identity() -> Self {
        Self::default()
    }

    pub fn is_identity(&self) -> bool {
        self.red.is_identity() && self.green.is_identity() && self.blue.is_identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_table() {
        let table = GammaTable::identity();
        assert!(table.is_identity());
        assert_eq!(table.lookup(0), 0);
        assert_eq!(table.lookup(128), 128);
        assert_eq!(table.lookup(255), 255);
    }

    #[test]
    fn test_gamma_one_is_identity() {
        assert!(GammaTable::from_gamma(1.0).unwrap().is_identity());
    }

    #[test]
    fn test_endpoints_fixed() {
        for gamma in [0.2, 0.5, 2.2, 5.0] {
            let table = GammaTable::from_gamma(gamma).unwrap();
            assert_eq!(table.lookup(0), 0, "gamma {}", gamma);
            assert_eq!(table.lookup(255), 255, "gamma {}", gamma);
        }
    }

    #[test]
    fn test_gamma_above_one_brightens() {
        let table = GammaTable::from_gamma(2.0).unwrap();
        // 255 * sqrt(64 / 255) = 127.75
        assert_eq!(table.lookup(64), 128);
        for i in 1..255u8 {
            assert!(table.lookup(i) >= i);
        }
    }

    #[test]
    fn test_gamma_below_one_darkens() {
        let table = GammaTable::from_gamma(0.5).unwrap();
        // 255 * (128 / 255)^2 = 64.25
        assert_eq!(table.lookup(128), 64);
        for i in 1..255u8 {
            assert!(table.lookup(i) <= i);
        }
    }

    #[test]
    fn test_table_is_monotonic() {
        let table = GammaTable::from_gamma(1.8).unwrap();
        for i in 1..TABLE_LEN {
            assert!(table.as_array()[i] >= table.as_array()[i - 1]);
        }
    }

    #[test]
    fn test_rejects_invalid_gamma() {
        for gamma in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                GammaTable::from_gamma(gamma),
                Err(ProcessError::InvalidParameter { name: "gamma", .. })
            ));
        }
    }

    #[test]
    fn test_typical_range() {
        assert!(GammaTable::is_typical_gamma(0.2));
        assert!(GammaTable::is_typical_gamma(5.0));
        assert!(!GammaTable::is_typical_gamma(0.1));
    }

    #[test]
    fn test_try_from_wrong_length() {
        assert!(GammaTable::try_from(vec![0u8; 255]).is_err());
        assert!(GammaTable::try_from(vec![0u8; 257]).is_err());
        assert!(GammaTable::try_from((0..=255u8).collect::<Vec<_>>())
            .unwrap()
            .is_identity());
    }

    #[test]
    fn test_tables_from_gammas() {
        let tables = GammaTables::from_gammas(1.0, 2.0, 0.5).unwrap();
        assert!(tables.red.is_identity());
        assert!(!tables.green.is_identity());
        assert!(!tables.blue.is_identity());
        assert!(GammaTables::from_gammas(1.0, 0.0, 1.0).is_err());
        assert!(GammaTables::identity().is_identity());
    }
}
