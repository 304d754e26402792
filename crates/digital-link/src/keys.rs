//! The identifier triple carried by a Digital Link.

use serde::{Deserialize, Serialize};

/// GS1 keys identifying a traded coffee item.
///
/// `lot` and `serial` are `None` when the link does not carry them. A
/// `Some("")` value is representable but never valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DigitalLinkKeys {
    /// Global Trade Item Number, canonically 8 to 14 digits
    pub gtin: String,
    /// Batch or lot code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lot: Option<String>,
    /// Serial number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,
}

impl DigitalLinkKeys {
    /// Creates keys carrying only a GTIN.
    pub fn new(gtin: impl Into<String>) -> Self {
        Self {
            gtin: gtin.into(),
            lot: None,
            serial: None,
        }
    }

    /// Sets the lot code.
    #[must_use]
    pub fn with_lot(mut self, lot: impl Into<String>) -> Self {
        self.lot = Some(lot.into());
        self
    }

    /// Sets the serial number.
    #[must_use]
    pub fn with_serial(mut self, serial: impl Into<String>) -> Self {
        self.serial = Some(serial.into());
        self
    }

    /// Lot code, if present and non-empty.
    pub fn lot(&self) -> Option<&str> {
        self.lot.as_deref().filter(|v| !v.is_empty())
    }

    /// Serial number, if present and non-empty.
    pub fn serial(&self) -> Option<&str> {
        self.serial.as_deref().filter(|v| !v.is_empty())
    }

    /// Returns true if the GTIN is well-formed and no optional key is empty.
    pub fn is_valid(&self) -> bool {
        crate::validate::is_valid_gtin(&self.gtin)
            && self.lot.as_deref() != Some("")
            && self.serial.as_deref() != Some("")
    }
}
