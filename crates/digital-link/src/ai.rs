//! GS1 Application Identifiers understood by the codec.

/// An Application Identifier recognised in Digital Link paths.
///
/// Codes are opaque two-character strings; `"01"` is never treated as the
/// integer 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplicationIdentifier {
    /// `01`: Global Trade Item Number
    Gtin,
    /// `10`: batch or lot number
    Lot,
    /// `21`: serial number
    Serial,
}

impl ApplicationIdentifier {
    /// Returns the AI code as it appears in a Digital Link path.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Gtin => "01",
            Self::Lot => "10",
            Self::Serial => "21",
        }
    }

    /// Looks up a recognised AI by its exact code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "01" => Some(Self::Gtin),
            "10" => Some(Self::Lot),
            "21" => Some(Self::Serial),
            _ => None,
        }
    }

    /// Human-readable field name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gtin => "GTIN",
            Self::Lot => "Lot",
            Self::Serial => "Serial",
        }
    }
}

impl std::fmt::Display for ApplicationIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
