use serde::{Deserialize, Serialize};

use crate::{ModelError, RegionId};

/// A U.S. state or territory as listed in the region table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    /// Two-letter postal code used for map labels (e.g., "WY").
    pub code: String,
    /// Display name; primary records are keyed by this value.
    pub name: String,
}

impl Region {
    pub fn new(
        id: RegionId,
        code: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let raw_code = code.into();
        let code = raw_code.trim().to_string();
        let name = name.into().trim().to_string();
        if code.is_empty() {
            return Err(ModelError::InvalidRegionCode(raw_code));
        }
        if name.is_empty() {
            return Err(ModelError::EmptyRegionName);
        }
        Ok(Self { id, code, name })
    }

    /// Case-insensitive match against id, code or display name.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        if let Ok(id) = query.parse::<RegionId>() {
            return id == self.id;
        }
        self.code.eq_ignore_ascii_case(query) || self.name.eq_ignore_ascii_case(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_validates_fields() {
        let region = Region::new(RegionId::new(56), " WY ", "Wyoming ").unwrap();
        assert_eq!(region.code, "WY");
        assert_eq!(region.name, "Wyoming");
        assert_eq!(
            Region::new(RegionId::new(56), "WY", "  "),
            Err(ModelError::EmptyRegionName)
        );
    }

    #[test]
    fn matches_by_id_code_or_name() {
        let region = Region::new(RegionId::new(56), "WY", "Wyoming").unwrap();
        assert!(region.matches("56"));
        assert!(region.matches("wy"));
        assert!(region.matches("WYOMING"));
        assert!(!region.matches("55"));
        assert!(!region.matches("Wisconsin"));
    }
}
