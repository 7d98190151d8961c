use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{ModelError, Party};

const ISO_FORMAT: &str = "%Y-%m-%d";
const SLASH_FORMAT: &str = "%m/%d/%Y";
const SHORT_SLASH_FORMAT: &str = "%m/%d/%y";

/// Format used whenever a primary date is displayed.
pub const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a primary date: `YYYY-MM-DD`, `M/D/YYYY` or `M/D/YY`.
///
/// `%Y` also accepts two digits, so the slash format is chosen from the
/// width of the year field.
pub fn parse_primary_date(value: &str) -> Result<NaiveDate, ModelError> {
    let trimmed = value.trim();
    let format = match trimmed.rsplit_once('/') {
        Some((_, year)) if year.len() == 2 => SHORT_SLASH_FORMAT,
        Some((_, year)) if year.len() == 4 => SLASH_FORMAT,
        Some(_) => return Err(invalid_date(value)),
        None if trimmed.split('-').next().is_some_and(|year| year.len() == 4) => ISO_FORMAT,
        None => return Err(invalid_date(value)),
    };
    NaiveDate::parse_from_str(trimmed, format).map_err(|_| invalid_date(value))
}

fn invalid_date(value: &str) -> ModelError {
    ModelError::InvalidDate {
        value: value.to_string(),
    }
}

/// Party-specific payload of a primary record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "party", rename_all = "snake_case")]
pub enum PartyDetail {
    Democratic { super_delegates: u32 },
    Republican { method: String },
}

impl PartyDetail {
    pub const fn party(&self) -> Party {
        match self {
            PartyDetail::Democratic { .. } => Party::Democratic,
            PartyDetail::Republican { .. } => Party::Republican,
        }
    }

    /// Secondary panel line for this party ("Super delegates: 4").
    pub fn describe(&self) -> String {
        match self {
            PartyDetail::Democratic { super_delegates } => {
                format!("Super delegates: {super_delegates}")
            }
            PartyDetail::Republican { method } => format!("Allocation method: {method}"),
        }
    }
}

/// One party's primary contest in one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryRecord {
    /// Region display name the record is keyed by.
    pub region_name: String,
    pub date: NaiveDate,
    /// Contest type as published (e.g., "primary", "caucus").
    pub primary_type: String,
    /// Pledged delegates at stake.
    pub delegates: u32,
    pub detail: PartyDetail,
}

impl PrimaryRecord {
    pub fn party(&self) -> Party {
        self.detail.party()
    }

    pub fn display_date(&self) -> String {
        self.date.format(DISPLAY_DATE_FORMAT).to_string()
    }
}
