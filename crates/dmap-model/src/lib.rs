//! Data model for the delegate map: regions and per-party primary records.

pub mod error;
pub mod ids;
pub mod party;
pub mod primary;
pub mod region;

pub use error::{ModelError, Result};
pub use ids::RegionId;
pub use party::Party;
pub use primary::{DISPLAY_DATE_FORMAT, PartyDetail, PrimaryRecord, parse_primary_date};
pub use region::Region;
