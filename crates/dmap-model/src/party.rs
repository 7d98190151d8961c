use std::fmt;

use serde::{Deserialize, Serialize};

/// Party holding a primary contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Party {
    Democratic,
    Republican,
}

impl Party {
    pub const ALL: [Party; 2] = [Party::Democratic, Party::Republican];

    /// Display label used in panel text ("Democratic delegates: ...").
    pub const fn label(&self) -> &'static str {
        match self {
            Party::Democratic => "Democratic",
            Party::Republican => "Republican",
        }
    }

    /// Lowercase slug used in forecast links.
    pub const fn slug(&self) -> &'static str {
        match self {
            Party::Democratic => "democratic",
            Party::Republican => "republican",
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_and_slug_differ_only_in_case() {
        for party in Party::ALL {
            assert_eq!(party.label().to_lowercase(), party.slug());
            assert_eq!(party.to_string(), party.label());
        }
    }
}
