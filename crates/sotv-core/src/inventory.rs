//! Seed-bank inventory used to populate the filter.
//!
//! The list is plain data: it comes from `seed_banks` in config.toml and
//! defaults to the snapshot below. Selecting an entry only changes the
//! status line; no request is made.

use serde::{Deserialize, Serialize};

/// One named source in the archive and the number of strains it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedBank {
    pub name: String,
    pub count: u64,
}

impl SeedBank {
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }

    /// Label shown in the filter, e.g. `Crop King (3,336 strains)`.
    pub fn option_label(&self) -> String {
        format!("{} ({} strains)", self.name, group_thousands(self.count))
    }
}

/// Archive snapshot shipped as the default filter contents.
pub fn default_seed_banks() -> Vec<SeedBank> {
    [
        ("Attitude Seed Bank", 7673),
        ("Crop King", 3336),
        ("North Atlantic", 2727),
        ("Gorilla Seed Bank", 2009),
        ("Neptune", 1995),
        ("Seedsman", 866),
        ("Multiverse Beans", 799),
        ("Herbies Seeds", 753),
        ("Sensi Seeds", 620),
        ("Seed Supreme", 353),
        ("Mephisto Genetics", 245),
        ("Exotic Genetix", 227),
        ("Amsterdam Marijuana", 163),
        ("ILGM", 133),
        ("Barney's Farm", 88),
        ("Royal Queen Seeds", 67),
        ("Dutch Passion", 44),
        ("Seeds Here Now", 43),
        ("Great Lakes Genetics", 16),
        ("Compound Genetics", 1),
    ]
    .into_iter()
    .map(|(name, count)| SeedBank::new(name, count))
    .collect()
}

/// Status text for a filter selection. `None` (the "all" option) hides the status.
pub fn filter_status(selected: Option<&str>) -> Option<String> {
    selected
        .filter(|name| !name.is_empty())
        .map(|name| format!("Filtered to {name}. Enter a URL or search by strain name."))
}

/// Analytics value for a filter selection.
pub(crate) fn filter_event_value(selected: Option<&str>) -> &str {
    selected.filter(|name| !name.is_empty()).unwrap_or("all")
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
