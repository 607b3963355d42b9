//! Static region-set data: one module per supported country, each carrying
//! its alias table and qualifier word list. Descriptors are built lazily and
//! handed out as `&'static RegionSet` so resolver calls stay allocation-free
//! on the table side.

mod belgium;
mod europe;
mod france;
mod germany;
mod moldova;
mod netherlands;
mod poland;
mod ukraine;

use crate::resolve::{AliasEntry, RegionSet, qualifier_pattern};
use std::fmt;
use std::sync::LazyLock;

/// The supported region sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionSetId {
    /// Ukrainian oblasts, Crimea, Kyiv and Sevastopol (27).
    Ukraine,
    /// Moldovan raions, municipalities, Găgăuzia and Transnistria (37).
    Moldova,
    /// German federal states (16).
    Germany,
    /// Dutch provinces (12).
    Netherlands,
    /// Metropolitan French regions (13).
    France,
    /// Belgian provinces and Brussels (11).
    Belgium,
    /// Polish voivodeships (16).
    Poland,
    /// European countries, ISO 3166-1 alpha-2 (50).
    Europe,
}

impl RegionSetId {
    pub const ALL: [RegionSetId; 8] = [
        RegionSetId::Ukraine,
        RegionSetId::Moldova,
        RegionSetId::Germany,
        RegionSetId::Netherlands,
        RegionSetId::France,
        RegionSetId::Belgium,
        RegionSetId::Poland,
        RegionSetId::Europe,
    ];

    /// Short tag used on the command line and in file names.
    pub fn tag(self) -> &'static str {
        match self {
            RegionSetId::Ukraine => "ua",
            RegionSetId::Moldova => "md",
            RegionSetId::Germany => "de",
            RegionSetId::Netherlands => "nl",
            RegionSetId::France => "fr",
            RegionSetId::Belgium => "be",
            RegionSetId::Poland => "pl",
            RegionSetId::Europe => "eu",
        }
    }

    /// The set's descriptor (alias table + qualifier rule), built on first use.
    pub fn get(self) -> &'static RegionSet {
        match self {
            RegionSetId::Ukraine => &UKRAINE,
            RegionSetId::Moldova => &MOLDOVA,
            RegionSetId::Germany => &GERMANY,
            RegionSetId::Netherlands => &NETHERLANDS,
            RegionSetId::France => &FRANCE,
            RegionSetId::Belgium => &BELGIUM,
            RegionSetId::Poland => &POLAND,
            RegionSetId::Europe => &EUROPE,
        }
    }
}

impl fmt::Display for RegionSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

fn build(
    id: RegionSetId,
    name: &'static str,
    words: &[&str],
    entries: &'static [AliasEntry],
) -> RegionSet {
    let qualifier = if words.is_empty() {
        None
    } else {
        Some(qualifier_pattern(words))
    };
    RegionSet {
        id,
        name,
        qualifier,
        entries,
    }
}

static UKRAINE: LazyLock<RegionSet> = LazyLock::new(|| {
    build(
        RegionSetId::Ukraine,
        "Ukrainian oblasts",
        ukraine::QUALIFIER_WORDS,
        ukraine::ALIASES,
    )
});

static MOLDOVA: LazyLock<RegionSet> = LazyLock::new(|| {
    build(
        RegionSetId::Moldova,
        "Moldovan raions",
        moldova::QUALIFIER_WORDS,
        moldova::ALIASES,
    )
});

static GERMANY: LazyLock<RegionSet> = LazyLock::new(|| {
    build(
        RegionSetId::Germany,
        "German states",
        germany::QUALIFIER_WORDS,
        germany::ALIASES,
    )
});

static NETHERLANDS: LazyLock<RegionSet> = LazyLock::new(|| {
    build(
        RegionSetId::Netherlands,
        "Dutch provinces",
        netherlands::QUALIFIER_WORDS,
        netherlands::ALIASES,
    )
});

static FRANCE: LazyLock<RegionSet> = LazyLock::new(|| {
    build(
        RegionSetId::France,
        "French regions",
        france::QUALIFIER_WORDS,
        france::ALIASES,
    )
});

static BELGIUM: LazyLock<RegionSet> = LazyLock::new(|| {
    build(
        RegionSetId::Belgium,
        "Belgian provinces",
        belgium::QUALIFIER_WORDS,
        belgium::ALIASES,
    )
});

static POLAND: LazyLock<RegionSet> = LazyLock::new(|| {
    build(
        RegionSetId::Poland,
        "Polish voivodeships",
        poland::QUALIFIER_WORDS,
        poland::ALIASES,
    )
});

static EUROPE: LazyLock<RegionSet> = LazyLock::new(|| {
    build(
        RegionSetId::Europe,
        "European countries",
        europe::QUALIFIER_WORDS,
        europe::ALIASES,
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_set_sizes() {
        let sizes: Vec<usize> = RegionSetId::ALL
            .iter()
            .map(|id| id.get().codes().count())
            .collect();
        assert_eq!(sizes, vec![27, 37, 16, 12, 13, 11, 16, 50]);
    }

    #[test]
    fn tags_round_trip_through_display() {
        for id in RegionSetId::ALL {
            assert_eq!(id.to_string(), id.tag());
        }
    }
}
