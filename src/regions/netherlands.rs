//! Dutch provinces (12 codes).

use crate::resolve::AliasEntry;

pub(super) const QUALIFIER_WORDS: &[&str] = &["provincie", "province"];

pub(super) const ALIASES: &[AliasEntry] = &[
    ("NLDR", &["drenthe"]),
    ("NLFL", &["flevoland"]),
    ("NLFR", &["friesland", "fryslân"]),
    ("NLGE", &["gelderland"]),
    ("NLGR", &["groningen"]),
    ("NLLI", &["limburg"]),
    ("NLNB", &["noord-brabant", "north brabant", "brabant"]),
    ("NLNH", &["noord-holland", "north holland"]),
    ("NLOV", &["overijssel"]),
    ("NLUT", &["utrecht"]),
    ("NLZE", &["zeeland"]),
    ("NLZH", &["zuid-holland", "south holland"]),
];
