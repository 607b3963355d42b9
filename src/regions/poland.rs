//! Polish voivodeships (16 codes). Aliases list the Polish name (ASCII-ish
//! spellings as used in exported statistics) and the common English name.

use crate::resolve::AliasEntry;

pub(super) const QUALIFIER_WORDS: &[&str] = &["województwo", "voivodeship", "province"];

pub(super) const ALIASES: &[AliasEntry] = &[
    ("LD", &["lódzkie", "lódź"]),
    ("SK", &["swietokrzyskie", "swiętokrzyskie"]),
    ("WP", &["wielkopolskie", "greater poland"]),
    ("KP", &["kujawsko-pomorskie", "kuyavian-pomeranian"]),
    ("MA", &["malopolskie", "lesser poland"]),
    ("DS", &["dolnoslaskie", "lower silesian"]),
    ("LU", &["lubelskie", "lublin"]),
    ("LB", &["lubuskie", "lubusz"]),
    ("MZ", &["mazowieckie", "masovian"]),
    ("OP", &["opolskie", "opole"]),
    ("PD", &["podlaskie", "podlachian"]),
    ("PM", &["pomorskie", "pomeranian"]),
    ("SL", &["slaskie", "silesian"]),
    ("PK", &["podkarpackie", "subcarpathian"]),
    ("WN", &["warminsko-mazurskie", "warmian-masurian"]),
    ("ZP", &["zachodniopomorskie", "west pomeranian"]),
];
