//! German federal states (16 codes, ISO 3166-2:DE).

use crate::resolve::AliasEntry;

pub(super) const QUALIFIER_WORDS: &[&str] = &["land", "state", "bundesland"];

pub(super) const ALIASES: &[AliasEntry] = &[
    ("DE-BW", &["baden-württemberg", "baden-wurttemberg", "baden wurttemberg"]),
    ("DE-BY", &["bayern", "bavaria"]),
    ("DE-BE", &["berlin"]),
    ("DE-BB", &["brandenburg"]),
    ("DE-HB", &["bremen"]),
    ("DE-HH", &["hamburg"]),
    ("DE-HE", &["hessen", "hesse"]),
    ("DE-MV", &["mecklenburg-vorpommern", "mecklenburg vorpommern"]),
    ("DE-NI", &["niedersachsen", "lower saxony"]),
    ("DE-NW", &["nordrhein-westfalen", "nordrhein westfalen", "north rhine-westphalia"]),
    ("DE-RP", &["rheinland-pfalz", "rheinland pfalz", "rhineland-palatinate"]),
    ("DE-SL", &["saarland"]),
    ("DE-SN", &["sachsen", "saxony"]),
    ("DE-ST", &["sachsen-anhalt", "sachsen anhalt", "saxony-anhalt"]),
    ("DE-SH", &["schleswig-holstein", "schleswig holstein"]),
    ("DE-TH", &["thüringen", "thuringen", "thuringia"]),
];
