//! Belgian provinces plus the Brussels-Capital Region (11 codes). Aliases
//! cover English, Dutch and French forms.

use crate::resolve::AliasEntry;

pub(super) const QUALIFIER_WORDS: &[&str] = &["province", "provincie"];

pub(super) const ALIASES: &[AliasEntry] = &[
    ("BEBRU", &["brussels", "bruxelles", "brussel"]),
    ("BEVAN", &["antwerp", "antwerpen", "anvers"]),
    ("BEVBR", &["flemish brabant", "vlaams-brabant", "brabant flamand"]),
    ("BEVLI", &["limburg"]),
    ("BEVOV", &["east flanders", "oost-vlaanderen", "flandre orientale"]),
    ("BEVWV", &["west flanders", "west-vlaanderen", "flandre occidentale"]),
    ("BEWBR", &["walloon brabant", "waals-brabant", "brabant wallon"]),
    ("BEWHT", &["hainaut", "henegouwen"]),
    ("BEWLG", &["liege", "liège", "luik"]),
    ("BEWLX", &["luxembourg", "luxemburg"]),
    ("BEWNA", &["namur", "namen"]),
];
