//! Metropolitan French regions (13 codes, INSEE numbers).

use crate::resolve::AliasEntry;

pub(super) const QUALIFIER_WORDS: &[&str] = &["région", "region"];

pub(super) const ALIASES: &[AliasEntry] = &[
    ("11", &["île-de-france", "ile-de-france", "paris"]),
    ("24", &["centre-val de loire", "centre"]),
    ("27", &["bourgogne-franche-comté", "bourgogne-franche-comte"]),
    ("28", &["normandie", "normandy"]),
    ("32", &["hauts-de-france"]),
    ("44", &["grand est"]),
    ("52", &["pays de la loire"]),
    ("53", &["bretagne", "brittany"]),
    ("75", &["nouvelle-aquitaine"]),
    ("76", &["occitanie"]),
    ("84", &["auvergne-rhône-alpes", "auvergne-rhone-alpes"]),
    ("93", &["provence-alpes-côte d'azur", "provence-alpes-cote d'azur", "paca"]),
    ("94", &["corse", "corsica"]),
];
