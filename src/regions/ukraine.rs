//! Ukrainian oblasts, plus Crimea and the two special-status cities
//! (27 codes).

use crate::resolve::AliasEntry;

pub(super) const QUALIFIER_WORDS: &[&str] = &["область", "обл"];

pub(super) const ALIASES: &[AliasEntry] = &[
    ("CK", &["черкаська", "cherkasy"]),
    ("CH", &["чернігівська", "chernihiv"]),
    ("CV", &["чернівецька", "chernivtsi"]),
    ("KR", &["автономна республіка крим", "крим", "crimea"]),
    ("DP", &["дніпропетровська", "dnipropetrovsk"]),
    ("DT", &["донецька", "donetsk"]),
    ("IF", &["івано-франківська", "ivano-frankivsk"]),
    ("KK", &["харківська", "kharkiv"]),
    ("KS", &["херсонська", "kherson"]),
    ("KM", &["хмельницька", "khmelnytskyi"]),
    ("KV", &["київська", "kyivska"]),
    ("KC", &["київ", "kyiv"]),
    ("KH", &["кіровоградська", "kirovohrad"]),
    ("LH", &["луганська", "luhansk"]),
    ("LV", &["львівська", "lviv"]),
    ("MY", &["миколаївська", "mykolaiv"]),
    ("OD", &["одеська", "odesa"]),
    ("PL", &["полтавська", "poltava"]),
    ("RV", &["рівненська", "rivne"]),
    ("SC", &["севастополь", "sevastopol"]),
    ("SM", &["сумська", "sumy"]),
    ("TP", &["тернопільська", "ternopil"]),
    ("ZK", &["закарпатська", "zakarpattia"]),
    ("VI", &["вінницька", "vinnytsia"]),
    ("VO", &["волинська", "volyn"]),
    ("ZP", &["запорізька", "zaporizhzhia"]),
    ("ZT", &["житомирська", "zhytomyr"]),
];
