//! Moldovan raions and municipalities, including Găgăuzia, Bender and
//! Transnistria (37 codes). Romanian names keep their diacritics; ASCII
//! variants are not listed because source datasets use the local forms.

use crate::resolve::AliasEntry;

pub(super) const QUALIFIER_WORDS: &[&str] = &["region", "raion"];

pub(super) const ALIASES: &[AliasEntry] = &[
    ("CA", &["cahul"]),
    ("GA", &["găgăuzia"]),
    ("TA", &["taraclia"]),
    ("CT", &["cantemir"]),
    ("BS", &["basarabeasca"]),
    ("LE", &["leova"]),
    ("CM", &["cimișlia"]),
    ("SV", &["ștefan vodă"]),
    ("BD", &["bender"]),
    ("CS", &["căușeni"]),
    ("HI", &["hîncești"]),
    ("IA", &["ialoveni"]),
    ("NI", &["nisporeni"]),
    ("CU", &["chișinău"]),
    ("AN", &["anenii noi"]),
    ("CR", &["criuleni"]),
    ("ST", &["strășeni"]),
    ("UN", &["ungheni"]),
    ("DU", &["dubăsari"]),
    ("CL", &["călărași"]),
    ("SN", &["transnistria"]),
    ("FA", &["fălești"]),
    ("OR", &["orhei"]),
    ("GL", &["glodeni"]),
    ("BA", &["bălți"]),
    ("TE", &["telenești"]),
    ("SI", &["sîngerei"]),
    ("RI", &["rîșcani"]),
    ("RE", &["rezina"]),
    ("SD", &["șoldănești"]),
    ("FL", &["florești"]),
    ("DR", &["drochia"]),
    ("ED", &["edineț"]),
    ("BR", &["briceni"]),
    ("SO", &["soroca"]),
    ("DO", &["dondușeni"]),
    ("OC", &["ocnița"]),
];
