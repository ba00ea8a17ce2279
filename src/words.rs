//! Word catalog data model.
//!
//! `WordEntry` mirrors the backend's JSON schema. Field names on the wire are
//! Spanish (`palabra`, `significado`); the serde renames keep the Rust side
//! readable without breaking the wire format.

use serde::{Deserialize, Serialize};

/// Unique identifier of a catalog word.
pub type WordId = u32;

/// One immutable catalog record. The backend owns these; the quiz engine
/// only ever reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    pub id: WordId,
    /// The regionalism itself.
    #[serde(rename = "palabra")]
    pub term: String,
    /// Its meaning in plain Spanish.
    #[serde(rename = "significado")]
    pub meaning: String,
    /// Optional pronunciation clip hosted by the backend.
    #[serde(default)]
    pub audio_url: Option<String>,
    pub region_id: u32,
}

/// Region identifiers used by the built-in catalog.
pub const REGION_COSTA: u32 = 1;
pub const REGION_SIERRA: u32 = 2;
pub const REGION_ORIENTE: u32 = 3;

/// Built-in starter catalog for offline play (`--offline`).
pub fn builtin_catalog() -> Vec<WordEntry> {
    let entries: &[(&str, &str, u32)] = &[
        ("chuchaqui", "Resaca; malestar después de una noche de fiesta", REGION_SIERRA),
        ("ñaño", "Hermano, o amigo muy cercano", REGION_SIERRA),
        ("chévere", "Muy bueno, agradable", REGION_COSTA),
        ("guagua", "Niño pequeño, bebé", REGION_SIERRA),
        ("camellar", "Trabajar duro", REGION_COSTA),
        ("farra", "Fiesta, juerga", REGION_SIERRA),
        ("pelado", "Novio o novia; también persona joven", REGION_COSTA),
        ("achachay", "Expresión de frío", REGION_SIERRA),
        ("arrarray", "Expresión de calor o quemadura", REGION_SIERRA),
        ("atatay", "Expresión de asco", REGION_SIERRA),
        ("caleta", "Casa, hogar", REGION_COSTA),
        ("chiro", "Sin dinero, quebrado", REGION_SIERRA),
        ("mijín", "Amigo de confianza", REGION_COSTA),
        ("bacán", "Excelente, estupendo", REGION_COSTA),
        ("ñeque", "Fuerza, valor", REGION_COSTA),
        ("ayayay", "Expresión de dolor", REGION_ORIENTE),
    ];

    entries
        .iter()
        .enumerate()
        .map(|(i, &(term, meaning, region_id))| WordEntry {
            id: i as WordId + 1,
            term: term.to_string(),
            meaning: meaning.to_string(),
            audio_url: None,
            region_id,
        })
        .collect()
}
