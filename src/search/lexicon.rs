use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::info;

use super::preprocessing::normalize;
use crate::apex::utils::KeywordError;

pub const ABBREVIATIONS: &[(&str, &[&str])] = &[
    ("kilogram", &["kg"]),
    ("kilograms", &["kgs", "kg"]),
    ("tonne", &["ton", "t"]),
    ("tonnes", &["tons"]),
    ("litre", &["ltr"]),
    ("litres", &["ltrs"]),
    ("dozen", &["doz"]),
    ("for sale", &["sale"]),
    ("grade a", &["gradeA", "grade-a"]),
    ("second hand", &["used", "2nd hand"]),
    ("brand new", &["new"]),
    ("npk", &["npk fertilizer", "fertilizer"]),
    ("fertilizer", &["fertiliser", "npk"]),
    ("kampala", &["kla"]),
    ("boda boda", &["boda", "motorcycle"]),
];

pub const INFORMAL_VARIANTS: &[(&str, &[&str])] = &[
    ("maize", &["maize", "maze", "mayize"]),
    ("matooke", &["matooke", "matoke", "matooki"]),
    ("cassava", &["cassava", "casava", "muwogo"]),
    ("groundnuts", &["groundnuts", "g-nuts", "gnuts"]),
    ("irish potatoes", &["irish potatoes", "irish", "potatoes"]),
    ("tomatoes", &["tomatoes", "tomatos", "nyanya"]),
    ("chicken", &["chicken", "chiken", "kuku"]),
    ("beans", &["beans", "bean"]),
    ("cattle", &["cattle", "cows", "ente"]),
    ("friesian", &["friesian", "fresian", "frisian"]),
    ("millet", &["millet", "milet"]),
    ("sim sim", &["sim sim", "simsim", "sesame"]),
];

/// Key to alternates table. Iteration follows insertion order so that
/// generated keywords come out in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LexiconTable(IndexMap<String, Vec<String>>);

impl LexiconTable {
    pub fn from_static(entries: &[(&str, &[&str])]) -> Self {
        let mut table = Self::default();
        for (key, alternates) in entries {
            table.insert(key, alternates.iter().map(|alt| alt.to_string()));
        }
        table
    }

    /// Adds alternates under `key` (normalized). Alternates already listed
    /// for the key are skipped.
    pub fn insert<I>(&mut self, key: &str, alternates: I)
    where
        I: IntoIterator<Item = String>,
    {
        let key = normalize(key);
        if key.is_empty() {
            return;
        }

        let entry = self.0.entry(key).or_default();
        for alternate in alternates {
            if !entry.contains(&alternate) {
                entry.push(alternate);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(key, alts)| (key.as_str(), alts.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn extend(&mut self, other: LexiconTable) {
        for (key, alternates) in other.0 {
            self.insert(&key, alternates);
        }
    }
}

/// Abbreviation and informal-spelling tables used for recall-oriented
/// keyword expansion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    #[serde(default)]
    pub abbreviations: LexiconTable,
    #[serde(default)]
    pub informal_variants: LexiconTable,
}

impl Lexicon {
    pub fn builtin() -> Self {
        Self {
            abbreviations: LexiconTable::from_static(ABBREVIATIONS),
            informal_variants: LexiconTable::from_static(INFORMAL_VARIANTS),
        }
    }

    /// Parses a lexicon extension document. Both tables are optional and
    /// keys are normalized on the way in.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: Lexicon = serde_json::from_str(json)?;
        let mut lexicon = Lexicon::default();
        lexicon.merge(raw);
        Ok(lexicon)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, KeywordError> {
        let contents = fs::read_to_string(path).map_err(|source| KeywordError::LexiconRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&contents).map_err(|source| KeywordError::LexiconParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Built-in tables extended with the entries found in `path`.
    pub fn builtin_with_extension(path: &Path) -> Result<Self, KeywordError> {
        let extension = Self::from_json_file(path)?;
        info!(
            path = %path.display(),
            abbreviations = extension.abbreviations.len(),
            informal_variants = extension.informal_variants.len(),
            "loaded lexicon extension"
        );

        let mut lexicon = Self::builtin();
        lexicon.merge(extension);
        Ok(lexicon)
    }

    pub fn merge(&mut self, other: Lexicon) {
        self.abbreviations.extend(other.abbreviations);
        self.informal_variants.extend(other.informal_variants);
    }
}
