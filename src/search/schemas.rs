use indexmap::IndexSet;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::preprocessing::normalize;

pub const DEFAULT_MAX_NGRAM: usize = 4;
pub const MIN_NGRAM_SIZE: usize = 2;

pub const UNIT_WORDS: &[&str] = &[
    "kg",
    "kilogram",
    "kilograms",
    "bag",
    "bags",
    "tonne",
    "tonnes",
    "t",
];

/// Raw listing title as handed over by the caller. An absent title behaves
/// like an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Title(Option<String>);

impl Title {
    pub fn as_str(&self) -> &str {
        self.0.as_deref().unwrap_or("")
    }

    pub fn normalized(&self) -> String {
        normalize(self.as_str())
    }
}

impl From<&str> for Title {
    fn from(value: &str) -> Self {
        Self(Some(value.to_string()))
    }
}

impl From<String> for Title {
    fn from(value: String) -> Self {
        Self(Some(value))
    }
}

impl From<&String> for Title {
    fn from(value: &String) -> Self {
        Self(Some(value.clone()))
    }
}

impl From<Option<&str>> for Title {
    fn from(value: Option<&str>) -> Self {
        Self(value.map(str::to_string))
    }
}

impl From<Option<String>> for Title {
    fn from(value: Option<String>) -> Self {
        Self(value)
    }
}

macro_rules! title_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Title {
                fn from(value: $ty) -> Self {
                    Self(Some(value.to_string()))
                }
            }
        )*
    };
}

title_from_display!(i32, i64, u32, u64, usize, f64);

fn lenient_max_ngram<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let parsed = match value {
        Some(Value::Number(number)) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        _ => None,
    };
    Ok(parsed)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    #[serde(default, deserialize_with = "lenient_max_ngram")]
    pub max_ngram: Option<i64>,
}

impl GenerationOptions {
    pub fn with_max_ngram(max_ngram: i64) -> Self {
        Self {
            max_ngram: Some(max_ngram),
        }
    }

    /// Upper bound on n-gram span length. Non-positive or missing values
    /// fall back to [`DEFAULT_MAX_NGRAM`].
    pub fn effective_max_ngram(&self) -> usize {
        match self.max_ngram {
            Some(n) if n > 0 => usize::try_from(n).unwrap_or(usize::MAX),
            _ => DEFAULT_MAX_NGRAM,
        }
    }
}

/// Ordered, duplicate-free keyword collection. Entries are normalized and
/// never empty; the first occurrence of a keyword fixes its position.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct KeywordSet(IndexSet<String>);

impl KeywordSet {
    pub fn from_candidates<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = candidates
            .into_iter()
            .map(|candidate| normalize(candidate.as_ref()))
            .filter(|keyword| !keyword.is_empty())
            .collect();
        Self(keywords)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.0.contains(keyword)
    }

    pub fn position(&self, keyword: &str) -> Option<usize> {
        self.0.get_index_of(keyword)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0.into_iter().collect()
    }
}

// IndexSet equality ignores order; keyword order is part of the output.
impl PartialEq for KeywordSet {
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().eq(other.0.iter())
    }
}

impl Eq for KeywordSet {}

impl IntoIterator for KeywordSet {
    type Item = String;
    type IntoIter = indexmap::set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// One line of batch indexing output.
#[derive(Debug, Serialize)]
pub struct KeywordRecord {
    pub title: String,
    pub keywords: KeywordSet,
}
