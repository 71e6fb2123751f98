use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, trace};

use super::{
    lexicon::{Lexicon, LexiconTable},
    preprocessing::{remove_stopwords, tokenize},
    schemas::*,
};

static DEFAULT_GENERATOR: OnceLock<KeywordGenerator> = OnceLock::new();
static NUMERIC_RE: OnceLock<Regex> = OnceLock::new();
static UNIT_RE: OnceLock<Regex> = OnceLock::new();

fn numeric_re() -> &'static Regex {
    NUMERIC_RE.get_or_init(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)?$").expect("numeric pattern is valid"))
}

fn unit_re() -> &'static Regex {
    UNIT_RE.get_or_init(|| {
        Regex::new(&format!("(?i)^(?:{})$", UNIT_WORDS.join("|")))
            .expect("unit pattern is valid")
    })
}

#[inline]
pub fn is_numeric(token: &str) -> bool {
    numeric_re().is_match(token)
}

#[inline]
pub fn is_unit(token: &str) -> bool {
    unit_re().is_match(token)
}

/// Turns listing titles into search keywords using a fixed lexicon.
///
/// Generation runs a series of independent passes over the title's tokens;
/// their candidates are pooled, normalized and deduplicated in the order
/// the passes ran. See [`KeywordGenerator::generate`].
#[derive(Debug, Clone)]
pub struct KeywordGenerator {
    lexicon: Lexicon,
}

impl Default for KeywordGenerator {
    fn default() -> Self {
        Self::builtin()
    }
}

impl KeywordGenerator {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn builtin() -> Self {
        Self::new(Lexicon::builtin())
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn generate(&self, title: impl Into<Title>, options: &GenerationOptions) -> KeywordSet {
        let normalized = title.into().normalized();
        if normalized.is_empty() {
            return KeywordSet::default();
        }

        let tokens = tokenize(&normalized);
        let max_ngram = options.effective_max_ngram();

        let passes: [(&str, Vec<String>); 8] = [
            ("exact", exact_phrase(&normalized)),
            ("tokens", token_variants(&tokens, &self.lexicon)),
            ("ngrams", ngrams(&tokens, max_ngram)),
            ("unit_shorthand", unit_shorthand(&tokens)),
            ("unit_noun", unit_noun_phrase(&tokens)),
            ("abbreviation_rescan", abbreviation_rescan(&tokens, &self.lexicon.abbreviations)),
            ("stopword_reduced", stopword_reduced(&tokens, &normalized)),
            ("informal_phrases", informal_phrases(&normalized, &self.lexicon.informal_variants)),
        ];

        let mut candidates = Vec::new();
        for (name, pass) in passes {
            trace!(pass = name, candidates = pass.len(), "keyword pass finished");
            candidates.extend(pass);
        }

        let keywords = KeywordSet::from_candidates(&candidates);
        debug!(
            title = %normalized,
            tokens = tokens.len(),
            candidates = candidates.len(),
            keywords = keywords.len(),
            "generated listing keywords"
        );
        keywords
    }
}

/// Keywords for `title` using the built-in lexicon.
pub fn generate_keywords(title: impl Into<Title>, options: &GenerationOptions) -> KeywordSet {
    DEFAULT_GENERATOR
        .get_or_init(KeywordGenerator::builtin)
        .generate(title, options)
}

pub fn exact_phrase(normalized: &str) -> Vec<String> {
    vec![normalized.to_string()]
}

/// Each token followed by abbreviation alternates whose key equals or
/// contains it, then informal spellings keyed by the exact token.
pub fn token_variants(tokens: &[String], lexicon: &Lexicon) -> Vec<String> {
    let mut out = Vec::new();

    for token in tokens {
        out.push(token.clone());

        for (key, alternates) in lexicon.abbreviations.iter() {
            if key == token.as_str() || key.contains(token.as_str()) {
                out.extend(alternates.iter().cloned());
            }
        }

        if let Some(variants) = lexicon.informal_variants.get(token) {
            out.extend(variants.iter().cloned());
        }
    }

    out
}

/// Space, concatenated and hyphenated forms of every contiguous span of
/// 2..=min(max_ngram, tokens) tokens, shorter spans first.
pub fn ngrams(tokens: &[String], max_ngram: usize) -> Vec<String> {
    let upper = max_ngram.min(tokens.len());
    let mut out = Vec::new();

    for size in MIN_NGRAM_SIZE..=upper {
        for window in tokens.windows(size) {
            out.push(window.join(" "));
            out.push(window.concat());
            out.push(window.join("-"));
        }
    }

    out
}

/// `100kg`, `100-kg` and `100 kg` for every number directly followed by a
/// unit word.
pub fn unit_shorthand(tokens: &[String]) -> Vec<String> {
    let mut out = Vec::new();

    for pair in tokens.windows(2) {
        let (number, unit) = (&pair[0], &pair[1]);
        if is_numeric(number) && is_unit(unit) {
            out.push(format!("{number}{unit}"));
            out.push(format!("{number}-{unit}"));
            out.push(format!("{number} {unit}"));
        }
    }

    out
}

/// `100kg maize` and `100-kg maize`, built from the first number in the
/// title only. Later quantities never get a noun phrase, even when the
/// first number is not followed by a unit.
pub fn unit_noun_phrase(tokens: &[String]) -> Vec<String> {
    let Some(index) = tokens.iter().position(|token| is_numeric(token)) else {
        return Vec::new();
    };

    match (tokens.get(index + 1), tokens.get(index + 2)) {
        (Some(unit), Some(noun)) if is_unit(unit) => {
            let number = &tokens[index];
            vec![
                format!("{number}{unit} {noun}"),
                format!("{number}-{unit} {noun}"),
            ]
        }
        _ => Vec::new(),
    }
}

/// Abbreviation alternates for every key that is contained in a token or
/// contains it.
pub fn abbreviation_rescan(tokens: &[String], abbreviations: &LexiconTable) -> Vec<String> {
    let mut out = Vec::new();

    for token in tokens {
        for (key, alternates) in abbreviations.iter() {
            if token.contains(key) || key.contains(token.as_str()) {
                out.extend(alternates.iter().cloned());
            }
        }
    }

    out
}

pub fn stopword_reduced(tokens: &[String], normalized: &str) -> Vec<String> {
    let reduced = remove_stopwords(tokens);
    if reduced.is_empty() || reduced == normalized {
        return Vec::new();
    }

    vec![reduced]
}

/// The whole title with the first occurrence of each informal-variant key
/// swapped for each of its spellings.
pub fn informal_phrases(normalized: &str, variants: &LexiconTable) -> Vec<String> {
    let mut out = Vec::new();

    for (key, spellings) in variants.iter() {
        if normalized.contains(key) {
            out.extend(
                spellings
                    .iter()
                    .map(|spelling| normalized.replacen(key, spelling, 1)),
            );
        }
    }

    out
}
