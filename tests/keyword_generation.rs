use goodspoint_keywords::{
    GenerationOptions, KeywordGenerator, KeywordRecord, Lexicon, generate_keywords, normalize,
};
use std::io::Write;

fn defaults() -> GenerationOptions {
    GenerationOptions::default()
}

#[test]
fn exact_phrase_and_unit_shorthand() {
    let keywords = generate_keywords("100 kg Maize in Masaka", &defaults());

    for expected in ["100 kg maize in masaka", "100kg", "100-kg", "100 kg", "100kg maize", "100-kg maize"] {
        assert!(keywords.contains(expected), "missing {expected}");
    }
    assert_eq!(keywords.iter().next(), Some("100 kg maize in masaka"));
}

#[test]
fn stopword_reduced_phrase_is_added() {
    let keywords = generate_keywords("10 Friesian Cattle for Sale in Mbarara", &defaults());

    assert!(keywords.contains("10 friesian cattle for sale in mbarara"));
    assert!(keywords.contains("10 friesian cattle sale mbarara"));
}

#[test]
fn informal_spellings_are_substituted_into_the_title() {
    let keywords = generate_keywords("10 Friesian Cattle for Sale in Mbarara", &defaults());

    assert!(keywords.contains("cows"));
    assert!(keywords.contains("10 friesian cows for sale in mbarara"));
    assert!(keywords.contains("10 fresian cattle for sale in mbarara"));
}

#[test]
fn fertilizer_abbreviations_expand() {
    let keywords = generate_keywords("NPK Fertilizer 50 kg Bag", &defaults());

    for expected in ["npk", "fertiliser", "npk fertilizer", "50kg", "50kg bag", "50-kg bag"] {
        assert!(keywords.contains(expected), "missing {expected}");
    }
}

#[test]
fn grade_a_shorthand_is_normalized() {
    let keywords = generate_keywords("Grade A Beans", &defaults());

    assert!(keywords.contains("gradea"));
    assert!(keywords.contains("grade-a"));
    assert!(keywords.contains("bean"));
}

#[test]
fn short_tokens_match_inside_longer_keys() {
    // "a" is contained in "kampala", so its shorthand comes along too.
    let keywords = generate_keywords("Grade A Beans", &defaults());
    assert!(keywords.contains("kla"));
}

#[test]
fn ngram_bound_limits_span_length() {
    let options = GenerationOptions::with_max_ngram(2);
    let keywords = generate_keywords("100 kg Maize in Masaka", &options);

    assert!(keywords.contains("kgmaize"));
    assert!(keywords.contains("in-masaka"));
    for absent in ["100kgmaize", "100-kg-maize", "kg maize in", "maizeinmasaka"] {
        assert!(!keywords.contains(absent), "unexpected {absent}");
    }

    let wide = generate_keywords("100 kg Maize in Masaka", &defaults());
    assert!(wide.contains("100kgmaize"));
    assert!(wide.contains("kg-maize-in-masaka"));
}

#[test]
fn max_ngram_of_one_disables_ngrams() {
    let keywords = generate_keywords("fresh red onions", &GenerationOptions::with_max_ngram(1));
    assert_eq!(keywords.into_vec(), vec!["fresh red onions", "fresh", "red", "onions"]);
}

#[test]
fn invalid_max_ngram_falls_back_to_default() {
    let title = "ripe sweet mangoes from gulu district";
    let fallback = generate_keywords(title, &GenerationOptions::with_max_ngram(-2));
    let default = generate_keywords(title, &defaults());

    assert_eq!(fallback, default);
    assert!(default.contains("ripesweetmangoesfrom"));
    assert!(!default.contains("ripesweetmangoesfromgulu"));
}

#[test]
fn case_and_punctuation_do_not_matter() {
    assert_eq!(
        generate_keywords("100 KG Maize!!", &defaults()),
        generate_keywords("100 kg maize", &defaults())
    );
}

#[test]
fn only_the_first_quantity_gets_a_noun_phrase() {
    let keywords = generate_keywords("100 kg Maize and 50 kg Beans", &defaults());

    assert!(keywords.contains("100kg maize"));
    assert!(keywords.contains("50kg"));
    assert!(!keywords.contains("50kg beans"));
}

#[test]
fn missing_and_blank_titles_are_empty() {
    assert!(generate_keywords(None::<String>, &defaults()).is_empty());
    assert!(generate_keywords("", &defaults()).is_empty());
    assert!(generate_keywords("   ", &defaults()).is_empty());
}

#[test]
fn numbers_are_coerced_to_text() {
    let keywords = generate_keywords(2024_i64, &defaults());
    assert_eq!(keywords.into_vec(), vec!["2024"]);
}

#[test]
fn every_keyword_is_already_normalized() {
    let keywords = generate_keywords("\u{201C}Brand New\u{201D} Boda-Boda, Kampala", &defaults());
    assert!(!keywords.is_empty());
    for keyword in keywords.iter() {
        assert_eq!(normalize(keyword), keyword);
    }
}

#[test]
fn extension_lexicon_feeds_generation() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"abbreviations": {{"Sweet Potatoes": ["lumonde"]}}, "informal_variants": {{"sorghum": ["sorghum", "mugusa"]}}}}"#
    )
    .unwrap();

    let generator = KeywordGenerator::new(Lexicon::builtin_with_extension(file.path()).unwrap());
    let keywords = generator.generate("Sweet Potatoes and Sorghum", &defaults());

    assert!(keywords.contains("lumonde"));
    assert!(keywords.contains("mugusa"));
    assert!(keywords.contains("sweet potatoes and mugusa"));
    // built-in entries survive the merge
    assert!(generator.generate("Maize", &defaults()).contains("maze"));
}

#[test]
fn record_serializes_for_indexing() {
    let record = KeywordRecord {
        title: "Maize".to_string(),
        keywords: generate_keywords("Maize", &defaults()),
    };
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["title"], "Maize");
    assert_eq!(json["keywords"], serde_json::json!(["maize", "maze", "mayize"]));
}
