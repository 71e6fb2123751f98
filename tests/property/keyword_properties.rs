use goodspoint_keywords::{GenerationOptions, generate_keywords, normalize, tokenize};
use proptest::prelude::*;
use std::collections::HashSet;

const PLAIN_WORDS: &[&str] = &["fresh", "red", "onions", "sweet", "ripe", "mangoes", "gulu", "lira"];

fn plain_title() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(PLAIN_WORDS), 1..7)
}

proptest! {
    #[test]
    fn normalize_is_idempotent(s in ".{0,200}") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn keywords_are_distinct_and_non_empty(s in ".{0,80}") {
        let keywords = generate_keywords(s.as_str(), &GenerationOptions::default()).into_vec();
        let unique: HashSet<&String> = keywords.iter().collect();

        prop_assert_eq!(unique.len(), keywords.len());
        prop_assert!(keywords.iter().all(|k| !k.is_empty()));
    }

    #[test]
    fn keywords_are_normalized(s in "[A-Za-z0-9 ,.!'-]{0,60}") {
        for keyword in generate_keywords(s.as_str(), &GenerationOptions::default()) {
            prop_assert_eq!(normalize(&keyword), keyword);
        }
    }

    #[test]
    fn normalized_title_and_tokens_are_present(s in "[A-Za-z0-9 ,.!'-]{0,60}") {
        let keywords = generate_keywords(s.as_str(), &GenerationOptions::default());
        let normalized = normalize(&s);

        if normalized.is_empty() {
            prop_assert!(keywords.is_empty());
        } else {
            prop_assert_eq!(keywords.iter().next(), Some(normalized.as_str()));
            for token in tokenize(&s) {
                prop_assert!(keywords.contains(&token));
            }
        }
    }

    #[test]
    fn case_and_punctuation_insensitive(s in "[a-z0-9 ]{0,40}") {
        let shouted = format!("{}!!", s.to_uppercase().replace(' ', ", "));
        prop_assert_eq!(
            generate_keywords(shouted, &GenerationOptions::default()),
            generate_keywords(s, &GenerationOptions::default())
        );
    }

    #[test]
    fn ngram_bound_is_respected(words in plain_title(), max_ngram in 1i64..5) {
        let title = words.join(" ");
        let options = GenerationOptions::with_max_ngram(max_ngram);
        let keywords = generate_keywords(title.as_str(), &options);

        let too_long = max_ngram as usize + 1;
        for window in words.windows(too_long) {
            prop_assert!(!keywords.contains(&window.join("-")));
            prop_assert!(!keywords.contains(&window.concat()));
        }
        for window in words.windows(2).take((max_ngram >= 2) as usize) {
            prop_assert!(keywords.contains(&window.join("-")));
        }
    }
}
