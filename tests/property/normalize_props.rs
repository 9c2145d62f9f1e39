//! Normalization laws.

use linedex::{normalize, tokens};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_output_is_ascii_lowercase_run(word in "\\PC{0,24}") {
        let out = normalize(&word);
        prop_assert!(out.chars().all(|c| c.is_ascii_lowercase()), "{:?} -> {:?}", word, out);
        prop_assert!(word.to_lowercase().contains(&out));
    }

    #[test]
    fn prop_normalize_is_idempotent(word in "\\PC{0,24}") {
        let once = normalize(&word);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_plain_words_pass_through(word in "[a-z]{1,16}") {
        prop_assert_eq!(normalize(&word), word.clone());
        prop_assert_eq!(normalize(&word.to_uppercase()), word);
    }

    #[test]
    fn prop_tokens_are_never_empty(line in "[a-zA-Z0-9 ,.'!?-]{0,64}") {
        let toks: Vec<String> = tokens(&line).collect();
        prop_assert!(toks.len() <= line.split_whitespace().count());
        for t in &toks {
            prop_assert!(!t.is_empty());
            prop_assert!(!t.contains(char::is_whitespace));
        }
    }
}
