//! Reservoir sampling: uniformity, eligibility and line numbering.

use linedex::testing::MemoryIndex;
use linedex::{ingest, tokens, NoopObserver, ReservoirSampler, StopWords};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Cursor;

#[test]
fn test_selection_is_uniform() {
    const TOKENS: u64 = 5;
    const TRIALS: u64 = 20_000;

    let mut counts = [0u64; TOKENS as usize];
    for seed in 0..TRIALS {
        let mut sampler = ReservoirSampler::new(StdRng::seed_from_u64(seed));
        for i in 0..TOKENS {
            sampler.offer(&format!("w{}", i), i);
        }
        let sample = sampler.into_state().sample.unwrap();
        counts[sample.line_index as usize] += 1;
    }

    let expected = TRIALS / TOKENS;
    for (i, &n) in counts.iter().enumerate() {
        // seven standard deviations at p = 1/5
        assert!(n.abs_diff(expected) < 400, "token {} chosen {} times", i, n);
    }
}

#[test]
fn test_uniform_across_lines_of_unequal_length() {
    // Four eligible tokens, three of them on line 0
    let corpus = "cat sat mat\nthe dog\n";
    let mut dog = 0u32;
    for seed in 0..4_000u64 {
        let summary = ingest(
            Cursor::new(corpus),
            &StopWords::english(),
            MemoryIndex::new().sink(),
            StdRng::seed_from_u64(seed),
            &mut NoopObserver,
        )
        .unwrap();
        if summary.sample.unwrap().word == "dog" {
            dog += 1;
        }
    }
    assert!((850..1150).contains(&dog), "dog chosen {} times", dog);
}

fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("the".to_string()),
        Just("and".to_string()),
        Just("Of,".to_string()),
        Just("1999".to_string()),
        "[a-z]{1,8}",
        "[A-Z][a-z]{0,6}[.!?]?",
    ]
}

fn corpus_lines() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            1 => Just(String::new()),
            4 => prop::collection::vec(word(), 1..6).prop_map(|w| w.join(" ")),
        ],
        0..24,
    )
}

proptest! {
    #[test]
    fn prop_stop_words_never_sampled(lines in corpus_lines(), seed in any::<u64>()) {
        let stop_words = StopWords::english();
        let corpus = lines.join("\n");
        let summary = ingest(
            Cursor::new(corpus),
            &stop_words,
            MemoryIndex::new().sink(),
            StdRng::seed_from_u64(seed),
            &mut NoopObserver,
        )
        .unwrap();

        let eligible: Vec<String> = lines
            .iter()
            .flat_map(|l| tokens(l))
            .filter(|t| stop_words.is_eligible(t))
            .collect();
        prop_assert_eq!(summary.eligible_tokens, eligible.len() as u64);

        match summary.sample {
            Some(sample) => {
                prop_assert!(!stop_words.contains(&sample.word));
                prop_assert!(eligible.contains(&sample.word));
            }
            None => prop_assert!(eligible.is_empty()),
        }
    }

    #[test]
    fn prop_doc_ids_skip_empty_lines(lines in corpus_lines(), seed in any::<u64>()) {
        let index = MemoryIndex::new();
        let summary = ingest(
            Cursor::new(lines.join("\n")),
            &StopWords::english(),
            index.sink(),
            StdRng::seed_from_u64(seed),
            &mut NoopObserver,
        )
        .unwrap();

        let expected: Vec<&str> = lines.iter().map(String::as_str).filter(|l| !l.is_empty()).collect();
        let docs = index.documents();
        prop_assert_eq!(summary.lines, expected.len() as u64);
        prop_assert_eq!(docs.len(), expected.len());
        for (i, (doc, text)) in docs.iter().zip(&expected).enumerate() {
            prop_assert_eq!(doc.doc_id, i as u64);
            prop_assert_eq!(doc.text.as_str(), *text);
        }

        if let Some(sample) = summary.sample {
            let line = docs[sample.line_index as usize].text.as_str();
            prop_assert!(tokens(line).any(|t| t == sample.word));
        }
    }
}
