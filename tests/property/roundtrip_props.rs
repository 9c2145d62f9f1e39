//! Whatever is sampled from a generated corpus is found again in tantivy.

use linedex::{ingest, verify, LineIndex, NoopObserver, StopWords, TermSearcher, VerifyOutcome};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Cursor;

fn line() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Za-z]{0,2}[a-z]{1,6}[,.;!]?|[0-9]{1,4}|the|a", 1..8)
        .prop_map(|w| w.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_sampled_token_is_found(
        lines in prop::collection::vec(line(), 1..20),
        seed in any::<u64>(),
    ) {
        let index = LineIndex::create_in_ram().unwrap();
        let writer = index.writer(15_000_000).unwrap();
        let summary = ingest(
            Cursor::new(lines.join("\n")),
            &StopWords::english(),
            writer,
            StdRng::seed_from_u64(seed),
            &mut NoopObserver,
        )
        .unwrap();

        let reader = index.reader().unwrap();
        prop_assert_eq!(reader.num_docs(), lines.len() as u64);

        let outcome = verify(&reader, summary.sample.as_ref(), 1000, &mut NoopObserver).unwrap();
        match (&summary.sample, outcome) {
            (Some(sample), VerifyOutcome::Verified(v)) => {
                prop_assert_eq!(v.doc_id, sample.line_index);
                prop_assert_eq!(&v.word, &sample.word);
            }
            (None, VerifyOutcome::Skipped) => {}
            (sample, outcome) => prop_assert!(false, "{:?} gave {:?}", sample, outcome),
        }
    }
}
