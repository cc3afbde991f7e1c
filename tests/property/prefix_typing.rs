//! Property-based tests for the prefix-replacement guarantee

use human_writer::document::MemoryDocument;
use human_writer::typing::Typist;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn paused_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .unwrap()
}

/// Every intermediate document state is exactly the next prefix of the source
#[test]
fn test_every_state_is_the_next_prefix() {
    let mut runner = proptest::test_runner::TestRunner::new(ProptestConfig::with_cases(64));

    runner
        .run(
            &(any::<String>(), any::<u64>(), ".{0,20}"),
            |(content, seed, leftover)| {
                let mut doc = MemoryDocument::new("/virtual/p.txt", leftover);
                let stats = paused_runtime()
                    .block_on(
                        Typist::new(StdRng::seed_from_u64(seed)).type_document(&mut doc, &content),
                    )
                    .unwrap();

                let chars: Vec<char> = content.chars().collect();
                let history = doc.history();
                prop_assert_eq!(history.len(), chars.len() + 1);
                prop_assert_eq!(&history[0], "");
                for (i, state) in history.iter().enumerate().skip(1) {
                    let prefix: String = chars[..i].iter().collect();
                    prop_assert_eq!(state, &prefix);
                }
                prop_assert_eq!(doc.saved(), vec![content.clone()]);
                prop_assert_eq!(stats.chars_typed, chars.len());
                prop_assert_eq!(stats.edits_skipped, 0);
                Ok(())
            },
        )
        .unwrap();
}
