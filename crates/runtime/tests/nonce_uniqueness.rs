//! Nonce uniqueness under concurrent generation.

use std::collections::HashSet;
use std::thread;

use strato_runtime::get_nonce;

const THREADS: usize = 16;
const CALLS_PER_THREAD: usize = 625; // 16 * 625 = 10_000

#[test]
fn ten_thousand_concurrent_nonces_are_distinct() {
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            thread::spawn(|| {
                (0..CALLS_PER_THREAD)
                    .map(|_| get_nonce())
                    .collect::<Vec<String>>()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for nonce in handle.join().expect("generator thread panicked") {
            assert!(seen.insert(nonce), "nonce collision");
        }
    }

    assert_eq!(seen.len(), THREADS * CALLS_PER_THREAD);
}

#[test]
fn nonces_are_well_formed() {
    for _ in 0..100 {
        let nonce = get_nonce();
        assert_eq!(nonce.len(), 32);
        assert!(nonce.bytes().all(|b| b.is_ascii_hexdigit()));
    }
}
