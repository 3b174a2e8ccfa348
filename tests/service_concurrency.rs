mod common;

use std::collections::HashSet;

#[tokio::test(flavor = "multi_thread")]
async fn test_concurrent_creates_produce_well_formed_codes() {
    let (state, store) = common::create_test_state();
    let service = state.service;

    let mut handles = Vec::with_capacity(1000);
    for i in 0..1000 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service.create(format!("https://example.com/{i}")).await
        }));
    }

    let mut codes = HashSet::new();
    for handle in handles {
        let code = handle.await.unwrap().unwrap();
        assert_eq!(code.len(), 8);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        codes.insert(code);
    }

    assert_eq!(store.len(), 1000);

    // Collisions stay possible under concurrency, so collision-freedom is
    // not asserted; only that the rate is low for a 62^8 code space.
    assert!(codes.len() >= 990, "too many collisions: {}", codes.len());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_concurrent_resolves_do_not_interfere() {
    let (state, store) = common::create_test_state();
    common::seed_redirect(&store, "shared00", "https://example.com/shared").await;

    let service = state.service;

    let mut handles = Vec::with_capacity(100);
    for _ in 0..100 {
        let service = service.clone();
        handles.push(tokio::spawn(async move { service.resolve("shared00").await }));
    }

    for handle in handles {
        let url = handle.await.unwrap().unwrap();
        assert_eq!(url, "https://example.com/shared");
    }
}
