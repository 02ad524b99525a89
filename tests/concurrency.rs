mod common;

use std::sync::Arc;

use url_shortener_mem::prelude::*;

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_parallel_shorten_same_url_yields_one_link() {
    let state = common::create_test_state();

    let handles: Vec<_> = (0..100)
        .map(|_| {
            let service = state.link_service.clone();
            tokio::spawn(async move { service.shorten("https://example.com/contended").await })
        })
        .collect();

    let mut codes = Vec::with_capacity(handles.len());
    let mut created = 0;
    for handle in handles {
        let outcome = handle.await.unwrap().unwrap();
        created += usize::from(outcome.created);
        codes.push(outcome.mapping.short_code);
    }

    assert_eq!(created, 1);
    codes.dedup();
    assert_eq!(codes.len(), 1);
    assert_eq!(state.link_service.link_count().await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_parallel_mixed_traffic_counts_every_redirect() {
    let state = common::create_test_state();
    let code = state
        .link_service
        .shorten("https://example.com/popular")
        .await
        .unwrap()
        .mapping
        .short_code;

    let mut handles = Vec::new();
    for i in 0..300 {
        let service = state.link_service.clone();
        let code = code.clone();
        handles.push(tokio::spawn(async move {
            match i % 3 {
                0 => {
                    service.resolve(&code).await.unwrap();
                }
                1 => {
                    service.stats(&code).await.unwrap();
                }
                _ => {
                    service
                        .shorten(&format!("https://example.com/other/{}", i))
                        .await
                        .unwrap();
                }
            }
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    let mapping = state.link_service.stats(&code).await.unwrap();
    assert_eq!(mapping.clicks, 100);
    assert_eq!(state.link_service.link_count().await, 101);
}

#[tokio::test]
async fn test_many_links_allocate_unique_codes() {
    let repo = Arc::new(InMemoryMappingRepository::new());

    for i in 0..5_000 {
        let outcome = repo.shorten(&format!("https://example.com/{}", i)).await;
        assert!(outcome.created);
    }

    assert_eq!(repo.len().await, 5_000);
}
