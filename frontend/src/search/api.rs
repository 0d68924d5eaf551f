use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use yew::prelude::*;

use crate::context::SearchStore;
use crate::env_variable_utils::API_BASE_URL;
use crate::models::{ErrorResponse, SearchOutcome, SearchResponse};
use crate::storage::ResultsCache;

/// Runs one search request to completion and publishes the outcome into the
/// shared store and the persisted cache slot. `active_term` holds the term
/// the view currently cares about; a completion tagged with an older term is
/// discarded so it cannot clobber the newer request's state.
pub async fn run_search<C: ResultsCache>(
    term: String,
    store: SearchStore,
    cache: C,
    loading: UseStateHandle<bool>,
    active_term: Rc<RefCell<String>>,
) {
    let outcome = fetch_search_results(&term).await;

    if *active_term.borrow() != term {
        log::debug!("discarding stale search response for {:?}", term);
        return;
    }

    sync_cache(&cache, &outcome);
    store.dispatch(outcome);
    loading.set(false);
}

pub async fn fetch_search_results(term: &str) -> SearchOutcome {
    let url = format!(
        "{}/search?q={}",
        &*API_BASE_URL,
        urlencoding::encode(term)
    );

    match Request::get(&url).send().await {
        Ok(response) => {
            if response.ok() {
                match response.json::<SearchResponse>().await {
                    Ok(body) => SearchOutcome::from_body(body),
                    Err(e) => SearchOutcome::Failed {
                        message: format!("Failed to parse response: {}", e),
                    },
                }
            } else {
                let status = response.status();
                match response.text().await {
                    Ok(error_text) => SearchOutcome::Failed {
                        message: error_message_from_body(status, &error_text),
                    },
                    Err(_) => SearchOutcome::Failed {
                        message: format!("Search failed with status: {}", status),
                    },
                }
            }
        }
        Err(e) => SearchOutcome::Failed {
            message: format!("Network error: {}", e),
        },
    }
}

/// Prefers the backend's structured error body over raw error text.
pub fn error_message_from_body(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(error_response) => error_response.message,
        Err(_) => format!("Search failed ({}): {}", status, body),
    }
}

/// Write-through mirror: a successful list overwrites the slot, everything
/// else deletes it. Storage failures are logged, never surfaced.
pub fn sync_cache<C: ResultsCache>(cache: &C, outcome: &SearchOutcome) {
    let result = match outcome {
        SearchOutcome::Results(items) => cache.store(items),
        SearchOutcome::Empty { .. } | SearchOutcome::Failed { .. } => cache.clear(),
    };
    if let Err(e) = result {
        log::warn!("search results cache update failed: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RawSearchItem, SearchItem};
    use crate::storage::MemoryCache;

    fn some_items() -> Vec<SearchItem> {
        vec![SearchItem::classify(RawSearchItem {
            kind: Some("youtube#video".to_string()),
            video_id: Some("v1".to_string()),
            ..RawSearchItem::default()
        })]
    }

    #[test]
    fn error_message_prefers_structured_body() {
        assert_eq!(
            error_message_from_body(429, r#"{"message":"rate limited"}"#),
            "rate limited"
        );
    }

    #[test]
    fn error_message_falls_back_to_raw_text() {
        assert_eq!(
            error_message_from_body(500, "boom"),
            "Search failed (500): boom"
        );
    }

    #[test]
    fn results_outcome_overwrites_the_slot() {
        let cache = MemoryCache::default();
        let items = some_items();
        sync_cache(&cache, &SearchOutcome::Results(items.clone()));
        assert_eq!(cache.raw(), Some(serde_json::to_string(&items).unwrap()));
    }

    #[test]
    fn empty_outcome_deletes_the_slot() {
        let cache = MemoryCache::default();
        cache.store(&some_items()).unwrap();
        sync_cache(
            &cache,
            &SearchOutcome::Empty {
                message: Some("no results".to_string()),
            },
        );
        assert!(cache.raw().is_none());
    }

    #[test]
    fn failed_outcome_deletes_the_slot() {
        let cache = MemoryCache::default();
        cache.store(&some_items()).unwrap();
        sync_cache(
            &cache,
            &SearchOutcome::Failed {
                message: "rate limited".to_string(),
            },
        );
        assert!(cache.raw().is_none());
    }
}
