use std::rc::Rc;

use yew::prelude::*;

use crate::models::{SearchItem, SearchOutcome};

/// App-lifetime search state shared across views. Any view may read the
/// last result list without refetching; the search page is the only writer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub results: Vec<SearchItem>,
    pub error: Option<String>,
}

impl Reducible for SearchState {
    type Action = SearchOutcome;

    fn reduce(self: Rc<Self>, action: SearchOutcome) -> Rc<Self> {
        match action {
            SearchOutcome::Results(results) => Rc::new(SearchState {
                results,
                error: None,
            }),
            SearchOutcome::Empty { message } => Rc::new(SearchState {
                results: Vec::new(),
                error: message,
            }),
            SearchOutcome::Failed { message } => Rc::new(SearchState {
                results: Vec::new(),
                error: Some(message),
            }),
        }
    }
}

pub type SearchStore = UseReducerHandle<SearchState>;

#[derive(Properties, PartialEq)]
pub struct SearchProviderProps {
    pub children: Html,
}

/// Owns the store for the lifetime of the app. Mounted once in `main.rs`.
#[function_component(SearchProvider)]
pub fn search_provider(props: &SearchProviderProps) -> Html {
    let store = use_reducer(SearchState::default);

    html! {
        <ContextProvider<SearchStore> context={store}>
            { props.children.clone() }
        </ContextProvider<SearchStore>>
    }
}

#[hook]
pub fn use_search_store() -> SearchStore {
    use_context::<SearchStore>().expect("SearchProvider is mounted at the app root")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChannelHit, VideoHit};

    fn video(id: &str) -> SearchItem {
        SearchItem::Video(VideoHit {
            video_id: id.to_string(),
            title: "t".to_string(),
            description: String::new(),
            channel_id: "c".to_string(),
            channel_title: "ch".to_string(),
            published_at: None,
            thumbnail_url: String::new(),
        })
    }

    fn channel(id: &str) -> SearchItem {
        SearchItem::Channel(ChannelHit {
            channel_id: id.to_string(),
            channel_title: "ch".to_string(),
            description: String::new(),
            thumbnail_url: String::new(),
        })
    }

    #[test]
    fn results_replace_list_and_clear_error() {
        let state = Rc::new(SearchState {
            results: vec![video("old")],
            error: Some("previous failure".to_string()),
        });
        let next = state.reduce(SearchOutcome::Results(vec![video("a"), channel("b")]));
        assert_eq!(next.results.len(), 2);
        assert!(matches!(&next.results[0], SearchItem::Video(v) if v.video_id == "a"));
        assert!(next.error.is_none());
    }

    #[test]
    fn empty_outcome_clears_list_and_sets_message() {
        let state = Rc::new(SearchState {
            results: vec![video("old")],
            error: None,
        });
        let next = state.reduce(SearchOutcome::Empty {
            message: Some("no results".to_string()),
        });
        assert!(next.results.is_empty());
        assert_eq!(next.error.as_deref(), Some("no results"));
    }

    #[test]
    fn empty_outcome_without_message_leaves_error_unset() {
        let state = Rc::new(SearchState::default());
        let next = state.reduce(SearchOutcome::Empty { message: None });
        assert!(next.results.is_empty());
        assert!(next.error.is_none());
    }

    #[test]
    fn failed_outcome_clears_list_and_sets_message() {
        let state = Rc::new(SearchState {
            results: vec![video("old"), channel("c")],
            error: None,
        });
        let next = state.reduce(SearchOutcome::Failed {
            message: "rate limited".to_string(),
        });
        assert!(next.results.is_empty());
        assert_eq!(next.error.as_deref(), Some("rate limited"));
    }
}
