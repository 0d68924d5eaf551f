use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::use_search_store;
use crate::env_variable_utils::get_app_name;
use crate::models::{find_channel, find_video};
use crate::search::api::run_search;
use crate::search::components::{SearchBar, SearchResultsView};
use crate::storage::{LocalStorageCache, ResultsCache};
use crate::utils::format_relative_time;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/video/:id")]
    Video { id: String },
    #[at("/channel/:id")]
    Channel { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <SearchPage /> },
        Route::Video { id } => html! { <VideoPage id={id} /> },
        Route::Channel { id } => html! { <ChannelPage id={id} /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-900">
                <div class="bg-gray-800 p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-white mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-blue-400 hover:underline">
                        {"Go back to search"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

/// Reads the `q` search parameter from the current URL.
pub fn get_query_param() -> Option<String> {
    let href = web_sys::window()?.location().href().ok()?;
    let url = web_sys::Url::new(&href).ok()?;
    url.search_params().get("q")
}

/// Mirrors the submitted term back into the URL without reloading the page.
fn update_query_param(query: &str) {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        let Ok(href) = location.href() else { return };
        let Ok(url) = web_sys::Url::new(&href) else { return };
        url.search_params().set("q", query);

        if let Ok(history) = window.history() {
            let _ =
                history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url.href()));
        }
    }
}

#[function_component(SearchPage)]
pub fn search_page() -> Html {
    let store = use_search_store();
    let search_term = use_state(|| get_query_param().unwrap_or_default());
    let loading = use_state(|| false);
    let issued_term = use_state(String::default);
    let active_term = use_mut_ref(String::new);

    // One fetch per distinct non-empty term. An empty term issues nothing
    // and leaves the prior shared state untouched.
    {
        let store = store.clone();
        let loading = loading.clone();
        let issued_term = issued_term.clone();
        let active_term = active_term.clone();
        let term = (*search_term).clone();

        use_effect(move || {
            if !term.is_empty() && *issued_term != term {
                issued_term.set(term.clone());
                *active_term.borrow_mut() = term.clone();
                loading.set(true);

                wasm_bindgen_futures::spawn_local(async move {
                    run_search(term, store, LocalStorageCache, loading, active_term).await;
                });
            }
            || ()
        });
    }

    let on_search = {
        let search_term = search_term.clone();
        Callback::from(move |query: String| {
            update_query_param(&query);
            search_term.set(query);
        })
    };

    html! {
        <div class="min-h-screen flex flex-col items-center bg-gray-900 p-4">
            <div class="w-full max-w-3xl">
                <h1 class="text-3xl font-bold text-center text-white my-6">
                    { get_app_name() }
                </h1>
                <SearchBar
                    query={(*search_term).clone()}
                    loading={*loading}
                    on_search={on_search}
                />
                <SearchResultsView loading={*loading} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DetailPageProps {
    pub id: String,
}

#[function_component(VideoPage)]
pub fn video_page(props: &DetailPageProps) -> Html {
    let store = use_search_store();

    // Fall back to the persisted slot when the store is empty, e.g. right
    // after a full page reload.
    let cached = if store.results.is_empty() {
        LocalStorageCache.load()
    } else {
        None
    };
    let results = cached.as_deref().unwrap_or(&store.results);

    match find_video(results, &props.id) {
        Some(video) => html! {
            <div class="min-h-screen flex justify-center bg-gray-900 p-6">
                <div class="w-full max-w-3xl flex flex-col gap-3">
                    <div class="w-full aspect-video rounded-lg bg-black"></div>
                    <h1 class="text-2xl font-bold text-white">{ &video.title }</h1>
                    {
                        if let Some(published_at) = &video.published_at {
                            html! {
                                <p class="text-sm text-gray-400">
                                    { format_relative_time(published_at) }
                                </p>
                            }
                        } else {
                            html! {}
                        }
                    }
                    <Link<Route>
                        to={Route::Channel { id: video.channel_id.clone() }}
                        classes="font-semibold text-gray-200 hover:underline"
                    >
                        { &video.channel_title }
                    </Link<Route>>
                    <p class="text-gray-400">{ &video.description }</p>
                </div>
            </div>
        },
        None => not_found_notice("This video is not part of the last search."),
    }
}

#[function_component(ChannelPage)]
pub fn channel_page(props: &DetailPageProps) -> Html {
    let store = use_search_store();

    let cached = if store.results.is_empty() {
        LocalStorageCache.load()
    } else {
        None
    };
    let results = cached.as_deref().unwrap_or(&store.results);

    match find_channel(results, &props.id) {
        Some(channel) => html! {
            <div class="min-h-screen flex justify-center bg-gray-900 p-6">
                <div class="w-full max-w-3xl flex flex-col items-center gap-3">
                    <img
                        class="w-32 aspect-square rounded-full object-cover"
                        src={channel.thumbnail_url.clone()}
                        alt="thumbnail"
                    />
                    <h1 class="text-2xl font-bold text-white">{ &channel.channel_title }</h1>
                    <p class="text-gray-400 text-center">{ &channel.description }</p>
                </div>
            </div>
        },
        None => not_found_notice("This channel is not part of the last search."),
    }
}

fn not_found_notice(message: &str) -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-900">
            <div class="bg-gray-800 p-8 rounded-lg shadow-lg text-center">
                <p class="text-gray-300 mb-4">{ message }</p>
                <Link<Route> to={Route::Home} classes="text-blue-400 hover:underline">
                    {"Go back to search"}
                </Link<Route>>
            </div>
        </div>
    }
}
