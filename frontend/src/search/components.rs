use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::use_search_store;
use crate::models::{ChannelHit, SearchItem, VideoHit};
use crate::router::Route;
use crate::utils::{format_number, format_relative_time, mock_view_count};

/// Number of placeholder rows shown while a fetch is pending.
pub const SKELETON_ROW_COUNT: usize = 10;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub query: String,
    pub loading: bool,
    pub on_search: Callback<String>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let current_input = use_state(|| props.query.clone());

    let on_input = {
        let current_input = current_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            current_input.set(input_value);
        })
    };

    let on_submit = {
        let on_search = props.on_search.clone();
        let current_input = current_input.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default(); // Prevent default form submission (page reload)
            on_search.emit((*current_input).clone());
        })
    };

    html! {
        <form onsubmit={on_submit} class="flex mb-4">
            <input
                type="text"
                class="flex-grow p-3 bg-gray-800 text-white border border-gray-600 rounded-l-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                placeholder="Search videos and channels..."
                value={(*current_input).clone()}
                oninput={on_input}
                disabled={props.loading}
            />
            <button
                type="submit"
                class="bg-blue-600 text-white p-3 rounded-r-lg hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:opacity-50"
                disabled={props.loading}
            >
                { if props.loading { "Searching..." } else { "Search" } }
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorNoticeProps {
    pub message: String,
}

#[function_component(ErrorNotice)]
pub fn error_notice(props: &ErrorNoticeProps) -> Html {
    html! {
        <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
            { &props.message }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoRowProps {
    pub video: VideoHit,
}

#[function_component(VideoRow)]
pub fn video_row(props: &VideoRowProps) -> Html {
    let video = &props.video;

    html! {
        <div class="flex flex-col sm:flex-row gap-4">
            <Link<Route> to={Route::Video { id: video.video_id.clone() }} classes="flex-1">
                <img
                    class="w-full aspect-video rounded-lg object-cover cursor-pointer"
                    src={video.thumbnail_url.clone()}
                    alt="thumbnail"
                />
            </Link<Route>>
            <div class="flex-[2] flex flex-col gap-1">
                <Link<Route>
                    to={Route::Video { id: video.video_id.clone() }}
                    classes="font-bold text-white cursor-pointer"
                >
                    { &video.title }
                </Link<Route>>
                <div class="flex items-center gap-2 text-sm text-gray-400">
                    <span>{ format!("{} views", format_number(mock_view_count() as i64)) }</span>
                    <span class="block w-1 h-1 rounded-full bg-gray-400"></span>
                    {
                        if let Some(published_at) = &video.published_at {
                            html! { <span>{ format_relative_time(published_at) }</span> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <div class="flex items-center gap-3 mt-1">
                    <img
                        class="w-9 h-9 rounded-full"
                        src="/static/images/avatar/1.jpg"
                        alt={video.channel_title.clone()}
                    />
                    <Link<Route>
                        to={Route::Channel { id: video.channel_id.clone() }}
                        classes="font-semibold text-sm text-gray-200 hover:underline"
                    >
                        { &video.channel_title }
                    </Link<Route>>
                </div>
                <p class="text-sm text-gray-400 line-clamp-1">{ &video.description }</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ChannelRowProps {
    pub channel: ChannelHit,
}

#[function_component(ChannelRow)]
pub fn channel_row(props: &ChannelRowProps) -> Html {
    let channel = &props.channel;

    html! {
        <div class="flex flex-col sm:flex-row items-center gap-4">
            <Link<Route> to={Route::Channel { id: channel.channel_id.clone() }} classes="w-1/5">
                <img
                    class="w-full aspect-square rounded-full object-cover cursor-pointer"
                    src={channel.thumbnail_url.clone()}
                    alt="thumbnail"
                />
            </Link<Route>>
            <div class="flex-[2] flex flex-col gap-1">
                <Link<Route>
                    to={Route::Channel { id: channel.channel_id.clone() }}
                    classes="text-xl font-bold text-white cursor-pointer"
                >
                    { &channel.channel_title }
                </Link<Route>>
                <p class="text-sm text-gray-400">{ &channel.description }</p>
            </div>
        </div>
    }
}

#[function_component(SkeletonRow)]
pub fn skeleton_row() -> Html {
    html! {
        <div class="flex flex-col sm:flex-row gap-4 animate-pulse">
            <div class="flex-1 aspect-video rounded bg-gray-500/10"></div>
            <div class="flex-[2] flex flex-col gap-2">
                <div class="h-4 rounded bg-gray-500/10"></div>
                <div class="h-4 rounded bg-gray-500/10"></div>
                <div class="flex items-center gap-3 mt-1">
                    <div class="w-10 aspect-square rounded-full bg-gray-500/10"></div>
                    <div class="flex-1 h-4 rounded bg-gray-500/10"></div>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SearchResultsViewProps {
    pub loading: bool,
}

/// Renders the shared result list in backend order. Skeleton rows are
/// appended while a fetch is pending, on top of whatever is already shown.
#[function_component(SearchResultsView)]
pub fn search_results_view(props: &SearchResultsViewProps) -> Html {
    let store = use_search_store();

    html! {
        <div class="flex flex-col gap-8 mx-3 mt-8">
            {
                if let Some(message) = store.error.as_ref().filter(|_| store.results.is_empty()) {
                    html! { <ErrorNotice message={message.clone()} /> }
                } else {
                    html! {}
                }
            }
            { for store.results.iter().map(|item| match item {
                SearchItem::Video(video) => html! { <VideoRow video={video.clone()} /> },
                SearchItem::Channel(channel) => html! { <ChannelRow channel={channel.clone()} /> },
                SearchItem::Unrecognized => html! {},
            }) }
            {
                if props.loading {
                    (0..SKELETON_ROW_COUNT)
                        .map(|_| html! { <SkeletonRow /> })
                        .collect::<Html>()
                } else {
                    html! {}
                }
            }
        </div>
    }
}
