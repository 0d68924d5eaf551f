use serde::{Deserialize, Serialize};

/// Success body of `GET /search?q=...`. `message` may accompany an empty
/// or missing item list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchResponse {
    pub items: Option<Vec<RawSearchItem>>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// One search hit as the backend sends it. Every field is optional so a
/// sparse payload still deserializes; `kind` carries the discriminator
/// (`youtube#video`, `youtube#channel`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSearchItem {
    pub kind: Option<String>,
    pub video_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub channel_id: Option<String>,
    pub channel_title: Option<String>,
    pub published_at: Option<String>,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoHit {
    pub video_id: String,
    pub title: String,
    pub description: String,
    pub channel_id: String,
    pub channel_title: String,
    pub published_at: Option<String>,
    pub thumbnail_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelHit {
    pub channel_id: String,
    pub channel_title: String,
    pub description: String,
    pub thumbnail_url: String,
}

/// Closed form of a search hit. `Unrecognized` keeps its slot in the result
/// list so the list length matches what the backend returned, but renders
/// nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SearchItem {
    Video(VideoHit),
    Channel(ChannelHit),
    Unrecognized,
}

impl SearchItem {
    /// Maps a raw hit onto the closed variant set. The discriminator is a
    /// substring match; `video` wins over `channel` when both appear.
    pub fn classify(raw: RawSearchItem) -> Self {
        let kind = raw.kind.as_deref().unwrap_or_default();
        if kind.contains("video") {
            SearchItem::Video(VideoHit {
                video_id: raw.video_id.unwrap_or_default(),
                title: raw.title.unwrap_or_default(),
                description: raw.description.unwrap_or_default(),
                channel_id: raw.channel_id.unwrap_or_default(),
                channel_title: raw.channel_title.unwrap_or_default(),
                published_at: raw.published_at,
                thumbnail_url: raw.thumbnail_url.unwrap_or_default(),
            })
        } else if kind.contains("channel") {
            SearchItem::Channel(ChannelHit {
                channel_id: raw.channel_id.unwrap_or_default(),
                channel_title: raw.channel_title.unwrap_or_default(),
                description: raw.description.unwrap_or_default(),
                thumbnail_url: raw.thumbnail_url.unwrap_or_default(),
            })
        } else {
            log::warn!("unrecognized search result kind: {:?}", raw.kind);
            SearchItem::Unrecognized
        }
    }
}

/// Settled state of one search request.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Results(Vec<SearchItem>),
    Empty { message: Option<String> },
    Failed { message: String },
}

impl SearchOutcome {
    /// Classifies a parsed success body. Item order is preserved exactly as
    /// received.
    pub fn from_body(body: SearchResponse) -> Self {
        match body.items {
            Some(items) if !items.is_empty() => {
                SearchOutcome::Results(items.into_iter().map(SearchItem::classify).collect())
            }
            _ => SearchOutcome::Empty {
                message: body.message,
            },
        }
    }
}

pub fn find_video<'a>(items: &'a [SearchItem], id: &str) -> Option<&'a VideoHit> {
    items.iter().find_map(|item| match item {
        SearchItem::Video(video) if video.video_id == id => Some(video),
        _ => None,
    })
}

pub fn find_channel<'a>(items: &'a [SearchItem], id: &str) -> Option<&'a ChannelHit> {
    items.iter().find_map(|item| match item {
        SearchItem::Channel(channel) if channel.channel_id == id => Some(channel),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_video(id: &str) -> RawSearchItem {
        RawSearchItem {
            kind: Some("youtube#video".to_string()),
            video_id: Some(id.to_string()),
            title: Some("A title".to_string()),
            description: Some("A description".to_string()),
            channel_id: Some("c1".to_string()),
            channel_title: Some("A channel".to_string()),
            published_at: Some("2024-01-15T10:00:00Z".to_string()),
            thumbnail_url: Some("https://img.example/v.jpg".to_string()),
        }
    }

    fn raw_channel(id: &str) -> RawSearchItem {
        RawSearchItem {
            kind: Some("youtube#channel".to_string()),
            channel_id: Some(id.to_string()),
            channel_title: Some("A channel".to_string()),
            description: Some("About the channel".to_string()),
            thumbnail_url: Some("https://img.example/c.jpg".to_string()),
            ..RawSearchItem::default()
        }
    }

    #[test]
    fn classify_video_kind() {
        match SearchItem::classify(raw_video("v1")) {
            SearchItem::Video(video) => {
                assert_eq!(video.video_id, "v1");
                assert_eq!(video.title, "A title");
                assert_eq!(video.channel_id, "c1");
                assert_eq!(video.published_at.as_deref(), Some("2024-01-15T10:00:00Z"));
            }
            other => panic!("expected video, got {other:?}"),
        }
    }

    #[test]
    fn classify_channel_kind() {
        match SearchItem::classify(raw_channel("c2")) {
            SearchItem::Channel(channel) => {
                assert_eq!(channel.channel_id, "c2");
                assert_eq!(channel.channel_title, "A channel");
            }
            other => panic!("expected channel, got {other:?}"),
        }
    }

    #[test]
    fn classify_unknown_kind() {
        let raw = RawSearchItem {
            kind: Some("youtube#playlist".to_string()),
            ..RawSearchItem::default()
        };
        assert_eq!(SearchItem::classify(raw), SearchItem::Unrecognized);
    }

    #[test]
    fn classify_missing_kind() {
        assert_eq!(
            SearchItem::classify(RawSearchItem::default()),
            SearchItem::Unrecognized
        );
    }

    #[test]
    fn classify_sparse_video_defaults_fields() {
        let raw = RawSearchItem {
            kind: Some("video".to_string()),
            ..RawSearchItem::default()
        };
        match SearchItem::classify(raw) {
            SearchItem::Video(video) => {
                assert_eq!(video.video_id, "");
                assert_eq!(video.title, "");
                assert!(video.published_at.is_none());
            }
            other => panic!("expected video, got {other:?}"),
        }
    }

    #[test]
    fn from_body_keeps_item_order() {
        let body = SearchResponse {
            items: Some(vec![raw_video("v1"), raw_channel("c2"), raw_video("v3")]),
            message: None,
        };
        match SearchOutcome::from_body(body) {
            SearchOutcome::Results(items) => {
                assert_eq!(items.len(), 3);
                assert!(matches!(&items[0], SearchItem::Video(v) if v.video_id == "v1"));
                assert!(matches!(&items[1], SearchItem::Channel(c) if c.channel_id == "c2"));
                assert!(matches!(&items[2], SearchItem::Video(v) if v.video_id == "v3"));
            }
            other => panic!("expected results, got {other:?}"),
        }
    }

    #[test]
    fn from_body_empty_items_carries_message() {
        let body = SearchResponse {
            items: Some(Vec::new()),
            message: Some("no results".to_string()),
        };
        assert_eq!(
            SearchOutcome::from_body(body),
            SearchOutcome::Empty {
                message: Some("no results".to_string())
            }
        );
    }

    #[test]
    fn from_body_missing_items_is_empty() {
        let body = SearchResponse {
            items: None,
            message: None,
        };
        assert_eq!(
            SearchOutcome::from_body(body),
            SearchOutcome::Empty { message: None }
        );
    }

    #[test]
    fn unrecognized_items_still_occupy_a_slot() {
        let body = SearchResponse {
            items: Some(vec![
                raw_video("v1"),
                RawSearchItem {
                    kind: Some("youtube#playlist".to_string()),
                    ..RawSearchItem::default()
                },
            ]),
            message: None,
        };
        match SearchOutcome::from_body(body) {
            SearchOutcome::Results(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[1], SearchItem::Unrecognized);
            }
            other => panic!("expected results, got {other:?}"),
        }
    }

    #[test]
    fn response_deserializes_camel_case() {
        let json = r#"{
            "items": [{
                "kind": "youtube#video",
                "videoId": "abc",
                "title": "t",
                "channelId": "ch",
                "channelTitle": "n",
                "publishedAt": "2024-01-15T10:00:00Z",
                "thumbnailUrl": "https://img.example/t.jpg"
            }]
        }"#;
        let body: SearchResponse = serde_json::from_str(json).unwrap();
        let items = body.items.unwrap();
        assert_eq!(items[0].video_id.as_deref(), Some("abc"));
        assert_eq!(items[0].channel_title.as_deref(), Some("n"));
        assert!(items[0].description.is_none());
    }

    #[test]
    fn find_video_skips_other_variants() {
        let items = vec![
            SearchItem::Unrecognized,
            SearchItem::classify(raw_channel("c2")),
            SearchItem::classify(raw_video("v1")),
        ];
        assert_eq!(
            find_video(&items, "v1").map(|v| v.title.as_str()),
            Some("A title")
        );
        assert!(find_video(&items, "c2").is_none());
        assert!(find_channel(&items, "c2").is_some());
        assert!(find_channel(&items, "missing").is_none());
    }
}
