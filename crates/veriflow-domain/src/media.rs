//! Media type and platform enumerations
//!
//! Both sets are closed and finite. Dispatch on media type is an exhaustive
//! match everywhere; adding a variant is a deliberate, explicit change that
//! the compiler then walks through every call site.

use serde::{Deserialize, Serialize};

/// Media type a claim or piece of evidence was observed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Written content (posts, articles, captions)
    Text,

    /// Still images (photos, screenshots, memes)
    Image,

    /// Audio content (podcasts, voice messages)
    Audio,

    /// Video content
    Video,
}

impl MediaType {
    /// Get the media type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Text => "text",
            MediaType::Image => "image",
            MediaType::Audio => "audio",
            MediaType::Video => "video",
        }
    }

    /// Parse a media type from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(MediaType::Text),
            "image" => Some(MediaType::Image),
            "audio" => Some(MediaType::Audio),
            "video" => Some(MediaType::Video),
            _ => None,
        }
    }
}

impl std::str::FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid media type: {}", s))
    }
}

/// Platform where a claim originated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// Twitter / X
    Twitter,

    /// Facebook
    Facebook,

    /// Instagram
    Instagram,

    /// YouTube
    Youtube,

    /// TikTok
    Tiktok,

    /// News websites and wire services
    NewsWebsite,

    /// Podcast feeds
    Podcast,

    /// Anything else
    Other,
}

impl Platform {
    /// Get the platform name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Youtube => "youtube",
            Platform::Tiktok => "tiktok",
            Platform::NewsWebsite => "news_website",
            Platform::Podcast => "podcast",
            Platform::Other => "other",
        }
    }

    /// Parse a platform from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "twitter" => Some(Platform::Twitter),
            "facebook" => Some(Platform::Facebook),
            "instagram" => Some(Platform::Instagram),
            "youtube" => Some(Platform::Youtube),
            "tiktok" => Some(Platform::Tiktok),
            "news_website" => Some(Platform::NewsWebsite),
            "podcast" => Some(Platform::Podcast),
            "other" => Some(Platform::Other),
            _ => None,
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid platform: {}", s))
    }
}
