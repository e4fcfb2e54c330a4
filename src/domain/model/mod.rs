// Domain models - Core types and data structures

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Session-unique clip identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClipId(pub u64);

impl fmt::Display for ClipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Source platform guessed from the video link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    YouTube,
    TikTok,
    Instagram,
    Twitter,
    Facebook,
    Twitch,
    Unknown,
}

impl Platform {
    /// Platforms a link can be recognized as, in detection order
    pub const SUPPORTED: [Platform; 6] = [
        Platform::YouTube,
        Platform::TikTok,
        Platform::Instagram,
        Platform::Twitter,
        Platform::Facebook,
        Platform::Twitch,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Platform::YouTube => "YouTube",
            Platform::TikTok => "TikTok",
            Platform::Instagram => "Instagram",
            Platform::Twitter => "Twitter",
            Platform::Facebook => "Facebook",
            Platform::Twitch => "Twitch",
            Platform::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Processing state of a clip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipStatus {
    /// Clip accepted, deferred completion pending
    Processing,
    /// Clip is available
    Ready,
    /// Clip could not be produced
    Error,
}

impl ClipStatus {
    /// Ready and Error never change again
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClipStatus::Ready | ClipStatus::Error)
    }

    /// Check whether moving to `next` is a legal lifecycle step
    pub fn can_transition_to(&self, next: ClipStatus) -> bool {
        matches!(
            (self, next),
            (ClipStatus::Processing, ClipStatus::Ready) | (ClipStatus::Processing, ClipStatus::Error)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClipStatus::Processing => "processing",
            ClipStatus::Ready => "ready",
            ClipStatus::Error => "error",
        }
    }
}

impl fmt::Display for ClipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A clip created during the session
///
/// Everything except `status` is fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipRecord {
    pub id: ClipId,
    pub title: String,
    pub platform: Platform,
    pub source_url: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
    pub status: ClipStatus,
    pub created_at: DateTime<Utc>,
}

impl ClipRecord {
    /// Create a new record in the `Processing` state
    pub fn new(
        id: ClipId,
        title: String,
        platform: Platform,
        source_url: String,
        start_time: String,
        end_time: String,
        duration: String,
    ) -> Self {
        Self {
            id,
            title,
            platform,
            source_url,
            start_time,
            end_time,
            duration,
            status: ClipStatus::Processing,
            created_at: Utc::now(),
        }
    }

    /// Sharing is offered only once the clip is ready
    pub fn is_shareable(&self) -> bool {
        self.status == ClipStatus::Ready
    }
}

/// Change notification delivered to listeners
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ClipEvent {
    /// A record was inserted at the head of the collection
    Created { clip: ClipRecord },
    /// A record moved from one status to another
    StatusChanged {
        id: ClipId,
        from: ClipStatus,
        to: ClipStatus,
    },
}
