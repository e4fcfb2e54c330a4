// Domain rules - Business logic and policies

use crate::domain::errors::*;
use crate::domain::model::*;

/// Conversions between `mm:ss` text and whole seconds
pub struct TimeArithmetic;

impl TimeArithmetic {
    /// Parse an `M:SS` string into total seconds
    ///
    /// Both fields must be plain decimal digits. A seconds field of 60 or more
    /// is accepted and simply added, so `"00:75"` is 75 seconds.
    pub fn parse_to_seconds(text: &str) -> Result<u64, DomainError> {
        let malformed = || DomainError::MalformedTimeInput(text.to_string());

        let (minutes, seconds) = text.trim().split_once(':').ok_or_else(malformed)?;
        let minutes = Self::parse_field(minutes).ok_or_else(malformed)?;
        let seconds = Self::parse_field(seconds).ok_or_else(malformed)?;

        minutes
            .checked_mul(60)
            .and_then(|m| m.checked_add(seconds))
            .ok_or_else(malformed)
    }

    /// Format total seconds as zero-padded `MM:SS`
    ///
    /// The minutes field grows past two digits once the total reaches 6000.
    pub fn format_from_seconds(total_seconds: u64) -> String {
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }

    /// Span between two markers, clamped at `00:00` when `end` is not after `start`
    pub fn duration(start: &str, end: &str) -> Result<String, DomainError> {
        let start_seconds = Self::parse_to_seconds(start)?;
        let end_seconds = Self::parse_to_seconds(end)?;
        Ok(Self::format_from_seconds(
            end_seconds.saturating_sub(start_seconds),
        ))
    }

    fn parse_field(field: &str) -> Option<u64> {
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        field.parse().ok()
    }
}

/// Ordered URL fragments identifying each platform; first match wins
const PLATFORM_FRAGMENTS: &[(&str, Platform)] = &[
    ("youtube.com", Platform::YouTube),
    ("youtu.be", Platform::YouTube),
    ("tiktok.com", Platform::TikTok),
    ("instagram.com", Platform::Instagram),
    ("twitter.com", Platform::Twitter),
    ("x.com", Platform::Twitter),
    ("facebook.com", Platform::Facebook),
    ("twitch.tv", Platform::Twitch),
];

/// Guesses the source platform of a video link
pub struct PlatformDetector;

impl PlatformDetector {
    /// Classify a link by substring matching; never fails
    pub fn detect(url: &str) -> Platform {
        PLATFORM_FRAGMENTS
            .iter()
            .find(|(fragment, _)| url.contains(fragment))
            .map(|(_, platform)| *platform)
            .unwrap_or(Platform::Unknown)
    }

    /// Fragments recognized for a platform, in detection order
    pub fn fragments_for(platform: Platform) -> Vec<&'static str> {
        PLATFORM_FRAGMENTS
            .iter()
            .filter(|(_, p)| *p == platform)
            .map(|(fragment, _)| *fragment)
            .collect()
    }
}

#[cfg(test)]
mod tests;
