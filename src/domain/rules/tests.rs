// Unit tests for business rules

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::*;

#[test]
fn test_parse_to_seconds() {
    assert_eq!(TimeArithmetic::parse_to_seconds("00:00").unwrap(), 0);
    assert_eq!(TimeArithmetic::parse_to_seconds("01:30").unwrap(), 90);
    assert_eq!(TimeArithmetic::parse_to_seconds("1:05").unwrap(), 65);
    assert_eq!(TimeArithmetic::parse_to_seconds("120:00").unwrap(), 7200);
    assert_eq!(TimeArithmetic::parse_to_seconds(" 02:00 ").unwrap(), 120);
}

#[test]
fn test_parse_accepts_overflowing_seconds_field() {
    assert_eq!(TimeArithmetic::parse_to_seconds("00:75").unwrap(), 75);
}

#[test]
fn test_parse_malformed_input() {
    for input in ["ab:cd", "", "90", "1:2:3", ":30", "01:", "-1:00", "+1:00", "1.5:00", "01: 30"] {
        assert_eq!(
            TimeArithmetic::parse_to_seconds(input),
            Err(DomainError::MalformedTimeInput(input.to_string())),
            "input {:?} should be rejected",
            input
        );
    }
}

#[test]
fn test_parse_overflow_is_malformed() {
    let huge = format!("{}:00", u64::MAX);
    assert!(matches!(
        TimeArithmetic::parse_to_seconds(&huge),
        Err(DomainError::MalformedTimeInput(_))
    ));
}

#[test]
fn test_format_from_seconds() {
    assert_eq!(TimeArithmetic::format_from_seconds(0), "00:00");
    assert_eq!(TimeArithmetic::format_from_seconds(5), "00:05");
    assert_eq!(TimeArithmetic::format_from_seconds(61), "01:01");
    assert_eq!(TimeArithmetic::format_from_seconds(5999), "99:59");
    assert_eq!(TimeArithmetic::format_from_seconds(6000), "100:00");
}

#[test]
fn test_duration_scenarios() {
    assert_eq!(TimeArithmetic::duration("00:00", "01:00").unwrap(), "01:00");
    assert_eq!(TimeArithmetic::duration("01:00", "00:30").unwrap(), "00:00");
    assert_eq!(TimeArithmetic::duration("00:05", "00:20").unwrap(), "00:15");
    assert_eq!(TimeArithmetic::duration("02:00", "02:00").unwrap(), "00:00");
}

#[test]
fn test_duration_propagates_malformed_marker() {
    assert_eq!(
        TimeArithmetic::duration("00:00", "soon"),
        Err(DomainError::MalformedTimeInput("soon".to_string()))
    );
    assert_eq!(
        TimeArithmetic::duration("x", "01:00"),
        Err(DomainError::MalformedTimeInput("x".to_string()))
    );
}

#[test]
fn test_duration_matches_difference_when_ordered() {
    let markers = ["00:00", "00:07", "00:59", "01:00", "03:30", "10:00", "99:59"];
    for a in markers {
        for b in markers {
            let a_secs = TimeArithmetic::parse_to_seconds(a).unwrap();
            let b_secs = TimeArithmetic::parse_to_seconds(b).unwrap();
            let expected = if a_secs <= b_secs {
                TimeArithmetic::format_from_seconds(b_secs - a_secs)
            } else {
                "00:00".to_string()
            };
            assert_eq!(TimeArithmetic::duration(a, b).unwrap(), expected);
        }
    }
}

#[test]
fn test_format_parse_round_trip() {
    for x in ["00:00", "00:59", "01:00", "12:34", "59:59", "100:01"] {
        let seconds = TimeArithmetic::parse_to_seconds(x).unwrap();
        assert_eq!(TimeArithmetic::format_from_seconds(seconds), x);
    }
}

#[test]
fn test_detect_platforms() {
    let cases = [
        ("https://www.youtube.com/watch?v=abc", Platform::YouTube),
        ("https://youtu.be/abc123", Platform::YouTube),
        ("https://tiktok.com/@x/video/1", Platform::TikTok),
        ("https://www.instagram.com/reel/xyz", Platform::Instagram),
        ("https://twitter.com/user/status/1", Platform::Twitter),
        ("https://x.com/user/status/1", Platform::Twitter),
        ("https://facebook.com/watch/?v=1", Platform::Facebook),
        ("https://www.twitch.tv/videos/1", Platform::Twitch),
        ("https://example.com", Platform::Unknown),
        ("", Platform::Unknown),
        ("not a url at all", Platform::Unknown),
    ];
    for (url, expected) in cases {
        assert_eq!(PlatformDetector::detect(url), expected, "url {:?}", url);
    }
}

#[test]
fn test_detect_first_match_wins() {
    // Both fragments present: YouTube precedes Twitter in the table
    let url = "https://x.com/share?u=https://youtube.com/watch?v=1";
    assert_eq!(PlatformDetector::detect(url), Platform::YouTube);
}

#[test]
fn test_fragments_for() {
    assert_eq!(
        PlatformDetector::fragments_for(Platform::YouTube),
        vec!["youtube.com", "youtu.be"]
    );
    assert_eq!(
        PlatformDetector::fragments_for(Platform::Twitter),
        vec!["twitter.com", "x.com"]
    );
    assert!(PlatformDetector::fragments_for(Platform::Unknown).is_empty());
    for platform in Platform::SUPPORTED {
        assert!(!PlatformDetector::fragments_for(platform).is_empty());
    }
}
