/*!
 * Tests for SRT parsing and serialization
 */

use std::fmt::Write;

use srtserve::errors::SubtitleError;
use srtserve::subtitle_processor::{SubtitleCollection, SubtitleEntry};

use crate::common;

/// Test timestamp parsing and formatting
#[test]
fn test_timestamp_parsing_withValidTimestamp_shouldParseAndFormat() {
    let ts = "01:23:45,678";
    let ms = SubtitleEntry::parse_timestamp(ts).unwrap();
    assert_eq!(ms, 5025678);

    let formatted = SubtitleEntry::format_timestamp(ms);
    assert_eq!(formatted, ts);
}

/// Test timestamp parsing rejects out-of-range components
#[test]
fn test_timestamp_parsing_withInvalidComponents_shouldFail() {
    assert!(SubtitleEntry::parse_timestamp("00:61:00,000").is_err());
    assert!(SubtitleEntry::parse_timestamp("00:00:61,000").is_err());
    assert!(SubtitleEntry::parse_timestamp("not a timestamp").is_err());
}

/// Test subtitle entry display formatting
#[test]
fn test_subtitle_entry_display_withValidEntry_shouldFormatCorrectly() {
    let entry = SubtitleEntry::new(1, 5000, 10000, "Test subtitle".to_string());
    let mut output = String::new();
    write!(output, "{}", entry).unwrap();

    assert!(output.contains("1\n"));
    assert!(output.contains("00:00:05,000 --> 00:00:10,000"));
    assert!(output.contains("Test subtitle"));
    assert!(output.ends_with("\n\n"));
}

/// Test parsing a simple well-formed document
#[test]
fn test_parse_srt_string_withTwoCues_shouldParseBoth() {
    let entries = SubtitleCollection::parse_srt_string(common::TWO_CUE_SRT).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].seq_num, 1);
    assert_eq!(entries[0].start_time_ms, 1000);
    assert_eq!(entries[0].end_time_ms, 2000);
    assert_eq!(entries[0].text, "Hello");
    assert_eq!(entries[1].seq_num, 2);
    assert_eq!(entries[1].text, "World");
}

/// Test parsing of multi-line cue text
#[test]
fn test_parse_srt_string_withMultilineText_shouldJoinLines() {
    let content = "1\n00:00:01,000 --> 00:00:02,000\nLine one\nLine two\n";
    let entries = SubtitleCollection::parse_srt_string(content).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "Line one\nLine two");
}

/// Test parsing of CRLF documents with a BOM
#[test]
fn test_parse_srt_string_withCrlfAndBom_shouldParse() {
    let content = "\u{feff}1\r\n00:00:01,000 --> 00:00:02,000\r\nHello\r\n\r\n2\r\n00:00:03,000 --> 00:00:04,000\r\nWorld\r\n";
    let entries = SubtitleCollection::parse_srt_string(content).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].text, "Hello");
    assert_eq!(entries[1].text, "World");
}

/// Test that input order and original indices survive parsing untouched
#[test]
fn test_parse_srt_string_withNonSequentialIndices_shouldPreserveOrderAndIndices() {
    let content = "7\n00:00:05,000 --> 00:00:06,000\nLater index first\n\n3\n00:00:01,000 --> 00:00:02,000\nEarlier index second\n";
    let entries = SubtitleCollection::parse_srt_string(content).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].seq_num, 7);
    assert_eq!(entries[1].seq_num, 3);
    assert_eq!(entries[0].text, "Later index first");
}

/// Test that a block without a timestamp line fails and names the block
#[test]
fn test_parse_srt_string_withMissingTimestamps_shouldFailWithBlockPosition() {
    let content = "1\n00:00:01,000 --> 00:00:02,000\nGood block\n\n2\nNo timestamp here\n";
    let err = SubtitleCollection::parse_srt_string(content).unwrap_err();

    match err {
        SubtitleError::MissingTimestamps { block } => assert_eq!(block, 2),
        other => panic!("Expected MissingTimestamps, got {:?}", other),
    }
}

/// Test that an unparsable index fails and names the block
#[test]
fn test_parse_srt_string_withInvalidIndex_shouldFailWithBlockPosition() {
    let content = "one\n00:00:01,000 --> 00:00:02,000\nHello\n";
    let err = SubtitleCollection::parse_srt_string(content).unwrap_err();

    match err {
        SubtitleError::InvalidIndex { block, value } => {
            assert_eq!(block, 1);
            assert_eq!(value, "one");
        }
        other => panic!("Expected InvalidIndex, got {:?}", other),
    }
}

/// An hours field too large for u64 fails the block instead of
/// silently becoming a zero timestamp
#[test]
fn test_parse_srt_string_withOverflowingHours_shouldFailWithBlockPosition() {
    let content = "1\n99999999999999999999:00:01,000 --> 00:00:02,000\nHello\n";
    let err = SubtitleCollection::parse_srt_string(content).unwrap_err();
    assert!(matches!(err, SubtitleError::MissingTimestamps { block: 1 }));
}

/// Test that an empty document is rejected
#[test]
fn test_parse_srt_string_withEmptyDocument_shouldFail() {
    let err = SubtitleCollection::parse_srt_string("\n\n  \n").unwrap_err();
    assert!(matches!(err, SubtitleError::EmptyDocument));
}

/// Test that a block with no text lines is rejected
#[test]
fn test_parse_srt_string_withMissingText_shouldFailWithBlockPosition() {
    let content = "1\n00:00:01,000 --> 00:00:02,000\n";
    let err = SubtitleCollection::parse_srt_string(content).unwrap_err();
    assert!(matches!(err, SubtitleError::MissingText { block: 1 }));
}

/// Round-trip: serialize(parse(x)) preserves count, indices, timestamps and text
#[test]
fn test_round_trip_withWellFormedDocument_shouldPreserveEverything() {
    let original = SubtitleCollection::parse_srt_string(common::THREE_CUE_SRT).unwrap();
    let serialized = SubtitleCollection::to_srt_string(&original);
    let reparsed = SubtitleCollection::parse_srt_string(&serialized).unwrap();

    assert_eq!(original.len(), reparsed.len());
    for (a, b) in original.iter().zip(reparsed.iter()) {
        assert_eq!(a, b);
    }
}

/// Test serialization emits blank-line-separated blocks
#[test]
fn test_to_srt_string_withEntries_shouldEmitSrtBlocks() {
    let entries = vec![
        SubtitleEntry::new(1, 1000, 2000, "Hello".to_string()),
        SubtitleEntry::new(2, 3000, 4000, "World".to_string()),
    ];
    let srt = SubtitleCollection::to_srt_string(&entries);

    assert_eq!(
        srt,
        "1\n00:00:01,000 --> 00:00:02,000\nHello\n\n2\n00:00:03,000 --> 00:00:04,000\nWorld\n\n"
    );
}

/// Test writing a collection to disk
#[test]
fn test_write_to_srt_withValidCollection_shouldWriteFile() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.srt");

    let entries = SubtitleCollection::parse_srt_string(common::TWO_CUE_SRT).unwrap();
    let collection = SubtitleCollection::new(path.clone(), entries);
    collection.write_to_srt(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let reparsed = SubtitleCollection::parse_srt_string(&written).unwrap();
    assert_eq!(reparsed.len(), 2);
}
