use crate::{IconKind, Status};

/// WHAT: Status vocabulary maps to the expected icon kinds
/// WHY: This table decides what the user sees for every daemon state
#[test]
fn given_status_words_when_parsing_then_icon_kind_matches_table() {
    let table = [
        ("busy", Status::Busy, IconKind::Busy),
        ("index", Status::Index, IconKind::Busy),
        ("idle", Status::Idle, IconKind::Idle),
        ("none", Status::None, IconKind::Pause),
        ("paused", Status::Paused, IconKind::Pause),
    ];

    for (word, status, kind) in table {
        // When: Parsing the word
        let parsed = Status::parse(word);

        // Then: Variant and icon kind match, and the word round-trips
        assert_eq!(parsed, status);
        assert_eq!(parsed.icon_kind(), kind, "status {word}");
        assert_eq!(parsed.to_string(), word);
    }
}

/// WHAT: Anything outside the vocabulary renders the error icon
/// WHY: Unknown daemon output must be visible rather than silently ignored
#[test]
fn given_unknown_words_when_parsing_then_unrecognized_with_error_icon() {
    for word in ["no_net", "", "Busy", "error", "indexing"] {
        // When: Parsing an unknown word
        let status: Status = word.into();

        // Then: It keeps the raw word and shows the error icon
        assert_eq!(status, Status::Unrecognized(word.to_string()));
        assert_eq!(status.icon_kind(), IconKind::Error);
        assert!(!status.is_animated());
    }
}

/// WHAT: Only busy and index are animated
/// WHY: The ticker runs exactly for animated statuses
#[test]
fn given_each_status_when_checking_animation_then_only_busy_and_index() {
    assert!(Status::Busy.is_animated());
    assert!(Status::Index.is_animated());
    assert!(!Status::Idle.is_animated());
    assert!(!Status::None.is_animated());
    assert!(!Status::Paused.is_animated());
}

/// WHAT: FromStr never fails for status words
/// WHY: Status parsing is infallible by contract
#[test]
fn given_any_word_when_using_from_str_then_ok() {
    // When: Parsing through str::parse
    let parsed: Result<Status, _> = "whatever".parse();

    // Then: It succeeds with the unrecognized variant
    assert_eq!(parsed, Ok(Status::Unrecognized("whatever".to_string())));
}
