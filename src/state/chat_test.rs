use super::*;

// =============================================================
// parse_sources
// =============================================================

#[test]
fn parse_sources_splits_and_trims() {
    assert_eq!(parse_sources(Some("A.pdf, B.pdf")), vec!["A.pdf", "B.pdf"]);
}

#[test]
fn parse_sources_none_yields_empty_list() {
    assert!(parse_sources(None).is_empty());
}

#[test]
fn parse_sources_empty_string_yields_empty_list() {
    assert!(parse_sources(Some("")).is_empty());
}

#[test]
fn parse_sources_drops_blank_tokens() {
    assert_eq!(parse_sources(Some("a.pdf,, b.pdf ,")), vec!["a.pdf", "b.pdf"]);
}

#[test]
fn parse_sources_keeps_order() {
    assert_eq!(
        parse_sources(Some("note1.pdf,note2.pdf")),
        vec!["note1.pdf", "note2.pdf"]
    );
}

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_is_idle_and_empty() {
    let state = ChatState::default();
    assert!(state.turns().is_empty());
    assert!(!state.is_awaiting());
}

// =============================================================
// submit
// =============================================================

#[test]
fn submit_appends_user_turn_and_awaits() {
    let mut state = ChatState::default();
    let sent = state.submit("What is the diagnosis?");
    assert_eq!(sent.as_deref(), Some("What is the diagnosis?"));
    assert!(state.is_awaiting());
    assert_eq!(state.turns().len(), 1);
    assert_eq!(state.turns()[0].role, Role::User);
    assert_eq!(state.turns()[0].text, "What is the diagnosis?");
    assert!(state.turns()[0].sources.is_empty());
}

#[test]
fn submit_trims_the_question() {
    let mut state = ChatState::default();
    let sent = state.submit("  hello  ");
    assert_eq!(sent.as_deref(), Some("hello"));
    assert_eq!(state.turns()[0].text, "hello");
}

#[test]
fn submit_empty_is_a_noop() {
    let mut state = ChatState::default();
    assert!(state.submit("").is_none());
    assert!(state.turns().is_empty());
    assert!(!state.is_awaiting());
}

#[test]
fn submit_whitespace_only_is_a_noop() {
    let mut state = ChatState::default();
    assert!(state.submit("   \t  ").is_none());
    assert!(state.turns().is_empty());
    assert!(!state.is_awaiting());
}

#[test]
fn submit_while_awaiting_is_a_noop() {
    let mut state = ChatState::default();
    assert!(state.submit("first").is_some());
    assert!(state.submit("second").is_none());
    assert_eq!(state.turns().len(), 1);
}

// =============================================================
// resolve / resolve_error
// =============================================================

#[test]
fn resolve_appends_assistant_turn_with_sources() {
    let mut state = ChatState::default();
    state.submit("What is the diagnosis?");
    state.resolve("Diabetes".to_owned(), Some("note1.pdf,note2.pdf"));

    assert!(!state.is_awaiting());
    assert_eq!(state.turns().len(), 2);
    let answer = &state.turns()[1];
    assert_eq!(answer.role, Role::Assistant);
    assert_eq!(answer.text, "Diabetes");
    assert_eq!(answer.sources, vec!["note1.pdf", "note2.pdf"]);
}

#[test]
fn resolve_without_sources_yields_empty_list() {
    let mut state = ChatState::default();
    state.submit("q");
    state.resolve("a".to_owned(), None);
    assert!(state.turns()[1].sources.is_empty());
}

#[test]
fn resolve_error_appends_fallback_turn() {
    let mut state = ChatState::default();
    state.submit("q");
    state.resolve_error();

    assert!(!state.is_awaiting());
    assert_eq!(state.turns().len(), 2);
    assert_eq!(state.turns()[1].role, Role::Assistant);
    assert_eq!(state.turns()[1].text, FALLBACK_ANSWER);
    assert!(state.turns()[1].sources.is_empty());
}

#[test]
fn each_accepted_submission_grows_transcript_by_exactly_two() {
    let mut state = ChatState::default();
    for i in 0..3 {
        let before = state.turns().len();
        assert!(state.submit(&format!("question {i}")).is_some());
        if i % 2 == 0 {
            state.resolve(format!("answer {i}"), None);
        } else {
            state.resolve_error();
        }
        assert_eq!(state.turns().len(), before + 2);
    }
}

#[test]
fn transcript_preserves_insertion_order() {
    let mut state = ChatState::default();
    state.submit("one");
    state.resolve("two".to_owned(), None);
    state.submit("three");
    state.resolve("four".to_owned(), None);

    let texts: Vec<&str> = state.turns().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["one", "two", "three", "four"]);
}
