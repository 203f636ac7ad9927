use super::*;
use crate::state::transcript::Origin;
use crate::test_support::ScriptedClient;

const GREETING: &str = "Hello! How can I help you today?";
const ERROR_REPLY: &str = "Sorry, something went wrong.";

fn seeded() -> ConversationState {
    let mut state = ConversationState::default();
    state.reseed_if_empty(GREETING);
    state
}

fn contents(state: &ConversationState) -> Vec<(Origin, &str)> {
    state.messages().iter().map(|m| (m.origin, m.content.as_str())).collect()
}

// =============================================================
// submit
// =============================================================

#[test]
fn submit_appends_user_message_and_enters_awaiting_reply() {
    let mut state = seeded();
    state.set_draft("hi");

    let turn = state.submit("hi").unwrap();

    assert_eq!(turn.prompt(), "hi");
    assert!(state.is_pending());
    assert_eq!(state.draft(), "");
    assert_eq!(contents(&state), [(Origin::Assistant, GREETING), (Origin::User, "hi")]);
}

#[test]
fn submit_rejects_blank_text_without_changes() {
    let mut state = seeded();
    state.set_draft("   ");

    assert_eq!(state.submit("").unwrap_err(), SubmitRejected::Empty);
    assert_eq!(state.submit(" \n\t").unwrap_err(), SubmitRejected::Empty);

    assert!(!state.is_pending());
    assert_eq!(state.draft(), "   ");
    assert_eq!(state.messages().len(), 1);
}

#[test]
fn submit_while_awaiting_reply_is_rejected_without_changes() {
    let mut state = seeded();
    let _first = state.submit("hi").unwrap();
    let phase = state.phase();
    state.set_draft("next");

    let err = state.submit("next").unwrap_err();

    assert_eq!(err, SubmitRejected::Busy);
    assert_eq!(err.error_code(), "E_SUBMIT_BUSY");
    assert!(err.retryable());
    assert_eq!(state.phase(), phase);
    assert_eq!(state.draft(), "next");
    assert_eq!(state.messages().len(), 2);
}

#[test]
fn submit_keeps_text_as_typed() {
    let mut state = seeded();
    let turn = state.submit("  padded  ").unwrap();
    assert_eq!(turn.prompt(), "  padded  ");
    assert_eq!(state.messages()[1].content, "  padded  ");
}

// =============================================================
// resolve
// =============================================================

#[tokio::test]
async fn successful_turn_appends_reply_and_returns_to_idle() {
    let client = ScriptedClient::with(vec![Ok("Hello back".to_owned())]);
    let mut state = seeded();

    let turn = state.submit("hi").unwrap();
    let resolution = turn.run(&client).await;
    assert!(state.resolve(resolution, ERROR_REPLY));

    assert!(!state.is_pending());
    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(
        contents(&state),
        [(Origin::Assistant, GREETING), (Origin::User, "hi"), (Origin::Assistant, "Hello back")]
    );
    assert_eq!(*client.prompts.borrow(), ["hi"]);
}

#[tokio::test]
async fn failed_turn_appends_fixed_error_copy_not_raw_error() {
    let client = ScriptedClient::with(vec![Err(CompletionError::Status { status: 502 })]);
    let mut state = seeded();

    let turn = state.submit("hi").unwrap();
    assert!(state.resolve(turn.run(&client).await, ERROR_REPLY));

    let last = state.messages().last().unwrap();
    assert_eq!(last.origin, Origin::Assistant);
    assert_eq!(last.content, ERROR_REPLY);
    assert!(!last.content.contains("502"));
    assert!(!state.is_pending());
}

#[tokio::test]
async fn second_submission_is_rejected_until_first_resolves() {
    let client = ScriptedClient::with(vec![Ok("first".to_owned()), Ok("second".to_owned())]);
    let mut state = seeded();

    let first = state.submit("hi").unwrap();
    assert_eq!(state.submit("next").unwrap_err(), SubmitRejected::Busy);
    assert_eq!(state.messages().len(), 2);

    assert!(state.resolve(first.run(&client).await, ERROR_REPLY));
    let second = state.submit("next").unwrap();
    assert!(state.resolve(second.run(&client).await, ERROR_REPLY));

    assert_eq!(*client.prompts.borrow(), ["hi", "next"]);
    assert_eq!(state.messages().len(), 5);
}

#[tokio::test]
async fn transcript_grows_by_two_per_accepted_turn_regardless_of_outcome() {
    let client = ScriptedClient::with(vec![
        Ok("a".to_owned()),
        Err(CompletionError::Transport("reset".to_owned())),
        Ok("c".to_owned()),
        Err(CompletionError::Malformed("eof".to_owned())),
    ]);
    let mut state = seeded();
    let mut accepted = 0;

    for text in ["one", "", "two", "   ", "three", "four"] {
        let Ok(turn) = state.submit(text) else {
            continue;
        };
        accepted += 1;
        assert!(state.resolve(turn.run(&client).await, ERROR_REPLY));
        assert!(!state.is_pending());
    }

    assert_eq!(accepted, 4);
    assert_eq!(state.messages().len(), 1 + 2 * accepted);
    let assistant_replies = state.messages().iter().filter(|m| m.origin == Origin::Assistant).count();
    assert_eq!(assistant_replies, 1 + accepted);
}

#[test]
fn resolution_for_a_conversation_that_is_not_awaiting_it_is_discarded() {
    let mut state = seeded();
    let stale = state.submit("hi").unwrap().settle(Ok("late".to_owned()));

    let mut idle = seeded();
    assert!(!idle.resolve(stale, ERROR_REPLY));

    assert_eq!(idle.messages().len(), 1);
    assert_eq!(idle.phase(), Phase::Idle);
    assert!(state.is_pending());
}

#[test]
fn old_turn_resolution_cannot_close_a_newer_turn() {
    let mut state = seeded();
    let mut other = seeded();

    let first = state.submit("one").unwrap();
    assert!(state.resolve(first.settle(Ok("r1".to_owned())), ERROR_REPLY));
    let second = state.submit("two").unwrap();
    assert_eq!(state.phase(), Phase::AwaitingReply { turn: 1 });

    let foreign = other.submit("elsewhere").unwrap().settle(Ok("wrong".to_owned()));
    assert!(!state.resolve(foreign, ERROR_REPLY));
    assert!(state.is_pending());
    assert_eq!(state.messages().len(), 4);

    assert!(state.resolve(second.settle(Ok("r2".to_owned())), ERROR_REPLY));
    assert_eq!(state.messages().last().unwrap().content, "r2");
}

// =============================================================
// reseed
// =============================================================

#[test]
fn reseed_on_empty_state_restores_single_greeting() {
    let mut state = ConversationState::new(Transcript::default());
    assert!(state.reseed_if_empty(GREETING));
    assert!(!state.reseed_if_empty(GREETING));
    assert_eq!(contents(&state), [(Origin::Assistant, GREETING)]);
}
