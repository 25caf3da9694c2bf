use admission_bot::conversation::{BANNER, BLANK_SUBMISSION_WARNING};
use admission_bot::{
    run_shell, Course, KnowledgeBase, Responder, Session, Speaker, TrainingConfig,
};
use env_logger::{Builder, Env};
use std::sync::Arc;

// Initialize test logger
fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or("warn"))
        .is_test(true)
        .try_init();
}

fn setup_session(seed: u64) -> Session {
    init();
    let responder = Responder::train(KnowledgeBase::builtin(), &TrainingConfig::default())
        .expect("Failed to train responder");
    Session::new(Arc::new(responder), Some(seed))
}

#[test]
fn test_submit_appends_user_then_bot() {
    let mut session = setup_session(1);

    let reply = session.submit("Tell me about CSE").cloned().unwrap();
    assert_eq!(reply.speaker, Speaker::Bot);
    assert_eq!(reply.message, Course::Cse.description());

    let entries = session.conversation().entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].speaker, Speaker::User);
    assert_eq!(entries[0].message, "Tell me about CSE");
    assert_eq!(entries[1], reply);
}

#[test]
fn test_blank_submission_is_not_logged() {
    let mut session = setup_session(1);
    assert!(session.submit("").is_none());
    assert!(session.submit("   ").is_none());
    assert!(session.conversation().is_empty());
}

#[test]
fn test_log_grows_in_order() {
    let mut session = setup_session(3);
    for input in ["Hi", "Hostel details", "Bye"] {
        session.submit(input);
    }
    let speakers: Vec<Speaker> = session.conversation().entries().iter().map(|e| e.speaker).collect();
    assert_eq!(speakers, vec![
        Speaker::User, Speaker::Bot,
        Speaker::User, Speaker::Bot,
        Speaker::User, Speaker::Bot,
    ]);
    assert_eq!(session.conversation().entries()[2].message, "Hostel details");
}

#[test]
fn test_sessions_are_independent() {
    let responder = Arc::new(
        Responder::train(KnowledgeBase::builtin(), &TrainingConfig::default()).unwrap()
    );
    let mut first = Session::new(Arc::clone(&responder), Some(1));
    let mut second = Session::new(responder, Some(1));

    first.submit("Hello");
    first.submit("Annual fees?");
    second.submit("Hello");

    assert_eq!(first.conversation().len(), 4);
    assert_eq!(second.conversation().len(), 2);
    // Same seed, same first reply
    assert_eq!(first.conversation().entries()[1], second.conversation().entries()[1]);
}

#[tokio::test]
async fn test_shell_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let mut session = setup_session(5);
    let input: &[u8] = b"Tell me about mechanical\n\n/history\n/quit\nnever read\n";
    let mut output = Vec::new();

    run_shell(&mut session, input, &mut output).await?;
    let output = String::from_utf8(output)?;

    assert!(output.starts_with(BANNER));
    assert!(output.contains("🤖 Bot: **Mechanical Engineering**"));
    assert!(output.contains(BLANK_SUBMISSION_WARNING));
    assert!(output.contains("🗨️ Conversation\n🧑‍💻 You: Tell me about mechanical\n"));
    assert!(!output.contains("never read"));
    assert_eq!(session.conversation().len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_shell_stops_at_end_of_input() -> Result<(), Box<dyn std::error::Error>> {
    let mut session = setup_session(5);
    let input: &[u8] = b"\xF0\x9F\x99\x82 hi\nThanks";
    let mut output = Vec::new();

    run_shell(&mut session, input, &mut output).await?;

    assert_eq!(session.conversation().len(), 4);
    assert_eq!(session.conversation().entries()[2].message, "Thanks");
    Ok(())
}
