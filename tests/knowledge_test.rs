use admission_bot::{KnowledgeBase, KnowledgeError, Responder, TrainingConfig};
use std::io::Write;
use tempfile::NamedTempFile;

const LIBRARY_TABLE: &str = r#"[
    {
        "name": "library",
        "description": "Library facilities",
        "examples": ["Library timings?", "Is the library open on Sunday?"],
        "responses": ["The library is open 8am to 8pm, all week."]
    },
    {
        "name": "sports",
        "examples": ["Sports facilities?", "Is there a football ground?"],
        "responses": ["We have a football ground and an indoor stadium."]
    },
    {
        "name": "default",
        "examples": [""],
        "responses": ["Sorry, I only know about the library and sports."]
    }
]"#;

#[test]
fn test_load_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = NamedTempFile::new()?;
    file.write_all(LIBRARY_TABLE.as_bytes())?;

    let knowledge = KnowledgeBase::from_json_file(file.path())?;
    assert_eq!(knowledge.intents().len(), 3);
    assert_eq!(knowledge.training_pairs().len(), 4);
    Ok(())
}

#[test]
fn test_custom_table_drives_responder() -> Result<(), Box<dyn std::error::Error>> {
    let knowledge = KnowledgeBase::from_json_str(LIBRARY_TABLE)?;
    let responder = Responder::train(knowledge, &TrainingConfig::default())?;

    assert_eq!(responder.respond("library timings"), "The library is open 8am to 8pm, all week.");
    assert_eq!(responder.respond("football?"), "We have a football ground and an indoor stadium.");
    assert_eq!(responder.respond("canteen menu"), "Sorry, I only know about the library and sports.");
    // Course lookup is independent of the table
    assert!(responder.respond("civil").starts_with("**Civil Engineering**"));
    Ok(())
}

#[test]
fn test_missing_file() {
    let result = KnowledgeBase::from_json_file("/definitely/not/here.json");
    assert!(matches!(result, Err(KnowledgeError::Io { .. })));
}

#[test]
fn test_table_without_default_is_rejected() {
    let json = r#"[{"name": "library", "examples": ["Library?"], "responses": ["Open."]}]"#;
    assert!(matches!(KnowledgeBase::from_json_str(json), Err(KnowledgeError::Invalid(_))));
}
