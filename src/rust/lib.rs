//! An admission-enquiry chatbot for a fictional college.
//!
//! Replies come from two places: a course lookup that returns a fixed
//! programme description whenever a course keyword is mentioned, and an
//! intent classifier (TF-IDF features, multinomial logistic regression)
//! trained once at startup from a small table of example phrases.
//!
//! # Basic Usage
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use admission_bot::{KnowledgeBase, Responder, TrainingConfig};
//!
//! let responder = Responder::train(KnowledgeBase::builtin(), &TrainingConfig::default())?;
//!
//! assert_eq!(responder.respond(""), "Please enter a message.");
//! assert!(responder.respond("Tell me about mechanical").starts_with("**Mechanical Engineering**"));
//! println!("{}", responder.respond("Hi"));
//! # Ok(())
//! # }
//! ```
//!
//! # Sessions
//!
//! A trained responder is read-only, so several sessions can share it
//! through `Arc`, each with its own conversation log:
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use admission_bot::{KnowledgeBase, Responder, Session, TrainingConfig};
//! use std::sync::Arc;
//!
//! let responder = Arc::new(Responder::train(KnowledgeBase::builtin(), &TrainingConfig::default())?);
//! let mut alice = Session::new(Arc::clone(&responder), Some(1));
//! let mut bob = Session::new(responder, Some(2));
//!
//! alice.submit("Hostel details");
//! bob.submit("Thanks");
//! assert_eq!(alice.conversation().len(), 2);
//! assert_eq!(bob.conversation().len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod config;
pub mod conversation;
pub mod courses;
pub mod knowledge;
pub mod responder;

pub use classifier::{Classifier, ClassifierBuilder, ClassifierError, ClassifierInfo, ClassDefinition, IntentModel};
pub use config::TrainingConfig;
pub use conversation::{Conversation, ConversationEntry, Session, Speaker, run_shell};
pub use courses::{Course, detect_course};
pub use knowledge::{Intent, KnowledgeBase, KnowledgeError, DEFAULT_INTENT};
pub use responder::{Responder, EMPTY_INPUT_REPLY};

pub fn init_logger() {
    env_logger::init();
}
