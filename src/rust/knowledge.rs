//! The intent table: example phrases used for training and the replies
//! served for each intent.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Name of the fallback intent.
pub const DEFAULT_INTENT: &str = "default";

/// Reply of the built-in `default` intent; also the last resort when a table has no replies to offer.
pub const UNRECOGNIZED_REPLY: &str =
    "I'm sorry, I didn't understand. Could you please rephrase your question?";

#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("Failed to read knowledge file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed knowledge data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid knowledge base: {0}")]
    Invalid(String),
}

/// One category of user request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Training phrases. Blank entries are kept but never trained on.
    #[serde(default)]
    pub examples: Vec<String>,
    /// Candidate replies; one is picked at random per answer.
    pub responses: Vec<String>,
}

impl Intent {
    pub fn new(name: &str, description: &str, examples: &[&str], responses: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            examples: examples.iter().map(|s| s.to_string()).collect(),
            responses: responses.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// The description, or the name when none was given.
    pub fn summary(&self) -> &str {
        if self.description.trim().is_empty() {
            &self.name
        } else {
            &self.description
        }
    }

    /// Examples that are usable for training.
    pub fn training_examples(&self) -> impl Iterator<Item = &str> {
        self.examples
            .iter()
            .map(String::as_str)
            .filter(|e| !e.trim().is_empty())
    }
}

/// Immutable, ordered set of intents. Always contains the `default` intent.
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeBase {
    intents: Vec<Intent>,
}

impl KnowledgeBase {
    /// Builds a knowledge base from intents, validating them.
    pub fn new(intents: Vec<Intent>) -> Result<Self, KnowledgeError> {
        let kb = Self { intents };
        kb.validate()?;
        Ok(kb)
    }

    /// The ABC College admission table.
    pub fn builtin() -> Self {
        let intents = vec![
            Intent::new(
                "greeting",
                "Salutations opening a conversation",
                &["Hi", "Hello", "Hey", "Good morning", "Good evening"],
                &[
                    "Hello! Welcome to ABC College. How can I assist you today?",
                    "Hi there! Are you looking for admission details?",
                ],
            ),
            Intent::new(
                "courses_offered",
                "Which programmes the college runs",
                &[
                    "What courses do you offer?",
                    "Available courses?",
                    "UG programs?",
                    "Engineering branches?",
                ],
                &[
                    "We offer B.E in CSE, ECE, Mechanical, and Civil Engineering.",
                    "Our UG programs include Computer Science, Electronics, Mechanical and Civil Engineering.",
                ],
            ),
            Intent::new(
                "admission_process",
                "How to apply and get admitted",
                &["How to apply for admission?", "Admission process", "How can I join your college?"],
                &[
                    "You can apply online through our official website under the admissions section.",
                    "Admission is usually based on entrance exam scores followed by counseling.",
                ],
            ),
            Intent::new(
                "fees",
                "Tuition and fee structure",
                &["What is the fee structure?", "Annual fees?", "Tuition fees details"],
                &[
                    "The annual fee varies by course, starting from around ₹80,000 per year.",
                    "Please check our official admission portal for detailed fee structure by program.",
                ],
            ),
            Intent::new(
                "scholarship",
                "Scholarships and financial aid",
                &["Do you provide scholarships?", "Any scholarship available?"],
                &[
                    "Yes, scholarships are available for meritorious and economically weaker students.",
                    "We offer government and management scholarships based on eligibility criteria.",
                ],
            ),
            Intent::new(
                "hostel",
                "Hostel facilities",
                &["Do you have hostel facilities?", "Hostel details", "Is hostel available?"],
                &[
                    "Yes, we provide separate hostel facilities for boys and girls with basic amenities.",
                    "Hostel includes Wi-Fi, mess, 24/7 security and medical facilities.",
                ],
            ),
            Intent::new(
                "placements",
                "Placement record and recruiters",
                &["Placement record", "What about placements?", "Company visits?"],
                &[
                    "Our placement cell organizes campus drives with reputed recruiters every year.",
                    "Placement percentages vary by department; check our placement reports for details.",
                ],
            ),
            Intent::new(
                "cutoff",
                "Admission cutoff marks",
                &["Cutoff marks", "What is the cutoff for CSE?", "Last year cutoff?"],
                &[
                    "Cutoffs vary each year and by category — please refer to the official admissions page for accurate cutoffs.",
                ],
            ),
            Intent::new(
                "thanks",
                "Gratitude",
                &["Thanks", "Thank you", "Thanks a lot"],
                &["You're welcome!", "Happy to help 🙂"],
            ),
            Intent::new(
                "goodbye",
                "Ending the conversation",
                &["Bye", "See you", "Goodbye", "Thanks, bye"],
                &[
                    "Goodbye! Feel free to reach out for any more queries.",
                    "Thanks for visiting — all the best!",
                ],
            ),
            Intent::new(
                DEFAULT_INTENT,
                "Anything the bot cannot place",
                &[""],
                &[UNRECOGNIZED_REPLY],
            ),
        ];
        Self { intents }
    }

    /// Parses a JSON array of intents.
    pub fn from_json_str(json: &str) -> Result<Self, KnowledgeError> {
        let intents: Vec<Intent> = serde_json::from_str(json)?;
        Self::new(intents)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, KnowledgeError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| KnowledgeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Checks that the table can serve every request:
    /// - there is at least one intent and names are unique and non-empty
    /// - every intent has at least one reply and no reply is blank
    /// - the `default` intent exists
    pub fn validate(&self) -> Result<(), KnowledgeError> {
        if self.intents.is_empty() {
            return Err(KnowledgeError::Invalid("no intents defined".into()));
        }
        let mut names = HashSet::new();
        for intent in &self.intents {
            if intent.name.trim().is_empty() {
                return Err(KnowledgeError::Invalid("intent name cannot be empty".into()));
            }
            if !names.insert(intent.name.as_str()) {
                return Err(KnowledgeError::Invalid(format!("intent '{}' is defined twice", intent.name)));
            }
            if intent.responses.is_empty() {
                return Err(KnowledgeError::Invalid(format!("intent '{}' has no responses", intent.name)));
            }
            if let Some(pos) = intent.responses.iter().position(|r| r.trim().is_empty()) {
                return Err(KnowledgeError::Invalid(format!(
                    "response {} of intent '{}' is empty",
                    pos + 1,
                    intent.name
                )));
            }
        }
        if !names.contains(DEFAULT_INTENT) {
            return Err(KnowledgeError::Invalid(format!("the '{}' intent is missing", DEFAULT_INTENT)));
        }
        Ok(())
    }

    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    pub fn get(&self, name: &str) -> Option<&Intent> {
        self.intents.iter().find(|i| i.name == name)
    }

    /// Replies for `label`, or the `default` replies when the label is unknown.
    pub fn responses_for(&self, label: &str) -> &[String] {
        self.get(label)
            .or_else(|| self.get(DEFAULT_INTENT))
            .map(|i| i.responses.as_slice())
            .unwrap_or(&[])
    }

    pub fn default_responses(&self) -> &[String] {
        self.responses_for(DEFAULT_INTENT)
    }

    /// Every `(phrase, intent)` pair worth training on, in table order.
    pub fn training_pairs(&self) -> Vec<(&str, &str)> {
        self.intents
            .iter()
            .flat_map(|intent| {
                intent
                    .training_examples()
                    .map(move |example| (example, intent.name.as_str()))
            })
            .collect()
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}
