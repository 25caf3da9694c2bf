//! The conversation shell: an append-only chat log per session, and a
//! line-oriented terminal loop around it.

use std::fmt;
use std::sync::Arc;

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::classifier::{Classifier, IntentModel};
use crate::responder::Responder;

/// Shown instead of a reply when the user submits nothing.
pub const BLANK_SUBMISSION_WARNING: &str = "Please enter a message!";

pub const BANNER: &str = concat!(
    "🎓 ABC College — Admission Enquiry Chatbot\n",
    "💬 Ask about courses (e.g., 'Tell me about CSE'), admissions, fees, hostel, placements, and more.\n",
    "Type /history to show the conversation, /quit to leave.",
);

const QUIT_COMMAND: &str = "/quit";
const HISTORY_COMMAND: &str = "/history";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

impl Speaker {
    pub fn label(self) -> &'static str {
        match self {
            Speaker::User => "You",
            Speaker::Bot => "Bot",
        }
    }

    fn mark(self) -> &'static str {
        match self {
            Speaker::User => "🧑‍💻",
            Speaker::Bot => "🤖",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationEntry {
    pub speaker: Speaker,
    pub message: String,
}

impl fmt::Display for ConversationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.speaker.mark(), self.speaker.label(), self.message)
    }
}

/// Ordered chat log. Entries are only ever appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    entries: Vec<ConversationEntry>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, speaker: Speaker, message: impl Into<String>) {
        self.entries.push(ConversationEntry {
            speaker,
            message: message.into(),
        });
    }

    pub fn entries(&self) -> &[ConversationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The whole log, oldest first, under a heading. Empty when nothing was said.
    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }
        let mut out = String::from("🗨️ Conversation\n");
        for entry in &self.entries {
            out.push_str(&entry.to_string());
            out.push('\n');
        }
        out
    }
}

/// One user's conversation: its own log and random source, sharing a trained responder.
#[derive(Debug)]
pub struct Session<M: IntentModel = Classifier> {
    responder: Arc<Responder<M>>,
    conversation: Conversation,
    rng: StdRng,
}

impl<M: IntentModel> Session<M> {
    /// Starts an empty session. A seed makes the reply variants reproducible.
    pub fn new(responder: Arc<Responder<M>>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            responder,
            conversation: Conversation::new(),
            rng,
        }
    }

    /// Handles one submission.
    ///
    /// Blank input is rejected and leaves the log untouched. Anything else is
    /// answered once, and the message and reply are appended in that order.
    /// Returns the bot's entry.
    pub fn submit(&mut self, input: &str) -> Option<&ConversationEntry> {
        if input.trim().is_empty() {
            debug!("Ignoring blank submission");
            return None;
        }
        let reply = self.responder.respond_with(input, &mut self.rng);
        self.conversation.push(Speaker::User, input);
        self.conversation.push(Speaker::Bot, reply);
        self.conversation.entries.last()
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn responder(&self) -> &Responder<M> {
        &self.responder
    }
}

/// Runs the interactive loop until end of input or `/quit`.
///
/// Each line is one submission; `/history` redraws the log top to bottom.
pub async fn run_shell<M, R, W>(session: &mut Session<M>, reader: R, mut writer: W) -> std::io::Result<()>
where
    M: IntentModel,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(BANNER.as_bytes()).await?;
    writer.write_all(b"\n\n").await?;

    let mut lines = reader.lines();
    loop {
        writer.write_all(b"> ").await?;
        writer.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let output = match line.trim() {
            QUIT_COMMAND => break,
            HISTORY_COMMAND => session.conversation().render(),
            _ => match session.submit(&line) {
                Some(entry) => format!("{}\n", entry),
                None => format!("{}\n", BLANK_SUBMISSION_WARNING),
            },
        };
        writer.write_all(output.as_bytes()).await?;
    }

    writer.write_all(b"\n").await?;
    writer.flush().await
}
