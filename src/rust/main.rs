use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use admission_bot::{run_shell, KnowledgeBase, Responder, Session, TrainingConfig};
use anyhow::Context;
use clap::Parser;
use log::info;
use tokio::io::{stdin, stdout, BufReader};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for picking reply variants, for reproducible conversations
    #[arg(long, env = "ADMISSION_BOT_SEED")]
    seed: Option<u64>,

    /// JSON file with an alternative intent table
    #[arg(long, env = "ADMISSION_BOT_KNOWLEDGE")]
    knowledge: Option<PathBuf>,

    /// Maximum gradient descent steps while training
    #[arg(long, default_value_t = TrainingConfig::default().max_iter)]
    max_iter: usize,

    /// Inverse regularisation strength
    #[arg(long, default_value_t = TrainingConfig::default().regularization)]
    regularization: f32,

    #[arg(long, default_value_t = TrainingConfig::default().learning_rate)]
    learning_rate: f32,

    /// Answer these messages and exit instead of starting the shell
    #[arg(short, long)]
    message: Vec<String>,
}

impl Args {
    fn training_config(&self) -> TrainingConfig {
        TrainingConfig {
            max_iter: self.max_iter,
            regularization: self.regularization,
            learning_rate: self.learning_rate,
            ..TrainingConfig::default()
        }
    }

    fn knowledge_base(&self) -> anyhow::Result<KnowledgeBase> {
        match &self.knowledge {
            Some(path) => {
                info!("Loading intents from {:?}", path);
                KnowledgeBase::from_json_file(path)
                    .with_context(|| format!("could not load intents from {}", path.display()))
            }
            None => Ok(KnowledgeBase::builtin()),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start_time = Instant::now();
    info!("Training responder...");
    let responder = Responder::train(args.knowledge_base()?, &args.training_config())
        .context("failed to train the intent classifier")?;
    info!("=== Responder Trained (took {:.2?}) ===", start_time.elapsed());

    let mut session = Session::new(Arc::new(responder), args.seed);

    if !args.message.is_empty() {
        for message in &args.message {
            match session.submit(message) {
                Some(entry) => println!("{}", entry),
                None => eprintln!("{}", admission_bot::conversation::BLANK_SUBMISSION_WARNING),
            }
        }
        return Ok(());
    }

    run_shell(&mut session, BufReader::new(stdin()), stdout()).await?;
    info!("Session ended after {} messages", session.conversation().len());
    Ok(())
}
