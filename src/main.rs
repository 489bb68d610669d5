//! # GuestDesk — FAQ concierge CLI
//!
//! Loads the FAQ corpus once at startup, then serves ranked searches,
//! persona-driven lookups, staff escalations, and corpus maintenance.
//!
//! Usage:
//!   guestdesk search "pool hours"        # Ranked FAQ search
//!   guestdesk ask "Where is the gym?"    # Best answer via a persona's tool
//!   guestdesk lint --fix                 # Deduplicate + normalize the corpus
//!   guestdesk stats                      # Corpus summary

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use guestdesk_agent::{personas, registry, InteractionLog, InteractionRecord};
use guestdesk_core::types::Escalation;
use guestdesk_core::GuestDeskConfig;
use guestdesk_faq::{lint, score, Corpus, MatchMode, SearchOptions};
use guestdesk_notify::EscalationRouter;

#[derive(Parser)]
#[command(name = "guestdesk", version, about = "GuestDesk — FAQ concierge")]
struct Cli {
    /// Config file (default: ~/.guestdesk/config.toml)
    #[arg(long)]
    config: Option<String>,

    /// Corpus file (overrides config)
    #[arg(long)]
    corpus: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ranked FAQ search: matching records with their scores.
    Search {
        query: String,
        /// Max results (overrides config)
        #[arg(long)]
        top: Option<usize>,
        /// Keyword rule: "bidirectional" or "query-contains" (overrides config)
        #[arg(long)]
        mode: Option<String>,
    },
    /// Ask a persona: runs its FAQ lookup tool and prints the best answer.
    Ask {
        query: String,
        /// Persona name (default from config)
        #[arg(long)]
        persona: Option<String>,
        /// Guest name recorded in the interaction log
        #[arg(long, default_value = "guest")]
        guest: String,
    },
    /// Hand a guest question to human staff.
    Escalate {
        #[arg(long)]
        guest: String,
        #[arg(long)]
        question: String,
    },
    /// Check the corpus for duplicates, unnormalized categories, and empty fields.
    Lint {
        /// Write a deduplicated, category-normalized corpus
        #[arg(long)]
        fix: bool,
        /// Output path for --fix (default: <corpus stem>_fixed.json)
        #[arg(long)]
        output: Option<String>,
    },
    /// Corpus summary: entry count and per-category counts.
    Stats,
    /// List shipped agent personas and their tool sets.
    Personas,
}

fn expand_path(p: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(p).to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "guestdesk=debug" } else { "guestdesk=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let config = match &cli.config {
        Some(path) => GuestDeskConfig::load_from(&expand_path(path))?,
        None => GuestDeskConfig::load()?,
    };
    let corpus_path = expand_path(cli.corpus.as_deref().unwrap_or(&config.corpus_path));

    match cli.command {
        Command::Search { query, top, mode } => {
            let corpus = Corpus::load(&corpus_path)?;
            let mode = resolve_mode(mode.as_deref(), &config)?;
            let options = SearchOptions {
                mode,
                top_n: top.unwrap_or(config.search.top_n),
            };
            let results = corpus.search(&query, options);
            if results.is_empty() {
                println!("No matching FAQ entries.");
            }
            for (i, record) in results.iter().enumerate() {
                println!(
                    "{}. [{}] {} (score {})",
                    i + 1,
                    record.category,
                    record.question,
                    score(record, &query, mode)
                );
                println!("   {}", record.answer);
            }
        }

        Command::Ask { query, persona, guest } => {
            let corpus = Arc::new(Corpus::load(&corpus_path)?);
            let router = Arc::new(EscalationRouter::from_config(&config.escalation));
            let name = persona.as_deref().unwrap_or(&config.default_persona);
            let persona = personas::get(name)?;

            let tools = registry::build_tools(&persona, corpus, router);
            let lookup = registry::find_tool(&tools, "lookup_faq")
                .ok_or_else(|| anyhow::anyhow!("persona '{}' has no FAQ lookup", persona.name))?;

            let args = serde_json::json!({ "query": query }).to_string();
            let result = lookup.execute(&args).await?;
            let value: serde_json::Value = serde_json::from_str(&result.output)?;

            let answer = match value.get("answer") {
                Some(serde_json::Value::String(answer)) => Some(answer.clone()),
                _ => value["results"][0]["answer"].as_str().map(String::from),
            };

            match answer {
                Some(answer) => {
                    println!("{answer}");
                    if config.log.enabled {
                        let log = InteractionLog::new(config.log.capacity);
                        log.record(InteractionRecord::new(&guest, "en", None, &query, &answer));
                        tracing::debug!("{} interaction(s) logged this session", log.len());
                    }
                }
                None => println!("Sorry, I couldn't find an answer to that."),
            }
        }

        Command::Escalate { guest, question } => {
            let router = EscalationRouter::from_config(&config.escalation);
            let escalation = Escalation::new(&guest, &question);
            println!("{}", escalation.staff_message());
            router.dispatch(escalation).await?;
            println!("Escalation sent.");
        }

        Command::Lint { fix, output } => {
            let corpus = Corpus::load(&corpus_path)?;
            let mut records = corpus.records().to_vec();

            let findings = lint::check(&records);
            if findings.is_empty() {
                println!("Corpus clean: {} entries, no findings.", records.len());
            } else {
                println!("{} finding(s):", findings.len());
                for finding in &findings {
                    println!("  entry {}: {:?}", finding.index, finding.issue);
                }
            }

            if fix {
                let normalized = lint::normalize_categories(&mut records);
                let (unique, dropped) = lint::dedup(records);
                let out_path = output
                    .map(|o| expand_path(&o))
                    .unwrap_or_else(|| fixed_path(&corpus_path));
                std::fs::write(&out_path, serde_json::to_string_pretty(&unique)?)?;
                println!(
                    "Fixed corpus written to {} ({} categories normalized, {} duplicates removed)",
                    out_path.display(),
                    normalized,
                    dropped.len()
                );
            }
        }

        Command::Stats => {
            let corpus = Corpus::load(&corpus_path)?;
            println!("Total FAQs: {}", corpus.len());
            println!("Categories:");
            for (category, count) in corpus.category_counts() {
                println!("  {category}: {count}");
            }
        }

        Command::Personas => {
            for persona in personas::all() {
                println!("{} (voice: {})", persona.name, persona.voice);
                println!("  {}", persona.handoff_description);
                println!("  instructions: {}", persona.instructions);
                for spec in &persona.tools {
                    println!("  tool: {}", serde_json::to_string(spec)?);
                }
            }
        }
    }

    Ok(())
}

fn resolve_mode(flag: Option<&str>, config: &GuestDeskConfig) -> Result<MatchMode> {
    let name = flag.unwrap_or(&config.search.mode);
    MatchMode::parse(name)
        .ok_or_else(|| anyhow::anyhow!("unknown match mode '{name}' (bidirectional, query-contains)"))
}

fn fixed_path(corpus_path: &Path) -> PathBuf {
    let stem = corpus_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "corpus".into());
    corpus_path.with_file_name(format!("{stem}_fixed.json"))
}
