use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use irms::{
    load_store, read_project_info, read_transcript, render_communication, save_store, write_brd,
    write_json, AnalyzerConfig, Audience, BrdGenerator, EngineConfig, HeuristicAnalyzer,
    LinguisticAnalyzer, NoopAnalyzer, Priority, ProjectInfo, RequirementStore, RequirementUpdate,
    RequirementsEngine, Status,
};

#[derive(Parser)]
#[command(name = "irms")]
#[command(author, version, about = "Extract requirements, user stories and acceptance criteria from meeting transcripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract requirements and stakeholders from a transcript
    Analyze {
        /// Input transcript file (plain text)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the analysis report (JSON)
        #[arg(short, long)]
        output: PathBuf,

        /// Requirement store snapshot to append to (created if missing)
        #[arg(long, default_value = "irms-store.json")]
        store: PathBuf,

        /// Maximum number of requirements recorded per transcript
        #[arg(long, default_value = "5")]
        max_requirements: usize,

        /// Maximum transcript length accepted by the linguistic analyzer
        #[arg(long, default_value = "1000000")]
        max_nlp_length: usize,

        /// Skip linguistic analysis (pattern matching only)
        #[arg(long)]
        no_nlp: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate a business requirements document from stored requirements
    Brd {
        #[arg(long, default_value = "irms-store.json")]
        store: PathBuf,

        /// Requirement ids to include (comma separated)
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<String>,

        /// Project details (JSON)
        #[arg(long)]
        project_info: Option<PathBuf>,

        /// Reference attached diagrams in the appendix
        #[arg(long)]
        include_diagrams: bool,

        /// Output directory for the Markdown document
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        #[arg(short, long)]
        verbose: bool,
    },

    /// Update the user story, status or priority of a requirement
    Update {
        #[arg(long, default_value = "irms-store.json")]
        store: PathBuf,

        #[arg(long)]
        id: String,

        #[arg(long)]
        user_story: Option<String>,

        /// Draft, Reviewed, Approved or Rejected
        #[arg(long)]
        status: Option<Status>,

        /// Low, Medium or High
        #[arg(long)]
        priority: Option<Priority>,

        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the change history of requirements
    History {
        #[arg(long, default_value = "irms-store.json")]
        store: PathBuf,

        /// Only show changes for this requirement
        #[arg(long)]
        id: Option<String>,

        #[arg(short, long)]
        verbose: bool,
    },

    /// Draft a stakeholder announcement for a requirement
    Communicate {
        #[arg(long, default_value = "irms-store.json")]
        store: PathBuf,

        #[arg(long)]
        id: String,

        /// executive, technical or general
        #[arg(long, default_value = "general")]
        audience: String,

        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            output,
            store,
            max_requirements,
            max_nlp_length,
            no_nlp,
            verbose,
        } => {
            setup_logging(verbose);
            let analyzer: Arc<dyn LinguisticAnalyzer> = if no_nlp {
                Arc::new(NoopAnalyzer)
            } else {
                Arc::new(HeuristicAnalyzer::new(AnalyzerConfig {
                    max_length: max_nlp_length,
                }))
            };
            let config = EngineConfig {
                max_requirements,
                ..Default::default()
            };
            analyze_transcript(input, output, store, analyzer, config)
        }
        Commands::Brd {
            store,
            ids,
            project_info,
            include_diagrams,
            output_dir,
            verbose,
        } => {
            setup_logging(verbose);
            generate_brd(store, ids, project_info, include_diagrams, output_dir)
        }
        Commands::Update {
            store,
            id,
            user_story,
            status,
            priority,
            verbose,
        } => {
            setup_logging(verbose);
            let update = RequirementUpdate {
                user_story,
                status,
                priority,
            };
            update_requirement(store, id, update)
        }
        Commands::History { store, id, verbose } => {
            setup_logging(verbose);
            show_history(store, id)
        }
        Commands::Communicate {
            store,
            id,
            audience,
            verbose,
        } => {
            setup_logging(verbose);
            communicate(store, id, Audience::from_tag(&audience))
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn analyze_transcript(
    input: PathBuf,
    output: PathBuf,
    store_path: PathBuf,
    analyzer: Arc<dyn LinguisticAnalyzer>,
    config: EngineConfig,
) -> Result<()> {
    info!("Loading transcript from {:?}", input);
    let transcript = read_transcript(&input)?;
    let mut store = load_store(&store_path)?;

    let engine = RequirementsEngine::new(analyzer, config);
    let outcome = engine
        .analyze(&transcript, &mut store)
        .context("Failed to analyze transcript")?;

    if let Some(message) = &outcome.message {
        info!("{}", message);
    }

    write_json(&outcome, &output)?;
    save_store(&store, &store_path)?;

    info!(
        "Complete: {} of {} requirements recorded, {} stakeholders",
        outcome.requirements.len(),
        outcome.total_found,
        outcome.stakeholders.len()
    );
    info!("Report written to {:?}", output);

    Ok(())
}

fn generate_brd(
    store_path: PathBuf,
    ids: Vec<String>,
    project_info: Option<PathBuf>,
    include_diagrams: bool,
    output_dir: PathBuf,
) -> Result<()> {
    let store = load_store(&store_path)?;
    let project = match project_info {
        Some(path) => read_project_info(&path)?,
        None => ProjectInfo::default(),
    };

    let selected = store.select(&ids);
    let document = BrdGenerator::new()
        .build(&selected, &project, include_diagrams, Utc::now())
        .context("Failed to generate BRD")?;

    let path = output_dir.join(document.filename());
    write_brd(&document, &path)?;

    info!(
        "{} written to {:?} ({} requirements)",
        document.id,
        path,
        document.requirements.len()
    );

    Ok(())
}

fn update_requirement(store_path: PathBuf, id: String, update: RequirementUpdate) -> Result<()> {
    let mut store = load_store(&store_path)?;
    let before = store.changes(Some(id.as_str())).len();

    let record = store
        .update(&id, update)
        .with_context(|| format!("Failed to update {}", id))?;
    save_store(&store, &store_path)?;

    if store.changes(Some(id.as_str())).len() > before {
        info!("Updated {}", id);
    } else {
        info!("No changes to {}", id);
    }
    println!("{}", serde_json::to_string_pretty(&record)?);

    Ok(())
}

fn show_history(store_path: PathBuf, id: Option<String>) -> Result<()> {
    let store = load_store(&store_path)?;
    let history = store.changes(id.as_deref());

    println!("Change History");
    println!("==============");
    if history.is_empty() {
        println!("No changes recorded");
    }
    for entry in &history {
        println!("{} @ {}", entry.requirement_id, entry.timestamp.to_rfc3339());
        for change in &entry.changes {
            println!(
                "  {:?}: {:?} -> {:?}",
                change.field, change.old_value, change.new_value
            );
        }
    }

    Ok(())
}

fn communicate(store_path: PathBuf, id: String, audience: Audience) -> Result<()> {
    let store = load_store(&store_path)?;
    let record = store
        .find(&id)
        .with_context(|| format!("Requirement not found: {}", id))?;

    info!("Drafting {} communication for {}", audience, id);
    println!("{}", render_communication(&record, audience));

    Ok(())
}
