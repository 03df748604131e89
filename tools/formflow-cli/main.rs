use clap::{Parser, Subcommand};
use formflow::config::EngineConfig;
use formflow::prelude::*;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// Instantiate flow templates, submit answers and resolve form assignments
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the flow store snapshot [env: FORMFLOW_STORE]
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Root directory of per-flow assets [env: FORMFLOW_ASSETS]
    #[arg(long, global = true)]
    assets: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Store the sample templates that are missing
    Seed,
    /// List stored templates
    Templates,
    /// List flow instances, newest first
    List,
    /// Create a new flow from a stored template
    Instantiate { template_id: Uuid },
    /// Merge a submission JSON file into its flow
    Submit { submission_path: PathBuf },
    /// Print the resolved assignments of a flow
    Resolve {
        flow_id: Uuid,
        /// Show suppressed assignments and the values behind each outcome
        #[arg(long)]
        explain: bool,
        /// Collapse duplicate output fields per form, last assignment winning
        #[arg(long, conflicts_with = "explain")]
        collapsed: bool,
    },
    /// Delete a flow instance
    Delete { flow_id: Uuid },
}

fn main() {
    let _ = dotenvy::dotenv();
    init_tracing();
    let cli = Cli::parse();

    let mut config = EngineConfig::from_env();
    if let Some(store) = cli.store {
        config = config.with_store_path(store);
    }
    if let Some(assets) = cli.assets {
        config = config.with_asset_root(assets);
    }

    if let Err(e) = run(cli.command, &config) {
        exit_with_error(&e.to_string());
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(command: Command, config: &EngineConfig) -> Result<()> {
    let store = InMemoryFlowStore::from_file(&config.store_path)?;
    let mut engine = FlowEngine::builder(store)
        .with_provisioner(DirectoryProvisioner::new(&config.asset_root))
        .build();

    let mutated = match command {
        Command::Seed => {
            let inserted = engine.bootstrap_templates()?;
            println!("Seeded {} template(s)", inserted);
            inserted > 0
        }
        Command::Templates => {
            for template in engine.list_templates()? {
                println!("{}  {}  ({})", template.id, template.name, template.description);
            }
            false
        }
        Command::List => {
            for flow in engine.list_instances()? {
                println!(
                    "{}  {}  created {}",
                    flow.id,
                    flow.name,
                    flow.survey.time_created.format("%Y-%m-%d %H:%M:%S")
                );
            }
            false
        }
        Command::Instantiate { template_id } => {
            let flow = engine.instantiate(template_id)?;
            println!("{}", flow.id);
            true
        }
        Command::Submit { submission_path } => {
            let json = fs::read_to_string(&submission_path).map_err(|e| {
                format!(
                    "Failed to read submission file '{}': {}",
                    submission_path.display(),
                    e
                )
            })?;
            let submission: Submission = serde_json::from_str(&json)
                .map_err(|e| format!("Failed to parse submission JSON: {}", e))?;
            let flow = engine.merge_submission(&submission)?;
            println!("{}", serde_json::to_string_pretty(&flow)?);
            true
        }
        Command::Resolve {
            flow_id,
            explain,
            collapsed,
        } => {
            if explain {
                let outcomes = engine.explain(flow_id)?;
                println!("{}", TraceFormatter::format_outcomes(&outcomes));
            } else if collapsed {
                let resolved = engine.resolve(flow_id)?;
                println!("{}", serde_json::to_string_pretty(&collapse_by_form(&resolved))?);
            } else {
                let resolved = engine.resolve(flow_id)?;
                println!("{}", serde_json::to_string_pretty(&resolved)?);
            }
            false
        }
        Command::Delete { flow_id } => {
            engine.delete(flow_id)?;
            println!("Deleted {}", flow_id);
            true
        }
    };

    if mutated {
        engine.into_store().save(&config.store_path)?;
    }
    Ok(())
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
