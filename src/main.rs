use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;

use tie_strength::contacts::RawContact;
use tie_strength::scoring::ContactFactors;
use tie_strength::wizard::{TriggerKind, WizardError};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;
const EXIT_WIZARD: i32 = 5;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a contact from a YAML factors file
    Score {
        /// File with optional `engagement`, `origin` and `network` sections
        file: PathBuf,
        /// Print the full breakdown as JSON
        #[arg(long)]
        json: bool,
    },
    /// Categorize response times (e.g. "45m", "36h", "2d")
    Respond {
        #[arg(required = true)]
        durations: Vec<String>,
    },
    /// Normalize and de-duplicate a JSON array of contacts
    Import {
        file: PathBuf,
        /// Print the import report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Step through composing an outreach trigger
    Wizard {
        #[command(subcommand)]
        action: Option<WizardCommand>,
    },
    /// Write a config file with every default spelled out
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
enum WizardCommand {
    /// Show the current step and draft (default)
    Show,
    /// Set the contact the outreach is for
    SetContact { contact: String },
    /// Set the trigger: follow-up, check-in, introduction or event-invite
    SetTrigger { trigger: String },
    /// Set the outreach message
    SetMessage { message: String },
    /// Set when the outreach is due, relative to now (e.g. "3d")
    SetDue { after: String },
    /// Move to the next step
    Next,
    /// Move back one step
    Back,
    /// Discard the draft and start over
    Reset,
    /// Print the composed record and clear the wizard
    Submit,
}

impl WizardCommand {
    /// Whether the command edits the draft and needs saving afterwards.
    /// Reset and submit clear the state file instead.
    fn changes_state(&self) -> bool {
        !matches!(
            self,
            WizardCommand::Show | WizardCommand::Reset | WizardCommand::Submit
        )
    }
}

#[derive(Parser, Debug)]
#[command(name = "tie-strength")]
#[command(about = "Connection strength scoring for your contacts", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/tie-strength/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    let start_time = Instant::now();
    let config_path = cli.config.map(PathBuf::from);

    if let Commands::Init { force } = cli.command {
        match tie_strength::config::write_default_config(config_path, force) {
            Ok(path) => {
                println!("Config written to {}", path.display());
                std::process::exit(EXIT_SUCCESS);
            }
            Err(e) => {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    }

    let config = match tie_strength::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let effective_scoring = config.effective_scoring();
    if let Err(errors) = tie_strength::scoring::validate_scoring(&effective_scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if cli.verbose {
        eprintln!(
            "Scoring weights: {}",
            if config.scoring.is_some() { "from config" } else { "defaults" }
        );
    }

    let use_colors = tie_strength::output::should_use_colors();

    let result = match cli.command {
        Commands::Score { file, json } => {
            run_score(&file, json, &effective_scoring, cli.verbose, use_colors)
        }
        Commands::Respond { durations } => run_respond(&durations, use_colors),
        Commands::Import { file, json } => {
            run_import(&file, json, &config.effective_import(), cli.verbose, use_colors)
        }
        Commands::Wizard { action } => {
            run_wizard(action.unwrap_or(WizardCommand::Show), cli.verbose, use_colors)
        }
        Commands::Init { .. } => unreachable!("handled before config load"),
    };

    if let Err(e) = result {
        if let Some(wizard_err) = e.downcast_ref::<WizardError>() {
            eprintln!("Wizard: {}", wizard_err);
            std::process::exit(EXIT_WIZARD);
        }
        eprintln!("Error: {:#}", e);
        std::process::exit(EXIT_INPUT);
    }

    if cli.verbose {
        eprintln!("Done in {:?}", start_time.elapsed());
    }

    std::process::exit(EXIT_SUCCESS);
}

fn run_score(
    file: &Path,
    json: bool,
    scoring: &tie_strength::scoring::ScoringConfig,
    verbose: bool,
    use_colors: bool,
) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read factors file at {}", file.display()))?;
    let factors: ContactFactors = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse factors: invalid YAML in {}", file.display()))?;

    if verbose {
        eprintln!("Loaded factors from {}", file.display());
    }

    let breakdown = tie_strength::scoring::calculate_connection_strength_with(
        &factors.engagement,
        &factors.origin,
        &factors.network,
        scoring,
    );

    if json {
        let out = serde_json::to_string_pretty(&breakdown).context("Failed to serialize breakdown")?;
        println!("{}", out);
    } else {
        println!("{}", tie_strength::output::format_breakdown(&breakdown, scoring, use_colors));
    }
    Ok(())
}

fn run_respond(durations: &[String], use_colors: bool) -> Result<()> {
    let mut tally = tie_strength::scoring::ResponseTally::default();
    for input in durations {
        let elapsed = humantime::parse_duration(input)
            .with_context(|| format!("Invalid duration '{}'", input))?;
        let response = tie_strength::scoring::categorize_response_duration(elapsed);
        tally.record(response);
        println!(
            "{}",
            tie_strength::output::format_response_time(input, &response, use_colors)
        );
    }
    println!("{}", tie_strength::output::format_response_tally(&tally));
    Ok(())
}

fn run_import(
    file: &Path,
    json: bool,
    import: &tie_strength::contacts::ImportConfig,
    verbose: bool,
    use_colors: bool,
) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read contacts file at {}", file.display()))?;
    let rows: Vec<RawContact> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse contacts: invalid JSON in {}", file.display()))?;

    if verbose {
        eprintln!(
            "Importing {} rows (default country code +{})",
            rows.len(),
            import.default_country_code
        );
    }

    let report = tie_strength::contacts::import_contacts(rows, import);

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize import report")?;
        println!("{}", out);
    } else {
        println!("{}", tie_strength::output::format_import_report(&report, use_colors));
    }
    Ok(())
}

fn run_wizard(action: WizardCommand, verbose: bool, use_colors: bool) -> Result<()> {
    let path = tie_strength::wizard::get_wizard_path();
    let mut state = tie_strength::wizard::load_wizard_state(&path)?;

    if verbose {
        eprintln!("Wizard state: {}", path.display());
    }

    let persist = action.changes_state();

    match action {
        WizardCommand::Show => {}
        WizardCommand::SetContact { contact } => state.set_contact(contact),
        WizardCommand::SetTrigger { trigger } => state.set_trigger(trigger.parse::<TriggerKind>()?),
        WizardCommand::SetMessage { message } => state.set_message(message),
        WizardCommand::SetDue { after } => {
            let delay = humantime::parse_duration(&after)
                .with_context(|| format!("Invalid duration '{}'", after))?;
            let due_at = tie_strength::wizard::due_after(chrono::Utc::now(), delay)?;
            state.set_due_at(due_at);
        }
        WizardCommand::Next => {
            state.advance()?;
        }
        WizardCommand::Back => {
            state.back();
        }
        WizardCommand::Reset => {
            state.reset();
            tie_strength::wizard::clear_wizard_state(&path)?;
            println!("{}", tie_strength::output::format_wizard_state(&state, use_colors));
            return Ok(());
        }
        WizardCommand::Submit => {
            let record = state.submit()?;
            let out = serde_json::to_string_pretty(&record).context("Failed to serialize outreach record")?;
            println!("{}", out);
            tie_strength::wizard::clear_wizard_state(&path)?;
            return Ok(());
        }
    }

    if persist {
        tie_strength::wizard::save_wizard_state(&path, &state)?;
    }
    println!("{}", tie_strength::output::format_wizard_state(&state, use_colors));
    Ok(())
}
