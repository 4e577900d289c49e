//! plagcheck - command-line front end for the analysis and rephrase service.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use highlight::{parse_hints, SubstitutionHint};
use plagcheck::view::risk_class;
use plagcheck::{
    Action, AppConfig, Completion, Controller, Creativity, HighlightMode, Highlighter,
    MarkerRenderer, Render, RephraseStyle, RiskColor, ServiceClient,
    TerminalRenderer, Toast, ToastKind, UiState,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "plagcheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// YAML configuration file
    #[arg(long, short, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the service base URL
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Highlight changed words offline, from files
    Highlight {
        /// Original text file
        #[arg(long, value_name = "FILE")]
        original: PathBuf,
        /// Rephrased text file
        #[arg(long, value_name = "FILE")]
        rephrased: PathBuf,
        /// JSON array of {original, replacement} hints
        #[arg(long, value_name = "FILE")]
        hints: Option<PathBuf>,
        /// Force a highlighting policy instead of choosing from the hints
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
        #[arg(long, value_enum, default_value_t = Format::Terminal)]
        format: Format,
        /// Show which word each change replaced
        #[arg(long)]
        show_original: bool,
    },
    /// Score a text for plagiarism
    Analyze {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Rephrase a text and show what changed
    Rephrase {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, value_enum, default_value_t = StyleArg::Academic)]
        style: StyleArg,
        #[arg(long, value_enum, default_value_t = CreativityArg::Medium)]
        creativity: CreativityArg,
        /// Print the plain text without highlighting
        #[arg(long)]
        plain: bool,
    },
}

#[derive(clap::Args)]
struct InputArgs {
    /// Text to send
    #[arg(long, conflicts_with = "file")]
    text: Option<String>,
    /// Read the text from a file
    #[arg(long, value_name = "FILE")]
    file: Option<PathBuf>,
}

impl InputArgs {
    fn read(&self) -> anyhow::Result<String> {
        match (&self.text, &self.file) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => read_file(path),
            (None, None) => bail!("provide --text or --file"),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Hints,
    SetDifference,
    Unannotated,
}

impl From<ModeArg> for HighlightMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Hints => HighlightMode::Hints,
            ModeArg::SetDifference => HighlightMode::SetDifference,
            ModeArg::Unannotated => HighlightMode::Unannotated,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Terminal,
    Html,
    Markers,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum StyleArg {
    Academic,
    Formal,
    Casual,
    Simple,
}

impl From<StyleArg> for RephraseStyle {
    fn from(value: StyleArg) -> Self {
        match value {
            StyleArg::Academic => RephraseStyle::Academic,
            StyleArg::Formal => RephraseStyle::Formal,
            StyleArg::Casual => RephraseStyle::Casual,
            StyleArg::Simple => RephraseStyle::Simple,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CreativityArg {
    Low,
    Medium,
    High,
}

impl From<CreativityArg> for Creativity {
    fn from(value: CreativityArg) -> Self {
        match value {
            CreativityArg::Low => Creativity::Low,
            CreativityArg::Medium => Creativity::Medium,
            CreativityArg::High => Creativity::High,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(url) = &cli.base_url {
        cfg.client.base_url = url.clone();
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    match cli.command {
        Commands::Highlight {
            original,
            rephrased,
            hints,
            mode,
            format,
            show_original,
        } => run_highlight(&cfg, &original, &rephrased, hints.as_deref(), mode, format, show_original),
        Commands::Analyze { input } => run_analyze(&cfg, input.read()?).await,
        Commands::Rephrase {
            input,
            style,
            creativity,
            plain,
        } => run_rephrase(&cfg, input.read()?, style.into(), creativity.into(), plain).await,
    }
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn load_hints(path: &Path) -> anyhow::Result<Vec<SubstitutionHint>> {
    let raw = read_file(path)?;
    let values: Vec<serde_json::Value> =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    let parsed = parse_hints(&values);
    for skipped in &parsed.skipped {
        tracing::warn!(error = %skipped, "skipping hint");
    }
    Ok(parsed.hints)
}

fn run_highlight(
    cfg: &AppConfig,
    original: &Path,
    rephrased: &Path,
    hints: Option<&Path>,
    mode: Option<ModeArg>,
    format: Format,
    show_original: bool,
) -> anyhow::Result<()> {
    let highlighter = Highlighter::new(cfg.highlight.clone())?;
    let original = read_file(original)?;
    let rephrased = read_file(rephrased)?;
    let hints = hints.map(load_hints).transpose()?;

    let out = match mode {
        Some(mode) => highlighter.highlight_with_mode(
            &original,
            &rephrased,
            hints.as_deref().unwrap_or_default(),
            mode.into(),
        ),
        None => highlighter.highlight(&original, &rephrased, hints.as_deref()),
    };

    let rendered = match format {
        Format::Terminal => TerminalRenderer { show_original }.render(&out.tokens),
        Format::Html => cfg.view.highlight.render(&out.tokens),
        Format::Markers => MarkerRenderer { show_original }.render(&out.tokens),
        Format::Json => serde_json::to_string_pretty(&out)?,
    };
    println!("{rendered}");
    if format != Format::Json {
        eprintln!("{} words changed ({:?})", out.changed_words(), out.mode);
    }
    Ok(())
}

async fn run_analyze(cfg: &AppConfig, text: String) -> anyhow::Result<()> {
    let client = ServiceClient::new(cfg.client.clone())?;
    let mut controller = Controller::from_config(cfg)?;
    controller.set_analyze_input(text);
    eprintln!("{}", controller.word_count_label().dimmed());

    let Some(ticket) = begin(&mut controller, Action::Analyze)? else {
        return finish(&mut controller);
    };
    let result = client
        .analyze_until(&ticket.text, tokio::time::Instant::from_std(ticket.deadline))
        .await;
    let completion = controller.complete_analyze(&ticket, result, Instant::now());
    settle(&mut controller, completion);

    if let Some(resp) = &controller.state().last_analysis {
        let level = match resp.risk_color {
            RiskColor::Danger => resp.plagiarism_level.red().bold(),
            RiskColor::Warning => resp.plagiarism_level.yellow().bold(),
            _ => resp.plagiarism_level.green().bold(),
        };
        println!(
            "Plagiarism score: {:.1}% {} [{}]",
            resp.clamped_score(),
            level,
            risk_class(&resp.risk_color)
        );
        println!(
            "Total words: {}  Unique words: {}",
            resp.text_analysis.total_words, resp.text_analysis.unique_words
        );
        if !resp.issues.is_empty() {
            println!("Issues detected:");
            for issue in &resp.issues {
                println!("  - {issue}");
            }
        }
        if !resp.common_phrases.is_empty() {
            println!("Common phrases:");
            for phrase in resp.common_phrases.iter().take(cfg.view.common_phrase_limit) {
                println!("  \"{phrase}\"");
            }
        }
    }
    finish(&mut controller)
}

async fn run_rephrase(
    cfg: &AppConfig,
    text: String,
    style: RephraseStyle,
    creativity: Creativity,
    plain: bool,
) -> anyhow::Result<()> {
    let client = ServiceClient::new(cfg.client.clone())?;
    let highlighter = Highlighter::new(cfg.highlight.clone())?;
    let mut controller = Controller::from_config(cfg)?;
    controller.set_rephrase_input(text);
    controller.set_rephrase_options(style, creativity);

    let Some(ticket) = begin(&mut controller, Action::Rephrase)? else {
        return finish(&mut controller);
    };
    let result = client
        .rephrase_until(
            ticket.rephrase_request(),
            tokio::time::Instant::from_std(ticket.deadline),
        )
        .await;
    let completion = controller.complete_rephrase(&ticket, result, Instant::now());
    settle(&mut controller, completion);

    let state = controller.state();
    if let Some(rephrased) = &state.current_rephrased_text {
        if plain {
            println!("{rephrased}");
        } else {
            let out = highlighter.highlight(
                state.current_original_text.as_deref().unwrap_or_default(),
                rephrased,
                Some(state.current_changes.as_slice()),
            );
            println!("{}", TerminalRenderer { show_original: true }.render(&out.tokens));
        }
    }
    finish(&mut controller)
}

fn begin(controller: &mut Controller, action: Action) -> anyhow::Result<Option<plagcheck::Ticket>> {
    match controller.begin(action, Instant::now()) {
        Ok(ticket) => {
            if let Some(message) = controller.loading_message() {
                eprintln!("{}", message.dimmed());
            }
            Ok(Some(ticket))
        }
        Err(plagcheck::ControllerError::Client(_)) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn settle(controller: &mut Controller, completion: Completion) {
    if completion == Completion::Discarded {
        controller.tick(Instant::now());
    }
}

/// Prints pending toasts and turns a failed action into a non-zero exit.
fn finish(controller: &mut Controller) -> anyhow::Result<()> {
    for toast in controller.take_toasts() {
        print_toast(&toast);
    }
    if let UiState::Error(message) = controller.ui() {
        tracing::debug!(%message, "action failed");
        bail!("{message}");
    }
    Ok(())
}

fn print_toast(toast: &Toast) {
    match toast.kind {
        ToastKind::Success => eprintln!("{} {}", "✔".green(), toast.message),
        ToastKind::Error => eprintln!("{} {}", "✘".red(), toast.message.red()),
    }
}
