use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::builder::BoolishValueParser;
use clap::error::ErrorKind;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::debug;

use storeguide::check::{run_check, CheckOptions, Manifest};
use storeguide::config::Config;
use storeguide::descriptor::{
    DescriptorError, RawAccessDescriptor, RawEventDescriptor, RawStateDescriptor, Scope,
};
use storeguide::engine::rules::{ACCESS_RULES, EVENT_RULES, STATE_RULES};
use storeguide::engine::{
    classify_raw_access, classify_raw_event, classify_raw_state, Recommendation,
};
use storeguide::logging::init_tracing;
use storeguide::report::{
    render_check_text, render_json, render_rules_text, render_text, OutputFormat, TrailMode,
};

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;
/// A descriptor had an unset field.
const EXIT_INVALID_DESCRIPTOR: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "storeguide")]
#[command(about = "Recommend a state-management strategy and explain why")]
#[command(version)]
struct Cli {
    /// Output format (overrides config)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// How much of the rationale trail to print (overrides config)
    #[arg(long, global = true, value_enum)]
    trail: Option<TrailMode>,

    /// Config file (default: ~/.config/storeguide/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a piece of application state
    State(StateArgs),
    /// Classify an application event
    Event(EventArgs),
    /// Classify a state-read site
    Access(AccessArgs),
    /// Classify every entry of a manifest and compare with expected strategies
    Check {
        /// TOML manifest with [[state]], [[event]] and [[access]] entries
        manifest: PathBuf,
        /// Flag entries that do not pin an expected strategy
        #[arg(long)]
        require_expect: bool,
    },
    /// List the rule tables in priority order
    Rules,
}

// Descriptor flags are optional here so an omitted flag reaches validation
// as an unset field instead of a clap usage error.

#[derive(Args, Debug)]
struct StateArgs {
    /// Reach of the state in the component tree
    #[arg(long, value_enum)]
    scope: Option<Scope>,
    /// Expected to grow in size or complexity
    #[arg(long, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    growth_expectation: Option<bool>,
    /// Loaded or updated asynchronously
    #[arg(long, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    involves_async: Option<bool>,
    /// Reused by more than one feature
    #[arg(long, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    reused_across_features: Option<bool>,
    /// Must survive reloads
    #[arg(long, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    needs_persistence: Option<bool>,
}

impl From<StateArgs> for RawStateDescriptor {
    fn from(args: StateArgs) -> Self {
        Self {
            scope: args.scope,
            growth_expectation: args.growth_expectation,
            involves_async: args.involves_async,
            reused_across_features: args.reused_across_features,
            needs_persistence: args.needs_persistence,
        }
    }
}

#[derive(Args, Debug)]
struct EventArgs {
    /// Handled by more than one consumer
    #[arg(long, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    multiple_consumers: Option<bool>,
    /// Handling performs I/O or other side effects
    #[arg(long, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    has_side_effects: Option<bool>,
    /// Dispatched from unrelated parts of the app
    #[arg(long, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    reusable_across_app: Option<bool>,
}

impl From<EventArgs> for RawEventDescriptor {
    fn from(args: EventArgs) -> Self {
        Self {
            multiple_consumers: args.multiple_consumers,
            has_side_effects: args.has_side_effects,
            reusable_across_app: args.reusable_across_app,
        }
    }
}

#[derive(Args, Debug)]
struct AccessArgs {
    /// Read from more than one component
    #[arg(long, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    accessed_from_multiple_components: Option<bool>,
    /// Derives a value instead of returning it as stored
    #[arg(long, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    requires_computation: Option<bool>,
    /// Stored shape is likely to change
    #[arg(long, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    shape_may_change: Option<bool>,
    /// Value sits deep inside nested state
    #[arg(long, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    is_deeply_nested: Option<bool>,
}

impl From<AccessArgs> for RawAccessDescriptor {
    fn from(args: AccessArgs) -> Self {
        Self {
            accessed_from_multiple_components: args.accessed_from_multiple_components,
            requires_computation: args.requires_computation,
            shape_may_change: args.shape_may_change,
            is_deeply_nested: args.is_deeply_nested,
        }
    }
}

/// Output settings after merging config and flags.
struct Output {
    format: OutputFormat,
    trail: TrailMode,
}

impl Output {
    fn emit_recommendation(&self, recommendation: Recommendation) -> anyhow::Result<()> {
        let recommendation = self.trail.apply(recommendation);
        let rendered = match self.format {
            OutputFormat::Text => render_text(&recommendation),
            OutputFormat::Json => render_json(&recommendation)?,
        };
        print(&rendered)
    }
}

fn print(rendered: &str) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let config = load_config(cli.config.as_deref())?;
    let output = Output {
        format: cli.format.unwrap_or(config.output.format),
        trail: cli.trail.unwrap_or(config.output.trail),
    };
    debug!(format = ?output.format, trail = ?output.trail, "output settings");

    match cli.command {
        Command::State(args) => output.emit_recommendation(classify_raw_state(args.into())?)?,
        Command::Event(args) => output.emit_recommendation(classify_raw_event(args.into())?)?,
        Command::Access(args) => output.emit_recommendation(classify_raw_access(args.into())?)?,
        Command::Check {
            manifest,
            require_expect,
        } => {
            let loaded = Manifest::load(&manifest)?;
            let options = CheckOptions {
                require_expect: require_expect || config.check.require_expect,
            };
            let mut report = run_check(&loaded, options)
                .with_context(|| format!("checking {}", manifest.display()))?;
            if output.trail == TrailMode::Decisive {
                for entry in &mut report.entries {
                    entry.recommendation = TrailMode::Decisive.apply(entry.recommendation.clone());
                }
            }
            let rendered = match output.format {
                OutputFormat::Text => render_check_text(&report),
                OutputFormat::Json => render_json(&report)?,
            };
            print(&rendered)?;
            if !report.passed() {
                return Ok(EXIT_FAILURE);
            }
        }
        Command::Rules => {
            let rendered = match output.format {
                OutputFormat::Text => [
                    render_rules_text(&STATE_RULES),
                    render_rules_text(&EVENT_RULES),
                    render_rules_text(&ACCESS_RULES),
                ]
                .join("\n"),
                OutputFormat::Json => render_json(&serde_json::json!({
                    "state": STATE_RULES.questions().collect::<Vec<_>>(),
                    "event": EVENT_RULES.questions().collect::<Vec<_>>(),
                    "access": ACCESS_RULES.questions().collect::<Vec<_>>(),
                }))?,
            };
            print(&rendered)?;
        }
    }

    Ok(EXIT_SUCCESS)
}

/// Map an error to the process exit code: 2 for invalid descriptors, 1 otherwise.
fn exit_code_for(err: &anyhow::Error) -> u8 {
    if err.chain().any(|cause| cause.is::<DescriptorError>()) {
        EXIT_INVALID_DESCRIPTOR
    } else {
        EXIT_FAILURE
    }
}

/// Exit code for a clap parse outcome. Clap's own default (2) would collide
/// with the invalid-descriptor code, so usage errors exit 1.
fn parse_exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
        _ => EXIT_FAILURE,
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version go to stdout, usage errors to stderr
            let _ = err.print();
            return ExitCode::from(parse_exit_code(err.kind()));
        }
    };

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_code_for(&err)
        }
    };
    ExitCode::from(code)
}
