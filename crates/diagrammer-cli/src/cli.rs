//! Command-line interface for the diagrammer utility
//!
//! Sends graph and figure requests through a single facade and writes the
//! resulting text to stdout.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::script::parse_script;
use diagrammer::core::logging::{init_logging, resolve_setting, LEVEL_ENV};
use diagrammer::plugins::DiagramFacade;
use diagrammer::{ElementCategory, FacadeConfig, GraphKind, RequestPolicy, COLOR_MARKER, DEMO_REQUESTS};

/// Diagrammer - Build graphs and figures from requests
#[derive(Parser)]
#[command(name = "diagrammer")]
#[command(about = "Dispatch graph and figure requests through builder, flyweight, and proxy pipelines")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error) [default: warn]
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Set log format (compact|pretty|json) [default: compact]
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Fail on unknown elements and graph types instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Maximum number of distinct figure types to cache
    #[arg(long)]
    pub pool_capacity: Option<usize>,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send a single request
    Request {
        /// Element category (Graph or Figure)
        element: String,

        /// Graph type (Bar or Line) or figure type (e.g. CircleColor)
        #[arg(value_name = "TYPE")]
        variant: String,

        /// Coordinate, echoed verbatim
        coordinate: String,
    },

    /// Run the built-in demonstration requests
    Demo,

    /// Run requests from a script, one `ELEMENT TYPE COORDINATE` per line
    Run {
        /// Script file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Exercise the bare capability of an element category
    Describe {
        /// Element category (Graph or Figure)
        element: String,
    },

    /// Show supported elements and types
    Types {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct TypeListing {
    elements: Vec<ElementInfo>,
    total: usize,
}

#[derive(Serialize)]
struct ElementInfo {
    name: ElementCategory,
    description: &'static str,
    variants: Vec<GraphKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    classification: Option<String>,
}

fn type_listing() -> TypeListing {
    let elements: Vec<ElementInfo> = ElementCategory::ALL
        .iter()
        .map(|category| match category {
            ElementCategory::Graph => ElementInfo {
                name: *category,
                description: category.description(),
                variants: GraphKind::ALL.to_vec(),
                classification: None,
            },
            ElementCategory::Figure => ElementInfo {
                name: *category,
                description: category.description(),
                variants: Vec::new(),
                classification: Some(format!(
                    "any type; types containing \"{}\" are colored, others black and white",
                    COLOR_MARKER
                )),
            },
        })
        .collect();

    TypeListing {
        total: elements.len(),
        elements,
    }
}

/// Main CLI application
pub struct DiagrammerApp {
    facade: DiagramFacade,
}

impl DiagrammerApp {
    /// Create a new application instance with default settings
    pub fn new() -> Self {
        Self::with_config(FacadeConfig::default())
    }

    pub fn with_config(config: FacadeConfig) -> Self {
        Self {
            facade: DiagramFacade::with_config(config),
        }
    }

    /// Create an application configured from the global flags
    pub fn from_cli(cli: &Cli) -> Self {
        let config = Self::build_config(cli);
        debug!(policy = %config.policy, pool_capacity = ?config.pool_capacity, "Facade configured");
        Self::with_config(config)
    }

    pub fn build_config(cli: &Cli) -> FacadeConfig {
        let policy = if cli.strict {
            RequestPolicy::Strict
        } else {
            RequestPolicy::Lenient
        };
        FacadeConfig::new(policy, cli.pool_capacity)
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli, out: &mut dyn Write) -> Result<()> {
        let log_level = Self::log_level(&cli);
        let log_format = cli.log_format.map(|format| format.as_str());

        if let Err(e) = init_logging(Some(&log_level), log_format) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Diagrammer v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Request {
                element,
                variant,
                coordinate,
            } => self.request_command(&element, &variant, &coordinate, out),
            Commands::Demo => self.demo_command(out, cli.verbose),
            Commands::Run { input } => self.run_command(input, out, cli.verbose),
            Commands::Describe { element } => self.describe_command(&element, out),
            Commands::Types { json } => self.types_command(json, out),
        }
    }

    /// `--log-level`, then `DIAGRAMMER_LOG_LEVEL`, then `RUST_LOG`, then `warn`
    fn log_level(cli: &Cli) -> String {
        resolve_setting(
            cli.log_level.map(|level| level.as_str()),
            &[std::env::var(LEVEL_ENV).ok(), std::env::var("RUST_LOG").ok()],
            LogLevel::Warn.as_str(),
        )
    }

    /// Handle the request command
    fn request_command(
        &self,
        element: &str,
        variant: &str,
        coordinate: &str,
        out: &mut dyn Write,
    ) -> Result<()> {
        self.facade.request(element, variant, coordinate, out)?;
        out.flush()?;
        Ok(())
    }

    /// Handle the demo command
    fn demo_command(&self, out: &mut dyn Write, verbose: bool) -> Result<()> {
        for (element, variant, coordinate) in DEMO_REQUESTS {
            if verbose {
                eprintln!("Request: {} {} {}", element, variant, coordinate);
            }
            self.facade.request(element, variant, coordinate, out)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Handle the run command
    fn run_command(&self, input: Option<PathBuf>, out: &mut dyn Write, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let requests = parse_script(&content)?;
        debug!(request_count = requests.len(), "Parsed request script");

        for request in &requests {
            self.facade
                .request(&request.element, &request.variant, &request.coordinate, out)
                .with_context(|| format!("line {}", request.line))?;
        }

        info!(
            request_count = requests.len(),
            cached_figures = self.facade.figures().pool().len(),
            "Script completed"
        );
        out.flush()?;
        Ok(())
    }

    /// Handle the describe command
    fn describe_command(&self, element: &str, out: &mut dyn Write) -> Result<()> {
        let category = ElementCategory::from_name(element)
            .ok_or_else(|| anyhow!("Unknown element category: {}", element))?;
        category.capability().describe(out)?;
        out.flush()?;
        Ok(())
    }

    /// Handle the types command
    fn types_command(&self, json: bool, out: &mut dyn Write) -> Result<()> {
        let listing = type_listing();

        if json {
            writeln!(out, "{}", serde_json::to_string_pretty(&listing)?)?;
        } else {
            writeln!(out, "Supported elements:")?;
            for element in &listing.elements {
                writeln!(out, "  {:<7} - {}", element.name, element.description)?;
                for variant in &element.variants {
                    writeln!(out, "      {}", variant)?;
                }
                if let Some(classification) = &element.classification {
                    writeln!(out, "      {}", classification)?;
                }
            }
            writeln!(out)?;
            writeln!(out, "Total: {} element types supported", listing.total)?;
        }

        Ok(())
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e)),
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Get a reference to the facade (for testing)
    #[cfg(test)]
    pub fn facade(&self) -> &DiagramFacade {
        &self.facade
    }
}

impl Default for DiagrammerApp {
    fn default() -> Self {
        Self::new()
    }
}
