use crate::fields::{group_fields, FieldItem, SelectorPath};
use crate::hot_reload::watch_spec;
use crate::logging::{init_logging_with_config, LogConfig};
use crate::options::RenderOptions;
use crate::render::render_document;
use crate::spec::{build_schema, load_spec, FieldModel, LoadedSpec};
use clap::{Args, Parser, Subcommand};
use std::fmt::Write as _;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Command-line interface for schemadoc
#[derive(Parser, Debug)]
#[command(name = "schemadoc")]
#[command(about = "Render OpenAPI object schemas as HTML property tables", long_about = None)]
pub struct Cli {
    /// Enable debug logging (overrides SCHEMADOC_LOG_LEVEL)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Display flags shared by all commands. Applied on top of the config file
/// and environment.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayArgs {
    /// Options file (YAML or TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Hide readOnly fields
    #[arg(long, default_value_t = false)]
    pub skip_read_only: bool,

    /// Hide writeOnly fields
    #[arg(long, default_value_t = false)]
    pub skip_write_only: bool,

    /// Expand nested tables up to this level (top level is 1)
    #[arg(long)]
    pub expansion_level: Option<u32>,

    /// Expand a field when it is the only one of its object
    #[arg(long, default_value_t = false)]
    pub expand_single_field: bool,

    /// Show field examples
    #[arg(long, default_value_t = false)]
    pub show_examples: bool,

    /// Do not render schema titles as table captions
    #[arg(long, default_value_t = false)]
    pub no_title: bool,
}

impl DisplayArgs {
    /// Resolve the effective options: defaults, config file, env, then flags.
    ///
    /// Boolean flags can only switch behaviour on; leave them off to keep the
    /// configured value.
    pub fn resolve(&self) -> anyhow::Result<RenderOptions> {
        let mut options = RenderOptions::load(self.config.as_deref())?;
        options.skip_read_only |= self.skip_read_only;
        options.skip_write_only |= self.skip_write_only;
        options.expand_single_schema_field |= self.expand_single_field;
        options.show_object_schema_examples |= self.show_examples;
        if let Some(level) = self.expansion_level {
            options.schema_expansion_level = level;
        }
        if self.no_title {
            options.show_title = false;
        }
        Ok(options)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render component schemas to an HTML page
    Render {
        /// Path to the OpenAPI specification file (YAML or JSON)
        #[arg(short, long)]
        spec: PathBuf,

        /// Schema to render (repeatable); all schemas when omitted
        #[arg(long = "schema")]
        schemas: Vec<String>,

        /// Dotted path picking one branch through nested oneof groups
        #[arg(long)]
        selector: Option<String>,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        display: DisplayArgs,
    },
    /// Print the grouped field tree of one schema
    Inspect {
        /// Path to the OpenAPI specification file (YAML or JSON)
        #[arg(short, long)]
        spec: PathBuf,

        /// Schema to inspect
        #[arg(long)]
        schema: String,

        /// Dotted path picking one branch through nested oneof groups
        #[arg(long)]
        selector: Option<String>,

        #[command(flatten)]
        display: DisplayArgs,
    },
    /// Render once, then re-render whenever the spec file changes
    Watch {
        /// Path to the OpenAPI specification file (YAML or JSON)
        #[arg(short, long)]
        spec: PathBuf,

        /// Schema to render (repeatable); all schemas when omitted
        #[arg(long = "schema")]
        schemas: Vec<String>,

        /// Dotted path picking one branch through nested oneof groups
        #[arg(long)]
        selector: Option<String>,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        display: DisplayArgs,
    },
}

fn spec_path_str(spec: &Path) -> anyhow::Result<&str> {
    spec.to_str()
        .ok_or_else(|| anyhow::anyhow!("Invalid UTF-8 in spec path"))
}

fn write_output(output: Option<&Path>, html: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, html)?;
            info!(path = %path.display(), bytes = html.len(), "wrote documentation");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if:
/// - The OpenAPI spec cannot be loaded or parsed
/// - A requested schema does not exist
/// - The output cannot be written
/// - The watcher cannot be set up
pub fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let log_config = if cli.verbose {
        LogConfig::default_dev()
    } else {
        LogConfig::from_env()
    };
    init_logging_with_config(&log_config)?;
    run(&cli)?;
    Ok(())
}

/// Execute an already parsed command line
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Render {
            spec,
            schemas,
            selector,
            output,
            display,
        } => {
            let options = display.resolve()?;
            let loaded = load_spec(spec_path_str(spec)?)?;
            let html = render_document(&loaded, schemas, selector.as_deref(), &options)?;
            write_output(output.as_deref(), &html)
        }
        Commands::Inspect {
            spec,
            schema,
            selector,
            display,
        } => {
            let options = display.resolve()?;
            let loaded = load_spec(spec_path_str(spec)?)?;
            let text = inspect_schema(&loaded, schema, selector.as_deref(), &options)?;
            print!("{text}");
            Ok(())
        }
        Commands::Watch {
            spec,
            schemas,
            selector,
            output,
            display,
        } => {
            let options = display.resolve()?;
            let loaded = load_spec(spec_path_str(spec)?)?;
            let html = render_document(&loaded, schemas, selector.as_deref(), &options)?;
            write_output(Some(output.as_path()), &html)?;

            let schemas = schemas.clone();
            let selector = selector.clone();
            let output = output.clone();
            let _watcher = watch_spec(spec, move |reloaded| {
                let result = render_document(&reloaded, &schemas, selector.as_deref(), &options)
                    .and_then(|html| write_output(Some(output.as_path()), &html));
                if let Err(e) = result {
                    error!(error = %e, "re-render failed");
                }
            })?;

            info!(spec = %spec.display(), "watching for changes");
            loop {
                std::thread::park();
            }
        }
    }
}

/// Text view of the grouped field tree of `schema_name`, one line per field,
/// indented by nesting level.
pub fn inspect_schema(
    spec: &LoadedSpec,
    schema_name: &str,
    selector: Option<&str>,
    options: &RenderOptions,
) -> anyhow::Result<String> {
    let schema = build_schema(spec, schema_name)?;
    let mut out = String::new();
    writeln!(out, "{schema_name}")?;
    describe_fields(
        &mut out,
        schema.nested_fields(),
        selector.and_then(SelectorPath::parse),
        options,
        1,
    )?;
    Ok(out)
}

fn describe_fields(
    out: &mut String,
    fields: &[FieldModel],
    selector: Option<SelectorPath<'_>>,
    options: &RenderOptions,
    depth: usize,
) -> std::fmt::Result {
    for item in group_fields(fields, options.filter(), selector) {
        match item.as_single_field() {
            Some(field) => describe_field(out, field, selector, options, depth)?,
            None => {
                if let FieldItem::Oneof(group) = &item {
                    writeln!(out, "{}one of ({}):", "  ".repeat(depth), group.id)?;
                    for field in &group.items {
                        describe_field(out, field, selector, options, depth + 1)?;
                    }
                }
            }
        }
    }
    Ok(())
}

fn describe_field(
    out: &mut String,
    field: &FieldModel,
    selector: Option<SelectorPath<'_>>,
    options: &RenderOptions,
    depth: usize,
) -> std::fmt::Result {
    let mut flags = Vec::new();
    if field.required {
        flags.push("required");
    }
    if field.is_read_only() {
        flags.push("read-only");
    }
    if field.is_write_only() {
        flags.push("write-only");
    }
    if field.schema.loops_back() {
        flags.push("circular");
    }
    let flags = if flags.is_empty() {
        String::new()
    } else {
        format!(" ({})", flags.join(", "))
    };

    writeln!(
        out,
        "{}{}: {}{}",
        "  ".repeat(depth),
        field.name,
        field.schema.type_name,
        flags
    )?;

    if !field.schema.is_circular {
        let forwarded = selector.and_then(|s| s.forward_for(&field.name));
        describe_fields(
            out,
            field.schema.nested_fields(),
            forwarded,
            options,
            depth + 1,
        )?;
    }
    Ok(())
}
