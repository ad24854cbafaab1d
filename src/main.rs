use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use readability_examer::{
    analyzer::{strip_bom, TextSource},
    config::OutputFormat,
    reporter::{render_json_batch, renderer_for, NamedReport},
    AnalysisError, Config, ReadabilityAnalyzer, Reporter, Session, Theme, ThemePreference,
};
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "readability-examer")]
#[command(about = "Grade how hard a text is to read with the Coleman-Liau index")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Configuration file path (defaults to $READABILITY_EXAMER_CONFIG, then ~/.readability-examer.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze text given as an argument, read from files, or piped on stdin
    Analyze {
        /// Text to analyze
        text: Option<String>,

        /// Analyze the contents of these files instead
        #[arg(short, long)]
        file: Vec<PathBuf>,

        /// Output format (defaults to the configured format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Theme for terminal output (defaults to the saved preference)
        #[arg(long, value_enum)]
        theme: Option<ThemePreference>,

        /// Also export JSON and Markdown reports to this directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Enter texts one after another and read their grades
    Interactive {
        /// Theme for this session (defaults to the saved preference)
        #[arg(long, value_enum)]
        theme: Option<ThemePreference>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Show or change the saved theme preference
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeAction>,
    },
    /// Generate a default configuration file
    Config {
        /// Output path for the config file (defaults to ~/.readability-examer.toml)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy)]
enum ThemeAction {
    Light,
    Dark,
    Auto,
    Toggle,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = Config::resolve_path(cli.config.as_deref())?;
    debug!("using config path {}", config_path.display());

    match cli.command {
        Commands::Analyze {
            text,
            file,
            format,
            theme,
            output,
            no_color,
        } => {
            let config = Config::load_from(&config_path)?;
            let options = RenderOptions::new(&config, format, theme, no_color);
            let output_dir = output.or(config.output.directory);
            if file.is_empty() {
                analyze_text(text, &options, output_dir.as_deref())?;
            } else {
                analyze_files(&file, &options, output_dir.as_deref())?;
            }
        }
        Commands::Interactive { theme, no_color } => {
            let config = Config::load_from(&config_path)?;
            let options = RenderOptions::new(&config, Some(OutputFormat::Terminal), theme, no_color);
            let stdin = io::stdin();
            run_interactive(stdin.lock(), io::stdout(), options, &config_path)?;
        }
        Commands::Theme { action } => {
            update_theme(action, &config_path)?;
        }
        Commands::Config { output } => {
            generate_config(output.unwrap_or(config_path))?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("readability_examer=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

struct RenderOptions {
    format: OutputFormat,
    theme: Theme,
    color: bool,
}

impl RenderOptions {
    fn new(
        config: &Config,
        format: Option<OutputFormat>,
        theme: Option<ThemePreference>,
        no_color: bool,
    ) -> Self {
        Self {
            format: format.unwrap_or(config.output.format),
            theme: theme.unwrap_or(config.theme).resolve(),
            color: config.output.color && !no_color,
        }
    }
}

fn analyze_text(
    text: Option<String>,
    options: &RenderOptions,
    output_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read text from stdin")?;
            buffer
        }
    };

    let report = ReadabilityAnalyzer::new().analyze(strip_bom(&text))?;
    let renderer = renderer_for(options.format, options.theme, options.color);
    print!("{}", renderer.render(&report)?);
    if options.format == OutputFormat::Json {
        println!();
    }

    if let Some(dir) = output_dir {
        let exported_files = Reporter::new().export(&report, dir)?;
        print_exported(&exported_files);
    }

    Ok(())
}

fn analyze_files(
    files: &[PathBuf],
    options: &RenderOptions,
    output_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let mut sources = Vec::with_capacity(files.len());
    for path in files {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        sources.push(TextSource::new(path.display().to_string(), &text));
    }

    let entries = ReadabilityAnalyzer::new().analyze_batch(&sources);
    let mut reports = Vec::with_capacity(entries.len());
    let mut failed = 0;

    for entry in &entries {
        match &entry.result {
            Ok(report) => reports.push(NamedReport {
                name: &entry.name,
                report,
            }),
            Err(e) => {
                eprintln!("✗ {}: {}", entry.name, e);
                failed += 1;
            }
        }
    }

    if options.format == OutputFormat::Json {
        println!("{}", render_json_batch(&reports)?);
    } else {
        let renderer = renderer_for(options.format, options.theme, options.color);
        for named in &reports {
            println!("📄 {}", named.name);
            println!("{}", renderer.render(named.report)?);
        }
    }

    if let Some(dir) = output_dir {
        if !reports.is_empty() {
            let exported_files = Reporter::new().export_batch(&reports, dir)?;
            print_exported(&exported_files);
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} files could not be analyzed", failed, entries.len());
    }
    Ok(())
}

fn print_exported(files: &[PathBuf]) {
    eprintln!("📁 Reports exported to:");
    for file in files {
        eprintln!("   - {}", file.display());
    }
}

/// Drive a `Session` from line-based input until `:quit` or end of input.
fn run_interactive<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
    mut options: RenderOptions,
    config_path: &Path,
) -> anyhow::Result<()> {
    let mut session = Session::new();

    loop {
        writeln!(out, "\n✏️  Enter text, then an empty line to analyze (:theme to toggle, :quit to exit)")?;
        out.flush()?;

        let mut lines = Vec::new();
        let mut reached_end = false;
        loop {
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                reached_end = true;
                break;
            }
            let line = line.trim_end_matches(['\r', '\n']);
            if line.trim().is_empty() {
                break;
            }
            lines.push(line.to_string());
        }

        match lines.first().map(|l| l.trim()) {
            Some(":quit") => break,
            Some(":theme") if lines.len() == 1 => {
                options.theme = options.theme.toggled();
                Config::save_theme(config_path, options.theme.into())?;
                writeln!(out, "🎨 Switched to {} mode", options.theme)?;
                continue;
            }
            _ => {}
        }

        if lines.is_empty() && reached_end {
            break;
        }

        match session.analyze(&lines.join("\n")) {
            Ok(report) => {
                let renderer = renderer_for(OutputFormat::Terminal, options.theme, options.color);
                write!(out, "{}", renderer.render(&report)?)?;
            }
            Err(AnalysisError::EmptyInput) => {
                writeln!(out, "⚠️  {}", AnalysisError::EmptyInput)?;
                continue;
            }
        }

        if reached_end {
            break;
        }

        writeln!(out, "\nPress Enter when done.")?;
        out.flush()?;
        let mut line = String::new();
        let eof = input.read_line(&mut line)? == 0;
        session.done();
        if eof {
            break;
        }
    }

    Ok(())
}

fn update_theme(action: Option<ThemeAction>, config_path: &Path) -> anyhow::Result<()> {
    let config = Config::load_from(config_path)?;

    let preference = match action {
        None => {
            println!("🎨 Theme preference: {}", config.theme);
            println!("   Active theme: {}", config.theme.resolve());
            return Ok(());
        }
        Some(ThemeAction::Light) => ThemePreference::Light,
        Some(ThemeAction::Dark) => ThemePreference::Dark,
        Some(ThemeAction::Auto) => ThemePreference::Auto,
        Some(ThemeAction::Toggle) => config.theme.resolve().toggled().into(),
    };

    Config::save_theme(config_path, preference)?;
    println!("✅ Theme preference set to {}", preference);
    println!("📝 Saved to {}", config_path.display());
    Ok(())
}

fn generate_config(config_path: PathBuf) -> anyhow::Result<()> {
    println!("📝 Generating configuration file: {}", config_path.display());

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&config_path, Config::create_documented_config())?;

    println!("✅ Configuration file created successfully!");
    println!("💡 Edit the file to choose a theme and default output format.");

    Ok(())
}
