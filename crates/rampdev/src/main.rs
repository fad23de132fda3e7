use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, info, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// --- CLI Structure ---

#[derive(Parser, Debug)]
#[command(name = "rampdev")]
#[command(version, about = "rampdev: developer helper toolkit for the ramp project", long_about = None)]
struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    command: Command,

    /// Set the logging level [default: info]
    #[arg(short, long, value_enum, default_value_t = LogLevel::Info, global = true)]
    log_level: LogLevel,

    /// Allow overriding log level via RUST_LOG environment variable
    #[arg(long, default_value_t = false, global = true)]
    allow_env_log: bool,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Decode a base64 payload from stdin and write it to a file
    Decode {
        /// Path the decoded text will be written to (created or truncated)
        output_path: PathBuf,
    },
    /// Generator commands for the ramp server source tree
    #[command(subcommand)]
    Gen(GenCommand),
}

#[derive(Subcommand, Debug, Clone)]
enum GenCommand {
    /// Write the prompts module (prompts.ts) into the destination directory
    Prompts {
        /// Destination directory (created if missing)
        #[arg(long)]
        dest: PathBuf,
    },
    /// Write the Anthropic provider scaffold (anthropic.ts) into the destination directory
    Provider {
        /// Destination directory (created if missing)
        #[arg(long)]
        dest: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}
impl From<LogLevel> for tracing_subscriber::filter::Directive {
    fn from(level: LogLevel) -> Self {
        LevelFilter::from(level).into()
    }
}

// --- Logging ---
fn init_logging(level: LogLevel, allow_env: bool) {
    let filter = if allow_env && std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy()
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::Layer::new()
                .with_writer(std::io::stderr)
                .with_ansi(true),
        )
        .init();
}

// --- Main ---
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level, cli.allow_env_log);

    match cli.command {
        Command::Decode { output_path } => run_decode(&output_path),
        Command::Gen(gen_cmd) => handle_gen_command(gen_cmd),
    }
}

// --- Decode Runner ---
fn run_decode(output_path: &Path) -> Result<()> {
    debug!("Reading base64 payload from stdin...");
    codec::decode_to_file(io::stdin().lock(), output_path)
        .with_context(|| format!("Failed to decode payload into {:?}", output_path))?;
    println!("{}", confirmation(output_path));
    Ok(())
}

/// The success line the decode subcommand prints to stdout.
fn confirmation(output_path: &Path) -> String {
    format!("Written: {}", output_path.display())
}

// --- Generator Commands ---
fn handle_gen_command(gen_cmd: GenCommand) -> Result<()> {
    match gen_cmd {
        GenCommand::Prompts { dest } => {
            write_generated_file(&dest, "prompts.ts", &render_prompts_module())
        }
        GenCommand::Provider { dest } => {
            write_generated_file(&dest, "anthropic.ts", assets::get_provider_scaffold())
        }
    }
}

/// Assembles the prompts module: each prompt wrapped in a TypeScript template
/// literal and exported as a const.
fn render_prompts_module() -> String {
    let mut out = String::new();
    for (name, text) in [
        ("EXTRACTION_PROMPT", assets::get_extraction_prompt()),
        ("ANOMALY_PROMPT", assets::get_anomaly_prompt()),
        ("POLICY_PROMPT", assets::get_policy_prompt()),
    ] {
        out.push_str("export const ");
        out.push_str(name);
        out.push_str(" = `");
        out.push_str(text.trim_end());
        out.push_str("`;\n\n");
    }
    out
}

fn write_generated_file(dest: &Path, name: &str, content: &str) -> Result<()> {
    fs::create_dir_all(dest).with_context(|| format!("Failed to create dir {:?}", dest))?;
    let target_path = dest.join(name);
    fs::write(&target_path, content)
        .with_context(|| format!("Failed to write to {:?}", target_path))?;
    info!("Generated file written to: {:?}", target_path);
    println!("Written {}: {} bytes", name, content.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_without_output_path_is_a_usage_error() {
        assert!(Cli::try_parse_from(["rampdev", "decode"]).is_err());
    }

    #[test]
    fn decode_with_output_path_parses() {
        let cli = Cli::try_parse_from(["rampdev", "decode", "out.txt"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Decode { ref output_path } if output_path == Path::new("out.txt")
        ));
    }

    #[test]
    fn confirmation_line_names_the_output_path() {
        assert_eq!(confirmation(Path::new("out.txt")), "Written: out.txt");
    }

    #[test]
    fn prompts_module_exports_all_three_prompts() {
        let module = render_prompts_module();
        assert!(module.contains("export const EXTRACTION_PROMPT = `"));
        assert!(module.contains("export const ANOMALY_PROMPT = `"));
        assert!(module.contains("export const POLICY_PROMPT = `"));
        assert!(module.contains("expense data extraction assistant"));
    }

    #[test]
    fn prompts_module_uses_lf_newlines_only() {
        assert!(!render_prompts_module().contains('\r'));
    }

    #[test]
    fn write_generated_file_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("server").join("src").join("providers");
        write_generated_file(&dest, "prompts.ts", "export const X = 1;\n").unwrap();
        assert_eq!(
            fs::read_to_string(dest.join("prompts.ts")).unwrap(),
            "export const X = 1;\n"
        );
    }

    #[test]
    fn write_generated_file_overwrites_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        write_generated_file(dir.path(), "anthropic.ts", "old").unwrap();
        write_generated_file(dir.path(), "anthropic.ts", "new").unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("anthropic.ts")).unwrap(),
            "new"
        );
    }

    #[test]
    fn provider_scaffold_is_written_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        write_generated_file(dir.path(), "anthropic.ts", assets::get_provider_scaffold()).unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("anthropic.ts")).unwrap(),
            assets::get_provider_scaffold()
        );
    }
}
