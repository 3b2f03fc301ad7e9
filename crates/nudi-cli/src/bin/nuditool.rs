use std::fs;
use std::process;

use clap::{Parser, Subcommand};

use nudi_cli::commands::{analyze_ops, config_ops, convert_ops};
use nudi_core::SymbolTable;

#[derive(Parser)]
#[command(name = "nuditool", about = "Nudi legacy Kannada text decoder")]
struct Cli {
    /// Symbol table TOML to use instead of the built-in one
    #[arg(long, global = true)]
    table: Option<String>,
    /// Settings TOML to use instead of the built-in one
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode legacy text to Unicode Kannada
    Convert {
        /// Input file (stdin if omitted or "-")
        input: Option<String>,
        /// Print per-tier token counts to stderr
        #[arg(long)]
        stats: bool,
    },
    /// Show how each part of the input was decoded
    Explain {
        /// Legacy text to explain
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print character, bigram and trigram frequencies
    Analyze {
        /// Input file (stdin if omitted or "-")
        input: Option<String>,
        /// Rows per table (default: analyzer.top_n from settings)
        #[arg(short, long)]
        n: Option<usize>,
        /// Only count text the decoder could not map
        #[arg(long)]
        unmapped: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the built-in symbol table TOML
    TableExport,
    /// Check a symbol table TOML file
    TableValidate {
        /// Table TOML file
        file: String,
    },
    /// Print the built-in settings TOML
    SettingsExport,
    /// Check a settings TOML file
    SettingsValidate {
        /// Settings TOML file
        file: String,
    },
}

fn read_config(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {path}: {e}");
        process::exit(1);
    })
}

fn main() {
    nudi_cli::trace_init::init_tracing();
    let cli = Cli::parse();

    if let Some(path) = cli.table.as_deref() {
        if let Err(e) = SymbolTable::init_custom(read_config(path)) {
            eprintln!("Error loading table {path}: {e}");
            process::exit(1);
        }
    }
    if let Some(path) = cli.settings.as_deref() {
        if let Err(e) = nudi_core::settings::init_custom(read_config(path)) {
            eprintln!("Error loading settings {path}: {e}");
            process::exit(1);
        }
    }

    match cli.command {
        Command::Convert { input, stats } => convert_ops::convert_cmd(input.as_deref(), stats),
        Command::Explain { text, json } => convert_ops::explain_cmd(&text, json),
        Command::Analyze {
            input,
            n,
            unmapped,
            json,
        } => analyze_ops::analyze_cmd(input.as_deref(), n, unmapped, json),
        Command::TableExport => config_ops::table_export(),
        Command::TableValidate { file } => config_ops::table_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
