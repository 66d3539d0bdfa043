mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use seq2seq_prep::Vocabulary;

// ============ CLI ============
#[derive(Parser)]
#[command(name = "seq2seq-prep")]
#[command(version = "0.1.0")]
#[command(about = "Pré-processamento de corpora paralelos para tradução seq2seq")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mostra as linhas normalizadas de um arquivo
    Normalize {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(long)]
        max_rows: Option<usize>,
    },

    /// Constrói pares alinhados e vocabulários
    Build {
        #[arg(short, long)]
        source: PathBuf,
        #[arg(short, long)]
        target: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        #[arg(long)]
        max_rows: Option<usize>,
        /// Lê max_rows + 1 linhas por arquivo, como nos datasets antigos
        #[arg(long)]
        legacy_row_cap: bool,
    },

    /// Converte pares em sequências de índices
    Tensorize {
        #[arg(short, long)]
        data: PathBuf,
        #[arg(long, default_value_t = Vocabulary::EOS_INDEX)]
        end_marker: u32,
        /// Ignora tokens vazios de espaços repetidos
        #[arg(long)]
        skip_empty: bool,
    },

    /// Mostra informações de um vocabulário salvo
    Info {
        #[arg(short, long)]
        vocab: PathBuf,
        #[arg(long, default_value = "20")]
        top: usize,
    },
}

fn main() -> seq2seq_prep::Result<()> {
    // Inicializa logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize { input, max_rows } => commands::normalize::execute(&input, max_rows),
        Commands::Build {
            source,
            target,
            output,
            max_rows,
            legacy_row_cap,
        } => commands::build::execute(&source, &target, &output, max_rows, legacy_row_cap),
        Commands::Tensorize {
            data,
            end_marker,
            skip_empty,
        } => commands::tensorize::execute(&data, end_marker, skip_empty),
        Commands::Info { vocab, top } => commands::info::execute(&vocab, top),
    }
}
