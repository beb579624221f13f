//! Command-line interface for the parser.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use textwrap::{fill, Options};

use crate::config::{ParserConfig, TEXT_WRAP_WIDTH};
use crate::document::load_document_with_limit;
use crate::error::Result;
use crate::export::save_outputs;
use crate::service::{into_result, parse_document};
use crate::structure::{DocumentNode, TitleDelimiter};
use crate::types::SqlStyle;

/// Kodeks parser - Reconstruct the structure of bilingual legal codes.
#[derive(Parser)]
#[command(name = "kodeks-parser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a document and write JSON, SQL, YAML, XLSX and CSV outputs.
    Parse {
        /// Plain text document (.txt)
        input: PathBuf,

        /// Output directory (default: next to the input file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Convention separating the Russian and Kazakh names
        #[arg(long, value_enum, ignore_case = true)]
        title_delimiter: Option<TitleDelimiter>,

        /// SQL script flavor
        #[arg(long, value_enum, ignore_case = true)]
        sql_style: Option<SqlStyle>,

        /// Code name used by scoped SQL
        #[arg(long)]
        code_name: Option<String>,
    },

    /// Print the heading hierarchy of a document.
    Tree {
        /// Plain text document (.txt)
        input: PathBuf,

        /// Convention separating the Russian and Kazakh names
        #[arg(long, value_enum, ignore_case = true)]
        title_delimiter: Option<TitleDelimiter>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            input,
            output,
            title_delimiter,
            sql_style,
            code_name,
        } => {
            let mut config = resolve_config(title_delimiter)?;
            if let Some(sql) = sql_style {
                config.sql_style = sql;
            }
            if let Some(name) = code_name {
                config.code_name = name;
            }
            parse_command(&input, output.as_deref(), &config)
        }
        Commands::Tree {
            input,
            title_delimiter,
        } => tree_command(&input, &resolve_config(title_delimiter)?),
    }
}

/// Environment configuration with the CLI delimiter override applied.
fn resolve_config(title_delimiter: Option<TitleDelimiter>) -> Result<ParserConfig> {
    let mut config = ParserConfig::from_env()?;
    if let Some(delimiter) = title_delimiter {
        config.title_delimiter = delimiter;
    }
    Ok(config)
}

/// Execute the parse command.
fn parse_command(input: &Path, output: Option<&Path>, config: &ParserConfig) -> Result<()> {
    let text = load_document_with_limit(input, config.max_document_size)?;

    let output_dir = output
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "kodeks".to_string());

    println!(
        "{} {} ({} titles, {} SQL)",
        style("Parsing").bold(),
        style(input.display()).cyan(),
        style(config.title_delimiter).green(),
        style(config.sql_style).green()
    );
    println!();

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Building document tree...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let parsed = parse_document(&text, config);

    for (level, count) in parsed.data.counts() {
        if count > 0 {
            println!("  {}: {count}", level.table_name());
        }
    }
    if parsed.data.is_empty() {
        println!("  {}", style("No headings found").yellow());
    }
    if !parsed.report.warnings.is_empty() {
        println!(
            "  Warnings: {}",
            style(parsed.report.warnings.len()).yellow().bold()
        );
    }

    pb.set_message("Writing outputs...");
    let result = into_result(parsed, config);

    let paths = match save_outputs(&result, &stem, &output_dir) {
        Ok(paths) => paths,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    println!();
    println!(
        "{} {} files in {}",
        style("Saved").green().bold(),
        paths.len(),
        output_dir.display()
    );

    Ok(())
}

/// Execute the tree command.
fn tree_command(input: &Path, config: &ParserConfig) -> Result<()> {
    let text = load_document_with_limit(input, config.max_document_size)?;
    let parsed = parse_document(&text, config);

    for (depth, node) in parsed.tree.preorder() {
        println!("{}", render_node(depth, node));
    }

    Ok(())
}

/// One node of the tree view, wrapped and indented by depth.
fn render_node(depth: usize, node: &DocumentNode) -> String {
    let indent = "  ".repeat(depth);
    let continuation = format!("{indent}    ");
    let mut label = format!("{} {}. {}", node.level, node.declared_id, node.name_ru);
    if !node.name_kz.is_empty() {
        label.push_str(" / ");
        label.push_str(&node.name_kz);
    }

    let options = Options::new(TEXT_WRAP_WIDTH)
        .initial_indent(&indent)
        .subsequent_indent(&continuation);
    fill(&label, options)
}
