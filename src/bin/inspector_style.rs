//! Inspects the inspector style table from the command line.
//!
//! ```text
//! inspector-style list --section InspectorWell
//! inspector-style get InspectorWellCornerRadius
//! inspector-style export --format json
//! inspector-style check themes/compact.yaml
//! inspector-style --sheet themes/compact.yaml list
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use console::style;

use inspector_style::{
    detect_color_mode, install, style_table, ColorValue, Section, StyleKey, StyleTokenTable,
    StyleValue,
};

#[derive(Parser)]
#[command(name = "inspector-style", about = "Inspect inspector panel style tokens")]
struct Cli {
    /// Stylesheet to use instead of the built-in styles
    #[arg(long, global = true)]
    sheet: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List tokens with their kinds and values
    List {
        /// Only list keys of this section
        #[arg(long)]
        section: Option<Section>,
    },
    /// Print one token
    Get { key: StyleKey },
    /// Print the table as a stylesheet
    Export {
        #[arg(long, value_enum, default_value_t = Format::Yaml)]
        format: Format,
    },
    /// Load a stylesheet and report whether it builds
    Check { file: PathBuf },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(path) = &cli.sheet {
        install(load_sheet(path)?)?;
    }

    match cli.command {
        Command::List { section } => list(section),
        Command::Get { key } => {
            println!("{}", describe(key, style_table().lookup(key)));
            Ok(())
        }
        Command::Export { format } => {
            let table = style_table();
            let output = match format {
                Format::Yaml => table.to_yaml()?,
                Format::Json => table.to_json()?,
            };
            println!("{}", output);
            Ok(())
        }
        Command::Check { file } => {
            StyleTokenTable::from_yaml_file(&file)
                .with_context(|| format!("{} is not a valid stylesheet", file.display()))?;
            println!("{} {}", style("ok").green(), file.display());
            Ok(())
        }
    }
}

fn load_sheet(path: &Path) -> Result<StyleTokenTable> {
    StyleTokenTable::from_yaml_file(path)
        .with_context(|| format!("loading stylesheet {}", path.display()))
}

fn list(only: Option<Section>) -> Result<()> {
    let table = style_table();
    println!(
        "{}",
        style(format!("system appearance: {}", detect_color_mode().as_str())).dim()
    );

    for section in Section::ALL.iter().copied() {
        if only.is_some_and(|only| only != section) {
            continue;
        }
        println!("\n{}", style(section.name()).bold());
        for (key, value) in table.section(section) {
            println!("  {}", describe(key, value));
        }
    }
    Ok(())
}

fn describe(key: StyleKey, value: &StyleValue) -> String {
    let swatches: String = value.colors().iter().map(swatch).collect();
    format!(
        "{:<48} {:<9} {}{}",
        key.name(),
        key.kind(),
        swatches,
        value
    )
}

fn swatch(color: &ColorValue) -> String {
    format!("{} ", style("  ").bg(color.to_console_color()))
}
