//! Paper Alluvial CLI: offline access to the cross-reference diagram
//!
//! Loads the two tables, builds the entity graph and then renders, inspects or
//! replays pointer interaction without a browser.

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use paper_alluvial::{Dimension, EntityId, Visualization, VizConfig};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "paper-alluvial", version, about = "Paper Alluvial diagram CLI")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, env = "PAPER_ALLUVIAL_CONFIG")]
    config: Option<PathBuf>,

    /// Taxonomy table, overrides the configured path
    #[arg(long, global = true)]
    categories: Option<PathBuf>,

    /// Paper table, overrides the configured path
    #[arg(long, global = true)]
    papers: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the diagram as SVG
    Render {
        /// Output file
        #[arg(long, short)]
        output: PathBuf,

        /// Draw only the group, category and year columns
        #[arg(long)]
        hide_authors: bool,
    },
    /// List the entities of one dimension, or the paper titles
    Inspect {
        /// group, category, year, author or titles
        target: String,
    },
    /// Show what hovering a box highlights
    Focus {
        dimension: Dimension,
        label: String,
    },
    /// Show the papers clicking a box lists
    Papers {
        dimension: Dimension,
        label: String,
    },
    /// Report labels and author fields extraction could not use
    Warnings,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => VizConfig::from_yaml_file(path)?,
        None => VizConfig::default(),
    };
    if let Some(path) = cli.categories {
        config.data.categories_path = path;
    }
    if let Some(path) = cli.papers {
        config.data.papers_path = path;
    }

    let mut viz = Visualization::load(config)
        .await
        .context("loading paper index")?;

    match cli.command {
        Commands::Render { output, hide_authors } => run_render(&mut viz, &output, hide_authors),
        Commands::Inspect { target } => run_inspect(&viz, &target, &cli.format),
        Commands::Focus { dimension, label } => run_focus(&mut viz, dimension, &label, &cli.format),
        Commands::Papers { dimension, label } => run_papers(&mut viz, dimension, &label, &cli.format),
        Commands::Warnings => run_warnings(&viz, &cli.format),
    }
}

fn lookup(viz: &Visualization, dimension: Dimension, label: &str) -> anyhow::Result<EntityId> {
    viz.find(dimension, label)
        .ok_or_else(|| anyhow!("no {} named '{}'", dimension, label))
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn run_render(viz: &mut Visualization, output: &Path, hide_authors: bool) -> anyhow::Result<()> {
    if hide_authors {
        viz.set_show_authors(false);
    }
    let svg = viz.svg();
    std::fs::write(output, &svg).with_context(|| format!("writing {}", output.display()))?;
    println!(
        "Wrote {} ({} boxes, {} edges)",
        output.display(),
        viz.scene().box_count(),
        viz.scene().edge_count()
    );
    Ok(())
}

fn run_inspect(viz: &Visualization, target: &str, format: &OutputFormat) -> anyhow::Result<()> {
    if target.eq_ignore_ascii_case("titles") {
        let titles = viz.titles();
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(titles)?),
            OutputFormat::Table => {
                let mut table = new_table(vec!["Paper", "Title"]);
                for entry in titles {
                    table.add_row(vec![entry.paper_index.to_string(), entry.title.clone()]);
                }
                println!("{}", table);
                println!("{} title(s)", titles.len());
            }
        }
        return Ok(());
    }

    let dimension = Dimension::from_str(target).map_err(|e| anyhow!("{}", e))?;
    let entities = viz.graph().entities(dimension);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(entities)?),
        OutputFormat::Table => {
            let mut table = new_table(vec!["#", "Label", "Papers", "Left", "Right"]);
            for (index, entity) in entities.iter().enumerate() {
                table.add_row(vec![
                    index.to_string(),
                    entity.label.clone(),
                    entity.paper_count().to_string(),
                    entity.related_left().len().to_string(),
                    entity.related_right().len().to_string(),
                ]);
            }
            println!("{}", table);
            println!("{} {}(s)", entities.len(), dimension);
        }
    }
    Ok(())
}

fn run_focus(
    viz: &mut Visualization,
    dimension: Dimension,
    label: &str,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let id = lookup(viz, dimension, label)?;
    viz.pointer_enter(id)?;

    let mut lit = viz.scene().emphasized_boxes();
    lit.sort();
    let labels: Vec<(Dimension, String)> = lit
        .iter()
        .filter_map(|id| viz.graph().get(*id).map(|e| (id.dimension, e.label.clone())))
        .collect();

    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "focus": id,
                "boxes": labels
                    .iter()
                    .map(|(d, l)| serde_json::json!({ "dimension": d, "label": l }))
                    .collect::<Vec<_>>(),
                "edges": viz.scene().lit_edges(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Table => {
            let mut table = new_table(vec!["Dimension", "Highlighted"]);
            for dim in Dimension::ALL {
                let names: Vec<&str> = labels
                    .iter()
                    .filter(|(d, _)| *d == dim)
                    .map(|(_, l)| l.as_str())
                    .collect();
                if !names.is_empty() {
                    table.add_row(vec![dim.title().to_string(), names.join(", ")]);
                }
            }
            println!("{}", table);
            println!("{} edge(s) lit", viz.scene().lit_edges().len());
        }
    }
    Ok(())
}

fn run_papers(
    viz: &mut Visualization,
    dimension: Dimension,
    label: &str,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let id = lookup(viz, dimension, label)?;
    let panel = viz.click(id)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&panel.summaries)?),
        OutputFormat::Table => {
            if panel.is_empty() {
                println!("(no papers)");
                return Ok(());
            }
            for summary in &panel.summaries {
                println!("{}", summary.title);
                println!("  {}", summary.byline);
                if !summary.abstract_text.is_empty() {
                    println!("  {}", summary.abstract_text);
                }
                println!();
            }
            println!("{} paper(s)", panel.summaries.len());
        }
    }
    Ok(())
}

fn run_warnings(viz: &Visualization, format: &OutputFormat) -> anyhow::Result<()> {
    let warnings = viz.warnings();
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(warnings)?),
        OutputFormat::Table => {
            if warnings.is_empty() {
                println!("(no warnings)");
                return Ok(());
            }
            let mut table = new_table(vec!["Paper", "Problem"]);
            for warning in warnings {
                table.add_row(vec![warning.paper().to_string(), warning.to_string()]);
            }
            println!("{}", table);
            println!("{} warning(s)", warnings.len());
        }
    }
    Ok(())
}
