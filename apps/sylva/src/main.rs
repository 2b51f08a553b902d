use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;
use sylva_bintree::BinaryTree;
use sylva_config::{BstScenario, SylvaConfig, load_config};
use sylva_forest::GenTree;
use sylva_logging::{LogLevel, Logger};
use sylva_parse::{ParseError, parse_int_list};

mod report;

#[derive(Parser, Debug)]
#[command(name = "sylva")]
#[command(about = "Build, traverse and measure teaching trees.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
    /// YAML or JSON config file with scenarios and logging settings.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log at debug level.
    #[arg(long, short, global = true)]
    verbose: bool,
}

/// Comma-separated integers, e.g. `25,60,35`.
#[derive(Debug, Clone, Default)]
struct IntList(Vec<i32>);

impl FromStr for IntList {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_int_list(s).map(IntList)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Insert values into a binary search tree, then delete and insert more.
    Bst {
        /// Values inserted first (defaults to the configured scenario).
        #[arg(long, allow_hyphen_values = true)]
        values: Option<IntList>,
        /// Values deleted afterwards.
        #[arg(long, allow_hyphen_values = true)]
        delete: Option<IntList>,
        /// Values inserted after the deletions.
        #[arg(long, allow_hyphen_values = true)]
        insert: Option<IntList>,
    },
    /// Traverse and measure a binary tree given as `1(2,3(4,-))`.
    Bt {
        #[arg(long, allow_hyphen_values = true)]
        tree: Option<BinaryTree>,
        /// Print the metrics as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Print a general tree given as `0(1(5,6,7),2(8),3)` as an expression.
    Forest {
        #[arg(long, allow_hyphen_values = true)]
        tree: Option<GenTree>,
    },
    /// Run all three configured scenarios.
    Demo,
}

fn parse_binary_tree(notation: &str) -> Result<BinaryTree> {
    notation
        .parse()
        .with_context(|| format!("invalid binary tree {notation:?}"))
}

fn parse_gen_tree(notation: &str) -> Result<GenTree> {
    notation
        .parse()
        .with_context(|| format!("invalid general tree {notation:?}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SylvaConfig::new(),
    };
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging = logging.with_level(LogLevel::Debug);
    }
    let mut logger = Logger::stderr(logging);
    if let Some(path) = &cli.config {
        logger.debug("config", format!("loaded {}", path.display()));
    }

    match cli.cmd {
        Command::Bst {
            values,
            delete,
            insert,
        } => {
            let defaults = config.bst;
            let scenario = BstScenario {
                values: values.map_or(defaults.values, |l| l.0),
                delete: delete.map_or(defaults.delete, |l| l.0),
                insert: insert.map_or(defaults.insert, |l| l.0),
            };
            print!("{}", report::bst_report(&scenario, &mut logger));
        }

        Command::Bt { tree, json } => {
            let tree = match tree {
                Some(tree) => tree,
                None => parse_binary_tree(&config.binary_tree.notation)?,
            };
            if json {
                let metrics = serde_json::to_string_pretty(&tree.metrics())
                    .context("Failed to serialize metrics")?;
                println!("{metrics}");
            } else {
                print!("{}", report::binary_tree_report(&tree, &mut logger));
            }
        }

        Command::Forest { tree } => {
            let tree = match tree {
                Some(tree) => tree,
                None => parse_gen_tree(&config.forest.notation)?,
            };
            print!("{}", report::forest_report(&tree, &mut logger));
        }

        Command::Demo => {
            let binary_tree = parse_binary_tree(&config.binary_tree.notation)?;
            let gen_tree = parse_gen_tree(&config.forest.notation)?;

            logger.info("bst", "binary search tree scenario");
            print!("{}", report::bst_report(&config.bst, &mut logger));
            println!();
            logger.info("bt", "binary tree scenario");
            print!("{}", report::binary_tree_report(&binary_tree, &mut logger));
            println!();
            logger.info("forest", "general tree scenario");
            print!("{}", report::forest_report(&gen_tree, &mut logger));
        }
    }

    Ok(())
}
