//! Text reports printed by the CLI.

use std::fmt::Write as _;
use std::io::Write;

use sylva_bintree::{BinaryTree, Metrics};
use sylva_bst::Bst;
use sylva_config::BstScenario;
use sylva_forest::{GenTree, render_expression};
use sylva_logging::Logger;

/// Space-separated values, each followed by a space.
pub fn value_line(values: &[i32]) -> String {
    values.iter().fold(String::new(), |mut line, v| {
        let _ = write!(line, "{v} ");
        line
    })
}

fn join(values: &[i32]) -> String {
    values
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn bst_report<W: Write>(scenario: &BstScenario, logger: &mut Logger<W>) -> String {
    let mut tree: Bst = scenario.values.iter().copied().collect();
    logger.debug(
        "bst",
        format!("inserted {} values, height {}", tree.len(), tree.height()),
    );

    let mut out = String::new();
    let _ = writeln!(out, "Infix  (sorted): {}", value_line(&tree.infix()));
    let _ = writeln!(out, "Prefix: {}", value_line(&tree.prefix()));
    let _ = writeln!(out, "Postfix: {}", value_line(&tree.postfix()));

    if scenario.delete.is_empty() && scenario.insert.is_empty() {
        return out;
    }

    for &value in &scenario.delete {
        if !tree.delete(value) {
            logger.warn("bst", format!("{value} not present, nothing deleted"));
        }
    }
    tree.extend(scenario.insert.iter().copied());

    let _ = writeln!(
        out,
        "\nAfter delete [{}] and insert [{}]:",
        join(&scenario.delete),
        join(&scenario.insert)
    );
    let _ = writeln!(out, "Infix  (sorted): {}", value_line(&tree.infix()));
    out
}

pub fn metrics_report(metrics: &Metrics) -> String {
    format!(
        "Size={}\nHeight={}\nLCE={}\nLCI={}\nLC={}\nLeaves={}\nPE={:.2}\n",
        metrics.size,
        metrics.height,
        metrics.lce,
        metrics.lci,
        metrics.lc,
        metrics.leaves,
        metrics.pe
    )
}

pub fn binary_tree_report<W: Write>(tree: &BinaryTree, logger: &mut Logger<W>) -> String {
    logger.debug("bt", format!("measuring {tree}"));
    let mut out = String::new();
    let _ = writeln!(out, "Prefix  (P-G-D): {}", value_line(&tree.prefix()));
    let _ = writeln!(out, "Infix   (G-P-D): {}", value_line(&tree.infix()));
    let _ = writeln!(out, "Postfix (G-D-P): {}", value_line(&tree.postfix()));
    out.push('\n');
    out.push_str(&metrics_report(&tree.metrics()));
    out
}

pub fn forest_report<W: Write>(tree: &GenTree, logger: &mut Logger<W>) -> String {
    logger.debug(
        "forest",
        format!("rendering tree with {} children", tree.children().count()),
    );
    format!("{}\n", render_expression(tree))
}
