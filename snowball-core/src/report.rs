// Rendering of the accumulated graph and the run summary

use crate::error::Result;
use crate::graph::Graph;
use crate::scheduler::CrawlOutcome;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Pretty-prints the graph as a JSON object of name -> sorted related names,
/// four-space indent, followed by a newline.
pub fn write_json<W: Write>(graph: &Graph, mut writer: W) -> Result<()> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    graph.serialize(&mut serializer)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

pub fn render_json(graph: &Graph) -> Result<String> {
    let mut buffer = Vec::new();
    write_json(graph, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Write the graph to `path`, or to standard output when no path is given.
pub fn write_report(graph: &Graph, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => write_json(graph, BufWriter::new(File::create(path)?)),
        None => write_json(graph, io::stdout().lock()),
    }
}

/// Human-readable summary of a finished run.
pub fn generate_summary(outcome: &CrawlOutcome) -> String {
    let stats = &outcome.stats;

    let mut report = String::new();
    report.push_str("# Summary:\n");
    report.push_str(&format!("  Seeds: {}\n", stats.seeded));
    report.push_str(&format!("  Discovered: {}\n", stats.discovered));
    report.push_str(&format!("  People visited: {}\n", stats.visited));
    report.push_str(&format!("  Relations recorded: {}\n", stats.edges));
    if stats.gaps > 0 {
        report.push_str(&format!("  Pages without relations section: {}\n", stats.gaps));
    }
    if outcome.cancelled {
        report.push_str("  Stopped early: graph is partial\n");
    }
    report
}
