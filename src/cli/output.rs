//! Rendering of pipeline plans for the `plan` subcommand.

use crate::pipeline::PipelinePlan;
use anyhow::{Context, Result};
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Human,
}

pub fn render_plan(plan: &PipelinePlan, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(plan).context("failed to serialize plan as JSON")
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(plan).context("failed to serialize plan as YAML")
        }
        OutputFormat::Human => Ok(render_human(plan)),
    }
}

fn render_human(plan: &PipelinePlan) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Build steps:");
    for (index, step) in plan.steps.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", index + 1, step);
    }

    let _ = writeln!(out, "Runtime configuration:");
    let config = &plan.runtime_config;
    let fields: [(&str, Option<String>); 5] = [
        ("jdk", config.jdk.clone()),
        ("artifact", config.artifact.clone()),
        ("server", config.server.clone()),
        ("build_script", config.build_script.clone()),
        (
            "jetty_quickstart",
            config.jetty_quickstart.map(|b| b.to_string()),
        ),
    ];
    for (name, value) in fields {
        let _ = writeln!(
            out,
            "  {}: {}",
            name,
            value.unwrap_or_else(|| "(unset)".to_string())
        );
    }

    match &plan.app_yaml {
        Some(path) => {
            let _ = writeln!(out, "Configuration document: {}", path.display());
        }
        None => {
            let _ = writeln!(out, "Configuration document: (not found)");
        }
    }

    out
}
