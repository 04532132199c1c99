//! Subcommand drivers: argument translation, pipeline invocation, exit codes.

use super::commands::{GenerateArgs, PlanArgs};
use super::output::render_plan;
use crate::config::AppYamlFinder;
use crate::pipeline::{GeneratedFiles, PipelineConfigurator, PipelinePlan};
use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;
use tracing::error;

pub fn handle_generate(args: &GenerateArgs, quiet: bool) -> i32 {
    match run_generate(args) {
        Ok(files) => {
            if !quiet {
                println!("Generated {}", files.dockerfile.display());
                println!("Generated {}", files.dockerignore.display());
            }
            0
        }
        Err(err) => {
            error!("{:#}", err);
            1
        }
    }
}

pub fn handle_plan(args: &PlanArgs) -> i32 {
    match run_plan(args) {
        Ok(rendered) => {
            print!("{}", rendered);
            0
        }
        Err(err) => {
            error!("{:#}", err);
            1
        }
    }
}

fn run_generate(args: &GenerateArgs) -> Result<GeneratedFiles> {
    let workspace = resolve_workspace(args)?;
    let files = configurator(args)
        .generate_docker_resources(&workspace)
        .with_context(|| {
            format!(
                "failed to generate Docker resources for {}",
                workspace.display()
            )
        })?;
    Ok(files)
}

fn run_plan(args: &PlanArgs) -> Result<String> {
    let workspace = resolve_workspace(&args.generate)?;
    let plan: PipelinePlan = configurator(&args.generate)
        .plan(&workspace)
        .with_context(|| format!("failed to plan the pipeline for {}", workspace.display()))?;
    render_plan(&plan, args.format.into())
}

fn configurator(args: &GenerateArgs) -> PipelineConfigurator {
    let mut overrides: BTreeMap<String, String> = args.set.iter().cloned().collect();
    // convenience flags win over --set for the same key
    if let Some(jdk) = &args.jdk {
        overrides.insert("jdk".to_string(), jdk.clone());
    }
    if let Some(server) = &args.server {
        overrides.insert("server".to_string(), server.clone());
    }

    PipelineConfigurator::new(
        AppYamlFinder::new(args.config.clone()),
        overrides,
        args.no_source_build,
    )
}

fn resolve_workspace(args: &GenerateArgs) -> Result<PathBuf> {
    let workspace = match &args.workspace {
        Some(path) => path.clone(),
        None => env::current_dir().context("failed to determine the current directory")?,
    };
    if !workspace.is_dir() {
        bail!("workspace {} is not a directory", workspace.display());
    }
    Ok(workspace)
}
