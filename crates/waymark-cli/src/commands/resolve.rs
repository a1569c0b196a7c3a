// File: src/commands/resolve.rs
// Purpose: `waymark resolve` - show how request paths are routed

use std::collections::BTreeMap;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use waymark::Config;
use waymark_router::path::strip_query;
use waymark_router::Router;

/// How one path was routed
#[derive(Debug, PartialEq, Serialize)]
pub struct Resolution {
    pub path: String,
    /// Name of the matching route, `None` for the fallback convention
    pub route: Option<String>,
    pub controller: String,
    pub action: String,
    pub params: BTreeMap<String, String>,
}

pub fn execute(config: &Config, paths: &[String], json: bool) -> Result<()> {
    let router = config.build_router()?;
    let resolutions = resolve_paths(&router, paths);

    if json {
        println!("{}", serde_json::to_string_pretty(&resolutions)?);
        return Ok(());
    }

    for resolution in &resolutions {
        let via = match &resolution.route {
            Some(name) => format!("route {}", name).green(),
            None => "default route".yellow(),
        };
        println!(
            "{} -> {}/{} ({})",
            resolution.path.bold(),
            resolution.controller,
            resolution.action,
            via
        );
        for (key, value) in &resolution.params {
            println!("    {} = {}", key.cyan(), value);
        }
    }

    Ok(())
}

fn resolve_paths(router: &Router, paths: &[String]) -> Vec<Resolution> {
    paths
        .iter()
        .map(|raw| {
            let path = strip_query(raw);
            let (entry, request) = router.resolve_with_route(path);
            Resolution {
                path: path.to_string(),
                route: entry.map(|entry| entry.name.clone()),
                controller: request.controller,
                action: request.action,
                params: request.params.into_iter().collect(),
            }
        })
        .collect()
}
