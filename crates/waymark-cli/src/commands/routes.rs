// File: src/commands/routes.rs
// Purpose: `waymark routes` - print the route table in match order

use anyhow::Result;
use colored::Colorize;
use waymark::Config;
use waymark_router::{RouteEntry, Router};

pub fn execute(config: &Config) -> Result<()> {
    let router = config.build_router()?;

    if router.is_empty() {
        println!("{}", "No explicit routes configured".yellow());
    } else {
        for line in route_lines(&router) {
            println!("{}", line);
        }
    }

    let fallback = router.default_route();
    println!(
        "{} {}/{} (positional convention)",
        "fallback".dimmed(),
        fallback.default_controller(),
        fallback.default_action()
    );

    Ok(())
}

/// One line per route: `name  template  -> Controller/action {params}`
fn route_lines(router: &Router) -> Vec<String> {
    let width = router
        .routes()
        .iter()
        .map(|entry| entry.name.len())
        .max()
        .unwrap_or(0);

    router
        .routes()
        .iter()
        .map(|entry| {
            format!(
                "{:width$}  {}  -> {}",
                entry.name.bold(),
                entry.pattern.template().cyan(),
                describe_target(entry, router),
                width = width
            )
        })
        .collect()
}

fn describe_target(entry: &RouteEntry, router: &Router) -> String {
    let fallback = router.default_route();
    let controller = entry
        .target
        .controller
        .as_deref()
        .unwrap_or(fallback.default_controller());
    let action = entry
        .target
        .action
        .as_deref()
        .unwrap_or(fallback.default_action());

    if entry.target.params.is_empty() {
        return format!("{}/{}", controller, action);
    }

    let mut params: Vec<String> = entry
        .target
        .params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();
    params.sort();
    format!("{}/{} {{{}}}", controller, action, params.join(", "))
}
