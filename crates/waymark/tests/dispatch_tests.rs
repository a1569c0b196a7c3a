//! End-to-end tests: config file -> route table -> dispatch

use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;
use tempfile::TempDir;
use waymark::{Config, Controller, DispatchError, Dispatcher, QueryParams, Response};

const CONFIG: &str = r#"
[app]
name = "blog"

[routing]
default_controller = "Home"

[[routes]]
name = "post"
pattern = "/posts/:slug"
controller = "Blog"
action = "view"

[routes.params]
format = "html"

[[routes]]
name = "feed"
pattern = "feed"
controller = "Blog"
action = "feed"

[routes.params]
format = "rss"
"#;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("waymark.toml");
    fs::write(&path, content).unwrap();
    path
}

fn app() -> Dispatcher {
    let config = Config::parse(CONFIG).unwrap();
    let mut dispatcher = Dispatcher::from_config(&config).unwrap();

    dispatcher
        .register(Controller::new("home").action("index", |_| Ok(Response::content("home"))))
        .register(
            Controller::new("blog")
                .on_init(|ctx| {
                    ctx.query.set("visited", "yes");
                    Ok(())
                })
                .action("view", |ctx| {
                    Ok(Response::content(format!(
                        "{} as {} ({})",
                        ctx.param("slug").unwrap_or("-"),
                        ctx.param("format").unwrap_or("-"),
                        ctx.param("visited").unwrap_or("no"),
                    )))
                })
                .action("feed", |ctx| {
                    Ok(Response::content(format!(
                        "feed as {}",
                        ctx.param("format").unwrap_or("-")
                    )))
                })
                .action("old", |_| Ok(Response::redirect_with_status("/feed", 301))),
        );
    dispatcher
}

#[test]
fn test_load_config_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, CONFIG);

    let config = Config::load(&path).unwrap();
    assert_eq!(config.app.name, "blog");
    assert_eq!(config.routes.len(), 2);
    assert_eq!(config.routes[0].pattern, "/posts/:slug");
}

#[test]
fn test_missing_config_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_invalid_config_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[routing\n");

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[rstest]
#[case("/", "home")]
#[case("/posts/hello", "hello as html (yes)")]
#[case("/posts/hello?format=json", "hello as html (yes)")]
#[case("/feed", "feed as rss")]
#[case("/blog/view/slug/other", "other as - (yes)")]
#[case("/blog/view/slug/other/format/atom", "other as atom (yes)")]
fn test_dispatch(#[case] uri: &str, #[case] expected: &str) {
    let response = app().dispatch(uri, QueryParams::default()).unwrap();
    assert_eq!(response, Response::content(expected));
}

#[test]
fn test_route_params_override_query_string() {
    let query = QueryParams::from_query_string("format=json&slug=ignored");
    let response = app().dispatch("/posts/hello", query).unwrap();
    assert_eq!(response, Response::content("hello as html (yes)"));
}

#[test]
fn test_query_string_survives_without_merge() {
    let toml = CONFIG.replace(
        "default_controller = \"Home\"",
        "default_controller = \"Home\"\nmerge_params = false",
    );
    let config = Config::parse(&toml).unwrap();
    assert!(!config.routing.merge_params);
    let mut dispatcher = Dispatcher::from_config(&config).unwrap();
    dispatcher.register(Controller::new("blog").action("view", |ctx| {
        Ok(Response::content(ctx.query.get("format").cloned().unwrap_or_default()))
    }));

    let response = dispatcher
        .dispatch("/posts/x", QueryParams::from_query_string("format=json"))
        .unwrap();
    assert_eq!(response, Response::content("json"));
}

#[test]
fn test_redirect_action() {
    let response = app().dispatch("/blog/old", QueryParams::default()).unwrap();
    assert_eq!(
        response,
        Response::Redirect {
            location: "/feed".to_string(),
            status: 301
        }
    );
}

#[test]
fn test_unknown_controller() {
    let err = app()
        .dispatch("/users/list", QueryParams::default())
        .unwrap_err();
    assert!(matches!(err, DispatchError::ControllerNotFound { .. }));
}

#[test]
fn test_init_failure_stops_action() {
    let mut dispatcher = Dispatcher::new(waymark::Router::new());
    dispatcher.register(
        Controller::new("admin")
            .on_init(|_| Err(anyhow::anyhow!("not logged in")))
            .action("index", |_| Ok(Response::content("secret"))),
    );

    let err = dispatcher.dispatch("/admin", QueryParams::default()).unwrap_err();
    assert!(matches!(err, DispatchError::Action { ref action, .. } if action == "index"));
}
