//! Detection over the checked-in fixture trees

use stackmatch::fs::RealFileSystem;
use stackmatch::stack::StackRegistry;
use stackmatch::{Component, DetectionService};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn detect(name: &str) -> Vec<Component> {
    let env: HashMap<String, String> = HashMap::new();
    DetectionService::with_parts(
        Arc::new(RealFileSystem::new()),
        Arc::new(StackRegistry::with_defaults()),
        Arc::new(env),
    )
    .detect_components(fixture(name))
    .unwrap()
}

fn names(components: &[Component]) -> Vec<&str> {
    components.iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn test_polyglot_monorepo() {
    let components = detect("monorepo/polyglot");
    assert_eq!(names(&components), vec!["api", "web", "worker"]);

    let api = &components[0];
    assert_eq!(api.languages[0].name, "Go");
    assert!(api.frameworks().contains(&"Gin".to_string()));
    assert_eq!(api.ports, vec![8080]);

    let web = &components[1];
    assert_eq!(web.languages[0].name, "JavaScript");
    assert!(web.frameworks().contains(&"Express".to_string()));
    assert_eq!(web.ports, vec![3000]);

    let worker = &components[2];
    assert_eq!(worker.languages[0].name, "Python");
    assert!(worker.frameworks().contains(&"Flask".to_string()));
    assert_eq!(worker.ports, vec![5000]);
}

#[test]
fn test_cargo_workspace_members() {
    let components = detect("monorepo/cargo-workspace");
    assert_eq!(names(&components), vec!["app", "lib-a", "lib-b"]);
    assert!(components.iter().all(|c| c.languages[0].name == "Rust"));
    assert!(components.iter().all(|c| c.languages[0].tools == vec!["Cargo"]));
}

#[test]
fn test_nested_projects_keep_innermost() {
    let components = detect("edge-cases/nested-projects");
    assert_eq!(names(&components), vec!["inner"]);
}
