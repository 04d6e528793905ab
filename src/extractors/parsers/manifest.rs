//! Build manifest dependency checks used for framework tagging

use regex::Regex;
use tracing::debug;

/// Whether a Maven POM or Gradle build declares anything from `group`.
///
/// POMs are read structurally: any `groupId` equal to `group` (or a sub-group of it)
/// counts, whether it sits in a dependency, plugin or parent. Gradle scripts are
/// matched textually.
pub fn java_has_group(config: &str, group: &str) -> bool {
    if !config.trim_start().starts_with('<') {
        return config.contains(group);
    }

    let doc = match roxmltree::Document::parse(config) {
        Ok(doc) => doc,
        Err(e) => {
            debug!(error = %e, "Unparseable pom.xml");
            return false;
        }
    };

    let sub_group = format!("{}.", group);
    doc.descendants()
        .filter(|n| n.has_tag_name("groupId"))
        .filter_map(|n| n.text())
        .map(str::trim)
        .any(|g| g == group || g.starts_with(&sub_group))
}

/// Whether `package.json` lists `name` in any dependency table
pub fn npm_has_dependency(config: &str, name: &str) -> bool {
    let json: serde_json::Value = match serde_json::from_str(config) {
        Ok(json) => json,
        Err(_) => return false,
    };

    ["dependencies", "devDependencies", "peerDependencies"]
        .iter()
        .filter_map(|table| json.get(table).and_then(|t| t.as_object()))
        .any(|deps| deps.contains_key(name))
}

/// A script body from `package.json`
pub fn npm_script(config: &str, script: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(config).ok()?;
    json.get("scripts")?
        .get(script)?
        .as_str()
        .map(str::to_string)
}

/// Whether `go.mod` requires `module` (or a major-version path of it)
pub fn go_requires(config: &str, module: &str) -> bool {
    config.lines().any(|line| {
        let line = line.trim();
        let line = line.strip_prefix("require").map(str::trim).unwrap_or(line);
        line.starts_with(module)
    })
}

/// Whether a requirements.txt, pyproject.toml, setup.py or Pipfile mentions package `name`
pub fn python_requires(config: &str, name: &str) -> bool {
    let pattern = format!(
        r#"(?im)(^|["'\s,\[])({})\s*($|[=<>~!\[;"',\s])"#,
        regex::escape(name)
    );
    Regex::new(&pattern)
        .map(|re| re.is_match(config))
        .unwrap_or(false)
}
