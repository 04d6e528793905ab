//! Application configuration parsing: `.properties`, YAML and JSON

use super::{parse_port, port_from_i64};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// `key=value` / `key: value` pairs of a Java properties file
pub fn parse_properties(content: &str) -> HashMap<String, String> {
    let mut props = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let split = line
            .find(['=', ':'])
            .map(|idx| (&line[..idx], &line[idx + 1..]));
        if let Some((key, value)) = split {
            props.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    props
}

/// Valid port stored under `key` in a properties file
pub fn property_port(props: &HashMap<String, String>, key: &str) -> Option<u16> {
    props.get(key).and_then(|v| parse_port(v))
}

/// Every document of a possibly multi-document YAML file; malformed documents are skipped
pub fn yaml_documents(content: &str) -> Vec<serde_yaml::Value> {
    serde_yaml::Deserializer::from_str(content)
        .filter_map(|doc| serde_yaml::Value::deserialize(doc).ok())
        .collect()
}

/// Value at a dotted path. Both nested maps and flat dotted keys are followed,
/// so `server.port` finds `server: {port: 1}` as well as `server.port: 1`.
pub fn yaml_lookup<'a>(root: &'a serde_yaml::Value, dotted: &str) -> Option<&'a serde_yaml::Value> {
    if let Some(v) = root.get(dotted) {
        return Some(v);
    }
    let (head, rest) = dotted.split_once('.')?;
    yaml_lookup(root.get(head)?, rest)
}

pub fn yaml_port(root: &serde_yaml::Value, dotted: &str) -> Option<u16> {
    match yaml_lookup(root, dotted)? {
        serde_yaml::Value::Number(n) => n.as_i64().and_then(port_from_i64),
        serde_yaml::Value::String(s) => parse_port(s),
        _ => None,
    }
}

pub fn yaml_bool(root: &serde_yaml::Value, dotted: &str) -> bool {
    match yaml_lookup(root, dotted) {
        Some(serde_yaml::Value::Bool(b)) => *b,
        Some(serde_yaml::Value::String(s)) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

pub fn json_port(root: &serde_json::Value, dotted: &str) -> Option<u16> {
    let value = root.get(dotted).or_else(|| {
        dotted
            .split('.')
            .try_fold(root, |node, key| node.get(key))
    })?;
    match value {
        serde_json::Value::Number(n) => n.as_i64().and_then(port_from_i64),
        serde_json::Value::String(s) => parse_port(s),
        _ => None,
    }
}

pub fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yml") | Some("yaml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_properties() {
        let props = parse_properties(
            r#"
# comment
server.port=9090
server.http.port : 8081
spring.datasource.url=jdbc:postgresql://db:5432/app
"#,
        );
        assert_eq!(property_port(&props, "server.port"), Some(9090));
        assert_eq!(property_port(&props, "server.http.port"), Some(8081));
        assert_eq!(
            props.get("spring.datasource.url").map(String::as_str),
            Some("jdbc:postgresql://db:5432/app")
        );
        assert_eq!(property_port(&props, "missing"), None);
    }

    #[test]
    fn test_property_port_placeholder_rejected() {
        let props = parse_properties("server.port=${PORT:8080}\n");
        assert_eq!(property_port(&props, "server.port"), None);
    }

    #[test]
    fn test_yaml_lookup_nested_and_flat() {
        let doc: serde_yaml::Value = serde_yaml::from_str(
            r#"
server:
  port: 8081
quarkus.http.port: 8090
micronaut:
  server:
    ssl:
      enabled: true
      port: "8443"
"#,
        )
        .unwrap();
        assert_eq!(yaml_port(&doc, "server.port"), Some(8081));
        assert_eq!(yaml_port(&doc, "quarkus.http.port"), Some(8090));
        assert_eq!(yaml_port(&doc, "micronaut.server.ssl.port"), Some(8443));
        assert!(yaml_bool(&doc, "micronaut.server.ssl.enabled"));
        assert_eq!(yaml_port(&doc, "server.http.port"), None);
    }

    #[test]
    fn test_yaml_documents() {
        let docs = yaml_documents("server:\n  port: 1\n---\nserver:\n  port: 2\n");
        assert_eq!(docs.len(), 2);
        assert_eq!(yaml_port(&docs[1], "server.port"), Some(2));
    }

    #[test]
    fn test_json_port() {
        let doc: serde_json::Value =
            serde_json::from_str(r#"{"http.port": 8888, "http": {"server": {"port": "9999"}}}"#)
                .unwrap();
        assert_eq!(json_port(&doc, "http.port"), Some(8888));
        assert_eq!(json_port(&doc, "http.server.port"), Some(9999));
        assert_eq!(json_port(&doc, "nope"), None);
    }

    #[test]
    fn test_is_yaml() {
        assert!(is_yaml(Path::new("application.yml")));
        assert!(is_yaml(Path::new("a/application.yaml")));
        assert!(!is_yaml(Path::new("application.properties")));
    }
}
