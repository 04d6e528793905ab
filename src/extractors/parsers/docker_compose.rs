//! Docker Compose manifest parsing utilities

use super::{parse_port, port_from_i64, push_unique};
use crate::fs::FileSystem;
use serde_yaml::Value;
use std::path::Path;
use tracing::debug;

/// Compose manifest names in lookup order
pub const COMPOSE_FILES: &[&str] = &[
    "docker-compose.yml",
    "docker-compose.yaml",
    "compose.yml",
    "compose.yaml",
];

/// Host-facing ports of every service, in document order.
///
/// Short entries (`"8080:80"`, `"127.0.0.1:8080:80"`, `"80"`, `80`) and long
/// entries (`{published, target}`) are both understood. The published port wins
/// when it is a valid number; otherwise the container port is used.
pub fn parse_ports(content: &str) -> Result<Vec<u16>, serde_yaml::Error> {
    let doc: Value = serde_yaml::from_str(content)?;
    let mut ports = Vec::new();

    let Some(services) = doc.get("services").and_then(Value::as_mapping) else {
        return Ok(ports);
    };

    for (_, service) in services {
        let Some(entries) = service.get("ports").and_then(Value::as_sequence) else {
            continue;
        };
        for entry in entries {
            if let Some(port) = entry_port(entry) {
                push_unique(&mut ports, port);
            }
        }
    }

    Ok(ports)
}

/// Ports from the first compose manifest in `root` that declares any
pub fn find_ports(fs: &dyn FileSystem, root: &Path) -> Vec<u16> {
    for name in COMPOSE_FILES {
        let path = root.join(name);
        let Ok(content) = fs.read_to_string(&path) else {
            continue;
        };
        match parse_ports(&content) {
            Ok(ports) if !ports.is_empty() => return ports,
            Ok(_) => {}
            Err(e) => debug!(file = %path.display(), error = %e, "Malformed compose file"),
        }
    }
    Vec::new()
}

fn entry_port(entry: &Value) -> Option<u16> {
    match entry {
        Value::Number(n) => n.as_i64().and_then(port_from_i64),
        Value::String(s) => short_syntax_port(s),
        Value::Mapping(_) => {
            let published = entry.get("published").and_then(scalar_port);
            published.or_else(|| entry.get("target").and_then(scalar_port))
        }
        _ => None,
    }
}

fn scalar_port(value: &Value) -> Option<u16> {
    match value {
        Value::Number(n) => n.as_i64().and_then(port_from_i64),
        Value::String(s) => parse_port(s),
        _ => None,
    }
}

fn short_syntax_port(raw: &str) -> Option<u16> {
    let without_proto = raw.split('/').next().unwrap_or_default();
    let mut parts = without_proto.rsplitn(3, ':');
    let container = parts.next()?;
    let host = parts.next().filter(|h| !h.is_empty());

    host.and_then(parse_port).or_else(|| parse_port(container))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    #[test]
    fn test_short_syntax() {
        let ports = parse_ports(
            r#"
services:
  web:
    image: web
    ports:
      - "3000:3000"
  api:
    ports:
      - "8000:8000"
"#,
        )
        .unwrap();
        assert_eq!(ports, vec![3000, 8000]);
    }

    #[test]
    fn test_short_syntax_variants() {
        assert_eq!(short_syntax_port("8080:80"), Some(8080));
        assert_eq!(short_syntax_port("127.0.0.1:5000:5432"), Some(5000));
        assert_eq!(short_syntax_port("127.0.0.1::5432"), Some(5432));
        assert_eq!(short_syntax_port("6060/udp"), Some(6060));
        assert_eq!(short_syntax_port("${HOST_PORT}:9000"), Some(9000));
        assert_eq!(short_syntax_port("nope"), None);
    }

    #[test]
    fn test_long_syntax() {
        let ports = parse_ports(
            r#"
services:
  app:
    ports:
      - target: 80
        published: 8080
        protocol: tcp
      - target: 9229
      - 4000
"#,
        )
        .unwrap();
        assert_eq!(ports, vec![8080, 9229, 4000]);
    }

    #[test]
    fn test_no_services() {
        assert!(parse_ports("version: '3'\n").unwrap().is_empty());
        assert!(parse_ports("services:\n  db:\n    image: postgres\n")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_malformed_yaml() {
        assert!(parse_ports("services: [unclosed").is_err());
    }

    #[test]
    fn test_find_ports_lookup_order() {
        let fs = MockFileSystem::new();
        fs.add_file("compose.yaml", "services:\n  a:\n    ports: ['9000:9000']\n");
        fs.add_file(
            "docker-compose.yml",
            "services:\n  a:\n    ports: ['3000:3000']\n",
        );

        assert_eq!(find_ports(&fs, Path::new("/mock")), vec![3000]);
    }

    #[test]
    fn test_find_ports_skips_malformed() {
        let fs = MockFileSystem::new();
        fs.add_file("docker-compose.yml", "services: [");
        fs.add_file("compose.yml", "services:\n  a:\n    ports: ['7000']\n");

        assert_eq!(find_ports(&fs, Path::new("/mock")), vec![7000]);
    }
}
