// Shared file format parsers
//
// Language-agnostic readers for Dockerfiles, Compose manifests, .env files,
// properties/YAML/JSON application config and build manifests. Every function
// here is lenient: unreadable or malformed input yields no evidence rather
// than an error.

pub mod config;
pub mod docker_compose;
pub mod dockerfile;
pub mod env_file;
pub mod manifest;

use regex::Regex;

/// A TCP/UDP port in 1..=65535, or `None`
pub fn parse_port(raw: &str) -> Option<u16> {
    let value: u32 = raw.trim().parse().ok()?;
    if (1..=65535).contains(&value) {
        Some(value as u16)
    } else {
        None
    }
}

pub fn port_from_i64(value: i64) -> Option<u16> {
    if (1..=65535).contains(&value) {
        Some(value as u16)
    } else {
        None
    }
}

/// Valid ports captured by group `group` of every match of `re`, in order, deduplicated
pub fn ports_from_captures(re: &Regex, content: &str, group: usize) -> Vec<u16> {
    let mut ports = Vec::new();
    for cap in re.captures_iter(content) {
        if let Some(port) = cap.get(group).and_then(|m| parse_port(m.as_str())) {
            push_unique(&mut ports, port);
        }
    }
    ports
}

pub fn push_unique(ports: &mut Vec<u16>, port: u16) {
    if !ports.contains(&port) {
        ports.push(port);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port_bounds() {
        assert_eq!(parse_port("8080"), Some(8080));
        assert_eq!(parse_port(" 1 "), Some(1));
        assert_eq!(parse_port("65535"), Some(65535));
        assert_eq!(parse_port("0"), None);
        assert_eq!(parse_port("65536"), None);
        assert_eq!(parse_port("-1"), None);
        assert_eq!(parse_port("http"), None);
        assert_eq!(parse_port(""), None);
    }

    #[test]
    fn test_ports_from_captures_dedup() {
        let re = Regex::new(r"port:\s*(\d+)").unwrap();
        let ports = ports_from_captures(&re, "port: 80\nport: 99999\nport: 80\nport: 443", 1);
        assert_eq!(ports, vec![80, 443]);
    }
}
