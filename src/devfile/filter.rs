//! Schema-version filtering of catalog entries

use super::version::SchemaVersion;
use crate::error::{DetectError, Result};
use crate::model::{DevfileFilter, DevfileType, MIN_ALLOWED_SCHEMA_VERSION};
use tracing::debug;

impl DevfileFilter {
    pub fn new(min: Option<&str>, max: Option<&str>) -> Self {
        Self {
            min_schema_version: min.map(str::to_string),
            max_schema_version: max.map(str::to_string),
        }
    }

    /// Parsed `(min, max)` bounds.
    ///
    /// Fails when a bound is unparseable, below the minimum allowed schema
    /// version, or when `max < min`.
    pub fn bounds(&self) -> Result<(Option<SchemaVersion>, Option<SchemaVersion>)> {
        let floor: SchemaVersion = MIN_ALLOWED_SCHEMA_VERSION.parse()?;
        let parse = |raw: &Option<String>, label: &str| -> Result<Option<SchemaVersion>> {
            let Some(raw) = raw.as_deref().filter(|r| !r.trim().is_empty()) else {
                return Ok(None);
            };
            let version: SchemaVersion = raw.parse()?;
            if version < floor {
                return Err(DetectError::Validation(format!(
                    "{} schema version {} is below the minimum allowed {}",
                    label, raw, MIN_ALLOWED_SCHEMA_VERSION
                )));
            }
            Ok(Some(version))
        };

        let min = parse(&self.min_schema_version, "min")?;
        let max = parse(&self.max_schema_version, "max")?;
        if let (Some(min), Some(max)) = (min, max) {
            if max < min {
                return Err(DetectError::Validation(format!(
                    "max schema version {} is lower than min schema version {}",
                    max, min
                )));
            }
        }
        Ok((min, max))
    }

    pub fn validate(&self) -> Result<()> {
        self.bounds().map(|_| ())
    }

    pub fn is_empty(&self) -> bool {
        self.min_schema_version.is_none() && self.max_schema_version.is_none()
    }
}

/// Entries with at least one version inside the filter's range, plus entries without versions
pub fn filter_types(types: Vec<DevfileType>, filter: &DevfileFilter) -> Result<Vec<DevfileType>> {
    let (min, max) = filter.bounds()?;
    if min.is_none() && max.is_none() {
        return Ok(types);
    }

    let in_range = |raw: &str| match raw.parse::<SchemaVersion>() {
        Ok(v) => min.map_or(true, |m| v >= m) && max.map_or(true, |m| v <= m),
        Err(_) => false,
    };

    Ok(types
        .into_iter()
        .filter(|t| {
            let keep = t.versions.is_empty()
                || t.versions.iter().any(|v| in_range(&v.schema_version));
            if !keep {
                debug!(devfile = %t.name, "Outside requested schema range");
            }
            keep
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Version;

    fn entry(name: &str, schemas: &[&str]) -> DevfileType {
        DevfileType {
            name: name.to_string(),
            versions: schemas
                .iter()
                .map(|s| Version {
                    schema_version: s.to_string(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_ranges() {
        assert!(DevfileFilter::new(Some("2.2.0"), Some("2.1.0")).validate().is_err());
        assert!(DevfileFilter::new(Some("1.1.0"), None).validate().is_err());
        assert!(DevfileFilter::new(None, Some("1.9.9")).validate().is_err());
        assert!(DevfileFilter::new(Some("two"), None).validate().is_err());
        assert!(DevfileFilter::new(Some("2.0.0"), Some("2.2.0")).validate().is_ok());
        assert!(DevfileFilter::default().validate().is_ok());
    }

    #[test]
    fn test_validation_error_kind() {
        let err = DevfileFilter::new(Some("2.2.0"), Some("2.1.0"))
            .validate()
            .unwrap_err();
        assert!(matches!(err, DetectError::Validation(_)));
    }

    #[test]
    fn test_filter_types() {
        let types = vec![
            entry("old", &["2.0.0"]),
            entry("mixed", &["2.0.0", "2.2.0"]),
            entry("new", &["2.3.0"]),
            entry("unversioned", &[]),
            entry("broken", &["latest"]),
        ];
        let filter = DevfileFilter::new(Some("2.1.0"), Some("2.2.0"));

        let kept: Vec<String> = filter_types(types, &filter)
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(kept, vec!["mixed", "unversioned"]);
    }

    #[test]
    fn test_filter_without_bounds_keeps_all() {
        let types = vec![entry("a", &["2.0.0"]), entry("b", &["latest"])];
        assert_eq!(filter_types(types.clone(), &DevfileFilter::default()).unwrap(), types);
    }

    #[test]
    fn test_filter_rejects_invalid_range() {
        let filter = DevfileFilter::new(Some("2.2.0"), Some("2.1.0"));
        assert!(filter_types(vec![entry("a", &["2.1.5"])], &filter).is_err());
    }
}
