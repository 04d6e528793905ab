//! Ranking of catalog entries against detected languages

use crate::error::{DetectError, Result};
use crate::model::{Component, DevfileScore, DevfileType, Language};
use tracing::debug;

const LANGUAGE_SCORE: u32 = 1;
const PROJECT_TYPE_SCORE: u32 = 10;
const FRAMEWORK_TAG_SCORE: u32 = 10;
const TOOL_TAG_SCORE: u32 = 5;

/// The language with the strictly highest weight; the first one wins a tie
pub fn main_language(languages: &[Language]) -> Result<&Language> {
    let mut iter = languages.iter();
    let first = iter.next().ok_or(DetectError::EmptyInput)?;
    Ok(iter.fold(first, |best, l| if l.weight > best.weight { l } else { best }))
}

/// Scores of every entry matching `language`, best first; ties keep catalog order
pub fn match_language(language: &Language, types: &[DevfileType]) -> Vec<DevfileScore> {
    let mut scores: Vec<DevfileScore> = types
        .iter()
        .enumerate()
        .filter_map(|(index, devfile)| {
            score(language, devfile).map(|score| DevfileScore {
                devfile_index: index,
                score,
            })
        })
        .collect();
    scores.sort_by(|a, b| b.score.cmp(&a.score));
    scores
}

/// `None` when the entry shares neither the language nor a framework/tool tag
fn score(language: &Language, devfile: &DevfileType) -> Option<u32> {
    let language_match = language.is_named(&devfile.language);

    let mut total = if language_match { LANGUAGE_SCORE } else { 0 };
    let mut tag_match = false;

    let project_type = normalize(&devfile.project_type);
    if !project_type.is_empty()
        && language
            .frameworks
            .iter()
            .any(|f| normalize(f) == project_type)
    {
        total += PROJECT_TYPE_SCORE;
    }

    for tag in &devfile.tags {
        if language.frameworks.iter().any(|f| f.eq_ignore_ascii_case(tag)) {
            total += FRAMEWORK_TAG_SCORE;
            tag_match = true;
        }
        if language.tools.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
            total += TOOL_TAG_SCORE;
            tag_match = true;
        }
    }

    (language_match || tag_match).then_some(total)
}

/// Lowercase alphanumerics only, so `springboot` equals `Spring Boot`
fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Ranked indices of entries matching the main language
pub fn select_devfiles_from_types(languages: &[Language], types: &[DevfileType]) -> Result<Vec<usize>> {
    let main = main_language(languages)?;
    debug!(language = %main.name, "Matching devfiles for main language");
    Ok(match_language(main, types)
        .into_iter()
        .map(|s| s.devfile_index)
        .collect())
}

/// Union of every component's ranked indices, first occurrence kept
pub fn select_devfiles_from_components(
    components: &[Component],
    types: &[DevfileType],
) -> Result<Vec<usize>> {
    let mut indices: Vec<usize> = Vec::new();
    for component in components {
        if component.languages.is_empty() {
            debug!(component = %component.name, "Component without languages, skipped");
            continue;
        }
        for index in select_devfiles_from_types(&component.languages, types)? {
            if !indices.contains(&index) {
                indices.push(index);
            }
        }
    }
    Ok(indices)
}

/// Index of the single best entry for the main language
pub fn select_devfile_from_types(languages: &[Language], types: &[DevfileType]) -> Result<usize> {
    select_devfiles_from_types(languages, types)?
        .first()
        .copied()
        .ok_or_else(|| DetectError::NotFound("No valid devfile found for project".to_string()))
}
