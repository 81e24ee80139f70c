use std::path::Path;

use regex::Regex;
use tracing::{debug, warn};

use crate::{
    ide::{IdeLocation, IdePosition, IdeRange},
    navigation::{
        query::{definition_pattern, find_locations},
        sources::{SourceProvider, SourceSet},
    },
    syntax::patterns::HANDLER_ANYWHERE,
    text_pos,
};

/// `getUser` -> `GetUser`. Only the first character changes.
pub fn to_pascal_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Identifier under the cursor, plus the text of its line.
pub fn word_at_position(
    text: &str,
    position: IdePosition,
) -> Option<(&str, &str)> {
    let line = text_pos::lines(text).nth(position.line as usize)?;
    let word = text_pos::word_at(line, position.character)?;
    Some((word, line))
}

/// Go-to-definition for the identifier at `position` in the document
/// `path` whose current text is `text`.
///
/// * A handler name jumps to `func ... HandlerName(` lines in
///   implementation files.
/// * A name on its own declaration line lists its references instead.
/// * Anything else finds `type|enum NAME {` lines, current document
///   first.
pub async fn resolve_definition(
    path: &Path,
    text: &str,
    position: IdePosition,
    sources: &dyn SourceProvider,
    is_cancelled: &(dyn Fn() -> bool + Send + Sync),
) -> Vec<IdeLocation> {
    let Some((word, line)) = word_at_position(text, position) else {
        return Vec::new();
    };

    if is_handler_name(line, word) {
        return find_handler_implementations(word, sources, is_cancelled).await;
    }

    let Some(definition) = definition_pattern(word) else {
        return Vec::new();
    };

    if definition.is_match(line) {
        debug!("'{word}' is declared here, listing references");
        return find_locations(word, sources, is_cancelled).await;
    }

    let mut locations = matching_lines(path, text, &definition);
    for other in sources.list_files(SourceSet::Frg).await {
        if is_cancelled() {
            return locations;
        }
        if other == path {
            continue;
        }
        match sources.read_file(&other).await {
            Ok(other_text) => locations.extend(matching_lines(&other, &other_text, &definition)),
            Err(error) => warn!("Skipping {}: {error}", other.display()),
        }
    }
    locations
}

/// Find-references for the identifier at `position`.
pub async fn resolve_references(
    text: &str,
    position: IdePosition,
    sources: &dyn SourceProvider,
    is_cancelled: &(dyn Fn() -> bool + Send + Sync),
) -> Vec<IdeLocation> {
    match word_at_position(text, position) {
        Some((word, _)) => find_locations(word, sources, is_cancelled).await,
        None => Vec::new(),
    }
}

fn is_handler_name(
    line: &str,
    word: &str,
) -> bool {
    HANDLER_ANYWHERE.captures(line).is_some_and(|caps| &caps[1] == word)
}

/// Every line in an implementation file declaring the handler's function.
pub async fn find_handler_implementations(
    handler: &str,
    sources: &dyn SourceProvider,
    is_cancelled: &(dyn Fn() -> bool + Send + Sync),
) -> Vec<IdeLocation> {
    let function = to_pascal_case(handler);
    let Ok(signature) = Regex::new(&format!(r"func\s+.*{}\s*\(", regex::escape(&function))) else {
        return Vec::new();
    };

    let mut locations = Vec::new();
    for path in sources.list_files(SourceSet::Implementation).await {
        if is_cancelled() {
            break;
        }
        match sources.read_file(&path).await {
            Ok(text) => locations.extend(matching_lines(&path, &text, &signature)),
            Err(error) => warn!("Skipping {}: {error}", path.display()),
        }
    }
    debug!("handler '{handler}' -> {function}: {} candidate(s)", locations.len());
    locations
}

fn matching_lines(
    path: &Path,
    text: &str,
    pattern: &Regex,
) -> Vec<IdeLocation> {
    text_pos::lines(text)
        .enumerate()
        .filter(|(_, line)| pattern.is_match(line))
        .map(|(index, _)| IdeLocation::new(path, IdeRange::line_start(index as u32)))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src/navigation/resolver_tests.rs"]
mod tests;
