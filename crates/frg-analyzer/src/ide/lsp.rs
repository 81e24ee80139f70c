use tower_lsp::lsp_types::{GotoDefinitionResponse, Location, Position, Range, Url};

use crate::ide::navigation::{IdeLocation, IdePosition, IdeRange};

pub fn lsp_position_to_ide(position: Position) -> IdePosition {
    IdePosition::new(position.line, position.character)
}

pub fn ide_position_to_lsp(position: IdePosition) -> Position {
    Position::new(position.line, position.character)
}

pub fn ide_range_to_lsp(range: IdeRange) -> Range {
    Range::new(ide_position_to_lsp(range.start), ide_position_to_lsp(range.end))
}

pub fn ide_location_to_lsp(location: IdeLocation) -> Option<Location> {
    let uri = Url::from_file_path(&location.file_path).ok()?;
    Some(Location {
        uri,
        range: ide_range_to_lsp(location.range),
    })
}

pub fn ide_locations_to_lsp(locations: Vec<IdeLocation>) -> Vec<Location> {
    locations.into_iter().filter_map(ide_location_to_lsp).collect()
}

/// A single hit jumps directly; several hits open the peek list.
pub fn locations_to_definition_response(locations: Vec<IdeLocation>) -> Option<GotoDefinitionResponse> {
    let mut lsp_locations = ide_locations_to_lsp(locations);
    match lsp_locations.len() {
        0 => None,
        1 => lsp_locations.pop().map(GotoDefinitionResponse::Scalar),
        _ => Some(GotoDefinitionResponse::Array(lsp_locations)),
    }
}

#[cfg(test)]
#[path = "../../tests/src/ide/lsp_tests.rs"]
mod tests;
