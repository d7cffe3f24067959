// File: src/routes.rs
// Purpose: The application's route table

use speeches_router::{error::Result, RouteDefinition, RouteTable};

use crate::views::{
    HomeView, SingleParagraphView, SingleSpeakerView, SingleSpeechView, SpeakersView,
    SpeechesView,
};

pub const HOME: &str = "home";
pub const SPEECHES: &str = "speeches";
pub const SINGLE_PARAGRAPH: &str = "single-paragraph";
pub const SPEAKERS: &str = "speakers";
pub const SINGLE_SPEAKER: &str = "single-speaker";
pub const SINGLE_SPEECH: &str = "single-speech";

/// Builds the route table
///
/// Order matters: `/:speech_name` captures every single-segment path, so any
/// new top-level page must be declared above it.
pub fn route_table() -> Result<RouteTable> {
    RouteTable::new([
        RouteDefinition::new("/", HOME, HomeView)?.with_meta("title", "Speeches"),
        RouteDefinition::new("/speeches", SPEECHES, SpeechesView)?
            .with_meta("title", "All speeches"),
        RouteDefinition::new("/speech/:paragraph_id", SINGLE_PARAGRAPH, SingleParagraphView)?,
        RouteDefinition::new("/speakers", SPEAKERS, SpeakersView)?
            .with_meta("title", "All speakers"),
        RouteDefinition::new("/speaker/:name", SINGLE_SPEAKER, SingleSpeakerView)?,
        RouteDefinition::new("/:speech_name", SINGLE_SPEECH, SingleSpeechView)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order() {
        let table = route_table().unwrap();
        let names: Vec<&str> = table.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![HOME, SPEECHES, SINGLE_PARAGRAPH, SPEAKERS, SINGLE_SPEAKER, SINGLE_SPEECH]
        );
    }

    #[test]
    fn test_no_route_is_shadowed() {
        let table = route_table().unwrap();
        assert!(table.shadowed_routes().is_empty());
    }

    #[test]
    fn test_listing_titles() {
        let table = route_table().unwrap();
        assert_eq!(table.get(SPEAKERS).unwrap().get_meta("title"), Some("All speakers"));
        assert_eq!(table.get(SINGLE_SPEECH).unwrap().get_meta("title"), None);
    }
}
