// File: src/views.rs
// Purpose: Page-level views, one per route

use maud::{html, Markup, DOCTYPE};
use speeches_router::{Params, ViewComponent};

/// Shared page shell
fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head { title { (title) } }
            body { (body) }
        }
    }
}

fn param<'a>(params: &'a Params, name: &str) -> &'a str {
    params.get(name).map(String::as_str).unwrap_or_default()
}

pub struct HomeView;

impl ViewComponent for HomeView {
    fn name(&self) -> &'static str {
        "HomeView"
    }

    fn render(&self, _params: &Params) -> Markup {
        page("Speeches", html! { h1 { "Speeches" } })
    }
}

pub struct SpeechesView;

impl ViewComponent for SpeechesView {
    fn name(&self) -> &'static str {
        "SpeechesView"
    }

    fn render(&self, _params: &Params) -> Markup {
        page("All speeches", html! { h1 { "All speeches" } })
    }
}

pub struct SpeakersView;

impl ViewComponent for SpeakersView {
    fn name(&self) -> &'static str {
        "SpeakersView"
    }

    fn render(&self, _params: &Params) -> Markup {
        page("All speakers", html! { h1 { "All speakers" } })
    }
}

pub struct SingleSpeakerView;

impl ViewComponent for SingleSpeakerView {
    fn name(&self) -> &'static str {
        "SingleSpeakerView"
    }

    fn render(&self, params: &Params) -> Markup {
        let name = param(params, "name");
        page(name, html! { h1 data-speaker=(name) { (name) } })
    }
}

pub struct SingleSpeechView;

impl ViewComponent for SingleSpeechView {
    fn name(&self) -> &'static str {
        "SingleSpeechView"
    }

    fn render(&self, params: &Params) -> Markup {
        let speech = param(params, "speech_name");
        page(speech, html! { h1 data-speech=(speech) { (speech) } })
    }
}

pub struct SingleParagraphView;

impl ViewComponent for SingleParagraphView {
    fn name(&self) -> &'static str {
        "SingleParagraphView"
    }

    fn render(&self, params: &Params) -> Markup {
        let paragraph = param(params, "paragraph_id");
        page(
            &format!("Paragraph {}", paragraph),
            html! { article data-paragraph=(paragraph) {} },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speaker_view_escapes_name() {
        let mut params = Params::new();
        params.insert("name".to_string(), "<script>".to_string());

        let html = SingleSpeakerView.render(&params).into_string();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_paragraph_view_title() {
        let mut params = Params::new();
        params.insert("paragraph_id".to_string(), "42".to_string());

        let html = SingleParagraphView.render(&params).into_string();
        assert!(html.contains("<title>Paragraph 42</title>"));
        assert!(html.contains(r#"data-paragraph="42""#));
    }
}
