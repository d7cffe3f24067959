//! Route table behaviour of the speeches application

use pretty_assertions::assert_eq;
use rstest::rstest;
use speeches_app::routes::*;
use speeches_app::{App, Config};
use speeches_router::{Params, RouterError};

fn params(pairs: &[(&str, &str)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn app() -> App {
    App::new(&Config::default()).unwrap()
}

#[rstest]
#[case("/", HOME, &[])]
#[case("/speeches", SPEECHES, &[])]
#[case("/speech/42", SINGLE_PARAGRAPH, &[("paragraph_id", "42")])]
#[case("/speakers", SPEAKERS, &[])]
#[case("/speaker/lincoln", SINGLE_SPEAKER, &[("name", "lincoln")])]
#[case("/gettysburg", SINGLE_SPEECH, &[("speech_name", "gettysburg")])]
#[case("/speech", SINGLE_SPEECH, &[("speech_name", "speech")])]
#[case("/speaker", SINGLE_SPEECH, &[("speech_name", "speaker")])]
fn test_match(#[case] path: &str, #[case] name: &str, #[case] expected: &[(&str, &str)]) {
    let table = route_table().unwrap();
    let route_match = table.match_path(path).unwrap();
    assert_eq!(route_match.name(), name);
    assert_eq!(route_match.params, params(expected));
}

#[test]
fn test_listings_are_not_captured_by_wildcard() {
    let table = route_table().unwrap();
    assert_eq!(table.match_path("/speeches").unwrap().name(), SPEECHES);
    assert_eq!(table.match_path("/speakers").unwrap().name(), SPEAKERS);
    assert_ne!(table.match_path("/speeches").unwrap().name(), SINGLE_SPEECH);
}

#[rstest]
#[case("/speeches/extra/segments")]
#[case("/speech/42/extra")]
#[case("/speaker/lincoln/bio")]
#[case("/gettysburg/address")]
fn test_no_match(#[case] path: &str) {
    let err = route_table().unwrap().match_path(path).unwrap_err();
    assert_eq!(
        err,
        RouterError::NoMatch {
            path: path.to_string()
        }
    );
}

#[test]
fn test_matching_is_case_sensitive_by_default() {
    let table = route_table().unwrap();
    let route_match = table.match_path("/Speeches").unwrap();
    assert_eq!(route_match.name(), SINGLE_SPEECH);
    assert_eq!(route_match.params, params(&[("speech_name", "Speeches")]));
}

#[test]
fn test_resolve_by_name_round_trip() {
    let table = route_table().unwrap();
    let cases = [
        (HOME, params(&[])),
        (SPEECHES, params(&[])),
        (SINGLE_PARAGRAPH, params(&[("paragraph_id", "42")])),
        (SPEAKERS, params(&[])),
        (SINGLE_SPEAKER, params(&[("name", "lincoln")])),
        (SINGLE_SPEECH, params(&[("speech_name", "i have a dream")])),
    ];

    for (name, values) in cases {
        let path = table.resolve_by_name(name, &values).unwrap();
        let route_match = table.match_path(&path).unwrap();
        assert_eq!(route_match.name(), name);
        assert_eq!(route_match.params, values);
    }
}

#[test]
fn test_wildcard_value_spelling_a_listing_resolves_to_the_listing() {
    let table = route_table().unwrap();

    let path = table
        .resolve_by_name(SINGLE_SPEECH, &params(&[("speech_name", "speeches")]))
        .unwrap();
    assert_eq!(path, "/speeches");

    let route_match = table.match_path(&path).unwrap();
    assert_eq!(route_match.name(), SPEECHES);
    assert!(route_match.params.is_empty());
}

#[test]
fn test_resolve_single_speaker_without_name() {
    let err = route_table()
        .unwrap()
        .resolve_by_name(SINGLE_SPEAKER, &Params::new())
        .unwrap_err();
    assert_eq!(
        err,
        RouterError::MissingParam {
            route: SINGLE_SPEAKER.to_string(),
            param: "name".to_string(),
        }
    );
}

#[test]
fn test_resolve_unknown_route() {
    let err = route_table()
        .unwrap()
        .resolve_by_name("single-quote", &Params::new())
        .unwrap_err();
    assert!(matches!(err, RouterError::UnknownRoute { .. }));
}

#[test]
fn test_views_render_matched_route() {
    let app = app();
    let html = app
        .router()
        .resolve("/speaker/lincoln")
        .unwrap()
        .render()
        .into_string();
    assert!(html.contains(r#"<h1 data-speaker="lincoln">lincoln</h1>"#));

    let html = app.router().resolve("/").unwrap().render().into_string();
    assert!(html.contains("<title>Speeches</title>"));
}

#[test]
fn test_base_path_from_config() {
    let config = Config::default().with_base_url(Some("/archive/".to_string()));
    let app = App::new(&config).unwrap();

    assert_eq!(
        app.router().resolve("/archive/speech/42").unwrap().name(),
        SINGLE_PARAGRAPH
    );
    assert!(app.router().resolve("/speech/42").is_err());
    assert_eq!(
        app.router()
            .href(SINGLE_SPEAKER, &params(&[("name", "lincoln")]))
            .unwrap(),
        "/archive/speaker/lincoln"
    );
}

#[test]
fn test_case_insensitive_config() {
    let mut config = Config::default();
    config.router.case_insensitive = true;
    let app = App::new(&config).unwrap();

    assert_eq!(app.router().resolve("/SPEAKERS").unwrap().name(), SPEAKERS);
}

#[test]
fn test_navigator_session() {
    let config = Config::default().with_base_url(Some("/archive".to_string()));
    let mut nav = App::new(&config).unwrap().navigator();
    assert_eq!(nav.current().unwrap().route.name, HOME);

    let speech = nav.navigate("/gettysburg").unwrap().id;
    let speaker = nav
        .navigate_to(SINGLE_SPEAKER, &params(&[("name", "lincoln")]))
        .unwrap()
        .id;

    assert!(!nav.is_current(speech));
    assert!(nav.is_current(speaker));
    assert_eq!(
        nav.history().entries(),
        &["/archive", "/archive/gettysburg", "/archive/speaker/lincoln"]
    );

    let back = nav.back().unwrap().unwrap();
    assert_eq!(back.route.name, SINGLE_SPEECH);
    assert_eq!(back.route.params, params(&[("speech_name", "gettysburg")]));
}
