// Integration tests for Lume Matchmaker

use lume_matchmaker::core::preference::{accept_when_unmatched, always};
use lume_matchmaker::{Listing, MatchError, MatchPair, MatchingSettings, Settings, StableMatcher};
use std::collections::HashSet;

fn create_listings(prefix: &str, pairs: &[(&str, &str)]) -> Vec<Listing> {
    pairs
        .iter()
        .enumerate()
        .map(|(i, (want, have))| Listing::new(format!("{}{}", prefix, i), *want, *have))
        .collect()
}

fn ids(pairs: &[(&Listing, &Listing)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(v, p)| (v.id.clone(), p.id.clone()))
        .collect()
}

#[test]
fn test_integration_empty_sides() {
    let mut matcher = StableMatcher::new(Vec::new(), Vec::new(), Listing::prefers);
    assert!(matcher.matches().unwrap().is_empty());

    let vacancies = create_listings("v", &[("a", "b"), ("c", "d"), ("e", "f")]);
    let mut matcher = StableMatcher::new(Vec::new(), vacancies, always());
    assert!(matcher.matches().unwrap().is_empty());

    let profiles = create_listings("p", &[("a", "b")]);
    let mut matcher = StableMatcher::new(profiles, Vec::new(), always());
    assert!(matcher.matches().unwrap().is_empty());
}

#[test]
fn test_integration_single_swap() {
    let profiles = vec![Listing::new("p", "red", "blue")];
    let vacancies = vec![Listing::new("v", "blue", "red")];

    let mut matcher = StableMatcher::new(profiles, vacancies, accept_when_unmatched(Listing::prefers));
    let pairs = matcher.matches().unwrap();

    assert_eq!(ids(&pairs), vec![("v".to_string(), "p".to_string())]);
}

#[test]
fn test_integration_partial_complementary_market() {
    let profiles = create_listings("p", &[("x", "red"), ("x", "green"), ("x", "gold")]);
    let vacancies = create_listings("v", &[("green", "x"), ("red", "x"), ("silver", "x")]);

    let mut matcher = StableMatcher::new(profiles, vacancies, Listing::prefers);
    let pairs = matcher.matches().unwrap();

    // Vacancy order, with the unpartnered v2 and p2 absent
    assert_eq!(
        ids(&pairs),
        vec![
            ("v0".to_string(), "p1".to_string()),
            ("v1".to_string(), "p0".to_string()),
        ]
    );

    let records: Vec<MatchPair> = pairs.into_iter().map(MatchPair::from).collect();
    assert_eq!(records[0].vacancy_id, "v0");
    assert_eq!(records[1].profile_id, "p0");
}

#[test]
fn test_integration_no_double_matching_and_endorsed_pairs() {
    let colours = ["red", "green", "blue", "gold", "silver"];
    let profiles: Vec<Listing> = (0..12)
        .map(|i| Listing::new(format!("p{}", i), colours[i % 5], colours[(i * 3) % 5]))
        .collect();
    let vacancies: Vec<Listing> = (0..9)
        .map(|i| Listing::new(format!("v{}", i), colours[(i * 2) % 5], colours[(i + 1) % 5]))
        .collect();

    let mut matcher = StableMatcher::new(profiles, vacancies, Listing::prefers);
    let pairs = matcher.matches().unwrap();

    let mut seen_vacancies = HashSet::new();
    let mut seen_profiles = HashSet::new();
    for (vacancy, profile) in &pairs {
        assert!(seen_vacancies.insert(vacancy.id.clone()));
        assert!(seen_profiles.insert(profile.id.clone()));
        assert!(Listing::prefers(vacancy, Some(profile), profile));
    }
}

#[test]
fn test_integration_always_true_hits_iteration_cap() {
    let profiles = create_listings("p", &[("a", "b"), ("c", "d"), ("e", "f")]);
    let vacancies = create_listings("v", &[("b", "a"), ("d", "c"), ("f", "e")]);

    let settings = MatchingSettings { iteration_cap: 2 };
    let mut matcher = StableMatcher::from_settings(profiles, vacancies, always(), &settings);

    assert_eq!(matcher.matches().unwrap_err(), MatchError::NonConvergence { rounds: 2 });
}

#[test]
fn test_integration_into_matches_returns_owned_listings() {
    let profiles = create_listings("p", &[("x", "red"), ("x", "green")]);
    let vacancies = create_listings("v", &[("green", "x"), ("red", "x")]);

    let pairs = StableMatcher::new(profiles, vacancies, Listing::prefers)
        .into_matches()
        .unwrap();

    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].0.id, "v0");
    assert_eq!(pairs[0].1.id, "p1");
    assert_eq!(pairs[1].1.id, "p0");
}

#[test]
fn test_integration_settings_drive_matcher() {
    let settings = Settings::from_toml_str("[matching]\niteration_cap = 1\n").unwrap();
    let profiles = create_listings("p", &[("a", "b"), ("c", "d")]);
    let vacancies = create_listings("v", &[("b", "a"), ("d", "c")]);

    let mut matcher =
        StableMatcher::from_settings(profiles, vacancies, always(), &settings.matching);

    assert!(matches!(
        matcher.run(),
        Err(MatchError::NonConvergence { rounds: 1 })
    ));
}
