//! Pipeline Tests
//!
//! End-to-end checks of the content-driven rendering pipeline's state
//! handling: content loading, the loading sequence, the loading-gated hero
//! reveal and the once-only scroll reveals. Everything is driven by
//! synthetic tick deltas; no test sleeps.

use std::time::Duration;

use pretty_assertions::assert_eq;

use folio_core::{
    targets, ContentError, ContentStore, HeroReveal, LoadingPhase, LoadingSequencer, ScrollReveals,
};

const VALID: &str = r#"{
    "personal": {
        "name": "Ada",
        "title": "Engineer",
        "summary": "Builds things.",
        "email": "ada@example.dev",
        "github": "https://github.com/ada",
        "linkedin": "https://www.linkedin.com/in/ada"
    },
    "skills": { "frontend": ["React", "Vue"], "backend": ["Rust"] },
    "focus": ["Compilers"],
    "experience": [
        { "year": "2024", "company": "A" },
        { "year": "2023", "company": "B" },
        { "year": "2022", "company": "C" }
    ],
    "projects": []
}"#;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

// P1: every documented section is reachable on a valid document
#[test]
fn all_sections_accessible_after_load() {
    let store = ContentStore::from_json(VALID).unwrap();
    assert_eq!(store.personal().name, "Ada");
    assert_eq!(store.skills().frontend, vec!["React", "Vue"]);
    assert_eq!(store.focus(), ["Compilers"]);
    assert_eq!(store.experience().len(), 3);
    assert!(store.projects().is_empty());
    assert!(store.theme().colors.is_empty());
}

// P2: a missing required section fails with a configuration error
#[test]
fn missing_required_sections_fail_load() {
    for section in ["personal", "skills", "experience", "projects"] {
        let mut value: serde_json::Value = serde_json::from_str(VALID).unwrap();
        value.as_object_mut().unwrap().remove(section);
        let json = value.to_string();
        match ContentStore::from_json(&json) {
            Err(ContentError::MissingSection(name)) => assert_eq!(name, section),
            other => panic!("expected MissingSection({section}), got {other:?}"),
        }
    }
}

// P3: the loading sequencer walks Showing(0..N) once each, then one
// Draining, then one Complete, and completion fires exactly once
#[test]
fn loading_sequence_visits_each_phase_once() {
    let mut seq = LoadingSequencer::standard();
    seq.start();

    let mut phases = vec![seq.phase()];
    let mut completions = 0;
    for _ in 0..500 {
        if seq.tick(ms(25)) {
            phases.push(seq.phase());
        }
        if seq.take_completion() {
            completions += 1;
        }
    }

    assert_eq!(
        phases,
        vec![
            LoadingPhase::Showing(0),
            LoadingPhase::Showing(1),
            LoadingPhase::Showing(2),
            LoadingPhase::Showing(3),
            LoadingPhase::Showing(4),
            LoadingPhase::Draining,
            LoadingPhase::Complete,
        ]
    );
    assert_eq!(completions, 1);

    // Further ticks and restarts change nothing
    seq.start();
    assert!(!seq.tick(ms(10_000)));
    assert!(!seq.take_completion());
}

// P4: the hero sequence never begins before the loading sequence completes
#[test]
fn hero_reveal_waits_for_loading_completion() {
    let store = ContentStore::from_json(VALID).unwrap();
    let mut seq = LoadingSequencer::standard();
    let mut hero = HeroReveal::new();
    seq.start();

    // Drive the composition loop the way the app does: only the
    // completion edge may begin the hero sequence
    for _ in 0..600 {
        seq.tick(ms(25));
        if seq.take_completion() {
            hero.begin(&store);
        }
        hero.tick(ms(25));

        if !seq.is_complete() {
            assert!(!hero.has_begun(), "hero began before loading completed");
        }
    }

    assert!(seq.is_complete());
    assert!(hero.has_begun());
    assert!(hero.is_finished());
}

// P5: a scroll-reveal target fires at most once per session
#[test]
fn scroll_reveals_never_rearm() {
    let mut reveals = ScrollReveals::new();
    let mut firings = 0;

    // Scroll the element in and out of view repeatedly
    for pass in 0..10 {
        let fraction = if pass % 2 == 0 { 1.0 } else { 0.0 };
        if reveals.observe("experience-1", fraction, 0.5) {
            firings += 1;
        }
        reveals.tick(ms(100));
    }

    assert_eq!(firings, 1);
    assert!((reveals.progress("experience-1") - 1.0).abs() < f32::EPSILON);
}

// P6: tearing the hero region down mid-sequence leaves nothing that can
// fire afterwards
#[test]
fn cancelled_hero_sequence_has_no_late_effects() {
    let store = ContentStore::from_json(VALID).unwrap();
    let mut hero = HeroReveal::new();
    hero.begin(&store);
    hero.tick(ms(700)); // mid title cascade
    hero.cancel();

    // Time passing after teardown must not surface any stage
    hero.tick(Duration::from_secs(60));
    assert!(hero.timeline().is_none());
}

// Scenario: experience entries are presented in document order, unmodified
#[test]
fn experience_order_is_preserved() {
    let store = ContentStore::from_json(VALID).unwrap();
    let years: Vec<&str> = store
        .experience()
        .iter()
        .map(|e| e.year.as_str())
        .collect();
    assert_eq!(years, vec!["2024", "2023", "2022"]);
}

// The hero terminal types the reference commands in order
#[test]
fn hero_commands_type_in_order() {
    let store = ContentStore::from_json(VALID).unwrap();
    let mut hero = HeroReveal::new();
    hero.begin(&store);

    let mut seen = Vec::new();
    for _ in 0..400 {
        hero.tick(ms(50));
        let tl = hero.timeline().unwrap();
        for (target, text) in [
            (targets::COMMAND_1, "profile --summary"),
            (targets::COMMAND_2, "profile --skills"),
            (targets::COMMAND_3, "profile --focus"),
        ] {
            if tl.typed_prefix(target).as_deref() == Some(text) && !seen.contains(&target) {
                seen.push(target);
            }
        }
    }
    assert_eq!(
        seen,
        vec![targets::COMMAND_1, targets::COMMAND_2, targets::COMMAND_3]
    );
}
