//! Roster building tests.
//!
//! These tests verify stat ranges, image picks, the capacity check and
//! the arena's trigger handling around adds.

use card_brawl::arena::{Arena, Rejection, Trigger};
use card_brawl::battle::BattleStep;
use card_brawl::cards::CharacterKind;
use card_brawl::core::{BrawlConfig, TeamSide, Teams};
use card_brawl::render::{RecordingRenderer, Renderer};
use card_brawl::roster::{RosterBuilder, RosterRejection};
use card_brawl::schedule::VirtualClock;
use card_brawl::zones::Lineup;

use proptest::prelude::*;

/// Every rolled character uses an image from its own kind's set.
#[test]
fn test_images_match_kind() {
    let config = BrawlConfig::default();
    let mut builder = RosterBuilder::new(config.clone(), 2024);

    for _ in 0..100 {
        let murloc = builder.roll_character(CharacterKind::Murloc);
        assert!(config.images.murloc.contains(&murloc.image));

        let demon = builder.roll_character(CharacterKind::Demon);
        assert!(config.images.demon.contains(&demon.image));
    }
}

/// Over enough rolls every image gets picked.
#[test]
fn test_all_images_reachable() {
    let config = BrawlConfig::default();
    let mut builder = RosterBuilder::new(config.clone(), 5);

    let mut seen = std::collections::HashSet::new();
    for _ in 0..500 {
        seen.insert(builder.roll_character(CharacterKind::Murloc).image);
    }
    assert_eq!(seen.len(), config.images.murloc.len());
}

/// A single-image config always picks that image.
#[test]
fn test_custom_image_set() {
    let config = BrawlConfig::default()
        .with_images(CharacterKind::Demon, vec!["imp.png".to_string()]);
    let mut builder = RosterBuilder::new(config, 1);

    for _ in 0..10 {
        assert_eq!(builder.roll_character(CharacterKind::Demon).image, "imp.png");
    }
}

/// Narrow stat ranges are honoured.
#[test]
fn test_custom_stat_range() {
    let config = BrawlConfig::default().with_stat_range(3, 4);
    let mut builder = RosterBuilder::new(config, 77);

    for _ in 0..100 {
        let c = builder.roll_character(CharacterKind::Murloc);
        assert!((3..=4).contains(&c.health()));
        assert!((3..=4).contains(&c.attack()));
    }
}

/// Capacity uses the configured ratio of the viewport.
#[test]
fn test_capacity_ratio() {
    let config = BrawlConfig::default().with_capacity_ratio(0.5);
    let mut builder = RosterBuilder::new(config, 3);
    let mut teams: Teams<Lineup> = Teams::default();
    let mut renderer = RecordingRenderer::new(1000.0, 100.0);

    let mut added = 0;
    while builder
        .recruit(&mut teams, &mut renderer, TeamSide::Team1)
        .is_ok()
    {
        added += 1;
    }

    assert_eq!(added, 5);
    assert_eq!(teams[TeamSide::Team1].len(), 5);
    assert!(renderer.team_extent(TeamSide::Team1) <= 500.0);
}

/// Cards taller than the allowance are never added.
#[test]
fn test_card_taller_than_limit() {
    let mut builder = RosterBuilder::new(BrawlConfig::default(), 3);
    let mut teams: Teams<Lineup> = Teams::default();
    let mut renderer = RecordingRenderer::new(100.0, 90.0);

    let result = builder.recruit(&mut teams, &mut renderer, TeamSide::Team2);
    assert!(matches!(result, Err(RosterRejection::Overflow { .. })));
    assert!(teams[TeamSide::Team2].is_empty());
    assert!(renderer.cues().is_empty());
}

/// Triggers map to the right container and kind.
#[test]
fn test_triggers_fill_teams() {
    let mut arena = Arena::new(
        BrawlConfig::default(),
        9,
        RecordingRenderer::new(1000.0, 100.0),
        VirtualClock::<BattleStep>::new(),
    )
    .unwrap();

    arena.handle(Trigger::AddMurloc).unwrap();
    arena.handle(Trigger::AddMurloc).unwrap();
    arena.handle(Trigger::AddDemon).unwrap();

    let teams = arena.teams();
    assert_eq!(teams[TeamSide::Team1].len(), 2);
    assert_eq!(teams[TeamSide::Team2].len(), 1);
    assert!(teams[TeamSide::Team1].iter().all(|c| c.kind == CharacterKind::Murloc));
    assert!(teams[TeamSide::Team2].iter().all(|c| c.kind == CharacterKind::Demon));

    for (side, lineup) in teams.iter() {
        let ids: Vec<_> = lineup.ids().collect();
        assert_eq!(arena.renderer().container(side), &ids[..]);
    }
}

/// With swapped team kinds, each add trigger follows its kind to the
/// other side.
#[test]
fn test_triggers_follow_configured_team_kinds() {
    let mut config = BrawlConfig::default();
    config.team_kinds = Teams::new(CharacterKind::Demon, CharacterKind::Murloc);
    let mut arena = Arena::new(
        config,
        9,
        RecordingRenderer::new(1000.0, 100.0),
        VirtualClock::<BattleStep>::new(),
    )
    .unwrap();

    arena.handle(Trigger::AddMurloc).unwrap();
    arena.handle(Trigger::AddMurloc).unwrap();
    arena.handle(Trigger::AddDemon).unwrap();

    let teams = arena.teams();
    assert_eq!(teams[TeamSide::Team2].len(), 2);
    assert_eq!(teams[TeamSide::Team1].len(), 1);
    assert!(teams[TeamSide::Team2].iter().all(|c| c.kind == CharacterKind::Murloc));
    assert!(teams[TeamSide::Team1].iter().all(|c| c.kind == CharacterKind::Demon));
}

/// Adds to a missing container are dropped.
#[test]
fn test_missing_container_through_arena() {
    let mut arena = Arena::new(
        BrawlConfig::default(),
        9,
        RecordingRenderer::new(1000.0, 100.0).without_container(TeamSide::Team2),
        VirtualClock::<BattleStep>::new(),
    )
    .unwrap();

    assert_eq!(
        arena.handle(Trigger::AddDemon),
        Err(Rejection::Roster(RosterRejection::MissingContainer(TeamSide::Team2)))
    );
    assert!(arena.teams()[TeamSide::Team2].is_empty());
    assert!(arena.handle(Trigger::AddMurloc).is_ok());
}

/// The same seed builds the same lineups.
#[test]
fn test_seeded_arena_is_reproducible() {
    let build = || {
        let mut arena = Arena::new(
            BrawlConfig::default(),
            123,
            RecordingRenderer::new(1000.0, 100.0),
            VirtualClock::<BattleStep>::new(),
        )
        .unwrap();
        for _ in 0..4 {
            arena.handle(Trigger::AddMurloc).unwrap();
            arena.handle(Trigger::AddDemon).unwrap();
        }
        arena.teams().clone()
    };

    assert_eq!(build(), build());
}

proptest! {
    /// Rolled stats always land in 1..=10.
    #[test]
    fn prop_stats_in_range(seed in any::<u64>()) {
        let mut builder = RosterBuilder::new(BrawlConfig::default(), seed);
        for kind in [CharacterKind::Murloc, CharacterKind::Demon] {
            let c = builder.roll_character(kind);
            prop_assert!((1..=10).contains(&c.health()));
            prop_assert!((1..=10).contains(&c.attack()));
        }
    }

    /// No sequence of adds pushes a team past the capacity bound, and a
    /// rejected add leaves the lineup exactly as it was.
    #[test]
    fn prop_capacity_never_exceeded(
        seed in any::<u64>(),
        viewport in 100.0f32..2000.0,
        card in 10.0f32..400.0,
        adds in prop::collection::vec(any::<bool>(), 1..30),
    ) {
        let config = BrawlConfig::default();
        let limit = config.capacity_ratio * viewport;
        let mut builder = RosterBuilder::new(config, seed);
        let mut teams: Teams<Lineup> = Teams::default();
        let mut renderer = RecordingRenderer::new(viewport, card);

        for to_team1 in adds {
            let side = if to_team1 { TeamSide::Team1 } else { TeamSide::Team2 };
            let before = teams[side].clone();

            match builder.recruit(&mut teams, &mut renderer, side) {
                Ok(id) => {
                    prop_assert_eq!(teams[side].len(), before.len() + 1);
                    prop_assert!(teams[side].contains(id));
                }
                Err(_) => {
                    prop_assert_eq!(&teams[side], &before);
                }
            }
            prop_assert!(renderer.team_extent(side) <= limit + 1e-3);
        }
    }
}
