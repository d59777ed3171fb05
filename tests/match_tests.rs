use pokemon_duel::matrix::{popular_teams, win_rate_matrix};
use pokemon_duel::{run_demo, EngineConfig, MatchError, MatchService, PresetConfig, SubmitOutcome};
use pokemon_duel_core::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::sync::Arc;

fn service() -> MatchService {
    MatchService::new(EngineConfig {
        seed: Some(42),
        ..EngineConfig::default()
    })
}

fn seated(service: &MatchService, key: &str, team_size: usize) {
    service.create_match(key, team_size, false).unwrap();
    service.join(key, "ash", "Ash").unwrap();
    service.join(key, "misty", "Misty").unwrap();
}

#[test]
fn two_player_turn_waits_for_both_sides() {
    let service = service();
    seated(&service, "m", 1);
    service.select_species("m", "ash", 6, &BuildOptions::default()).unwrap();
    service.select_species("m", "misty", 9, &BuildOptions::default()).unwrap();
    assert_eq!(service.snapshot("m").unwrap().phase, BattlePhase::Battling);

    assert_eq!(
        service.submit_action("m", "ash", Action::attack(0)).unwrap(),
        SubmitOutcome::Pending
    );
    assert_eq!(
        service.submit_action("m", "ash", Action::attack(0)),
        Err(MatchError::Battle(BattleError::AlreadyActed))
    );
    match service.submit_action("m", "misty", Action::attack(0)).unwrap() {
        SubmitOutcome::Resolved(lines) => assert_eq!(lines[0], "Turn 1"),
        SubmitOutcome::Pending => panic!("turn should have resolved"),
    }
}

#[rstest]
#[case::third_player("brock", BattleError::MatchFull)]
#[case::same_player("ash", BattleError::AlreadyJoined("ash".to_string()))]
fn join_errors(#[case] player: &str, #[case] expected: BattleError) {
    let service = service();
    seated(&service, "m", 1);
    assert_eq!(service.join("m", player, "Someone"), Err(MatchError::Battle(expected)));
}

#[test]
fn selection_errors() {
    let service = service();
    service.create_match("m", 1, false).unwrap();
    service.join("m", "ash", "Ash").unwrap();
    assert_eq!(
        service.select_species("m", "ash", 6, &BuildOptions::default()),
        Err(MatchError::Battle(BattleError::WrongPhase {
            expected: BattlePhase::Choosing,
            actual: BattlePhase::Waiting,
        }))
    );
    service.join("m", "misty", "Misty").unwrap();
    service.select_species("m", "ash", 6, &BuildOptions::default()).unwrap();
    assert_eq!(
        service.select_species("m", "ash", 9, &BuildOptions::default()),
        Err(MatchError::Battle(BattleError::TeamFull))
    );
    assert_eq!(
        service.select_species("m", "gary", 9, &BuildOptions::default()),
        Err(MatchError::Battle(BattleError::NotInBattle("gary".to_string())))
    );
    assert!(matches!(
        service.select_species("m", "misty", 99_999, &BuildOptions::default()),
        Err(MatchError::Catalog(_))
    ));
}

#[test]
fn unknown_matches_are_not_found() {
    let service = service();
    assert_eq!(
        service.join("nope", "ash", "Ash"),
        Err(MatchError::NotFound("nope".to_string()))
    );
    service.create_match("m", 1, false).unwrap();
    service.end_match("m").unwrap();
    assert!(matches!(service.snapshot("m"), Err(MatchError::NotFound(_))));
    assert_eq!(service.end_match("m"), Err(MatchError::NotFound("m".to_string())));
}

#[test]
fn vs_ai_turns_resolve_on_a_single_submit() {
    let service = service();
    service.create_match("m", 1, true).unwrap();
    service.join("m", "ash", "Ash").unwrap();
    service.select_species("m", "ash", 25, &BuildOptions::default()).unwrap();

    match service.submit_action("m", "ash", Action::attack(0)).unwrap() {
        SubmitOutcome::Resolved(lines) => assert_eq!(lines[0], "Turn 1"),
        SubmitOutcome::Pending => panic!("the AI should have answered"),
    }
    let snapshot = service.snapshot("m").unwrap();
    assert_eq!(snapshot.players[1].id, "ai");
    assert_eq!(snapshot.players[1].name, "AI Trainer");
}

#[test]
fn forfeit_finishes_the_match_for_the_opponent() {
    let service = service();
    service.create_match("m", 1, true).unwrap();
    service.join("m", "ash", "Ash").unwrap();
    service.select_species("m", "ash", 25, &BuildOptions::default()).unwrap();

    let lines = service.forfeit("m", "ash").unwrap();
    assert!(lines.contains(&"Ash forfeited!".to_string()));
    assert_eq!(lines.last().map(String::as_str), Some("AI Trainer wins!"));

    let snapshot = service.snapshot("m").unwrap();
    assert_eq!(snapshot.phase, BattlePhase::Finished);
    assert_eq!(snapshot.winner.as_deref(), Some("ai"));
    assert!(matches!(
        service.submit_action("m", "ash", Action::attack(0)),
        Err(MatchError::Battle(BattleError::WrongPhase { .. }))
    ));
}

#[test]
fn snapshot_shows_roster_and_log_tail() {
    let service = MatchService::new(EngineConfig {
        seed: Some(5),
        log_tail: 2,
        ..EngineConfig::default()
    });
    seated(&service, "m", 2);
    for (player, species) in [("ash", 6), ("ash", 25), ("misty", 9), ("misty", 143)] {
        service
            .select_species("m", player, species, &BuildOptions::default())
            .unwrap();
    }
    let snapshot = service.snapshot("m").unwrap();
    assert!(snapshot.log.len() <= 2);
    let ash = &snapshot.players[0];
    assert!(ash.ready);
    assert_eq!(ash.roster.len(), 2);
    assert!(ash.roster[0].active && ash.roster[0].alive);
    let lead = ash.active.as_ref().unwrap();
    assert_eq!(lead.species, "Charizard");
    assert_eq!(lead.level, 50);
    assert_eq!(lead.hp, lead.max_hp);
    assert_eq!(snapshot.to_json()["players"][1]["id"], "misty");
}

#[test]
fn presets_feed_team_selection() {
    let service = service();
    seated(&service, "m", 1);
    let preset = service
        .presets()
        .save_preset(
            "ash",
            "sweeper",
            PresetConfig {
                species_id: 6,
                options: BuildOptions {
                    nickname: Some("Blaze".to_string()),
                    ..BuildOptions::default()
                },
            },
        )
        .unwrap();
    service.select_preset("m", "ash", preset.id).unwrap();
    let snapshot = service.snapshot("m").unwrap();
    assert_eq!(snapshot.players[0].roster[0].name, "Blaze");
    assert_eq!(
        service.select_preset("m", "misty", preset.id),
        Err(MatchError::PresetNotFound(preset.id))
    );
}

#[test]
fn demo_plays_to_a_result() {
    let config = EngineConfig {
        max_turns: 100,
        ..EngineConfig::default()
    };
    let log = run_demo(config, 3, 2).unwrap();
    assert_eq!(log.first().map(String::as_str), Some("Battle start!"));
    let last = log.last().unwrap();
    assert!(
        last == "Red wins!" || last == "Blue wins!" || last == "The battle ended in a draw!",
        "unexpected final line {last}"
    );
}

#[test]
fn matrix_has_one_cell_per_pairing() {
    let catalog = Catalog::builtin();
    let registry = Arc::new(AbilityRegistry::with_defaults());
    let teams = popular_teams(&catalog).unwrap();
    let matrix = win_rate_matrix(&catalog, &registry, &teams[..2], &teams[..3], 2, 9, 100);
    assert_eq!(matrix.len(), 2);
    assert!(matrix.iter().all(|row| row.len() == 3));
    assert!(matrix.iter().flatten().all(|rate| (0.0..=1.0).contains(rate)));
    let again = win_rate_matrix(&catalog, &registry, &teams[..2], &teams[..3], 2, 9, 100);
    assert_eq!(matrix, again);
}
