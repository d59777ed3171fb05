use pokemon_duel_core::prelude::*;
use pokemon_duel_core::sim::damage::base_damage;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn make_build(catalog: &Catalog, species_id: u32, moves: &[u32], nickname: Option<&str>) -> PokemonBuild {
    let species = catalog.lookup_species(species_id).expect("species exists");
    let options = BuildOptions {
        moves: Some(moves.to_vec()),
        nickname: nickname.map(str::to_string),
        ..BuildOptions::default()
    };
    PokemonBuild::with_options(species, catalog, &options).expect("valid build")
}

fn start(one: &[PokemonBuild], two: &[PokemonBuild], catalog: &Catalog, registry: &AbilityRegistry) -> Battle {
    let mut battle = Battle::new(one.len());
    battle.add_player("p1", "Red").unwrap();
    battle.add_player("p2", "Blue").unwrap();
    for build in one {
        battle.select_creature("p1", build, catalog, registry).unwrap();
    }
    for build in two {
        battle.select_creature("p2", build, catalog, registry).unwrap();
    }
    battle
}

fn turn(battle: &mut Battle, registry: &AbilityRegistry, one: Action, two: Action, rng: &mut SmallRng) -> Vec<String> {
    battle.set_action("p1", one).unwrap();
    battle.set_action("p2", two).unwrap();
    battle.execute_turn(registry, rng)
}

#[test]
fn fire_on_grass_is_doubled_with_stab() {
    let catalog = Catalog::builtin();
    let charizard = Battler::new(&make_build(&catalog, 6, &[53], None), &catalog).unwrap();
    let venusaur = Battler::new(&make_build(&catalog, 3, &[412], None), &catalog).unwrap();
    let flamethrower = catalog.lookup_move(53).unwrap();
    let base = base_damage(
        50,
        90,
        charizard.staged_stat(StageStat::SpAttack) as f64,
        venusaur.staged_stat(StageStat::SpDefense) as f64,
    );
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let result = charizard.calculate_damage(flamethrower, &venusaur, &mut rng);
        assert!(result.hit);
        assert_eq!(result.effectiveness, 2.0);
        let crit = if result.critical { 1.5 } else { 1.0 };
        let low = (base * 2.0 * 1.5 * 0.85 * crit).floor() as u32;
        let high = (base * 2.0 * 1.5 * crit).floor() as u32;
        assert!(
            (low..=high).contains(&result.damage),
            "{} outside {low}..={high}",
            result.damage
        );
    }
}

#[test]
fn super_effective_hit_is_logged() {
    let catalog = Catalog::builtin();
    let registry = AbilityRegistry::with_defaults();
    let mut battle = start(
        &[make_build(&catalog, 6, &[53], None)],
        &[make_build(&catalog, 3, &[412], None)],
        &catalog,
        &registry,
    );
    let mut rng = SmallRng::seed_from_u64(11);
    let lines = turn(&mut battle, &registry, Action::attack(0), Action::attack(0), &mut rng);
    assert_eq!(lines[0], "Turn 1");
    assert_eq!(lines[1], "Charizard used Flamethrower!");
    assert!(lines.contains(&"It's super effective!".to_string()));
    let venusaur = &battle.player(Side::Two).unwrap().team[0];
    assert!(venusaur.current_hp < venusaur.max_hp());
}

#[test]
fn levitate_leaves_hp_unchanged() {
    let catalog = Catalog::builtin();
    let registry = AbilityRegistry::with_defaults();
    let mut battle = start(
        &[make_build(&catalog, 445, &[89], None)],
        &[make_build(&catalog, 94, &[247], None)],
        &catalog,
        &registry,
    );
    let mut rng = SmallRng::seed_from_u64(12);
    let lines = turn(&mut battle, &registry, Action::attack(0), Action::attack(0), &mut rng);
    assert!(lines.contains(&"Levitate made the attack ineffective!".to_string()));
    let gengar = battle.active(Side::Two).unwrap();
    assert!(gengar.is_full_hp());
    assert_eq!(battle.turn(), 2);
}

#[test]
fn forfeit_hands_the_win_to_the_opponent() {
    let catalog = Catalog::builtin();
    let registry = AbilityRegistry::with_defaults();
    let mut battle = start(
        &[make_build(&catalog, 6, &[53], None)],
        &[make_build(&catalog, 9, &[57], None)],
        &catalog,
        &registry,
    );
    let mut rng = SmallRng::seed_from_u64(13);
    let lines = turn(&mut battle, &registry, Action::attack(0), Action::Forfeit, &mut rng);
    assert_eq!(lines, vec!["Turn 1", "Blue forfeited!", "Red wins!"]);
    assert_eq!(battle.winner(), Some(Side::One));
    assert_eq!(battle.phase(), BattlePhase::Finished);
    let charizard = battle.active(Side::One).unwrap();
    assert_eq!(charizard.moves[0].pp(), charizard.moves[0].max_pp());
}

#[test]
fn switching_validates_and_fires_entry_once() {
    let catalog = Catalog::builtin();
    let registry = AbilityRegistry::with_defaults();
    let mut battle = start(
        &[make_build(&catalog, 6, &[53], None), make_build(&catalog, 130, &[127], None)],
        &[make_build(&catalog, 143, &[34], None), make_build(&catalog, 9, &[57], None)],
        &catalog,
        &registry,
    );
    assert_eq!(battle.set_action("p1", Action::Switch(0)), Err(BattleError::AlreadyActive("Charizard".into())));
    assert_eq!(battle.set_action("p1", Action::Switch(4)), Err(BattleError::InvalidSwitch(4)));

    let mut rng = SmallRng::seed_from_u64(14);
    let lines = turn(&mut battle, &registry, Action::Switch(1), Action::attack(0), &mut rng);
    assert!(lines.contains(&"Red withdrew Charizard!".to_string()));
    assert!(lines.contains(&"Red sent out Gyarados!".to_string()));
    let intimidations = lines.iter().filter(|line| line.contains("Intimidate")).count();
    assert_eq!(intimidations, 1);
    assert_eq!(battle.active(Side::Two).unwrap().stages.get(StageStat::Attack), -1);
    assert_eq!(battle.player(Side::One).unwrap().active, 1);
}

#[test]
fn speed_ties_keep_player_one_first() {
    let catalog = Catalog::builtin();
    let registry = AbilityRegistry::with_defaults();
    let mut battle = start(
        &[make_build(&catalog, 6, &[33], Some("Alpha"))],
        &[make_build(&catalog, 6, &[33], Some("Beta"))],
        &catalog,
        &registry,
    );
    let mut rng = SmallRng::seed_from_u64(15);
    let lines = turn(&mut battle, &registry, Action::attack(0), Action::attack(0), &mut rng);
    let alpha = lines.iter().position(|line| line == "Alpha used Tackle!").unwrap();
    let beta = lines.iter().position(|line| line == "Beta used Tackle!").unwrap();
    assert!(alpha < beta);
}

#[test]
fn gimmick_is_once_per_battle() {
    let catalog = Catalog::builtin();
    let registry = AbilityRegistry::with_defaults();
    let mut battle = start(
        &[make_build(&catalog, 143, &[34], None)],
        &[make_build(&catalog, 143, &[34], None)],
        &catalog,
        &registry,
    );
    let mut rng = SmallRng::seed_from_u64(16);
    let tera = Action::Move {
        index: 0,
        gimmick: Some(Gimmick::Terastallize),
    };
    let lines = turn(&mut battle, &registry, tera, Action::attack(0), &mut rng);
    assert!(lines.iter().any(|line| line.contains("terastallized")));
    assert!(battle.active(Side::One).unwrap().terastallized);
    assert_eq!(battle.set_action("p1", tera), Err(BattleError::GimmickUsed));
}

#[test]
fn battle_runs_to_a_winner() {
    let catalog = Catalog::builtin();
    let registry = AbilityRegistry::with_defaults();
    let mut battle = start(
        &[make_build(&catalog, 6, &[53], None)],
        &[make_build(&catalog, 3, &[412], None)],
        &catalog,
        &registry,
    );
    let mut rng = SmallRng::seed_from_u64(17);
    for _ in 0..5 {
        if battle.is_finished() {
            break;
        }
        turn(&mut battle, &registry, Action::attack(0), Action::attack(0), &mut rng);
    }
    assert!(battle.is_finished());
    assert_eq!(battle.winner(), Some(Side::One));
    assert!(battle.log().lines().contains(&"Venusaur fainted!".to_string()));
    assert!(battle.log().lines().contains(&"Red wins!".to_string()));
}

#[test]
fn fainted_lead_is_replaced_by_the_next_member() {
    let catalog = Catalog::builtin();
    let registry = AbilityRegistry::with_defaults();
    let mut battle = start(
        &[make_build(&catalog, 6, &[53], None), make_build(&catalog, 9, &[57], None)],
        &[make_build(&catalog, 3, &[412], None), make_build(&catalog, 143, &[34], None)],
        &catalog,
        &registry,
    );
    let mut rng = SmallRng::seed_from_u64(18);
    for _ in 0..5 {
        if battle.player(Side::Two).unwrap().active == 1 {
            break;
        }
        turn(&mut battle, &registry, Action::attack(0), Action::attack(0), &mut rng);
    }
    assert_eq!(battle.player(Side::Two).unwrap().active, 1);
    assert!(battle.log().lines().contains(&"Blue sent out Snorlax!".to_string()));
    assert_eq!(battle.phase(), BattlePhase::Battling);
}

fn level_one(catalog: &Catalog, species_id: u32, moves: &[u32]) -> PokemonBuild {
    let species = catalog.lookup_species(species_id).expect("species exists");
    let options = BuildOptions {
        moves: Some(moves.to_vec()),
        level: Some(1),
        ..BuildOptions::default()
    };
    PokemonBuild::with_options(species, catalog, &options).expect("valid build")
}

#[test]
fn replacement_uses_the_queued_move_slot_the_same_turn() {
    let catalog = Catalog::builtin();
    let registry = AbilityRegistry::with_defaults();
    let mut battle = start(
        &[make_build(&catalog, 6, &[53], None), make_build(&catalog, 9, &[57], None)],
        &[level_one(&catalog, 3, &[412]), make_build(&catalog, 143, &[33], None)],
        &catalog,
        &registry,
    );
    let mut rng = SmallRng::seed_from_u64(19);
    let lines = turn(&mut battle, &registry, Action::attack(0), Action::attack(0), &mut rng);
    let sent = lines.iter().position(|line| line == "Blue sent out Snorlax!").unwrap();
    let tackle = lines.iter().position(|line| line == "Snorlax used Tackle!").unwrap();
    assert!(sent < tackle);
    let charizard = battle.active(Side::One).unwrap();
    assert!(charizard.current_hp < charizard.max_hp());
    assert_eq!(battle.turn(), 2);
}

#[test]
fn replacement_without_the_queued_slot_cannot_move() {
    let catalog = Catalog::builtin();
    let registry = AbilityRegistry::with_defaults();
    let mut battle = start(
        &[make_build(&catalog, 6, &[53], None), make_build(&catalog, 9, &[57], None)],
        &[level_one(&catalog, 3, &[412, 33]), make_build(&catalog, 143, &[33], None)],
        &catalog,
        &registry,
    );
    let mut rng = SmallRng::seed_from_u64(20);
    let lines = turn(&mut battle, &registry, Action::attack(0), Action::attack(1), &mut rng);
    assert!(lines.contains(&"Snorlax couldn't use its move!".to_string()));
    assert!(battle.active(Side::One).unwrap().is_full_hp());
}

#[test]
fn replacement_entry_ability_fires_once() {
    let catalog = Catalog::builtin();
    let registry = AbilityRegistry::with_defaults();
    let mut battle = start(
        &[make_build(&catalog, 6, &[53], None), make_build(&catalog, 9, &[57], None)],
        &[level_one(&catalog, 3, &[412]), make_build(&catalog, 130, &[33], None)],
        &catalog,
        &registry,
    );
    let mut rng = SmallRng::seed_from_u64(21);
    let lines = turn(&mut battle, &registry, Action::attack(0), Action::attack(0), &mut rng);
    assert!(lines.contains(&"Blue sent out Gyarados!".to_string()));
    let drops = lines
        .iter()
        .filter(|line| line.as_str() == "Charizard's Attack fell!")
        .count();
    assert_eq!(drops, 1);
    assert_eq!(battle.active(Side::One).unwrap().stages.get(StageStat::Attack), -1);
}
