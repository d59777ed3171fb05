use pokemon_duel_core::prelude::*;
use pokemon_duel_core::sim::weather_field::Weather;
use pretty_assertions::assert_eq;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn make_build(catalog: &Catalog, species_id: u32, moves: &[u32], ability_slot: i8) -> PokemonBuild {
    let species = catalog.lookup_species(species_id).expect("species exists");
    let options = BuildOptions {
        moves: Some(moves.to_vec()),
        ability_slot,
        ..BuildOptions::default()
    };
    PokemonBuild::with_options(species, catalog, &options).expect("valid build")
}

fn duel(one: PokemonBuild, two: PokemonBuild) -> (Battle, AbilityRegistry) {
    let catalog = Catalog::builtin();
    let registry = AbilityRegistry::with_defaults();
    let mut battle = Battle::new(1);
    battle.add_player("p1", "Red").unwrap();
    battle.add_player("p2", "Blue").unwrap();
    battle.select_creature("p1", &one, &catalog, &registry).unwrap();
    battle.select_creature("p2", &two, &catalog, &registry).unwrap();
    (battle, registry)
}

fn play(battle: &mut Battle, registry: &AbilityRegistry, seed: u64) -> Vec<String> {
    let mut rng = SmallRng::seed_from_u64(seed);
    battle.set_action("p1", Action::attack(0)).unwrap();
    battle.set_action("p2", Action::attack(0)).unwrap();
    battle.execute_turn(registry, &mut rng)
}

#[test]
fn drizzle_sets_rain_on_entry() {
    let catalog = Catalog::builtin();
    let (battle, _) = duel(
        make_build(&catalog, 186, &[57], -1),
        make_build(&catalog, 230, &[57], 0),
    );
    assert!(battle.weather().is(Weather::Rain));
    assert!(battle.log().lines().contains(&"It started to rain!".to_string()));
}

#[test]
fn sandstorm_chips_exposed_battlers_only() {
    let catalog = Catalog::builtin();
    let (mut battle, registry) = duel(
        make_build(&catalog, 248, &[14], 0),
        make_build(&catalog, 143, &[14], 0),
    );
    assert!(battle.weather().is(Weather::Sand));
    let lines = play(&mut battle, &registry, 21);
    let tyranitar = battle.active(Side::One).unwrap();
    let snorlax = battle.active(Side::Two).unwrap();
    assert!(tyranitar.is_full_hp());
    assert_eq!(snorlax.max_hp() - snorlax.current_hp, snorlax.max_hp() / 16);
    assert!(lines.contains(&"Snorlax is buffeted by the sandstorm!".to_string()));
}

#[test]
fn speed_boost_raises_speed_every_turn() {
    let catalog = Catalog::builtin();
    let (mut battle, registry) = duel(
        make_build(&catalog, 257, &[14], -1),
        make_build(&catalog, 143, &[14], 0),
    );
    play(&mut battle, &registry, 22);
    play(&mut battle, &registry, 23);
    let blaziken = battle.active(Side::One).unwrap();
    assert_eq!(blaziken.stages.get(StageStat::Speed), 2);
    assert_eq!(blaziken.stages.get(StageStat::Attack), 4);
}

#[test]
fn water_absorb_heals_instead_of_taking_damage() {
    let catalog = Catalog::builtin();
    let (mut battle, registry) = duel(
        make_build(&catalog, 9, &[57], 0),
        make_build(&catalog, 131, &[14], 0),
    );
    let lines = play(&mut battle, &registry, 24);
    assert!(lines.contains(&"Water Absorb made the attack ineffective!".to_string()));
    assert!(battle.active(Side::Two).unwrap().is_full_hp());
}

#[test]
fn trace_copies_intimidate() {
    let catalog = Catalog::builtin();
    let (battle, _) = duel(
        make_build(&catalog, 233, &[14], 0),
        make_build(&catalog, 130, &[14], 0),
    );
    let porygon = battle.active(Side::One).unwrap();
    let gyarados = battle.active(Side::Two).unwrap();
    assert_eq!(porygon.traced_ability, Some(22));
    assert_eq!(gyarados.stages.get(StageStat::Attack), -1);
    // Gyarados' own Intimidate also hit Porygon2 on entry.
    assert_eq!(porygon.stages.get(StageStat::Attack), -1);
}

#[test]
fn inner_focus_blocks_intimidate() {
    let catalog = Catalog::builtin();
    let (battle, _) = duel(
        make_build(&catalog, 130, &[14], 0),
        make_build(&catalog, 149, &[14], 0),
    );
    let dragonite = battle.active(Side::Two).unwrap();
    assert_eq!(dragonite.stages.get(StageStat::Attack), 0);
    assert!(battle.log().lines().iter().any(|line| line.contains("Inner Focus")));
}
