//! Holdfast Headless Skirmish Harness
//!
//! Validates the skirmish rules and demo data without any engine.
//! Runs entirely in-process — no rendering, no input, no networking.
//!
//! Usage:
//!   cargo run -p holdfast-simtest
//!   cargo run -p holdfast-simtest -- --verbose
//!   RUST_LOG=debug cargo run -p holdfast-simtest

use holdfast_core::generation::{muster, SkirmishConfig};
use holdfast_core::prelude::*;
use holdfast_logic::combat;
use holdfast_logic::constants::{actor_kinds, attack_damage, field};
use holdfast_logic::grid::GridPos;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use std::collections::HashSet;

// ── Skirmish manifest (same JSON the demo scenario runs from) ───────────
const MANIFEST_JSON: &str = include_str!("../../../data/skirmish_manifest.json");

#[derive(Debug, Deserialize)]
struct ActorSpec {
    id: u32,
    kind: u8,
    name: String,
    x: i32,
    y: i32,
    #[serde(default)]
    health: Option<f32>,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    // Quiet by default; RUST_LOG=debug surfaces combat and muster logs.
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    )
    .format_timestamp_secs()
    .try_init();

    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Holdfast Skirmish Harness ===\n");

    let mut results = Vec::new();

    // 1. Scenario manifest validation
    results.extend(validate_manifest(verbose));

    // 2. Combat rules sweep
    results.extend(validate_combat_rules(verbose));

    // 3. Construction rules
    results.extend(validate_construction(verbose));

    // 4. Movement rules
    results.extend(validate_movement(verbose));

    // 5. Mustering
    results.extend(validate_generation(verbose));

    // 6. The canonical skirmish, end to end
    results.extend(run_canonical_scenario(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

fn check(name: &str, passed: bool, detail: impl Into<String>) -> TestResult {
    TestResult {
        name: name.into(),
        passed,
        detail: detail.into(),
    }
}

// ── 1. Scenario Manifest ────────────────────────────────────────────────

fn validate_manifest(verbose: bool) -> Vec<TestResult> {
    println!("--- Scenario Manifest ---");
    let mut results = Vec::new();

    let manifest: Vec<ActorSpec> = match serde_json::from_str(MANIFEST_JSON) {
        Ok(m) => m,
        Err(e) => {
            results.push(check(
                "manifest_parse",
                false,
                format!("JSON parse error: {}", e),
            ));
            return results;
        }
    };

    if verbose {
        for a in &manifest {
            println!("  spec: #{} kind={} {:?} at ({}, {})", a.id, a.kind, a.name, a.x, a.y);
        }
    }

    results.push(check(
        "manifest_not_empty",
        !manifest.is_empty(),
        format!("{} actors listed", manifest.len()),
    ));

    // All kinds must be known
    let bad_kinds: Vec<_> = manifest
        .iter()
        .filter(|a| !actor_kinds::is_known(a.kind))
        .collect();
    results.push(check(
        "manifest_known_kinds",
        bad_kinds.is_empty(),
        if bad_kinds.is_empty() {
            "all actor kinds recognized".to_string()
        } else {
            format!(
                "{} actors with unknown kind: {}",
                bad_kinds.len(),
                bad_kinds
                    .iter()
                    .map(|a| a.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        },
    ));

    // Ids must be unique (the core leaves this to its caller, so demo data
    // gets checked here)
    let unique: HashSet<u32> = manifest.iter().map(|a| a.id).collect();
    results.push(check(
        "manifest_unique_ids",
        unique.len() == manifest.len(),
        format!("{} ids, {} unique", manifest.len(), unique.len()),
    ));

    // Units must start with positive health
    let bad_health: Vec<_> = manifest
        .iter()
        .filter(|a| a.kind == actor_kinds::ARCHER)
        .filter(|a| a.health.unwrap_or(0.0) <= 0.0)
        .collect();
    results.push(check(
        "manifest_unit_health_positive",
        bad_health.is_empty(),
        if bad_health.is_empty() {
            "all units start alive".to_string()
        } else {
            format!("{} units with non-positive health", bad_health.len())
        },
    ));

    results
}

// ── 2. Combat Rules ─────────────────────────────────────────────────────

fn validate_combat_rules(verbose: bool) -> Vec<TestResult> {
    println!("--- Combat Rules ---");
    let mut results = Vec::new();

    if verbose {
        println!(
            "  archer strike = {}, fort strike = {}",
            attack_damage::ARCHER,
            attack_damage::FORT
        );
    }

    let after = combat::apply_damage(100.0, attack_damage::FORT);
    results.push(check(
        "fort_damage_arithmetic",
        matches!(after, Ok(h) if h == 80.0),
        "100 hp - fort strike = 80 hp",
    ));

    let after = combat::apply_damage(100.0, attack_damage::ARCHER);
    results.push(check(
        "archer_damage_arithmetic",
        matches!(after, Ok(h) if h == 90.0),
        "100 hp - archer strike = 90 hp",
    ));

    results.push(check(
        "negative_damage_rejected",
        combat::apply_damage(100.0, -10.0).is_err(),
        "apply_damage(-10) is an error",
    ));

    results.push(check(
        "death_threshold",
        combat::is_dead(0.0) && combat::is_dead(-5.0) && !combat::is_dead(0.1),
        "dead at <= 0, alive above",
    ));

    // Repeated strikes until cumulative damage covers initial health
    let mut unit = Unit::new(1, "Test Sentry", 0, 0, 100.0);
    let mut strikes = 0;
    while unit.is_alive() && strikes < 100 {
        if unit.receive_damage(attack_damage::ARCHER).is_err() {
            break;
        }
        strikes += 1;
    }
    results.push(check(
        "cumulative_damage_kills",
        !unit.is_alive() && strikes == 10,
        format!("dead after {} archer strikes", strikes),
    ));

    // Terminal: more damage never revives
    let _ = unit.receive_damage(1.0);
    results.push(check(
        "dead_is_terminal",
        !unit.is_alive(),
        "alive flag stays false under further damage",
    ));

    results
}

// ── 3. Construction ─────────────────────────────────────────────────────

fn validate_construction(verbose: bool) -> Vec<TestResult> {
    println!("--- Construction ---");
    let mut results = Vec::new();

    let mut building = Building::new(10, "Granary", 2, 2);
    if verbose {
        println!("  {} starts built={}", building.name(), building.is_built());
    }
    results.push(check(
        "starts_unbuilt",
        !building.is_built(),
        "fresh building reports unbuilt",
    ));

    building.build();
    let after_one = building.is_built();
    building.build();
    let after_two = building.is_built();
    results.push(check(
        "build_idempotent",
        after_one && after_two,
        "built after one call, unchanged after two",
    ));

    results
}

// ── 4. Movement ─────────────────────────────────────────────────────────

fn validate_movement(verbose: bool) -> Vec<TestResult> {
    println!("--- Movement ---");
    let mut results = Vec::new();

    let mut archer = Archer::new(1, "Test Archer", 0, 0, 100.0);
    archer.move_to(7, 10);
    if verbose {
        println!(
            "  {} moved to ({}, {})",
            archer.name(),
            archer.position().x,
            archer.position().y
        );
    }
    results.push(check(
        "archer_moves_exactly",
        archer.position() == GridPos::new(7, 10),
        format!("position now ({}, {})", archer.position().x, archer.position().y),
    ));

    // No clamping: off-field coordinates are accepted
    archer.move_to(-50, 999);
    results.push(check(
        "no_bounds_checking",
        archer.position() == GridPos::new(-50, 999),
        "off-field move accepted verbatim",
    ));

    results
}

// ── 5. Mustering ────────────────────────────────────────────────────────

fn validate_generation(verbose: bool) -> Vec<TestResult> {
    println!("--- Mustering ---");
    let mut results = Vec::new();

    let mut rng = StdRng::seed_from_u64(0x4846);
    let skirmish = muster(&SkirmishConfig::default(), &mut rng);

    if verbose {
        for a in &skirmish.archers {
            println!("  mustered archer #{}: {}", a.id(), a.name());
        }
        for f in &skirmish.forts {
            println!("  mustered fort #{}: {}", f.id(), f.name());
        }
        for c in &skirmish.caravans {
            println!("  mustered caravan #{}: {}", c.id(), c.name());
        }
    }

    results.push(check(
        "muster_counts",
        skirmish.archers.len() == 3 && skirmish.forts.len() == 1 && skirmish.caravans.len() == 1,
        format!(
            "{} archers, {} forts, {} caravans",
            skirmish.archers.len(),
            skirmish.forts.len(),
            skirmish.caravans.len()
        ),
    ));

    let ids: Vec<u32> = skirmish
        .archers
        .iter()
        .map(|a| a.id())
        .chain(skirmish.forts.iter().map(|f| f.id()))
        .chain(skirmish.caravans.iter().map(|c| c.id()))
        .collect();
    let unique: HashSet<u32> = ids.iter().copied().collect();
    results.push(check(
        "muster_unique_ids",
        unique.len() == ids.len(),
        format!("{} actors, {} unique ids", ids.len(), unique.len()),
    ));

    let in_field = skirmish
        .archers
        .iter()
        .map(|a| a.position())
        .chain(skirmish.forts.iter().map(|f| f.position()))
        .chain(skirmish.caravans.iter().map(|c| c.position()))
        .all(|p| p.x >= 0 && p.x < field::WIDTH && p.y >= 0 && p.y < field::HEIGHT);
    results.push(check(
        "muster_positions_in_field",
        in_field,
        format!("all inside {}x{} field", field::WIDTH, field::HEIGHT),
    ));

    results
}

// ── 6. Canonical Scenario ───────────────────────────────────────────────

fn run_canonical_scenario(verbose: bool) -> Vec<TestResult> {
    println!("--- Canonical Scenario ---");
    let mut results = Vec::new();

    let manifest: Vec<ActorSpec> = match serde_json::from_str(MANIFEST_JSON) {
        Ok(m) => m,
        Err(e) => {
            results.push(check(
                "scenario_manifest",
                false,
                format!("JSON parse error: {}", e),
            ));
            return results;
        }
    };

    let archer_spec = manifest.iter().find(|a| a.kind == actor_kinds::ARCHER);
    let fort_spec = manifest.iter().find(|a| a.kind == actor_kinds::FORT);
    let caravan_spec = manifest.iter().find(|a| a.kind == actor_kinds::CARAVAN);
    let (archer_spec, fort_spec, caravan_spec) = match (archer_spec, fort_spec, caravan_spec) {
        (Some(a), Some(f), Some(c)) => (a, f, c),
        _ => {
            results.push(check(
                "scenario_manifest",
                false,
                "manifest missing an archer, fort, or caravan",
            ));
            return results;
        }
    };

    let mut archer = Archer::new(
        archer_spec.id,
        archer_spec.name.as_str(),
        archer_spec.x,
        archer_spec.y,
        archer_spec.health.unwrap_or(100.0),
    );
    let fort = Fort::new(fort_spec.id, fort_spec.name.as_str(), fort_spec.x, fort_spec.y);
    let mut caravan = Caravan::new(
        caravan_spec.id,
        caravan_spec.name.as_str(),
        caravan_spec.x,
        caravan_spec.y,
    );

    // The archer repositions before the fort opens fire
    archer.move_to(7, 10);
    if verbose {
        println!(
            "  {} takes position at ({}, {})",
            archer.name(),
            archer.position().x,
            archer.position().y
        );
    }

    // Fort strike: 100 hp -> 80 hp, still alive
    let opening = fort.attack(archer.unit_mut());
    if verbose {
        println!(
            "  {} fires on {}: {} hp left",
            fort.name(),
            archer.name(),
            archer.health()
        );
    }
    results.push(check(
        "fort_strike",
        matches!(
            opening,
            Ok(AttackOutcome::Hit {
                health_after,
                felled: false
            }) if health_after == 80.0
        ) && archer.is_alive(),
        format!("archer at {} hp, alive", archer.health()),
    ));

    // Direct 80 damage finishes the archer at exactly 0 hp
    let finishing = archer.receive_damage(80.0);
    results.push(check(
        "finishing_blow",
        finishing.is_ok() && archer.health() == 0.0 && !archer.is_alive(),
        format!("archer at {} hp, alive={}", archer.health(), archer.is_alive()),
    ));

    // Attacking the corpse is a no-op, not an error
    let corpse_strike = fort.attack(archer.unit_mut());
    results.push(check(
        "corpse_strike_noop",
        matches!(corpse_strike, Ok(AttackOutcome::TargetAlreadyDead)) && archer.health() == 0.0,
        format!("archer still at {} hp", archer.health()),
    ));

    // The caravan rolls off without ever being built
    caravan.move_to(7, 10);
    results.push(check(
        "caravan_moves_unbuilt",
        caravan.position() == GridPos::new(7, 10) && !caravan.is_built(),
        "at (7, 10), still unbuilt",
    ));

    results
}
