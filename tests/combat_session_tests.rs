// End-to-end turns through CombatSession with scripted power rolls.

mod helpers;

use divine_clash::combat::{DamageType, FixedRoll, ResistanceLevel, ScriptedRoll, Winner};
use divine_clash::error::CombatError;
use divine_clash::items::default_weapons;
use divine_clash::{CombatAction, CombatEvent, CombatPhase, CombatSession, SessionConfig};
use helpers::{BOSS_ID, test_catalog, test_hero};
use pretty_assertions::assert_eq;

fn act(skill: &str) -> CombatAction {
    CombatAction::new("protagonist", skill, BOSS_ID)
}

#[test]
fn higher_base_power_wins_by_the_margin() {
    let catalog = test_catalog();
    let config = SessionConfig {
        mana_regen: 0,
        ..SessionConfig::seeded(1)
    };
    let mut session = CombatSession::start(BOSS_ID, test_hero(&catalog), &catalog, config)
        .unwrap()
        .with_roller(FixedRoll(0));

    session.queue_action(act("strike")).unwrap();
    let report = session.process_turn().unwrap();

    assert_eq!(report.clash.winner, Winner::Character);
    assert_eq!(report.clash.character_power, 12);
    assert_eq!(report.clash.boss_power, 10);
    assert_eq!(report.clash.damage, 2);
    assert_eq!(report.damage_applied, 2);
    assert_eq!(session.boss().current_health, 298);
    assert_eq!(session.character().current_mana, 45);
    assert_eq!(
        session.log(),
        [
            "Combat begins against Training Golem!".to_string(),
            "Strike wins the clash!".to_string(),
            "Training Golem takes 2 damage.".to_string(),
            "Turn 2 begins.".to_string(),
        ]
    );
}

#[test]
fn losing_clash_damages_the_character() {
    let catalog = test_catalog();
    let mut session =
        CombatSession::start(BOSS_ID, test_hero(&catalog), &catalog, SessionConfig::seeded(1))
            .unwrap()
            .with_roller(ScriptedRoll::new([0, 5]));

    session.queue_action(act("strike")).unwrap();
    let report = session.process_turn().unwrap();

    assert_eq!(report.clash.winner, Winner::Boss);
    assert_eq!(report.clash.damage, 3);
    assert_eq!(session.character().current_health, 97);
    assert_eq!(session.boss().current_health, 300);
    assert!(session.log().contains(&"Claw overwhelms Strike!".to_string()));
}

#[test]
fn overwhelming_margin_is_reported() {
    let catalog = test_catalog();
    let mut session =
        CombatSession::start(BOSS_ID, test_hero(&catalog), &catalog, SessionConfig::seeded(1))
            .unwrap()
            .with_roller(ScriptedRoll::new([6, 1]));

    session.queue_action(act("strike")).unwrap();
    let report = session.process_turn().unwrap();

    assert!(report.clash.is_overwhelming());
    assert_eq!(
        report.clash.effects,
        vec![
            "Strike wins the clash!".to_string(),
            "Overwhelming victory! Bonus damage applied.".to_string(),
        ]
    );
}

#[test]
fn half_health_enters_phase_two() {
    let catalog = test_catalog();
    // 12 + 148 against 10: exactly 150 damage, landing on the 0.5 threshold.
    let mut session =
        CombatSession::start(BOSS_ID, test_hero(&catalog), &catalog, SessionConfig::seeded(1))
            .unwrap()
            .with_roller(ScriptedRoll::new([148, 0]));

    session.queue_action(act("strike")).unwrap();
    let report = session.process_turn().unwrap();

    assert_eq!(session.boss().current_health, 150);
    assert_eq!(session.boss().phase, 2);
    assert_eq!(report.transitions.len(), 1);
    assert_eq!(
        session.boss().resistances.get(DamageType::Slash),
        ResistanceLevel::Resistant
    );
    assert!(session.boss().skills.iter().any(|s| s.id == "quake"));
    assert!(
        session
            .log()
            .contains(&"Training Golem enters Cracked Shell!".to_string())
    );
    assert!(
        session
            .log()
            .contains(&"Stone flakes away from the golem.".to_string())
    );
}

#[test]
fn one_hit_across_two_thresholds_applies_both_phases() {
    let catalog = test_catalog();
    // 240 against 10: 230 damage leaves 70 of 300, below both 0.5 and 0.25.
    let mut session =
        CombatSession::start(BOSS_ID, test_hero(&catalog), &catalog, SessionConfig::seeded(1))
            .unwrap()
            .with_roller(ScriptedRoll::new([228, 0]));

    session.queue_action(act("strike")).unwrap();
    let report = session.process_turn().unwrap();

    let phases: Vec<u32> = report.transitions.iter().map(|t| t.phase).collect();
    assert_eq!(phases, vec![2, 3]);
    let boss = session.boss();
    assert_eq!(boss.phase, 3);
    assert_eq!(boss.resistances.get(DamageType::Slash), ResistanceLevel::Resistant);
    assert_eq!(boss.resistances.get(DamageType::Pierce), ResistanceLevel::Fatal);
    assert!(boss.skills.iter().any(|s| s.id == "quake"));

    let phase_events = session
        .events()
        .full_history()
        .iter()
        .filter(|e| matches!(e, CombatEvent::BossPhaseChanged { .. }))
        .count();
    assert_eq!(phase_events, 2);
}

#[test]
fn phase_resistances_scale_later_hits() {
    let catalog = test_catalog();
    // First hit: 150 damage into phase 2 (slash resistant). Second: margin 20, halved.
    let mut session =
        CombatSession::start(BOSS_ID, test_hero(&catalog), &catalog, SessionConfig::seeded(4))
            .unwrap()
            .with_roller(ScriptedRoll::new([148, 0, 18, 0]));

    session.queue_action(act("strike")).unwrap();
    session.process_turn().unwrap();
    session.queue_action(act("strike")).unwrap();
    let report = session.process_turn().unwrap();

    assert_eq!(report.clash.damage, 20);
    assert_eq!(report.damage_applied, 10);
    assert_eq!(session.boss().current_health, 140);
}

#[test]
fn killing_blow_wins_and_grants_experience() {
    let catalog = test_catalog();
    let mut session =
        CombatSession::start(BOSS_ID, test_hero(&catalog), &catalog, SessionConfig::seeded(1))
            .unwrap()
            .with_roller(ScriptedRoll::new([500, 0]));

    session.queue_action(act("strike")).unwrap();
    let report = session.process_turn().unwrap();

    assert_eq!(report.phase, CombatPhase::Victory);
    assert_eq!(report.levels_gained, 1);
    assert!(session.boss().is_defeated);
    assert_eq!(session.boss().current_health, 0);
    assert_eq!(session.character().level, 2);
    assert!(
        session
            .log()
            .contains(&"Victory! Training Golem has been defeated!".to_string())
    );
    assert!(matches!(
        session.events().full_history().last(),
        Some(CombatEvent::CombatEnded { victory: true, .. })
    ));
    assert!(matches!(
        session.process_turn(),
        Err(CombatError::SessionFinished)
    ));
}

#[test]
fn losing_all_health_is_a_defeat() {
    let catalog = test_catalog();
    let mut session =
        CombatSession::start(BOSS_ID, test_hero(&catalog), &catalog, SessionConfig::seeded(1))
            .unwrap()
            .with_roller(ScriptedRoll::new([0, 200]));

    session.queue_action(act("strike")).unwrap();
    let report = session.process_turn().unwrap();

    assert_eq!(report.phase, CombatPhase::Defeat);
    assert_eq!(session.character().current_health, 0);
    assert_eq!(
        session.log().last().map(String::as_str),
        Some("Defeat! Tester has fallen.")
    );
}

#[test]
fn dark_skills_feed_corruption() {
    let catalog = test_catalog();
    let mut session =
        CombatSession::start(BOSS_ID, test_hero(&catalog), &catalog, SessionConfig::seeded(1))
            .unwrap()
            .with_roller(FixedRoll(0));

    session.queue_action(act("dark_cut")).unwrap();
    session.process_turn().unwrap();

    assert_eq!(session.character().corruption, 5);
    assert!(session.events().full_history().iter().any(|e| matches!(
        e,
        CombatEvent::CorruptionChanged {
            delta: 5,
            corruption: 5,
            ..
        }
    )));
}

#[test]
fn healing_skill_recovers_after_the_clash() {
    let catalog = test_catalog();
    let mut session =
        CombatSession::start(BOSS_ID, test_hero(&catalog), &catalog, SessionConfig::seeded(1))
            .unwrap()
            .with_roller(FixedRoll(0));

    // Mend has no power: Claw hits for 10, then Mend heals up to full.
    session.queue_action(act("mend")).unwrap();
    let report = session.process_turn().unwrap();

    assert_eq!(report.clash.winner, Winner::Boss);
    assert_eq!(report.healed, 10);
    assert_eq!(session.character().current_health, 100);
}

#[test]
fn weapon_skills_can_be_queued() {
    let catalog = test_catalog();
    let mut hero = test_hero(&catalog);
    let sword = default_weapons(&catalog)
        .into_iter()
        .find(|w| w.id == "iron_sword")
        .unwrap();
    hero.equip(sword);

    let mut session = CombatSession::start(BOSS_ID, hero, &catalog, SessionConfig::seeded(1))
        .unwrap()
        .with_roller(FixedRoll(0));

    session.queue_action(act("blade_dance")).unwrap();
    let report = session.process_turn().unwrap();
    assert_eq!(report.clash.damage, 10);
    assert_eq!(session.boss().current_health, 290);
}

#[test]
fn only_the_first_queued_action_resolves() {
    let catalog = test_catalog();
    let mut session =
        CombatSession::start(BOSS_ID, test_hero(&catalog), &catalog, SessionConfig::seeded(1))
            .unwrap()
            .with_roller(FixedRoll(0));

    session.queue_action(act("strike")).unwrap();
    session.queue_action(act("dark_cut")).unwrap();
    assert_eq!(session.queued_actions().len(), 2);

    let report = session.process_turn().unwrap();
    assert_eq!(report.clash.character_skill.id, "strike");
    assert!(session.queued_actions().is_empty());
    assert_eq!(session.character().corruption, 0);
}

#[test]
fn aborted_turn_is_published_and_recoverable() {
    let catalog = test_catalog();
    let mut hero = test_hero(&catalog);
    hero.current_mana = 2;
    let mut session = CombatSession::start(BOSS_ID, hero, &catalog, SessionConfig::seeded(1))
        .unwrap()
        .with_roller(FixedRoll(0));

    session.queue_action(act("strike")).unwrap();
    assert!(matches!(
        session.process_turn(),
        Err(CombatError::InsufficientMana { .. })
    ));
    assert_eq!(session.phase(), CombatPhase::Planning);
    assert_eq!(session.turn(), 1);
    assert!(matches!(
        session.events().full_history().last(),
        Some(CombatEvent::TurnAborted { turn: 1, .. })
    ));

    // A bad target is rejected the same way.
    session
        .queue_action(CombatAction::new("protagonist", "strike", "someone_else"))
        .unwrap();
    assert!(matches!(
        session.process_turn(),
        Err(CombatError::UnknownBoss(_))
    ));
    assert!(session.queue_action(act("strike")).is_ok());
}

#[test]
fn seeded_sessions_replay_identically() {
    let catalog = test_catalog();
    let play = |seed| {
        let mut session = CombatSession::start(
            BOSS_ID,
            test_hero(&catalog),
            &catalog,
            SessionConfig::seeded(seed),
        )
        .unwrap();
        for _ in 0..5 {
            session.queue_action(act("strike")).unwrap();
            if session.process_turn().is_err() || session.is_finished() {
                break;
            }
        }
        session.log().to_vec()
    };

    assert_eq!(play(42), play(42));
}

proptest::proptest! {
    #[test]
    fn prop_turn_damage_matches_the_clash_margin(character_roll in 0u32..60, boss_roll in 0u32..60) {
        let catalog = test_catalog();
        let mut session = CombatSession::start(
            BOSS_ID,
            test_hero(&catalog),
            &catalog,
            SessionConfig::seeded(7),
        )
        .unwrap()
        .with_roller(ScriptedRoll::new([character_roll, boss_roll]));

        session.queue_action(act("strike")).unwrap();
        let report = session.process_turn().unwrap();

        let character_power = 12 + character_roll;
        let boss_power = 10 + boss_roll;
        proptest::prop_assert_eq!(report.clash.damage, character_power.abs_diff(boss_power));
        let boss_lost = 300 - session.boss().current_health;
        let hero_lost = 100 - session.character().current_health;
        if character_power >= boss_power {
            proptest::prop_assert_eq!(boss_lost, report.damage_applied);
            proptest::prop_assert_eq!(hero_lost, 0);
        } else {
            proptest::prop_assert_eq!(hero_lost, report.damage_applied);
            proptest::prop_assert_eq!(boss_lost, 0);
        }
    }
}
