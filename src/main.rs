//! Auto-plays one fight and prints the combat log.
//!
//! Usage: `divine_clash [boss_id] [--json]`. Without a boss id the first
//! open act of the story is played.
use anyhow::{Context, Result, bail};

use divine_clash::{CombatAction, CombatSession, SessionConfig};
use divine_clash::combat::{Catalog, Skill};
use divine_clash::hero::Character;
use divine_clash::items::{Armory, default_weapons};
use divine_clash::story::StoryProgress;

/// Strongest offensive skill the character can still pay for.
fn pick_skill(character: &Character) -> Option<Skill> {
    character
        .available_skills()
        .into_iter()
        .filter(|s| s.is_offensive() && s.mana_cost <= character.current_mana)
        .max_by_key(|s| s.base_power)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut boss_arg = None;
    let mut json = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            other if other.starts_with("--") => bail!("unknown flag {other}"),
            other => boss_arg = Some(other.to_string()),
        }
    }

    let config = SessionConfig::from_env();
    let catalog = Catalog::builtin().context("built-in catalog is invalid")?;
    let mut story = StoryProgress::default();

    let boss_id = match boss_arg {
        Some(id) => id,
        None => story
            .current_act()
            .map(|act| act.boss_id.clone())
            .context("story has no open act")?,
    };

    let mut hero = Character::protagonist(&catalog);
    let mut armory = Armory::new(default_weapons(&catalog));
    armory.buy("iron_sword")?;
    hero.equip(armory.take("iron_sword")?);

    let mut session = CombatSession::start(&boss_id, hero, &catalog, config)
        .with_context(|| format!("cannot start combat against {boss_id}"))?;

    while !session.is_finished() {
        let Some(skill) = pick_skill(session.character()) else {
            println!("{} is out of mana and retreats.", session.character().name);
            break;
        };
        let action = CombatAction::new(&session.character().id, &skill.id, &boss_id);
        session.queue_action(action)?;
        session.process_turn()?;
    }

    for line in session.log() {
        println!("{line}");
    }

    if session.boss().is_defeated && story.can_challenge(&boss_id) {
        story.record_victory(&boss_id)?;
        if let Some(act) = story.current_act() {
            println!("Next: {} ({})", act.title, act.boss_id);
        }
    }

    if json {
        let events = serde_json::to_string_pretty(session.events().full_history())?;
        println!("{events}");
    }

    Ok(())
}
