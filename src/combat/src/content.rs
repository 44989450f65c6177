//! Built-in game content: every skill, the skill set of each owner, and the
//! boss roster of the story.

use std::collections::BTreeMap;

use crate::catalog::{BossDefinition, CatalogDefinition, PhaseDefinition};
use crate::effect::{EffectKind, SkillEffect, Target};
use crate::resistance::{ResistanceChanges, ResistanceLevel, ResistanceTable};
use crate::skill::{DamageType, ElementType, Skill};

use DamageType::{Blunt, Pierce, Slash};
use ElementType::{Air, Dark, Divine, Earth, Fire, Light};
use ResistanceLevel::{Endured, Fatal, Ineffective, Normal, Resistant};

fn skill(
    id: &str,
    name: &str,
    element: ElementType,
    damage_type: DamageType,
    base_power: u32,
    mana_cost: u32,
    description: &str,
) -> Skill {
    Skill::new(id, name, element, damage_type, base_power, mana_cost).with_description(description)
}

fn debuff(value: u32) -> SkillEffect {
    SkillEffect::new(EffectKind::Debuff, value, Target::Enemy)
}

fn stagger(value: u32) -> SkillEffect {
    SkillEffect::new(EffectKind::Stagger, value, Target::Enemy)
}

fn buff_self(value: u32) -> SkillEffect {
    SkillEffect::new(EffectKind::Buff, value, Target::SelfTarget)
}

#[rustfmt::skip]
fn protagonist_skills() -> Vec<Skill> {
    vec![
        skill("holy_strike", "Holy Strike", Light, Slash, 12, 10,
            "A righteous attack blessed by divine light.")
            .with_effect(SkillEffect::damage(2)),
        skill("divine_protection", "Divine Protection", Light, Blunt, 0, 15,
            "Calls upon divine blessing for protection.")
            .with_effect(SkillEffect::heal_self(20)),
        skill("prayer_of_justice", "Prayer of Justice", Divine, Pierce, 18, 20,
            "A powerful prayer that pierces through evil.")
            .with_effect(SkillEffect::damage(4)),
        skill("conflicted_strike", "Conflicted Strike", Light, Slash, 14, 10,
            "A strike torn between righteousness and vengeance."),
        skill("shadow_prayer", "Shadow Prayer", Dark, Pierce, 12, 15,
            "A prayer to powers that should not be named."),
        skill("vengeful_slash", "Vengeful Slash", Dark, Slash, 16, 12,
            "A strike fueled by burning hatred and betrayal.")
            .with_effect(SkillEffect::damage(3)),
        skill("dark_covenant", "Dark Covenant", Dark, Blunt, 0, 18,
            "Draws power from the god killer's influence.")
            .with_effect(buff_self(2)),
        skill("god_slayer_technique", "God Slayer Technique", Dark, Pierce, 25, 25,
            "The ultimate technique taught by the god killer.")
            .with_effect(SkillEffect::damage(6))
            .with_effect(debuff(2)),
    ]
}

#[rustfmt::skip]
fn weapon_skills() -> Vec<Skill> {
    vec![
        skill("slash_attack", "Slash Attack", Light, Slash, 15, 8, "A swift slashing attack."),
        skill("divine_smite", "Divine Smite", Light, Blunt, 20, 12, "Calls down divine judgment."),
        skill("shadow_strike", "Shadow Strike", Dark, Pierce, 18, 10, "Strikes from the shadows."),
        skill("divine_rend", "Divine Rend", Dark, Slash, 35, 25, "Tears through divine protection."),
    ]
}

#[rustfmt::skip]
fn god_skills() -> Vec<Skill> {
    vec![
        // god of war
        skill("divine_wrath", "Divine Wrath", Fire, Slash, 22, 15,
            "The burning rage of the war god manifests as blazing slashes.")
            .with_effect(SkillEffect::damage(5)),
        skill("divine_aegis_shield", "Divine Aegis Shield", Light, Blunt, 8, 18,
            "Summons a golden divine shield that absorbs attacks and reflects damage.")
            .with_effect(SkillEffect::heal_self(25)),
        skill("celestial_sword_strike", "Celestial Sword Strike", Light, Slash, 30, 25,
            "A massive golden sword descends from the heavens to strike with divine judgment.")
            .with_effect(SkillEffect::damage(8)),
        skill("sacred_prayer_bow", "Sacred Prayer Bow", Divine, Pierce, 26, 22,
            "Divine prayer manifests as a spectral bow that shoots light arrows through the target.")
            .with_effect(SkillEffect::damage(7)),
        skill("battlefield_dominion", "Battlefield Dominion", Fire, Blunt, 28, 20,
            "Controls the entire battlefield with divine might, creating fiery craters.")
            .with_effect(SkillEffect::damage(6))
            .with_effect(debuff(2)),
        skill("wrath_of_olympus", "Wrath of Olympus", Fire, Slash, 35, 30,
            "Channels the combined fury of all Olympian gods into devastating strikes.")
            .with_effect(SkillEffect::damage(10))
            .with_effect(stagger(4)),
        // god of wisdom
        skill("omniscient_gaze", "Omniscient Gaze", Light, Pierce, 20, 18,
            "All-seeing eyes pierce through illusions and strike with perfect accuracy.")
            .with_effect(SkillEffect::damage(4)),
        skill("wisdom_barrier", "Wisdom Barrier", Light, Blunt, 10, 20,
            "Creates a shimmering barrier of pure knowledge that deflects attacks.")
            .with_effect(SkillEffect::heal_self(30)),
        skill("divine_spear_rain", "Divine Spear Rain", Light, Pierce, 28, 24,
            "Summons countless spears of light from the sky in a devastating rain.")
            .with_effect(SkillEffect::damage(8)),
        skill("sacred_prayer_arrow", "Sacred Prayer Arrow", Divine, Pierce, 24, 22,
            "A prayer takes form as a glowing arrow that phases through defenses.")
            .with_effect(SkillEffect::damage(6)),
        skill("reality_weave", "Reality Weave", Light, Blunt, 25, 25,
            "Manipulates reality itself to create crushing force.")
            .with_effect(SkillEffect::damage(7))
            .with_effect(stagger(3)),
        // god of nature
        skill("natures_fury", "Nature's Fury", Earth, Blunt, 24, 20,
            "The earth itself rises up in massive stone fists to crush enemies.")
            .with_effect(SkillEffect::damage(6)),
        skill("bark_skin_shield", "Bark Skin Shield", Earth, Blunt, 5, 18,
            "Grows a protective bark armor that absorbs damage.")
            .with_effect(SkillEffect::heal_self(35)),
        skill("thorn_blade_storm", "Thorn Blade Storm", Earth, Slash, 26, 24,
            "Summons a whirlwind of razor-sharp thorn blades from above.")
            .with_effect(SkillEffect::damage(7)),
        skill("prayer_of_growth", "Prayer of Growth", Earth, Pierce, 22, 20,
            "Sacred prayer causes massive thorny vines to burst from the ground.")
            .with_effect(SkillEffect::damage(6)),
        skill("life_drain", "Life Drain", Earth, Pierce, 18, 22,
            "Drains the life force through root-like tendrils.")
            .with_effect(SkillEffect::damage(4))
            .with_effect(SkillEffect::heal_self(15)),
        // god of storms
        skill("lightning_strike", "Lightning Strike", Air, Pierce, 26, 18,
            "A devastating bolt of lightning pierces from the storm clouds.")
            .with_effect(SkillEffect::damage(7)),
        skill("storm_aegis", "Storm Aegis", Air, Blunt, 8, 20,
            "A swirling shield of wind and lightning deflects attacks.")
            .with_effect(SkillEffect::heal_self(28)),
        skill("thunderbolt_lance", "Thunderbolt Lance", Air, Pierce, 32, 28,
            "Zeus's mighty thunderbolt manifests as a piercing lance of pure energy.")
            .with_effect(SkillEffect::damage(9)),
        skill("divine_storm_prayer", "Divine Storm Prayer", Divine, Slash, 28, 25,
            "A prayer calls down a localized storm that slashes with wind blades.")
            .with_effect(SkillEffect::damage(8)),
        skill("tempest_rage", "Tempest Rage", Air, Slash, 30, 25,
            "A hurricane of divine fury tears through everything.")
            .with_effect(SkillEffect::damage(8))
            .with_effect(debuff(3)),
        // god of death
        skill("soul_reaper", "Soul Reaper", Dark, Slash, 32, 22,
            "A spectral scythe harvests souls with divine authority.")
            .with_effect(SkillEffect::damage(9)),
        skill("underworld_barrier", "Underworld Barrier", Dark, Blunt, 6, 22,
            "Creates a barrier of pure darkness and death essence.")
            .with_effect(SkillEffect::heal_self(40)),
        skill("death_blade_descent", "Death Blade Descent", Dark, Slash, 34, 30,
            "A massive blade of death energy descends from the underworld.")
            .with_effect(SkillEffect::damage(10)),
        skill("prayer_of_endings", "Prayer of Endings", Dark, Pierce, 30, 26,
            "A prayer to death itself manifests as piercing void energy.")
            .with_effect(SkillEffect::damage(8)),
        skill("void_embrace", "Void Embrace", Dark, Blunt, 35, 30,
            "Embraces enemies in the crushing void of absolute death.")
            .with_effect(SkillEffect::damage(10))
            .with_effect(stagger(5)),
        // the god killer
        skill("despair_wave", "Despair Wave", Dark, Slash, 30, 20,
            "Overwhelming despair manifested as pure destruction.")
            .with_effect(SkillEffect::damage(8)),
        skill("reality_break", "Reality Break", Dark, Blunt, 35, 30,
            "Shatters the very fabric of existence.")
            .with_effect(SkillEffect::damage(10))
            .with_effect(debuff(5)),
        skill("god_killer_unleashed", "God Killer Unleashed", Dark, Pierce, 50, 40,
            "The full power of the god killer, unrestrained.")
            .with_effect(SkillEffect::damage(15))
            .with_effect(stagger(10)),
        // crimson apostle
        skill("crimson_slash", "Crimson Slash", Fire, Slash, 14, 0,
            "A sweeping cut that leaves a trail of boiling blood."),
        skill("blood_ward", "Blood Ward", Fire, Blunt, 6, 0,
            "Congealed blood hardens into a shield.")
            .with_effect(SkillEffect::heal_self(15)),
        skill("crimson_spear", "Crimson Spear", Fire, Pierce, 24, 0,
            "A lance of crystallised blood hurled with divine wrath.")
            .with_effect(SkillEffect::damage(6)),
    ]
}

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn changes(entries: &[(DamageType, ResistanceLevel)]) -> ResistanceChanges {
    entries.iter().copied().collect()
}

fn phase(
    phase: u32,
    health_threshold: f64,
    name: &str,
    description: &str,
    new_skills: &[&str],
    resistance_changes: ResistanceChanges,
    special_mechanics: &[&str],
) -> PhaseDefinition {
    PhaseDefinition {
        phase,
        health_threshold,
        name: name.to_string(),
        description: description.to_string(),
        new_skills: ids(new_skills),
        resistance_changes,
        special_mechanics: ids(special_mechanics),
    }
}

fn boss(
    id: &str,
    name: &str,
    title: &str,
    max_health: u32,
    skills: &[&str],
    resistances: ResistanceTable,
    phases: Vec<PhaseDefinition>,
) -> BossDefinition {
    BossDefinition {
        id: id.to_string(),
        name: name.to_string(),
        title: title.to_string(),
        max_health,
        skills: ids(skills),
        resistances,
        phases,
    }
}

#[rustfmt::skip]
fn bosses() -> Vec<BossDefinition> {
    vec![
        boss(
            "crimson_apostle", "Crimson Apostle", "Herald of the Red Dawn", 500,
            &["crimson_slash", "blood_ward"],
            ResistanceTable::new(Normal, Endured, Resistant),
            vec![
                phase(1, 1.0, "Awakening Phase", "The Crimson Apostle begins its assault.",
                    &[], changes(&[]), &["Basic attacks only"]),
                phase(2, 0.6, "Rage Phase", "Blood boils as the apostle enters a frenzied state!",
                    &[], changes(&[(Slash, Endured), (Pierce, Normal), (Blunt, Ineffective)]),
                    &["Increased attack frequency"]),
                phase(3, 0.2, "Apostolic Fury", "Divine wrath manifests! All attacks become devastating!",
                    &["crimson_spear"], changes(&[(Slash, Resistant), (Pierce, Resistant), (Blunt, Normal)]),
                    &["All attacks deal area damage", "Immunity to stagger"]),
            ],
        ),
        boss(
            "god_of_war", "Ares", "God of War", 400,
            &["divine_wrath", "divine_aegis_shield", "celestial_sword_strike"],
            ResistanceTable::new(Normal, Endured, Resistant),
            vec![
                phase(2, 0.6, "Battle Frenzy", "The war god's blade burns white-hot!",
                    &["sacred_prayer_bow"], changes(&[(Slash, Endured), (Blunt, Normal)]),
                    &["New skill: Sacred Prayer Bow"]),
                phase(3, 0.2, "Wrath of Olympus", "Every god of Olympus lends Ares their fury!",
                    &["battlefield_dominion", "wrath_of_olympus"],
                    changes(&[(Slash, Resistant), (Pierce, Resistant), (Blunt, Fatal)]),
                    &["Devastating area attacks"]),
            ],
        ),
        boss(
            "god_of_wisdom", "Athena", "Goddess of Wisdom", 450,
            &["omniscient_gaze", "wisdom_barrier", "divine_spear_rain"],
            ResistanceTable::new(Endured, Normal, Normal),
            vec![
                phase(2, 0.5, "Strategic Retreat", "Athena reads every move you make.",
                    &["sacred_prayer_arrow"], changes(&[(Pierce, Endured)]),
                    &["Anticipates piercing attacks"]),
                phase(3, 0.25, "Reality Unbound", "Knowledge itself bends reality around her!",
                    &["reality_weave"], changes(&[(Slash, Resistant), (Blunt, Fatal)]),
                    &["Crushing reality weaves"]),
            ],
        ),
        boss(
            "god_of_nature", "Gaia", "Goddess of Nature", 500,
            &["natures_fury", "bark_skin_shield", "thorn_blade_storm"],
            ResistanceTable::new(Fatal, Normal, Resistant),
            vec![
                phase(2, 0.6, "Overgrowth", "Thorny vines erupt across the battlefield.",
                    &["prayer_of_growth"], changes(&[(Slash, Normal)]),
                    &["Vines hinder movement"]),
                phase(3, 0.3, "Withering Embrace", "Gaia drains the life from everything around her!",
                    &["life_drain"], changes(&[(Slash, Endured), (Pierce, Endured)]),
                    &["Heals while attacking"]),
            ],
        ),
        boss(
            "god_of_storms", "Zeus", "God of Storms", 550,
            &["lightning_strike", "storm_aegis", "thunderbolt_lance"],
            ResistanceTable::new(Normal, Endured, Normal),
            vec![
                phase(2, 0.5, "Gathering Storm", "Thunder roars as the skies darken.",
                    &["divine_storm_prayer"], changes(&[(Blunt, Endured)]),
                    &["Lightning strikes intensify"]),
                phase(3, 0.2, "Tempest Incarnate", "Zeus becomes the storm itself!",
                    &["tempest_rage"], changes(&[(Slash, Resistant), (Pierce, Resistant), (Blunt, Fatal)]),
                    &["Hurricane winds"]),
            ],
        ),
        boss(
            "god_of_death", "Thanatos", "God of Death", 600,
            &["soul_reaper", "underworld_barrier", "death_blade_descent"],
            ResistanceTable::new(Endured, Normal, Endured),
            vec![
                phase(2, 0.6, "Underworld Gate", "The gates of the underworld creak open.",
                    &["prayer_of_endings"], changes(&[(Pierce, Endured)]),
                    &["Souls of the dead join the fight"]),
                phase(3, 0.25, "Final Embrace", "Death itself reaches out to claim you!",
                    &["void_embrace"], changes(&[(Slash, Resistant), (Blunt, Normal)]),
                    &["Void attacks crush all defenses"]),
            ],
        ),
        boss(
            "final_boss", "The God Killer", "Devourer of Gods", 800,
            &["despair_wave", "reality_break"],
            ResistanceTable::new(Endured, Endured, Endured),
            vec![
                phase(2, 0.5, "Unrestrained", "The God Killer sheds its borrowed form!",
                    &["god_killer_unleashed"], changes(&[(Slash, Resistant), (Pierce, Normal)]),
                    &["Reality fractures with every strike"]),
            ],
        ),
        boss(
            "corrupted_self", "Corrupted Self", "The Shadow Within", 350,
            &["vengeful_slash", "dark_covenant", "god_slayer_technique"],
            ResistanceTable::uniform(Normal),
            vec![
                phase(2, 0.4, "Consumed by Hatred", "Your reflection snarls with your own voice.",
                    &["shadow_prayer"], changes(&[(Slash, Endured)]),
                    &["Mirrors your corruption"]),
            ],
        ),
        boss(
            "god_killer_avatar", "Avatar of the God Killer", "Vessel of the End", 900,
            &["despair_wave", "soul_reaper", "reality_break"],
            ResistanceTable::new(Endured, Resistant, Normal),
            vec![
                phase(2, 0.6, "Angelic Siege", "The angels' light burns away the avatar's shell.",
                    &["void_embrace"], changes(&[(Pierce, Normal)]),
                    &["Celestial allies weaken its defenses"]),
                phase(3, 0.25, "Desperate Fury", "The avatar lashes out with everything it has!",
                    &["god_killer_unleashed"], changes(&[(Slash, Resistant), (Blunt, Fatal)]),
                    &["Attacks become erratic and deadly"]),
            ],
        ),
        boss(
            "true_god_killer", "The True God Killer", "End of All Things", 1200,
            &["despair_wave", "reality_break", "death_blade_descent"],
            ResistanceTable::new(Resistant, Endured, Endured),
            vec![
                phase(2, 0.7, "True Form", "The God Killer reveals its true nature.",
                    &["god_killer_unleashed"], changes(&[(Pierce, Resistant)]),
                    &["Absorbs divine power"]),
                phase(3, 0.4, "Hunger of the Void", "It devours the light around it!",
                    &["void_embrace", "tempest_rage"], changes(&[(Slash, Endured), (Blunt, Resistant)]),
                    &["Feeds on despair"]),
                phase(4, 0.15, "Last Stand", "Its form flickers, unstable and desperate!",
                    &["wrath_of_olympus"], changes(&[(Slash, Fatal), (Pierce, Fatal), (Blunt, Fatal)]),
                    &["Defenses collapse"]),
            ],
        ),
    ]
}

#[rustfmt::skip]
fn skill_sets() -> BTreeMap<String, Vec<String>> {
    let sets: &[(&str, &[&str])] = &[
        ("pure", &["holy_strike", "divine_protection", "prayer_of_justice"]),
        ("conflicted", &["conflicted_strike", "shadow_prayer"]),
        ("corrupted", &["vengeful_slash", "dark_covenant", "god_slayer_technique"]),
        ("iron_sword", &["slash_attack"]),
        ("blessed_mace", &["divine_smite"]),
        ("shadow_dagger", &["shadow_strike"]),
        ("godslayer_blade", &["divine_rend"]),
        ("god_of_war", &[
            "divine_wrath", "divine_aegis_shield", "celestial_sword_strike",
            "sacred_prayer_bow", "battlefield_dominion", "wrath_of_olympus",
        ]),
        ("god_of_wisdom", &[
            "omniscient_gaze", "wisdom_barrier", "divine_spear_rain",
            "sacred_prayer_arrow", "reality_weave",
        ]),
        ("god_of_nature", &[
            "natures_fury", "bark_skin_shield", "thorn_blade_storm",
            "prayer_of_growth", "life_drain",
        ]),
        ("god_of_storms", &[
            "lightning_strike", "storm_aegis", "thunderbolt_lance",
            "divine_storm_prayer", "tempest_rage",
        ]),
        ("god_of_death", &[
            "soul_reaper", "underworld_barrier", "death_blade_descent",
            "prayer_of_endings", "void_embrace",
        ]),
        ("final_boss", &["despair_wave", "reality_break", "god_killer_unleashed"]),
        ("crimson_apostle", &["crimson_slash", "blood_ward", "crimson_spear"]),
    ];

    sets.iter()
        .map(|(owner, skills)| (owner.to_string(), ids(skills)))
        .collect()
}

/// The complete built-in catalog definition.
pub fn definition() -> CatalogDefinition {
    let mut skills = protagonist_skills();
    skills.extend(weapon_skills());
    skills.extend(god_skills());

    CatalogDefinition {
        skills,
        skill_sets: skill_sets(),
        bosses: bosses(),
    }
}
