use combat_core::{
    CreatureProfile, Dice, EquipSlot, ModifierId, MonsterFlag, MultiplierVector, ObjectFlag,
    ResolveMode, WeaponProfile, resolve,
};

fn vector(entries: &[(ModifierId, u16)]) -> MultiplierVector {
    entries.iter().copied().collect()
}

fn chosen_id(creature: &CreatureProfile, mults: &MultiplierVector) -> (u16, Option<ModifierId>) {
    let resolution = resolve(creature, mults, ResolveMode::Simulate);
    (resolution.multiplier, resolution.chosen.map(|def| def.id))
}

#[test]
fn slay_dragon_against_dragon() {
    let dragon = CreatureProfile::from_flags(&[MonsterFlag::Dragon, MonsterFlag::Evil]);
    let weapon = WeaponProfile::new(Dice::new(3, 5), EquipSlot::Weapon)
        .with_flag(ObjectFlag::SlayDragon);

    let resolution = resolve(&dragon, &MultiplierVector::from_weapon(&weapon), ResolveMode::Attack);

    assert_eq!(resolution.multiplier, 300);
    let def = resolution.chosen.expect("slay should fire");
    assert_eq!(def.id, ModifierId::Dragon3);
    assert_eq!(def.name(), "dragons");
    assert!(resolution.observed.object.test(ObjectFlag::SlayDragon));
    assert!(resolution.observed.lore.test(MonsterFlag::Dragon));
}

#[test]
fn weak_acid_stacks_with_vulnerability() {
    let slime = CreatureProfile::from_flags(&[MonsterFlag::HurtAcid]);
    let mults = vector(&[(ModifierId::Acid2, 200)]);

    let resolution = resolve(&slime, &mults, ResolveMode::Attack);

    assert_eq!(resolution.multiplier, 300);
    let def = resolution.chosen.expect("brand should fire");
    assert_eq!(def.brand, Some("weak acid"));
    assert!(resolution.observed.lore.test(MonsterFlag::HurtAcid));
}

#[test]
fn acid_against_acid_immune_creature() {
    let golem = CreatureProfile::from_flags(&[MonsterFlag::ImAcid]);
    let mults = vector(&[(ModifierId::Acid3, 300)]);

    assert_eq!(chosen_id(&golem, &mults), (100, None));
}

#[test]
fn resisted_brand_falls_through_to_other_modifiers() {
    let orc = CreatureProfile::from_flags(&[MonsterFlag::Orc, MonsterFlag::ImFire]);
    let mults = vector(&[(ModifierId::Fire3, 300), (ModifierId::Evil2, 200)]);
    assert_eq!(chosen_id(&orc, &mults), (100, None));

    let mults = vector(&[(ModifierId::Fire3, 300), (ModifierId::Orc3, 300)]);
    assert_eq!(chosen_id(&orc, &mults), (300, Some(ModifierId::Orc3)));
}

#[test]
fn ties_keep_the_earlier_definition() {
    let evil_orc = CreatureProfile::from_flags(&[MonsterFlag::Orc, MonsterFlag::Evil]);

    // Evil2 graded to 300 ties with Orc3 and comes first in the table.
    let mults = vector(&[(ModifierId::Evil2, 300), (ModifierId::Orc3, 300)]);
    assert_eq!(chosen_id(&evil_orc, &mults), (300, Some(ModifierId::Evil2)));

    // Two brands at the same strength: the first listed wins.
    let plain = CreatureProfile::default();
    let mults = vector(&[(ModifierId::Cold3, 300), (ModifierId::Fire3, 300)]);
    assert_eq!(chosen_id(&plain, &mults), (300, Some(ModifierId::Fire3)));
}

#[test]
fn vulnerability_tie_keeps_the_earlier_definition() {
    // Fire2 + vulnerability reaches 300, same as Cold3 on its own. Fire2 is
    // evaluated first and keeps the win.
    let creature = CreatureProfile::from_flags(&[MonsterFlag::HurtFire]);
    let mults = vector(&[(ModifierId::Fire2, 200), (ModifierId::Cold3, 300)]);
    assert_eq!(chosen_id(&creature, &mults), (300, Some(ModifierId::Fire2)));
}

#[test]
fn best_never_drops_as_slots_are_added() {
    let creature = CreatureProfile::from_flags(&[
        MonsterFlag::Undead,
        MonsterFlag::Evil,
        MonsterFlag::HurtLight,
        MonsterFlag::ImCold,
    ]);
    let additions = [
        (ModifierId::Cold3, 300),
        (ModifierId::Evil2, 200),
        (ModifierId::Animal2, 200),
        (ModifierId::Undead2, 200),
        (ModifierId::Fire2, 200),
        (ModifierId::Undead3, 300),
        (ModifierId::Dragon5, 500),
        (ModifierId::Undead5, 500),
    ];

    let mut mults = MultiplierVector::new();
    let mut previous = resolve(&creature, &mults, ResolveMode::Simulate).multiplier;
    for (id, value) in additions {
        mults.raise(id, value);
        let current = resolve(&creature, &mults, ResolveMode::Simulate).multiplier;
        assert!(current >= previous, "{id} lowered best from {previous} to {current}");
        previous = current;
    }
    assert_eq!(previous, 500);
}

#[test]
fn launcher_and_ammo_share_one_vector() {
    let troll = CreatureProfile::from_flags(&[MonsterFlag::Troll, MonsterFlag::HurtCold]);
    let bow = WeaponProfile::new(Dice::default(), EquipSlot::Bow).with_flag(ObjectFlag::BrandCool);
    let arrow = WeaponProfile::new(Dice::new(1, 9), EquipSlot::Pack).with_flag(ObjectFlag::SlayTroll);

    let mut mults = MultiplierVector::from_weapon(&bow);
    mults.absorb(&arrow);

    // Cool brand (200) + vulnerability = 300 ties the troll slay; the brand
    // is earlier in the table.
    assert_eq!(chosen_id(&troll, &mults), (300, Some(ModifierId::Cold2)));
}

#[test]
fn resolution_is_repeatable() {
    let creature = CreatureProfile::from_flags(&[MonsterFlag::Demon, MonsterFlag::Evil]);
    let mults = vector(&[(ModifierId::Demon3, 300), (ModifierId::Evil2, 200)]);
    let first = resolve(&creature, &mults, ResolveMode::Attack);
    let second = resolve(&creature, &mults, ResolveMode::Attack);
    assert_eq!(first, second);
}

#[test]
fn digging_tools_hurt_stone_creatures() {
    let giant = CreatureProfile::from_flags(&[MonsterFlag::Giant, MonsterFlag::HurtRock]);
    let mut pick = WeaponProfile::new(Dice::new(1, 3), EquipSlot::Weapon).with_flag(ObjectFlag::Impact);
    pick.add_pval(ObjectFlag::Tunnel, 2).unwrap();

    let mults = MultiplierVector::from_weapon(&pick);
    assert_eq!(mults[ModifierId::Impact1], 100);
    assert_eq!(mults[ModifierId::Tunnel1], 300);

    let resolution = resolve(&giant, &mults, ResolveMode::Attack);
    assert_eq!(resolution.multiplier, 400);
    assert_eq!(resolution.chosen.map(|def| def.id), Some(ModifierId::Tunnel1));
    assert!(resolution.observed.lore.test(MonsterFlag::HurtRock));

    let wolf = CreatureProfile::from_flags(&[MonsterFlag::Animal]);
    assert_eq!(chosen_id(&wolf, &mults), (100, None));
}

#[test]
fn light_doubles_against_light_sensitive_creatures() {
    let orc = CreatureProfile::from_flags(&[MonsterFlag::Orc, MonsterFlag::HurtLight]);
    let lantern = WeaponProfile::new(Dice::new(1, 4), EquipSlot::Light).with_flag(ObjectFlag::Light);
    let mults = MultiplierVector::from_weapon(&lantern);
    assert_eq!(chosen_id(&orc, &mults), (200, Some(ModifierId::Light1)));
}
