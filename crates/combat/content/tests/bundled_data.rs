use std::path::PathBuf;

use combat_content::ContentFactory;
use combat_core::{ModifierId, ResolveMode, resolve};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data")
}

#[test]
fn bundled_catalogue_loads_and_scores() {
    let catalogue = ContentFactory::new(data_dir()).build_catalogue().unwrap();

    assert!(!catalogue.equipment.is_empty());
    assert!(!catalogue.creatures.is_empty());
    assert!(!catalogue.cache().is_empty());
    assert!(catalogue.cache().unscored().is_empty());
}

#[test]
fn bundled_dragonbane_slays_dragons() {
    let catalogue = ContentFactory::new(data_dir()).build_catalogue().unwrap();
    let lance = catalogue.equipment("Lance of Dragonbane").unwrap();
    let wyrm = catalogue.creature("White wyrm").unwrap();

    let resolution = resolve(&wyrm.profile, &lance.multipliers(), ResolveMode::Attack);
    assert_eq!(resolution.multiplier, 500);
    assert_eq!(resolution.chosen.map(|def| def.id), Some(ModifierId::Dragon5));
}

#[test]
fn bundled_plain_weapons_have_no_power() {
    let catalogue = ContentFactory::new(data_dir()).build_catalogue().unwrap();
    let dagger = catalogue.equipment("Dagger").unwrap();
    assert_eq!(catalogue.power_of(dagger), None);
}

#[test]
fn bundled_mattock_bores_into_stone() {
    let catalogue = ContentFactory::new(data_dir()).build_catalogue().unwrap();
    let mattock = catalogue.equipment("Dwarven Mattock").unwrap();
    let giant = catalogue.creature("Stone giant").unwrap();

    let resolution = resolve(&giant.profile, &mattock.multipliers(), ResolveMode::Simulate);
    assert_eq!(resolution.multiplier, 400);
    assert_eq!(resolution.chosen.map(|def| def.id), Some(ModifierId::Tunnel1));

    let lantern = catalogue.equipment("Lantern of Radiance").unwrap();
    let troll = catalogue.creature("Cave troll").unwrap();
    let resolution = resolve(&troll.profile, &lantern.multipliers(), ResolveMode::Simulate);
    assert_eq!(resolution.multiplier, 200);
    assert!(catalogue.power_of(lantern).is_some());
}
