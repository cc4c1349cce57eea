use proptest::prelude::*;
use sylva_blocks::registry::BlockRegistry;
use sylva_blocks::types::{Block, LogAxis, Material};

const BLOCKS_TOML: &str = r#"
unknown_block = "stone"

[[blocks]]
name = "air"
material = "air"

[[blocks]]
name = "stone"
material = "stone"

[[blocks]]
name = "grass"
material = "grass"

[[blocks]]
name = "oak_leaves"
material = "leaves"

[[blocks]]
name = "oak_log"
material = "wood"

[[blocks]]
name = "oak_sapling"
material = "sapling"
"#;

#[test]
fn resolves_names_to_dense_ids() {
    let reg = BlockRegistry::from_toml_str(BLOCKS_TOML).expect("registry");
    assert_eq!(reg.id_by_name("air"), Some(0));
    assert_eq!(reg.id_by_name("oak_sapling"), Some(5));
    assert_eq!(reg.id_by_name("birch_log"), None);
    assert_eq!(reg.unknown_block_id, reg.id_by_name("stone"));
}

#[test]
fn material_classes_answer_growth_queries() {
    let reg = BlockRegistry::from_toml_str(BLOCKS_TOML).expect("registry");
    let leaves = reg.block_by_name("oak_leaves").unwrap();
    let stone = reg.block_by_name("stone").unwrap();
    let grass = reg.block_by_name("grass").unwrap();

    assert!(reg.material_of(leaves).can_grow_into());
    assert!(reg.material_of(leaves).replaceable_by_leaves());
    assert!(!reg.material_of(stone).can_grow_into());
    assert!(reg.material_of(grass).sustains_sapling());
    assert!(!reg.material_of(grass).replaceable_by_leaves());
}

#[test]
fn out_of_range_id_reads_as_stone() {
    let reg = BlockRegistry::from_toml_str(BLOCKS_TOML).expect("registry");
    let bogus = Block::new(999);
    assert_eq!(reg.material_of(bogus), Material::Stone);
    assert!(!reg.material_of(bogus).can_grow_into());
}

#[test]
fn rejects_unknown_material_class() {
    let toml = r#"
        [[blocks]]
        name = "mystery"
        material = "plasma"
    "#;
    assert!(BlockRegistry::from_toml_str(toml).is_err());
}

#[test]
fn rejects_duplicate_names_and_sparse_ids() {
    let dup = r#"
        [[blocks]]
        name = "air"
        material = "air"
        [[blocks]]
        name = "air"
        material = "air"
    "#;
    assert!(BlockRegistry::from_toml_str(dup).is_err());

    let sparse = r#"
        [[blocks]]
        name = "air"
        id = 4
        material = "air"
    "#;
    assert!(BlockRegistry::from_toml_str(sparse).is_err());
}

#[test]
fn log_axis_packs_into_state() {
    let log = Block::new(4).with_state(LogAxis::Y.state());
    assert_eq!(log.id, 4);
    assert_eq!(log.state, LogAxis::Y.state());
    assert_ne!(LogAxis::X.state(), LogAxis::Y.state());
}

proptest! {
    #[test]
    fn material_names_roundtrip(m in prop_oneof![
        Just(Material::Air),
        Just(Material::Leaves),
        Just(Material::Grass),
        Just(Material::Dirt),
        Just(Material::Wood),
        Just(Material::Vine),
        Just(Material::Sapling),
        Just(Material::Stone),
        Just(Material::Water),
    ]) {
        prop_assert_eq!(Material::parse(m.as_str()), Some(m));
    }

    #[test]
    fn leaf_replaceable_is_subset_of_growable(m in prop_oneof![
        Just(Material::Air),
        Just(Material::Leaves),
        Just(Material::Grass),
        Just(Material::Dirt),
        Just(Material::Wood),
        Just(Material::Vine),
        Just(Material::Sapling),
        Just(Material::Stone),
        Just(Material::Water),
    ]) {
        if m.replaceable_by_leaves() {
            prop_assert!(m.can_grow_into());
        }
    }
}
