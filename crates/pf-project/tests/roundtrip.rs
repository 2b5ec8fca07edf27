use pf_project::schema::*;
use pf_project::{load_json, load_yaml, save_json, save_yaml, validate_project};

fn make_base_batch() -> BatchDef {
    BatchDef {
        id: "b1".to_string(),
        name: "HDPE Baseline".to_string(),
        batch_size_kg: 10_000.0,
        feedstock: FeedstockDef::Pure {
            polymer: "HDPE".to_string(),
        },
        reactor: ReactorDef {
            temperature_c: 450.0,
            pressure_atm: 1.0,
        },
        catalyst: CatalystDef {
            catalyst_type: "ZSM-5".to_string(),
            quantity_kg: 500.0,
            efficiency_pct: 90.0,
        },
        layout: LayoutDef {
            sequence: "S1: Basic".to_string(),
            condenser_stages: 1,
            vacuum_pumps: 2,
        },
        recycle: None,
        economics: EconomicsDef::default(),
    }
}

fn make_blend_batch() -> BatchDef {
    let mut batch = make_base_batch();
    batch.id = "b2".to_string();
    batch.name = "Mixed Blend".to_string();
    batch.feedstock = FeedstockDef::Mixed {
        hdpe_pct: 40.0,
        ldpe_pct: 30.0,
        pp_pct: 30.0,
    };
    batch.layout.sequence = "S4: Optimized".to_string();
    batch.recycle = Some(RecycleDef {
        max_recycles: 2,
        precracker: Some(PrecrackerDef {
            temperature_c: 420.0,
            catalyst_boost: 1.2,
        }),
    });
    batch
}

#[test]
fn roundtrip_yaml_empty_project() {
    let project = Project {
        version: 1,
        name: "Empty Project".to_string(),
        batches: vec![],
    };

    validate_project(&project).unwrap();

    let temp_dir = std::env::temp_dir();
    let path = temp_dir.join("pf_project_roundtrip_empty.yaml");

    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn roundtrip_yaml_full_project() {
    let project = Project {
        version: 1,
        name: "Blend Project".to_string(),
        batches: vec![make_base_batch(), make_blend_batch()],
    };

    validate_project(&project).unwrap();

    let temp_dir = std::env::temp_dir();
    let path = temp_dir.join("pf_project_roundtrip_full.yaml");

    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn roundtrip_json_full_project() {
    let project = Project {
        version: 1,
        name: "Blend Project".to_string(),
        batches: vec![make_base_batch(), make_blend_batch()],
    };

    validate_project(&project).unwrap();

    let temp_dir = std::env::temp_dir();
    let path = temp_dir.join("pf_project_roundtrip_full.json");

    save_json(&path, &project).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn save_rejects_duplicate_batch_ids() {
    let project = Project {
        version: 1,
        name: "Duplicates".to_string(),
        batches: vec![make_base_batch(), make_base_batch()],
    };

    let temp_dir = std::env::temp_dir();
    let path = temp_dir.join("pf_project_roundtrip_dup.yaml");

    let result = save_yaml(&path, &project);
    assert!(result.is_err());
}
