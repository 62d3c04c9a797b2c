//! End-to-end store lifecycle: register -> insert -> query.

use anyhow::Result;

use struct_store_core::record_struct;
use struct_store_core::{Store, StoreError, TimestampNs, TypeKind};

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Vec3 {
    x: f64,
    y: f64,
    z: f64,
}

record_struct!(Vec3 { x: f64, y: f64, z: f64 });

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Reading {
    taken_at: TimestampNs,
    sensor: u16,
    value: f32,
    valid: bool,
}

record_struct!(Reading {
    taken_at: TimestampNs,
    sensor: u16,
    value: f32,
    valid: bool,
});

fn register_vec3(store: &mut Store) -> Result<struct_store_core::TypeHandle> {
    Ok(store.register_struct(
        "Vec3",
        &[("x", Store::F64), ("y", Store::F64), ("z", Store::F64)],
    )?)
}

#[test]
fn vec3_register_insert_query() -> Result<()> {
    let mut store = Store::new();
    let vec3 = register_vec3(&mut store)?;

    let meta = store.registry().meta_of(vec3)?;
    assert_eq!(meta.size, 24);
    assert_eq!(meta.align, 8);
    let offsets: Vec<usize> = meta.fields.iter().map(|f| f.offset).collect();
    assert_eq!(offsets, vec![0, 8, 16]);

    store.insert(
        &Vec3 {
            x: 1.0,
            y: 1.0,
            z: 1.0,
        },
        vec3,
    )?;

    let first: Vec3 = store.query_first(vec3)?;
    assert_eq!(
        first,
        Vec3 {
            x: 1.0,
            y: 1.0,
            z: 1.0
        }
    );
    Ok(())
}

#[test]
fn round_trip_preserves_every_field() -> Result<()> {
    let mut store = Store::new();
    let reading = store.register_struct(
        "Reading",
        &[
            ("taken_at", Store::TIMESTAMP_NS),
            ("sensor", Store::U16),
            ("value", Store::F32),
            ("valid", Store::BOOL),
        ],
    )?;

    let sample = Reading {
        taken_at: TimestampNs(1_700_000_000_123_456_789),
        sensor: 512,
        value: -3.25,
        valid: true,
    };
    store.insert(&sample, reading)?;

    let first: Reading = store.query_first(reading)?;
    assert_eq!(first, sample);
    Ok(())
}

#[test]
fn first_row_stays_first_as_rows_accumulate() -> Result<()> {
    let mut store = Store::new();
    let vec3 = register_vec3(&mut store)?;

    for i in 0..50 {
        store.insert(
            &Vec3 {
                x: i as f64,
                y: 0.0,
                z: 0.0,
            },
            vec3,
        )?;
        assert_eq!(store.row_count(vec3)?, i + 1);
    }

    let first: Vec3 = store.query_first(vec3)?;
    assert_eq!(first.x, 0.0);
    Ok(())
}

#[test]
fn empty_type_queries_to_zero_valued_result() -> Result<()> {
    let mut store = Store::new();
    let vec3 = register_vec3(&mut store)?;

    let first: Vec3 = store.query_first(vec3)?;
    assert_eq!(first, Vec3::default());
    assert_eq!(store.row_count(vec3)?, 0);
    Ok(())
}

#[test]
fn tables_of_different_types_are_isolated() -> Result<()> {
    let mut store = Store::new();
    let vec3 = register_vec3(&mut store)?;
    let reading = store.register_struct(
        "Reading",
        &[
            ("taken_at", Store::TIMESTAMP_NS),
            ("sensor", Store::U16),
            ("value", Store::F32),
            ("valid", Store::BOOL),
        ],
    )?;

    store.insert(
        &Vec3 {
            x: 2.0,
            y: 4.0,
            z: 8.0,
        },
        vec3,
    )?;
    assert_eq!(store.row_count(vec3)?, 1);
    assert_eq!(store.row_count(reading)?, 0);

    store.insert(&Reading::default(), reading)?;
    assert_eq!(store.row_count(vec3)?, 1);
    assert_eq!(store.row_count(reading)?, 1);

    let first: Vec3 = store.query_first(vec3)?;
    assert_eq!(
        first,
        Vec3 {
            x: 2.0,
            y: 4.0,
            z: 8.0
        }
    );
    Ok(())
}

#[test]
fn handles_remain_stable_across_later_registrations() -> Result<()> {
    let mut store = Store::new();
    let vec3 = register_vec3(&mut store)?;
    store.insert(
        &Vec3 {
            x: 5.0,
            y: 6.0,
            z: 7.0,
        },
        vec3,
    )?;

    for i in 0..20 {
        store.register_struct(&format!("Later{i}"), &[("v", Store::U64)])?;
    }

    let meta = store.registry().meta_of(vec3)?;
    assert_eq!(meta.name, "Vec3");
    assert_eq!(meta.kind, TypeKind::Struct);

    let first: Vec3 = store.query_first(vec3)?;
    assert_eq!(first.y, 6.0);
    Ok(())
}

#[test]
fn size_mismatch_fails_loudly_and_appends_nothing() -> Result<()> {
    let mut store = Store::new();
    let vec3 = register_vec3(&mut store)?;

    let err = store.insert(&1.0f64, vec3).unwrap_err();
    assert!(matches!(
        err,
        StoreError::SizeMismatch {
            registered: 24,
            value: 8,
            ..
        }
    ));
    assert_eq!(store.row_count(vec3)?, 0);
    Ok(())
}

#[test]
fn nested_struct_field_round_trips_as_opaque_blob() -> Result<()> {
    #[repr(C)]
    #[derive(Debug, Default, Clone, Copy, PartialEq)]
    struct Pose {
        position: Vec3,
        confident: bool,
    }
    record_struct!(Pose {
        position: Vec3,
        confident: bool,
    });

    let mut store = Store::new();
    let vec3 = register_vec3(&mut store)?;
    let pose = store.register_struct(
        "Pose",
        &[("position", vec3), ("confident", Store::BOOL)],
    )?;

    // Vec3 occupies its full 24 registered bytes as a single field
    let meta = store.registry().meta_of(pose)?;
    assert_eq!(meta.fields[0].offset, 0);
    assert_eq!(meta.fields[1].offset, 24);
    assert_eq!(meta.size, 32);

    let value = Pose {
        position: Vec3 {
            x: 0.5,
            y: -0.5,
            z: 9.75,
        },
        confident: true,
    };
    store.insert(&value, pose)?;

    let first: Pose = store.query_first(pose)?;
    assert_eq!(first, value);
    Ok(())
}
