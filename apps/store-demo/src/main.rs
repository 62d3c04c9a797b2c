//! Demonstration entry point: build a schema, store a value, read it back.

use std::fmt;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use struct_store_core::record_struct;
use struct_store_core::{Store, StoreConfig};

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Vec3 {
    x: f64,
    y: f64,
    z: f64,
}

record_struct!(Vec3 { x: f64, y: f64, z: f64 });

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec3({}, {}, {})", self.x, self.y, self.z)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut store = Store::with_config(StoreConfig {
        expected_types: 1,
        ..Default::default()
    });

    let vec3 = store.register_struct(
        "Vec3",
        &[("x", Store::F64), ("y", Store::F64), ("z", Store::F64)],
    )?;
    tracing::debug!(handle = vec3.raw(), "Vec3 registered");

    store.insert(
        &Vec3 {
            x: 1.0,
            y: 1.0,
            z: 1.0,
        },
        vec3,
    )?;

    let first: Vec3 = store.query_first(vec3)?;
    println!("{first}");

    Ok(())
}
