// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(dead_code)]

use lin_geom::math::{Tolerance, Vec3};
use tracing_subscriber::EnvFilter;

pub const EPS: f32 = 1e-5;

/// Routes library `tracing` events to the test writer; `RUST_LOG` selects
/// what is shown.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}

pub fn assert_vec3_near(actual: Vec3, expected: [f32; 3]) {
    assert!(
        actual.approx_eq(&Vec3::from(expected), Tolerance::absolute(EPS)),
        "expected {expected:?}, got {actual}"
    );
}
