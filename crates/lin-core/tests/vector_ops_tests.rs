// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f32::consts::{FRAC_1_SQRT_2, FRAC_PI_2};

use lin_core::math::{Tolerance, Vec2, Vec3, Vec4};
use lin_core::{DomainError, ShapeError};

mod common;
use common::{assert_slice_eq, EPS};

#[test]
fn add_sub_mul_ops_work() {
    let a = Vec3::new(1.0, -2.0, 0.5);
    let b = Vec3::new(-3.0, 4.0, 1.5);
    assert_eq!((a + b).to_array(), [-2.0, 2.0, 2.0]);
    assert_eq!((a - b).to_array(), [4.0, -6.0, -1.0]);
    assert_eq!((a * 2.0).to_array(), [2.0, -4.0, 1.0]);
    assert_eq!((2.0 * a).to_array(), [2.0, -4.0, 1.0]);
    assert_eq!((a * b).to_array(), [-3.0, -8.0, 0.75]);
    assert_eq!((b / 2.0).to_array(), [-1.5, 2.0, 0.75]);
    assert_eq!((-a).to_array(), [-1.0, 2.0, -0.5]);
}

#[test]
fn method_forms_leave_receiver_untouched() {
    let a = Vec2::new(1.0, 2.0);
    let b = a.add_scalar(1.0).scale(3.0).sub_scalar(2.0).div_scalar(2.0);
    assert_eq!(b.to_array(), [2.0, 3.5]);
    assert_eq!(a.to_array(), [1.0, 2.0]);
    assert_eq!(a.div_elementwise(&Vec2::new(2.0, 4.0)).to_array(), [0.5, 0.5]);
}

#[test]
fn add_assign_sub_assign_mul_assign_work() {
    let mut v = Vec3::new(1.0, 2.0, 3.0);
    v += Vec3::new(-1.0, 1.0, 0.0);
    assert_eq!(v.to_array(), [0.0, 3.0, 3.0]);
    v -= Vec3::new(0.0, 1.0, 1.0);
    assert_eq!(v.to_array(), [0.0, 2.0, 2.0]);
    v *= 0.5;
    assert_eq!(v.to_array(), [0.0, 1.0, 1.0]);
    v /= 2.0;
    assert_eq!(v.to_array(), [0.0, 0.5, 0.5]);
    v[0] = 7.0;
    assert_eq!(v.x(), 7.0);
}

#[test]
fn cross_products_per_dimension() {
    assert_eq!(Vec3::new(1.0, 0.0, 0.0).cross(&Vec3::new(0.0, 1.0, 0.0)), Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(Vec3::UNIT_Y.cross(&Vec3::UNIT_X), Vec3::new(0.0, 0.0, -1.0));
    assert_eq!(Vec2::UNIT_X.cross(&Vec2::UNIT_Y), 1.0);
    assert_eq!(Vec2::UNIT_Y.cross(&Vec2::UNIT_X), -1.0);
    let a = Vec4::new(1.0, 0.0, 0.0, 9.0);
    let b = Vec4::new(0.0, 1.0, 0.0, -3.0);
    assert_eq!(a.cross(&b).to_array(), [0.0, 0.0, 1.0, 0.0]);
}

#[test]
fn dot_and_lengths() {
    let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(a.dot(&Vec4::ONE), 10.0);
    assert_eq!(a.length_squared(), 30.0);
    assert_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
    assert_eq!(Vec3::new(1.0, 1.0, 1.0).distance(&Vec3::new(1.0, 4.0, 5.0)), 5.0);
}

#[test]
fn normalize_scales_to_unit_and_skips_zero() {
    let n = Vec2::new(3.0, 4.0).normalize();
    assert_slice_eq(n.as_slice(), &[0.6, 0.8], EPS);
    assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
    let tiny = Vec3::new(1e-20, 0.0, 0.0).normalize();
    assert!(tiny.is_finite());
}

#[test]
fn lerp_moves_toward_target() {
    let a = Vec3::ZERO;
    let b = Vec3::new(10.0, -10.0, 4.0);
    assert_eq!(a.lerp(&b, 0.25).to_array(), [2.5, -2.5, 1.0]);
    assert_eq!(a.lerp(&b, 0.0), a);
    assert_eq!(a.lerp(&b, 1.0), b);
}

#[test]
fn slerp_follows_the_arc_and_falls_back_when_collinear() {
    let mid = Vec3::UNIT_X.slerp(&Vec3::UNIT_Y, 0.5);
    assert_slice_eq(mid.as_slice(), &[FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0], EPS);
    assert!((mid.length() - 1.0).abs() < EPS);

    let same = Vec3::UNIT_Z.slerp(&Vec3::UNIT_Z, 0.3);
    assert_slice_eq(same.as_slice(), &[0.0, 0.0, 1.0], EPS);
    assert!(same.is_finite());
}

#[test]
fn angle_to_rejects_zero_length() {
    let angle = Vec3::UNIT_X.angle_to(&Vec3::UNIT_Y);
    assert!(matches!(angle, Ok(a) if (a - FRAC_PI_2).abs() < EPS));
    assert_eq!(Vec3::UNIT_X.angle_to(&Vec3::ZERO), Err(DomainError::ZeroLength));
    assert_eq!(Vec2::ZERO.angle_to(&Vec2::UNIT_X), Err(DomainError::ZeroLength));
    // Parallel inputs stay in the acos domain.
    let parallel = Vec3::new(2.0, 2.0, 2.0).angle_to(&Vec3::new(1.0, 1.0, 1.0));
    assert!(matches!(parallel, Ok(a) if a.abs() < 1e-3));
}

#[test]
fn project_and_reflect() {
    let p = Vec3::new(2.0, 3.0, 0.0).project_onto(&Vec3::new(4.0, 0.0, 0.0));
    assert_eq!(p.to_array(), [2.0, 0.0, 0.0]);
    let r = Vec3::new(1.0, -1.0, 0.0).reflect_across(&Vec3::UNIT_Y);
    assert_eq!(r.to_array(), [1.0, 1.0, 0.0]);
}

#[test]
fn swizzle_reorders_and_duplicates() {
    let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(v.swizzle(&[3, 2, 1, 0]).map(Vec4::to_array), Ok([4.0, 3.0, 2.0, 1.0]));
    assert_eq!(v.swizzle(&[0, 0, 0, 0]).map(Vec4::to_array), Ok([1.0; 4]));
    assert_eq!(
        v.swizzle(&[0, 1, 2]),
        Err(ShapeError::SwizzleArity { expected: 4, actual: 3 })
    );
}

#[test]
fn round_sends_halves_toward_positive_infinity() {
    let halves = Vec3::new(-1.5, -0.5, 2.5).round();
    assert_eq!(halves.to_array(), [-1.0, 0.0, 3.0]);
    // Largest f32 below one half.
    let below_half = 0.5 - f32::EPSILON / 4.0;
    let near = Vec4::new(-2.51, below_half, -0.4, 7.0).round();
    assert_eq!(near.to_array(), [-3.0, 0.0, 0.0, 7.0]);
}

#[test]
fn vec4_setters_replace_one_component() {
    let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(v.with_x(9.0).to_array(), [9.0, 2.0, 3.0, 4.0]);
    assert_eq!(v.with_y(9.0).to_array(), [1.0, 9.0, 3.0, 4.0]);
    assert_eq!(v.with_z(9.0).to_array(), [1.0, 2.0, 9.0, 4.0]);
    assert_eq!(v.with_w(9.0).to_array(), [1.0, 2.0, 3.0, 9.0]);
}

#[test]
fn elementwise_unary_ops() {
    let v = Vec3::new(-1.5, 0.4, 1.5);
    assert_eq!(v.abs().to_array(), [1.5, 0.4, 1.5]);
    assert_eq!(v.negate().to_array(), [1.5, -0.4, -1.5]);
    assert_eq!(v.round().to_array(), [-1.0, 0.0, 2.0]);
    let other = Vec3::new(0.0, 1.0, 1.0);
    assert_eq!(v.min(&other).to_array(), [-1.5, 0.4, 1.0]);
    assert_eq!(v.max(&other).to_array(), [0.0, 1.0, 1.5]);
}

#[test]
fn homogeneous_conversions() {
    let p = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(p.to_homogeneous().to_array(), [1.0, 2.0, 3.0, 1.0]);
    assert_eq!(Vec3::from_homogeneous(Vec4::new(2.0, 4.0, 6.0, 2.0)), p);
    assert_eq!(Vec3::from_homogeneous(Vec4::new(2.0, 4.0, 6.0, 0.0)).to_array(), [2.0, 4.0, 6.0]);
    assert_eq!(Vec2::from_homogeneous(Vec3::new(3.0, 6.0, 3.0)).to_array(), [1.0, 2.0]);
    assert_eq!(p.extend(0.0).truncate(), p);
    assert_eq!(p.truncate().to_array(), [1.0, 2.0]);
}

#[test]
fn vec4_planar_rotations_keep_w() {
    let v = Vec4::new(1.0, 0.0, 0.0, 5.0);
    assert_slice_eq(v.rotate_z(FRAC_PI_2).as_slice(), &[0.0, 1.0, 0.0, 5.0], EPS);
    assert_slice_eq(v.rotate_y(FRAC_PI_2).as_slice(), &[0.0, 0.0, -1.0, 5.0], EPS);
    let up = Vec4::new(0.0, 1.0, 0.0, 1.0);
    assert_slice_eq(up.rotate_x(FRAC_PI_2).as_slice(), &[0.0, 0.0, 1.0, 1.0], EPS);
    assert_eq!(v.translate(&Vec4::new(1.0, 2.0, 3.0, 0.0)).to_array(), [2.0, 2.0, 3.0, 5.0]);
}

#[test]
fn slice_conversions_check_length() {
    let ok = Vec3::try_from(&[1.0_f32, 2.0, 3.0][..]);
    assert_eq!(ok, Ok(Vec3::new(1.0, 2.0, 3.0)));
    let err = Vec2::try_from(&[1.0_f32, 2.0, 3.0][..]);
    assert_eq!(err, Err(ShapeError::LengthMismatch { expected: 2, actual: 3 }));
    let arr: [f32; 3] = Vec3::splat(2.0).into();
    assert_eq!(arr, [2.0; 3]);
}

#[test]
fn approx_eq_respects_tolerance() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(1.0005, 2.0, 3.0);
    assert!(a.approx_eq(&b, Tolerance::absolute(1e-3)));
    assert!(!a.approx_eq(&b, Tolerance::default()));
}

#[test]
fn display_lists_components() {
    assert_eq!(Vec3::new(1.0, 2.0, 3.0).to_string(), "Vec3(1, 2, 3)");
    assert_eq!(format!("{:.2}", Vec4::UNIT_W), "Vec4(0.00, 0.00, 0.00, 1.00)");
}
