// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use proptest::prelude::*;

use lin_geom::math::{Mat4, Tolerance, Vec3};
use lin_geom::{Aabb3, Line3, Plane};

fn coord() -> impl Strategy<Value = f32> {
    -50.0f32..50.0
}

fn point() -> impl Strategy<Value = Vec3> {
    prop::array::uniform3(coord()).prop_map(Vec3::from)
}

fn aabb() -> impl Strategy<Value = Aabb3> {
    (point(), prop::array::uniform3(0.0f32..20.0))
        .prop_map(|(c, he)| Aabb3::from_center_half_extents(c, Vec3::from(he)))
}

fn plane() -> impl Strategy<Value = Plane> {
    (prop::array::uniform3(-1.0f32..1.0), -40.0f32..40.0)
        .prop_map(|(n, d)| Plane::new(Vec3::from(n), d))
}

proptest! {
    #[test]
    fn aabb_overlap_is_symmetric(a in aabb(), b in aabb()) {
        prop_assert_eq!(a.intersects_aabb(&b), b.intersects_aabb(&a));
    }

    #[test]
    fn union_contains_both_boxes(a in aabb(), b in aabb()) {
        let u = a.union(&b);
        for c in a.corners().iter().chain(b.corners().iter()) {
            prop_assert!(u.contains_point(c));
        }
        prop_assert!(u.intersects_aabb(&a) && u.intersects_aabb(&b));
    }

    #[test]
    fn plane_box_test_agrees_with_corner_tests(p in plane(), b in aabb()) {
        let corners = b.corners();
        let boxed = p.intersect_bounding_box(&b.min(), &b.max());
        if corners.iter().all(|c| p.is_point_in_front(c)) {
            prop_assert!(boxed);
        }
        if corners.iter().all(|c| p.signed_distance(c) < 0.0) {
            prop_assert!(!boxed);
        }
        // The positive vertex is itself a corner.
        if boxed {
            prop_assert!(corners.iter().any(|c| p.signed_distance(c) >= 0.0));
        }
    }

    #[test]
    fn segment_starting_inside_hits_box(b in aabb(), t in prop::array::uniform3(0.0f32..=1.0), far in point()) {
        let inside = Vec3::from_array(core::array::from_fn(|i| b.min()[i] + t[i] * b.size()[i]));
        prop_assume!(b.contains_point(&inside));
        prop_assert!(Line3::new(inside, far).intersects_aabb(&b));
    }

    #[test]
    fn translated_box_keeps_its_size(b in aabb(), t in point()) {
        let moved = b.transformed(&Mat4::translation(t.x(), t.y(), t.z()));
        let tol = Tolerance::absolute(1e-3);
        prop_assert!(moved.size().approx_eq(&b.size(), tol));
        prop_assert!(moved.center().approx_eq(&b.center().add(&t), tol));
    }
}
