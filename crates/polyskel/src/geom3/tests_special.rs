//! Smoke tests for the special skeleton constructors.
//!
//! Only structural invariants are asserted here (counts, symmetry, degrees);
//! face reconstruction on these shapes is covered in `boundary::tests`.

use super::special;
use super::Skeleton;

fn assert_valid(s: &Skeleton) {
    // Re-validate through the public constructor.
    Skeleton::new(s.positions().to_vec(), s.graph().to_vec()).expect("valid skeleton");
}

#[test]
fn platonic_counts() {
    let t = special::tetrahedron();
    assert_valid(&t);
    assert_eq!((t.vertex_count(), t.edge_count()), (4, 6));

    let c = special::cube(1.0);
    assert_valid(&c);
    assert_eq!((c.vertex_count(), c.edge_count()), (8, 12));
    assert!(c.graph().iter().all(|n| n.len() == 3));

    let o = special::octahedron(1.0);
    assert_valid(&o);
    assert_eq!((o.vertex_count(), o.edge_count()), (6, 12));
    assert!(o.graph().iter().all(|n| n.len() == 4));
}

#[test]
fn families_counts() {
    for n in 3..9 {
        let p = special::prism(n, 1.0, 0.5).unwrap();
        assert_valid(&p);
        assert_eq!((p.vertex_count(), p.edge_count()), (2 * n, 3 * n));

        let y = special::pyramid(n, 1.0, 1.0).unwrap();
        assert_valid(&y);
        assert_eq!((y.vertex_count(), y.edge_count()), (n + 1, 2 * n));

        let b = special::bipyramid(n, 1.0, 1.0).unwrap();
        assert_valid(&b);
        assert_eq!((b.vertex_count(), b.edge_count()), (n + 2, 3 * n));
    }
}

#[test]
fn families_reject_too_few_sides() {
    assert!(special::prism(2, 1.0, 1.0).is_err());
    assert!(special::pyramid(1, 1.0, 1.0).is_err());
    assert!(special::bipyramid(0, 1.0, 1.0).is_err());
}

#[test]
fn jitter_is_seeded_and_bounded() {
    let c = special::cube(1.0);
    let a = special::jitter(&c, 1e-3, 7);
    let b = special::jitter(&c, 1e-3, 7);
    assert_eq!(a.positions(), b.positions());
    for (p, q) in c.positions().iter().zip(a.positions()) {
        assert!((p - q).amax() <= 1e-3);
    }
    assert_eq!(a.graph(), c.graph());
}
