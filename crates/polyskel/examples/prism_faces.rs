//! Reconstruct the faces of a few special polytopes and print counts.
//!
//! Usage:
//!   cargo run -p polyskel --example prism_faces -- 6
//!
//! Prints (V, E, F) and the Euler characteristic per shape.

use polyskel::prelude::*;

fn main() {
    let n: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(6);
    let shapes = [
        ("tetrahedron", Ok(special::tetrahedron())),
        ("cube", Ok(special::cube(1.0))),
        ("octahedron", Ok(special::octahedron(1.0))),
        ("prism", special::prism(n, 1.0, 0.5)),
        ("pyramid", special::pyramid(n, 1.0, 1.0)),
        ("bipyramid", special::bipyramid(n, 1.0, 1.0)),
    ];
    let cfg = ReconCfg::default();
    for (name, skel) in shapes {
        let skel = match skel {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{name}: {e}");
                continue;
            }
        };
        match reconstruct_skeleton(&skel, &cfg) {
            Ok(rec) => println!(
                "{name:<12} V={:<4} E={:<4} F={:<4} chi={} failures={}",
                skel.vertex_count(),
                skel.edge_count(),
                rec.faces.len(),
                rec.euler_characteristic(&skel),
                rec.report.failures.len()
            ),
            Err(e) => eprintln!("{name}: {e}"),
        }
    }
}
