// SPDX-License-Identifier: MIT OR Apache-2.0
//! Random graph instances for stress and demo use.

use crate::graph::{letter_label, Graph, MIN_SEPARATION};
use crate::point::Point;
use rand::Rng;

/// Build a fully populated random graph.
///
/// Vertices are placed in index order with sequential letter labels, each
/// position sampled uniformly inside `width x height` until it differs from
/// every placed vertex by at least [`MIN_SEPARATION`] units on at least one
/// axis. A candidate is only rejected when BOTH axes are within the
/// separation; the spacing rule is deliberately loose.
///
/// Edges: every ordered pair `(i, j)` with `i != j` rolls `0..=99` and is
/// connected when the roll exceeds `100 - density`. Both orders of a pair
/// roll independently and [`Graph::add_edge`] writes symmetrically, so the
/// effective undirected edge probability is higher than `density` percent
/// reads; that quirk is part of the behavior, not corrected here.
///
/// The caller owns and seeds the random source. `width` and `height` must
/// be positive, and the canvas must be large enough to hold `capacity`
/// vertices at the required spacing, or placement never terminates.
pub fn random_graph(
    capacity: usize,
    density: u8,
    width: i32,
    height: i32,
    rng: &mut impl Rng,
) -> Graph {
    let mut graph = Graph::new(capacity);
    let mut placed: Vec<Point> = Vec::with_capacity(capacity);

    for index in 0..capacity {
        let position = loop {
            let candidate = Point::new(rng.random_range(0..width), rng.random_range(0..height));
            let crowded = placed.iter().any(|p| {
                (p.x - candidate.x).abs() < MIN_SEPARATION
                    && (p.y - candidate.y).abs() < MIN_SEPARATION
            });
            if !crowded {
                break candidate;
            }
        };
        placed.push(position);
        graph.add_vertex(letter_label(index), position);
    }

    for i in 0..capacity {
        for j in 0..capacity {
            if i == j {
                continue;
            }
            let roll = rng.random_range(0..100);
            if roll > 100 - i32::from(density) {
                graph.add_edge(i, j);
            }
        }
    }

    tracing::debug!(capacity, density, "random graph generated");
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_graph_is_full() {
        let mut rng = StdRng::seed_from_u64(0xFACE_0001);
        let g = random_graph(20, 10, 1200, 960, &mut rng);
        assert_eq!(g.vertex_count(), 20);
        assert_eq!(g.label(0), Some('A'));
        assert_eq!(g.label(19), Some('T'));
    }

    #[test]
    fn test_separation_invariant() {
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(0xFACE_0100 + seed);
            let g = random_graph(30, 25, 1200, 960, &mut rng);
            for i in 0..g.vertex_count() {
                for j in 0..i {
                    let a = g.position(i).unwrap();
                    let b = g.position(j).unwrap();
                    assert!(
                        (a.x - b.x).abs() >= MIN_SEPARATION
                            || (a.y - b.y).abs() >= MIN_SEPARATION,
                        "vertices {i} and {j} too close: {a:?} vs {b:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_positions_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(0xFACE_0002);
        let g = random_graph(25, 50, 300, 200, &mut rng);
        for i in 0..g.vertex_count() {
            let p = g.position(i).unwrap();
            assert!((0..300).contains(&p.x));
            assert!((0..200).contains(&p.y));
        }
    }

    #[test]
    fn test_zero_density_has_no_edges() {
        let mut rng = StdRng::seed_from_u64(0xFACE_0003);
        let g = random_graph(10, 0, 1200, 960, &mut rng);
        for i in 0..10 {
            for j in 0..10 {
                assert_eq!(g.weight(i, j), 0);
            }
        }
    }

    #[test]
    fn test_matrix_stays_symmetric() {
        let mut rng = StdRng::seed_from_u64(0xFACE_0004);
        let g = random_graph(15, 40, 1200, 960, &mut rng);
        for i in 0..15 {
            for j in 0..15 {
                assert_eq!(g.weight(i, j), g.weight(j, i));
            }
        }
    }
}
