//! Seeded L-system road generator.
//!
//! A small stochastic rewrite system produces a turtle sentence; the turtle
//! then walks the grid in unit steps, laying road cells as it goes. The same
//! seed always yields the same network.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{DEFAULT_ROAD_SEED, ROAD_REWRITE_ITERATIONS, ROAD_SEGMENT_LENGTH};
use crate::direction::Direction;
use crate::roads::RoadNetwork;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Symbol {
    Forward,
    TurnLeft,
    TurnRight,
    Push,
    Pop,
}

#[derive(Debug, Clone)]
pub struct RoadGenConfig {
    pub seed: u64,
    pub iterations: u32,
    pub segment_length: u32,
}

impl Default for RoadGenConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_ROAD_SEED,
            iterations: ROAD_REWRITE_ITERATIONS,
            segment_length: ROAD_SEGMENT_LENGTH,
        }
    }
}

/// One rewrite pass. Every `Forward` expands through a randomly chosen
/// production; the bracket and turn symbols copy through unchanged.
fn rewrite(sentence: &[Symbol], rng: &mut ChaCha8Rng) -> Vec<Symbol> {
    use Symbol::*;
    let mut out = Vec::with_capacity(sentence.len() * 3);
    for &sym in sentence {
        if sym != Forward {
            out.push(sym);
            continue;
        }
        match rng.gen_range(0..4) {
            0 => out.extend([Forward, TurnLeft, Forward]),
            1 => out.extend([Forward, TurnRight, Forward]),
            2 => out.extend([Forward, Push, TurnLeft, Forward, Pop, Forward]),
            _ => out.extend([Forward, Push, TurnRight, Forward, Pop, Forward]),
        }
    }
    out
}

fn turn_left(dir: Direction) -> Direction {
    match dir {
        Direction::Up => Direction::Left,
        Direction::Left => Direction::Down,
        Direction::Down => Direction::Right,
        Direction::Right => Direction::Up,
    }
}

fn turn_right(dir: Direction) -> Direction {
    match dir {
        Direction::Up => Direction::Right,
        Direction::Right => Direction::Down,
        Direction::Down => Direction::Left,
        Direction::Left => Direction::Up,
    }
}

/// Grows a road network into `roads` starting from the origin. Revisited
/// cells are deduplicated by `place_road`, so crossings are fine.
pub fn generate_roads(config: &RoadGenConfig, roads: &mut RoadNetwork) {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    let mut sentence = vec![Symbol::Forward];
    for _ in 0..config.iterations {
        sentence = rewrite(&sentence, &mut rng);
    }

    let mut pos = IVec3::ZERO;
    let mut dir = Direction::Up;
    let mut stack: Vec<(IVec3, Direction)> = Vec::new();
    roads.place_road(pos);

    for sym in sentence {
        match sym {
            Symbol::Forward => {
                for _ in 0..config.segment_length {
                    pos += dir.offset();
                    roads.place_road(pos);
                }
            }
            Symbol::TurnLeft => dir = turn_left(dir),
            Symbol::TurnRight => dir = turn_right(dir),
            Symbol::Push => stack.push((pos, dir)),
            Symbol::Pop => {
                if let Some((saved_pos, saved_dir)) = stack.pop() {
                    pos = saved_pos;
                    dir = saved_dir;
                }
            }
        }
    }
}
