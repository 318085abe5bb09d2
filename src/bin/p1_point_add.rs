//! Pattern 1: Value Structs and Pure Methods
//! Example: Point addition through a value receiver
//!
//! Run with: cargo run --bin p1_point_add

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// A two-field integer coordinate. Copying a Point copies its fields;
/// no assignment or call ever produces shared mutable state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Add for Point {
    type Output = Point;

    // Value receiver: both operands arrive by copy and are never mutated.
    fn add(self, other: Point) -> Point {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

fn main() {
    // Direct literal construction
    let a = Point { x: 1, y: 2 };

    // Heap allocation defaulted to zero, fields assigned through the box
    let mut b = Box::new(Point::default());
    b.x = 4;
    b.y = 3;

    // *b copies the pointee out of the box; the box itself stays owned by b
    println!("{:?}", a + *b);
}
