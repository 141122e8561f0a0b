use quickcheck::{Arbitrary, Gen};

use crate::COLUMNS;

/// Column choices for a whole game, including some that are out of range.
#[derive(Clone, Debug)]
pub struct MoveSequence(pub Vec<i32>);

impl Arbitrary for MoveSequence {
    fn arbitrary(g: &mut Gen) -> Self {
        // Long enough to fill the board and then some
        let len = usize::arbitrary(g) % 60;
        let moves = (0..len)
            .map(|_| {
                // Mostly valid columns, with one index on either side of the board
                let column = (u8::arbitrary(g) % (COLUMNS as u8 + 2)) as i32;
                column - 1
            })
            .collect();
        MoveSequence(moves)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(MoveSequence))
    }
}
