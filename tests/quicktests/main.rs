//! Property tests comparing `OrderedTree` against `BTreeSet`.

mod tree;

use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the T into the data structure
    Insert(T),
    /// Overwrite a second tree with a copy of this one
    CloneFrom,
    /// Insert the T into the copy only
    InsertIntoCopy(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::CloneFrom,
            2 => Op::InsertIntoCopy(T::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
