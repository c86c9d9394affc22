use crate::node::NodeId;

/// Which child slot of a node a descent continues into.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// Where a descent from the root stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Search {
    /// The tree has no root so there was nothing to compare against.
    Empty,
    /// A node holding an equal value was found.
    Found,
    /// No equal value exists. The value belongs in the empty `side` slot of `parent`.
    Vacant { parent: NodeId, side: Side },
}
