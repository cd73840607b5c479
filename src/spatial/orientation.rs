//! Tile sides and the rotation/mirror transforms applied to a tile's edge layout
//!
//! Side lists run clockwise around the tile: North west-to-east, East
//! north-to-south, South east-to-west and West south-to-north. Under that
//! convention a clockwise quarter turn shifts the four lists one side
//! clockwise, and a mirror reverses every list and swaps East with West.

use std::fmt;

use crate::spatial::edges::EdgeKind;

/// One side of a tile or cell, in the fixed North, East, South, West order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    /// Towards row 0
    North,
    /// Towards the last column
    East,
    /// Towards the last row
    South,
    /// Towards column 0
    West,
}

impl Side {
    /// All sides in side-list order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Position of this side in side-list order
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The side facing this one across a shared border
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// The cell across this side of `position` (`[row, col]`)
    ///
    /// Returns `None` when the step would leave the non-negative quadrant;
    /// callers check the far edges against their own bounds.
    pub fn step(self, position: [usize; 2]) -> Option<[usize; 2]> {
        let [row, col] = position;
        match self {
            Self::North => row.checked_sub(1).map(|r| [r, col]),
            Self::East => col.checked_add(1).map(|c| [row, c]),
            Self::South => row.checked_add(1).map(|r| [r, col]),
            Self::West => col.checked_sub(1).map(|c| [row, c]),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(name)
    }
}

/// A transform of a tile's edge layout: an optional left-right mirror
/// followed by a clockwise rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    /// As declared
    Identity,
    /// Quarter turn clockwise
    Rotate90,
    /// Half turn
    Rotate180,
    /// Three quarter turns clockwise
    Rotate270,
    /// Left-right mirror
    Mirror,
    /// Mirror, then a quarter turn clockwise
    MirrorRotate90,
    /// Mirror, then a half turn
    MirrorRotate180,
    /// Mirror, then three quarter turns clockwise
    MirrorRotate270,
}

impl Orientation {
    /// Number of distinct orientations
    pub const COUNT: usize = 8;

    /// Every orientation, in candidate enumeration order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Identity,
        Self::Rotate90,
        Self::Rotate180,
        Self::Rotate270,
        Self::Mirror,
        Self::MirrorRotate90,
        Self::MirrorRotate180,
        Self::MirrorRotate270,
    ];

    /// The four unmirrored rotations
    pub const ROTATIONS: [Self; 4] = [
        Self::Identity,
        Self::Rotate90,
        Self::Rotate180,
        Self::Rotate270,
    ];

    /// Index into per-orientation tables
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Quarter turns clockwise applied after the optional mirror
    pub const fn rotation(self) -> usize {
        self.index() % 4
    }

    /// Whether the layout is mirrored before rotating
    pub const fn is_mirrored(self) -> bool {
        self.index() >= 4
    }

    /// Footprint `(width, height)` of a `width x height` tile under this transform
    pub const fn footprint(self, width: usize, height: usize) -> (usize, usize) {
        if self.rotation() % 2 == 1 {
            (height, width)
        } else {
            (width, height)
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Identity => "identity",
            Self::Rotate90 => "rot90",
            Self::Rotate180 => "rot180",
            Self::Rotate270 => "rot270",
            Self::Mirror => "mirror",
            Self::MirrorRotate90 => "mirror+rot90",
            Self::MirrorRotate180 => "mirror+rot180",
            Self::MirrorRotate270 => "mirror+rot270",
        };
        f.write_str(name)
    }
}

/// Edge kinds on every side of a tile under one orientation
///
/// Holds the oriented footprint alongside the lists so that lookups by cell
/// offset never need the original orientation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrientedSides {
    width: usize,
    height: usize,
    sides: [Vec<EdgeKind>; 4],
}

impl OrientedSides {
    /// Wrap side lists for a `width x height` footprint without validating them
    pub(crate) const fn from_parts(width: usize, height: usize, sides: [Vec<EdgeKind>; 4]) -> Self {
        Self {
            width,
            height,
            sides,
        }
    }

    /// Apply `orientation` to a base layout
    #[must_use]
    pub fn derive(&self, orientation: Orientation) -> Self {
        let mut sides = self.sides.clone();

        if orientation.is_mirrored() {
            for list in &mut sides {
                list.reverse();
            }
            sides.swap(Side::East.index(), Side::West.index());
        }

        // One clockwise quarter turn moves West's list to North
        sides.rotate_right(orientation.rotation());

        let (width, height) = orientation.footprint(self.width, self.height);
        Self {
            width,
            height,
            sides,
        }
    }

    /// Width of the oriented footprint in grid units
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height of the oriented footprint in grid units
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of edges the footprint carries on `side`
    pub const fn expected_len(&self, side: Side) -> usize {
        match side {
            Side::North | Side::South => self.width,
            Side::East | Side::West => self.height,
        }
    }

    /// The clockwise edge list of `side`
    pub fn side(&self, side: Side) -> &[EdgeKind] {
        self.sides
            .get(side.index())
            .map_or(&[][..], Vec::as_slice)
    }

    /// First side whose list length disagrees with the footprint, as
    /// `(side, expected, found)`
    pub fn mismatched_side(&self) -> Option<(Side, usize, usize)> {
        Side::ALL.into_iter().find_map(|side| {
            let expected = self.expected_len(side);
            let found = self.side(side).len();
            (expected != found).then_some((side, expected, found))
        })
    }

    /// Edge presented on `side` by the cell `offset` units along it
    ///
    /// Offsets count west-to-east on North and South and north-to-south on
    /// East and West, matching grid columns and rows.
    pub fn edge_at(&self, side: Side, offset: usize) -> Option<EdgeKind> {
        let len = self.expected_len(side);
        if offset >= len {
            return None;
        }
        let index = match side {
            Side::North | Side::East => offset,
            Side::South | Side::West => len - 1 - offset,
        };
        self.side(side).get(index).copied()
    }

    /// All edge kinds mentioned on any side
    pub fn edges(&self) -> impl Iterator<Item = EdgeKind> + '_ {
        self.sides.iter().flatten().copied()
    }
}
