//! Boundary slot classification.

use crate::zone::ZoneId;

bitflags::bitflags! {
    /// Passability classification of a boundary slot.
    ///
    /// The empty set is the open classification ([`EdgeKind::NONE`]). Bits
    /// other than [`EdgeKind::WALL`] are free for application use and are
    /// all retained.
    ///
    /// A value of this type also serves as a query mask: the slots a query
    /// may cross are exactly those whose classification is a subset of the
    /// mask (see [`EdgeKind::permits`]).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
    pub struct EdgeKind: u32 {
        /// Impassable unless a query mask explicitly includes it.
        const WALL = 1 << 0;

        const _ = !0;
    }
}

impl EdgeKind {
    /// Open boundary.
    pub const NONE: Self = Self::empty();

    /// Whether a slot classified as `kind` may be crossed under this mask.
    #[inline]
    pub const fn permits(self, kind: EdgeKind) -> bool {
        self.contains(kind)
    }
}

impl Default for EdgeKind {
    fn default() -> Self {
        Self::NONE
    }
}

/// One unit-length segment of a zone's perimeter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundarySlot {
    /// Passability of this segment.
    pub kind: EdgeKind,
    /// Zone on the far side, `None` at the edge of the mesh.
    pub neighbor: Option<ZoneId>,
}
