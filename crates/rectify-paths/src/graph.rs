//! The zone arena and its adjacency bookkeeping.

use std::ops::Index;

use rectify_core::{BoundingBox, Direction, Point};

use crate::error::{MeshError, Result};
use crate::zone::{Zone, ZoneId};

/// A set of non-overlapping zones partitioning a grid, linked through
/// their boundary slots.
///
/// Zones live in an arena and refer to each other by [`ZoneId`]. Ids of
/// zones superseded by a split are recycled by later splits, but only after
/// every slot that referenced them has been relinked.
#[derive(Clone, Debug, Default)]
pub struct ZoneGraph {
    zones: Vec<Option<Zone>>,
    free: Vec<ZoneId>,
    revision: u64,
}

impl ZoneGraph {
    /// An empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// A graph made of one open zone covering `bounds`.
    pub fn filled(bounds: BoundingBox, path_group: i32) -> Self {
        let mut graph = Self::new();
        graph.insert(Zone::new(bounds, path_group));
        graph
    }

    /// Build a graph from caller-supplied zones and link every adjacency.
    ///
    /// Slot classifications already set on the zones are kept; neighbor
    /// references are recomputed.
    pub fn from_zones(zones: Vec<Zone>) -> Result<Self> {
        for (i, a) in zones.iter().enumerate() {
            for (j, b) in zones.iter().enumerate().skip(i + 1) {
                if a.bounds().overlaps(b.bounds()) {
                    return Err(MeshError::Overlap {
                        a: ZoneId(i as u32),
                        b: ZoneId(j as u32),
                    });
                }
            }
        }
        Ok(Self::from_disjoint(zones))
    }

    pub(crate) fn from_disjoint(zones: Vec<Zone>) -> Self {
        let mut graph = Self::new();
        let ids: Vec<ZoneId> = zones.into_iter().map(|z| graph.insert(z)).collect();
        graph.link(&ids);
        graph
    }

    /// Edit counter, bumped once per successful cell or edge replacement.
    ///
    /// Consumers caching anything derived from the graph compare this value
    /// to detect staleness.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[inline]
    pub(crate) fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Number of live zones.
    pub fn len(&self) -> usize {
        self.zones.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Arena size, an upper bound for [`ZoneId::index`].
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.zones.len()
    }

    /// The zone with the given id, if it is live.
    #[inline]
    pub fn zone(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.get(id.index()).and_then(Option::as_ref)
    }

    /// Live zone by id. Panics on a vacant id, like slice indexing.
    #[inline]
    pub(crate) fn live_mut(&mut self, id: ZoneId) -> &mut Zone {
        match self.zones.get_mut(id.index()).and_then(Option::as_mut) {
            Some(z) => z,
            None => panic!("{id} is vacant"),
        }
    }

    /// Iterate over all live zones in id order.
    pub fn zones(&self) -> impl Iterator<Item = (ZoneId, &Zone)> + '_ {
        self.zones
            .iter()
            .enumerate()
            .filter_map(|(i, z)| z.as_ref().map(|z| (ZoneId(i as u32), z)))
    }

    /// Smallest box containing every zone.
    pub fn bounds(&self) -> BoundingBox {
        self.zones()
            .fold(BoundingBox::default(), |acc, (_, z)| acc.union(z.bounds()))
    }

    /// The zone containing `p`, if any.
    pub fn find_zone(&self, p: Point) -> Option<ZoneId> {
        self.zones().find(|(_, z)| z.contains(p)).map(|(id, _)| id)
    }

    /// The zone containing `p`.
    pub fn zone_at(&self, p: Point) -> Result<ZoneId> {
        self.find_zone(p).ok_or(MeshError::OutOfBounds { pos: p })
    }

    /// Bottom-left and top-right corners of the zone containing `p`.
    pub fn zone_bounds(&self, p: Point) -> Option<(Point, Point)> {
        let id = self.find_zone(p)?;
        Some(self[id].bounds().corners())
    }

    pub(crate) fn insert(&mut self, zone: Zone) -> ZoneId {
        match self.free.pop() {
            Some(id) => {
                self.zones[id.index()] = Some(zone);
                id
            }
            None => {
                self.zones.push(Some(zone));
                ZoneId((self.zones.len() - 1) as u32)
            }
        }
    }

    pub(crate) fn remove(&mut self, id: ZoneId) -> Option<Zone> {
        let zone = self.zones.get_mut(id.index())?.take()?;
        self.free.push(id);
        Some(zone)
    }

    /// Relink every side of every zone in `ids` against the others in `ids`.
    pub(crate) fn link(&mut self, ids: &[ZoneId]) {
        let candidates: Vec<(ZoneId, BoundingBox)> =
            ids.iter().map(|&id| (id, self[id].bounds())).collect();
        for &id in ids {
            let zone = self.live_mut(id);
            for dir in Direction::ALL {
                zone.set_neighbors(&candidates, dir);
            }
        }
    }

    /// Check that zones partition their extent without overlap or gaps and
    /// that every pair of facing slots references each other with the same
    /// classification.
    pub fn validate(&self) -> Result<()> {
        let live: Vec<(ZoneId, &Zone)> = self.zones().collect();
        for (i, &(a, za)) in live.iter().enumerate() {
            for &(b, zb) in &live[i + 1..] {
                if za.bounds().overlaps(zb.bounds()) {
                    return Err(MeshError::Overlap { a, b });
                }
            }
        }

        for pos in self.bounds() {
            if self.find_zone(pos).is_none() {
                return Err(MeshError::Gap { pos });
            }
        }

        for &(id, zone) in &live {
            for dir in Direction::ALL {
                for (i, slot) in zone.side(dir).iter().enumerate() {
                    let pos = zone.slot_cell(dir, i);
                    let outside = pos + dir.delta();
                    let asymmetric = MeshError::AsymmetricEdge { zone: id, dir, pos };
                    let expected = self.find_zone(outside);
                    if slot.neighbor != expected {
                        return Err(asymmetric);
                    }
                    let Some(n) = expected else {
                        continue;
                    };
                    match self[n].slot(dir.opposite(), outside) {
                        Some(facing) if facing.neighbor == Some(id) && facing.kind == slot.kind => {}
                        _ => return Err(asymmetric),
                    }
                }
            }
        }
        Ok(())
    }
}

impl Index<ZoneId> for ZoneGraph {
    type Output = Zone;

    /// Panics if `id` does not name a live zone.
    fn index(&self, id: ZoneId) -> &Zone {
        match self.zone(id) {
            Some(z) => z,
            None => panic!("{id} is vacant"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::EdgeKind;

    fn quad() -> ZoneGraph {
        // 0 | 1
        // --+--
        // 2 (spans both columns)
        ZoneGraph::from_zones(vec![
            Zone::new(BoundingBox::new(0, 2, 2, 4), 0),
            Zone::new(BoundingBox::new(2, 2, 4, 4), 0),
            Zone::new(BoundingBox::new(0, 0, 4, 2), 0),
        ])
        .unwrap()
    }

    #[test]
    fn filled_graph_is_valid() {
        let g = ZoneGraph::filled(BoundingBox::new(0, 0, 10, 10), 1);
        assert_eq!(g.len(), 1);
        assert_eq!(g.revision(), 0);
        g.validate().unwrap();
    }

    #[test]
    fn from_zones_links_neighbors() {
        let g = quad();
        g.validate().unwrap();
        let (a, b, c) = (ZoneId(0), ZoneId(1), ZoneId(2));
        assert_eq!(g[a].neighbors(), vec![b, c]);
        assert_eq!(g[b].neighbors(), vec![a, c]);
        assert_eq!(g[c].neighbors(), vec![a, b]);
        let north: Vec<_> = g[c].side(Direction::North).iter().map(|s| s.neighbor).collect();
        assert_eq!(north, vec![Some(a), Some(a), Some(b), Some(b)]);
    }

    #[test]
    fn from_zones_rejects_overlap() {
        let err = ZoneGraph::from_zones(vec![
            Zone::new(BoundingBox::new(0, 0, 3, 3), 0),
            Zone::new(BoundingBox::new(2, 2, 4, 4), 0),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            MeshError::Overlap {
                a: ZoneId(0),
                b: ZoneId(1)
            }
        );
    }

    #[test]
    fn point_location() {
        let g = quad();
        assert_eq!(g.find_zone(Point::new(3, 3)), Some(ZoneId(1)));
        assert_eq!(g.zone_at(Point::new(0, 0)), Ok(ZoneId(2)));
        assert_eq!(
            g.zone_at(Point::new(4, 0)),
            Err(MeshError::OutOfBounds {
                pos: Point::new(4, 0)
            })
        );
        assert_eq!(
            g.zone_bounds(Point::new(1, 3)),
            Some((Point::new(0, 2), Point::new(2, 4)))
        );
        assert_eq!(g.zone_bounds(Point::new(-1, 3)), None);
    }

    #[test]
    fn validate_detects_gap() {
        let g = ZoneGraph::from_zones(vec![
            Zone::new(BoundingBox::new(0, 0, 2, 2), 0),
            Zone::new(BoundingBox::new(3, 0, 4, 2), 0),
        ])
        .unwrap();
        assert_eq!(
            g.validate(),
            Err(MeshError::Gap {
                pos: Point::new(2, 0)
            })
        );
    }

    #[test]
    fn validate_detects_one_sided_wall() {
        let g = ZoneGraph::from_zones(vec![
            Zone::new(BoundingBox::new(0, 0, 2, 2), 0).with_edge(Direction::East, EdgeKind::WALL),
            Zone::new(BoundingBox::new(2, 0, 4, 2), 0),
        ])
        .unwrap();
        assert!(matches!(
            g.validate(),
            Err(MeshError::AsymmetricEdge { dir: Direction::East, .. })
        ));
    }

    #[test]
    fn removed_ids_are_recycled() {
        let mut g = quad();
        let z = g.remove(ZoneId(1)).unwrap();
        assert_eq!(g.len(), 2);
        assert!(g.zone(ZoneId(1)).is_none());
        assert_eq!(g.insert(z), ZoneId(1));
        assert_eq!(g.len(), 3);
    }
}
