use std::ops::{Index, IndexMut};

use slotmap::SlotMap;

use crate::math::polygon_2d::is_collinear;
use crate::math::Point64;

slotmap::new_key_type! {
    /// Identifier of an output vertex in an [`OutPtStore`].
    pub(super) struct OutPtId;
}

/// Output vertex of a clip ring. Rings are circular doubly linked lists
/// threaded through the store by id.
#[derive(Debug, Clone)]
pub(super) struct OutPt {
    pub pt: Point64,
    pub next: OutPtId,
    pub prev: OutPtId,
    /// Index of the ring in the result list.
    pub owner_idx: usize,
    /// Rectangle edge list this vertex is registered on.
    pub edge: Option<usize>,
}

/// Arena owning every output vertex of one clip pass.
#[derive(Debug, Default)]
pub(super) struct OutPtStore {
    ops: SlotMap<OutPtId, OutPt>,
}

impl OutPtStore {
    /// Creates a single-vertex ring.
    pub fn new_ring(&mut self, pt: Point64, owner_idx: usize) -> OutPtId {
        self.ops.insert_with_key(|id| OutPt {
            pt,
            next: id,
            prev: id,
            owner_idx,
            edge: None,
        })
    }

    /// Inserts a vertex directly after `prev` in its ring.
    pub fn insert_after(&mut self, prev: OutPtId, pt: Point64, owner_idx: usize) -> OutPtId {
        let next = self.ops[prev].next;
        let id = self.ops.insert(OutPt {
            pt,
            next,
            prev,
            owner_idx,
            edge: None,
        });
        self.ops[next].prev = id;
        self.ops[prev].next = id;
        id
    }

    /// Removes `id` from its ring and returns the vertex after it, or `None`
    /// when `id` was the only vertex.
    pub fn unlink(&mut self, id: OutPtId) -> Option<OutPtId> {
        let OutPt { next, prev, .. } = self.ops[id];
        if next == id {
            return None;
        }
        self.ops[prev].next = next;
        self.ops[next].prev = prev;
        Some(next)
    }

    /// Like [`unlink`](Self::unlink) but returns the vertex before `id`.
    pub fn unlink_back(&mut self, id: OutPtId) -> Option<OutPtId> {
        let OutPt { next, prev, .. } = self.ops[id];
        if next == id {
            return None;
        }
        self.ops[prev].next = next;
        self.ops[next].prev = prev;
        Some(prev)
    }

    /// Assigns every vertex of the ring containing `id` to `owner_idx`.
    pub fn set_new_owner(&mut self, id: OutPtId, owner_idx: usize) {
        self.ops[id].owner_idx = owner_idx;
        let mut op = self.ops[id].next;
        while op != id {
            self.ops[op].owner_idx = owner_idx;
            op = self.ops[op].next;
        }
    }

    /// The vertex is collinear with its two neighbours.
    pub fn is_collinear_at(&self, id: OutPtId) -> bool {
        let op = &self.ops[id];
        is_collinear(&self.ops[op.prev].pt, &op.pt, &self.ops[op.next].pt)
    }

    /// The ring holding `id` has at most two vertices.
    pub fn is_degenerate(&self, id: OutPtId) -> bool {
        self.ops[id].next == self.ops[id].prev
    }

    /// Collects the ring's points starting at `id`.
    pub fn ring_points(&self, id: OutPtId) -> Vec<Point64> {
        let mut result = vec![self.ops[id].pt];
        let mut op = self.ops[id].next;
        while op != id {
            result.push(self.ops[op].pt);
            op = self.ops[op].next;
        }
        result
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Index<OutPtId> for OutPtStore {
    type Output = OutPt;

    fn index(&self, id: OutPtId) -> &OutPt {
        &self.ops[id]
    }
}

impl IndexMut<OutPtId> for OutPtStore {
    fn index_mut(&mut self, id: OutPtId) -> &mut OutPt {
        &mut self.ops[id]
    }
}
