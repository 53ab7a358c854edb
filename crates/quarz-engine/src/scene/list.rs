use super::DrawCmd;

/// Z-layer for draw items. Higher values paint on top of lower ones.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}

/// Stable sort key: z-layer, then insertion order within the layer.
///
/// The derived ordering is lexicographic over the fields, which is exactly
/// back-to-front paint order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame
///   allocation once warmed
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey { z, order },
            cmd,
        });

        self.sorted_dirty = true;
    }

    /// Iterates items in paint order (back-to-front) without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn dot(list: &mut DrawList, z: i32, r: f32) {
        list.push_solid_circle(ZIndex::new(z), Vec2::zero(), r, Color::WHITE);
    }

    fn radius(item: &DrawItem) -> f32 {
        match &item.cmd {
            DrawCmd::Circle(c) => c.radius,
            _ => panic!("expected circle"),
        }
    }

    #[test]
    fn sort_key_orders_by_z_before_insertion() {
        let back = SortKey { z: ZIndex::new(0), order: 5 };
        let mid = SortKey { z: ZIndex::new(1), order: 0 };
        let front = SortKey { z: ZIndex::new(1), order: 1 };
        assert!(back < mid && mid < front);
    }

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut list = DrawList::new();
        dot(&mut list, 1, 10.0);
        dot(&mut list, 0, 20.0);
        dot(&mut list, 1, 30.0);

        let radii: Vec<f32> = list.iter_in_paint_order().map(radius).collect();
        assert_eq!(radii, vec![20.0, 10.0, 30.0]);
    }

    #[test]
    fn clear_resets_insertion_order() {
        let mut list = DrawList::new();
        dot(&mut list, 0, 1.0);
        list.clear();
        assert!(list.is_empty());

        dot(&mut list, 0, 2.0);
        assert_eq!(list.items()[0].key.order, 0);
    }
}
