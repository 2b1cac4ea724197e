//! Union-find over grid cells.

use trailblazer_core::{Cell, Dims};

use crate::error::{Error, Result};

/// A disjoint-set forest over a dense universe of cells.
///
/// Cell `(row, col)` lives at index `col + row * row_stride`. Every slot
/// starts as its own singleton set; [`make_set`](Self::make_set) resets one.
/// [`find`](Self::find) compresses paths so that every node it walks ends up
/// pointing directly at the root.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parents: Vec<usize>,
    stride: usize,
    components: usize,
}

impl DisjointSet {
    /// Create a set over `max_elements` slots, mapping cells with `row_stride`
    /// columns per row.
    pub fn new(max_elements: usize, row_stride: usize) -> Self {
        Self {
            parents: (0..max_elements).collect(),
            stride: row_stride.max(1),
            components: max_elements,
        }
    }

    /// Create a set covering every cell of `dims`.
    pub fn for_dims(dims: Dims) -> Self {
        Self::new(dims.len(), dims.cols as usize)
    }

    /// Number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Whether the universe has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Number of disjoint sets currently in the forest.
    #[inline]
    pub fn components(&self) -> usize {
        self.components
    }

    /// Make `c` a singleton root.
    pub fn make_set(&mut self, c: Cell) -> Result<()> {
        let i = self.index(c)?;
        if self.parents[i] != i {
            self.parents[i] = i;
            self.components += 1;
        }
        Ok(())
    }

    /// Return the representative cell of the set containing `c`.
    pub fn find(&mut self, c: Cell) -> Result<Cell> {
        let i = self.index(c)?;
        let root = self.find_root(i);
        Ok(self.cell(root))
    }

    /// Merge the sets containing `a` and `b`; `a`'s root becomes the parent.
    ///
    /// Returns `false` (and changes nothing) if they were already joined.
    pub fn join(&mut self, a: Cell, b: Cell) -> Result<bool> {
        let ia = self.index(a)?;
        let ib = self.index(b)?;
        let ra = self.find_root(ia);
        let rb = self.find_root(ib);
        if ra == rb {
            return Ok(false);
        }
        self.parents[rb] = ra;
        self.components -= 1;
        Ok(true)
    }

    /// Whether `a` and `b` are in the same set.
    pub fn same_set(&mut self, a: Cell, b: Cell) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    fn find_root(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parents[root] != root {
            root = self.parents[root];
        }
        // Second pass: point the whole chain at the root.
        let mut cur = i;
        while self.parents[cur] != root {
            let next = self.parents[cur];
            self.parents[cur] = root;
            cur = next;
        }
        root
    }

    fn index(&self, c: Cell) -> Result<usize> {
        if c.row < 0 || c.col < 0 || c.col as usize >= self.stride {
            return Err(Error::OutOfBounds {
                cell: c,
                dims: self.dims(),
            });
        }
        let index = c.col as usize + c.row as usize * self.stride;
        if index >= self.parents.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.parents.len(),
            });
        }
        Ok(index)
    }

    #[inline]
    fn cell(&self, index: usize) -> Cell {
        Cell::new((index / self.stride) as i32, (index % self.stride) as i32)
    }

    fn dims(&self) -> Dims {
        let rows = self.parents.len().div_ceil(self.stride);
        Dims::new(rows as i32, self.stride as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn six() -> (DisjointSet, [Cell; 6]) {
        let mut ds = DisjointSet::new(6, 2);
        let cells = [
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(1, 0),
            Cell::new(1, 1),
            Cell::new(2, 0),
            Cell::new(2, 1),
        ];
        for c in cells {
            ds.make_set(c).unwrap();
        }
        (ds, cells)
    }

    #[test]
    fn singletons_are_distinct() {
        let (mut ds, cells) = six();
        for (i, &a) in cells.iter().enumerate() {
            assert_eq!(ds.find(a).unwrap(), a);
            assert_eq!(ds.find(a).unwrap(), ds.find(a).unwrap());
            for &b in &cells[i + 1..] {
                assert_ne!(ds.find(a).unwrap(), ds.find(b).unwrap());
            }
        }
        assert_eq!(ds.components(), 6);
    }

    #[test]
    fn join_merges_components() {
        let (mut ds, [a, b, c, d, e, f]) = six();

        assert!(ds.join(a, b).unwrap());
        assert_eq!(ds.find(a).unwrap(), ds.find(b).unwrap());

        assert!(ds.join(a, c).unwrap());
        assert!(ds.same_set(a, c).unwrap());
        assert!(ds.same_set(b, c).unwrap());
        assert!(!ds.same_set(c, d).unwrap());
        assert!(!ds.same_set(a, e).unwrap());
        assert!(!ds.same_set(a, f).unwrap());

        assert!(ds.join(c, d).unwrap());
        assert!(ds.same_set(a, d).unwrap());
        assert_eq!(ds.components(), 3);
    }

    #[test]
    fn join_is_idempotent() {
        let (mut ds, [a, b, ..]) = six();
        assert!(ds.join(a, b).unwrap());
        let root = ds.find(a).unwrap();
        assert!(!ds.join(a, b).unwrap());
        assert!(!ds.join(b, a).unwrap());
        assert_eq!(ds.find(a).unwrap(), root);
        assert_eq!(ds.find(b).unwrap(), root);
        assert_eq!(ds.components(), 5);
    }

    #[test]
    fn join_direction_is_pinned() {
        let (mut ds, [a, b, ..]) = six();
        ds.join(a, b).unwrap();
        assert_eq!(ds.find(b).unwrap(), a);
    }

    #[test]
    fn out_of_universe_cells_are_rejected() {
        let mut ds = DisjointSet::new(6, 2);
        assert_eq!(
            ds.make_set(Cell::new(3, 0)),
            Err(Error::IndexOutOfBounds { index: 6, len: 6 })
        );
        assert!(matches!(
            ds.find(Cell::new(0, 2)),
            Err(Error::OutOfBounds { .. })
        ));
        assert!(matches!(
            ds.join(Cell::new(-1, 0), Cell::new(0, 0)),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn make_set_detaches_a_member() {
        let (mut ds, [a, b, ..]) = six();
        ds.join(a, b).unwrap();
        assert_eq!(ds.components(), 5);
        ds.make_set(b).unwrap();
        assert!(!ds.same_set(a, b).unwrap());
        assert_eq!(ds.components(), 6);
    }

    #[test]
    fn long_chains_compress_without_recursion() {
        let n = 200_000;
        let mut ds = DisjointSet::new(n, n);
        // Build a worst-case chain: each root hangs under the next cell.
        for col in 1..n as i32 {
            ds.join(Cell::new(0, col), Cell::new(0, col - 1)).unwrap();
        }
        let root = Cell::new(0, n as i32 - 1);
        assert_eq!(ds.find(Cell::new(0, 0)).unwrap(), root);
        // After compression the first cell points straight at the root.
        assert_eq!(ds.parents[0], n - 1);
        assert_eq!(ds.components(), 1);
    }

    #[test]
    fn for_dims_covers_grid() {
        let dims = Dims::new(3, 4);
        let mut ds = DisjointSet::for_dims(dims);
        assert_eq!(ds.len(), 12);
        for c in dims {
            assert_eq!(ds.find(c).unwrap(), c);
        }
    }
}
