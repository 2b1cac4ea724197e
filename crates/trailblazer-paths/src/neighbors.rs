use trailblazer_core::Cell;

/// Cached neighbor computation helper.
///
/// Enumerates the orthogonal (4-way) neighbors of a cell, filtered by a
/// predicate, into a reusable buffer.
pub struct Neighbors {
    buf: Vec<Cell>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the orthogonal neighbors of `c` (up, right, down, left),
    /// keeping only those for which `keep` returns `true`.
    pub fn cardinal(&mut self, c: Cell, keep: impl Fn(Cell) -> bool) -> &[Cell] {
        self.buf.clear();
        for n in c.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trailblazer_core::Dims;

    #[test]
    fn corner_has_two_neighbors() {
        let dims = Dims::new(3, 3);
        let mut nb = Neighbors::new();
        let got = nb.cardinal(Cell::new(0, 0), |n| dims.contains(n));
        assert_eq!(got, &[Cell::new(0, 1), Cell::new(1, 0)]);
    }

    #[test]
    fn interior_order_is_up_right_down_left() {
        let mut nb = Neighbors::new();
        let got = nb.cardinal(Cell::new(1, 1), |_| true);
        assert_eq!(
            got,
            &[Cell::new(0, 1), Cell::new(1, 2), Cell::new(2, 1), Cell::new(1, 0)]
        );
    }
}
