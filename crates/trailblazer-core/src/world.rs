//! A per-cell cost grid.
//!
//! [`World`] is the terrain searches run over: each cell carries a
//! non-negative traversal cost whose meaning is decided by the cost function
//! the caller pairs it with (entry cost, elevation, ...).

use crate::geom::{Cell, Dims};

/// A `rows × cols` grid of `f64` costs stored row-major.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct World {
    dims: Dims,
    costs: Vec<f64>,
}

impl World {
    /// Create a world with every cell set to `cost`.
    pub fn new(rows: i32, cols: i32, cost: f64) -> Self {
        let dims = Dims::new(rows, cols);
        Self {
            dims,
            costs: vec![cost; dims.len()],
        }
    }

    /// Build a world from a list of rows.
    ///
    /// Returns `None` if the rows have inconsistent lengths.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let ncols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != ncols) {
            return None;
        }
        let dims = Dims::new(rows.len() as i32, ncols as i32);
        let costs = rows.into_iter().flatten().collect();
        Some(Self { dims, costs })
    }

    /// Grid dimensions.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.dims.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.dims.cols
    }

    /// Whether `c` lies inside the world.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.dims.contains(c)
    }

    /// Cost stored at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Cell) -> Option<f64> {
        self.dims.index(c).map(|i| self.costs[i])
    }

    /// Set the cost at `c`. Does nothing if out of bounds.
    pub fn set(&mut self, c: Cell, cost: f64) {
        if let Some(i) = self.dims.index(c) {
            self.costs[i] = cost;
        }
    }

    /// Set every cell to `cost`.
    pub fn fill(&mut self, cost: f64) {
        self.costs.fill(cost);
    }

    /// Set every cell from a function of its position.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Cell) -> f64) {
        for (i, c) in self.dims.iter().enumerate() {
            self.costs[i] = f(c);
        }
    }

    /// Smallest cost in the world (`0.0` for an empty world).
    pub fn min_cost(&self) -> f64 {
        self.costs
            .iter()
            .copied()
            .reduce(f64::min)
            .unwrap_or(0.0)
    }

    /// Row-major iterator over `(Cell, cost)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, f64)> + '_ {
        self.dims.iter().zip(self.costs.iter().copied())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for World {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            dims: Dims,
            costs: Vec<f64>,
        }
        let raw = Raw::deserialize(deserializer)?;
        if raw.costs.len() != raw.dims.len() {
            return Err(serde::de::Error::custom(format_args!(
                "a {} world needs {} costs, got {}",
                raw.dims,
                raw.dims.len(),
                raw.costs.len()
            )));
        }
        Ok(Self {
            dims: raw.dims,
            costs: raw.costs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_new_and_at() {
        let w = World::new(2, 3, 1.5);
        assert_eq!(w.dims(), Dims::new(2, 3));
        assert_eq!(w.at(Cell::new(1, 2)), Some(1.5));
        assert_eq!(w.at(Cell::new(2, 0)), None);
    }

    #[test]
    fn world_set_ignores_out_of_bounds() {
        let mut w = World::new(2, 2, 0.0);
        w.set(Cell::new(1, 0), 7.0);
        w.set(Cell::new(5, 5), 9.0);
        assert_eq!(w.at(Cell::new(1, 0)), Some(7.0));
        assert_eq!(w.iter().filter(|&(_, v)| v == 9.0).count(), 0);
    }

    #[test]
    fn world_from_rows() {
        let w = World::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 0.5]]).unwrap();
        assert_eq!(w.rows(), 3);
        assert_eq!(w.cols(), 2);
        assert_eq!(w.at(Cell::new(2, 0)), Some(5.0));
        assert_eq!(w.min_cost(), 0.5);
        assert!(World::from_rows(vec![vec![1.0], vec![1.0, 2.0]]).is_none());
    }

    #[test]
    fn world_fill_fn() {
        let mut w = World::new(3, 3, 0.0);
        w.fill_fn(|c| (c.row * 3 + c.col) as f64);
        assert_eq!(w.at(Cell::new(2, 1)), Some(7.0));
        w.fill(2.0);
        assert!(w.iter().all(|(_, v)| v == 2.0));
    }
}
