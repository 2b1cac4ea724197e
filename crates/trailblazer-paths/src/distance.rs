use trailblazer_core::Cell;

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Cell::new(1, 1);
        let b = Cell::new(4, 3);
        assert_eq!(manhattan(a, b), 5);
        assert_eq!(manhattan(b, a), 5);
        assert_eq!(manhattan(a, a), 0);
    }
}
