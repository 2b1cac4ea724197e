//! Search progress notifications.
//!
//! A search reports every cell state change to a [`SearchObserver`]. The
//! notifications are purely informational: visualisers colour cells from
//! them, tests inspect the order, and the search result never depends on
//! what the observer does.

use trailblazer_core::Cell;

/// Visitation state of a cell during a search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visit {
    /// Not reached yet.
    #[default]
    Unvisited,
    /// Discovered and queued with a tentative cost.
    Frontier,
    /// Dequeued; its cost and predecessor are final.
    Finalized,
}

/// Receives cell state changes from a search.
pub trait SearchObserver {
    fn visit(&mut self, cell: Cell, state: Visit);
}

/// Ignores every notification.
impl SearchObserver for () {
    #[inline]
    fn visit(&mut self, _cell: Cell, _state: Visit) {}
}

impl<F: FnMut(Cell, Visit)> SearchObserver for F {
    #[inline]
    fn visit(&mut self, cell: Cell, state: Visit) {
        self(cell, state)
    }
}

/// Records the full event stream of a search.
#[derive(Debug, Clone, Default)]
pub struct VisitLog {
    events: Vec<(Cell, Visit)>,
}

impl VisitLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events in order.
    pub fn events(&self) -> &[(Cell, Visit)] {
        &self.events
    }

    /// Cells in the order they were finalized.
    pub fn finalized(&self) -> impl Iterator<Item = Cell> + '_ {
        self.events
            .iter()
            .filter(|&&(_, v)| v == Visit::Finalized)
            .map(|&(c, _)| c)
    }

    /// The last state reported for `cell`.
    pub fn state(&self, cell: Cell) -> Visit {
        self.events
            .iter()
            .rev()
            .find(|&&(c, _)| c == cell)
            .map_or(Visit::Unvisited, |&(_, v)| v)
    }

    /// Forget every recorded event.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl SearchObserver for VisitLog {
    fn visit(&mut self, cell: Cell, state: Visit) {
        self.events.push((cell, state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_tracks_latest_state() {
        let mut log = VisitLog::new();
        let a = Cell::new(0, 0);
        let b = Cell::new(0, 1);
        log.visit(a, Visit::Frontier);
        log.visit(a, Visit::Finalized);
        log.visit(b, Visit::Frontier);
        assert_eq!(log.state(a), Visit::Finalized);
        assert_eq!(log.state(b), Visit::Frontier);
        assert_eq!(log.state(Cell::new(4, 4)), Visit::Unvisited);
        assert_eq!(log.finalized().collect::<Vec<_>>(), vec![a]);
        assert_eq!(log.events().len(), 3);

        log.clear();
        assert!(log.events().is_empty());
        assert_eq!(log.state(a), Visit::Unvisited);
    }

    #[test]
    fn closures_observe() {
        let mut count = 0;
        {
            let mut obs = |_: Cell, _: Visit| count += 1;
            obs.visit(Cell::ZERO, Visit::Frontier);
            obs.visit(Cell::ZERO, Visit::Finalized);
        }
        assert_eq!(count, 2);
    }
}
