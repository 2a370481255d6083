//! BYE placement.
//!
//! # Algorithm
//!
//! 1. Rank lanes outermost first: `0, L−1, 1, L−2, …`, middle lane last.
//! 2. Walk heats from last to first, one BYE per heat, wrapping back to
//!    the last heat while BYEs remain.
//! 3. At each step target the track edge holding fewer BYEs so far
//!    (ties alternate, left first). Try that edge's outer lane; if it is
//!    already a BYE in this heat, take the edge's next lane in
//!    outermost-first order, then any free lane from the top of the order.
//!
//! BYEs therefore land on the track edges, balanced left/right, and in
//! the later heats.

use tracing::debug;

use super::GridSize;

/// Which side of the track a lane sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Left,
    Right,
    Middle,
}

fn edge_of(lane: usize, lanes: usize) -> Edge {
    let twice = 2 * lane;
    let span = lanes.saturating_sub(1);
    if twice < span {
        Edge::Left
    } else if twice > span {
        Edge::Right
    } else {
        Edge::Middle
    }
}

/// Lanes ordered outermost first.
///
/// ```
/// use u_heat::scheduler::outermost_first;
///
/// assert_eq!(outermost_first(5), vec![0, 4, 1, 3, 2]);
/// assert_eq!(outermost_first(4), vec![0, 3, 1, 2]);
/// ```
pub fn outermost_first(lanes: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(lanes);
    if lanes == 0 {
        return order;
    }
    let (mut lo, mut hi) = (0, lanes - 1);
    while lo < hi {
        order.push(lo);
        order.push(hi);
        lo += 1;
        hi -= 1;
    }
    if lo == hi {
        order.push(lo);
    }
    order
}

/// BYE cells of a grid, as a `heats × lanes` bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByeLayout {
    heats: usize,
    lanes: usize,
    cells: Vec<bool>,
}

impl ByeLayout {
    /// Creates a layout with no BYEs.
    pub fn empty(heats: usize, lanes: usize) -> Self {
        Self {
            heats,
            lanes,
            cells: vec![false; heats * lanes],
        }
    }

    /// Whether `[heat][lane]` is a BYE.
    #[inline]
    pub fn is_bye(&self, heat: usize, lane: usize) -> bool {
        lane < self.lanes
            && self
                .cells
                .get(heat * self.lanes + lane)
                .copied()
                .unwrap_or(false)
    }

    /// Total BYE cells.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&b| b).count()
    }

    /// BYE cells in one heat.
    pub fn count_in_heat(&self, heat: usize) -> usize {
        (0..self.lanes).filter(|&l| self.is_bye(heat, l)).count()
    }

    /// Non-BYE lanes of one heat, ascending.
    pub fn open_lanes(&self, heat: usize) -> Vec<usize> {
        (0..self.lanes).filter(|&l| !self.is_bye(heat, l)).collect()
    }

    /// Non-BYE cell count per heat.
    pub fn capacities(&self) -> Vec<usize> {
        (0..self.heats)
            .map(|h| self.lanes - self.count_in_heat(h))
            .collect()
    }

    fn mark(&mut self, heat: usize, lane: usize) {
        if let Some(cell) = self.cells.get_mut(heat * self.lanes + lane) {
            *cell = true;
        }
    }

    // The edge's own lanes outermost first, then any free lane.
    fn pick_lane(&self, heat: usize, edge: Edge, order: &[usize]) -> Option<usize> {
        order
            .iter()
            .filter(|&&l| edge_of(l, self.lanes) == edge)
            .chain(order.iter())
            .copied()
            .find(|&l| !self.is_bye(heat, l))
    }
}

/// Chooses BYE cells for a grid.
///
/// When the target edge's outer lane is taken, the fallback stays on that
/// edge (lane 1 after lane 0, not lane `L−1`) before scanning every lane.
pub fn place_byes(size: &GridSize) -> ByeLayout {
    let mut layout = ByeLayout::empty(size.heats, size.lanes);
    if size.necessary_byes == 0 || size.heats == 0 || size.lanes == 0 {
        return layout;
    }

    let order = outermost_first(size.lanes);
    let (mut left, mut right) = (0usize, 0usize);
    let mut left_turn = true;
    let mut heat = size.heats - 1;
    let mut placed = 0;
    let mut full_heats = 0;

    while placed < size.necessary_byes && full_heats < size.heats {
        let edge = match left.cmp(&right) {
            std::cmp::Ordering::Less => Edge::Left,
            std::cmp::Ordering::Greater => Edge::Right,
            std::cmp::Ordering::Equal => {
                let edge = if left_turn { Edge::Left } else { Edge::Right };
                left_turn = !left_turn;
                edge
            }
        };

        match layout.pick_lane(heat, edge, &order) {
            Some(lane) => {
                layout.mark(heat, lane);
                placed += 1;
                full_heats = 0;
                match edge_of(lane, size.lanes) {
                    Edge::Left => left += 1,
                    Edge::Right => right += 1,
                    Edge::Middle => {}
                }
            }
            None => full_heats += 1,
        }

        heat = if heat == 0 { size.heats - 1 } else { heat - 1 };
    }

    debug!(
        byes = placed,
        heats = size.heats,
        lanes = size.lanes,
        left,
        right,
        "placed BYEs"
    );
    layout
}
