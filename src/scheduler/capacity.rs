//! Completion check for partially filled grids.
//!
//! A placement is safe when the rest of the grid can still be filled so
//! that every racer ends with exactly its required appearances and no
//! racer runs twice in one heat. The check fills the remaining cells
//! "most heats remaining first" (ties to the lower index): each heat takes
//! the racers with the largest residual demand. When that fill succeeds it
//! is a witness that completion is possible.
//!
//! The witness is self-consistent: placing the racer it would pick next
//! leaves a state whose own witness is the same fill minus that step. So
//! once the empty grid passes, some candidate passes at every later step.
//!
//! # Reference
//! Ryser (1957), "Combinatorial properties of matrices of zeros and ones"

/// Residual demand and heat capacities used to test a placement.
#[derive(Debug, Clone)]
pub struct CapacityCheck<'a> {
    /// Heats left per racer, before the tentative placement.
    pub remaining: &'a [usize],
    /// Racers already in the current heat.
    pub in_heat: &'a [bool],
    /// Open lanes of the current heat left after the tentative placement.
    pub open_after: usize,
    /// Open lanes of each later heat.
    pub later: &'a [usize],
}

impl CapacityCheck<'_> {
    /// Whether placing `racer` in the current heat keeps the grid completable.
    pub fn allows(&self, racer: usize) -> bool {
        let mut residual = self.remaining.to_vec();
        match residual.get_mut(racer) {
            Some(r) if *r > 0 => *r -= 1,
            _ => return false,
        }

        let mut blocked = self.in_heat.to_vec();
        blocked[racer] = true;
        if !take_most_remaining(&mut residual, &blocked, self.open_after) {
            return false;
        }

        let free = vec![false; residual.len()];
        for &capacity in self.later {
            if !take_most_remaining(&mut residual, &free, capacity) {
                return false;
            }
        }

        residual.iter().all(|&r| r == 0)
    }
}

/// Whether the empty grid can be completed at all.
pub fn completable(remaining: &[usize], capacities: &[usize]) -> bool {
    let mut residual = remaining.to_vec();
    let free = vec![false; residual.len()];
    capacities
        .iter()
        .all(|&capacity| take_most_remaining(&mut residual, &free, capacity))
        && residual.iter().all(|&r| r == 0)
}

// Seats `count` distinct unblocked racers with the largest residual demand.
fn take_most_remaining(residual: &mut [usize], blocked: &[bool], count: usize) -> bool {
    if count == 0 {
        return true;
    }
    let mut eligible: Vec<usize> = (0..residual.len())
        .filter(|&r| residual[r] > 0 && !blocked[r])
        .collect();
    if eligible.len() < count {
        return false;
    }
    eligible.sort_by(|&a, &b| residual[b].cmp(&residual[a]).then(a.cmp(&b)));
    for &r in &eligible[..count] {
        residual[r] -= 1;
    }
    true
}
