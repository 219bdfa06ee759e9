use std::collections::HashSet;

use marquee_types::ScreeningId;

/// Toggle a screening in the selection set (symmetric difference).
pub fn toggle(selections: &HashSet<ScreeningId>, id: &ScreeningId) -> HashSet<ScreeningId> {
    let mut next = selections.clone();
    if !next.remove(id) {
        next.insert(id.clone());
    }
    next
}
