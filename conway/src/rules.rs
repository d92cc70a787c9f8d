// rules.rs - Conway's birth/survival rule

/// State of a cell in the next generation given its current state and
/// the number of live neighbors around it.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}
