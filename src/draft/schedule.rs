//! Draft turn order.
//!
//! Steps alternate between the coin-toss winner and the other side,
//! starting with the winner. With the default `[1, 2, 2, 2, 1]` counts the
//! winner takes 1, 2 and 1 cards and the other side takes 2 and 2.

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// One draft step: `side` takes `count` cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PickStep {
    pub side: Side,
    pub count: usize,
}

/// Expand pick counts into the ordered step list for a draft started by `first`.
///
/// ```
/// use generals_duel::core::Side;
/// use generals_duel::draft::pick_order;
///
/// let steps = pick_order(Side::Opponent, &[1, 2, 2, 2, 1]);
/// assert_eq!(steps[0].side, Side::Opponent);
/// assert_eq!(steps[1].side, Side::Player);
/// assert_eq!(steps.iter().map(|s| s.count).sum::<usize>(), 8);
/// ```
#[must_use]
pub fn pick_order(first: Side, pick_counts: &[usize]) -> Vec<PickStep> {
    pick_counts
        .iter()
        .enumerate()
        .map(|(i, &count)| PickStep {
            side: if i % 2 == 0 { first } else { first.other() },
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_order_player_first() {
        let steps = pick_order(Side::Player, &[1, 2, 2, 2, 1]);
        let expected = [
            (Side::Player, 1),
            (Side::Opponent, 2),
            (Side::Player, 2),
            (Side::Opponent, 2),
            (Side::Player, 1),
        ];

        assert_eq!(steps.len(), 5);
        for (step, (side, count)) in steps.iter().zip(expected) {
            assert_eq!(step.side, side);
            assert_eq!(step.count, count);
        }
    }

    #[test]
    fn test_each_side_gets_four() {
        for first in Side::ALL {
            let steps = pick_order(first, &[1, 2, 2, 2, 1]);
            for side in Side::ALL {
                let total: usize = steps.iter().filter(|s| s.side == side).map(|s| s.count).sum();
                assert_eq!(total, 4);
            }
        }
    }

    #[test]
    fn test_empty_counts() {
        assert!(pick_order(Side::Player, &[]).is_empty());
    }
}
