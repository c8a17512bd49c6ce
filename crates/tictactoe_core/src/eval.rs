//! Terminal-position scoring shared by every search engine
//!
//! Both search variants must score with the same constants or their
//! results stop being comparable.

use crate::board::Board;
use crate::types::Mark;

/// Score of a position the searching side has won.
pub const WIN_SCORE: i32 = 100;
/// Score of a position the searching side has lost.
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// Scores `board` from `perspective`'s point of view.
///
/// A win for `perspective` is [`WIN_SCORE`], a win for the opponent is
/// [`LOSS_SCORE`], and anything else is 0. A draw and a position that is
/// merely undecided at the depth cutoff score the same; only a deep
/// enough search can tell them apart.
pub fn evaluate(board: &Board, perspective: Mark) -> i32 {
    let winner = board.winner();
    if winner == perspective {
        WIN_SCORE
    } else if winner == perspective.opposite() {
        LOSS_SCORE
    } else {
        0
    }
}
