//! "Perft" move-generation test: count the number of leaves at a given depth.
//! Passes count as a ply; a finished game is a leaf.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::Othello;

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(&Othello::new(), depth)
}

fn leaves_below(game: &Othello, depth: u64) -> u64 {
    // Leaf node for this depth
    if depth == 0 || game.is_finished() {
        return 1;
    }

    if !game.has_playable_move() {
        let mut next = game.clone();
        // Only fails on a finished game, which returned above.
        if next.pass().is_err() {
            return 1;
        }
        return leaves_below(&next, depth - 1);
    }

    game.playable_moves()
        .map(|mv| {
            let mut next = game.clone();
            match next.put(mv).and_then(|_| next.end_turn()) {
                Ok(()) => leaves_below(&next, depth - 1),
                Err(_) => 0,
            }
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(6), 8200);
}
