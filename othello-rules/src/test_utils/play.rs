use crate::{Othello, OthelloError};

/// Drive `game` to the end, always taking the first playable cell in row-major
/// order and passing when there is none. Returns the number of placements made.
pub fn play_first_moves(game: &mut Othello) -> Result<usize, OthelloError> {
    let mut placements = 0;

    while !game.is_finished() {
        let next = game.playable_moves().next();
        match next {
            Some(mv) => {
                game.put(mv)?;
                game.end_turn()?;
                placements += 1;
            }
            None => game.pass()?,
        }
    }

    Ok(placements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Outcome};

    #[test]
    fn plays_to_completion() {
        let mut game = Othello::new();
        let placements = play_first_moves(&mut game).unwrap();

        assert!(game.is_finished());
        assert_eq!(game.pass_count(), 2);
        assert!(placements <= 60);

        let score = game.score();
        assert_eq!(score.black + score.white, placements + 4);
        assert_eq!(game.board().count(Cell::Playable), 0);
        match game.outcome() {
            Some(Outcome::Win(stone)) => assert_eq!(game.winner(), Some(stone)),
            Some(Outcome::Draw) => assert_eq!(score.black, score.white),
            None => panic!("finished game has no outcome"),
        }
    }
}
