use serde::Deserialize;

use chess_rules::{Color, Outcome, Position};

#[derive(Deserialize)]
struct ProblemSet {
    problems: Vec<Problem>,
}

#[derive(Deserialize)]
struct Problem {
    name: String,
    fen: String,
    #[serde(rename = "move")]
    solution: String,
    winner: String,
}

#[test]
fn mate_in_one_suite() {
    let data = include_str!("data/mates.json");
    let set: ProblemSet = serde_json::from_str(data).expect("invalid mates.json");

    for problem in &set.problems {
        let mut position = Position::from_fen(&problem.fen)
            .unwrap_or_else(|e| panic!("{}: bad FEN: {e}", problem.name));
        assert_eq!(position.outcome(), Outcome::Ongoing, "{}", problem.name);

        let (mv, undo) = position
            .play_uci(&problem.solution)
            .unwrap_or_else(|e| panic!("{}: {e}", problem.name));

        assert!(
            position.is_checkmate(),
            "mate in one failed for {} fen: {} move: {}",
            problem.name,
            problem.fen,
            problem.solution
        );
        let expected = match problem.winner.as_str() {
            "White" => Color::White,
            _ => Color::Black,
        };
        assert_eq!(position.outcome().winner(), Some(expected), "{}", problem.name);

        position.unmake_move(mv, undo);
        assert_eq!(position.to_fen(), problem.fen);
    }
}

#[test]
fn no_other_move_mates_the_back_rank() {
    let mut position = Position::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
    let mut mates = Vec::new();
    for mv in position.generate_legal_moves() {
        let undo = position.make_move(mv);
        if position.is_checkmate() {
            mates.push(mv.to_string());
        }
        position.unmake_move(mv, undo);
    }
    assert_eq!(mates, vec!["a1a8"]);
}
