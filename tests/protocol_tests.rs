//! Full games over the text protocol.

use rust_portfolio::arbiter::{ArbiterError, LineArbiter};
use rust_portfolio::core::{EngineConfig, EngineError};
use rust_portfolio::game::GameLoop;

fn play(input: &str, config: EngineConfig) -> (Result<i64, EngineError>, String) {
    let arbiter = LineArbiter::new(input.as_bytes(), Vec::new());
    let mut game = GameLoop::new(arbiter, config);
    let result = game.run().map(|outcome| outcome.score);
    let output = String::from_utf8(game.into_arbiter().into_writer()).unwrap();
    (result, output)
}

#[test]
fn test_single_turn_transcript() {
    let input = "1 1 1 1\n0 5\n5 10\n3 6\n10\n0 1 0\n";

    let (result, output) = play(input, EngineConfig::default());

    assert_eq!(result.unwrap(), 10);
    assert_eq!(output, "# used WorkSingle(w=5, p=0) to target 0\n0 0\n0\n");
}

#[test]
fn test_two_turn_transcript() {
    let input = concat!(
        "2 2 2 2\n",
        "4 0\n1 3\n",
        "5 10\n6 12\n",
        // turn 0
        "5 10\n6 12\n100\n0 1 0\n4 0 50\n",
        // turn 1
        "5 10\n1 12\n50\n0 1 0\n1 5 10\n",
    );

    let (result, output) = play(input, EngineConfig::default().with_comments(false));

    assert_eq!(result.unwrap(), 50);
    assert_eq!(output, "0 0\n1\n0 0\n0\n");
}

#[test]
fn test_truncated_input() {
    let input = "1 1 1 2\n0 5\n5 10\n3 6\n10\n0 1 0\n";

    let (result, output) = play(input, EngineConfig::default().with_comments(false));

    assert!(matches!(
        result,
        Err(EngineError::Arbiter(ArbiterError::UnexpectedEof { .. }))
    ));
    // Second action was sent before the read failed.
    assert_eq!(output, "0 0\n0\n0 0\n");
}

#[test]
fn test_malformed_money_line() {
    let input = "1 1 1 1\n0 5\n5 10\n3 6\nlots\n";

    let (result, _) = play(input, EngineConfig::default());

    assert!(matches!(
        result,
        Err(EngineError::Arbiter(ArbiterError::Malformed { line: 5, expected: "money", .. }))
    ));
}

#[test]
fn test_unknown_offer_type() {
    let input = "1 1 1 1\n0 5\n5 10\n3 6\n10\n9 1 0\n";

    let (result, _) = play(input, EngineConfig::default());

    assert!(matches!(
        result,
        Err(EngineError::Arbiter(ArbiterError::UnknownCardType { code: 9 }))
    ));
}

#[test]
fn test_huge_turn_count_ends_at_missing_input() {
    let input = "1 1 1 4000000000\n0 5\n5 10\n";

    let (result, output) = play(input, EngineConfig::default().with_comments(false));

    assert!(matches!(
        result,
        Err(EngineError::Arbiter(ArbiterError::UnexpectedEof { expected: "project `h v`" }))
    ));
    assert_eq!(output, "0 0\n");
}
