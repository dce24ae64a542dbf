use super::*;
use crate::puzzle::catalog::rubiks_cube;
use crate::puzzle::{GeneratorId, Move, MoveTag, Puzzle};
use nalgebra::vector;

const MAX_TICKS: usize = 100_000;

fn cube() -> Puzzle {
    Puzzle::from_definition("RubiksCube", &rubiks_cube()).unwrap()
}

fn unlabelled_cube() -> Puzzle {
    let mut def = rubiks_cube();
    for g in &mut def.generator_mesh_list {
        g.label = None;
    }
    Puzzle::from_definition("Unlabelled", &def).unwrap()
}

fn id(p: &Puzzle, l: &str) -> GeneratorId {
    p.generator_by_label(l).unwrap()
}

fn gens(moves: &[Move]) -> Vec<GeneratorId> {
    moves.iter().map(|m| m.generator).collect()
}

fn inverses(moves: &[Move]) -> Vec<bool> {
    moves.iter().map(|m| m.inverse).collect()
}

fn err(text: &str) -> ParseError {
    let p = cube();
    Sequencer::new().try_generate(text, &p).unwrap_err()
}

#[test]
fn tokenize_kinds() {
    let toks = tokenize("2R'~,(U)").unwrap();
    let kinds: Vec<TokenKind> = toks.into_iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Number("2".into()),
            TokenKind::Identifier("R".into()),
            TokenKind::Inverse,
            TokenKind::Reverse,
            TokenKind::Delimiter,
            TokenKind::Open(Bracket::Round),
            TokenKind::Identifier("U".into()),
            TokenKind::Close(Bracket::Round),
        ]
    );
}

#[test]
fn identifiers_take_trailing_digits() {
    let toks = tokenize("R2").unwrap();
    assert_eq!(toks.len(), 1);
    assert_eq!(toks[0].kind, TokenKind::Identifier("R2".into()));
}

#[test]
fn whitespace_is_stripped() {
    assert_eq!(strip_whitespace(" R ,\tU'\n"), "R,U'");
    let p = cube();
    let moves = Sequencer::new().try_generate("R , U ' ", &p).unwrap();
    assert_eq!(gens(&moves), vec![id(&p, "R"), id(&p, "U")]);
    assert_eq!(inverses(&moves), vec![false, true]);
}

#[test]
fn simple_sequence() {
    let p = cube();
    let moves = Sequencer::new().try_generate("R,U,R',U'", &p).unwrap();
    let (r, u) = (id(&p, "R"), id(&p, "U"));
    assert_eq!(gens(&moves), vec![r, u, r, u]);
    assert_eq!(inverses(&moves), vec![false, false, true, true]);
    assert!(moves.iter().all(|m| m.tag == Some(MoveTag::History)));
}

#[test]
fn semicolon_and_trailing_delimiter() {
    let p = cube();
    let moves = Sequencer::new().try_generate("R;U,", &p).unwrap();
    assert_eq!(gens(&moves), vec![id(&p, "R"), id(&p, "U")]);
}

#[test]
fn group_modifiers() {
    let p = cube();
    let (r, u) = (id(&p, "R"), id(&p, "U"));
    let mut seq = Sequencer::new();
    assert_eq!(gens(&seq.try_generate("2{R,U}", &p).unwrap()), vec![r, r, u, u]);
    assert_eq!(gens(&seq.try_generate("2[R,U]", &p).unwrap()), vec![r, u, r, u]);
    assert_eq!(gens(&seq.try_generate("2(R,U)", &p).unwrap()), vec![r, u, r, u]);
    assert_eq!(gens(&seq.try_generate("3R", &p).unwrap()), vec![r, r, r]);
    assert!(seq.try_generate("0R", &p).unwrap().is_empty());
}

#[test]
fn nested_groups() {
    let p = cube();
    let (r, u, f) = (id(&p, "R"), id(&p, "U"), id(&p, "F"));
    let moves = Sequencer::new().try_generate("F,2{R,2[U]}", &p).unwrap();
    assert_eq!(gens(&moves), vec![f, r, r, u, u, u, u]);
}

#[test]
fn reverse_and_inverse() {
    let p = cube();
    let (r, u) = (id(&p, "R"), id(&p, "U"));
    let mut seq = Sequencer::new();

    let inv = seq.try_generate("(R,U')'", &p).unwrap();
    assert_eq!(gens(&inv), vec![u, r]);
    assert_eq!(inverses(&inv), vec![false, true]);

    let rev = seq.try_generate("(R,U')~", &p).unwrap();
    assert_eq!(gens(&rev), vec![u, r]);
    assert_eq!(inverses(&rev), vec![true, false]);

    // Reverse then inverse restores the order with every move flipped.
    for text in ["(R,U')~'", "(R,U')'~"] {
        let both = seq.try_generate(text, &p).unwrap();
        assert_eq!(gens(&both), vec![r, u]);
        assert_eq!(inverses(&both), vec![true, false]);
    }

    // Double marks cancel.
    let twice = seq.try_generate("R''", &p).unwrap();
    assert_eq!(inverses(&twice), vec![false]);
}

#[test]
fn reverse_of_single_move_is_noop() {
    let p = cube();
    let moves = Sequencer::new().try_generate("R~", &p).unwrap();
    assert_eq!(gens(&moves), vec![id(&p, "R")]);
    assert_eq!(inverses(&moves), vec![false]);
}

#[test]
fn parse_errors() {
    assert_eq!(err(""), ParseError::EmptyTerm);
    assert_eq!(err("R,,U"), ParseError::EmptyTerm);
    assert_eq!(err(",R"), ParseError::EmptyTerm);
    assert_eq!(err("()"), ParseError::EmptyTerm);
    assert_eq!(err("'"), ParseError::EmptyTerm);
    assert_eq!(err("R)"), ParseError::UnmatchedBracket { pos: 1 });
    assert_eq!(err("(R"), ParseError::UnmatchedBracket { pos: 0 });
    assert_eq!(err("(R]"), ParseError::MismatchedBracket { open: 0, close: 2 });
    assert_eq!(err("R#"), ParseError::UnexpectedChar { ch: '#', pos: 1 });
    assert_eq!(
        err("R'3"),
        ParseError::CannotParse {
            text: "R'3".into()
        }
    );
    assert_eq!(
        err("(R)U"),
        ParseError::CannotParse {
            text: "(R)U".into()
        }
    );
    assert_eq!(
        err("99999999999999999999999R"),
        ParseError::BadQuantifier {
            text: "99999999999999999999999".into()
        }
    );
    assert_eq!(
        err("R2"),
        ParseError::UnknownIdentifier { name: "R2".into() }
    );
    assert_eq!(err("a=b=R"), ParseError::MisplacedAssignment { pos: 3 });
    assert_eq!(err("R,a=U"), ParseError::MisplacedAssignment { pos: 3 });
}

#[test]
fn expansion_limit() {
    assert_eq!(
        err("1000[1000[R]]"),
        ParseError::TooManyMoves { limit: MAX_MOVES }
    );
}

#[test]
fn rejection_yields_no_moves() {
    let p = cube();
    let mut seq = Sequencer::new();
    assert!(seq.generate("R,U,Q", &p).is_empty());
    assert_eq!(seq.generate("R,U", &p).len(), 2);
}

#[test]
fn builtin_axis_permutations() {
    assert_eq!(builtin_axis("R"), Some(vector![1.0, 0.0, 0.0]));
    assert_eq!(builtin_axis("UR"), builtin_axis("RU"));
    let corner = builtin_axis("RUF").unwrap();
    for name in ["RFU", "URF", "UFR", "FRU", "FUR"] {
        assert_eq!(builtin_axis(name), Some(corner));
    }
    assert!(builtin_axis("r").is_none());
    assert!(builtin_axis("RL").is_none());
    assert!(builtin_axis("RR").is_none());
    assert!(builtin_axis("RUFD").is_none());
}

#[test]
fn axis_fallback_without_labels() {
    let mut p = unlabelled_cube();
    let mut seq = Sequencer::new();
    let moves = seq.try_generate("R,F'", &p).unwrap();
    assert_eq!(gens(&moves), vec![GeneratorId(1), GeneratorId(5)]);
    assert_eq!(inverses(&moves), vec![false, true]);

    // Quarter turn of the view about y: viewer-right is now the puzzle's front.
    p.orient_by_drag(100.0, 0.0);
    let moves = seq.try_generate("R", &p).unwrap();
    assert_eq!(gens(&moves), vec![GeneratorId(5)]);
}

#[test]
fn edge_and_corner_axes_resolve_ties_to_the_later_generator() {
    let p = unlabelled_cube();
    let moves = Sequencer::new().try_generate("UR,RU,RUF'", &p).unwrap();
    // Generator order is L R D U B F.
    assert_eq!(
        gens(&moves),
        vec![GeneratorId(3), GeneratorId(3), GeneratorId(5)]
    );
    assert_eq!(inverses(&moves), vec![false, false, true]);
}

#[test]
fn labels_ignore_orientation() {
    let mut p = cube();
    p.orient_by_drag(100.0, 0.0);
    let moves = Sequencer::new().try_generate("R", &p).unwrap();
    assert_eq!(gens(&moves), vec![id(&p, "R")]);
}

#[test]
fn stored_sequences() {
    let p = cube();
    let (r, u) = (id(&p, "R"), id(&p, "U"));
    let mut seq = Sequencer::new();

    assert!(seq.try_generate("sexy = R,U,R',U'", &p).unwrap().is_empty());
    assert_eq!(seq.stored_names(), vec!["sexy"]);

    let once = seq.try_generate("sexy", &p).unwrap();
    assert_eq!(gens(&once), vec![r, u, r, u]);
    assert_eq!(seq.try_generate("2sexy", &p).unwrap().len(), 8);

    let inv = seq.try_generate("sexy'", &p).unwrap();
    assert_eq!(gens(&inv), vec![u, r, u, r]);
    assert_eq!(inverses(&inv), vec![false, false, true, true]);

    // Stored sequences compose.
    seq.try_generate("twice = sexy, sexy", &p).unwrap();
    assert_eq!(seq.try_generate("twice", &p).unwrap().len(), 8);

    seq.forget_all();
    assert!(seq.stored_names().is_empty());
    assert!(seq.try_generate("sexy", &p).is_err());
}

#[test]
fn failed_assignment_stores_nothing() {
    let p = cube();
    let mut seq = Sequencer::new();
    assert_eq!(
        seq.try_generate("a = R, Q", &p).unwrap_err(),
        ParseError::UnknownIdentifier { name: "Q".into() }
    );
    assert!(seq.stored_names().is_empty());
}

#[test]
fn reserved_and_recursive_names() {
    let p = cube();
    let mut seq = Sequencer::new();
    assert_eq!(
        seq.try_generate("R = U", &p).unwrap_err(),
        ParseError::ReservedName { name: "R".into() }
    );
    assert_eq!(
        seq.try_generate("UR = U", &p).unwrap_err(),
        ParseError::ReservedName { name: "UR".into() }
    );

    seq.try_generate("a = R", &p).unwrap();
    assert_eq!(
        seq.try_generate("a = a, U", &p).unwrap_err(),
        ParseError::RecursiveSequence { name: "a".into() }
    );
    assert_eq!(seq.try_generate("a", &p).unwrap().len(), 1);
}

#[test]
fn generated_moves_drive_the_puzzle() {
    let mut p = cube();
    let mut seq = Sequencer::new();
    let moves = seq.try_generate("6[R,U,R',U']", &p).unwrap();
    assert_eq!(moves.len(), 24);
    p.enqueue(moves);
    p.run_until_idle(MAX_TICKS);
    assert!(p.is_solved());
    assert_eq!(p.queue.undo.len(), 24);

    p.enqueue(seq.try_generate("R,U", &p).unwrap());
    p.run_until_idle(MAX_TICKS);
    assert!(!p.is_solved());
    p.enqueue(seq.try_generate("(R,U)'", &p).unwrap());
    p.run_until_idle(MAX_TICKS);
    assert!(p.is_solved());
}
