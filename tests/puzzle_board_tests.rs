//! Puzzle board tests: bridge edits, counts, candidate scan, solver hook.

use board_rules::{
    attempt_solve, Bridge, BridgeError, Direction, Island, PuzzleBoard, PuzzlePreset, SolveOutcome, Violation,
};

/// Two islands facing each other across an empty row.
#[test]
fn test_two_island_scenario() {
    let mut board = PuzzleBoard::from_definition(&[(0, 0, 2), (0, 5, 2)], 6);
    let a = *board.island(0, 0).unwrap();
    let b = *board.island(0, 5).unwrap();

    assert_eq!(board.find_potential_connections(), vec![(a, b)]);

    board.add_bridge(a, b, 2).unwrap();
    assert_eq!(
        board.add_bridge(a, b, 1),
        Err(BridgeError::DuplicateBridge { first: a, second: b })
    );
    assert!(board.is_solved());
}

/// A bridge added as (a, b) is found and blocked as (b, a).
#[test]
fn test_bridge_symmetry() {
    let mut board = PuzzleBoard::from_definition(&[(2, 1, 1), (5, 1, 1)], 6);
    let a = *board.island(2, 1).unwrap();
    let b = *board.island(5, 1).unwrap();

    board.add_bridge(a, b, 1).unwrap();
    assert_eq!(board.bridge_between(&b, &a), board.bridge_between(&a, &b));
    assert!(board.bridge_between(&b, &a).is_some());
    assert!(matches!(
        board.add_bridge(b, a, 2),
        Err(BridgeError::DuplicateBridge { .. })
    ));
}

/// Counts track exactly the bridges touching each island.
#[test]
fn test_count_conservation_on_preset() {
    let mut board = PuzzlePreset::Small.board();
    let candidates = board.find_potential_connections();

    for (i, (a, b)) in candidates.iter().enumerate() {
        let count = if i % 2 == 0 { 1 } else { 2 };
        board.add_bridge(*a, *b, count).unwrap();
    }

    for island in board.islands() {
        let expected: u32 = board
            .bridges()
            .iter()
            .filter(|bridge| bridge.island1() == island || bridge.island2() == island)
            .map(|bridge| u32::from(bridge.count()))
            .sum();
        assert_eq!(board.island_bridge_count(island), expected);
    }

    let total: u32 = board.islands().iter().map(|i| board.island_bridge_count(i)).sum();
    let spans: u32 = board.bridges().iter().map(|b| u32::from(b.count())).sum();
    assert_eq!(total, spans * 2);
}

/// Candidate pairs are unique and every pair is a mutual line of sight.
#[test]
fn test_candidates_are_mutual_and_unique() {
    for preset in PuzzlePreset::ALL {
        let board = preset.board();
        let candidates = board.find_potential_connections();

        for (i, (a, b)) in candidates.iter().enumerate() {
            assert_ne!(a, b);
            assert!(a.row == b.row || a.col == b.col);
            for (c, d) in &candidates[i + 1..] {
                assert!(!(a == c && b == d), "{:?}: duplicate {} {}", preset, a, b);
                assert!(!(a == d && b == c), "{:?}: reversed {} {}", preset, a, b);
            }

            let seen_back = Direction::ALL
                .iter()
                .filter_map(|&d| board.find_next_island(b, d))
                .any(|island| island == a);
            assert!(seen_back, "{:?}: {} cannot see {}", preset, b, a);
        }
    }
}

/// Islands on the grid edge only look inward.
#[test]
fn test_edge_island_rays() {
    let board = PuzzleBoard::from_definition(&[(0, 0, 1), (0, 3, 1), (3, 0, 1)], 4);
    let corner = *board.island(0, 0).unwrap();

    assert_eq!(board.find_next_island(&corner, Direction::Up), None);
    assert_eq!(board.find_next_island(&corner, Direction::Left), None);
    assert_eq!(board.find_next_island(&corner, Direction::Right).map(Island::position), Some((0, 3)));
    assert_eq!(board.find_next_island(&corner, Direction::Down).map(Island::position), Some((3, 0)));
    assert_eq!(board.find_potential_connections().len(), 2);
}

/// The board accepts geometrically wrong bridges; the checker reports them.
#[test]
fn test_permissive_writes_then_check() {
    let mut board = PuzzleBoard::from_definition(&[(0, 0, 1), (1, 1, 1), (0, 2, 1)], 3);
    let a = *board.island(0, 0).unwrap();
    let diagonal = *board.island(1, 1).unwrap();
    let c = *board.island(0, 2).unwrap();

    board.add_bridge(a, diagonal, 1).unwrap();
    board.add_bridge(a, c, 2).unwrap();

    let violations = board.violations();
    assert!(violations.contains(&Violation::NotAligned { bridge: Bridge::new(a, diagonal, 1) }));
    assert!(violations.contains(&Violation::OverCapacity { island: a, count: 3 }));
    assert!(violations.contains(&Violation::OverCapacity { island: c, count: 2 }));
    assert!(!board.is_consistent());
}

/// A backtracking solver over candidate pairs, plugged in as a closure.
#[test]
fn test_external_solver_completes_board() {
    fn search(board: &mut PuzzleBoard, candidates: &[(Island, Island)], next: usize) -> bool {
        if board.is_solved() && board.is_consistent() {
            return true;
        }
        if next == candidates.len() || !board.is_consistent() {
            return false;
        }

        let (a, b) = candidates[next];
        for count in [2, 1] {
            let bridge = Bridge::new(a, b, count);
            if board.add_bridge(a, b, count).is_ok() {
                if search(board, candidates, next + 1) {
                    return true;
                }
                board.remove_bridge(&bridge);
            }
        }
        search(board, candidates, next + 1)
    }

    let mut board = PuzzleBoard::from_definition(&[(0, 0, 3), (0, 3, 2), (3, 0, 2), (3, 3, 1)], 4);
    let mut solver = |board: &mut PuzzleBoard| -> anyhow::Result<bool> {
        let candidates = board.find_potential_connections();
        Ok(search(board, &candidates, 0))
    };

    assert_eq!(attempt_solve(&mut solver, &mut board), SolveOutcome::Solved);
    assert!(board.is_solved());
    assert!(board.violations().is_empty());
}

/// Resetting keeps the islands; reloading builds a fresh board.
#[test]
fn test_reset_and_reload() {
    let mut board = PuzzlePreset::Small.board();
    let (a, b) = board.find_potential_connections()[0];
    board.add_bridge(a, b, 1).unwrap();

    board.clear_bridges();
    assert!(board.bridges().is_empty());
    assert_eq!(board.islands().len(), 10);

    let reloaded = PuzzlePreset::Medium.board();
    assert_eq!(reloaded.size(), 10);
    assert!(reloaded.bridges().is_empty());
    assert_eq!(board.size(), 6);
}
