//! Iterated elimination of strictly dominated pure strategies

use crate::matrix::PayoffMatrix;

/// Remove every pure strategy that is strictly worse than some other
/// remaining strategy of the same side against every remaining choice of
/// the opponent, judged on that side's own payoff component. Iterates to
/// a fixpoint: a removal can unlock further removals on either axis.
pub fn eliminate_dominated(matrix: &mut PayoffMatrix) {
    loop {
        let removed_row = remove_dominated_row(matrix);
        let removed_col = remove_dominated_col(matrix);
        if !removed_row && !removed_col {
            break;
        }
    }
}

fn remove_dominated_row(matrix: &mut PayoffMatrix) -> bool {
    let rows = matrix.rows();
    for victim in 0..rows {
        for dominator in 0..rows {
            if victim == dominator {
                continue;
            }
            let dominated = (0..matrix.cols())
                .all(|j| matrix.cells[victim][j].0 < matrix.cells[dominator][j].0);
            if dominated {
                matrix.own_actions.remove(victim);
                matrix.cells.remove(victim);
                return true;
            }
        }
    }
    false
}

fn remove_dominated_col(matrix: &mut PayoffMatrix) -> bool {
    let cols = matrix.cols();
    for victim in 0..cols {
        for dominator in 0..cols {
            if victim == dominator {
                continue;
            }
            let dominated = (0..matrix.rows())
                .all(|i| matrix.cells[i][victim].1 < matrix.cells[i][dominator].1);
            if dominated {
                matrix.foe_actions.remove(victim);
                for row in &mut matrix.cells {
                    row.remove(victim);
                }
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use zorua_battle::Action;

    fn matrix(rows: &[&str], cols: &[&str], cells: Vec<Vec<(f64, f64)>>) -> PayoffMatrix {
        PayoffMatrix {
            own_actions: rows.iter().map(|s| Action::parse(s)).collect(),
            foe_actions: cols.iter().map(|s| Action::parse(s)).collect(),
            cells,
        }
    }

    #[test]
    fn test_dominance_fixture_reduces_to_single_cell() {
        let mut m = matrix(
            &["a1", "a2"],
            &["b1", "b2"],
            vec![
                vec![(0.0, 0.0), (1.0, 1.0)],
                vec![(1.0, 1.0), (2.0, 2.0)],
            ],
        );
        eliminate_dominated(&mut m);
        assert_eq!(m.own_actions, vec![Action::parse("a2")]);
        assert_eq!(m.foe_actions, vec![Action::parse("b2")]);
        assert_eq!(m.cells, vec![vec![(2.0, 2.0)]]);
    }

    #[test]
    fn test_no_removal_without_strict_dominance() {
        // Weak dominance (ties) must not trigger removal
        let mut m = matrix(
            &["a1", "a2"],
            &["b1", "b2"],
            vec![
                vec![(1.0, 0.0), (0.0, 1.0)],
                vec![(1.0, 1.0), (0.0, 0.0)],
            ],
        );
        eliminate_dominated(&mut m);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 2);
    }

    #[test]
    fn test_fixpoint_removals_cascade() {
        // Removing a2's dominator target first unlocks a column removal
        let mut m = matrix(
            &["a1", "a2"],
            &["b1", "b2"],
            vec![
                vec![(3.0, 1.0), (1.0, 2.0)],
                vec![(2.0, 1.0), (0.0, 0.0)],
            ],
        );
        eliminate_dominated(&mut m);
        // a2 strictly dominated by a1; then b1 vs b2 on a1's row only
        assert_eq!(m.own_actions, vec![Action::parse("a1")]);
        assert_eq!(m.foe_actions, vec![Action::parse("b2")]);
    }

    #[test]
    fn test_result_has_no_dominated_strategy_left() {
        let mut m = matrix(
            &["a1", "a2", "a3"],
            &["b1", "b2", "b3"],
            vec![
                vec![(5.0, 1.0), (1.0, 4.0), (2.0, 2.0)],
                vec![(4.0, 2.0), (0.0, 3.0), (1.0, 1.0)],
                vec![(6.0, 0.0), (2.0, 1.0), (3.0, 0.5)],
            ],
        );
        eliminate_dominated(&mut m);

        for victim in 0..m.rows() {
            for dominator in 0..m.rows() {
                if victim == dominator {
                    continue;
                }
                assert!(
                    !(0..m.cols()).all(|j| m.cells[victim][j].0 < m.cells[dominator][j].0)
                );
            }
        }
        for victim in 0..m.cols() {
            for dominator in 0..m.cols() {
                if victim == dominator {
                    continue;
                }
                assert!(
                    !(0..m.rows()).all(|i| m.cells[i][victim].1 < m.cells[i][dominator].1)
                );
            }
        }
    }
}
