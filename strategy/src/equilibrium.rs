//! Nash equilibria by support enumeration, and equilibrium selection

use rand::Rng;

use crate::matrix::PayoffMatrix;

/// Numerical slack for probabilities and indifference checks
const EPS: f64 = 1e-9;

/// Distance under which two equilibria count as the same
const DEDUPE_EPS: f64 = 1e-6;

/// A (possibly mixed) strategy pair with its expected payoffs.
/// Probability vectors are indexed like the matrix rows/columns they
/// were solved on.
#[derive(Debug, Clone)]
pub struct Equilibrium {
    pub own: Vec<f64>,
    pub foe: Vec<f64>,
    pub payoffs: (f64, f64),
}

/// All Nash equilibria of the general-sum bimatrix game, by enumeration
/// of equal-size supports. For each candidate support pair a small
/// linear system pins down the opponent mix that makes every supported
/// strategy indifferent; the pair is kept if both mixes are proper
/// probability vectors and no outside strategy profits by deviating.
pub fn solve_equilibria(matrix: &PayoffMatrix) -> Vec<Equilibrium> {
    let rows = matrix.rows();
    let cols = matrix.cols();
    let mut found: Vec<Equilibrium> = Vec::new();

    for k in 1..=rows.min(cols) {
        for row_support in subsets(rows, k) {
            for col_support in subsets(cols, k) {
                if let Some(eq) = try_support(matrix, &row_support, &col_support) {
                    if !found.iter().any(|e| same_equilibrium(e, &eq)) {
                        found.push(eq);
                    }
                }
            }
        }
    }
    found
}

/// The degenerate-game fallback: every pure action pair as a one-hot
/// candidate, whether or not it is stable.
pub fn pure_fallback(matrix: &PayoffMatrix) -> Vec<Equilibrium> {
    let mut candidates = Vec::with_capacity(matrix.rows() * matrix.cols());
    for i in 0..matrix.rows() {
        for j in 0..matrix.cols() {
            let mut own = vec![0.0; matrix.rows()];
            let mut foe = vec![0.0; matrix.cols()];
            own[i] = 1.0;
            foe[j] = 1.0;
            candidates.push(Equilibrium {
                own,
                foe,
                payoffs: matrix.cells[i][j],
            });
        }
    }
    candidates
}

/// Pick one equilibrium: drop Pareto-dominated candidates, keep those
/// with the most balanced expected payoffs (minimal spread between the
/// two players), then break remaining ties uniformly at random.
pub fn select_equilibrium<R: Rng>(
    candidates: Vec<Equilibrium>,
    rng: &mut R,
) -> Option<Equilibrium> {
    if candidates.is_empty() {
        return None;
    }

    let undominated: Vec<&Equilibrium> = candidates
        .iter()
        .filter(|a| {
            !candidates
                .iter()
                .any(|b| pareto_dominates(b.payoffs, a.payoffs))
        })
        .collect();

    // Standard deviation of the two expected payoffs: prefers balanced
    // outcomes over lopsided ones with the same sum
    let spread = |p: (f64, f64)| (p.0 - p.1).abs() / 2.0;
    let best = undominated
        .iter()
        .map(|e| spread(e.payoffs))
        .fold(f64::INFINITY, f64::min);
    let balanced: Vec<&Equilibrium> = undominated
        .into_iter()
        .filter(|e| spread(e.payoffs) <= best + EPS)
        .collect();

    let pick = rng.gen_range(0..balanced.len());
    Some(balanced[pick].clone())
}

fn pareto_dominates(a: (f64, f64), b: (f64, f64)) -> bool {
    a.0 >= b.0 - EPS && a.1 >= b.1 - EPS && (a.0 > b.0 + EPS || a.1 > b.1 + EPS)
}

fn same_equilibrium(a: &Equilibrium, b: &Equilibrium) -> bool {
    let close = |x: &[f64], y: &[f64]| {
        x.iter().zip(y).all(|(p, q)| (p - q).abs() < DEDUPE_EPS)
    };
    close(&a.own, &b.own) && close(&a.foe, &b.foe)
}

/// All k-element subsets of `0..n`, as sorted index lists
fn subsets(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    for mask in 0u32..(1 << n) {
        if mask.count_ones() as usize == k {
            out.push((0..n).filter(|i| mask & (1 << i) != 0).collect());
        }
    }
    out
}

/// Solve one support pair. Returns the equilibrium if the indifference
/// systems are solvable and all stability checks pass.
fn try_support(
    matrix: &PayoffMatrix,
    row_support: &[usize],
    col_support: &[usize],
) -> Option<Equilibrium> {
    let k = row_support.len();

    // Column mix y making every supported row worth the same value u.
    // Unknowns: y_0..y_{k-1}, u.
    let mut a = vec![vec![0.0; k + 1]; k + 1];
    let mut b = vec![0.0; k + 1];
    for (r, &i) in row_support.iter().enumerate() {
        for (c, &j) in col_support.iter().enumerate() {
            a[r][c] = matrix.cells[i][j].0;
        }
        a[r][k] = -1.0;
    }
    a[k][..k].fill(1.0);
    b[k] = 1.0;
    let y_sol = solve_linear(a, b)?;
    let (y, u) = (&y_sol[..k], y_sol[k]);
    if y.iter().any(|&p| p < -EPS) {
        return None;
    }

    // Row mix x making every supported column worth v
    let mut a = vec![vec![0.0; k + 1]; k + 1];
    let mut b = vec![0.0; k + 1];
    for (c, &j) in col_support.iter().enumerate() {
        for (r, &i) in row_support.iter().enumerate() {
            a[c][r] = matrix.cells[i][j].1;
        }
        a[c][k] = -1.0;
    }
    a[k][..k].fill(1.0);
    b[k] = 1.0;
    let x_sol = solve_linear(a, b)?;
    let (x, v) = (&x_sol[..k], x_sol[k]);
    if x.iter().any(|&p| p < -EPS) {
        return None;
    }

    // No outside pure strategy may profit by deviating
    for i in 0..matrix.rows() {
        if row_support.contains(&i) {
            continue;
        }
        let payoff: f64 = col_support
            .iter()
            .enumerate()
            .map(|(c, &j)| matrix.cells[i][j].0 * y[c])
            .sum();
        if payoff > u + EPS {
            return None;
        }
    }
    for j in 0..matrix.cols() {
        if col_support.contains(&j) {
            continue;
        }
        let payoff: f64 = row_support
            .iter()
            .enumerate()
            .map(|(r, &i)| matrix.cells[i][j].1 * x[r])
            .sum();
        if payoff > v + EPS {
            return None;
        }
    }

    let mut own = vec![0.0; matrix.rows()];
    let mut foe = vec![0.0; matrix.cols()];
    for (r, &i) in row_support.iter().enumerate() {
        own[i] = x[r].max(0.0);
    }
    for (c, &j) in col_support.iter().enumerate() {
        foe[j] = y[c].max(0.0);
    }
    normalize(&mut own);
    normalize(&mut foe);

    Some(Equilibrium {
        own,
        foe,
        payoffs: (u, v),
    })
}

fn normalize(p: &mut [f64]) {
    let total: f64 = p.iter().sum();
    if total > 0.0 {
        for v in p.iter_mut() {
            *v /= total;
        }
    }
}

/// Gaussian elimination with partial pivoting; `None` on a singular
/// system (a degenerate support).
fn solve_linear(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Option<Vec<f64>> {
    let n = b.len();
    for col in 0..n {
        let pivot = (col..n)
            .max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))?;
        if a[pivot][col].abs() < 1e-12 {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in (col + 1)..n {
            let factor = a[row][col] / a[col][col];
            for c in col..n {
                a[row][c] -= factor * a[col][c];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let mut sum = b[row];
        for c in (row + 1)..n {
            sum -= a[row][c] * x[c];
        }
        x[row] = sum / a[row][row];
    }
    Some(x)
}
