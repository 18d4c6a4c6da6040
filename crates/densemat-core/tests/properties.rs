#![allow(clippy::float_cmp)]

use densemat_core::Matrix;
use densemat_core::linalg::{
    LuDecomposition, QrDecomposition, det, eigenvalues_qr, inverse, matmul, matvec, pow, rank,
    solve,
};
use densemat_core::matrix::trace;
use proptest::prelude::*;

/// Strictly diagonally dominant matrices are invertible and well conditioned.
fn dominant_matrix(max_n: usize) -> impl Strategy<Value = Matrix<f64>> {
    (1..=max_n).prop_flat_map(|n| {
        (
            proptest::collection::vec(-1.0f64..1.0, n * n),
            proptest::collection::vec(1.0f64..4.0, n),
            proptest::bool::ANY,
        )
            .prop_map(move |(mut data, extra, negate)| {
                for i in 0..n {
                    let d = n as f64 + extra[i];
                    data[i * n + i] = if negate { -d } else { d };
                }
                Matrix::from_vec(data, n, n).unwrap()
            })
    })
}

fn dominant_pair(max_n: usize) -> impl Strategy<Value = (Matrix<f64>, Matrix<f64>)> {
    (1..=max_n).prop_flat_map(|n| {
        let one = move || {
            (
                proptest::collection::vec(-1.0f64..1.0, n * n),
                proptest::collection::vec(1.0f64..4.0, n),
            )
                .prop_map(move |(mut data, extra)| {
                    for i in 0..n {
                        data[i * n + i] = n as f64 + extra[i];
                    }
                    Matrix::from_vec(data, n, n).unwrap()
                })
        };
        (one(), one())
    })
}

/// General matrices with no structure that would make partial pivoting a
/// no-op.
fn general_matrix() -> impl Strategy<Value = Matrix<f64>> {
    (2usize..=6).prop_flat_map(|n| {
        proptest::collection::vec(-10.0f64..10.0, n * n)
            .prop_map(move |data| Matrix::from_vec(data, n, n).unwrap())
    })
}

/// A dominant matrix with its rows shuffled, paired with the shuffle:
/// row `k` of the result is row `perm[k]` of the dominant matrix.
fn shuffled_dominant() -> impl Strategy<Value = (Matrix<f64>, Vec<usize>)> {
    dominant_matrix(6).prop_flat_map(|d| {
        let n = d.rows();
        Just((0..n).collect::<Vec<_>>())
            .prop_shuffle()
            .prop_map(move |perm| {
                let rows = d.to_rows();
                let shuffled = perm.iter().map(|&k| rows[k].clone()).collect();
                (Matrix::from_rows(shuffled).unwrap(), perm)
            })
    })
}

/// Parity (0 even, 1 odd) of a permutation, by counting the transpositions
/// needed to sort it.
fn parity(perm: &[usize]) -> usize {
    let mut p = perm.to_vec();
    let mut transpositions = 0;
    for i in 0..p.len() {
        while p[i] != i {
            let j = p[i];
            p.swap(i, j);
            transpositions += 1;
        }
    }
    transpositions % 2
}

fn assert_close(a: &Matrix<f64>, b: &Matrix<f64>, tol: f64) -> Result<(), TestCaseError> {
    prop_assert_eq!(a.shape(), b.shape());
    for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
        prop_assert!((x - y).abs() < tol, "{} vs {} (tol {})", x, y, tol);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn inverse_times_matrix_is_identity(a in dominant_matrix(6)) {
        let inv = inverse(&a).unwrap();
        let eye = Matrix::identity(a.rows());
        assert_close(&matmul(&a, &inv).unwrap(), &eye, 1e-6)?;
        assert_close(&matmul(&inv, &a).unwrap(), &eye, 1e-6)?;
    }

    #[test]
    fn inverse_round_trip(a in dominant_matrix(6)) {
        let back = inverse(&inverse(&a).unwrap()).unwrap();
        assert_close(&back, &a, 1e-9)?;
    }

    #[test]
    fn lu_factors_reconstruct_permuted_input(a in dominant_matrix(6)) {
        let lu = LuDecomposition::decompose(&a).unwrap();
        let (l, u) = (lu.l(), lu.u());
        let n = a.rows();
        for i in 0..n {
            prop_assert_eq!(l.get(i, i).unwrap(), 1.0);
            for j in (i + 1)..n {
                prop_assert_eq!(l.get(i, j).unwrap(), 0.0);
                prop_assert_eq!(u.get(j, i).unwrap(), 0.0);
            }
        }
        let pa = matmul(&lu.p(), &a).unwrap();
        assert_close(&matmul(&l, &u).unwrap(), &pa, 1e-10)?;

        let mut seen = lu.pivots().to_vec();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..n).collect::<Vec<_>>());
        prop_assert_eq!(parity(lu.pivots()), lu.swaps() % 2);
    }

    #[test]
    fn lu_pivots_general_matrices(a in general_matrix()) {
        let lu = LuDecomposition::decompose(&a);
        prop_assume!(lu.is_ok());
        let lu = lu.unwrap();
        let n = a.rows();
        let (l, u) = (lu.l(), lu.u());
        prop_assume!((0..n).all(|i| u.get(i, i).unwrap().abs() > 1e-3));

        // Rounding error scales with the size of the factors.
        let largest = |m: &Matrix<f64>| m.as_slice().iter().fold(1.0f64, |acc, x| acc.max(x.abs()));
        let tol = 1e-12 * n as f64 * largest(&l) * largest(&u);
        let pa = matmul(&lu.p(), &a).unwrap();
        assert_close(&matmul(&l, &u).unwrap(), &pa, tol.max(1e-10))?;

        prop_assert_eq!(parity(lu.pivots()), lu.swaps() % 2);
        prop_assert!(lu.swaps() < n);
        let sign = if lu.swaps() % 2 == 1 { -1.0 } else { 1.0 };
        let product: f64 = (0..n).map(|i| u.get(i, i).unwrap()).product();
        prop_assert_eq!(lu.det(), sign * product);
    }

    #[test]
    fn lu_undoes_row_shuffle((a, perm) in shuffled_dominant()) {
        let n = a.rows();
        let lu = LuDecomposition::decompose(&a).unwrap();

        // Step i picks the shuffled position of dominant row i.
        let mut expected = vec![0; n];
        for (k, &p) in perm.iter().enumerate() {
            expected[p] = k;
        }
        prop_assert_eq!(lu.pivots(), &expected[..]);
        prop_assert_eq!(parity(&perm), lu.swaps() % 2);
        let identity: Vec<usize> = (0..n).collect();
        prop_assert_eq!(perm == identity, lu.swaps() == 0);

        let pa = matmul(&lu.p(), &a).unwrap();
        assert_close(&matmul(&lu.l(), &lu.u()).unwrap(), &pa, 1e-10)?;

        // det follows the row parity of the shuffle.
        let unshuffled = matmul(&lu.p(), &a).unwrap();
        let sign = if parity(&perm) == 1 { -1.0 } else { 1.0 };
        let d = det(&unshuffled).unwrap();
        prop_assert!((det(&a).unwrap() - sign * d).abs() <= 1e-9 * d.abs().max(1.0));
    }

    #[test]
    fn qr_is_orthogonal_and_reconstructs(a in dominant_matrix(6)) {
        let qr = QrDecomposition::decompose(&a).unwrap();
        let (q, r) = (qr.q(), qr.r());
        let n = a.rows();
        let qtq = matmul(&q.transpose(), q).unwrap();
        assert_close(&qtq, &Matrix::identity(n), 1e-8)?;
        assert_close(&matmul(q, r).unwrap(), &a, 1e-10)?;
        for i in 0..n {
            for j in 0..i {
                prop_assert!(r.get(i, j).unwrap().abs() < 1e-12);
            }
        }
    }

    #[test]
    fn det_is_multiplicative((a, b) in dominant_pair(5)) {
        let lhs = det(&matmul(&a, &b).unwrap()).unwrap();
        let rhs = det(&a).unwrap() * det(&b).unwrap();
        prop_assert!((lhs - rhs).abs() <= 1e-9 * rhs.abs().max(1.0));
    }

    #[test]
    fn det_of_inverse_is_reciprocal(a in dominant_matrix(6)) {
        let d = det(&a).unwrap();
        let d_inv = det(&inverse(&a).unwrap()).unwrap();
        prop_assert!((d * d_inv - 1.0).abs() < 1e-9);
    }

    #[test]
    fn invertible_matrices_have_full_rank(a in dominant_matrix(6)) {
        prop_assert_eq!(rank(&a), a.rows());
    }

    #[test]
    fn solve_satisfies_system(a in dominant_matrix(6), seed in proptest::collection::vec(-10.0f64..10.0, 6)) {
        let b = &seed[..a.rows()];
        let x = solve(&a, b).unwrap();
        let ax = matvec(&a, &x).unwrap();
        for (got, want) in ax.as_slice().iter().zip(b) {
            prop_assert!((got - want).abs() < 1e-9);
        }
    }

    #[test]
    fn eigenvalue_sum_matches_trace(a in dominant_matrix(5)) {
        let vals = eigenvalues_qr(&a, 50, 1e-12).unwrap();
        let sum: f64 = vals.iter().sum();
        let tr = trace(&a).unwrap();
        prop_assert!((sum - tr).abs() < 1e-9 * tr.abs().max(1.0));
    }

    #[test]
    fn pow_adds_exponents(a in dominant_matrix(4), p in 0i32..4, q in 0i32..4) {
        let lhs = pow(&a, p + q).unwrap();
        let rhs = matmul(&pow(&a, p).unwrap(), &pow(&a, q).unwrap()).unwrap();
        let scale = lhs.as_slice().iter().fold(1.0_f64, |m, x| m.max(x.abs()));
        assert_close(&lhs, &rhs, 1e-10 * scale)?;
    }
}
