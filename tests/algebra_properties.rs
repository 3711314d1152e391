//! Property tests for the vector and matrix algebra.

use calcular::prelude::*;
use proptest::prelude::*;

/// Elements either exactly zero or bounded away from it, so `x * x` cannot
/// underflow and blur the norm-zero properties.
fn element() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        1.0e-3..1.0e3f64,
        -1.0e3..-1.0e-3f64,
    ]
}

fn vector(len: impl Strategy<Value = usize>) -> impl Strategy<Value = Vector<f64>> {
    len.prop_flat_map(|n| proptest::collection::vec(element(), n))
        .prop_map(Vector::from_vec)
}

fn same_len_pair() -> impl Strategy<Value = (Vector<f64>, Vector<f64>)> {
    (1usize..24).prop_flat_map(|n| {
        (
            proptest::collection::vec(element(), n).prop_map(Vector::from_vec),
            proptest::collection::vec(element(), n).prop_map(Vector::from_vec),
        )
    })
}

fn matrix() -> impl Strategy<Value = Matrix<f64>> {
    (1usize..8, 1usize..8).prop_flat_map(|(rows, cols)| {
        proptest::collection::vec(element(), rows * cols).prop_map(move |data| {
            Matrix::from_vec(rows, cols, data).expect("generated data length matches rows * cols")
        })
    })
}

proptest! {
    /// dot(u, v) == dot(v, u)
    #[test]
    fn prop_dot_commutative((u, v) in same_len_pair()) {
        let uv = u.dot(&v).expect("generated vectors have equal length");
        let vu = v.dot(&u).expect("generated vectors have equal length");
        prop_assert_eq!(uv, vu);
    }

    /// Elementwise addition is commutative.
    #[test]
    fn prop_add_commutative((u, v) in same_len_pair()) {
        let uv = u.add(&v).expect("generated vectors have equal length");
        let vu = v.add(&u).expect("generated vectors have equal length");
        prop_assert_eq!(uv, vu);
    }

    /// norm(v) >= 0, and norm(v) == 0 exactly when every element is 0.
    #[test]
    fn prop_norm_nonneg_and_zero_iff_all_zero(v in vector(0usize..24)) {
        let norm = v.norm();
        prop_assert!(norm >= 0.0);
        prop_assert_eq!(norm == 0.0, v.iter().all(|&x| x == 0.0));
    }

    /// After normalizing a vector of nonzero norm, the norm is 1.
    #[test]
    fn prop_normalize_unit_norm(v in vector(1usize..24)) {
        prop_assume!(v.norm() > 0.0);
        let mut v = v;
        v.normalize().expect("norm is nonzero");
        prop_assert!((v.norm() - 1.0).abs() < 1e-9);
    }

    /// distance(v, v) == 0
    #[test]
    fn prop_distance_to_self_is_zero(v in vector(0usize..24)) {
        prop_assert_eq!(v.distance(&v).expect("same vector, same length"), 0.0);
    }

    /// Cauchy-Schwarz: |dot(u, v)| <= norm(u) * norm(v)
    #[test]
    fn prop_cauchy_schwarz((u, v) in same_len_pair()) {
        let dot = u.dot(&v).expect("generated vectors have equal length").abs();
        let bound = u.norm() * v.norm();
        prop_assert!(dot <= bound * (1.0 + 1e-12) + 1e-12);
    }

    /// transpose(transpose(M)) == M
    #[test]
    fn prop_transpose_round_trip(m in matrix()) {
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    /// M * I == M and I * M == M
    #[test]
    fn prop_matmul_identity(m in matrix()) {
        let right = m.matmul(&Matrix::eye(m.n_cols())).expect("inner dimensions match");
        prop_assert_eq!(&right, &m);
        let left = Matrix::eye(m.n_rows()).matmul(&m).expect("inner dimensions match");
        prop_assert_eq!(&left, &m);
    }

    /// insert_column preserves existing columns in order and places the new
    /// one at the requested index.
    #[test]
    fn prop_insert_column_layout(m in matrix(), index_seed in any::<proptest::sample::Index>()) {
        let index = index_seed.index(m.n_cols() + 1);
        let column = Vector::from_vec(vec![0.5; m.n_rows()]);
        let wider = m.insert_column(index, &column).expect("index is in 0..=cols");

        prop_assert_eq!(wider.shape(), (m.n_rows(), m.n_cols() + 1));
        prop_assert_eq!(&wider.column(index), &column);
        for j in 0..index {
            prop_assert_eq!(wider.column(j), m.column(j));
        }
        for j in index..m.n_cols() {
            prop_assert_eq!(wider.column(j + 1), m.column(j));
        }
    }

    /// linspace hits both endpoints and spaces points evenly.
    #[test]
    fn prop_linspace_endpoints(
        start in -1.0e3..1.0e3f64,
        end in -1.0e3..1.0e3f64,
        n in 2usize..64,
    ) {
        let v = Vector::linspace(start, end, n).expect("n >= 2");
        prop_assert_eq!(v.len(), n);
        prop_assert_eq!(v[0], start);
        let tol = 1e-9 * (1.0 + start.abs() + end.abs());
        prop_assert!((v[n - 1] - end).abs() <= tol);
    }

    /// The same seed reproduces the same random containers.
    #[test]
    fn prop_random_fill_deterministic(seed in any::<u64>(), len in 0usize..64) {
        prop_assert_eq!(
            Vector::random_uniform(len, seed),
            Vector::random_uniform(len, seed)
        );
        prop_assert_eq!(
            Matrix::random_uniform(4, 4, seed),
            Matrix::random_uniform(4, 4, seed)
        );
    }

    /// Population variance is non-negative and std_dev is its square root.
    #[test]
    fn prop_variance_nonneg(v in vector(1usize..24)) {
        let var = variance(&v).expect("vector is non-empty");
        let sd = std_dev(&v).expect("vector is non-empty");
        prop_assert!(var >= 0.0);
        prop_assert_eq!(sd, var.sqrt());
    }
}
