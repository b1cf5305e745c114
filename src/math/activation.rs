use ndarray::{Array1, ArrayBase, Data, Ix1};

/// Logistic function `1 / (1 + e^-z)`.
#[inline]
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Apply [`sigmoid`] to every element of a 1D array.
pub fn sigmoid_array<S>(z: &ArrayBase<S, Ix1>) -> Array1<f64>
where
    S: Data<Elem = f64>,
{
    z.mapv(sigmoid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_sigmoid_midpoint_and_symmetry() {
        assert_eq!(sigmoid(0.0), 0.5);
        for &z in &[0.3, 1.0, 2.5, 7.0] {
            let s = sigmoid(z) + sigmoid(-z);
            assert!((s - 1.0).abs() < 1e-12, "sigmoid({z}) + sigmoid(-{z}) = {s}");
        }
    }

    #[test]
    fn test_sigmoid_array_is_elementwise() {
        let z = array![-2.0, 0.0, 2.0];
        let s = sigmoid_array(&z);
        assert_eq!(s.len(), 3);
        assert_eq!(s[1], 0.5);
        assert!(s[0] < 0.5 && s[2] > 0.5);
        assert!((s[0] - sigmoid(-2.0)).abs() < 1e-15);
    }
}
