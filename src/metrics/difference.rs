use ndarray::{Array, ArrayBase, Data, Dimension, Zip};

use crate::error::MetricError;

/// Elementwise `actual - predicted`.
///
/// Shapes must match exactly; nothing is broadcast.
pub(crate) fn difference<S, T, D>(
    actual: &ArrayBase<S, D>,
    predicted: &ArrayBase<T, D>,
) -> Result<Array<f64, D>, MetricError>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
    D: Dimension,
{
    if actual.shape() != predicted.shape() {
        return Err(MetricError::ShapeMismatch {
            predicted: predicted.shape().to_vec(),
            label: actual.shape().to_vec(),
        });
    }

    Ok(Zip::from(actual)
        .and(predicted)
        .map_collect(|&a, &p| a - p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array1};

    #[test]
    fn subtracts_predicted_from_actual() {
        let actual = array![1.0, 2.0, 3.0];
        let predicted = array![0.5, 2.0, 4.0];
        let diff = difference(&actual, &predicted).unwrap();
        assert_eq!(diff, array![0.5, 0.0, -1.0]);
    }

    #[test]
    fn keeps_two_dimensional_shape() {
        let actual = array![[1.0, 2.0], [3.0, 4.0]];
        let predicted = array![[1.0, 1.0], [1.0, 1.0]];
        let diff = difference(&actual, &predicted.view()).unwrap();
        assert_eq!(diff.shape(), &[2, 2]);
        assert_eq!(diff, array![[0.0, 1.0], [2.0, 3.0]]);
    }

    #[test]
    fn reports_both_shapes_on_mismatch() {
        let actual = array![1.0, 2.0, 3.0];
        let predicted = array![1.0, 2.0];
        match difference(&actual, &predicted) {
            Err(MetricError::ShapeMismatch { predicted, label }) => {
                assert_eq!(predicted, vec![2]);
                assert_eq!(label, vec![3]);
            }
            other => panic!("expected ShapeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn does_not_broadcast_single_element() {
        let actual = array![1.0, 2.0, 3.0];
        let predicted = array![1.0];
        assert!(difference(&actual, &predicted).is_err());
    }

    #[test]
    fn empty_inputs_give_empty_difference() {
        let empty: Array1<f64> = Array1::zeros(0);
        let diff = difference(&empty, &empty).unwrap();
        assert!(diff.is_empty());
    }
}
