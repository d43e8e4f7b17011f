use crate::image_classifier::interface::{ClassifierError, Prediction};
use crate::image_classifier::labels;
use tract_onnx::prelude::*;

/// Copies a score tensor into host memory and releases the tensor.
pub fn materialize_scores(scores: Tensor) -> Result<Vec<f32>, ClassifierError> {
    let values: Vec<f32> = {
        let view = scores
            .to_array_view::<f32>()
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;
        view.iter().copied().collect()
    };
    drop(scores);
    Ok(values)
}

/// Pairs each score with its index, sorts descending by score, takes the
/// first `min(k, values.len())`, and maps indices through the label table.
/// The sort is stable, so ties keep their original index order.
pub fn top_k_classes(values: &[f32], k: usize) -> Vec<Prediction> {
    let mut indexed: Vec<(usize, f32)> = values.iter().copied().enumerate().collect();
    indexed.sort_by(|a, b| b.1.total_cmp(&a.1));
    indexed.truncate(k.min(values.len()));

    indexed
        .into_iter()
        .filter_map(|(index, score)| {
            labels::label(index).map(|label| Prediction {
                label: label.to_string(),
                score,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_by_non_increasing_score() {
        let values = vec![0.1, 0.9, 0.5, 0.7, 0.3];

        let ranked = top_k_classes(&values, 5);

        assert_eq!(ranked.len(), 5);
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert_eq!(ranked[0].score, 0.9);
        assert_eq!(ranked[0].label, labels::LABELS[1]);
    }

    #[test]
    fn test_length_is_min_of_k_and_score_count() {
        let values = vec![0.2; 10];

        assert_eq!(top_k_classes(&values, 3).len(), 3);
        assert_eq!(top_k_classes(&values, 10).len(), 10);
        assert_eq!(top_k_classes(&values, 1000).len(), 10);
        assert_eq!(top_k_classes(&values, 0).len(), 0);
    }

    #[test]
    fn test_k_beyond_table_size_clamps_to_table() {
        let values = vec![0.5; labels::LABELS.len()];

        let ranked = top_k_classes(&values, 1000);

        assert_eq!(ranked.len(), labels::LABELS.len());
    }

    #[test]
    fn test_ties_keep_index_order() {
        let values = vec![0.5, 0.9, 0.5, 0.5];

        let ranked = top_k_classes(&values, 4);

        assert_eq!(ranked[0].label, labels::LABELS[1]);
        assert_eq!(ranked[1].label, labels::LABELS[0]);
        assert_eq!(ranked[2].label, labels::LABELS[2]);
        assert_eq!(ranked[3].label, labels::LABELS[3]);
    }

    #[test]
    fn test_every_label_exists_in_table() {
        let values: Vec<f32> = (0..labels::LABELS.len())
            .map(|i| (i as f32 * 13.0) % 7.0)
            .collect();

        let ranked = top_k_classes(&values, 5);

        assert_eq!(ranked.len(), 5);
        for prediction in &ranked {
            assert!(labels::LABELS.contains(&prediction.label.as_str()));
        }
    }

    #[test]
    fn test_ranking_is_stable_across_calls() {
        let values: Vec<f32> = (0..labels::LABELS.len())
            .map(|i| ((i * 31) % 101) as f32 / 101.0)
            .collect();

        let first = top_k_classes(&values, 5);
        let second = top_k_classes(&values, 5);

        assert_eq!(first, second);
    }

    #[test]
    fn test_materialize_scores_flattens_batched_tensor() {
        let tensor = tract_ndarray::Array2::from_shape_vec((1, 4), vec![0.1f32, 0.2, 0.3, 0.4])
            .unwrap()
            .into_tensor();

        let values = materialize_scores(tensor).unwrap();

        assert_eq!(values, vec![0.1, 0.2, 0.3, 0.4]);
    }
}
