use std::slice::Chunks;

use crate::error::InferenceError;

/// Splits `items` into consecutive chunks of at most `max_size` elements.
///
/// The chunks are produced lazily and in order; only the last one may be shorter
/// than `max_size`. An empty input yields no chunk at all.
pub fn split_list<T>(items: &[T], max_size: usize) -> Result<Chunks<'_, T>, InferenceError> {
    if max_size == 0 {
        return Err(InferenceError::InvalidArgument(
            "batch size must be a positive integer".to_string(),
        ));
    }
    Ok(items.chunks(max_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 50, 0)]
    #[case(1, 50, 1)]
    #[case(50, 50, 1)]
    #[case(51, 50, 2)]
    #[case(120, 50, 3)]
    #[case(7, 1, 7)]
    #[case(10, 3, 4)]
    fn produces_ceil_division_chunks(
        #[case] len: usize,
        #[case] max_size: usize,
        #[case] expected_chunks: usize,
    ) {
        let items: Vec<usize> = (0..len).collect();

        let chunks: Vec<&[usize]> = split_list(&items, max_size).unwrap().collect();

        assert_eq!(chunks.len(), expected_chunks);
        assert!(chunks.iter().all(|c| !c.is_empty() && c.len() <= max_size));
        assert!(
            chunks
                .iter()
                .rev()
                .skip(1)
                .all(|c| c.len() == max_size),
            "only the last chunk may be short"
        );
        assert_eq!(chunks.concat(), items);
    }

    #[test]
    fn remainder_lands_in_last_chunk() {
        let items: Vec<u32> = (0..120).collect();

        let sizes: Vec<usize> = split_list(&items, 50).unwrap().map(<[u32]>::len).collect();

        assert_eq!(sizes, vec![50, 50, 20]);
    }

    #[test]
    fn zero_size_is_rejected() {
        let result = split_list(&[1, 2, 3], 0);

        assert!(matches!(result, Err(InferenceError::InvalidArgument(_))));
    }

    #[test]
    fn chunks_can_be_restarted() {
        let items = [1, 2, 3, 4, 5];
        let chunks = split_list(&items, 2).unwrap();

        let first: Vec<_> = chunks.clone().collect();
        let second: Vec<_> = chunks.collect();

        assert_eq!(first, second);
    }
}
