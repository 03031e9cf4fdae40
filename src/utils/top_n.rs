use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Keeps the `n` largest values seen so far, using at most `n` slots.
#[derive(Debug, Clone)]
pub struct TopN<T: Ord> {
    limit: usize,
    heap: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> TopN<T> {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            heap: BinaryHeap::with_capacity(limit),
        }
    }

    pub fn push(&mut self, value: T) {
        if self.limit == 0 {
            return;
        }

        if self.heap.len() < self.limit {
            self.heap.push(Reverse(value));
        } else if let Some(mut smallest) = self.heap.peek_mut() {
            if value > smallest.0 {
                *smallest = Reverse(value);
            }
        }
    }

    /// The retained values, smallest first.
    pub fn into_sorted_vec(self) -> Vec<T> {
        // Sorting `Reverse` ascending yields the inner values descending.
        let mut values: Vec<T> = self
            .heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(value)| value)
            .collect();
        values.reverse();
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn top_n(values: &[u64], n: usize) -> Vec<u64> {
        let mut top = TopN::new(n);
        for &value in values {
            top.push(value);
        }
        top.into_sorted_vec()
    }

    #[test]
    fn test_top_n() {
        let inputs = [100, 200, 300, 400, 100, 500];
        assert_eq!(top_n(&inputs, 3), vec![300, 400, 500]);
        assert_eq!(top_n(&inputs, 5), vec![100, 200, 300, 400, 500]);
        assert_eq!(top_n(&[200, 100], 3), vec![100, 200]);
        assert_eq!(top_n(&[], 3), Vec::<u64>::new());
    }

    #[test]
    fn test_top_zero_keeps_nothing() {
        assert!(top_n(&[1, 2, 3], 0).is_empty());
    }

    #[test]
    fn test_push_replaces_smallest() {
        let mut top = TopN::new(2);
        for value in [5, 1, 7, 3, 9] {
            top.push(value);
        }
        assert_eq!(top.into_sorted_vec(), vec![7, 9]);
    }
}
