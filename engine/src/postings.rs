use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One keyword's occurrence count in one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub document: String,
    pub frequency: u32,
}

impl Occurrence {
    pub fn new(document: impl Into<String>, frequency: u32) -> Self {
        Self {
            document: document.into(),
            frequency,
        }
    }
}

/// Per-keyword occurrences, one entry per document, kept sorted by
/// descending frequency after every insertion.
pub type PostingList = Vec<Occurrence>;

/// Move the last element of `postings` into frequency order.
///
/// All elements except the last must already be sorted by descending
/// frequency. The destination is found by binary search over that sorted
/// prefix: probing stops as soon as a midpoint's frequency equals the new
/// element's, and the element is placed immediately after that midpoint;
/// if the interval is exhausted without an equal hit, the element is placed
/// at the final lower bound.
///
/// Returns the probed midpoints in visitation order, or `None` when the
/// list has a single element and no search is needed.
pub fn insert_last(postings: &mut PostingList) -> Option<Vec<usize>> {
    let len = postings.len();
    if len <= 1 {
        return None;
    }

    let target = postings[len - 1].frequency;
    let mut midpoints = Vec::new();
    let mut min: isize = 0;
    let mut max: isize = len as isize - 2;
    let mut tie: Option<usize> = None;

    while min <= max {
        let mid = ((min + max) / 2) as usize;
        midpoints.push(mid);
        match postings[mid].frequency.cmp(&target) {
            Ordering::Equal => {
                tie = Some(mid);
                break;
            }
            // Higher frequencies sit at lower indices, so a smaller target
            // belongs in the right half.
            Ordering::Greater => min = mid as isize + 1,
            Ordering::Less => max = mid as isize - 1,
        }
    }

    let destination = match tie {
        Some(mid) => mid + 1,
        None => min as usize,
    };
    let moved = postings.remove(len - 1);
    postings.insert(destination, moved);

    Some(midpoints)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(entries: &[(&str, u32)]) -> PostingList {
        entries
            .iter()
            .map(|&(doc, freq)| Occurrence::new(doc, freq))
            .collect()
    }

    fn is_descending(postings: &PostingList) -> bool {
        postings.windows(2).all(|w| w[0].frequency >= w[1].frequency)
    }

    #[test]
    fn single_element_needs_no_search() {
        let mut postings = list(&[("d1", 7)]);
        assert_eq!(insert_last(&mut postings), None);
        assert_eq!(postings, list(&[("d1", 7)]));
    }

    #[test]
    fn tie_lands_after_halting_midpoint() {
        let mut postings = list(&[("d1", 5), ("d2", 3), ("d3", 3), ("d4", 3)]);
        let midpoints = insert_last(&mut postings);
        assert_eq!(midpoints, Some(vec![1]));
        assert_eq!(
            postings,
            list(&[("d1", 5), ("d2", 3), ("d4", 3), ("d3", 3)])
        );
    }

    #[test]
    fn inserts_between_frequencies() {
        let mut postings = list(&[("d1", 9), ("d2", 7), ("d3", 5), ("d4", 3), ("d5", 6)]);
        let midpoints = insert_last(&mut postings);
        assert_eq!(midpoints, Some(vec![1, 2]));
        assert_eq!(
            postings,
            list(&[("d1", 9), ("d2", 7), ("d5", 6), ("d3", 5), ("d4", 3)])
        );
    }

    #[test]
    fn new_maximum_moves_to_front() {
        let mut postings = list(&[("d1", 5), ("d2", 3), ("d3", 6)]);
        let midpoints = insert_last(&mut postings);
        assert_eq!(midpoints, Some(vec![0]));
        assert_eq!(
            postings,
            list(&[("d3", 6), ("d1", 5), ("d2", 3)])
        );
    }

    #[test]
    fn new_minimum_stays_last() {
        let mut postings = list(&[("d1", 9), ("d2", 5), ("d3", 3), ("d4", 2)]);
        let midpoints = insert_last(&mut postings);
        assert_eq!(midpoints, Some(vec![1, 2]));
        assert_eq!(
            postings,
            list(&[("d1", 9), ("d2", 5), ("d3", 3), ("d4", 2)])
        );
    }

    #[test]
    fn order_is_restored_for_every_arrival_order() {
        let frequencies = [4u32, 8, 1, 8, 6, 2, 9, 5];
        let mut postings = PostingList::new();
        for (i, freq) in frequencies.iter().enumerate() {
            postings.push(Occurrence::new(format!("d{i}"), *freq));
            insert_last(&mut postings);
            assert!(is_descending(&postings), "unsorted after step {i}");
        }
        assert_eq!(postings.len(), frequencies.len());
    }
}
