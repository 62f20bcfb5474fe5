//! Running top-K accumulator with a stable tie-break

use super::ScoredCombination;

/// Keeps the K best-scoring combinations seen so far, descending
///
/// Ties go to the earliest offer, so feeding candidates in enumeration
/// order reproduces the same winners on every run.
#[derive(Debug, Default)]
pub(crate) struct TopK {
    k: usize,
    entries: Vec<ScoredCombination>,
}

impl TopK {
    pub fn new(k: usize) -> Self {
        TopK {
            k,
            entries: Vec::with_capacity(k.min(64)),
        }
    }

    pub fn offer(&mut self, candidate: ScoredCombination) {
        if self.k == 0 {
            return;
        }
        if self.entries.len() == self.k {
            // A tie with the current cutoff keeps the earlier entry
            if candidate.score <= self.entries[self.k - 1].score {
                return;
            }
        }
        let pos = self
            .entries
            .partition_point(|e| e.score >= candidate.score);
        self.entries.insert(pos, candidate);
        self.entries.truncate(self.k);
    }

    /// Fold another accumulator in; offer order decides ties, so merge
    /// partitions in enumeration order
    pub fn merge(&mut self, other: TopK) {
        for entry in other.entries {
            self.offer(entry);
        }
    }

    pub fn into_sorted(self) -> Vec<ScoredCombination> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemId;

    fn scored(tag: &str, score: f64) -> ScoredCombination {
        ScoredCombination {
            equipment_ids: vec![ItemId::from(tag)],
            equipment_names: vec![tag.to_string()],
            score,
            final_damage: score,
            three_hit_total: 0.0,
            first_hit: 0.0,
            dot_damage: 0.0,
        }
    }

    fn tags(top: &TopK) -> Vec<String> {
        top.entries
            .iter()
            .map(|e| e.equipment_names[0].clone())
            .collect()
    }

    #[test]
    fn test_keeps_descending_top_k() {
        let mut top = TopK::new(2);
        top.offer(scored("a", 1.0));
        top.offer(scored("b", 3.0));
        top.offer(scored("c", 2.0));
        assert_eq!(tags(&top), vec!["b", "c"]);
    }

    #[test]
    fn test_ties_keep_first_offered() {
        let mut top = TopK::new(2);
        top.offer(scored("first", 5.0));
        top.offer(scored("second", 5.0));
        top.offer(scored("third", 5.0));
        assert_eq!(tags(&top), vec!["first", "second"]);
    }

    #[test]
    fn test_merge_respects_offer_order() {
        let mut left = TopK::new(1);
        left.offer(scored("early", 5.0));
        let mut late = TopK::new(1);
        late.offer(scored("late", 5.0));
        left.merge(late);
        assert_eq!(tags(&left), vec!["early"]);
    }

    #[test]
    fn test_zero_k_stays_empty() {
        let mut top = TopK::new(0);
        top.offer(scored("a", 1.0));
        assert!(top.into_sorted().is_empty());
    }
}
