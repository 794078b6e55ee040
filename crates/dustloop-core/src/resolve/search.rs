// ── Tiered fuzzy search over move inputs ──
//
// Candidates are ranked by tier first (exact, prefix, substring,
// approximate) and by distance within a tier. The approximate tier scores
// the query against the best-matching window of the candidate:
// `edits / query_len + offset / location_distance`, and keeps only scores
// at or under the threshold.

use std::cmp::Ordering;

/// How a candidate matched the query. Earlier variants rank higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    Exact,
    Prefix,
    Substring,
    Approximate,
}

/// A candidate's rank. Lower is better.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub tier: MatchTier,
    pub distance: f64,
}

impl Score {
    fn rank(&self, other: &Self) -> Ordering {
        self.tier
            .cmp(&other.tier)
            .then_with(|| self.distance.total_cmp(&other.distance))
    }
}

/// Case-insensitive matcher for short command strings like `2D` or `j.H`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveMatcher {
    /// Highest accepted approximate score (0 = exact only, 1 = anything).
    pub threshold: f64,
    /// Characters of offset that cost as much as one full edit.
    pub location_distance: f64,
}

impl Default for MoveMatcher {
    fn default() -> Self {
        Self {
            threshold: 0.6,
            location_distance: 100.0,
        }
    }
}

impl MoveMatcher {
    /// Score `candidate` against `query`, trying every tier.
    pub fn score(&self, query: &str, candidate: &str) -> Option<Score> {
        let (query, candidate) = normalize(query, candidate)?;
        self.literal(&query, &candidate)
            .or_else(|| self.approximate(&query, &candidate))
    }

    /// Score without the approximate tier.
    pub fn score_literal(&self, query: &str, candidate: &str) -> Option<Score> {
        let (query, candidate) = normalize(query, candidate)?;
        self.literal(&query, &candidate)
    }

    /// The best-ranked item, or `None` if nothing matches. Ties keep the
    /// first item in iteration order.
    pub fn best<'a, T, F>(
        &self,
        query: &str,
        items: impl IntoIterator<Item = &'a T>,
        key: F,
        approximate: bool,
    ) -> Option<(&'a T, Score)>
    where
        T: 'a + ?Sized,
        F: Fn(&T) -> Option<&str>,
    {
        let mut best: Option<(&'a T, Score)> = None;
        for item in items {
            let Some(candidate) = key(item) else {
                continue;
            };
            let scored = if approximate {
                self.score(query, candidate)
            } else {
                self.score_literal(query, candidate)
            };
            let Some(score) = scored else {
                continue;
            };
            let better = best
                .as_ref()
                .is_none_or(|(_, current)| score.rank(current) == Ordering::Less);
            if better {
                best = Some((item, score));
            }
        }
        best
    }

    fn literal(&self, query: &str, candidate: &str) -> Option<Score> {
        if candidate == query {
            return Some(Score {
                tier: MatchTier::Exact,
                distance: 0.0,
            });
        }
        if candidate.starts_with(query) {
            // Prefer candidates the query covers more of.
            let coverage = ratio(query.chars().count(), candidate.chars().count());
            return Some(Score {
                tier: MatchTier::Prefix,
                distance: 1.0 - coverage,
            });
        }
        candidate.find(query).map(|byte_offset| {
            let offset = candidate
                .get(..byte_offset)
                .map_or(0, |head| head.chars().count());
            Score {
                tier: MatchTier::Substring,
                distance: to_f64(offset) / self.location_distance,
            }
        })
    }

    fn approximate(&self, query: &str, candidate: &str) -> Option<Score> {
        let pattern: Vec<char> = query.chars().collect();
        let text: Vec<char> = candidate.chars().collect();
        let len = pattern.len();

        let max_edits = (0..=len)
            .take_while(|&edits| ratio(edits, len) <= self.threshold)
            .last()
            .unwrap_or(0);
        let shortest = len.saturating_sub(max_edits).max(1).min(text.len());
        let longest = (len + max_edits).min(text.len());

        let mut best: Option<f64> = None;
        for width in shortest..=longest {
            for (offset, window) in text.windows(width).enumerate() {
                let window: String = window.iter().collect();
                let edits = strsim::levenshtein(&window, query);
                let distance = ratio(edits, len) + to_f64(offset) / self.location_distance;
                if best.is_none_or(|b| distance < b) {
                    best = Some(distance);
                }
            }
        }

        best.filter(|&distance| distance <= self.threshold)
            .map(|distance| Score {
                tier: MatchTier::Approximate,
                distance,
            })
    }
}

fn normalize(query: &str, candidate: &str) -> Option<(String, String)> {
    let query = query.trim().to_lowercase();
    let candidate = candidate.trim().to_lowercase();
    if query.is_empty() || candidate.is_empty() {
        return None;
    }
    Some((query, candidate))
}

fn to_f64(n: usize) -> f64 {
    f64::from(u32::try_from(n).unwrap_or(u32::MAX))
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 1.0;
    }
    to_f64(part) / to_f64(whole)
}
