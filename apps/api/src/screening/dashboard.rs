//! Dashboard analytics — aggregate figures over the candidate collection.
//! Pure functions; the store stays the only owner of the data.

use serde::Serialize;

use crate::models::candidate::{Candidate, CandidateStatus};

/// Score histogram bucket boundaries, upper bound exclusive except the last.
const SCORE_BUCKETS: [(&str, f64, f64); 4] = [
    ("0-40", 0.0, 40.0),
    ("40-60", 40.0, 60.0),
    ("60-80", 60.0, 80.0),
    ("80-100", 80.0, 100.1),
];

#[derive(Debug, Serialize)]
pub struct ScoreBucket {
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    pub shortlisted: usize,
    pub rejected: usize,
    pub pending: usize,
    /// Rounded mean score; 0 when there are no candidates.
    pub average_score: u32,
    pub score_ranges: Vec<ScoreBucket>,
}

pub fn compute_dashboard_stats(candidates: &[Candidate]) -> DashboardStats {
    let total = candidates.len();
    let shortlisted = candidates
        .iter()
        .filter(|c| c.status == CandidateStatus::Shortlisted)
        .count();
    let rejected = candidates
        .iter()
        .filter(|c| c.status == CandidateStatus::Rejected)
        .count();
    let pending = total - shortlisted - rejected;

    let average_score = if total > 0 {
        let sum: f64 = candidates.iter().map(|c| c.score).sum();
        (sum / total as f64).round() as u32
    } else {
        0
    };

    let score_ranges = SCORE_BUCKETS
        .iter()
        .map(|&(label, lo, hi)| ScoreBucket {
            label,
            count: candidates
                .iter()
                .filter(|c| c.score >= lo && c.score < hi)
                .count(),
        })
        .collect();

    DashboardStats {
        total,
        shortlisted,
        rejected,
        pending,
        average_score,
        score_ranges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::{AnalysisResponse, Recommendation};

    fn candidate(score: f64, recommendation: Recommendation) -> Candidate {
        Candidate::from_analysis(
            "Nina Wright".to_string(),
            "UX Designer".to_string(),
            "nina.wright@example.com".to_string(),
            "resume".to_string(),
            "jd".to_string(),
            AnalysisResponse {
                score,
                reasoning: "aggregate fixture".to_string(),
                key_skills: vec![],
                recommendation,
            },
        )
    }

    #[test]
    fn test_stats_empty_collection() {
        let stats = compute_dashboard_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_score, 0);
        assert!(stats.score_ranges.iter().all(|b| b.count == 0));
    }

    #[test]
    fn test_stats_counts_and_average() {
        let candidates = vec![
            candidate(90.0, Recommendation::Shortlist),
            candidate(30.0, Recommendation::Reject),
            candidate(65.0, Recommendation::Review),
            candidate(55.0, Recommendation::Review),
        ];
        let stats = compute_dashboard_stats(&candidates);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.shortlisted, 1);
        assert_eq!(stats.rejected, 1);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.average_score, 60); // (90+30+65+55)/4 = 60
    }

    #[test]
    fn test_score_histogram_bucket_edges() {
        let candidates = vec![
            candidate(0.0, Recommendation::Review),
            candidate(39.9, Recommendation::Review),
            candidate(40.0, Recommendation::Review),
            candidate(60.0, Recommendation::Review),
            candidate(80.0, Recommendation::Shortlist),
            candidate(100.0, Recommendation::Shortlist),
        ];
        let stats = compute_dashboard_stats(&candidates);
        let counts: Vec<usize> = stats.score_ranges.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![2, 1, 1, 2]);
    }
}
