use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default generation model used when none has been selected in Settings.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Screening status of a candidate. Derived exactly once from the model's
/// recommendation when the candidate is created, never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateStatus {
    Pending,
    Shortlisted,
    Rejected,
}

/// The model's categorical verdict. Single source of truth for
/// `CandidateStatus` — no score threshold is applied on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Shortlist,
    Reject,
    Review,
}

impl Recommendation {
    pub fn into_status(self) -> CandidateStatus {
        match self {
            Recommendation::Shortlist => CandidateStatus::Shortlisted,
            Recommendation::Reject => CandidateStatus::Rejected,
            Recommendation::Review => CandidateStatus::Pending,
        }
    }
}

/// One evaluated applicant record. Immutable after creation; the store only
/// ever appends, there is no update or delete path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub resume_text: String,
    pub job_description: String,
    pub score: f64,
    pub status: CandidateStatus,
    pub analysis: String,
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Candidate {
    /// Builds a candidate from form input and a completed analysis.
    /// The recommendation is mapped to a status here and nowhere else.
    pub fn from_analysis(
        name: String,
        role: String,
        email: String,
        resume_text: String,
        job_description: String,
        analysis: AnalysisResponse,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            role,
            resume_text,
            job_description,
            score: analysis.score,
            status: analysis.recommendation.into_status(),
            analysis: analysis.reasoning,
            skills: analysis.key_skills,
            created_at: Utc::now(),
        }
    }
}

/// Session configuration. An empty `api_key` means "unconfigured" — nothing
/// validates the key until the next Gemini call is made with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub api_key: String,
    pub model: String,
}

/// One entry of the provider's model catalog, with the `models/` namespace
/// prefix already stripped from `name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelOption {
    pub name: String,
    pub display_name: String,
    pub version: String,
    pub description: String,
}

/// The structured result the model is asked to produce for one resume/JD
/// pair. Consumed once to construct a `Candidate`, then discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub score: f64,
    pub reasoning: String,
    pub key_skills: Vec<String>,
    pub recommendation: Recommendation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_status_mapping() {
        assert_eq!(
            Recommendation::Shortlist.into_status(),
            CandidateStatus::Shortlisted
        );
        assert_eq!(Recommendation::Reject.into_status(), CandidateStatus::Rejected);
        assert_eq!(Recommendation::Review.into_status(), CandidateStatus::Pending);
    }

    #[test]
    fn test_status_mapping_ignores_score() {
        // A low score with a Shortlist verdict still shortlists; the
        // recommendation is the only classifier.
        for score in [5.0, 50.0, 95.0] {
            let analysis = AnalysisResponse {
                score,
                reasoning: "verdict over score".to_string(),
                key_skills: vec![],
                recommendation: Recommendation::Shortlist,
            };
            let candidate = Candidate::from_analysis(
                "Jane Doe".to_string(),
                "Backend Developer".to_string(),
                "jane@example.com".to_string(),
                "resume".to_string(),
                "jd".to_string(),
                analysis,
            );
            assert_eq!(candidate.status, CandidateStatus::Shortlisted);
            assert_eq!(candidate.score, score);
        }
    }

    #[test]
    fn test_recommendation_serde_literals() {
        let rec: Recommendation = serde_json::from_str(r#""Shortlist""#).unwrap();
        assert_eq!(rec, Recommendation::Shortlist);
        let rec: Recommendation = serde_json::from_str(r#""Reject""#).unwrap();
        assert_eq!(rec, Recommendation::Reject);
        let rec: Recommendation = serde_json::from_str(r#""Review""#).unwrap();
        assert_eq!(rec, Recommendation::Review);

        assert!(serde_json::from_str::<Recommendation>(r#""Maybe""#).is_err());
    }

    #[test]
    fn test_analysis_response_requires_all_fields() {
        // Missing `recommendation` must fail deserialization, not default.
        let json = r#"{"score": 70, "reasoning": "ok", "key_skills": []}"#;
        assert!(serde_json::from_str::<AnalysisResponse>(json).is_err());
    }

    #[test]
    fn test_from_analysis_carries_fields_through() {
        let analysis = AnalysisResponse {
            score: 88.0,
            reasoning: "Strong skills overlap".to_string(),
            key_skills: vec!["React".to_string(), "AWS".to_string()],
            recommendation: Recommendation::Shortlist,
        };
        let candidate = Candidate::from_analysis(
            "Sam Baker".to_string(),
            "Frontend Engineer".to_string(),
            "manual.entry@example.com".to_string(),
            "5 years React, Node.js, AWS".to_string(),
            "Seeking Frontend Engineer with React and AWS experience".to_string(),
            analysis,
        );
        assert_eq!(candidate.score, 88.0);
        assert_eq!(candidate.status, CandidateStatus::Shortlisted);
        assert_eq!(candidate.skills, vec!["React", "AWS"]);
        assert_eq!(candidate.analysis, "Strong skills overlap");
    }
}
