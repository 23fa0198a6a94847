//! Demo data — deterministic mock candidates for dashboard demos, seeded at
//! startup behind `SEED_DEMO_DATA`.
//!
//! Statuses rotate through the three values instead of being derived from a
//! score threshold: the provider recommendation is the only classifier for
//! real analyses, and the demo data must not smuggle in a second rule.

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::models::candidate::{Candidate, CandidateStatus};

const NAMES: [&str; 20] = [
    "Alice Johnson",
    "Bob Smith",
    "Charlie Davis",
    "Diana Evans",
    "Ethan Harris",
    "Fiona Clark",
    "George Lewis",
    "Hannah Walker",
    "Ian Hall",
    "Julia Young",
    "Kevin Allen",
    "Laura Scott",
    "Michael King",
    "Nina Wright",
    "Oscar Lopez",
    "Paula Hill",
    "Quinn Green",
    "Rachel Adams",
    "Sam Baker",
    "Tina Nelson",
];

const ROLES: [&str; 5] = [
    "Frontend Engineer",
    "Backend Developer",
    "Data Scientist",
    "Product Manager",
    "UX Designer",
];

const SKILLS_POOL: [&str; 12] = [
    "React",
    "TypeScript",
    "Python",
    "Node.js",
    "AWS",
    "Docker",
    "Figma",
    "SQL",
    "Machine Learning",
    "Kubernetes",
    "GraphQL",
    "Tailwind",
];

const STATUS_ROTATION: [CandidateStatus; 3] = [
    CandidateStatus::Shortlisted,
    CandidateStatus::Pending,
    CandidateStatus::Rejected,
];

/// Generates `count` mock candidates. Deterministic so dashboard demos and
/// tests see the same collection every run; scores land in [40, 100].
pub fn seed_demo_candidates(count: usize) -> Vec<Candidate> {
    (0..count)
        .map(|i| {
            let name = NAMES[i % NAMES.len()];
            let role = ROLES[i % ROLES.len()];
            let score = 40.0 + ((i * 17) % 61) as f64;
            let skills: Vec<String> = (0..3)
                .map(|j| SKILLS_POOL[(i + j * 4) % SKILLS_POOL.len()].to_string())
                .collect();

            Candidate {
                id: Uuid::new_v4(),
                name: name.to_string(),
                email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
                role: role.to_string(),
                resume_text: format!("Mock resume content for {role}..."),
                job_description: format!("Job description for {role}..."),
                score,
                status: STATUS_ROTATION[i % STATUS_ROTATION.len()],
                analysis: format!(
                    "Automated demo analysis. Candidate shows proficiency in {}.",
                    skills.join(", ")
                ),
                skills,
                created_at: Utc::now() - Duration::days((i % 30) as i64),
            }
        })
        .collect()
}
