// Prompt constants for the resume analysis call. The Gemini client is the
// only consumer; handlers never build prompts themselves.

/// Evaluator persona sent as the system instruction on every analysis call.
pub const SYSTEM_INSTRUCTION: &str = "\
You are an expert HR Technical Recruiter and Resume Scanner. \
Your task is to analyze a candidate's resume text against a specific job description. \
You must objectively evaluate the match based on skills, experience, and keywords. \
Return a JSON object with a score (0-100), a concise reasoning string, a list of \
identified key skills, and a recommendation (Shortlist, Reject, or Review).";

/// User prompt carrying the job description and resume verbatim. No length
/// cap is enforced here; overlong input is the provider's to reject.
pub fn build_analysis_prompt(job_description: &str, resume_text: &str) -> String {
    format!(
        "Please analyze the following Resume against the Job Description.\n\n\
         JOB DESCRIPTION:\n{job_description}\n\n\
         RESUME CONTENT:\n{resume_text}\n"
    )
}
