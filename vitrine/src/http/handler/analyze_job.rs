use crate::service::{
    Service,
    llm::{Message, Role},
    resume,
};
use axum::{Json, debug_handler, extract::State};
use serde::{Deserialize, Serialize};
use vitrine_error::{ErrorType, Result, ResultExt, bail};

const MIN_DESCRIPTION_LEN: usize = 100;
const MAX_DESCRIPTION_LEN: usize = 50_000;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeJobRequest {
    job_description: String,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFitReport {
    pub match_score: u8,
    pub match_level: String,
    pub relevant_experience: Vec<String>,
    pub key_strengths: Vec<String>,
    pub potential_gaps: Vec<String>,
    pub recommendation: String,
}

#[debug_handler(state = crate::state::Zustand)]
pub async fn post(
    State(service): State<Service>,
    Json(request): Json<AnalyzeJobRequest>,
) -> Result<Json<JobFitReport>> {
    let job_description = request.job_description.trim();
    if job_description.len() < MIN_DESCRIPTION_LEN {
        bail!(
            type = ErrorType::BadRequest(Some("Job description too short".into())),
            format!("job description below {MIN_DESCRIPTION_LEN} characters")
        );
    }
    if job_description.len() > MAX_DESCRIPTION_LEN {
        bail!(
            type = ErrorType::BadRequest(Some("Job description too long".into())),
            format!("job description above {MAX_DESCRIPTION_LEN} characters")
        );
    }

    let prompt = resume::fit_analysis_prompt(job_description);
    let raw = service
        .llm
        .complete(
            None,
            &[Message {
                role: Role::User,
                content: prompt,
            }],
        )
        .await?;

    let report: JobFitReport = serde_json::from_str(strip_code_fences(&raw))
        .with_error_type(ErrorType::Other(Some("Failed to parse analysis results".into())))?;

    if report.match_score > 100 {
        bail!(
            type = ErrorType::Other(Some("Invalid analysis format".into())),
            format!("match score out of range: {}", report.match_score)
        );
    }

    Ok(Json(report))
}

/// Models occasionally wrap the JSON in a markdown fence despite the
/// prompt saying not to
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("```").unwrap_or(trimmed);

    trimmed.trim()
}

#[cfg(test)]
mod test {
    use super::{JobFitReport, strip_code_fences};

    #[test]
    fn strips_markdown_fences() {
        assert_eq!(strip_code_fences("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fences("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fences("{}"), "{}");
    }

    #[test]
    fn parses_camel_case_report() {
        let report: JobFitReport = serde_json::from_str(
            r#"{
                "matchScore": 82,
                "matchLevel": "Excellent Match",
                "relevantExperience": ["Rust services"],
                "keyStrengths": ["Distributed systems"],
                "potentialGaps": ["Mobile development"],
                "recommendation": "Strong candidate."
            }"#,
        )
        .unwrap();

        assert_eq!(report.match_score, 82);
        assert_eq!(report.match_level, "Excellent Match");
    }
}
