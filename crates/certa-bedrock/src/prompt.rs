//! Prompt assembly for a disease review.

use certa_core::models::analysis::AnalysisRequest;

/// Name of the provincial application form the applicant identity is read
/// from.
pub const APPLICATION_FORM: &str = "江西省门诊慢特病病种待遇认定申请表";

pub const REVIEW_SYSTEM_PROMPT: &str = "\
You are a professional medical-insurance reviewer. You check uploaded \
medical documents against published admission criteria for outpatient \
chronic and special diseases. You are strict: a criterion is met only \
when a document clearly evidences it. Respond with a single JSON object \
and nothing else.";

/// Build the user-turn instructions for one review.
pub fn build_review_prompt(request: &AnalysisRequest) -> String {
    let criteria = request
        .criteria
        .iter()
        .map(|c| format!("ID: {}\nContent: {}", c.id, c.description))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "\
Task: review the uploaded documents for the disease \"{name}\".

Applicant identity: look for the form \"{form}\" among the uploads. If it \
is present, extract the applicant's name (姓名) and identity document number \
(身份证件号码).

Eligibility logic: {logic}

Instructions:
1. Check the uploaded medical documents (images or PDFs) one criterion at \
a time against the criteria list below.
2. Be strict: if a required document (for example a pathology report or a \
discharge summary) is missing, or a value does not meet the threshold, \
mark the criterion as not met.
3. Combine the eligibility logic with the evidence you found and give an \
overall suggestion: PASS, FAIL, or REVIEW when critical documents are \
missing and a human must decide.
4. Write `reasoning` and `summary` in Chinese. Keep them brief and cite \
the document name or the specific value or diagnosis you relied on.
5. Only use criterion ids from the list below.

Respond with JSON of this shape:
{{
  \"applicant_info\": {{ \"name\": string, \"id_number\": string }},
  \"analysis\": [ {{ \"criterion_id\": string, \"is_met\": boolean, \"reasoning\": string }} ],
  \"overall_assessment\": {{ \"suggestion\": \"PASS\" | \"FAIL\" | \"REVIEW\", \"summary\": string }}
}}
Omit applicant_info if the application form is not among the uploads.

Criteria:
{criteria}
",
        name = request.disease_name,
        form = APPLICATION_FORM,
        logic = request.logic_description,
    )
}
