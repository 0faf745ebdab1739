// Prompt constants for AI-assisted JD skill importance.

/// System prompt for the JD skill importance query.
pub const JD_SKILL_SYSTEM: &str = "You are a Job Description Analysis Engine. \
    Extract skills and classify their importance. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences.";

/// Replace `{allowed_skills}`, `{allow_list_rule}` and `{jd_text}` before sending.
pub const JD_SKILL_PROMPT_TEMPLATE: &str = r#"Extract technical skills from the job description below and classify their importance.

RULES:
1. {allow_list_rule}
2. Use signal phrases to decide importance:
   - critical: "Must have", "Required", "Key skills", "Proficiency in"
   - optional: "Nice to have", "Bonus", "Plus", "Preferred", "Familiarity with"
3. If unsure and the skill appears under requirements, use critical.

ALLOWED SKILLS:
[{allowed_skills}]

JOB DESCRIPTION:
"{jd_text}"

OUTPUT FORMAT (JSON list, no other keys):
[
  {"skill": "Exact Name From List", "importance": "critical"}
]"#;
