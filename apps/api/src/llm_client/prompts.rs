// Cross-cutting prompt fragments. Each feature module keeps its own prompts.rs.

/// System prompt that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Appended to every prompt that works from an allow-list of skill names.
pub const ALLOW_LIST_INSTRUCTION: &str = "\
    CRITICAL: Only use skill names that appear verbatim in the ALLOWED SKILLS list. \
    Ignore every skill that is not in the list. Do not invent or infer skills.";
