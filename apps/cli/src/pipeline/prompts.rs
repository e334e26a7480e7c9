// All LLM prompt constants for the pipeline stages.
// Each template carries {placeholder} slots filled with .replace() before sending.

/// System prompt for job requirement extraction. Enforces JSON-only output.
pub const JOB_ANALYZER_SYSTEM: &str =
    "You are an expert job description analyst and technical recruiter. \
    Extract the skills, keywords, and responsibilities a hiring team would \
    screen for. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Job analysis prompt template. Replace `{job_text}` before sending.
pub const JOB_ANALYZER_PROMPT_TEMPLATE: &str = r#"Analyze the following job description and extract structured requirements.

Return a JSON object with this EXACT schema (no extra fields):
{
  "job_title": "Senior Backend Engineer",
  "skills": [
    {"keyword": "rust", "category": "programming languages"},
    {"keyword": "mentoring", "category": null}
  ],
  "responsibilities": [
    "design and operate backend services"
  ]
}

Rules for extraction:
- "skills": every concrete skill, tool, technology, or qualification keyword a
  screening pass would look for. Keywords are lowercase, short (one to three
  words), and appear at most once.
- "category": a short named skill category such as "programming languages",
  "cloud", "databases", "soft skills" -- or null when no category fits.
- "responsibilities": short lowercase phrases describing what the role does,
  taken from the duties listed in the posting.
- "job_title": the title as posted, or null if none is stated.

JOB DESCRIPTION:
{job_text}"#;

/// System prompt for recommendation drafting. Enforces JSON-only output and
/// forbids fabricated experience.
pub const RECOMMENDER_SYSTEM: &str =
    "You are an expert resume consultant. You draft precise, minimal edits \
    that close specific gaps between a resume and a job description. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    NEVER invent experience, employers, dates, or qualifications the resume \
    does not already support; only reframe or extend existing content.";

/// Recommendation drafting prompt template.
/// Replace: {gap_items_json}, {resume_outline}, {job_title}
pub const RECOMMENDER_PROMPT_TEMPLATE: &str = r#"Draft one suggested resume edit for EVERY gap item below. The target role is: {job_title}

GAP ITEMS (each has a unique "key"):
{gap_items_json}

RESUME OUTLINE (section names and their current lines):
{resume_outline}

Return a JSON object with this EXACT schema:
{
  "suggestions": [
    {
      "key": "the-gap-item-key",
      "target_section": "Experience",
      "action": "replace",
      "find": "text copied verbatim from one line of that section",
      "text": "the replacement or new text",
      "rationale": "one sentence on why this closes the gap"
    }
  ]
}

HARD RULES:
1. Produce EXACTLY one suggestion per gap item key. Every key must appear.
2. "target_section" must be one of the section names from the outline.
3. "action" is "replace" or "append". For "replace", "find" must quote text
   that exists verbatim in that section; for "append", omit "find" or set it
   to null and "text" is a new bullet line.
4. Work the gap item's keyword or phrase into "text" naturally.
5. Never fabricate experience; prefer reframing lines the resume already has."#;
