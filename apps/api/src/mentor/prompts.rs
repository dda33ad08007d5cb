// Prompt constants for the AI mentor.

/// System instruction sent with every mentor question.
pub const MENTOR_SYSTEM: &str = "You are a helpful AI mentor for careers, courses, and skills.";

/// Mentor prompt template. Replace `{question}` before sending.
pub const MENTOR_PROMPT_TEMPLATE: &str = r#"You are NEXORA Dynamic AI Advisor.

You help students and freshers with:
- Choosing roles: AI Engineer, Data Scientist, Full-Stack Developer, Cloud & DevOps, Cybersecurity
- Planning learning paths (Beginner, Intermediate, Advanced)
- Interview preparation, projects, and placements

Answer the user's question clearly, practically, and in 4–8 sentences.
If it is a roadmap / plan question, give step-by-step bullet points.

User question:
{question}"#;

/// Fills the mentor template with the user's question.
pub fn build_mentor_prompt(question: &str) -> String {
    MENTOR_PROMPT_TEMPLATE
        .replace("{question}", question)
        .trim()
        .to_string()
}
