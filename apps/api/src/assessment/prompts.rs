// Narrative prompt templates for the assessment module.

pub const NARRATIVE_PROMPT: &str = r#"Analyze this personality profile.

Dominant Trait: {dominant}
Detailed Traits:
{traits}

Write a concise two-paragraph analysis speaking directly to the person:
- The first paragraph describes their personality in a conversational, intimate tone.
- The second paragraph suggests career paths that suit them, still addressing them directly.

Avoid headings and subheadings. Write as if you are talking to them personally."#;
