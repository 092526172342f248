//! Prompt-wizard configuration and prompt generation.
//!
//! Static lookup data plus deterministic text templates. The wizard UI and
//! the AI call itself belong to the embedding application; this module only
//! defines the steps and builds the prompt text, including the JSON format
//! contract the extractor expects to get back.

use serde::{Deserialize, Serialize};

/// One step of the prompt-builder wizard.
#[derive(Debug, Clone, Serialize)]
pub struct PromptStep {
    pub id: u8,
    pub field: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub explanation: &'static str,
    pub example: &'static str,
    /// Fixed choices; empty for free-text fields.
    pub options: &'static [&'static str],
    pub multiline: bool,
    /// Inclusive bounds for numeric fields; `None` for text fields.
    pub range: Option<(u32, u32)>,
}

pub const MIN_CARD_COUNT: u32 = 5;
pub const MAX_CARD_COUNT: u32 = 50;
const DEFAULT_CARD_COUNT: u32 = 20;

/// The wizard steps, in display order. Immutable startup data, not state.
pub const PROMPT_STEPS: &[PromptStep] = &[
    PromptStep {
        id: 1,
        field: "subject",
        label: "Subject",
        placeholder: "e.g., Biology, History, Mathematics",
        explanation: "Setting the subject tells the AI which domain knowledge to use. A Biology prompt will get different vocabulary than a History prompt.",
        example: "Biology",
        options: &[
            "Biology",
            "Chemistry",
            "Physics",
            "Mathematics",
            "English Literature",
            "English Language",
            "History",
            "Geography",
            "Computer Science",
            "Business Studies",
            "Economics",
            "Psychology",
            "Sociology",
            "Art & Design",
            "Music",
            "Drama",
            "Physical Education",
            "Religious Studies",
            "PSHE",
            "French",
            "Spanish",
            "German",
            "Other",
        ],
        multiline: false,
        range: None,
    },
    PromptStep {
        id: 2,
        field: "topic",
        label: "Topic",
        placeholder: "e.g., Photosynthesis, World War II, Quadratic Equations",
        explanation: "Be specific! 'Photosynthesis' is better than 'Plants'. The more focused, the more relevant your cards.",
        example: "Photosynthesis",
        options: &[],
        multiline: false,
        range: None,
    },
    PromptStep {
        id: 3,
        field: "learningObjectives",
        label: "Learning Objectives",
        placeholder: "e.g., Understand the light-dependent reactions...",
        explanation: "These come from your specification. Including them ensures cards test what students actually need to know for the exam.",
        example: "Understand the light-dependent and light-independent reactions of photosynthesis. Know the role of chlorophyll.",
        options: &[],
        multiline: true,
        range: None,
    },
    PromptStep {
        id: 4,
        field: "examBoard",
        label: "Exam Board",
        placeholder: "e.g., AQA, Edexcel, OCR, WJEC",
        explanation: "Different boards use different command words and expect different depths. AQA Biology \u{2260} Edexcel Biology.",
        example: "AQA",
        options: &["AQA", "Edexcel", "OCR", "WJEC", "CCEA", "Cambridge", "IB", "Other"],
        multiline: false,
        range: None,
    },
    PromptStep {
        id: 5,
        field: "boardNuances",
        label: "Exam Board Nuances",
        placeholder: "e.g., AQA expects students to name specific researchers with dates...",
        explanation: "This is where the magic happens. Telling the AI that 'AQA expects named researchers with dates' transforms generic cards into exam-ready ones.",
        example: "AQA expects students to know the names of specific scientists and their experiments. Use command words like \"describe\", \"explain\", \"evaluate\".",
        options: &[],
        multiline: true,
        range: None,
    },
    PromptStep {
        id: 6,
        field: "misconceptions",
        label: "Common Misconceptions",
        placeholder: "e.g., Students often confuse mitosis with meiosis...",
        explanation: "You know what students get wrong. Adding this creates cards that specifically target those weak spots.",
        example: "Students often think glucose is produced in the light-dependent reactions. They confuse the role of oxygen.",
        options: &[],
        multiline: true,
        range: None,
    },
    PromptStep {
        id: 7,
        field: "yearGroup",
        label: "Year Group",
        placeholder: "e.g., Year 10, Year 12, KS3",
        explanation: "Year 10 foundation vs Year 11 revision need different complexity levels.",
        example: "Year 12",
        options: &["Year 7", "Year 8", "Year 9", "Year 10", "Year 11"],
        multiline: false,
        range: None,
    },
    PromptStep {
        id: 8,
        field: "targetGrade",
        label: "Target Grade",
        placeholder: "e.g., Grade 5, Grade 7-9, A*",
        explanation: "Grade 4 cards focus on core knowledge. Grade 8 cards include evaluation and analysis.",
        example: "Grade 7-9",
        options: &[
            "Grade 1-3",
            "Grade 4-5",
            "Grade 6-7",
            "Grade 7-9",
            "A-C",
            "A*-B",
            "Pass",
            "Merit",
            "Distinction",
        ],
        multiline: false,
        range: None,
    },
    PromptStep {
        id: 9,
        field: "accessibility",
        label: "Accessibility Needs",
        placeholder: "e.g., Dyslexia-friendly, ADHD-friendly, EAL support...",
        explanation: "Students with dyslexia need simpler sentences. ADHD students need shorter, punchier cards. This adapts the output.",
        example: "Dyslexia-friendly: use shorter sentences, avoid complex vocabulary where possible.",
        options: &[],
        multiline: true,
        range: None,
    },
    PromptStep {
        id: 10,
        field: "cardCount",
        label: "Number of Cards",
        placeholder: "e.g., 20",
        explanation: "20-25 is usually ideal. Too few misses content, too many overwhelms.",
        example: "20",
        options: &[],
        multiline: false,
        range: Some((MIN_CARD_COUNT, MAX_CARD_COUNT)),
    },
];

/// Look up a wizard step by its field identifier.
pub fn prompt_step(field: &str) -> Option<&'static PromptStep> {
    PROMPT_STEPS.iter().find(|step| step.field == field)
}

/// Values collected by the wizard. Empty strings count as unset, matching
/// how a half-filled form comes across.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptInput {
    pub subject: String,
    pub topic: String,
    pub learning_objectives: Option<String>,
    pub exam_board: Option<String>,
    pub board_nuances: Option<String>,
    pub misconceptions: Option<String>,
    pub year_group: Option<String>,
    pub target_grade: Option<String>,
    pub accessibility: Option<String>,
    pub card_count: Option<u32>,
}

impl PromptInput {
    /// Requested card count, clamped to the wizard's bounds.
    fn card_count(&self) -> u32 {
        self.card_count
            .unwrap_or(DEFAULT_CARD_COUNT)
            .clamp(MIN_CARD_COUNT, MAX_CARD_COUNT)
    }
}

fn or_default<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
}

/// Build the flashcard-generation prompt the teacher pastes into a chat AI.
pub fn generate_prompt(input: &PromptInput) -> String {
    format!(
        r#"Create {count} flashcards for {subject} on the topic of "{topic}".

**Context:**
- Exam Board: {board}
- Year Group: {year}
- Target Grade: {grade}

**Learning Objectives:**
{objectives}

**Exam Board Specific Requirements:**
{nuances}

**Address These Common Misconceptions:**
{misconceptions}

**Accessibility Considerations:**
{accessibility}

**Format Requirements:**
Please output the flashcards in this exact JSON format:
```json
[
  {{
    "question": "Question text here",
    "answer": "Answer text here"
  }}
]
```

Important:
- Each card should test ONE concept
- Questions should use appropriate command words for the target grade
- Answers should be concise but complete
- Include a mix of recall, understanding, and application questions
- Make sure cards are exam-focused and specification-aligned"#,
        count = input.card_count(),
        subject = input.subject,
        topic = input.topic,
        board = or_default(&input.exam_board, "Not specified"),
        year = or_default(&input.year_group, "Not specified"),
        grade = or_default(&input.target_grade, "Not specified"),
        objectives = or_default(&input.learning_objectives, "Cover key concepts comprehensively"),
        nuances = or_default(&input.board_nuances, "Follow standard exam board expectations"),
        misconceptions = or_default(
            &input.misconceptions,
            "Address typical student misunderstandings"
        ),
        accessibility = or_default(&input.accessibility, "Standard complexity"),
    )
}

/// Variant for source-grounded AI tools: the cards must come only from the
/// teacher's uploaded documents.
pub fn generate_notebook_prompt(input: &PromptInput) -> String {
    format!(
        r#"Using the sources I've uploaded, create {count} flashcards for {subject} on the topic of "{topic}".

**Important: Base all flashcards ONLY on the content from my uploaded sources.** Do not include information from outside these documents.

**Context:**
- Exam Board: {board}
- Year Group: {year}
- Target Grade: {grade}

**Learning Objectives to focus on:**
{objectives}

**Exam Board Specific Requirements:**
{nuances}

**Address These Common Misconceptions (if covered in sources):**
{misconceptions}

**Accessibility Considerations:**
{accessibility}

**Format Requirements:**
Please output the flashcards in this exact JSON format:
```json
[
  {{
    "question": "Question text here",
    "answer": "Answer text here"
  }}
]
```

Important:
- Each card should test ONE concept from the uploaded sources
- Questions should use appropriate command words for the target grade
- Answers should be concise but complete, using terminology from the sources
- Include a mix of recall, understanding, and application questions
- Reference specific content, examples, or case studies from the uploaded materials
- Make sure cards align with what's actually covered in the sources"#,
        count = input.card_count(),
        subject = input.subject,
        topic = input.topic,
        board = or_default(&input.exam_board, "Not specified"),
        year = or_default(&input.year_group, "Not specified"),
        grade = or_default(&input.target_grade, "Not specified"),
        objectives = or_default(
            &input.learning_objectives,
            "Cover key concepts from the sources comprehensively"
        ),
        nuances = or_default(&input.board_nuances, "Follow standard exam board expectations"),
        misconceptions = or_default(
            &input.misconceptions,
            "Address typical student misunderstandings found in the materials"
        ),
        accessibility = or_default(&input.accessibility, "Standard complexity"),
    )
}

const AUTISM_REQUIREMENTS: &str = r#"AUTISM-FRIENDLY REQUIREMENTS:
1. Use literal language only (no idioms or metaphors)
2. Give explicit, numbered step-by-step instructions
3. Replace pronouns with specific nouns when unclear
4. Use concrete quantities (e.g., "Solve 4 equations" not "Solve a few")
5. Consistent numbered structure throughout
6. Clear transitions between sections (e.g., "You have finished Section 1. Now move to Section 2.")"#;

const DYSLEXIA_REQUIREMENTS: &str = r#"DYSLEXIA-FRIENDLY REQUIREMENTS:
1. Use short sentences (max 15-20 words)
2. Use simple, common vocabulary
3. Avoid walls of text - use bullet points and spacing
4. Use sans-serif font friendly formatting
5. Bold key terms and instructions
6. Provide word banks where appropriate"#;

const ADHD_REQUIREMENTS: &str = r#"ADHD-FRIENDLY REQUIREMENTS:
1. Break tasks into small, timed chunks (5-10 min max)
2. Use engaging, varied activities
3. Include movement or interactive elements where possible
4. Clear visual structure with boxes and borders
5. Frequent checkpoints and mini-goals
6. Reduce visual clutter"#;

const EAL_REQUIREMENTS: &str = r#"EAL (English as Additional Language) REQUIREMENTS:
1. Use simple, clear English
2. Avoid idioms and cultural references
3. Provide vocabulary definitions
4. Use visuals to support understanding
5. Include sentence starters and frames
6. Allow bilingual glossary space"#;

const VISUAL_REQUIREMENTS: &str = r#"VISUAL IMPAIRMENT REQUIREMENTS:
1. Use high contrast text
2. Large, clear fonts
3. Describe all images in text
4. Avoid colour-only information
5. Simple, uncluttered layouts
6. Screen reader compatible structure"#;

const DEFAULT_REQUIREMENTS: &str = r#"ACCESSIBILITY REQUIREMENTS:
1. Clear, simple language
2. Structured layout with numbered sections
3. Visual supports where helpful
4. Explicit instructions"#;

/// Map a free-text accessibility need onto the matching requirement block.
/// Unrecognized text is passed through under a generic heading so a teacher's
/// own wording is never silently dropped.
pub fn accessibility_requirements(needs: Option<&str>) -> String {
    let needs = match needs.map(str::trim).filter(|s| !s.is_empty()) {
        Some(needs) => needs,
        None => return DEFAULT_REQUIREMENTS.to_string(),
    };

    let lower = needs.to_lowercase();
    if ["autism", "asc", "asd"].iter().any(|k| lower.contains(k)) {
        return AUTISM_REQUIREMENTS.to_string();
    }
    if lower.contains("dyslexia") {
        return DYSLEXIA_REQUIREMENTS.to_string();
    }
    if lower.contains("adhd") || lower.contains("attention") {
        return ADHD_REQUIREMENTS.to_string();
    }
    if lower.contains("eal") || lower.contains("english as additional") {
        return EAL_REQUIREMENTS.to_string();
    }
    if ["visual", "blind", "sight"].iter().any(|k| lower.contains(k)) {
        return VISUAL_REQUIREMENTS.to_string();
    }

    format!("ACCESSIBILITY REQUIREMENTS:\n{needs}")
}
