// All LLM prompt constants for the screening module.
// The shared system prompt lives in llm_client::prompts.

/// Question generation prompt template. Replace `{tech_stack}` before sending.
///
/// The "different from previously asked" sentence is aspirational prompt
/// text only; nothing carries memory between generation calls.
pub const QUESTION_PROMPT_TEMPLATE: &str = "Generate 5 short and fundamental technical interview \
    questions for a candidate with skills in {tech_stack}. \
    Always try to give different types of questions. \
    Questions should test basic knowledge in that field. \
    Do not ask multiple choice questions and do not give any other extra information. \
    Only ask a question. \
    Questions should be short, ideally answerable in 2-4 words. \
    Always ask different questions from the ones you previously asked on that tech stack. \
    Return one question per line.";

/// Answer evaluation prompt template. Replace `{question}` and `{answer}`.
pub const SCORE_PROMPT_TEMPLATE: &str = "Evaluate the following answer to the question: \
    '{question}'. Answer: '{answer}'. \
    Score this answer on a scale of 1 to 10, and return only the score without any \
    additional text.";
