// Shared prompt constants.
// Each screening service defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt for all screening calls — suppresses chat framing so the
/// ad-hoc text parsing downstream sees only the requested output.
pub const SCREENING_SYSTEM: &str = "You are TalentScout, a technical hiring screener. \
    Follow the output instructions in each request exactly. \
    Do NOT include greetings, preambles, or commentary. \
    Do NOT use markdown formatting.";
