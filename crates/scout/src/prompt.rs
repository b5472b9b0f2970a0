// ABOUTME: Prompt rendering for the generation backend and parsing of its plain-text reply.
// ABOUTME: The reply is split on blank lines into summary, connection rationale, and message.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::record::ProfileRecord;

static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

const INSTRUCTIONS: &str = "\
You're a professional AI writing assistant. Based on a LinkedIn profile that includes the headline, about, and experience sections, generate the following three items:

Return exactly 5 concise bullet points, each highlighting key information such as experience, skills, industries, or education. Keep the total word count under 40 words. Format bullets one per line, without numbering or extra spaces. Maintain a neutral-professional tone and extract both unique and core details from the profile.

Write 1–2 crisp sentences explaining why the user should connect with this person. Frame the benefit clearly — e.g., learning opportunities, relevant experience, or aligned domains. Use third-person perspective and begin with phrases like: “Connecting with this professional could help you…” or “You could benefit from their experience in…”

Write a short, polite, professional connection message (2 sentences max). Do not use their name. Avoid emojis, fluff, or casual phrases. Example format: Hi, I came across your profile and would love to connect and learn from your experience in [domain/skill].

Return the output in plain text with clear separation between the three sections.";

/// Structured reply from the generation backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedOutreach {
    pub summary: String,
    pub why_connect: String,
    pub message: String,
}

/// Renders the generation prompt for a profile.
pub fn build_prompt(record: &ProfileRecord) -> String {
    let experience = record
        .experience
        .iter()
        .enumerate()
        .map(|(idx, role)| format!("{}. {}", idx + 1, role))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\n{}\n\nData:\nHeadline: {}\nAbout: {}\nExperience:\n{}\n",
        INSTRUCTIONS, record.headline, record.about, experience
    )
}

/// Splits a completion into its three sections. Missing sections stay empty.
pub fn parse_reply(text: &str) -> GeneratedOutreach {
    let mut parts = BLANK_LINES
        .split(text.trim())
        .map(|part| part.trim().to_string());

    GeneratedOutreach {
        summary: parts.next().unwrap_or_default(),
        why_connect: parts.next().unwrap_or_default(),
        message: parts.next().unwrap_or_default(),
    }
}
