//! Prompt construction and reply parsing for interview generation.

use prep_core::model::{InterviewQuestion, JobDetails};
use serde::Deserialize;

use crate::error::AiError;

fn language_clause(language: Option<&str>) -> String {
    language.map_or_else(String::new, |lang| format!(" Write everything in {lang}."))
}

/// Prompt asking for `count` question/answer pairs as a JSON array.
#[must_use]
pub fn interview_prompt(details: &JobDetails, count: usize, language: Option<&str>) -> String {
    format!(
        "Job position: {position}, Job description: {description}, Years of experience: {years}. \
         Based on this information, give me {count} interview questions with answers in JSON format. \
         Return a JSON array of objects with \"question\" and \"answer\" fields and nothing else.{lang}",
        position = details.job_position(),
        description = details.job_description(),
        years = details.years_experience(),
        lang = language_clause(language),
    )
}

/// Prompt asking for a rating and feedback on one answer.
#[must_use]
pub fn feedback_prompt(question: &str, user_answer: &str, language: Option<&str>) -> String {
    format!(
        "Question: {question}, User answer: {user_answer}. \
         Based on the question and the user answer, give a rating from 0 to 10 and feedback \
         as areas of improvement, in 3 to 5 lines. \
         Return a JSON object with \"rating\" and \"feedback\" fields and nothing else.{lang}",
        lang = language_clause(language),
    )
}

/// Removes a surrounding Markdown code fence (```json ... ```), if any.
#[must_use]
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening fence line.
    let body = rest.split_once('\n').map_or(rest, |(_, body)| body);
    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}

/// Parses the generated question list.
///
/// # Errors
///
/// Returns `AiError::Malformed` if the reply is not a JSON array of
/// `{question, answer}` objects.
pub fn parse_questions(raw: &str) -> Result<Vec<InterviewQuestion>, AiError> {
    serde_json::from_str(strip_code_fences(raw)).map_err(|err| AiError::Malformed(err.to_string()))
}

/// Parsed feedback reply.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackReply {
    pub rating: f64,
    pub feedback: String,
}

#[derive(Deserialize)]
struct RawFeedback {
    rating: RawRating,
    #[serde(default)]
    feedback: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRating {
    Number(f64),
    Text(String),
}

/// Parses a `{rating, feedback}` reply. Ratings may arrive as numbers or
/// strings such as `"7"` or `"7/10"`.
///
/// # Errors
///
/// Returns `AiError::Malformed` if the reply is not such an object or the
/// rating is not numeric.
pub fn parse_feedback(raw: &str) -> Result<FeedbackReply, AiError> {
    let parsed: RawFeedback = serde_json::from_str(strip_code_fences(raw))
        .map_err(|err| AiError::Malformed(err.to_string()))?;

    let rating = match parsed.rating {
        RawRating::Number(value) => value,
        RawRating::Text(text) => {
            let head = text.split('/').next().unwrap_or_default().trim();
            head.parse::<f64>()
                .map_err(|_| AiError::Malformed(format!("invalid rating: {text}")))?
        }
    };

    Ok(FeedbackReply {
        rating,
        feedback: parsed.feedback.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::model::InterviewDraft;

    #[test]
    fn fences_are_stripped_with_or_without_info_string() {
        assert_eq!(strip_code_fences("```json\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fences("```\n{\"a\":1}\n```  "), "{\"a\":1}");
        assert_eq!(strip_code_fences("  [2] "), "[2]");
    }

    #[test]
    fn questions_parse_from_fenced_reply() {
        let raw = "```json\n[{\"question\":\"Q1\",\"answer\":\"A1\"},{\"question\":\"Q2\"}]\n```";
        let questions = parse_questions(raw).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0], InterviewQuestion::new("Q1", "A1"));
        assert_eq!(questions[1].answer, "");
    }

    #[test]
    fn non_array_reply_is_malformed() {
        assert!(matches!(
            parse_questions("here are your questions"),
            Err(AiError::Malformed(_))
        ));
    }

    #[test]
    fn feedback_accepts_numeric_and_text_ratings() {
        let numeric = parse_feedback("{\"rating\": 7, \"feedback\": \" Good \"}").unwrap();
        assert_eq!(numeric.rating, 7.0);
        assert_eq!(numeric.feedback, "Good");

        let text = parse_feedback("```json\n{\"rating\": \"8/10\", \"feedback\": \"ok\"}\n```")
            .unwrap();
        assert_eq!(text.rating, 8.0);

        assert!(parse_feedback("{\"rating\": \"great\"}").is_err());
    }

    #[test]
    fn interview_prompt_mentions_details_and_count() {
        let details = InterviewDraft {
            job_position: "Data Engineer".into(),
            job_description: "Spark".into(),
            years_experience: 3,
        }
        .validate()
        .unwrap();
        let prompt = interview_prompt(&details, 5, Some("German"));
        assert!(prompt.contains("Data Engineer"));
        assert!(prompt.contains("give me 5 interview questions"));
        assert!(prompt.contains("German"));
        assert!(!interview_prompt(&details, 5, None).contains("Write everything"));
    }
}
