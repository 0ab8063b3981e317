//! Keyword answer engine.
//!
//! Maps a free-text question to one pre-authored answer block,
//! deterministically and without external calls. Matching runs in two tiers:
//!
//! 1. Topics, in declaration order; within a topic, keywords in declaration
//!    order; the first keyword found as a substring of the lowercased
//!    question wins
//! 2. Unknown-topic rules, consulted only when no topic matched
//!
//! If neither tier matches, the reserved default topic's answer is returned,
//! so `ask` always produces a non-empty answer and never fails.
//!
//! Matching is by substring, not whole word: "coding" inside "decoding" still
//! matches. The domain is a single person's resume, so false positives are
//! acceptable in exchange for simplicity.

use crate::services::knowledge::{TOPICS, Topic, UNKNOWN_TOPIC_RULES, UnknownTopicRule};

/// The keyword-driven fallback chatbot.
///
/// Holds the static topic and rule tables. Construct one at process start
/// and share it by reference; `ask` is a pure function of its input.
#[derive(Debug)]
pub struct KeywordAnswerEngine {
    topics: &'static [Topic],
    unknown_rules: &'static [UnknownTopicRule],
}

impl KeywordAnswerEngine {
    /// Build the engine over the built-in knowledge base.
    pub fn new() -> Self {
        Self {
            topics: TOPICS,
            unknown_rules: UNKNOWN_TOPIC_RULES,
        }
    }

    /// Answer a question from the knowledge base.
    ///
    /// Accepts any string, including the empty string, and always returns an
    /// answer. The question's casing is irrelevant; only lowercase keywords
    /// are matched.
    pub fn ask(&self, question: &str) -> &'static str {
        let question = question.to_lowercase();

        for topic in self.topics {
            // The default topic has no keywords and is never matched directly
            if topic.name == "default" {
                continue;
            }

            for keyword in topic.keywords {
                if question.contains(keyword) {
                    return topic.answer;
                }
            }
        }

        self.resolve_unknown(&question)
    }

    /// Second-tier lookup for questions no topic covered.
    ///
    /// Scans the unknown-topic rules in order; the first rule with a matching
    /// trigger word supplies related context. Falls back to the default
    /// topic's answer as last resort.
    fn resolve_unknown(&self, question: &str) -> &'static str {
        for rule in self.unknown_rules {
            for word in rule.trigger_words {
                if question.contains(word) {
                    return rule.answer;
                }
            }
        }

        self.default_answer()
    }

    /// The terminal fallback answer (the reserved default topic).
    pub fn default_answer(&self) -> &'static str {
        self.topics
            .iter()
            .find(|t| t.name == "default")
            .map(|t| t.answer)
            .unwrap_or("")
    }

    /// Look up a topic's answer by name, bypassing keyword matching.
    ///
    /// Used by the portfolio convenience endpoints, which address a category
    /// directly instead of going through a question.
    pub fn topic_answer(&self, name: &str) -> Option<&'static str> {
        self.topics
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.answer)
    }
}

impl Default for KeywordAnswerEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::knowledge::TOPICS;

    fn topic(name: &str) -> &'static Topic {
        TOPICS
            .iter()
            .find(|t| t.name == name)
            .expect("topic should exist")
    }

    #[test]
    fn skills_question_returns_skills_answer_verbatim() {
        let engine = KeywordAnswerEngine::new();
        assert_eq!(
            engine.ask("What are your technical skills?"),
            topic("skills").answer
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let engine = KeywordAnswerEngine::new();
        assert_eq!(engine.ask("LIST YOUR PROJECTS"), topic("projects").answer);
    }

    #[test]
    fn earlier_topic_wins_when_two_topics_match() {
        let engine = KeywordAnswerEngine::new();

        // "about" (background) and "career" (career) both match;
        // background is declared first
        assert_eq!(
            engine.ask("Tell me about your career"),
            topic("background").answer
        );

        // "work" is a keyword of both projects and career; projects is first
        assert_eq!(engine.ask("Where do you work?"), topic("projects").answer);
    }

    #[test]
    fn substring_matching_hits_inside_longer_tokens() {
        let engine = KeywordAnswerEngine::new();

        // "coding" inside "decoding" still selects the hobbies topic
        assert_eq!(
            engine.ask("Do you enjoy decoding messages?"),
            topic("hobbies").answer
        );
    }

    #[test]
    fn topic_tier_preempts_unknown_rules() {
        let engine = KeywordAnswerEngine::new();

        // "personal" is both a hobbies keyword and a trigger of the family
        // rule; the topic tier must win
        assert_eq!(
            engine.ask("personal details please"),
            topic("hobbies").answer
        );
    }

    #[test]
    fn salary_question_falls_to_unknown_rule() {
        let engine = KeywordAnswerEngine::new();

        let answer = engine.ask("What salary does he expect?");
        assert_ne!(answer, engine.default_answer());
        assert!(answer.contains("Salary & Compensation"));
    }

    #[test]
    fn family_question_falls_to_unknown_rule() {
        let engine = KeywordAnswerEngine::new();

        let answer = engine.ask("Does he have siblings?");
        assert!(answer.contains("Personal & Family Information"));
    }

    #[test]
    fn unmatched_question_returns_default_answer() {
        let engine = KeywordAnswerEngine::new();
        assert_eq!(engine.ask("tell me a random fact"), engine.default_answer());
    }

    #[test]
    fn empty_question_returns_nonempty_answer() {
        let engine = KeywordAnswerEngine::new();
        assert!(!engine.ask("").is_empty());
    }

    #[test]
    fn exactly_one_default_topic_with_no_keywords() {
        let defaults: Vec<_> = TOPICS.iter().filter(|t| t.name == "default").collect();
        assert_eq!(defaults.len(), 1);
        assert!(defaults[0].keywords.is_empty());
    }

    #[test]
    fn topic_answer_addresses_categories_directly() {
        let engine = KeywordAnswerEngine::new();
        assert_eq!(engine.topic_answer("projects"), Some(topic("projects").answer));
        assert_eq!(engine.topic_answer("nope"), None);
    }
}
