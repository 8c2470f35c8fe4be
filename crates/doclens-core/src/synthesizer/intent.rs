//! Ordered intent rules.
//!
//! Each rule pairs the question phrases that trigger it with the formatter
//! that renders its answer. Triggered rules are tried in table order and the
//! first formatter that produces an answer decides the intent. A formatter
//! that finds nothing to lead with returns `None` and the next triggered rule
//! is tried; the [`DEFAULT_RULE`] framing is used when none answers.

use crate::patterns::{extract_dates, extract_deadlines, extract_emails, extract_money, extract_names, take_display};
use crate::types::Intent;

/// Inputs shared by all formatters.
#[derive(Debug, Clone, Copy)]
pub struct AnswerContext<'a> {
    /// Document the passages came from.
    pub document_name: &'a str,
    /// Top-ranked sentences joined with spaces.
    pub context: &'a str,
    /// Maximum matches listed per category.
    pub display_limit: usize,
}

/// Renders an answer, or declines with `None`.
pub type Formatter = fn(&AnswerContext<'_>) -> Option<String>;

/// One entry of the intent table.
pub struct IntentRule {
    /// Intent reported when this rule answers.
    pub intent: Intent,
    /// Lower-case phrases searched for in the lower-cased question.
    pub triggers: &'static [&'static str],
    /// Answer formatter.
    pub format: Formatter,
}

impl IntentRule {
    /// Whether the (lower-cased) question triggers this rule.
    pub fn matches(&self, lower_question: &str) -> bool {
        self.triggers.iter().any(|t| lower_question.contains(t))
    }
}

impl std::fmt::Debug for IntentRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntentRule")
            .field("intent", &self.intent)
            .field("triggers", &self.triggers)
            .finish()
    }
}

/// Intent rules in precedence order.
pub static INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Generic,
        triggers: &["what is", "what are"],
        format: format_contextual,
    },
    IntentRule {
        intent: Intent::Date,
        triggers: &["when", "date"],
        format: format_dates,
    },
    IntentRule {
        intent: Intent::Money,
        triggers: &["how much", "cost", "price", "budget"],
        format: format_money,
    },
    IntentRule {
        intent: Intent::Contact,
        triggers: &["who", "person", "contact"],
        format: format_contacts,
    },
    IntentRule {
        intent: Intent::Summary,
        triggers: &["summary", "summarize"],
        format: format_summary,
    },
    IntentRule {
        intent: Intent::Deadline,
        triggers: &["deadline", "due date"],
        format: format_deadlines,
    },
];

/// Fallback rule, used when no rule in [`INTENT_RULES`] answers.
pub static DEFAULT_RULE: IntentRule = IntentRule {
    intent: Intent::Generic,
    triggers: &[],
    format: format_default,
};

/// First rule triggered by the question.
pub fn classify(question: &str) -> &'static IntentRule {
    let lower = question.to_lowercase();
    INTENT_RULES
        .iter()
        .find(|rule| rule.matches(&lower))
        .unwrap_or(&DEFAULT_RULE)
}

/// Render the answer of the first triggered rule whose formatter answers.
pub fn render(question: &str, ctx: &AnswerContext<'_>) -> (Intent, String) {
    let lower = question.to_lowercase();
    INTENT_RULES
        .iter()
        .filter(|rule| rule.matches(&lower))
        .chain(std::iter::once(&DEFAULT_RULE))
        .find_map(|rule| (rule.format)(ctx).map(|answer| (rule.intent, answer)))
        .unwrap_or_else(|| (DEFAULT_RULE.intent, String::new()))
}

fn listing(matches: &[String], limit: usize, separator: &str) -> String {
    take_display(matches, limit).join(separator)
}

fn format_contextual(ctx: &AnswerContext<'_>) -> Option<String> {
    Some(format!(
        "Based on {}, here's what I found:\n\n{}",
        ctx.document_name, ctx.context
    ))
}

fn format_dates(ctx: &AnswerContext<'_>) -> Option<String> {
    let dates = extract_dates(ctx.context);
    if dates.is_empty() {
        return None;
    }
    Some(format!(
        "**Dates found in {}:**\n{}\n\n**Context:** {}",
        ctx.document_name,
        listing(&dates, ctx.display_limit, ", "),
        ctx.context
    ))
}

fn format_money(ctx: &AnswerContext<'_>) -> Option<String> {
    let money = extract_money(ctx.context);
    if money.is_empty() {
        return None;
    }
    Some(format!(
        "**Financial information from {}:**\n{}\n\n**Details:** {}",
        ctx.document_name,
        listing(&money, ctx.display_limit, ", "),
        ctx.context
    ))
}

fn format_contacts(ctx: &AnswerContext<'_>) -> Option<String> {
    let names = extract_names(ctx.context);
    let emails = extract_emails(ctx.context);
    if names.is_empty() && emails.is_empty() {
        return None;
    }

    let mut response = format!("**People mentioned in {}:**\n", ctx.document_name);
    if !names.is_empty() {
        response.push_str(&format!("Names: {}\n", listing(&names, ctx.display_limit, ", ")));
    }
    if !emails.is_empty() {
        response.push_str(&format!("Emails: {}\n", listing(&emails, ctx.display_limit, ", ")));
    }
    response.push_str(&format!("\n**Context:** {}", ctx.context));
    Some(response)
}

fn format_summary(ctx: &AnswerContext<'_>) -> Option<String> {
    Some(format!(
        "**Summary from {}:**\n\n{}\n\n*This summary is based on the most relevant sections of the document.*",
        ctx.document_name, ctx.context
    ))
}

fn format_deadlines(ctx: &AnswerContext<'_>) -> Option<String> {
    let deadlines = extract_deadlines(ctx.context);
    if deadlines.is_empty() {
        return None;
    }
    Some(format!(
        "**Deadlines from {}:**\n{}\n\n**Full context:** {}",
        ctx.document_name,
        listing(&deadlines, ctx.display_limit, "\n"),
        ctx.context
    ))
}

fn format_default(ctx: &AnswerContext<'_>) -> Option<String> {
    Some(format!(
        "**From {}:**\n\n{}\n\n*I found this information that seems relevant to your question. Would you like me to search for anything more specific?*",
        ctx.document_name, ctx.context
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(context: &str) -> AnswerContext<'_> {
        AnswerContext {
            document_name: "plan.docx",
            context,
            display_limit: 3,
        }
    }

    #[test]
    fn test_classify_precedence() {
        let cases = [
            ("What is the deadline for the budget?", Intent::Generic),
            ("When is the launch?", Intent::Date),
            ("What date is the launch?", Intent::Date),
            ("How much does the venue cost?", Intent::Money),
            ("When will the budget be approved?", Intent::Date),
            ("Who owns procurement?", Intent::Contact),
            ("Please summarize the proposal", Intent::Summary),
            ("Tell me the deadline", Intent::Deadline),
            ("Tell me about apples", Intent::Generic),
        ];
        for (question, expected) in cases {
            assert_eq!(classify(question).intent, expected, "question: {}", question);
        }
    }

    #[test]
    fn test_classify_unmatched_is_default_rule() {
        assert!(std::ptr::eq(classify("Tell me about apples"), &DEFAULT_RULE));
        assert!(!std::ptr::eq(classify("What is it"), &DEFAULT_RULE));
    }

    #[test]
    fn test_date_rule_leads_with_dates() {
        let (intent, answer) = render("When is kickoff?", &ctx("Kickoff is March 5, 2024 at HQ"));
        assert_eq!(intent, Intent::Date);
        assert!(answer.starts_with("**Dates found in plan.docx:**\nMarch 5, 2024"));
    }

    #[test]
    fn test_declining_rule_falls_through_to_next_triggered() {
        // "when" has no date to list, so "budget" answers.
        let (intent, answer) = render(
            "When is the budget final?",
            &ctx("The budget of $5,000 is final after review"),
        );
        assert_eq!(intent, Intent::Money);
        assert!(answer.starts_with("**Financial information from plan.docx:**\n$5,000"));
    }

    #[test]
    fn test_fall_through_skips_untriggered_rules() {
        // The context has an amount, but nothing in the question asks for money.
        let (intent, answer) = render("When is kickoff?", &ctx("Kickoff costs $200 after approval"));
        assert_eq!(intent, Intent::Generic);
        assert!(answer.starts_with("**From plan.docx:**"));
    }

    #[test]
    fn test_nothing_to_lead_with_uses_default() {
        let (intent, answer) = render("When is kickoff?", &ctx("Kickoff happens soon after approval"));
        assert_eq!(intent, Intent::Generic);
        assert!(answer.starts_with("**From plan.docx:**"));
        assert!(answer.contains("Would you like me to search"));
    }

    #[test]
    fn test_contact_listing() {
        let (intent, answer) = render(
            "Who is the contact?",
            &ctx("Ask jane@example.com or Jane Smith for access"),
        );
        assert_eq!(intent, Intent::Contact);
        assert!(answer.contains("Names: Jane Smith\n"));
        assert!(answer.contains("Emails: jane@example.com\n"));
    }

    #[test]
    fn test_listing_is_capped() {
        let (_, answer) = render(
            "How much?",
            &ctx("Costs are $1.00 and $2.00 and $3.00 and $4.00 in total"),
        );
        assert!(answer.contains("$1.00, $2.00, $3.00\n"));
        assert!(!answer.contains("$4.00,"));
    }

    #[test]
    fn test_deadline_listing() {
        let (intent, answer) = render("Any deadline?", &ctx("Forms are due by Friday noon"));
        assert_eq!(intent, Intent::Deadline);
        assert!(answer.starts_with("**Deadlines from plan.docx:**\nby Friday noon"));
    }

    #[test]
    fn test_summary_framing() {
        let (intent, answer) = render("Summarize it", &ctx("Alpha. Beta"));
        assert_eq!(intent, Intent::Summary);
        assert!(answer.starts_with("**Summary from plan.docx:**\n\nAlpha. Beta"));
    }

    #[test]
    fn test_contextual_framing() {
        let (intent, answer) = render("What are the goals?", &ctx("Grow revenue"));
        assert_eq!(intent, Intent::Generic);
        assert_eq!(answer, "Based on plan.docx, here's what I found:\n\nGrow revenue");
    }
}
