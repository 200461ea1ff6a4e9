use serde::Serialize;

/// Issue title sent to the tracker. Never localized.
pub const ISSUE_TITLE: &str = "New Bug Report";

/// A validated bug-report submission. Lives for one request only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub description: String,
    pub contact: String,
}

impl Submission {
    /// Validates raw form fields into a submission.
    ///
    /// Returns `None` when either field is missing or empty.
    #[must_use]
    pub fn parse(description: Option<String>, contact: Option<String>) -> Option<Self> {
        match (description, contact) {
            (Some(description), Some(contact)) if !description.is_empty() && !contact.is_empty() => {
                Some(Self { description, contact })
            }
            _ => None,
        }
    }
}

/// Payload for the tracker's issue-creation endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
}

impl From<&Submission> for NewIssue {
    fn from(submission: &Submission) -> Self {
        Self {
            title: ISSUE_TITLE.to_string(),
            body: format!(
                "**Description**:\n{}\n\n**Contact**:\n{}",
                submission.description, submission.contact
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_both_fields_present_and_non_empty() {
        let submission = Submission::parse(Some("app crashes".into()), Some("a@b.com".into()));
        assert_eq!(
            submission,
            Some(Submission { description: "app crashes".into(), contact: "a@b.com".into() })
        );
    }

    #[test]
    fn parse_rejects_missing_or_empty_fields() {
        assert_eq!(Submission::parse(None, Some("a@b.com".into())), None);
        assert_eq!(Submission::parse(Some("app crashes".into()), None), None);
        assert_eq!(Submission::parse(Some(String::new()), Some("a@b.com".into())), None);
        assert_eq!(Submission::parse(Some("app crashes".into()), Some(String::new())), None);
        assert_eq!(Submission::parse(None, None), None);
    }

    #[test]
    fn issue_embeds_fields_verbatim_under_fixed_title() {
        let submission =
            Submission { description: "line one\nline two".into(), contact: "a@b.com".into() };
        let issue = NewIssue::from(&submission);

        assert_eq!(issue.title, ISSUE_TITLE);
        assert_eq!(issue.body, "**Description**:\nline one\nline two\n\n**Contact**:\na@b.com");
    }
}
