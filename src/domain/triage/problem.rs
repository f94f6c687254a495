//! Problem type classification.
//!
//! The self-reported topic of distress, collected once per problem cycle
//! and used to seed focused replies and the wrap-up action plan.

use serde::{Deserialize, Serialize};

/// The self-reported topic of a user's current problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProblemType {
    /// Breakup, infidelity, partner conflict.
    Relationship,

    /// Job loss, workplace betrayal, career distress.
    Job,

    /// Anything that matched neither category.
    #[default]
    Other,
}

impl ProblemType {
    /// Short label for logs and UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Relationship => "relationship",
            Self::Job => "job",
            Self::Other => "other",
        }
    }

    /// Directive fragment used to seed the generator's system prompt.
    pub fn directive(&self) -> &'static str {
        match self {
            Self::Relationship => {
                "The user is dealing with a relationship betrayal or breakup. \
                 Validate the hurt, never blame them, and offer one small stabilizing step."
            }
            Self::Job => {
                "The user is dealing with a job loss or workplace betrayal. \
                 Acknowledge the unfairness and offer one practical and one emotional step."
            }
            Self::Other => {
                "The user is going through something hard. Sit with them, \
                 offer grounding, and keep suggestions small and concrete."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_problem_type_is_other() {
        assert_eq!(ProblemType::default(), ProblemType::Other);
    }

    #[test]
    fn serializes_to_snake_case() {
        let json = serde_json::to_string(&ProblemType::Relationship).unwrap();
        assert_eq!(json, "\"relationship\"");
    }

    #[test]
    fn all_types_have_labels_and_directives() {
        for pt in [ProblemType::Relationship, ProblemType::Job, ProblemType::Other] {
            assert!(!pt.label().is_empty());
            assert!(!pt.directive().is_empty());
        }
    }
}
