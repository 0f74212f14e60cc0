//! Extended actor types.

use crate::model::{Section, SectionModule, Term, TermKind};

/// Returns the actor types section module.
#[must_use]
pub fn module() -> SectionModule {
    SectionModule {
        section: Section::Actor,
        label: "ActivityStreams Actor Types",
        comment: "Actor types are Object types that are capable of performing \
                  activities.",
        terms: terms(),
        properties: vec![],
    }
}

fn terms() -> Vec<Term> {
    vec![
        Term {
            id: "https://www.w3.org/ns/activitystreams#Application",
            label: "Application",
            comment: "Describes a software application.",
            kind: TermKind::Object,
            extends: &["Object"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Group",
            label: "Group",
            comment: "Represents a formal or informal collective of Actors.",
            kind: TermKind::Object,
            extends: &["Object"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Organization",
            label: "Organization",
            comment: "Represents an organization.",
            kind: TermKind::Object,
            extends: &["Object"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Person",
            label: "Person",
            comment: "Represents an individual person.",
            kind: TermKind::Object,
            extends: &["Object"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Service",
            label: "Service",
            comment: "Represents a service of any kind.",
            kind: TermKind::Object,
            extends: &["Object"],
            without: &[],
        },
    ]
}
