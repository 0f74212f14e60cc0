//! Extended activity types.
//!
//! Concrete activities. All of them are transitive except `Arrive`, `Travel`
//! and `Question`, which descend from `IntransitiveActivity` and so carry no
//! `object`.

use crate::model::{Property, Range, Section, SectionModule, Term, TermKind};

/// Returns the activity types section module.
#[must_use]
pub fn module() -> SectionModule {
    SectionModule {
        section: Section::Activity,
        label: "ActivityStreams Activity Types",
        comment: "Activity types describing the actions an actor may perform.",
        terms: terms(),
        properties: properties(),
    }
}

fn terms() -> Vec<Term> {
    vec![
        Term {
            id: "https://www.w3.org/ns/activitystreams#Accept",
            label: "Accept",
            comment: "Indicates that the actor accepts the object.",
            kind: TermKind::Object,
            extends: &["Activity"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#TentativeAccept",
            label: "TentativeAccept",
            comment: "A specialization of Accept indicating that the acceptance is \
                      tentative.",
            kind: TermKind::Object,
            extends: &["Accept"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Add",
            label: "Add",
            comment: "Indicates that the actor has added the object to the target.",
            kind: TermKind::Object,
            extends: &["Activity"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Arrive",
            label: "Arrive",
            comment: "An IntransitiveActivity that indicates that the actor has arrived \
                      at the location.",
            kind: TermKind::Object,
            extends: &["IntransitiveActivity"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Create",
            label: "Create",
            comment: "Indicates that the actor has created the object.",
            kind: TermKind::Object,
            extends: &["Activity"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Delete",
            label: "Delete",
            comment: "Indicates that the actor has deleted the object.",
            kind: TermKind::Object,
            extends: &["Activity"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Follow",
            label: "Follow",
            comment: "Indicates that the actor is following the object.",
            kind: TermKind::Object,
            extends: &["Activity"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Ignore",
            label: "Ignore",
            comment: "Indicates that the actor is ignoring the object.",
            kind: TermKind::Object,
            extends: &["Activity"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Join",
            label: "Join",
            comment: "Indicates that the actor has joined the object.",
            kind: TermKind::Object,
            extends: &["Activity"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Leave",
            label: "Leave",
            comment: "Indicates that the actor has left the object.",
            kind: TermKind::Object,
            extends: &["Activity"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Like",
            label: "Like",
            comment: "Indicates that the actor likes, recommends or endorses the object.",
            kind: TermKind::Object,
            extends: &["Activity"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Offer",
            label: "Offer",
            comment: "Indicates that the actor is offering the object.",
            kind: TermKind::Object,
            extends: &["Activity"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Invite",
            label: "Invite",
            comment: "A specialization of Offer in which the actor is extending an \
                      invitation for the object to the target.",
            kind: TermKind::Object,
            extends: &["Offer"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Reject",
            label: "Reject",
            comment: "Indicates that the actor is rejecting the object.",
            kind: TermKind::Object,
            extends: &["Activity"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#TentativeReject",
            label: "TentativeReject",
            comment: "A specialization of Reject in which the rejection is considered \
                      tentative.",
            kind: TermKind::Object,
            extends: &["Reject"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Remove",
            label: "Remove",
            comment: "Indicates that the actor is removing the object.",
            kind: TermKind::Object,
            extends: &["Activity"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Undo",
            label: "Undo",
            comment: "Indicates that the actor is undoing the object.",
            kind: TermKind::Object,
            extends: &["Activity"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Update",
            label: "Update",
            comment: "Indicates that the actor has updated the object.",
            kind: TermKind::Object,
            extends: &["Activity"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#View",
            label: "View",
            comment: "Indicates that the actor has viewed the object.",
            kind: TermKind::Object,
            extends: &["Activity"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Listen",
            label: "Listen",
            comment: "Indicates that the actor has listened to the object.",
            kind: TermKind::Object,
            extends: &["Activity"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Read",
            label: "Read",
            comment: "Indicates that the actor has read the object.",
            kind: TermKind::Object,
            extends: &["Activity"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Move",
            label: "Move",
            comment: "Indicates that the actor has moved object from origin to target.",
            kind: TermKind::Object,
            extends: &["Activity"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Travel",
            label: "Travel",
            comment: "Indicates that the actor is traveling to target from origin.",
            kind: TermKind::Object,
            extends: &["IntransitiveActivity"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Announce",
            label: "Announce",
            comment: "Indicates that the actor is calling the target's attention the \
                      object.",
            kind: TermKind::Object,
            extends: &["Activity"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Block",
            label: "Block",
            comment: "Indicates that the actor is blocking the object.",
            kind: TermKind::Object,
            extends: &["Ignore"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Flag",
            label: "Flag",
            comment: "Indicates that the actor is flagging the object.",
            kind: TermKind::Object,
            extends: &["Activity"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Dislike",
            label: "Dislike",
            comment: "Indicates that the actor dislikes the object.",
            kind: TermKind::Object,
            extends: &["Activity"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Question",
            label: "Question",
            comment: "Represents a question being asked. Either of the anyOf and oneOf \
                      properties may be used to express possible answers, but a Question \
                      object must not have both.",
            kind: TermKind::Object,
            extends: &["IntransitiveActivity"],
            without: &[],
        },
    ]
}

fn properties() -> Vec<Property> {
    vec![
        Property {
            id: "https://www.w3.org/ns/activitystreams#oneOf",
            label: "oneOf",
            comment: "Identifies an exclusive option for a Question.",
            functional: false,
            language_map: false,
            domain: &["Question"],
            ranges: &[Range::Object, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#anyOf",
            label: "anyOf",
            comment: "Identifies an inclusive option for a Question.",
            functional: false,
            language_map: false,
            domain: &["Question"],
            ranges: &[Range::Object, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#closed",
            label: "closed",
            comment: "Indicates that a question has been closed, and answers are no \
                      longer accepted.",
            functional: false,
            language_map: false,
            domain: &["Question"],
            ranges: &[Range::Object, Range::Link, Range::DateTime, Range::Boolean, Range::Iri],
        },
    ]
}
