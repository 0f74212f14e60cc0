//! ActivityPub extensions.
//!
//! Actor endpoints and the object-level `source`, `likes` and `shares`
//! properties introduced by the ActivityPub protocol.

use crate::model::{Property, Range, Section, SectionModule};

/// Returns the ActivityPub section module.
#[must_use]
pub fn module() -> SectionModule {
    SectionModule {
        section: Section::ActivityPub,
        label: "ActivityPub Extensions",
        comment: "Properties added to the vocabulary by the ActivityPub protocol.",
        terms: vec![],
        properties: properties(),
    }
}

fn properties() -> Vec<Property> {
    vec![
        Property {
            id: "http://www.w3.org/ns/ldp#inbox",
            label: "inbox",
            comment: "A reference to an OrderedCollection comprised of all the messages \
                      received by the actor.",
            functional: true,
            language_map: false,
            domain: &["Application", "Group", "Organization", "Person", "Service"],
            ranges: &[Range::Collection, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#outbox",
            label: "outbox",
            comment: "An OrderedCollection comprised of all the messages produced by the \
                      actor.",
            functional: true,
            language_map: false,
            domain: &["Application", "Group", "Organization", "Person", "Service"],
            ranges: &[Range::Collection, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#following",
            label: "following",
            comment: "A link to a collection of the actors that this actor is following.",
            functional: true,
            language_map: false,
            domain: &["Application", "Group", "Organization", "Person", "Service"],
            ranges: &[Range::Collection, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#followers",
            label: "followers",
            comment: "A link to a collection of the actors that follow this actor.",
            functional: true,
            language_map: false,
            domain: &["Application", "Group", "Organization", "Person", "Service"],
            ranges: &[Range::Collection, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#liked",
            label: "liked",
            comment: "A link to a collection of objects this actor has liked.",
            functional: true,
            language_map: false,
            domain: &["Application", "Group", "Organization", "Person", "Service"],
            ranges: &[Range::Collection, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#preferredUsername",
            label: "preferredUsername",
            comment: "A short username which may be used to refer to the actor, with no \
                      uniqueness guarantees.",
            functional: true,
            language_map: true,
            domain: &["Application", "Group", "Organization", "Person", "Service"],
            ranges: &[Range::String, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#source",
            label: "source",
            comment: "Conveys the source from which the content markup was derived, as a \
                      form of provenance.",
            functional: true,
            language_map: false,
            domain: &["Object"],
            ranges: &[Range::Object, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#likes",
            label: "likes",
            comment: "A collection of Like activities with this object as the object.",
            functional: true,
            language_map: false,
            domain: &["Object"],
            ranges: &[Range::Collection, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#shares",
            label: "shares",
            comment: "A collection of Announce activities with this object as the \
                      object.",
            functional: true,
            language_map: false,
            domain: &["Object"],
            ranges: &[Range::Collection, Range::Iri],
        },
    ]
}
