//! Extended object and link types.
//!
//! Also declares the handful of properties only these types carry: the
//! `Place` geometry, `Relationship` triples, `Profile` and `Tombstone`.

use crate::model::{Property, Range, Section, SectionModule, Term, TermKind};

/// Returns the object and link types section module.
#[must_use]
pub fn module() -> SectionModule {
    SectionModule {
        section: Section::ObjectAndLink,
        label: "ActivityStreams Object and Link Types",
        comment: "Object types describing content, places, relationships and deleted \
                  objects, plus the Mention link type.",
        terms: terms(),
        properties: properties(),
    }
}

fn terms() -> Vec<Term> {
    vec![
        Term {
            id: "https://www.w3.org/ns/activitystreams#Relationship",
            label: "Relationship",
            comment: "Describes a relationship between two individuals.",
            kind: TermKind::Object,
            extends: &["Object"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Article",
            label: "Article",
            comment: "Represents any kind of multi-paragraph written work.",
            kind: TermKind::Object,
            extends: &["Object"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Document",
            label: "Document",
            comment: "Represents a document of any kind.",
            kind: TermKind::Object,
            extends: &["Object"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Audio",
            label: "Audio",
            comment: "Represents an audio document of any kind.",
            kind: TermKind::Object,
            extends: &["Document"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Image",
            label: "Image",
            comment: "An image document of any kind.",
            kind: TermKind::Object,
            extends: &["Document"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Video",
            label: "Video",
            comment: "Represents a video document of any kind.",
            kind: TermKind::Object,
            extends: &["Document"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Note",
            label: "Note",
            comment: "Represents a short written work typically less than a single \
                      paragraph in length.",
            kind: TermKind::Object,
            extends: &["Object"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Page",
            label: "Page",
            comment: "Represents a Web Page.",
            kind: TermKind::Object,
            extends: &["Document"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Event",
            label: "Event",
            comment: "Represents any kind of event.",
            kind: TermKind::Object,
            extends: &["Object"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Place",
            label: "Place",
            comment: "Represents a logical or physical location.",
            kind: TermKind::Object,
            extends: &["Object"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Mention",
            label: "Mention",
            comment: "A specialized Link that represents an @mention.",
            kind: TermKind::Link,
            extends: &["Link"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Profile",
            label: "Profile",
            comment: "A Profile is a content object that describes another Object.",
            kind: TermKind::Object,
            extends: &["Object"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Tombstone",
            label: "Tombstone",
            comment: "A Tombstone represents a content object that has been deleted.",
            kind: TermKind::Object,
            extends: &["Object"],
            without: &[],
        },
    ]
}

fn properties() -> Vec<Property> {
    vec![
        Property {
            id: "https://www.w3.org/ns/activitystreams#accuracy",
            label: "accuracy",
            comment: "Indicates the accuracy of position coordinates on a Place objects, \
                      as a percentage.",
            functional: true,
            language_map: false,
            domain: &["Place"],
            ranges: &[Range::Float, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#latitude",
            label: "latitude",
            comment: "The latitude of a place.",
            functional: true,
            language_map: false,
            domain: &["Place"],
            ranges: &[Range::Float, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#longitude",
            label: "longitude",
            comment: "The longitude of a place.",
            functional: true,
            language_map: false,
            domain: &["Place"],
            ranges: &[Range::Float, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#radius",
            label: "radius",
            comment: "The radius from the given latitude and longitude for a Place.",
            functional: true,
            language_map: false,
            domain: &["Place"],
            ranges: &[Range::Float, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#units",
            label: "units",
            comment: "Specifies the measurement units for the radius and altitude \
                      properties on a Place object.",
            functional: true,
            language_map: false,
            domain: &["Place"],
            ranges: &[Range::Units, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#subject",
            label: "subject",
            comment: "On a Relationship object, identifies the subject.",
            functional: true,
            language_map: false,
            domain: &["Relationship"],
            ranges: &[Range::Object, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#relationship",
            label: "relationship",
            comment: "On a Relationship object, describes the type of relationship.",
            functional: false,
            language_map: false,
            domain: &["Relationship"],
            ranges: &[Range::Object, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#describes",
            label: "describes",
            comment: "On a Profile object, identifies the object the profile describes.",
            functional: true,
            language_map: false,
            domain: &["Profile"],
            ranges: &[Range::Object, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#formerType",
            label: "formerType",
            comment: "On a Tombstone object, identifies the type of the object that was \
                      deleted.",
            functional: false,
            language_map: false,
            domain: &["Tombstone"],
            ranges: &[Range::Object, Range::String],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#deleted",
            label: "deleted",
            comment: "On a Tombstone object, indicates the date and time at which the \
                      object was deleted.",
            functional: true,
            language_map: false,
            domain: &["Tombstone"],
            ranges: &[Range::DateTime, Range::Iri],
        },
    ]
}
