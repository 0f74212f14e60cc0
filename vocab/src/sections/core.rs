//! Core types: `Object`, `Link`, activities and collections.
//!
//! Every other term extends one of the two roots defined here. The
//! properties declared in this section cover the bulk of the vocabulary:
//! anything an `Object`, `Link`, `Activity` or `Collection` can carry.

use crate::model::{Property, Range, Section, SectionModule, Term, TermKind};

/// Returns the core section module.
#[must_use]
pub fn module() -> SectionModule {
    SectionModule {
        section: Section::Core,
        label: "ActivityStreams Core Types",
        comment: "The foundational types every ActivityStreams document is built \
                  from.",
        terms: terms(),
        properties: properties(),
    }
}

fn terms() -> Vec<Term> {
    vec![
        Term {
            id: "https://www.w3.org/ns/activitystreams#Object",
            label: "Object",
            comment: "Describes an object of any kind. The Object type serves as the \
                      base type for most of the other kinds of objects defined in the \
                      vocabulary.",
            kind: TermKind::Object,
            extends: &[],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Link",
            label: "Link",
            comment: "A Link is an indirect, qualified reference to a resource \
                      identified by a URL.",
            kind: TermKind::Link,
            extends: &[],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Activity",
            label: "Activity",
            comment: "An Activity is a subtype of Object that describes some form of \
                      action that may happen, is currently happening, or has already \
                      happened.",
            kind: TermKind::Object,
            extends: &["Object"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#IntransitiveActivity",
            label: "IntransitiveActivity",
            comment: "Instances of IntransitiveActivity are a subtype of Activity \
                      representing intransitive actions. The object property is \
                      therefore inappropriate for these activities.",
            kind: TermKind::Object,
            extends: &["Activity"],
            without: &["object"],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#Collection",
            label: "Collection",
            comment: "A Collection is a subtype of Object that represents ordered or \
                      unordered sets of Object or Link instances.",
            kind: TermKind::Object,
            extends: &["Object"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#OrderedCollection",
            label: "OrderedCollection",
            comment: "A subtype of Collection in which members of the logical collection \
                      are assumed to always be strictly ordered.",
            kind: TermKind::Object,
            extends: &["Collection"],
            without: &["items"],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#CollectionPage",
            label: "CollectionPage",
            comment: "Used to represent distinct subsets of items from a Collection.",
            kind: TermKind::Object,
            extends: &["Collection"],
            without: &[],
        },
        Term {
            id: "https://www.w3.org/ns/activitystreams#OrderedCollectionPage",
            label: "OrderedCollectionPage",
            comment: "Used to represent ordered subsets of items from an \
                      OrderedCollection.",
            kind: TermKind::Object,
            extends: &["OrderedCollection", "CollectionPage"],
            without: &["items"],
        },
    ]
}

fn properties() -> Vec<Property> {
    vec![
        Property {
            id: "https://www.w3.org/ns/activitystreams#id",
            label: "id",
            comment: "Provides the globally unique identifier for an Object or Link.",
            functional: true,
            language_map: false,
            domain: &["Object", "Link"],
            ranges: &[Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#attachment",
            label: "attachment",
            comment: "Identifies a resource attached or related to an object that \
                      potentially requires special handling.",
            functional: false,
            language_map: false,
            domain: &["Object"],
            ranges: &[Range::Object, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#attributedTo",
            label: "attributedTo",
            comment: "Identifies one or more entities to which this object is \
                      attributed.",
            functional: false,
            language_map: false,
            domain: &["Object", "Link"],
            ranges: &[Range::Object, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#audience",
            label: "audience",
            comment: "Identifies one or more entities that represent the total \
                      population of entities for which the object can considered to be \
                      relevant.",
            functional: false,
            language_map: false,
            domain: &["Object"],
            ranges: &[Range::Object, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#bcc",
            label: "bcc",
            comment: "Identifies one or more Objects that are part of the private \
                      secondary audience of this Object.",
            functional: false,
            language_map: false,
            domain: &["Object"],
            ranges: &[Range::Object, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#bto",
            label: "bto",
            comment: "Identifies an Object that is part of the private primary audience \
                      of this Object.",
            functional: false,
            language_map: false,
            domain: &["Object"],
            ranges: &[Range::Object, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#cc",
            label: "cc",
            comment: "Identifies an Object that is part of the public secondary audience \
                      of this Object.",
            functional: false,
            language_map: false,
            domain: &["Object"],
            ranges: &[Range::Object, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#to",
            label: "to",
            comment: "Identifies an entity considered to be part of the public primary \
                      audience of an Object.",
            functional: false,
            language_map: false,
            domain: &["Object"],
            ranges: &[Range::Object, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#content",
            label: "content",
            comment: "The content or textual representation of the Object encoded as a \
                      JSON string.",
            functional: false,
            language_map: true,
            domain: &["Object"],
            ranges: &[Range::String, Range::LangString, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#context",
            label: "context",
            comment: "Identifies the context within which the object exists or an \
                      activity was performed.",
            functional: false,
            language_map: false,
            domain: &["Object"],
            ranges: &[Range::Object, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#duration",
            label: "duration",
            comment: "When the object describes a time-bound resource, indicates the \
                      approximate duration.",
            functional: true,
            language_map: false,
            domain: &["Object"],
            ranges: &[Range::Duration, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#endTime",
            label: "endTime",
            comment: "The date and time describing the actual or expected ending time of \
                      the object.",
            functional: true,
            language_map: false,
            domain: &["Object"],
            ranges: &[Range::DateTime, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#generator",
            label: "generator",
            comment: "Identifies the entity that generated the object.",
            functional: false,
            language_map: false,
            domain: &["Object"],
            ranges: &[Range::Object, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#icon",
            label: "icon",
            comment: "Indicates an entity that describes an icon for this object.",
            functional: false,
            language_map: false,
            domain: &["Object"],
            ranges: &[Range::Object, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#image",
            label: "image",
            comment: "Indicates an entity that describes an image for this object.",
            functional: false,
            language_map: false,
            domain: &["Object"],
            ranges: &[Range::Object, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#inReplyTo",
            label: "inReplyTo",
            comment: "Indicates one or more entities for which this object is considered \
                      a response.",
            functional: false,
            language_map: false,
            domain: &["Object"],
            ranges: &[Range::Object, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#location",
            label: "location",
            comment: "Indicates one or more physical or logical locations associated \
                      with the object.",
            functional: false,
            language_map: false,
            domain: &["Object"],
            ranges: &[Range::Object, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#mediaType",
            label: "mediaType",
            comment: "Identifies the MIME media type of the referenced resource or of \
                      the content property.",
            functional: true,
            language_map: false,
            domain: &["Object", "Link"],
            ranges: &[Range::MediaType, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#name",
            label: "name",
            comment: "A simple, human-readable, plain-text name for the object.",
            functional: false,
            language_map: true,
            domain: &["Object", "Link"],
            ranges: &[Range::String, Range::LangString, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#preview",
            label: "preview",
            comment: "Identifies an entity that provides a preview of this object.",
            functional: false,
            language_map: false,
            domain: &["Object", "Link"],
            ranges: &[Range::Object, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#published",
            label: "published",
            comment: "The date and time at which the object was published.",
            functional: true,
            language_map: false,
            domain: &["Object"],
            ranges: &[Range::DateTime, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#replies",
            label: "replies",
            comment: "Identifies a Collection containing objects considered to be \
                      responses to this object.",
            functional: true,
            language_map: false,
            domain: &["Object"],
            ranges: &[Range::Collection, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#startTime",
            label: "startTime",
            comment: "The date and time describing the actual or expected starting time \
                      of the object.",
            functional: true,
            language_map: false,
            domain: &["Object"],
            ranges: &[Range::DateTime, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#summary",
            label: "summary",
            comment: "A natural language summarization of the object encoded as HTML.",
            functional: false,
            language_map: true,
            domain: &["Object"],
            ranges: &[Range::String, Range::LangString, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#tag",
            label: "tag",
            comment: "One or more objects associated with this object that have been \
                      referenced in some way.",
            functional: false,
            language_map: false,
            domain: &["Object"],
            ranges: &[Range::Object, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#updated",
            label: "updated",
            comment: "The date and time at which the object was updated.",
            functional: true,
            language_map: false,
            domain: &["Object"],
            ranges: &[Range::DateTime, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#url",
            label: "url",
            comment: "Identifies one or more links to representations of the object.",
            functional: false,
            language_map: false,
            domain: &["Object"],
            ranges: &[Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#altitude",
            label: "altitude",
            comment: "The altitude of a place, measured in the units given by the units \
                      property.",
            functional: true,
            language_map: false,
            domain: &["Object"],
            ranges: &[Range::Float, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#href",
            label: "href",
            comment: "The target resource pointed to by a Link.",
            functional: true,
            language_map: false,
            domain: &["Link"],
            ranges: &[Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#hreflang",
            label: "hreflang",
            comment: "Hints as to the language used by the target resource.",
            functional: true,
            language_map: false,
            domain: &["Link"],
            ranges: &[Range::LanguageTag, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#rel",
            label: "rel",
            comment: "A link relation associated with a Link.",
            functional: false,
            language_map: false,
            domain: &["Link"],
            ranges: &[Range::LinkRelation, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#height",
            label: "height",
            comment: "A hint as to the rendering height in device-independent pixels of \
                      the linked resource.",
            functional: true,
            language_map: false,
            domain: &["Link"],
            ranges: &[Range::NonNegativeInteger, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#width",
            label: "width",
            comment: "A hint as to the rendering width in device-independent pixels of \
                      the linked resource.",
            functional: true,
            language_map: false,
            domain: &["Link"],
            ranges: &[Range::NonNegativeInteger, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#actor",
            label: "actor",
            comment: "Describes one or more entities that either performed or are \
                      expected to perform the activity.",
            functional: false,
            language_map: false,
            domain: &["Activity"],
            ranges: &[Range::Object, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#object",
            label: "object",
            comment: "When used within an Activity, describes the direct object of the \
                      activity.",
            functional: false,
            language_map: false,
            domain: &["Activity", "Relationship"],
            ranges: &[Range::Object, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#target",
            label: "target",
            comment: "Describes the indirect object, or target, of the activity.",
            functional: false,
            language_map: false,
            domain: &["Activity"],
            ranges: &[Range::Object, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#result",
            label: "result",
            comment: "Describes the result of the activity.",
            functional: false,
            language_map: false,
            domain: &["Activity"],
            ranges: &[Range::Object, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#origin",
            label: "origin",
            comment: "Describes an indirect object of the activity from which the \
                      activity is directed.",
            functional: false,
            language_map: false,
            domain: &["Activity"],
            ranges: &[Range::Object, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#instrument",
            label: "instrument",
            comment: "Identifies one or more objects used (or to be used) in the \
                      completion of an Activity.",
            functional: false,
            language_map: false,
            domain: &["Activity"],
            ranges: &[Range::Object, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#totalItems",
            label: "totalItems",
            comment: "A non-negative integer specifying the total number of objects \
                      contained by the logical view of the collection.",
            functional: true,
            language_map: false,
            domain: &["Collection"],
            ranges: &[Range::NonNegativeInteger, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#current",
            label: "current",
            comment: "In a paged Collection, indicates the page that contains the most \
                      recently updated member items.",
            functional: true,
            language_map: false,
            domain: &["Collection"],
            ranges: &[Range::CollectionPage, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#first",
            label: "first",
            comment: "In a paged Collection, indicates the furthest preceding page of \
                      items in the collection.",
            functional: true,
            language_map: false,
            domain: &["Collection"],
            ranges: &[Range::CollectionPage, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#last",
            label: "last",
            comment: "In a paged Collection, indicates the furthest proceeding page of \
                      the collection.",
            functional: true,
            language_map: false,
            domain: &["Collection"],
            ranges: &[Range::CollectionPage, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#items",
            label: "items",
            comment: "Identifies the items contained in a collection.",
            functional: false,
            language_map: false,
            domain: &["Collection"],
            ranges: &[Range::Object, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#orderedItems",
            label: "orderedItems",
            comment: "Identifies the items contained in an ordered collection, in order.",
            functional: false,
            language_map: false,
            domain: &["OrderedCollection"],
            ranges: &[Range::Object, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#partOf",
            label: "partOf",
            comment: "Identifies the Collection to which a CollectionPage belongs.",
            functional: true,
            language_map: false,
            domain: &["CollectionPage"],
            ranges: &[Range::Link, Range::Collection, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#next",
            label: "next",
            comment: "In a paged Collection, indicates the next page of items.",
            functional: true,
            language_map: false,
            domain: &["CollectionPage"],
            ranges: &[Range::CollectionPage, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#prev",
            label: "prev",
            comment: "In a paged Collection, identifies the previous page of items.",
            functional: true,
            language_map: false,
            domain: &["CollectionPage"],
            ranges: &[Range::CollectionPage, Range::Link, Range::Iri],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#startIndex",
            label: "startIndex",
            comment: "A non-negative integer value identifying the relative position \
                      within the logical view of a strictly ordered collection.",
            functional: true,
            language_map: false,
            domain: &["OrderedCollectionPage"],
            ranges: &[Range::NonNegativeInteger, Range::Iri],
        },
    ]
}
