//! Core vocabulary model types.
//!
//! These types represent the ActivityStreams 2.0 vocabulary (plus the
//! ActivityPub extensions) as typed Rust data. All instances are built as
//! owned `Vec`s and referenced via borrows. The top-level entry point is
//! [`Vocabulary::full()`](crate::Vocabulary::full).

use std::collections::{BTreeSet, VecDeque};

/// The section of the vocabulary documents a term or property is defined in.
///
/// - `Core`: the ActivityStreams core types (`Object`, `Link`, collections)
/// - `Activity`, `Actor`, `ObjectAndLink`: the extended types
/// - `ActivityPub`: terms added by the ActivityPub protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// ActivityStreams core types.
    Core,
    /// Extended activity types.
    Activity,
    /// Extended actor types.
    Actor,
    /// Extended object and link types.
    ObjectAndLink,
    /// ActivityPub protocol extensions.
    ActivityPub,
}

impl Section {
    /// Returns the short string used in the serialized vocabulary.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Core => "core",
            Section::Activity => "activity",
            Section::Actor => "actor",
            Section::ObjectAndLink => "object-and-link",
            Section::ActivityPub => "activitypub",
        }
    }
}

/// Whether a term describes an object-like or a link-like value.
///
/// Reference alternatives resolve a discriminator against one of these two
/// families, so every term belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermKind {
    /// `as:Object` and its descendants.
    Object,
    /// `as:Link` and its descendants.
    Link,
}

/// A vocabulary type (e.g. `Accept`, `Note`, `Mention`).
#[derive(Debug, Clone)]
pub struct Term {
    /// Full IRI (e.g., `"https://www.w3.org/ns/activitystreams#Accept"`).
    pub id: &'static str,
    /// Compact name used as the JSON `type` discriminator.
    pub label: &'static str,
    /// Description.
    pub comment: &'static str,
    /// Object or link family.
    pub kind: TermKind,
    /// Labels of the direct supertypes.
    pub extends: &'static [&'static str],
    /// Labels of inherited properties this term does not carry.
    pub without: &'static [&'static str],
}

/// One alternative a property value may take.
///
/// The order of a property's [`Property::ranges`] is its deserialization
/// precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Range {
    /// An embedded object-like term.
    Object,
    /// An embedded link-like term.
    Link,
    /// An embedded `Collection` or one of its descendants.
    Collection,
    /// An embedded `CollectionPage` or one of its descendants.
    CollectionPage,
    /// A bare IRI reference.
    Iri,
    /// `xsd:string`.
    String,
    /// `rdf:langString`.
    LangString,
    /// `xsd:float`.
    Float,
    /// `xsd:nonNegativeInteger`.
    NonNegativeInteger,
    /// `xsd:dateTime`.
    DateTime,
    /// `xsd:duration`.
    Duration,
    /// `xsd:boolean`.
    Boolean,
    /// An RFC 2045 media type.
    MediaType,
    /// A BCP 47 language tag.
    LanguageTag,
    /// An RFC 5988 link relation.
    LinkRelation,
    /// A unit of measurement for `Place` distances.
    Units,
}

impl Range {
    /// Returns the alternative name, matching the variant name used by the
    /// generated property cells.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Range::Object => "Object",
            Range::Link => "Link",
            Range::Collection => "Collection",
            Range::CollectionPage => "CollectionPage",
            Range::Iri => "Iri",
            Range::String => "String",
            Range::LangString => "LangString",
            Range::Float => "Float",
            Range::NonNegativeInteger => "NonNegativeInteger",
            Range::DateTime => "DateTime",
            Range::Duration => "Duration",
            Range::Boolean => "Boolean",
            Range::MediaType => "MediaType",
            Range::LanguageTag => "LanguageTag",
            Range::LinkRelation => "LinkRelation",
            Range::Units => "Units",
        }
    }

    /// Returns the IRI of the range class or datatype.
    #[must_use]
    pub fn iri(self) -> &'static str {
        use iris::*;
        match self {
            Range::Object => AS_OBJECT,
            Range::Link => AS_LINK,
            Range::Collection => AS_COLLECTION,
            Range::CollectionPage => AS_COLLECTION_PAGE,
            Range::Iri => XSD_ANY_URI,
            Range::String => XSD_STRING,
            Range::LangString => RDF_LANG_STRING,
            Range::Float => XSD_FLOAT,
            Range::NonNegativeInteger => XSD_NON_NEGATIVE_INTEGER,
            Range::DateTime => XSD_DATETIME,
            Range::Duration => XSD_DURATION,
            Range::Boolean => XSD_BOOLEAN,
            Range::MediaType | Range::LanguageTag | Range::LinkRelation | Range::Units => {
                XSD_STRING
            }
        }
    }

    /// Returns true if this range is an embedded term resolved through the
    /// type registry rather than a scalar codec.
    #[must_use]
    pub fn is_reference(self) -> bool {
        matches!(
            self,
            Range::Object | Range::Link | Range::Collection | Range::CollectionPage
        )
    }
}

/// A vocabulary property definition.
#[derive(Debug, Clone)]
pub struct Property {
    /// Full IRI.
    pub id: &'static str,
    /// Compact name used as the JSON key.
    pub label: &'static str,
    /// Description.
    pub comment: &'static str,
    /// Whether the property holds at most one value.
    pub functional: bool,
    /// Whether the property has a `<label>Map` natural-language sibling.
    pub language_map: bool,
    /// Labels of the terms that declare this property.
    pub domain: &'static [&'static str],
    /// Allowed alternatives in deserialization precedence order.
    pub ranges: &'static [Range],
}

/// A section module: section metadata + terms + properties.
#[derive(Debug, Clone)]
pub struct SectionModule {
    /// Which section this is.
    pub section: Section,
    /// Human-readable label.
    pub label: &'static str,
    /// Description of the section.
    pub comment: &'static str,
    /// All terms defined in this section.
    pub terms: Vec<Term>,
    /// All properties defined in this section.
    pub properties: Vec<Property>,
}

/// The complete vocabulary.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Vocabulary version (e.g., `"2.0"`).
    pub version: &'static str,
    /// Namespace IRI every term and property lives under.
    pub base_iri: &'static str,
    /// The JSON-LD context IRI documents reference.
    pub context_iri: &'static str,
    /// All section modules.
    pub sections: Vec<SectionModule>,
}

impl Vocabulary {
    /// Looks up a term by its compact label. Returns `None` if not found.
    #[must_use]
    pub fn find_term(&self, label: &str) -> Option<&Term> {
        self.terms().find(|t| t.label == label)
    }

    /// Looks up a property by its compact label. Returns `None` if not found.
    #[must_use]
    pub fn find_property(&self, label: &str) -> Option<&Property> {
        self.properties().find(|p| p.label == label)
    }

    /// Iterates every term across all sections.
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.sections.iter().flat_map(|s| s.terms.iter())
    }

    /// Iterates every property across all sections.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.sections.iter().flat_map(|s| s.properties.iter())
    }

    /// Returns the total number of terms across all sections.
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.sections.iter().map(|s| s.terms.len()).sum()
    }

    /// Returns the total number of properties across all sections.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.sections.iter().map(|s| s.properties.len()).sum()
    }

    /// Returns the labels of every transitive supertype of `label`, nearest
    /// first. Unknown labels have no ancestors.
    #[must_use]
    pub fn ancestors(&self, label: &str) -> Vec<&'static str> {
        let mut out = Vec::new();
        let mut pending: VecDeque<&'static str> = self
            .find_term(label)
            .map(|t| t.extends.iter().copied().collect())
            .unwrap_or_default();
        while let Some(next) = pending.pop_front() {
            if out.contains(&next) {
                continue;
            }
            out.push(next);
            if let Some(term) = self.find_term(next) {
                pending.extend(term.extends.iter().copied());
            }
        }
        out
    }

    /// Returns true if `label` is `ancestor` or transitively extends it.
    #[must_use]
    pub fn descends_from(&self, label: &str, ancestor: &str) -> bool {
        label == ancestor || self.ancestors(label).contains(&ancestor)
    }

    /// Returns the labels of every property a term carries: the union of its
    /// supertypes' properties, minus its `without` list, plus the properties
    /// whose domain names it directly.
    #[must_use]
    pub fn properties_of(&self, label: &str) -> BTreeSet<&'static str> {
        let mut set = BTreeSet::new();
        let Some(term) = self.find_term(label) else {
            return set;
        };
        for parent in term.extends {
            set.extend(self.properties_of(parent));
        }
        for excluded in term.without {
            set.remove(excluded);
        }
        for prop in self.properties() {
            if prop.domain.contains(&term.label) {
                set.insert(prop.label);
            }
        }
        set
    }
}

/// Standard IRI constants used across all section modules.
pub mod iris {
    /// ActivityStreams namespace.
    pub const AS: &str = "https://www.w3.org/ns/activitystreams#";
    /// ActivityStreams JSON-LD context document.
    pub const AS_CONTEXT: &str = "https://www.w3.org/ns/activitystreams";
    /// LDP namespace (ActivityPub `inbox`).
    pub const LDP: &str = "http://www.w3.org/ns/ldp#";
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    /// `as:Object`.
    pub const AS_OBJECT: &str = "https://www.w3.org/ns/activitystreams#Object";
    /// `as:Link`.
    pub const AS_LINK: &str = "https://www.w3.org/ns/activitystreams#Link";
    /// `as:Collection`.
    pub const AS_COLLECTION: &str = "https://www.w3.org/ns/activitystreams#Collection";
    /// `as:CollectionPage`.
    pub const AS_COLLECTION_PAGE: &str = "https://www.w3.org/ns/activitystreams#CollectionPage";

    // XSD datatypes
    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:anyURI`.
    pub const XSD_ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
    /// `xsd:float`.
    pub const XSD_FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
    /// `xsd:nonNegativeInteger`.
    pub const XSD_NON_NEGATIVE_INTEGER: &str =
        "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";
    /// `xsd:dateTime`.
    pub const XSD_DATETIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
    /// `xsd:duration`.
    pub const XSD_DURATION: &str = "http://www.w3.org/2001/XMLSchema#duration";
    /// `xsd:boolean`.
    pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    /// `rdf:langString`.
    pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
}
