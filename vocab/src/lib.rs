//! ActivityStreams 2.0 vocabulary encoded as typed Rust data.
//!
//! The `as-vocab` crate provides the ActivityStreams core and extended
//! vocabulary, together with the ActivityPub extensions, as static Rust data
//! structures: every term with its supertypes, every property with its
//! domain, multiplicity and the ordered list of alternatives its values may
//! take. A JSON-LD serializer renders the whole vocabulary as one document.
//!
//! # Entry Point
//!
//! ```
//! let vocab = as_vocab::Vocabulary::full();
//! assert!(vocab.find_term("Accept").is_some());
//! ```
//!
//! # Serialization
//!
//! ```
//! let vocab = as_vocab::Vocabulary::full();
//! let json_ld = as_vocab::serializer::jsonld::to_json_ld(vocab);
//! assert!(json_ld["@graph"].is_array());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod model;
pub mod sections;
#[cfg(feature = "serializers")]
pub mod serializer;

pub use model::{Property, Range, Section, SectionModule, Term, TermKind, Vocabulary};

impl Vocabulary {
    /// Returns the complete vocabulary with all five sections.
    ///
    /// Assembly order follows the ActivityStreams vocabulary document:
    /// `core → activity → actor → object-and-link → activitypub`
    #[must_use]
    pub fn full() -> &'static Vocabulary {
        static VOCABULARY: std::sync::OnceLock<Vocabulary> = std::sync::OnceLock::new();
        VOCABULARY.get_or_init(|| Vocabulary {
            version: "2.0",
            base_iri: model::iris::AS,
            context_iri: model::iris::AS_CONTEXT,
            sections: vec![
                sections::core::module(),
                sections::activity::module(),
                sections::actor::module(),
                sections::objects::module(),
                sections::activitypub::module(),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_count() {
        assert_eq!(Vocabulary::full().sections.len(), 5);
    }

    #[test]
    fn term_count() {
        // 8 core + 28 activities + 5 actors + 13 object and link types.
        assert_eq!(Vocabulary::full().term_count(), 54);
    }

    #[test]
    fn property_count() {
        // 49 core + 3 question + 10 object-type + 9 ActivityPub.
        assert_eq!(Vocabulary::full().property_count(), 71);
    }

    #[test]
    fn all_term_labels_unique() {
        let mut labels = std::collections::HashSet::new();
        for term in Vocabulary::full().terms() {
            assert!(labels.insert(term.label), "Duplicate term: {}", term.label);
        }
    }

    #[test]
    fn all_property_labels_unique() {
        let mut labels = std::collections::HashSet::new();
        for prop in Vocabulary::full().properties() {
            assert!(labels.insert(prop.label), "Duplicate property: {}", prop.label);
        }
    }

    #[test]
    fn intransitive_activities_have_no_object() {
        let vocab = Vocabulary::full();
        for label in ["IntransitiveActivity", "Arrive", "Travel", "Question"] {
            let props = vocab.properties_of(label);
            assert!(!props.contains("object"), "{label} carries object");
            assert!(props.contains("actor"), "{label} lacks actor");
        }
        assert!(vocab.properties_of("Accept").contains("object"));
    }

    #[test]
    fn ordered_collection_page_inherits_from_both_parents() {
        let vocab = Vocabulary::full();
        let props = vocab.properties_of("OrderedCollectionPage");
        for expected in ["orderedItems", "partOf", "next", "prev", "startIndex", "totalItems"] {
            assert!(props.contains(expected), "missing {expected}");
        }
        assert!(!props.contains("items"));
        assert!(vocab.descends_from("OrderedCollectionPage", "Collection"));
        assert!(vocab.descends_from("OrderedCollectionPage", "CollectionPage"));
    }

    #[test]
    fn ancestors_are_nearest_first() {
        let vocab = Vocabulary::full();
        assert_eq!(vocab.ancestors("TentativeAccept"), ["Accept", "Activity", "Object"]);
        assert!(vocab.ancestors("Object").is_empty());
        assert!(vocab.ancestors("NoSuchTerm").is_empty());
    }

    #[test]
    fn link_properties_are_disjoint_from_activity_properties() {
        let vocab = Vocabulary::full();
        let link = vocab.properties_of("Mention");
        assert!(link.contains("href"));
        assert!(link.contains("name"));
        assert!(!link.contains("actor"));
        assert!(!link.contains("content"));
    }
}
