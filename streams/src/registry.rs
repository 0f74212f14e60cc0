//! Type-name resolution for embedded and top-level entities.
//!
//! Each reference kind is the closed set of entity types a property
//! alternative of that kind may hold. Resolution is a lookup of the
//! discriminator against the kind's registered names.

use serde_json::{Map, Value};

use crate::entity::Entity;
use crate::error::{Error, Result};
use crate::options::{DecodeOptions, Nesting};
use crate::value;

/// The JSON-LD context documents are published under.
pub const ACTIVITYSTREAMS_CONTEXT: &str = "https://www.w3.org/ns/activitystreams";

reference_kind! {
    /// Any Object type.
    pub enum ObjectRef {
        Object,
        Activity,
        IntransitiveActivity,
        Collection,
        OrderedCollection,
        CollectionPage,
        OrderedCollectionPage,
        Accept,
        TentativeAccept,
        Add,
        Arrive,
        Create,
        Delete,
        Follow,
        Ignore,
        Join,
        Leave,
        Like,
        Offer,
        Invite,
        Reject,
        TentativeReject,
        Remove,
        Undo,
        Update,
        View,
        Listen,
        Read,
        Move,
        Travel,
        Announce,
        Block,
        Flag,
        Dislike,
        Question,
        Application,
        Group,
        Organization,
        Person,
        Service,
        Relationship,
        Article,
        Document,
        Audio,
        Image,
        Video,
        Note,
        Page,
        Event,
        Place,
        Profile,
        Tombstone,
    }
}

reference_kind! {
    /// Any Link type.
    pub enum LinkRef {
        Link,
        Mention,
    }
}

reference_kind! {
    /// Any Collection type, pages included.
    pub enum CollectionRef {
        Collection,
        OrderedCollection,
        CollectionPage,
        OrderedCollectionPage,
    }
}

reference_kind! {
    /// Any CollectionPage type.
    pub enum CollectionPageRef {
        CollectionPage,
        OrderedCollectionPage,
    }
}

/// A decoded top-level document.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// The document named an Object type.
    Object(ObjectRef),
    /// The document named a Link type.
    Link(LinkRef),
}

impl Resolved {
    /// Canonical type name of the decoded entity.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Object(object) => object.type_name(),
            Self::Link(link) => link.type_name(),
        }
    }

    /// Encodes the entity back into a JSON object value.
    ///
    /// # Errors
    ///
    /// Propagates failures encoding any value.
    pub fn to_value(&self) -> Result<Value> {
        match self {
            Self::Object(object) => object.to_value(),
            Self::Link(link) => link.to_value(),
        }
    }

    /// Encodes the entity as a standalone document with the ActivityStreams
    /// `@context` attached.
    ///
    /// # Errors
    ///
    /// Propagates failures encoding any value.
    pub fn to_document(&self) -> Result<Value> {
        let map = match self {
            Self::Object(object) => object.serialize()?,
            Self::Link(link) => link.serialize()?,
        };
        Ok(with_context(map))
    }
}

impl From<ObjectRef> for Resolved {
    fn from(object: ObjectRef) -> Self {
        Self::Object(object)
    }
}

impl From<LinkRef> for Resolved {
    fn from(link: LinkRef) -> Self {
        Self::Link(link)
    }
}

/// Every registered type name, Objects first.
pub fn type_names() -> impl Iterator<Item = &'static str> {
    ObjectRef::TYPE_NAMES.iter().chain(LinkRef::TYPE_NAMES).copied()
}

/// True if some entity is registered under `name`.
#[must_use]
pub fn is_registered(name: &str) -> bool {
    type_names().any(|known| known == name)
}

/// Decodes a document of unknown type by its discriminator.
///
/// Candidate names are tried in order; for each, Object types are tried
/// before Link types.
///
/// # Errors
///
/// Returns [`Error::NotAnObject`] for non-object input,
/// [`Error::UnresolvedType`] if no candidate name is registered, and
/// otherwise as [`Entity::deserialize_with`].
pub fn deserialize_document(raw: &Value, options: &DecodeOptions) -> Result<Resolved> {
    let Value::Object(map) = raw else {
        return Err(Error::NotAnObject {
            type_name: "Object",
            found: value::kind(raw),
        });
    };
    let names = value::type_names(map).unwrap_or_default();
    for name in &names {
        let resolved = ObjectRef::for_type_name(name)
            .map(Resolved::Object)
            .or_else(|| LinkRef::for_type_name(name).map(Resolved::Link));
        let Some(mut resolved) = resolved else {
            tracing::trace!(name = %name, "skipping unregistered type name");
            continue;
        };
        let nesting = Nesting::new(options).enter()?;
        match &mut resolved {
            Resolved::Object(object) => object.deserialize_fields(map, nesting)?,
            Resolved::Link(link) => link.deserialize_fields(map, nesting)?,
        }
        tracing::debug!(type_name = resolved.type_name(), "decoded document");
        return Ok(resolved);
    }
    Err(Error::UnresolvedType {
        names: names.into_iter().map(str::to_owned).collect(),
    })
}

/// Parses JSON text and decodes it as [`deserialize_document`] does.
///
/// # Errors
///
/// Returns [`Error::Json`] for malformed text, and otherwise as
/// [`deserialize_document`].
pub fn document_from_json(text: &str, options: &DecodeOptions) -> Result<Resolved> {
    deserialize_document(&serde_json::from_str(text)?, options)
}

/// Encodes an entity as a standalone document with the ActivityStreams
/// `@context` attached.
///
/// # Errors
///
/// As [`Entity::serialize`].
pub fn to_document<E: Entity>(entity: &E) -> Result<Value> {
    Ok(with_context(entity.serialize()?))
}

fn with_context(mut map: Map<String, Value>) -> Value {
    map.insert(
        value::CONTEXT_KEY.to_owned(),
        Value::String(ACTIVITYSTREAMS_CONTEXT.to_owned()),
    );
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kinds_cover_the_vocabulary() {
        assert_eq!(ObjectRef::TYPE_NAMES.len(), 52);
        assert_eq!(LinkRef::TYPE_NAMES, ["Link", "Mention"]);
        assert!(CollectionPageRef::TYPE_NAMES
            .iter()
            .all(|name| CollectionRef::TYPE_NAMES.contains(name)));
        assert!(is_registered("Tombstone"));
        assert!(!is_registered("Widget"));
    }

    #[test]
    fn resolves_objects_and_links() {
        let opts = DecodeOptions::default();
        let note = deserialize_document(&json!({ "type": "Note" }), &opts).expect("decodes");
        assert_eq!(note.type_name(), "Note");
        let mention = deserialize_document(&json!({ "type": "Mention" }), &opts).expect("decodes");
        assert!(matches!(mention, Resolved::Link(LinkRef::Mention(_))));
    }

    #[test]
    fn skips_unregistered_names() {
        let doc = deserialize_document(&json!({ "type": ["x:Custom", "Person"] }), &DecodeOptions::default())
            .expect("decodes");
        assert_eq!(doc.type_name(), "Person");
        // Both names are kept on the way back out.
        assert_eq!(doc.to_value().expect("encodes")["type"], json!(["x:Custom", "Person"]));
    }

    #[test]
    fn unresolvable_documents_fail() {
        let opts = DecodeOptions::default();
        let err = deserialize_document(&json!({ "type": "Widget" }), &opts).unwrap_err();
        assert!(matches!(err, Error::UnresolvedType { ref names } if names == &["Widget"]));
        let err = deserialize_document(&json!({ "name": "untyped" }), &opts).unwrap_err();
        assert!(matches!(err, Error::UnresolvedType { ref names } if names.is_empty()));
        let err = deserialize_document(&json!("Note"), &opts).unwrap_err();
        assert!(matches!(err, Error::NotAnObject { found: "string", .. }));
    }

    #[test]
    fn documents_carry_the_context() {
        let doc = to_document(&crate::terms::Note::default()).expect("encodes");
        assert_eq!(doc, json!({ "@context": ACTIVITYSTREAMS_CONTEXT, "type": "Note" }));
    }

    #[test]
    fn resolved_documents_carry_the_context() {
        let raw = json!({ "@context": ACTIVITYSTREAMS_CONTEXT, "type": "Mention", "name": "@alice" });
        let doc = deserialize_document(&raw, &DecodeOptions::default()).expect("decodes");
        assert_eq!(doc.to_document().expect("encodes"), raw);
        assert!(doc.to_value().expect("encodes").get("@context").is_none());
    }
}
