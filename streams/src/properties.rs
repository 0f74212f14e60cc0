//! One cell type per vocabulary property.
//!
//! Variant names follow the vocabulary's range names and appear in
//! precedence order, embedded terms first.

use chrono::{DateTime, FixedOffset};
use url::Url;

use crate::registry::{CollectionPageRef, CollectionRef, LinkRef, ObjectRef};
use crate::scalar::{LangString, LanguageTag, LinkRelation, MediaType, Units, XsdDuration};

// Most relationship properties share one shape.
macro_rules! object_link_or_iri {
    ($( $(#[$meta:meta])* $name:ident = $key:literal; )+) => {$(
        property! {
            $(#[$meta])*
            pub enum $name = $key {
                references {
                    Object(ObjectRef) => is_object, as_object;
                    Link(LinkRef) => is_link, as_link;
                }
                scalars {
                    Iri(Url) => is_iri, as_iri;
                }
            }
        }
    )+};
}

macro_rules! text_or_iri {
    ($( $(#[$meta:meta])* $name:ident = $key:literal; )+) => {$(
        property! {
            $(#[$meta])*
            pub enum $name = $key {
                references {}
                scalars {
                    String(String) => is_string, as_string;
                    LangString(LangString) => is_lang_string, as_lang_string;
                    Iri(Url) => is_iri, as_iri;
                }
            }
        }
    )+};
}

macro_rules! timestamp_or_iri {
    ($( $(#[$meta:meta])* $name:ident = $key:literal; )+) => {$(
        property! {
            $(#[$meta])*
            pub enum $name = $key {
                references {}
                scalars {
                    DateTime(DateTime<FixedOffset>) => is_date_time, as_date_time;
                    Iri(Url) => is_iri, as_iri;
                }
            }
        }
    )+};
}

macro_rules! float_or_iri {
    ($( $(#[$meta:meta])* $name:ident = $key:literal; )+) => {$(
        property! {
            $(#[$meta])*
            pub enum $name = $key {
                references {}
                scalars {
                    Float(f64) => is_float, as_float;
                    Iri(Url) => is_iri, as_iri;
                }
            }
        }
    )+};
}

macro_rules! count_or_iri {
    ($( $(#[$meta:meta])* $name:ident = $key:literal; )+) => {$(
        property! {
            $(#[$meta])*
            pub enum $name = $key {
                references {}
                scalars {
                    NonNegativeInteger(u64) => is_non_negative_integer, as_non_negative_integer;
                    Iri(Url) => is_iri, as_iri;
                }
            }
        }
    )+};
}

macro_rules! collection_or_iri {
    ($( $(#[$meta:meta])* $name:ident = $key:literal; )+) => {$(
        property! {
            $(#[$meta])*
            pub enum $name = $key {
                references {
                    Collection(CollectionRef) => is_collection, as_collection;
                }
                scalars {
                    Iri(Url) => is_iri, as_iri;
                }
            }
        }
    )+};
}

macro_rules! page_link_or_iri {
    ($( $(#[$meta:meta])* $name:ident = $key:literal; )+) => {$(
        property! {
            $(#[$meta])*
            pub enum $name = $key {
                references {
                    CollectionPage(CollectionPageRef) => is_collection_page, as_collection_page;
                    Link(LinkRef) => is_link, as_link;
                }
                scalars {
                    Iri(Url) => is_iri, as_iri;
                }
            }
        }
    )+};
}

macro_rules! object_or_iri {
    ($( $(#[$meta:meta])* $name:ident = $key:literal; )+) => {$(
        property! {
            $(#[$meta])*
            pub enum $name = $key {
                references {
                    Object(ObjectRef) => is_object, as_object;
                }
                scalars {
                    Iri(Url) => is_iri, as_iri;
                }
            }
        }
    )+};
}

property! {
    /// Provides the globally unique identifier for an Object or Link.
    pub enum IdProperty = "id" {
        references {}
        scalars {
            Iri(Url) => is_iri, as_iri;
        }
    }
}

object_link_or_iri! {
    /// Identifies a resource attached or related to an object.
    AttachmentProperty = "attachment";
    /// Identifies entities to which this object is attributed.
    AttributedToProperty = "attributedTo";
    /// Identifies entities considered part of the public primary audience.
    AudienceProperty = "audience";
    /// Identifies an Object that is part of the private secondary audience.
    BccProperty = "bcc";
    /// Identifies an Object that is part of the private primary audience.
    BtoProperty = "bto";
    /// Identifies an Object that is part of the public secondary audience.
    CcProperty = "cc";
    /// Identifies an entity that is part of the public primary audience.
    ToProperty = "to";
    /// Identifies the context within which the object exists or an activity
    /// was performed.
    ContextProperty = "context";
    /// Identifies the entity that generated the object.
    GeneratorProperty = "generator";
    /// Indicates an entity that describes an icon for this object.
    IconProperty = "icon";
    /// Indicates an entity that describes an image for this object.
    ImageProperty = "image";
    /// Indicates entities for which this object is considered a response.
    InReplyToProperty = "inReplyTo";
    /// Indicates physical or logical locations associated with the object.
    LocationProperty = "location";
    /// Identifies an entity that provides a preview of this object.
    PreviewProperty = "preview";
    /// One or more "tags" associated with an object.
    TagProperty = "tag";
    /// Describes entities that performed or are expected to perform the
    /// activity.
    ActorProperty = "actor";
    /// The direct object of the activity, or the object of a relationship.
    ObjectProperty = "object";
    /// The indirect object, or target, of the activity.
    TargetProperty = "target";
    /// Describes the result of the activity.
    ResultProperty = "result";
    /// Describes an indirect object of the activity from which the activity
    /// is directed.
    OriginProperty = "origin";
    /// Identifies entities used to perform the activity.
    InstrumentProperty = "instrument";
    /// Identifies the items contained in a collection.
    ItemsProperty = "items";
    /// Identifies the items contained in an ordered collection.
    OrderedItemsProperty = "orderedItems";
    /// Identifies an exclusive option for a Question.
    OneOfProperty = "oneOf";
    /// Identifies an inclusive option for a Question.
    AnyOfProperty = "anyOf";
    /// The subject of a Relationship.
    SubjectProperty = "subject";
}

text_or_iri! {
    /// The content or textual representation of the object.
    ContentProperty = "content";
    /// A simple, human-readable, plain-text name for the object.
    NameProperty = "name";
    /// A natural language summarization of the object.
    SummaryProperty = "summary";
}

timestamp_or_iri! {
    /// The date and time describing the actual or expected ending time.
    EndTimeProperty = "endTime";
    /// The date and time at which the object was published.
    PublishedProperty = "published";
    /// The date and time describing the actual or expected starting time.
    StartTimeProperty = "startTime";
    /// The date and time at which the object was updated.
    UpdatedProperty = "updated";
    /// The date and time at which a Tombstone's object was deleted.
    DeletedProperty = "deleted";
}

float_or_iri! {
    /// The altitude of a place, in `units`.
    AltitudeProperty = "altitude";
    /// The accuracy of position coordinates on a Place, in percent.
    AccuracyProperty = "accuracy";
    /// The latitude of a place.
    LatitudeProperty = "latitude";
    /// The longitude of a place.
    LongitudeProperty = "longitude";
    /// The radius from the given latitude and longitude of a Place, in
    /// `units`.
    RadiusProperty = "radius";
}

count_or_iri! {
    /// A hint as to the rendering height in device-independent pixels.
    HeightProperty = "height";
    /// A hint as to the rendering width in device-independent pixels.
    WidthProperty = "width";
    /// The total number of items in a logical view of the collection.
    TotalItemsProperty = "totalItems";
    /// The relative position of the first item in an ordered page.
    StartIndexProperty = "startIndex";
}

collection_or_iri! {
    /// A Collection of responses to this object.
    RepliesProperty = "replies";
    /// An ordered collection of everything the actor has received.
    InboxProperty = "inbox";
    /// An ordered collection of everything the actor has published.
    OutboxProperty = "outbox";
    /// A collection of the actors this actor follows.
    FollowingProperty = "following";
    /// A collection of the actors that follow this actor.
    FollowersProperty = "followers";
    /// A collection of the objects this actor has liked.
    LikedProperty = "liked";
    /// A collection of the Like activities targeting this object.
    LikesProperty = "likes";
    /// A collection of the Announce activities sharing this object.
    SharesProperty = "shares";
}

page_link_or_iri! {
    /// The page that contains the most recently updated member items.
    CurrentProperty = "current";
    /// The furthest preceding page of items in the collection.
    FirstProperty = "first";
    /// The furthest proceeding page of the collection.
    LastProperty = "last";
    /// The next page of items.
    NextProperty = "next";
    /// The previous page of items.
    PrevProperty = "prev";
}

object_or_iri! {
    /// The kind of relationship between a subject and an object.
    RelationshipProperty = "relationship";
    /// The object described by a Profile.
    DescribesProperty = "describes";
    /// The source from which the content markup was derived.
    SourceProperty = "source";
}

property! {
    /// When the object describes a time-bound resource, its approximate
    /// duration.
    pub enum DurationProperty = "duration" {
        references {}
        scalars {
            Duration(XsdDuration) => is_duration, as_duration;
            Iri(Url) => is_iri, as_iri;
        }
    }
}

property! {
    /// The MIME media type of the referenced resource.
    pub enum MediaTypeProperty = "mediaType" {
        references {}
        scalars {
            MediaType(MediaType) => is_media_type, as_media_type;
            Iri(Url) => is_iri, as_iri;
        }
    }
}

property! {
    /// Links to representations of the object.
    pub enum UrlProperty = "url" {
        references {
            Link(LinkRef) => is_link, as_link;
        }
        scalars {
            Iri(Url) => is_iri, as_iri;
        }
    }
}

property! {
    /// The target resource pointed to by a Link.
    pub enum HrefProperty = "href" {
        references {}
        scalars {
            Iri(Url) => is_iri, as_iri;
        }
    }
}

property! {
    /// A hint as to the language used by the target resource.
    pub enum HreflangProperty = "hreflang" {
        references {}
        scalars {
            LanguageTag(LanguageTag) => is_language_tag, as_language_tag;
            Iri(Url) => is_iri, as_iri;
        }
    }
}

property! {
    /// A link relation associated with a Link.
    pub enum RelProperty = "rel" {
        references {}
        scalars {
            LinkRelation(LinkRelation) => is_link_relation, as_link_relation;
            Iri(Url) => is_iri, as_iri;
        }
    }
}

property! {
    /// The collection of which a page is a part.
    pub enum PartOfProperty = "partOf" {
        references {
            Link(LinkRef) => is_link, as_link;
            Collection(CollectionRef) => is_collection, as_collection;
        }
        scalars {
            Iri(Url) => is_iri, as_iri;
        }
    }
}

property! {
    /// Indicates that a question has been closed, and when.
    pub enum ClosedProperty = "closed" {
        references {
            Object(ObjectRef) => is_object, as_object;
            Link(LinkRef) => is_link, as_link;
        }
        scalars {
            DateTime(DateTime<FixedOffset>) => is_date_time, as_date_time;
            Boolean(bool) => is_boolean, as_boolean;
            Iri(Url) => is_iri, as_iri;
        }
    }
}

property! {
    /// The measurement units for `radius` and `altitude`.
    pub enum UnitsProperty = "units" {
        references {}
        scalars {
            Units(Units) => is_units, as_units;
            Iri(Url) => is_iri, as_iri;
        }
    }
}

property! {
    /// The type of the object a Tombstone replaced.
    pub enum FormerTypeProperty = "formerType" {
        references {
            Object(ObjectRef) => is_object, as_object;
        }
        scalars {
            String(String) => is_string, as_string;
        }
    }
}

property! {
    /// A short username for an actor.
    pub enum PreferredUsernameProperty = "preferredUsername" {
        references {}
        scalars {
            String(String) => is_string, as_string;
            Iri(Url) => is_iri, as_iri;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{DecodeOptions, Nesting};
    use crate::property::PropertyValue;
    use serde_json::json;

    fn decode<P: PropertyValue>(raw: serde_json::Value) -> P {
        P::deserialize(&raw, Nesting::new(&DecodeOptions::default())).expect("decodes")
    }

    #[test]
    fn alternatives_follow_declaration_order() {
        assert_eq!(ClosedProperty::ALTERNATIVES, ["Object", "Link", "DateTime", "Boolean", "Iri"]);
        assert_eq!(IdProperty::ALTERNATIVES, ["Iri"]);
        assert_eq!(ContentProperty::NAME, "content");
    }

    #[test]
    fn first_matching_scalar_wins() {
        let content: ContentProperty = decode(json!("https://example.com/a"));
        assert!(content.is_string());
        assert!(!content.is_iri());

        let name: NameProperty = decode(json!({ "@value": "chat", "@language": "fr" }));
        assert!(name.is_lang_string());

        let name: NameProperty = decode(json!({ "@value": 3 }));
        assert!(name.is_unknown());
    }

    #[test]
    fn scalar_falls_through_to_iri() {
        let published: PublishedProperty = decode(json!("https://example.com/when"));
        assert!(published.is_iri());

        let published: PublishedProperty = decode(json!("2015-02-10T15:04:55Z"));
        assert!(published.is_date_time());
    }

    #[test]
    fn objects_resolve_through_the_registry() {
        let actor: ActorProperty = decode(json!({ "type": "Person", "name": "Sally" }));
        assert_eq!(actor.as_object().map(ObjectRef::type_name), Some("Person"));

        let actor: ActorProperty = decode(json!({ "type": "Mention", "href": "https://example.com/" }));
        assert!(actor.is_link());
    }

    #[test]
    fn unresolvable_objects_are_kept_verbatim() {
        let raw = json!({ "type": "Widget", "x": 1 });
        let actor: ActorProperty = decode(raw.clone());
        assert_eq!(actor.as_unknown(), Some(&raw));

        let raw = json!({ "name": "no discriminator" });
        let id: IdProperty = decode(raw.clone());
        assert_eq!(id.as_unknown(), Some(&raw));
    }

    #[test]
    fn later_type_names_are_tried_when_earlier_ones_are_unknown() {
        let actor: ActorProperty = decode(json!({ "type": ["x:Bot", "Service"] }));
        assert_eq!(actor.as_object().map(ObjectRef::type_name), Some("Service"));
    }

    #[test]
    fn reference_alternatives_are_tried_before_each_other_in_order() {
        // A Collection is both an Object and a Collection; `partOf` lists Link
        // then Collection, `replies` only Collection.
        let part_of: PartOfProperty = decode(json!({ "type": "Collection" }));
        assert!(part_of.is_collection());

        let closed: ClosedProperty = decode(json!({ "type": "Collection" }));
        assert!(closed.is_object());
    }

    #[test]
    fn serializes_the_held_alternative() {
        let closed = ClosedProperty::from(true);
        assert_eq!(closed.serialize().expect("encodes"), json!(true));

        let unknown = ClosedProperty::unknown(json!([1, 2]));
        assert_eq!(unknown.serialize().expect("encodes"), json!([1, 2]));
    }

    #[test]
    fn non_finite_floats_fail_to_encode() {
        let altitude = AltitudeProperty::from(f64::NAN);
        assert!(altitude.serialize().is_err());
    }
}
