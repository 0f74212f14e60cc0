//! Property-based tests for the decode/encode protocol.
//!
//! Arbitrary JSON is thrown at entities and cells to check that decoding
//! never fails on unrecognized content and that encoding gives back what
//! was read.

use as_streams::properties::{ClosedProperty, ContentProperty, ItemsProperty};
use as_streams::terms::{Collection, Create, Mention, Note, Person, Place, Question};
use as_streams::{
    DecodeOptions, Entity, LangString, LinkRef, Nesting, ObjectRef, PropertyValue, XsdDuration,
};
use chrono::{DateTime, FixedOffset, TimeDelta};
use proptest::prelude::*;
use serde_json::{Map, Value};
use url::Url;

/// JSON values without objects carrying a `type` key, so nothing resolves.
fn untyped_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Plain text or a language-tagged value.
fn text() -> impl Strategy<Value = ContentProperty> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,16}".prop_map(ContentProperty::from),
        ("[a-zA-Z ]{0,16}", prop::option::of("[a-z]{2}(-[A-Z]{2})?")).prop_map(|(text, tag)| {
            let text = LangString::new(text);
            ContentProperty::from(match tag {
                Some(tag) => text.with_language(tag.parse().expect("generated tag")),
                None => text,
            })
        }),
    ]
}

fn iri() -> impl Strategy<Value = Url> {
    ("[a-z]{1,8}", "[a-z0-9]{0,8}").prop_map(|(host, path)| {
        Url::parse(&format!("https://{host}.example/{path}")).expect("generated url")
    })
}

fn timestamp() -> impl Strategy<Value = DateTime<FixedOffset>> {
    (0i64..4_000_000_000, 0u32..1_000_000_000, -720i32..=720).prop_map(|(secs, nanos, minutes)| {
        let offset = FixedOffset::east_opt(minutes * 60).expect("offset within a day");
        DateTime::from_timestamp(secs, nanos)
            .expect("timestamp in range")
            .with_timezone(&offset)
    })
}

fn duration() -> impl Strategy<Value = XsdDuration> {
    (-10_000_000_000i64..10_000_000_000, 0u32..1_000_000_000).prop_map(|(secs, nanos)| {
        XsdDuration(TimeDelta::new(secs, nanos).expect("delta in range"))
    })
}

fn mention() -> impl Strategy<Value = Mention> {
    (iri(), prop::option::of("@[a-z]{1,8}")).prop_map(|(href, name)| {
        let mut mention = Mention::default();
        mention.href.set(href);
        if let Some(name) = name {
            mention.name.append(name);
        }
        mention
    })
}

/// A note with every scalar kind a Note slot can hold, nesting one level of
/// embedded objects and links.
fn note() -> impl Strategy<Value = Note> {
    let leaf = (prop::collection::vec(text(), 0..3), prop::option::of(timestamp())).prop_map(
        |(content, published)| {
            let mut note = Note::default();
            note.content = content.into_iter().collect();
            if let Some(published) = published {
                note.published.set(published);
            }
            note
        },
    );
    (
        prop::collection::vec(text(), 0..4),
        prop::option::of(duration()),
        prop::option::of(timestamp()),
        prop::option::of(-1.0e6f64..1.0e6),
        prop::collection::vec(iri(), 0..3),
        prop::collection::vec(leaf, 0..3),
        prop::collection::vec(mention(), 0..3),
    )
        .prop_map(|(content, duration, published, altitude, urls, attachments, mentions)| {
            let mut note = Note::default();
            note.content = content.into_iter().collect();
            if let Some(duration) = duration {
                note.duration.set(duration);
            }
            if let Some(published) = published {
                note.published.set(published);
            }
            if let Some(altitude) = altitude {
                note.altitude.set(altitude);
            }
            for url in urls {
                note.url.append(url);
            }
            for attachment in attachments {
                note.attachment.append(ObjectRef::from(attachment));
            }
            for mention in mentions {
                note.tag.append(LinkRef::from(mention));
            }
            note
        })
}

/// Top-level arrays are excluded: empty and singleton arrays legitimately
/// change shape on a multi-valued property.
fn non_array_json() -> impl Strategy<Value = Value> {
    untyped_json().prop_filter("arrays reshape", |v| !v.is_array())
}

/// Extension keys no term declares.
fn extension_keys() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("x:[a-z]{1,8}", untyped_json(), 0..6)
        .prop_map(|m| m.into_iter().collect())
}

fn nesting() -> Nesting {
    Nesting::new(&DecodeOptions::default())
}

// =============================================================================
// Fallback Properties
// =============================================================================

proptest! {
    /// Cells accept any value and keep the unmatched ones verbatim.
    #[test]
    fn prop_cells_never_fail(raw in untyped_json()) {
        let cell = ItemsProperty::deserialize(&raw, nesting()).expect("cell decodes");
        if let Some(kept) = cell.as_unknown() {
            prop_assert_eq!(kept, &raw);
        }
        prop_assert_eq!(cell.serialize().expect("cell encodes"), raw);
    }

    /// Entities accept any extension keys and write them back.
    #[test]
    fn prop_unknown_keys_survive(extra in extension_keys()) {
        let mut raw = extra.clone();
        raw.insert("type".into(), Value::from("Person"));
        let person = Person::deserialize(&raw).expect("entity decodes");
        for (key, value) in &extra {
            prop_assert_eq!(person.get_unknown(key), Some(value));
        }
        prop_assert_eq!(person.serialize().expect("entity encodes"), raw);
    }

    /// Declared properties holding arbitrary junk still round-trip.
    #[test]
    fn prop_declared_keys_round_trip(content in non_array_json(), result in non_array_json()) {
        let mut raw = Map::new();
        raw.insert("type".into(), Value::from("Create"));
        raw.insert("content".into(), content);
        raw.insert("result".into(), result);
        let create = Create::deserialize(&raw).expect("entity decodes");
        prop_assert_eq!(create.serialize().expect("entity encodes"), raw);
    }
}

// =============================================================================
// Setter-Built Round Trips
// =============================================================================

proptest! {
    /// An entity built through its slots decodes back to an equal entity.
    #[test]
    fn prop_built_notes_round_trip(note in note()) {
        let back = Note::from_value(&note.to_value().expect("encodes")).expect("decodes");
        prop_assert_eq!(back, note);
    }

    /// Counts, booleans and coordinates survive alongside embedded objects.
    #[test]
    fn prop_built_entities_round_trip(
        total in any::<u64>(),
        closed in any::<bool>(),
        latitude in -90.0f64..90.0,
        answer in note(),
    ) {
        let mut collection = Collection::default();
        collection.total_items.set(total);
        collection.items.append(ObjectRef::from(answer.clone()));
        let back = Collection::from_value(&collection.to_value().expect("encodes")).expect("decodes");
        prop_assert_eq!(back, collection);

        let mut question = Question::default();
        question.closed.append(closed);
        question.one_of.append(ObjectRef::from(answer));
        let back = Question::from_value(&question.to_value().expect("encodes")).expect("decodes");
        prop_assert_eq!(back, question);

        let mut place = Place::default();
        place.latitude.set(latitude);
        let back = Place::from_value(&place.to_value().expect("encodes")).expect("decodes");
        prop_assert_eq!(back, place);
    }
}

// =============================================================================
// Precedence Properties
// =============================================================================

proptest! {
    /// A bare string always lands in the first string-like alternative.
    #[test]
    fn prop_strings_prefer_plain_text(text in ".{0,24}") {
        let cell = ContentProperty::deserialize(&Value::String(text.clone()), nesting())
            .expect("cell decodes");
        prop_assert_eq!(cell.as_string(), Some(&text));
    }

    /// Booleans are only ever taken by the boolean alternative.
    #[test]
    fn prop_booleans_are_booleans(flag: bool) {
        let cell = ClosedProperty::deserialize(&Value::Bool(flag), nesting()).expect("cell decodes");
        prop_assert_eq!(cell.as_boolean(), Some(&flag));
    }

    /// Multi-valued properties keep their order through a round trip.
    #[test]
    fn prop_order_is_preserved(texts in prop::collection::vec("[a-z]{1,8}", 2..6)) {
        let mut note = Note::default();
        for text in &texts {
            note.content.append(text.clone());
        }
        let decoded = Note::from_value(&note.to_value().expect("encodes")).expect("decodes");
        let back: Vec<&String> = decoded.content.iter().filter_map(ContentProperty::as_string).collect();
        prop_assert_eq!(back, texts.iter().collect::<Vec<_>>());
    }
}
