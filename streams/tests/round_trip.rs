//! End-to-end decode and encode scenarios over whole documents.

use as_streams::properties::{ActorProperty, ContentProperty, ObjectProperty, TotalItemsProperty};
use as_streams::terms::{Accept, Collection, Note, OrderedCollectionPage, Person, Question};
use as_streams::{
    deserialize_document, DecodeOptions, Entity, Error, LangString, LanguageMap, ObjectRef,
    PropertyValue, Resolved, XsdDuration,
};
use chrono::TimeDelta;
use serde_json::{json, Value};
use url::Url;

fn url(text: &str) -> Url {
    Url::parse(text).expect("valid url")
}

#[test]
fn accept_with_embedded_note() {
    let raw = json!({
        "type": "Accept",
        "actor": "https://example.com/alice",
        "object": { "type": "Note", "content": "hi" }
    });
    let accept = Accept::from_value(&raw).expect("decodes");

    assert_eq!(accept.actor.len(), 1);
    assert!(accept.actor[0].is_iri());
    assert_eq!(accept.actor[0].as_iri(), Some(&url("https://example.com/alice")));

    assert_eq!(accept.object.len(), 1);
    assert!(accept.object[0].is_object());
    let Some(ObjectRef::Note(note)) = accept.object[0].as_object() else {
        panic!("expected an embedded Note, got {:?}", accept.object[0]);
    };
    assert_eq!(note.content.len(), 1);
    assert!(note.content[0].is_string());
    assert_eq!(note.content[0].as_string().map(String::as_str), Some("hi"));

    assert_eq!(accept.to_value().expect("encodes"), raw);
}

#[test]
fn context_is_dropped_and_unknown_keys_survive() {
    let raw = json!({
        "@context": ["https://www.w3.org/ns/activitystreams", { "x": "https://x.example/" }],
        "type": "Note",
        "x:mood": { "level": 3 },
        "x:tags": [1, "two", null]
    });
    let note = Note::from_value(&raw).expect("decodes");
    assert!(!note.has_unknown("@context"));
    assert_eq!(note.get_unknown("x:mood"), Some(&json!({ "level": 3 })));

    let out = note.to_value().expect("encodes");
    assert_eq!(
        out,
        json!({ "type": "Note", "x:mood": { "level": 3 }, "x:tags": [1, "two", null] })
    );
}

#[test]
fn multiplicity_collapses_singletons_and_keeps_order() {
    let mut note = Note::default();
    note.to.append(url("https://example.com/b"));
    assert_eq!(note.to_value().expect("encodes")["to"], json!("https://example.com/b"));

    note.to.prepend(url("https://example.com/a"));
    note.to.append(url("https://example.com/c"));
    assert_eq!(
        note.to_value().expect("encodes")["to"],
        json!(["https://example.com/a", "https://example.com/b", "https://example.com/c"])
    );

    note.to.remove(1).expect("in range");
    assert_eq!(note.to.len(), 2);
    assert!(matches!(
        note.to.remove(5),
        Err(Error::IndexOutOfRange { property: "to", index: 5, len: 2 })
    ));
}

#[test]
fn type_is_added_once_and_never_duplicated() {
    let mut person = Person::default();
    assert_eq!(person.to_value().expect("encodes")["type"], json!("Person"));

    person.types = vec![json!("x:Bot")];
    assert_eq!(person.to_value().expect("encodes")["type"], json!(["x:Bot", "Person"]));
    // Serializing does not mutate the entity.
    assert_eq!(person.types, vec![json!("x:Bot")]);

    person.types = vec![json!("x:Bot"), json!("Person")];
    assert_eq!(person.to_value().expect("encodes")["type"], json!(["x:Bot", "Person"]));
}

#[test]
fn unmatched_values_fall_back_to_unknown_cells() {
    let raw = json!({
        "type": "Collection",
        "totalItems": -4,
        "items": [{ "name": "untyped" }, "https://example.com/1", 7]
    });
    let collection = Collection::from_value(&raw).expect("decodes");

    assert!(collection.total_items.has_unknown());
    assert_eq!(collection.total_items.unknown(), Some(&json!(-4)));
    assert_eq!(collection.items.len(), 3);
    assert!(collection.items[0].is_unknown());
    assert!(collection.items[1].is_iri());
    assert!(collection.items[2].is_unknown());

    assert_eq!(collection.to_value().expect("encodes"), raw);
}

#[test]
fn functional_properties_take_arrays_whole() {
    let collection = Collection::from_value(&json!({ "type": "Collection", "totalItems": [1, 2] }))
        .expect("decodes");
    assert_eq!(collection.total_items.unknown(), Some(&json!([1, 2])));
    assert_eq!(
        collection.total_items.get().map(TotalItemsProperty::is_unknown),
        Some(true)
    );
}

#[test]
fn set_unknown_uses_a_leading_sentinel_cell() {
    let mut note = Note::default();
    note.content.append("first".to_owned());
    note.content.set_unknown(json!({ "opaque": true }));
    assert_eq!(note.content.len(), 2);
    assert!(note.content.has_unknown());

    note.content.set_unknown(json!(false));
    assert_eq!(note.content.len(), 2);
    assert_eq!(note.content.unknown(), Some(&json!(false)));
    assert_eq!(
        note.to_value().expect("encodes")["content"],
        json!([false, "first"])
    );
}

#[test]
fn language_maps_use_the_map_suffix() {
    let raw = json!({
        "type": "Note",
        "contentMap": { "en": "A cat", "fr": "Un chat" },
        "nameMap": "not a map"
    });
    let note = Note::from_value(&raw).expect("decodes");
    let content = note.content_map.as_ref().expect("contentMap present");
    assert_eq!(content.get("fr"), "Un chat");
    assert_eq!(content.get("de"), "");
    assert!(note.name_map.is_none());
    assert_eq!(note.get_unknown("nameMap"), Some(&json!("not a map")));
    assert_eq!(note.to_value().expect("encodes"), raw);
}

#[test]
fn empty_language_map_is_still_written() {
    let mut note = Note::default();
    note.summary_map = Some(LanguageMap::new());
    assert_eq!(note.to_value().expect("encodes")["summaryMap"], json!({}));
}

#[test]
fn intransitive_activities_have_no_object_slot() {
    let raw = json!({
        "type": "Question",
        "object": "https://example.com/not-declared",
        "oneOf": [{ "type": "Note", "name": "Yes" }, { "type": "Note", "name": "No" }],
        "closed": true
    });
    let question = Question::from_value(&raw).expect("decodes");
    assert!(question.has_unknown("object"));
    assert_eq!(question.one_of.len(), 2);
    assert!(question.closed[0].is_boolean());
    assert_eq!(question.to_value().expect("encodes"), raw);
}

#[test]
fn ordered_pages_inherit_from_both_parents() {
    let raw = json!({
        "type": "OrderedCollectionPage",
        "partOf": { "type": "OrderedCollection", "totalItems": 2 },
        "orderedItems": ["https://example.com/1", "https://example.com/2"],
        "startIndex": 0,
        "items": "https://example.com/not-declared"
    });
    let page = OrderedCollectionPage::from_value(&raw).expect("decodes");
    assert!(page.part_of.get().is_some_and(|p| p.is_collection()));
    assert_eq!(page.ordered_items.len(), 2);
    assert!(page.has_unknown("items"));
    assert_eq!(page.to_value().expect("encodes"), raw);
}

#[test]
fn nesting_beyond_the_limit_is_an_error() {
    let mut raw = json!({ "type": "Note" });
    for _ in 0..10 {
        raw = json!({ "type": "Create", "object": raw });
    }
    let shallow = DecodeOptions { max_depth: 5 };
    assert!(matches!(
        deserialize_document(&raw, &shallow),
        Err(Error::DepthExceeded { limit: 5 })
    ));
    let deep = DecodeOptions { max_depth: 11 };
    assert!(deserialize_document(&raw, &deep).is_ok());
}

#[test]
fn resolved_documents_encode_back() {
    let raw = json!({
        "type": "Like",
        "actor": { "type": "Person", "preferredUsername": "sally" },
        "object": "https://example.com/notes/1"
    });
    let doc = deserialize_document(&raw, &DecodeOptions::default()).expect("decodes");
    let Resolved::Object(ObjectRef::Like(like)) = &doc else {
        panic!("expected a Like, got {doc:?}");
    };
    let actor: &ActorProperty = &like.actor[0];
    assert!(actor.is_object());
    assert_eq!(doc.to_value().expect("encodes"), raw);
}

#[test]
fn property_cells_report_their_alternatives() {
    assert_eq!(ContentProperty::ALTERNATIVES, ["String", "LangString", "Iri"]);
    assert_eq!(ObjectProperty::ALTERNATIVES, ["Object", "Link", "Iri"]);
    let names: Vec<String> = Note::schema().iter().map(|f| f.key()).collect();
    assert!(names.contains(&"contentMap".to_owned()));
    assert!(!names.contains(&"actor".to_owned()));
}

#[test]
fn malformed_json_text_is_reported() {
    assert!(matches!(Note::from_json("{ not json"), Err(Error::Json(_))));
    assert!(matches!(
        Note::from_value(&Value::Null),
        Err(Error::NotAnObject { type_name: "Note", found: "null" })
    ));
}

#[test]
fn tagged_text_round_trips_as_a_value_object() {
    let mut note = Note::default();
    note.content.append("plain".to_owned());
    note.content
        .append(LangString::new("hola").with_language("es".parse().expect("tag")));

    let out = note.to_value().expect("encodes");
    assert_eq!(
        out["content"],
        json!(["plain", { "@value": "hola", "@language": "es" }])
    );
    let back = Note::from_value(&out).expect("decodes");
    assert!(back.content[1].is_lang_string());
    assert_eq!(back, note);
}

#[test]
fn sub_millisecond_durations_round_trip() {
    let mut note = Note::default();
    note.duration.set(XsdDuration(TimeDelta::microseconds(1500)));
    let out = note.to_value().expect("encodes");
    assert_eq!(out["duration"], json!("PT0.0015S"));
    assert_eq!(Note::from_value(&out).expect("decodes"), note);
}

#[test]
fn empty_arrays_on_declared_properties_are_not_written() {
    let note = Note::from_value(&json!({ "type": "Note", "to": [] })).expect("decodes");
    assert!(note.to.is_empty());
    assert_eq!(note.to_value().expect("encodes"), json!({ "type": "Note" }));
}

#[test]
fn context_is_never_an_unknown_key() {
    let mut note = Note::default();
    note.add_unknown("@context", json!("https://www.w3.org/ns/activitystreams"));
    note.add_unknown("x:mood", json!("calm"));
    assert!(!note.has_unknown("@context"));
    assert_eq!(
        note.to_value().expect("encodes"),
        json!({ "type": "Note", "x:mood": "calm" })
    );
}
