use crate::properties::*;

object_properties! {
    entity! {
        /// Describes an object of any kind. The base type for most other kinds
        /// of objects.
        pub struct Object = "Object";
    }
}

link_properties! {
    entity! {
        /// An indirect, qualified reference to a resource identified by a URL.
        pub struct Link = "Link";
    }
}

activity_properties! {
    entity! {
        /// Some form of action that may happen, is happening, or has happened.
        pub struct Activity = "Activity";
    }
}

intransitive_activity_properties! {
    entity! {
        /// An activity without an `object`; the `actor` and `target` carry
        /// its meaning.
        pub struct IntransitiveActivity = "IntransitiveActivity";
    }
}

collection_properties! {
    entity! {
        /// An ordered or unordered set of Object or Link instances.
        pub struct Collection = "Collection";
    }
}

ordered_collection_properties! {
    entity! {
        /// A collection whose members are always strictly ordered.
        pub struct OrderedCollection = "OrderedCollection";
    }
}

collection_properties! {
    entity! {
        /// A distinct subset of the items of a Collection.
        pub struct CollectionPage = "CollectionPage";
    }
    one part_of: PartOfProperty,
    one next: NextProperty,
    one prev: PrevProperty,
}

ordered_collection_properties! {
    entity! {
        /// An ordered subset of the items of an OrderedCollection.
        pub struct OrderedCollectionPage = "OrderedCollectionPage";
    }
    one part_of: PartOfProperty,
    one next: NextProperty,
    one prev: PrevProperty,
    one start_index: StartIndexProperty,
}
