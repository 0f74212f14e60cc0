use crate::properties::*;

object_properties! {
    entity! {
        /// A relationship between two individuals: the `subject` is related to
        /// the `object` by `relationship`.
        pub struct Relationship = "Relationship";
    }
    one subject: SubjectProperty,
    many object: ObjectProperty,
    many relationship: RelationshipProperty,
}

object_properties! {
    entity! {
        /// Any kind of multi-paragraph written work.
        pub struct Article = "Article";
    }
}

object_properties! {
    entity! {
        /// A document of any kind.
        pub struct Document = "Document";
    }
}

object_properties! {
    entity! {
        /// An audio document of any kind.
        pub struct Audio = "Audio";
    }
}

object_properties! {
    entity! {
        /// An image document of any kind.
        pub struct Image = "Image";
    }
}

object_properties! {
    entity! {
        /// A video document of any kind.
        pub struct Video = "Video";
    }
}

object_properties! {
    entity! {
        /// A short written work typically less than a single paragraph in
        /// length.
        pub struct Note = "Note";
    }
}

object_properties! {
    entity! {
        /// A Web page.
        pub struct Page = "Page";
    }
}

object_properties! {
    entity! {
        /// Any kind of event.
        pub struct Event = "Event";
    }
}

object_properties! {
    entity! {
        /// A logical or physical location.
        pub struct Place = "Place";
    }
    one accuracy: AccuracyProperty,
    one latitude: LatitudeProperty,
    one longitude: LongitudeProperty,
    one radius: RadiusProperty,
    one units: UnitsProperty,
}

object_properties! {
    entity! {
        /// A content object that describes another object.
        pub struct Profile = "Profile";
    }
    one describes: DescribesProperty,
}

object_properties! {
    entity! {
        /// A content object that has been deleted.
        pub struct Tombstone = "Tombstone";
    }
    many former_type: FormerTypeProperty,
    one deleted: DeletedProperty,
}

link_properties! {
    entity! {
        /// A link that represents an @mention.
        pub struct Mention = "Mention";
    }
}
