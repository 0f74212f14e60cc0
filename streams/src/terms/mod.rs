//! One entity per vocabulary term.
//!
//! Inheritance is expressed by the property groups below: each group takes
//! an `entity!` invocation and appends the slots its term contributes
//! before handing it on. A term opts out of an inherited slot by using a
//! narrower group, as `IntransitiveActivity` does for `object`.

macro_rules! object_properties {
    ($callback:ident! { $($head:tt)* } $($rest:tt)*) => {
        $callback! {
            $($head)*
            one id: IdProperty,
            many attachment: AttachmentProperty,
            many attributed_to: AttributedToProperty,
            many audience: AudienceProperty,
            many bcc: BccProperty,
            many bto: BtoProperty,
            many cc: CcProperty,
            many to: ToProperty,
            many content: ContentProperty,
            map content_map: ContentProperty,
            many context: ContextProperty,
            one duration: DurationProperty,
            one end_time: EndTimeProperty,
            many generator: GeneratorProperty,
            many icon: IconProperty,
            many image: ImageProperty,
            many in_reply_to: InReplyToProperty,
            many location: LocationProperty,
            one media_type: MediaTypeProperty,
            many name: NameProperty,
            map name_map: NameProperty,
            many preview: PreviewProperty,
            one published: PublishedProperty,
            one replies: RepliesProperty,
            one start_time: StartTimeProperty,
            many summary: SummaryProperty,
            map summary_map: SummaryProperty,
            many tag: TagProperty,
            one updated: UpdatedProperty,
            many url: UrlProperty,
            one altitude: AltitudeProperty,
            one source: SourceProperty,
            one likes: LikesProperty,
            one shares: SharesProperty,
            $($rest)*
        }
    };
}

macro_rules! link_properties {
    ($callback:ident! { $($head:tt)* } $($rest:tt)*) => {
        $callback! {
            $($head)*
            one id: IdProperty,
            many attributed_to: AttributedToProperty,
            one href: HrefProperty,
            one hreflang: HreflangProperty,
            one media_type: MediaTypeProperty,
            many name: NameProperty,
            map name_map: NameProperty,
            many preview: PreviewProperty,
            many rel: RelProperty,
            one height: HeightProperty,
            one width: WidthProperty,
            $($rest)*
        }
    };
}

macro_rules! intransitive_activity_properties {
    ($callback:ident! { $($head:tt)* } $($rest:tt)*) => {
        object_properties! {
            $callback! { $($head)* }
            many actor: ActorProperty,
            many target: TargetProperty,
            many result: ResultProperty,
            many origin: OriginProperty,
            many instrument: InstrumentProperty,
            $($rest)*
        }
    };
}

macro_rules! activity_properties {
    ($callback:ident! { $($head:tt)* } $($rest:tt)*) => {
        intransitive_activity_properties! {
            $callback! { $($head)* }
            many object: ObjectProperty,
            $($rest)*
        }
    };
}

macro_rules! collection_properties {
    ($callback:ident! { $($head:tt)* } $($rest:tt)*) => {
        object_properties! {
            $callback! { $($head)* }
            one total_items: TotalItemsProperty,
            one current: CurrentProperty,
            one first: FirstProperty,
            one last: LastProperty,
            many items: ItemsProperty,
            $($rest)*
        }
    };
}

// `items` is replaced by `orderedItems` on ordered collections.
macro_rules! ordered_collection_properties {
    ($callback:ident! { $($head:tt)* } $($rest:tt)*) => {
        object_properties! {
            $callback! { $($head)* }
            one total_items: TotalItemsProperty,
            one current: CurrentProperty,
            one first: FirstProperty,
            one last: LastProperty,
            many ordered_items: OrderedItemsProperty,
            $($rest)*
        }
    };
}

macro_rules! actor_properties {
    ($callback:ident! { $($head:tt)* } $($rest:tt)*) => {
        object_properties! {
            $callback! { $($head)* }
            one inbox: InboxProperty,
            one outbox: OutboxProperty,
            one following: FollowingProperty,
            one followers: FollowersProperty,
            one liked: LikedProperty,
            one preferred_username: PreferredUsernameProperty,
            map preferred_username_map: PreferredUsernameProperty,
            $($rest)*
        }
    };
}

mod activities;
mod actors;
mod core_types;
mod objects;

pub use self::activities::*;
pub use self::actors::*;
pub use self::core_types::*;
pub use self::objects::*;
