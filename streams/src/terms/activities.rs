//! Activity types. All but the intransitive ones carry `object`.

use crate::properties::*;

macro_rules! activities {
    ($( $(#[$meta:meta])* $name:ident = $type_name:literal; )+) => {$(
        activity_properties! {
            entity! {
                $(#[$meta])*
                pub struct $name = $type_name;
            }
        }
    )+};
}

macro_rules! intransitive_activities {
    ($( $(#[$meta:meta])* $name:ident = $type_name:literal; )+) => {$(
        intransitive_activity_properties! {
            entity! {
                $(#[$meta])*
                pub struct $name = $type_name;
            }
        }
    )+};
}

activities! {
    /// The actor accepts the object.
    Accept = "Accept";
    /// A tentative acceptance.
    TentativeAccept = "TentativeAccept";
    /// The actor has added the object to the target.
    Add = "Add";
    /// The actor has created the object.
    Create = "Create";
    /// The actor has deleted the object.
    Delete = "Delete";
    /// The actor is following the object.
    Follow = "Follow";
    /// The actor is ignoring the object.
    Ignore = "Ignore";
    /// The actor has joined the object.
    Join = "Join";
    /// The actor has left the object.
    Leave = "Leave";
    /// The actor likes, recommends or endorses the object.
    Like = "Like";
    /// The actor is offering the object.
    Offer = "Offer";
    /// The actor is extending an invitation for the object to the target.
    Invite = "Invite";
    /// The actor is rejecting the object.
    Reject = "Reject";
    /// A tentative rejection.
    TentativeReject = "TentativeReject";
    /// The actor is removing the object.
    Remove = "Remove";
    /// The actor is undoing the object.
    Undo = "Undo";
    /// The actor has updated the object.
    Update = "Update";
    /// The actor has viewed the object.
    View = "View";
    /// The actor has listened to the object.
    Listen = "Listen";
    /// The actor has read the object.
    Read = "Read";
    /// The actor has moved the object from origin to target.
    Move = "Move";
    /// The actor is calling the target's attention to the object.
    Announce = "Announce";
    /// The actor is blocking the object.
    Block = "Block";
    /// The actor is flagging the object.
    Flag = "Flag";
    /// The actor dislikes the object.
    Dislike = "Dislike";
}

intransitive_activities! {
    /// The actor has arrived at the location.
    Arrive = "Arrive";
    /// The actor is traveling to the target from the origin.
    Travel = "Travel";
}

intransitive_activity_properties! {
    entity! {
        /// A question being asked. Possible answers go in `one_of` or
        /// `any_of`, never both.
        pub struct Question = "Question";
    }
    many one_of: OneOfProperty,
    many any_of: AnyOfProperty,
    many closed: ClosedProperty,
}
