use crate::properties::*;

actor_properties! {
    entity! {
        /// A software application.
        pub struct Application = "Application";
    }
}

actor_properties! {
    entity! {
        /// A formal or informal collective of actors.
        pub struct Group = "Group";
    }
}

actor_properties! {
    entity! {
        /// An organization.
        pub struct Organization = "Organization";
    }
}

actor_properties! {
    entity! {
        /// An individual person.
        pub struct Person = "Person";
    }
}

actor_properties! {
    entity! {
        /// A service of any kind.
        pub struct Service = "Service";
    }
}
