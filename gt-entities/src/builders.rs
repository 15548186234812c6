pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::entry_builder::*;

pub mod entry_builder {

    use super::*;
    use crate::{entry::*, id::*, time::*};

    #[derive(Debug)]
    pub struct EntryBuild {
        entry: Entry,
    }

    impl EntryBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.entry.id = id.into();
            self
        }
        pub fn author(mut self, uid: &str) -> Self {
            self.entry.author = uid.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.entry.display_name = Some(name.into());
            self
        }
        pub fn anonymous(mut self, anonymous: bool) -> Self {
            self.entry.anonymous = anonymous;
            self
        }
        pub fn text(mut self, text: &str) -> Self {
            self.entry.text = text.into();
            self
        }
        pub fn parent(mut self, id: &str) -> Self {
            self.entry.parent = Some(id.into());
            self
        }
        pub fn created_at(mut self, millis: i64) -> Self {
            self.entry.created_at = Some(Timestamp::from_millis(millis));
            self
        }
        pub fn pending(mut self) -> Self {
            self.entry.created_at = None;
            self
        }
        pub fn finish(self) -> Entry {
            self.entry
        }
    }

    impl Builder for Entry {
        type Build = EntryBuild;
        fn build() -> EntryBuild {
            EntryBuild {
                entry: Entry {
                    id: Id::new(),
                    author: "".into(),
                    display_name: None,
                    anonymous: false,
                    text: "".into(),
                    parent: None,
                    created_at: Some(Timestamp::from_millis(0)),
                },
            }
        }
    }
}
