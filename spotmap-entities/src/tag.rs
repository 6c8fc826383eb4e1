/// A globally unique, case-sensitive label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tag {
    pub name: String,
}

impl From<String> for Tag {
    fn from(name: String) -> Self {
        Self { name }
    }
}

impl From<Tag> for String {
    fn from(from: Tag) -> Self {
        from.name
    }
}
