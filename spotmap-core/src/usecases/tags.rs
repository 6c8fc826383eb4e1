use super::prelude::*;

pub fn all_tags<R: TagRepo>(repo: &R) -> Result<Vec<Tag>> {
    Ok(repo.all_tags()?)
}

pub fn create_tag<R: TagRepo>(repo: &R, name: &str) -> Result<Tag> {
    if name.trim().is_empty() {
        return Err(Error::Name);
    }
    let tag = Tag {
        name: name.to_string(),
    };
    repo.create_tag_if_it_does_not_exist(&tag)?;
    Ok(tag)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    #[test]
    fn create_tag_is_an_upsert() {
        let db = MockDb::default();
        assert!(create_tag(&db, "quiet").is_ok());
        assert!(create_tag(&db, "quiet").is_ok());
        assert_eq!(all_tags(&db).unwrap().len(), 1);
    }

    #[test]
    fn tag_names_are_case_sensitive() {
        let db = MockDb::default();
        assert!(create_tag(&db, "quiet").is_ok());
        assert!(create_tag(&db, "Quiet").is_ok());
        assert_eq!(all_tags(&db).unwrap().len(), 2);
    }

    #[test]
    fn reject_empty_tag_name() {
        let db = MockDb::default();
        assert!(matches!(create_tag(&db, "  "), Err(Error::Name)));
    }
}
