use super::*;

pub fn all_tags(connections: &sqlite::Connections) -> Result<Vec<Tag>> {
    Ok(usecases::all_tags(&connections.shared()?)?)
}

pub fn create_tag(connections: &sqlite::Connections, name: &str) -> Result<Tag> {
    let tag = connections
        .exclusive()?
        .transaction(|conn| usecases::create_tag(conn, name))?;
    Ok(tag)
}
