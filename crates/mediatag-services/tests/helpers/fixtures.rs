use mediatag_services::NewMedia;

pub fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// Plain-text media with the given tags; the content spells out the name.
pub fn text_media(name: &str, tag_names: &[&str]) -> NewMedia {
    NewMedia::new(
        name,
        tags(tag_names),
        format!("content of {}", name).into_bytes(),
        "text/plain",
    )
}
