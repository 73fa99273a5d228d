use directory_core::{MalformedDataError, Record, RecordId, RecordStore, SocialLinks};
use serde::Deserialize;

/// One entry as it appears in the source document.
///
/// Required fields are optional here so that a missing one can be reported
/// with its position instead of as a generic syntax error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRecord {
    id: Option<RecordId>,
    name: Option<String>,
    job_title: Option<String>,
    photo: Option<String>,
    bio: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    #[serde(default)]
    social_links: Option<WireSocialLinks>,
    #[serde(default)]
    skills: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct WireSocialLinks {
    linkedin: Option<String>,
    twitter: Option<String>,
}

/// Decode a JSON array of team entries into a [`RecordStore`].
///
/// All-or-nothing: the first malformed entry fails the whole document.
pub fn decode_records(json: &str) -> Result<RecordStore, MalformedDataError> {
    let wire: Vec<WireRecord> =
        serde_json::from_str(json).map_err(|err| MalformedDataError::Syntax {
            message: err.to_string(),
        })?;

    let records = wire
        .into_iter()
        .enumerate()
        .map(|(index, entry)| into_record(index, entry))
        .collect::<Result<Vec<_>, _>>()?;

    RecordStore::new(records)
}

fn into_record(index: usize, entry: WireRecord) -> Result<Record, MalformedDataError> {
    let missing = |field| MalformedDataError::MissingField { index, field };
    let id = entry.id.ok_or_else(|| missing("id"))?;
    let name = entry.name.ok_or_else(|| missing("name"))?;
    let title = entry.job_title.ok_or_else(|| missing("jobTitle"))?;
    let links = entry.social_links.unwrap_or_default();

    Ok(Record {
        id,
        name,
        title,
        photo: entry.photo,
        bio: entry.bio,
        email: entry.email,
        phone: entry.phone,
        links: SocialLinks {
            professional_network: links.linkedin,
            microblog: links.twitter,
        },
        skills: entry.skills.unwrap_or_default(),
    })
}
