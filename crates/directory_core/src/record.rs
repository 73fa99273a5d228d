pub type RecordId = i64;

/// Image shown for records without a photo.
pub const PLACEHOLDER_PHOTO: &str = "/placeholder.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SocialChannel {
    ProfessionalNetwork,
    Microblog,
}

impl SocialChannel {
    pub const ALL: [SocialChannel; 2] = [
        SocialChannel::ProfessionalNetwork,
        SocialChannel::Microblog,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SocialChannel::ProfessionalNetwork => "professional-network",
            SocialChannel::Microblog => "microblog",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SocialLinks {
    pub professional_network: Option<String>,
    pub microblog: Option<String>,
}

impl SocialLinks {
    pub fn get(&self, channel: SocialChannel) -> Option<&str> {
        match channel {
            SocialChannel::ProfessionalNetwork => self.professional_network.as_deref(),
            SocialChannel::Microblog => self.microblog.as_deref(),
        }
    }

    /// Present links in channel order.
    pub fn iter(&self) -> impl Iterator<Item = (SocialChannel, &str)> + '_ {
        SocialChannel::ALL
            .into_iter()
            .filter_map(|channel| self.get(channel).map(|url| (channel, url)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// One personnel entry. Immutable once it is inside a [`crate::RecordStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub title: String,
    pub photo: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub links: SocialLinks,
    pub skills: Vec<String>,
}

impl Record {
    /// Minimal record with only the required fields set.
    pub fn new(id: RecordId, name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            title: title.into(),
            photo: None,
            bio: None,
            email: None,
            phone: None,
            links: SocialLinks::default(),
            skills: Vec::new(),
        }
    }

    pub fn photo_ref(&self) -> &str {
        match self.photo.as_deref() {
            Some(photo) if !photo.is_empty() => photo,
            _ => PLACEHOLDER_PHOTO,
        }
    }

    /// Substring predicate over name, title, bio and skills.
    ///
    /// `needle` must already be lowercased; the empty needle matches everything.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let contains = |text: &str| text.to_lowercase().contains(needle);
        contains(self.name.as_str())
            || contains(self.title.as_str())
            || self.bio.as_deref().is_some_and(contains)
            || self.skills.iter().any(|skill| contains(skill.as_str()))
    }
}
