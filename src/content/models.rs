//! Content item models: posts, communities, events, dua requests and
//! daily wisdom entries.
//!
//! Counters and per-viewer flags follow the optimistic mutation pattern;
//! none of these entities is synchronized with a backend (deliberate
//! local-only demo mode, see DESIGN.md).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::counted_flag::CountedFlag;
use super::list::{parse_tags, ContentId, ContentItem};

/// Display name used in place of the author for anonymous submissions.
pub const ANONYMOUS_NAME: &str = "Anonim";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Text,
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostAuthor {
    pub name: String,
    pub avatar_url: Option<String>,
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: ContentId,
    pub author: PostAuthor,
    pub content: String,
    pub kind: PostKind,
    pub media_url: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub likes: CountedFlag,
    pub comments: u32,
    pub shares: u32,
    pub is_bookmarked: bool,
    pub created_at: DateTime<Utc>,
}

impl ContentItem for Post {
    fn id(&self) -> &ContentId {
        &self.id
    }
}

#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub content: String,
    pub kind: Option<PostKind>,
    pub category: String,
}

impl PostDraft {
    /// Drives the submit affordance; an unsubmittable draft is rejected
    /// silently, not with an error.
    pub fn is_submittable(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

impl Post {
    /// Builds a post from a draft, or None when a required field is
    /// empty. New posts start with all counters at zero.
    pub fn from_draft(draft: PostDraft, author_name: &str) -> Option<Self> {
        if !draft.is_submittable() {
            return None;
        }
        Some(Self {
            id: ContentId::generate(),
            author: PostAuthor {
                name: author_name.to_string(),
                avatar_url: None,
                verified: false,
            },
            content: draft.content,
            kind: draft.kind.unwrap_or(PostKind::Text),
            media_url: None,
            category: draft.category,
            tags: Vec::new(),
            likes: CountedFlag::zero(),
            comments: 0,
            shares: 0,
            is_bookmarked: false,
            created_at: Utc::now(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Community {
    pub id: ContentId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub is_private: bool,
    pub cover_image: Option<String>,
    pub location: Option<String>,
    /// Flag: the viewer is a member; count: total members.
    pub membership: CountedFlag,
    pub is_admin: bool,
    pub recent_activity: String,
    pub created_at: DateTime<Utc>,
}

impl ContentItem for Community {
    fn id(&self) -> &ContentId {
        &self.id
    }
}

#[derive(Debug, Clone, Default)]
pub struct CommunityDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    pub is_private: bool,
    pub location: String,
}

impl CommunityDraft {
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty() && !self.description.trim().is_empty()
    }
}

impl Community {
    /// The creator joins their own community: membership starts at one
    /// with the flag set, and they administer it.
    pub fn from_draft(draft: CommunityDraft) -> Option<Self> {
        if !draft.is_submittable() {
            return None;
        }
        let location = draft.location.trim();
        Some(Self {
            id: ContentId::generate(),
            name: draft.name,
            description: draft.description,
            category: draft.category,
            is_private: draft.is_private,
            cover_image: None,
            location: if location.is_empty() {
                None
            } else {
                Some(location.to_string())
            },
            membership: CountedFlag::new(true, 1),
            is_admin: true,
            recent_activity: "Şimdi".to_string(),
            created_at: Utc::now(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Conference,
    Seminar,
    Workshop,
    Social,
    Charity,
    Religious,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventLocation {
    pub name: String,
    pub address: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventOrganizer {
    pub name: String,
    pub contact: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: ContentId,
    pub title: String,
    pub description: String,
    pub kind: EventKind,
    pub date: String,
    pub time: String,
    pub location: EventLocation,
    pub organizer: EventOrganizer,
    pub capacity: u32,
    /// Flag: the viewer attends; count: total attendees.
    pub attendance: CountedFlag,
    pub price: u32,
    pub is_online: bool,
    pub is_bookmarked: bool,
    pub tags: Vec<String>,
}

impl ContentItem for Event {
    fn id(&self) -> &ContentId {
        &self.id
    }
}

impl Event {
    pub fn is_free(&self) -> bool {
        self.price == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuaAuthor {
    pub name: String,
    pub is_anonymous: bool,
}

impl DuaAuthor {
    /// The name shown to other viewers.
    pub fn display_name(&self) -> &str {
        if self.is_anonymous {
            ANONYMOUS_NAME
        } else {
            &self.name
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuaRequest {
    pub id: ContentId,
    pub author: DuaAuthor,
    pub title: String,
    pub content: String,
    pub category: String,
    pub is_urgent: bool,
    /// Flag: the viewer prayed; count: total prayers.
    pub prayers: CountedFlag,
    pub comments: u32,
    pub is_bookmarked: bool,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl ContentItem for DuaRequest {
    fn id(&self) -> &ContentId {
        &self.id
    }
}

#[derive(Debug, Clone, Default)]
pub struct DuaRequestDraft {
    pub title: String,
    pub content: String,
    pub category: String,
    pub is_urgent: bool,
    pub is_anonymous: bool,
    /// Comma-separated, as typed.
    pub tags: String,
}

impl DuaRequestDraft {
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }
}

impl DuaRequest {
    /// Builds a request from a draft, or None when a required field is
    /// empty. Anonymous requests carry the placeholder name instead of
    /// the submitter's.
    pub fn from_draft(draft: DuaRequestDraft, submitter_name: &str) -> Option<Self> {
        if !draft.is_submittable() {
            return None;
        }
        let name = if draft.is_anonymous {
            ANONYMOUS_NAME.to_string()
        } else {
            submitter_name.to_string()
        };
        Some(Self {
            id: ContentId::generate(),
            author: DuaAuthor {
                name,
                is_anonymous: draft.is_anonymous,
            },
            title: draft.title,
            content: draft.content,
            category: draft.category,
            is_urgent: draft.is_urgent,
            prayers: CountedFlag::zero(),
            comments: 0,
            is_bookmarked: false,
            tags: parse_tags(&draft.tags),
            created_at: Utc::now(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WisdomKind {
    Verse,
    Hadith,
    Quote,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WisdomEntry {
    pub id: ContentId,
    pub kind: WisdomKind,
    pub text: String,
    pub translation: String,
    pub source: String,
    pub category: String,
    pub likes: CountedFlag,
    pub is_bookmarked: bool,
}

impl ContentItem for WisdomEntry {
    fn id(&self) -> &ContentId {
        &self.id
    }
}

/// A Quran verse in the scripture browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verse {
    pub id: ContentId,
    pub surah_name: String,
    pub surah_number: u32,
    pub verse_number: u32,
    pub text_arabic: String,
    pub text: String,
    pub transliteration: Option<String>,
    pub category: String,
    pub likes: CountedFlag,
    pub is_bookmarked: bool,
}

impl ContentItem for Verse {
    fn id(&self) -> &ContentId {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Authenticity {
    Sahih,
    Hasan,
    Daif,
}

/// A hadith in the scripture browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hadith {
    pub id: ContentId,
    pub source_name: String,
    pub source_book: String,
    pub source_number: String,
    pub text_arabic: String,
    pub text: String,
    pub narrator: String,
    pub category: String,
    pub authenticity: Authenticity,
    pub likes: CountedFlag,
    pub is_bookmarked: bool,
}

impl ContentItem for Hadith {
    fn id(&self) -> &ContentId {
        &self.id
    }
}
