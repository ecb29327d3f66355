mod counted_flag;
mod list;
mod models;
mod pages;
mod samples;

pub use counted_flag::CountedFlag;
pub use list::{parse_tags, prepend, toggle_counted, toggle_flag, ContentId, ContentItem};
pub use models::{
    Authenticity, Community, CommunityDraft, DuaAuthor, DuaRequest, DuaRequestDraft, Event,
    EventKind, EventLocation, EventOrganizer, Hadith, Post, PostAuthor, PostDraft, PostKind, Verse,
    WisdomEntry, WisdomKind, ANONYMOUS_NAME,
};
pub use pages::{
    CommunitiesPage, DuaRequestsPage, EventsPage, ExplorePage, FeedPage, QuranHadithPage,
    ScriptureTab, WisdomPage, ALL_CATEGORIES,
};
pub use samples::{
    sample_communities, sample_dua_requests, sample_events, sample_explore_posts, sample_hadiths,
    sample_posts, sample_verses, sample_wisdom,
};
