//! Page-level list state.
//!
//! Each page owns an independent in-memory list seeded from sample data
//! plus its filter inputs. Mutations go through the generic list ops so
//! every toggle touches exactly one item.

use super::list::{prepend, toggle_counted, toggle_flag, ContentId};
use super::models::{
    Community, CommunityDraft, DuaRequest, DuaRequestDraft, Event, Hadith, Post, PostDraft, Verse,
    WisdomEntry,
};
use super::samples;

/// The pseudo-category that disables category filtering.
pub const ALL_CATEGORIES: &str = "Tümü";

fn matches_term(haystack: &str, term: &str) -> bool {
    haystack.to_lowercase().contains(&term.to_lowercase())
}

/// Home feed.
pub struct FeedPage {
    pub posts: Vec<Post>,
}

impl FeedPage {
    pub fn new() -> Self {
        Self {
            posts: samples::sample_posts(),
        }
    }

    pub fn toggle_like(&mut self, id: &ContentId) -> bool {
        toggle_counted(&mut self.posts, id, |p| &mut p.likes)
    }

    /// Publishes a draft to the top of the feed. Unsubmittable drafts
    /// are dropped without feedback.
    pub fn create_post(&mut self, draft: PostDraft, author_name: &str) -> bool {
        match Post::from_draft(draft, author_name) {
            Some(post) => {
                prepend(&mut self.posts, post);
                true
            }
            None => false,
        }
    }
}

impl Default for FeedPage {
    fn default() -> Self {
        Self::new()
    }
}

pub struct CommunitiesPage {
    pub communities: Vec<Community>,
    pub selected_category: String,
    pub search_term: String,
}

impl CommunitiesPage {
    pub fn new() -> Self {
        Self {
            communities: samples::sample_communities(),
            selected_category: ALL_CATEGORIES.to_string(),
            search_term: String::new(),
        }
    }

    pub fn toggle_membership(&mut self, id: &ContentId) -> bool {
        toggle_counted(&mut self.communities, id, |c| &mut c.membership)
    }

    pub fn create_community(&mut self, draft: CommunityDraft) -> bool {
        match Community::from_draft(draft) {
            Some(community) => {
                prepend(&mut self.communities, community);
                true
            }
            None => false,
        }
    }

    /// Communities matching the active category and search term.
    pub fn filtered(&self) -> Vec<&Community> {
        self.communities
            .iter()
            .filter(|c| {
                let matches_category = self.selected_category == ALL_CATEGORIES
                    || c.category == self.selected_category;
                let matches_search = self.search_term.is_empty()
                    || matches_term(&c.name, &self.search_term)
                    || matches_term(&c.description, &self.search_term);
                matches_category && matches_search
            })
            .collect()
    }

    /// The viewer's own communities, for the sidebar shortlist.
    pub fn joined(&self) -> Vec<&Community> {
        self.communities
            .iter()
            .filter(|c| c.membership.active)
            .collect()
    }
}

impl Default for CommunitiesPage {
    fn default() -> Self {
        Self::new()
    }
}

pub struct EventsPage {
    pub events: Vec<Event>,
    pub search_term: String,
    pub show_online_only: bool,
    pub show_free_only: bool,
}

impl EventsPage {
    pub fn new() -> Self {
        Self {
            events: samples::sample_events(),
            search_term: String::new(),
            show_online_only: false,
            show_free_only: false,
        }
    }

    pub fn toggle_attendance(&mut self, id: &ContentId) -> bool {
        toggle_counted(&mut self.events, id, |e| &mut e.attendance)
    }

    pub fn toggle_bookmark(&mut self, id: &ContentId) -> bool {
        toggle_flag(&mut self.events, id, |e| &mut e.is_bookmarked)
    }

    pub fn filtered(&self) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| {
                let matches_search = self.search_term.is_empty()
                    || matches_term(&e.title, &self.search_term)
                    || matches_term(&e.description, &self.search_term)
                    || e.tags.iter().any(|t| matches_term(t, &self.search_term));
                let matches_online = !self.show_online_only || e.is_online;
                let matches_free = !self.show_free_only || e.is_free();
                matches_search && matches_online && matches_free
            })
            .collect()
    }

    pub fn attending(&self) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.attendance.active)
            .collect()
    }
}

impl Default for EventsPage {
    fn default() -> Self {
        Self::new()
    }
}

pub struct DuaRequestsPage {
    pub requests: Vec<DuaRequest>,
    pub selected_category: String,
    pub search_term: String,
    pub show_urgent_only: bool,
}

impl DuaRequestsPage {
    pub fn new() -> Self {
        Self {
            requests: samples::sample_dua_requests(),
            selected_category: ALL_CATEGORIES.to_string(),
            search_term: String::new(),
            show_urgent_only: false,
        }
    }

    pub fn toggle_prayed(&mut self, id: &ContentId) -> bool {
        toggle_counted(&mut self.requests, id, |r| &mut r.prayers)
    }

    pub fn toggle_bookmark(&mut self, id: &ContentId) -> bool {
        toggle_flag(&mut self.requests, id, |r| &mut r.is_bookmarked)
    }

    pub fn create_request(&mut self, draft: DuaRequestDraft, submitter_name: &str) -> bool {
        match DuaRequest::from_draft(draft, submitter_name) {
            Some(request) => {
                prepend(&mut self.requests, request);
                true
            }
            None => false,
        }
    }

    /// Bumps the comment counter; the comment body itself is not kept.
    /// Blank comments are ignored, like any other unsubmittable draft.
    pub fn add_comment(&mut self, id: &ContentId, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        match self.requests.iter_mut().find(|r| &r.id == id) {
            Some(request) => {
                request.comments += 1;
                true
            }
            None => false,
        }
    }

    pub fn filtered(&self) -> Vec<&DuaRequest> {
        self.requests
            .iter()
            .filter(|r| {
                let matches_category = self.selected_category == ALL_CATEGORIES
                    || r.category == self.selected_category;
                let matches_search = self.search_term.is_empty()
                    || matches_term(&r.title, &self.search_term)
                    || matches_term(&r.content, &self.search_term)
                    || r.tags.iter().any(|t| matches_term(t, &self.search_term));
                let matches_urgent = !self.show_urgent_only || r.is_urgent;
                matches_category && matches_search && matches_urgent
            })
            .collect()
    }
}

impl Default for DuaRequestsPage {
    fn default() -> Self {
        Self::new()
    }
}

/// Discovery feed of featured posts.
pub struct ExplorePage {
    pub posts: Vec<Post>,
    pub selected_category: String,
    pub search_term: String,
}

impl ExplorePage {
    pub fn new() -> Self {
        Self {
            posts: samples::sample_explore_posts(),
            selected_category: ALL_CATEGORIES.to_string(),
            search_term: String::new(),
        }
    }

    pub fn toggle_like(&mut self, id: &ContentId) -> bool {
        toggle_counted(&mut self.posts, id, |p| &mut p.likes)
    }

    pub fn toggle_bookmark(&mut self, id: &ContentId) -> bool {
        toggle_flag(&mut self.posts, id, |p| &mut p.is_bookmarked)
    }

    pub fn filtered(&self) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|p| {
                let matches_category = self.selected_category == ALL_CATEGORIES
                    || p.category == self.selected_category;
                let matches_search = self.search_term.is_empty()
                    || matches_term(&p.content, &self.search_term)
                    || p.tags.iter().any(|t| matches_term(t, &self.search_term));
                matches_category && matches_search
            })
            .collect()
    }
}

impl Default for ExplorePage {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptureTab {
    Quran,
    Hadith,
}

/// Scripture browser with independent verse and hadith lists.
pub struct QuranHadithPage {
    pub verses: Vec<Verse>,
    pub hadiths: Vec<Hadith>,
    pub active_tab: ScriptureTab,
    pub selected_category: String,
    pub search_term: String,
}

impl QuranHadithPage {
    pub fn new() -> Self {
        Self {
            verses: samples::sample_verses(),
            hadiths: samples::sample_hadiths(),
            active_tab: ScriptureTab::Quran,
            selected_category: ALL_CATEGORIES.to_string(),
            search_term: String::new(),
        }
    }

    pub fn toggle_verse_like(&mut self, id: &ContentId) -> bool {
        toggle_counted(&mut self.verses, id, |v| &mut v.likes)
    }

    pub fn toggle_verse_bookmark(&mut self, id: &ContentId) -> bool {
        toggle_flag(&mut self.verses, id, |v| &mut v.is_bookmarked)
    }

    pub fn toggle_hadith_like(&mut self, id: &ContentId) -> bool {
        toggle_counted(&mut self.hadiths, id, |h| &mut h.likes)
    }

    pub fn toggle_hadith_bookmark(&mut self, id: &ContentId) -> bool {
        toggle_flag(&mut self.hadiths, id, |h| &mut h.is_bookmarked)
    }

    pub fn filtered_verses(&self) -> Vec<&Verse> {
        self.verses
            .iter()
            .filter(|v| {
                let matches_category = self.selected_category == ALL_CATEGORIES
                    || v.category == self.selected_category;
                let matches_search = self.search_term.is_empty()
                    || matches_term(&v.text, &self.search_term)
                    || matches_term(&v.surah_name, &self.search_term);
                matches_category && matches_search
            })
            .collect()
    }

    pub fn filtered_hadiths(&self) -> Vec<&Hadith> {
        self.hadiths
            .iter()
            .filter(|h| {
                let matches_category = self.selected_category == ALL_CATEGORIES
                    || h.category == self.selected_category;
                let matches_search = self.search_term.is_empty()
                    || matches_term(&h.text, &self.search_term)
                    || matches_term(&h.source_name, &self.search_term);
                matches_category && matches_search
            })
            .collect()
    }
}

impl Default for QuranHadithPage {
    fn default() -> Self {
        Self::new()
    }
}

pub struct WisdomPage {
    pub entries: Vec<WisdomEntry>,
    pub selected_category: String,
    pub current_index: usize,
}

impl WisdomPage {
    pub fn new() -> Self {
        Self {
            entries: samples::sample_wisdom(),
            selected_category: ALL_CATEGORIES.to_string(),
            current_index: 0,
        }
    }

    pub fn toggle_like(&mut self, id: &ContentId) -> bool {
        toggle_counted(&mut self.entries, id, |w| &mut w.likes)
    }

    pub fn toggle_bookmark(&mut self, id: &ContentId) -> bool {
        toggle_flag(&mut self.entries, id, |w| &mut w.is_bookmarked)
    }

    pub fn filtered(&self) -> Vec<&WisdomEntry> {
        self.entries
            .iter()
            .filter(|w| {
                self.selected_category == ALL_CATEGORIES || w.category == self.selected_category
            })
            .collect()
    }

    /// Entry the carousel currently shows, falling back to the first
    /// filtered entry when the index went stale after a filter change.
    pub fn current(&self) -> Option<&WisdomEntry> {
        let filtered = self.filtered();
        filtered
            .get(self.current_index)
            .or_else(|| filtered.first())
            .copied()
    }

    pub fn next(&mut self) {
        let len = self.filtered().len();
        if len > 0 {
            self.current_index = (self.current_index + 1) % len;
        }
    }

    pub fn previous(&mut self) {
        let len = self.filtered().len();
        if len > 0 {
            self.current_index = (self.current_index + len - 1) % len;
        }
    }
}

impl Default for WisdomPage {
    fn default() -> Self {
        Self::new()
    }
}
