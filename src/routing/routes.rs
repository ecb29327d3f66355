//! The navigation surface: a small fixed set of named routes.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Auth,
    VerifyEmail,
    Admin,
    PrayerTimes,
    DailyWisdom,
    QuranHadith,
    DuaRequests,
    Communities,
    Events,
    Profile,
    Explore,
    NotFound,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Auth => "/auth",
            Route::VerifyEmail => "/verify-email",
            Route::Admin => "/admin",
            Route::PrayerTimes => "/prayer-times",
            Route::DailyWisdom => "/daily-wisdom",
            Route::QuranHadith => "/quran-hadith",
            Route::DuaRequests => "/dua-requests",
            Route::Communities => "/communities",
            Route::Events => "/events",
            Route::Profile => "/profile",
            Route::Explore => "/explore",
            Route::NotFound => "/404",
        }
    }

    /// Unknown paths fall through to `NotFound`.
    pub fn from_path(path: &str) -> Route {
        match path.trim_end_matches('/') {
            "" => Route::Home,
            "/auth" => Route::Auth,
            "/verify-email" => Route::VerifyEmail,
            "/admin" => Route::Admin,
            "/prayer-times" => Route::PrayerTimes,
            "/daily-wisdom" => Route::DailyWisdom,
            "/quran-hadith" => Route::QuranHadith,
            "/dua-requests" => Route::DuaRequests,
            "/communities" => Route::Communities,
            "/events" => Route::Events,
            "/profile" => Route::Profile,
            "/explore" => Route::Explore,
            _ => Route::NotFound,
        }
    }

    /// Routes reachable without an active session.
    pub fn is_public(self) -> bool {
        matches!(self, Route::Auth | Route::VerifyEmail | Route::NotFound)
    }

    /// Routes that additionally require an admin session.
    pub fn requires_admin(self) -> bool {
        matches!(self, Route::Admin)
    }
}
