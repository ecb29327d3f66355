//! Seeded identities shared by the integration tests.

pub const USER_ID: &str = "id-ayse";
pub const USER_EMAIL: &str = "ayse@example.com";
pub const USER_PASSWORD: &str = "correct horse";
pub const USER_NAME: &str = "Ayşe Kaya";
pub const USER_USERNAME: &str = "ayse";

pub const ADMIN_ID: &str = "id-imam";
pub const ADMIN_EMAIL: &str = "imam@example.com";
pub const ADMIN_PASSWORD: &str = "minaret";
pub const ADMIN_USERNAME: &str = "imam";
