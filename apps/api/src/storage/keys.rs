// Logical keys of the local store. Names are kept stable so existing data stays readable.

pub const DRAFTS: &str = "linkedin-drafts";
pub const FAVORITES: &str = "linkedin-favorites";
pub const RECENT_URLS: &str = "linkedin-recent-urls";
pub const POSTS_TODAY: &str = "linkedin-posts-today";
pub const DARK_MODE: &str = "linkedin-dark-mode";
pub const KNOWLEDGE_BASE: &str = "linkedin-knowledge-base";
