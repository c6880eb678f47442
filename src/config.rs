//! External links the site points at. Nothing here is fetched; these are
//! plain hrefs.

pub const APPLY_FORM_URL: &str = "https://forms.gle/enrkDtz4eeo6Kxyf6";
pub const BOOKING_URL: &str = "https://calendly.com/meet-devconnect";
pub const COMMUNITY_TWITTER_URL: &str = "https://twitter.com/devconnecthub";
pub const COMMUNITY_GITHUB_URL: &str = "https://github.com/devconnect-hub";
pub const CONTACT_EMAIL: &str = "hello@devconnect.dev";
