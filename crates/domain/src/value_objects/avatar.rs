//! Generated avatar URLs.

/// Base URL of the external avatar-image service.
pub const AVATAR_SERVICE_URL: &str = "https://ui-avatars.com/api/";

/// Builds the generated avatar URL for a display name.
///
/// The name is form-urlencoded, so spaces become `+`.
///
/// ```
/// use linkfeed_domain::generated_avatar_url;
///
/// assert_eq!(
///     generated_avatar_url("Ann"),
///     "https://ui-avatars.com/api/?name=Ann&background=random"
/// );
/// ```
pub fn generated_avatar_url(name: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(name.as_bytes()).collect();
    format!("{AVATAR_SERVICE_URL}?name={encoded}&background=random")
}
