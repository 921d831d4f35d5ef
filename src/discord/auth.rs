//! Helpers around Discord's use of token authentication.

/// A newtype wrapper around Discord user tokens.
#[derive(Clone)]
pub struct UserToken(pub String);

/// Convert a user token to an `Authorization` header value.
///
/// Unlike bot tokens, user tokens are presented raw, with no `Bearer` or
/// `Bot` prefix.
///
/// ```
/// let token = UserToken("mfa.foo".into());
/// assert_eq!(to_auth_header_val(&token), "mfa.foo");
/// ```
pub fn to_auth_header_val(t: &UserToken) -> String {
    t.0.to_owned()
}
