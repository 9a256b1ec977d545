//! GitHub handle validation shared by every entry point.

#[cfg(test)]
#[path = "handle_tests.rs"]
mod tests;

/// Longest handle GitHub allows.
pub const MAX_HANDLE_LENGTH: usize = 39;

/// Checks a handle is present and 1 to [`MAX_HANDLE_LENGTH`] characters long.
///
/// Returns the list of problems; an empty list means the handle is valid.
///
/// ```
/// use statcard_core::validate_username;
///
/// assert!(validate_username(Some("octocat")).is_empty());
/// assert_eq!(validate_username(None), vec!["Required"]);
/// ```
pub fn validate_username(username: Option<&str>) -> Vec<String> {
    let Some(username) = username else {
        return vec!["Required".to_string()];
    };

    let length = username.chars().count();
    if length < 1 {
        vec!["String must contain at least 1 character(s)".to_string()]
    } else if length > MAX_HANDLE_LENGTH {
        vec![format!(
            "String must contain at most {MAX_HANDLE_LENGTH} character(s)"
        )]
    } else {
        Vec::new()
    }
}
