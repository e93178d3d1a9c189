use std::fmt::Display;

/// Separator placed between names in a rendered listing.
pub const LISTING_SEPARATOR: &str = ", ";

/// Join the items of a sequence into a comma-separated listing.
///
/// Returns `None` for an empty sequence so callers can choose their own
/// placeholder text.
///
/// # Examples
///
/// ```
/// use desk_core::formatting::join_names;
///
/// assert_eq!(join_names(["Alice", "Bob"]), Some("Alice, Bob".to_string()));
/// assert_eq!(join_names(Vec::<&str>::new()), None);
/// ```
pub fn join_names<I>(items: I) -> Option<String>
where
    I: IntoIterator,
    I::Item: Display,
{
    let names: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    if names.is_empty() {
        return None;
    }
    Some(names.join(LISTING_SEPARATOR))
}

/// Substitute `placeholder` when a listing is empty.
///
/// ```
/// use desk_core::formatting::or_placeholder;
///
/// assert_eq!(or_placeholder(None, "Empty"), "Empty");
/// assert_eq!(or_placeholder(Some("Ana".to_string()), "Empty"), "Ana");
/// ```
pub fn or_placeholder(listing: Option<String>, placeholder: &str) -> String {
    listing.unwrap_or_else(|| placeholder.to_string())
}
