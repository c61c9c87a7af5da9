//! Text fitting helpers shared by the widgets.

use crate::domain::TransactionType;

/// Truncates `text` to `max_len` characters, replacing the tail with `…`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_end("Server hosting", 8), "Server …");
/// ```
#[must_use]
pub fn truncate_end(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    if max_len == 0 {
        return String::new();
    }
    let mut truncated: String = text.chars().take(max_len - 1).collect();
    truncated.push('…');
    truncated
}

/// Truncates `text` with an ellipsis in the middle, keeping both ends.
///
/// Useful for URLs where the host and the file name matter most.
#[must_use]
pub fn truncate_middle(text: &str, max_len: usize) -> String {
    let len = text.chars().count();
    if len <= max_len {
        return text.to_string();
    }
    if max_len < 5 {
        return text.chars().take(max_len).collect();
    }

    let available = max_len - 1;
    let prefix_len = available.div_ceil(2);
    let suffix_len = available / 2;

    let prefix: String = text.chars().take(prefix_len).collect();
    let suffix: String = text.chars().skip(len - suffix_len).collect();
    format!("{prefix}…{suffix}")
}

/// One-character marker of a transaction kind.
#[must_use]
pub const fn kind_icon(kind: TransactionType) -> &'static str {
    match kind {
        TransactionType::Credit => "+",
        TransactionType::Debit => "-",
    }
}
