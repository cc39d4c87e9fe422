// crates/snowclone_match/src/verify/mod.rs
mod regex_impl;

pub use regex_impl::RegexVerify;

/// Normalized wildcard → case-insensitive regex source.
/// Literal runs are escaped; each `*` becomes `\S+`. Nothing is anchored.
pub fn wildcard_to_regex_case_insensitive(pat: &str) -> String {
    let mut rx = String::from("(?i)");
    for (i, literal) in pat.split('*').enumerate() {
        if i > 0 {
            rx.push_str(r"\S+");
        }
        rx.push_str(&regex::escape(literal));
    }
    rx
}
