//! # accountd
//!
//! A minimal user-account backend: signup, login and user listing over HTTP.
//!
//! Accounts are keyed by email address. Passwords are stored as one-way bcrypt
//! hashes and never leave the credential store in any read path.
//!
//! Two interchangeable credential stores exist, selected at startup:
//!
//! - **postgres**: a durable `users` table with a unique index on the email
//!   column (the index doubles as a race-safety net for concurrent signups).
//! - **memory**: a transient in-process list, gone on restart. Intended for
//!   local testing; its duplicate check is caller-side only.
//!
//! Login returns the same `401 Invalid credentials` for an unknown email and
//! for a wrong password, so callers cannot enumerate registered addresses.

pub mod api;
pub mod cli;
pub mod store;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
    }

    #[test]
    fn test_app_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with(env!("CARGO_PKG_NAME")));
        assert!(APP_USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
