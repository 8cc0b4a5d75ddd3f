//! Page controllers. Each page is a straight-line procedure: read
//! token/context, conditionally act, attach handlers, delegate terminal
//! actions.

pub mod error;
pub mod info;
pub mod login;

use leptos_router::NavigateOptions;

/// Replacing navigation: terminal page moves never create a back entry.
pub(crate) fn replace_nav() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}
