//! # Route guard
//!
//! Decides, for every navigation, whether the requested page may be shown given the
//! current session. The decision is a pure function of the page and a single
//! `authenticated` flag read from the session at render time; the guard keeps no
//! state of its own.
//!
//! | Page | Signed out | Signed in |
//! |------|-----------|-----------|
//! | `/` | redirect `/login` | redirect `/dashboard` |
//! | `/login`, `/register` | render | redirect `/dashboard` |
//! | `/dashboard`, `/create`, `/edit/:id` | redirect `/login` | render |
//!
//! The router hands [`guard_path`] the path it is about to show; paths that name
//! no page are treated like `/`.

use store::EntryId;

/// Client-side pages of the diary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Root,
    Login,
    Register,
    Dashboard,
    Create,
    Edit(EntryId),
}

impl Page {
    pub fn path(&self) -> String {
        match self {
            Page::Root => "/".to_string(),
            Page::Login => "/login".to_string(),
            Page::Register => "/register".to_string(),
            Page::Dashboard => "/dashboard".to_string(),
            Page::Create => "/create".to_string(),
            Page::Edit(id) => format!("/edit/{id}"),
        }
    }

    /// Parse a client path. Unknown paths yield `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let page = match trimmed {
            "" => Page::Root,
            "/login" => Page::Login,
            "/register" => Page::Register,
            "/dashboard" => Page::Dashboard,
            "/create" => Page::Create,
            _ => Page::Edit(trimmed.strip_prefix("/edit/")?.parse().ok()?),
        };
        Some(page)
    }

    /// Pages that need a session.
    pub fn is_protected(&self) -> bool {
        matches!(self, Page::Dashboard | Page::Create | Page::Edit(_))
    }

    /// Login and register.
    pub fn is_auth_page(&self) -> bool {
        matches!(self, Page::Login | Page::Register)
    }
}

/// Outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Render,
    Redirect(Page),
}

pub fn guard(page: Page, authenticated: bool) -> Navigation {
    match (page, authenticated) {
        (Page::Root, true) => Navigation::Redirect(Page::Dashboard),
        (Page::Root, false) => Navigation::Redirect(Page::Login),
        (page, false) if page.is_protected() => Navigation::Redirect(Page::Login),
        (page, true) if page.is_auth_page() => Navigation::Redirect(Page::Dashboard),
        _ => Navigation::Render,
    }
}

/// Guard a raw client path.
pub fn guard_path(path: &str, authenticated: bool) -> Navigation {
    guard(Page::parse(path).unwrap_or(Page::Root), authenticated)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Page; 6] = [
        Page::Root,
        Page::Login,
        Page::Register,
        Page::Dashboard,
        Page::Create,
        Page::Edit(7),
    ];

    #[test]
    fn test_signed_out_dashboard_goes_to_login() {
        assert_eq!(
            guard(Page::Dashboard, false),
            Navigation::Redirect(Page::Login)
        );
    }

    #[test]
    fn test_signed_in_login_goes_to_dashboard() {
        assert_eq!(
            guard(Page::Login, true),
            Navigation::Redirect(Page::Dashboard)
        );
        assert_eq!(
            guard(Page::Register, true),
            Navigation::Redirect(Page::Dashboard)
        );
    }

    #[test]
    fn test_signed_in_dashboard_renders() {
        assert_eq!(guard(Page::Dashboard, true), Navigation::Render);
    }

    #[test]
    fn test_full_table() {
        for page in ALL {
            let signed_out = guard(page, false);
            let signed_in = guard(page, true);
            match page {
                Page::Root => {
                    assert_eq!(signed_out, Navigation::Redirect(Page::Login));
                    assert_eq!(signed_in, Navigation::Redirect(Page::Dashboard));
                }
                Page::Login | Page::Register => {
                    assert_eq!(signed_out, Navigation::Render);
                    assert_eq!(signed_in, Navigation::Redirect(Page::Dashboard));
                }
                Page::Dashboard | Page::Create | Page::Edit(_) => {
                    assert_eq!(signed_out, Navigation::Redirect(Page::Login));
                    assert_eq!(signed_in, Navigation::Render);
                }
            }
        }
    }

    #[test]
    fn test_redirect_targets_are_stable() {
        // Following a redirect never leads to another redirect
        for authenticated in [false, true] {
            for page in ALL {
                if let Navigation::Redirect(target) = guard(page, authenticated) {
                    assert_eq!(guard(target, authenticated), Navigation::Render);
                }
            }
        }
    }

    #[test]
    fn test_path_roundtrip() {
        for page in ALL {
            assert_eq!(Page::parse(&page.path()), Some(page));
        }
        assert_eq!(Page::parse("/dashboard/"), Some(Page::Dashboard));
        assert_eq!(Page::parse("/edit/42"), Some(Page::Edit(42)));
    }

    #[test]
    fn test_guard_by_path() {
        assert_eq!(
            guard_path("/dashboard", false),
            Navigation::Redirect(Page::Login)
        );
        assert_eq!(
            guard_path("/login", true),
            Navigation::Redirect(Page::Dashboard)
        );
        assert_eq!(guard_path("/dashboard", true), Navigation::Render);
        assert_eq!(guard_path("/edit/3", true), Navigation::Render);
        assert_eq!(guard_path("/edit/3", false), Navigation::Redirect(Page::Login));
        assert_eq!(guard_path("/", false), Navigation::Redirect(Page::Login));
        assert_eq!(
            guard_path("/settings", true),
            Navigation::Redirect(Page::Dashboard)
        );
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Page::parse("/edit/abc"), None);
        assert_eq!(Page::parse("/edit/"), None);
        assert_eq!(Page::parse("/settings"), None);
    }
}
