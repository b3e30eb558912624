use std::fmt;

/// Domain the hosted sandbox forwards ports under.
const HOSTED_DOMAIN: &str = "app.github.dev";

/// Port the backend listens on, both locally and in the hosted sandbox.
const BACKEND_PORT: u16 = 8000;

/// The five record sets the backend exposes under `/api/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Members,
    Teams,
    Activities,
    Leaderboard,
    Workouts,
}

impl Collection {
    pub fn path(&self) -> &'static str {
        match self {
            Collection::Members => "members",
            Collection::Teams => "teams",
            Collection::Activities => "activities",
            Collection::Leaderboard => "leaderboard",
            Collection::Workouts => "workouts",
        }
    }

    /// Human-readable name used in headings and log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Collection::Members => "Members",
            Collection::Teams => "Teams",
            Collection::Activities => "Activities",
            Collection::Leaderboard => "Leaderboard",
            Collection::Workouts => "Workouts",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolve the collection endpoint from the deployment context. A present
/// codespace name selects the forwarded hosted URL, absence selects the local
/// backend. Pure; each view resolves its own URL on activation.
pub fn collection_url(codespace: Option<&str>, collection: Collection) -> String {
    match codespace {
        Some(name) => format!(
            "https://{name}-{BACKEND_PORT}.{HOSTED_DOMAIN}/api/{}/",
            collection.path()
        ),
        None => format!(
            "http://localhost:{BACKEND_PORT}/api/{}/",
            collection.path()
        ),
    }
}

/// Endpoint for a single record, e.g. the PATCH target for a member edit.
/// The backend requires the trailing slash.
pub fn record_url(base: &str, id: &str) -> String {
    format!("{base}{id}/")
}

/// The only configuration surface: the hosted sandbox name, if any.
pub fn codespace_name() -> Option<String> {
    std::env::var("CODESPACE_NAME").ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_url_when_no_codespace() {
        assert_eq!(
            collection_url(None, Collection::Members),
            "http://localhost:8000/api/members/"
        );
    }

    #[test]
    fn hosted_url_when_codespace_present() {
        assert_eq!(
            collection_url(Some("shiny-sandbox"), Collection::Leaderboard),
            "https://shiny-sandbox-8000.app.github.dev/api/leaderboard/"
        );
    }

    #[test]
    fn every_collection_has_a_distinct_path() {
        let all = [
            Collection::Members,
            Collection::Teams,
            Collection::Activities,
            Collection::Leaderboard,
            Collection::Workouts,
        ];
        let mut paths: Vec<_> = all.iter().map(|c| c.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), all.len());
    }

    #[test]
    fn record_url_appends_id_with_trailing_slash() {
        let base = collection_url(None, Collection::Members);
        assert_eq!(
            record_url(&base, "64f0c2"),
            "http://localhost:8000/api/members/64f0c2/"
        );
    }
}
