//! Navigation-related state types.

use super::StateError;

/// Specifying the two views, each addressed by a path.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum View {
    Landing,
    Dashboard,
}

impl View {
    /// Resolve a path to a view. A trailing slash is ignored.
    ///
    pub fn from_path(path: &str) -> Result<View, StateError> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        match normalized {
            "/" => Ok(View::Landing),
            "/dashboard" => Ok(View::Dashboard),
            _ => Err(StateError::UnknownRoute {
                path: path.to_string(),
            }),
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            View::Landing => "/",
            View::Dashboard => "/dashboard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(View::from_path("/").unwrap(), View::Landing);
        assert_eq!(View::from_path("").unwrap(), View::Landing);
        assert_eq!(View::from_path("/dashboard").unwrap(), View::Dashboard);
        assert_eq!(View::from_path("/dashboard/").unwrap(), View::Dashboard);
    }

    #[test]
    fn test_unknown_path() {
        let error = View::from_path("/settings").unwrap_err();
        assert!(matches!(error, StateError::UnknownRoute { ref path } if path == "/settings"));
    }

    #[test]
    fn test_path_round_trip() {
        for view in [View::Landing, View::Dashboard] {
            assert_eq!(View::from_path(view.path()).unwrap(), view);
        }
    }
}
