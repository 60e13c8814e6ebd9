//! Offline evaluation of the gate for the `check` command.

use std::fmt;

use crate::gate::{classify, decide, Disposition, GateTarget, MaintenanceMode, PathClass};

/// Outcome of evaluating one URL or path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub target: String,
    pub class: PathClass,
    pub disposition: Disposition,
    /// Redirect target, when the request would be redirected.
    pub location: Option<String>,
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.target, self.class, self.disposition)?;
        if let Some(location) = &self.location {
            write!(f, "\t{}", location)?;
        }
        Ok(())
    }
}

/// Evaluate an absolute URL (`https://host/path?q`) or a bare path (`/path`).
pub fn check_target(mode: MaintenanceMode, target: &str) -> CheckReport {
    let parsed = GateTarget::parse(target);

    let disposition = decide(mode, parsed.path());
    let location = match disposition {
        Disposition::Redirect => Some(parsed.maintenance_location()),
        Disposition::Delegate => None,
    };

    CheckReport {
        target: target.to_string(),
        class: classify(parsed.path()),
        disposition,
        location,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_url_keeps_origin() {
        let report = check_target(MaintenanceMode::Enabled, "https://example.com:8443/dashboard?x=1");
        assert_eq!(report.disposition, Disposition::Redirect);
        assert_eq!(
            report.location.as_deref(),
            Some("https://example.com:8443/down/maintenance.html")
        );
    }

    #[test]
    fn test_bare_path() {
        let report = check_target(MaintenanceMode::Enabled, "/styles/site.CSS?v=3");
        assert_eq!(report.class, PathClass::StaticAsset);
        assert_eq!(report.disposition, Disposition::Delegate);
        assert_eq!(report.location, None);
        assert_eq!(report.to_string(), "/styles/site.CSS?v=3\tstatic-asset\tdelegate");
    }

    #[test]
    fn test_dot_segments_and_host_case() {
        let report = check_target(MaintenanceMode::Enabled, "/x/../privacy.html");
        assert_eq!(report.class, PathClass::ExemptPage);
        assert_eq!(report.disposition, Disposition::Delegate);

        let report = check_target(MaintenanceMode::Enabled, "http://Example.COM:80/dashboard");
        assert_eq!(
            report.location.as_deref(),
            Some("http://example.com/down/maintenance.html")
        );
    }

    #[test]
    fn test_disabled() {
        let report = check_target(MaintenanceMode::Disabled, "/dashboard");
        assert_eq!(report.class, PathClass::Other);
        assert_eq!(report.disposition, Disposition::Delegate);
    }

    #[test]
    fn test_redirect_line() {
        let report = check_target(MaintenanceMode::Enabled, "/dashboard");
        assert_eq!(
            report.to_string(),
            "/dashboard\tother\tredirect\t/down/maintenance.html"
        );
    }
}
