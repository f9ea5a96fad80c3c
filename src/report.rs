//! Prefilled issue reports
//!
//! The body lists the facts a maintainer asks for first: app version,
//! host runtime version and OS, under a placeholder prompt.

use crate::context::AppContext;

pub const ISSUE_PLACEHOLDER: &str =
    "<!-- Please succinctly describe your issue and steps to reproduce it. -->";

/// Issue body built from the context's runtime facts
pub fn issue_body(ctx: &AppContext) -> String {
    let app = ctx.app();
    let system = ctx.system();
    format!(
        "\n{}\n-\n{} {}\n{}\n{} {} {}",
        ISSUE_PLACEHOLDER,
        app.name,
        app.version,
        ctx.host().runtime(),
        system.platform,
        system.arch,
        system.release
    )
}

/// Issue tracker URL with the body as its single query parameter
pub fn issue_url(ctx: &AppContext) -> String {
    format!(
        "{}?body={}",
        ctx.links().issues,
        urlencoding::encode(&issue_body(ctx))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{AppInfo, Links};
    use crate::host::testing::RecordingHost;
    use crate::platform::{Platform, SystemInfo};

    fn context() -> AppContext {
        let app = AppInfo {
            name: "Zulip".to_string(),
            version: "1.2.0".to_string(),
        };
        AppContext::new(RecordingHost::new(), Platform::Linux, app, Links::default()).with_system(
            SystemInfo {
                platform: Platform::Linux,
                arch: "x64".to_string(),
                release: "6.1.0".to_string(),
            },
        )
    }

    #[test]
    fn test_issue_body_order() {
        let body = issue_body(&context());
        let lines: Vec<&str> = body.split('\n').collect();
        assert_eq!(
            lines,
            vec![
                "",
                ISSUE_PLACEHOLDER,
                "-",
                "Zulip 1.2.0",
                "Electron 1.6.11",
                "linux x64 6.1.0",
            ]
        );
    }

    #[test]
    fn test_issue_url_encodes_whole_body() {
        let url = issue_url(&context());
        let (base, query) = url.split_once('?').unwrap();
        assert_eq!(base, "https://github.com/zulip/zulip-electron/issues/new");

        let encoded = query.strip_prefix("body=").unwrap();
        assert!(!encoded.contains(['\n', ' ', '<', '>', '&', '=']));
        assert!(encoded.starts_with("%0A%3C%21--%20Please"));
        assert_eq!(urlencoding::decode(encoded).unwrap(), issue_body(&context()));
    }
}
