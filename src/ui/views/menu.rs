//! Lifecycle and build menu headers

use std::path::Path;

use deckhand::domain::runtime::ComposeRuntime;

use crate::ui::primitives::{ColoredText, Icon};

/// Render the header shown before the lifecycle menu.
pub fn render_lifecycle_header(
    project_dir: &Path,
    compose_file: &Path,
    runtime: &ComposeRuntime,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}\n",
        Icon::Stack.colored(supports_color, supports_unicode),
        ColoredText::plain("Deckhand").bold().render(supports_color)
    ));
    out.push_str(&format!("  Project: {}\n", project_dir.display()));
    out.push_str(&format!("  Compose: {}\n", compose_file.display()));

    if verbose > 0 {
        out.push_str(&format!(
            "  Runtime: {}\n",
            ColoredText::info(runtime.describe()).render(supports_color)
        ));
    }

    out
}

/// Render the header shown before the cache build menu.
pub fn render_build_header(
    compose_file: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} {}\n  Compose: {}\n",
        Icon::Build.colored(supports_color, supports_unicode),
        ColoredText::plain("Deckhand Build").bold().render(supports_color),
        compose_file.display()
    )
}

/// Render warnings for required env keys that are absent or empty.
pub fn render_env_warnings(
    missing: &[String],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    for key in missing {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning(format!("{key} is not set in the environment file"))
                .render(supports_color)
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckhand::domain::runtime::{ComposeFlavor, Elevation};

    #[test]
    fn header_is_plain_without_capabilities() {
        let runtime = ComposeRuntime {
            elevation: Elevation::Direct,
            flavor: ComposeFlavor::Plugin,
        };
        let out = render_lifecycle_header(
            Path::new("/srv/app"),
            Path::new("/srv/app/docker-compose.yml"),
            &runtime,
            0,
            false,
            false,
        );
        assert!(out.contains("[STACK] Deckhand"));
        assert!(out.contains("Project: /srv/app"));
        assert!(!out.contains("Runtime:"));
    }

    #[test]
    fn verbose_header_shows_resolved_runtime() {
        let runtime = ComposeRuntime {
            elevation: Elevation::Sudo,
            flavor: ComposeFlavor::Standalone,
        };
        let out = render_lifecycle_header(
            Path::new("."),
            Path::new("./docker-compose.yml"),
            &runtime,
            1,
            false,
            false,
        );
        assert!(out.contains("Runtime: sudo docker-compose"));
    }

    #[test]
    fn env_warnings_name_each_key() {
        let out = render_env_warnings(&["JWT_SECRET".to_string()], false, false);
        assert!(out.contains("[WARN] JWT_SECRET is not set"));
    }
}
