//! Preflight report rendering

use deckhand::application::preflight::PreflightReport;

use crate::ui::primitives::{ColoredText, Icon};

/// Render the `deckhand check` report, one line per check.
pub fn render_preflight_report(
    report: &PreflightReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}\n\n",
        Icon::Check.colored(supports_color, supports_unicode),
        ColoredText::plain("Deckhand Check").bold().render(supports_color)
    ));

    for check in &report.checks {
        let icon = if check.ok { Icon::Success } else { Icon::Error };
        out.push_str(&format!(
            "  {} {} - {}\n",
            icon.colored(supports_color, supports_unicode),
            check.name,
            check.detail
        ));
    }

    let passed = report.checks.iter().filter(|c| c.ok).count();
    out.push_str(&format!(
        "\nSummary: {} passed, {} failed\n",
        passed,
        report.checks.len() - passed
    ));

    out
}
