//! Dispatch outcome rendering

use deckhand::application::dispatch::{DispatchOutcome, OutcomeStatus};

use crate::ui::primitives::{ColoredText, Icon};

pub fn render_outcome(
    outcome: &DispatchOutcome,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    match outcome.status {
        OutcomeStatus::Completed => format!(
            "{} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::success(format!("{} complete", outcome.action.name()))
                .render(supports_color)
        ),
        OutcomeStatus::Cancelled => format!(
            "{}\n",
            ColoredText::dim("Cancelled. Nothing was removed.").render(supports_color)
        ),
        OutcomeStatus::Interrupted => format!(
            "{}\n",
            ColoredText::dim("Log stream interrupted.").render(supports_color)
        ),
    }
}
