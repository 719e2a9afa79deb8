use farmbook::config::ConfigWarning;

use crate::ui::blocks::warning::WarningBlock;
use crate::ui::context::UiContext;

/// Unknown config keys go to stderr; JSON mode keeps stdout and stderr clean.
pub fn print_config_warnings(ui: &UiContext, warnings: &[ConfigWarning]) {
    if warnings.is_empty() || ui.json {
        return;
    }
    eprint!("{}", WarningBlock::config_keys(warnings).render(ui.color, ui.unicode));
}
