//! Status lines written to stderr while an operation runs.
//!
//! stdout is reserved for resolved manifests and dependency listings, so
//! `bomfold resolve > out.manifest` never captures these lines.

use std::io::Write;

use console::Style;

/// Write `label` right-aligned to 12 columns in `style`, then `message`.
pub fn status_styled(label: &str, message: &str, style: &Style) {
    let _ = writeln!(std::io::stderr(), "{:>12} {message}", style.apply_to(label));
}

/// Action completed, e.g. `     Checked deps.manifest: 2 dependencies`.
pub fn status(label: &str, message: &str) {
    status_styled(label, message, &Style::new().green().bold());
}

/// Informational line, e.g. the platform BOMs listed by `bomfold deps`.
pub fn status_info(label: &str, message: &str) {
    status_styled(label, message, &Style::new().cyan().bold());
}

/// Recoverable problem, e.g. a platform BOM that supplies no versions.
pub fn status_warn(label: &str, message: &str) {
    status_styled(label, message, &Style::new().yellow().bold());
}
