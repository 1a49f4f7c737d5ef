//! `#extension` directive processing.

use std::collections::VecDeque;

use crate::base::Span;
use crate::diagnostics::{Diagnostic, DiagnosticSink, ErrorCode};
use crate::extensions::{Behavior, ExtensionId, implied_by};

use super::FeatureGate;

impl<S: DiagnosticSink> FeatureGate<S> {
    /// Process one `#extension <name> : <behavior>` directive.
    ///
    /// A malformed directive aborts itself, never the compile: the
    /// behavior table is left untouched and a diagnostic records what was
    /// wrong. Successful updates to an umbrella extension propagate
    /// through the implication table.
    pub fn apply_extension_directive(&mut self, span: Span, name: &str, behavior_token: &str) {
        let behavior = match behavior_token.parse::<Behavior>() {
            Ok(behavior) => behavior,
            Err(err) => {
                self.emit(Diagnostic::error(
                    span,
                    ErrorCode::E0303,
                    format!("#extension: {err}"),
                ));
                return;
            }
        };

        // 'all' touches every stored slot directly; the implication table
        // is not consulted.
        if name == "all" {
            if matches!(behavior, Behavior::Require | Behavior::Enable) {
                self.emit(Diagnostic::error(
                    span,
                    ErrorCode::E0304,
                    "extension 'all' cannot have 'require' or 'enable' behavior",
                ));
            } else {
                tracing::debug!(behavior = %behavior, "setting all extensions");
                self.behavior.set_all(behavior);
            }
            return;
        }

        let Some(id) = ExtensionId::from_name(name) else {
            let message = format!("extension not supported: '{name}'");
            let diagnostic = match behavior {
                Behavior::Require => Diagnostic::error(span, ErrorCode::E0302, message),
                _ => Diagnostic::warning(span, ErrorCode::E0302, message),
            };
            self.emit(diagnostic);
            return;
        };

        // Update the named extension, then everything it implies. The
        // table is a small DAG; revisiting an extension is harmless
        // because stores are idempotent.
        let mut work = VecDeque::from([id]);
        while let Some(current) = work.pop_front() {
            self.update_behavior(span, current, behavior);
            work.extend(implied_by(current));
        }
    }

    fn update_behavior(&mut self, span: Span, id: ExtensionId, behavior: Behavior) {
        if self.behavior.get(id) == Behavior::DisablePartial {
            self.emit(Diagnostic::warning(
                span,
                ErrorCode::E0305,
                format!("extension is only partially supported: '{}'", id.as_str()),
            ));
        }
        if matches!(behavior, Behavior::Enable | Behavior::Require) && !self.requested.contains(&id)
        {
            self.requested.push(id);
        }
        tracing::trace!(extension = id.as_str(), behavior = %behavior, "extension behavior updated");
        self.behavior.set(id, behavior);
    }
}
