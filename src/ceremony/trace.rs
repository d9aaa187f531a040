//! # Diagnostic Trace
//!
//! An append-only, ordered record of what each ceremony phase produced:
//! options received, credential produced, server response. Purely for
//! operator/developer visibility - never consulted for control flow.
//!
//! The trace lives as long as its orchestrator instance; a failed ceremony
//! leaves it truncated at the phase where the failure occurred.

use serde_json::Value;

/// One labeled phase payload
#[derive(Debug, Clone)]
pub struct TraceEntry {
    /// Phase label, e.g. "Registration Options" or "Server Response"
    pub label: String,
    /// Raw payload observed in that phase
    pub payload: Value,
}

/// Ordered, append-only sequence of ceremony phase payloads
#[derive(Debug, Default)]
pub struct DiagnosticTrace {
    entries: Vec<TraceEntry>,
}

impl DiagnosticTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a phase payload. Entries are never removed or reordered.
    pub(crate) fn record(&mut self, label: impl Into<String>, payload: &Value) {
        let label = label.into();
        tracing::debug!(%label, "ceremony phase recorded");
        self.entries.push(TraceEntry {
            label,
            payload: payload.clone(),
        });
    }

    /// All recorded phases, in the order they happened
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the trace as console text
    ///
    /// One block per phase:
    /// ```text
    /// // Registration Options
    /// { ...pretty JSON... }
    /// ```
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|e| {
                let pretty = serde_json::to_string_pretty(&e.payload)
                    .unwrap_or_else(|_| e.payload.to_string());
                format!("// {}\n{}\n", e.label, pretty)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entries_keep_insertion_order() {
        let mut trace = DiagnosticTrace::new();
        trace.record("Authentication Options", &json!({"challenge": "abc"}));
        trace.record("Authentication Response", &json!({"id": "cred1"}));
        trace.record("Server Response", &json!({"verified": true}));

        let labels: Vec<&str> = trace.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Authentication Options",
                "Authentication Response",
                "Server Response"
            ]
        );
    }

    #[test]
    fn render_labels_each_block() {
        let mut trace = DiagnosticTrace::new();
        trace.record("Registration Options", &json!({"challenge": "abc"}));
        trace.record("Server Response", &json!({"verified": false}));

        let rendered = trace.render();
        assert!(rendered.starts_with("// Registration Options\n"));
        assert!(rendered.contains("\n// Server Response\n"));
        assert!(rendered.contains("\"verified\": false"));
    }
}
