use crate::types::ToolId;

/// Immutable descriptor for one tool: display label, endpoint path and
/// submit label. The per-tool request/render behavior lives with the
/// mounted panel in `panel.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSpec {
    pub id: ToolId,
    pub label: &'static str,
    /// Endpoint path under the service's `/api` prefix.
    pub endpoint: &'static str,
    /// Idle label of the panel's submit control.
    pub submit_label: &'static str,
}

/// Maps tool identifiers to their descriptors. Built once at startup;
/// navigation to an id without an entry is a wiring bug, not user error.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<ToolSpec>,
}

impl ToolRegistry {
    /// The full DevKit tool set.
    pub fn standard() -> Self {
        Self {
            tools: vec![
                ToolSpec {
                    id: ToolId::Mock,
                    label: "Mockify",
                    endpoint: "/mock/create",
                    submit_label: "Create Mock",
                },
                ToolSpec {
                    id: ToolId::Regex,
                    label: "RegexCraft",
                    endpoint: "/regex/generate",
                    submit_label: "Generate",
                },
                ToolSpec {
                    id: ToolId::Config,
                    label: "ConfigSwitch",
                    endpoint: "/config/convert",
                    submit_label: "Convert",
                },
                ToolSpec {
                    id: ToolId::Sql,
                    label: "QueryGen",
                    endpoint: "/sql/generate",
                    submit_label: "Generate",
                },
                ToolSpec {
                    id: ToolId::Json,
                    label: "JSON Beautifier",
                    endpoint: "/json/format",
                    submit_label: "Format",
                },
            ],
        }
    }

    /// Registry with an explicit tool set (used by tests to model a
    /// mis-wired registry).
    #[cfg(test)]
    pub fn with_tools(tools: Vec<ToolSpec>) -> Self {
        Self { tools }
    }

    pub fn get(&self, id: ToolId) -> Option<&ToolSpec> {
        self.tools.iter().find(|t| t.id == id)
    }

    pub fn specs(&self) -> &[ToolSpec] {
        &self.tools
    }
}
