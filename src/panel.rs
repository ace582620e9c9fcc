//! Mounted tool panels
//!
//! One `ToolPanel` exists at a time: the input fields, selector groups,
//! submit control and output region for the active tool. Switching tools
//! mounts a fresh panel, so no field state or bindings survive a switch.
//!
//! The per-tool differences live here: which fields a panel carries, how
//! its input becomes a request body, and how a dispatch outcome lands back
//! in the panel.

use crate::editor::FieldEditor;
use crate::render::{OutputContent, OutputPane};
use crate::tools::ToolSpec;
use crate::types::{
    DispatchOutcome, FormatChoice, PanelField, SelectorGroup, SubmitControl, ToolId, ToolOutput,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};

/// Every mount gets a fresh generation, so a settling dispatch can tell
/// the panel it started from apart from a remount of the same tool.
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, PartialEq)]
pub struct ToolPanel {
    pub tool: ToolId,
    generation: u64,
    /// Primary input: mock JSON body, regex/SQL description, config input,
    /// JSON to format.
    pub input: FieldEditor,
    /// Schema text, QueryGen only.
    pub schema: Option<FieldEditor>,
    /// Source format group, ConfigSwitch only.
    pub from_format: Option<SelectorGroup>,
    /// Target format group, ConfigSwitch only.
    pub to_format: Option<SelectorGroup>,
    /// Editable output field, ConfigSwitch only.
    pub output_field: Option<FieldEditor>,
    pub submit: SubmitControl,
    pub output: OutputPane,
    focus: usize,
}

impl ToolPanel {
    /// Build fresh panel state for a tool. Called on every switch.
    pub fn mount(spec: &ToolSpec) -> Self {
        let is_config = spec.id == ToolId::Config;
        let is_sql = spec.id == ToolId::Sql;

        Self {
            tool: spec.id,
            generation: NEXT_GENERATION.fetch_add(1, Ordering::Relaxed),
            input: FieldEditor::new(),
            schema: is_sql.then(FieldEditor::new),
            from_format: is_config.then(|| SelectorGroup::new(FormatChoice::Json)),
            to_format: is_config.then(|| SelectorGroup::new(FormatChoice::Yaml)),
            output_field: is_config.then(FieldEditor::new),
            submit: SubmitControl::new(spec.submit_label),
            output: OutputPane::new(),
            focus: 0,
        }
    }

    /// Identity of this mount; changes on every switch, even back to the
    /// same tool.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Focusable fields for a tool, in traversal order.
    pub fn focus_order(tool: ToolId) -> &'static [PanelField] {
        match tool {
            ToolId::Mock | ToolId::Regex | ToolId::Json => &[PanelField::Input],
            ToolId::Sql => &[PanelField::Schema, PanelField::Input],
            ToolId::Config => &[
                PanelField::Input,
                PanelField::FromFormat,
                PanelField::ToFormat,
                PanelField::Output,
            ],
        }
    }

    pub fn focused_field(&self) -> PanelField {
        let order = Self::focus_order(self.tool);
        order[self.focus.min(order.len() - 1)]
    }

    pub fn focus_next(&mut self) {
        let order = Self::focus_order(self.tool);
        self.focus = (self.focus + 1) % order.len();
    }

    pub fn focus_prev(&mut self) {
        let order = Self::focus_order(self.tool);
        self.focus = (self.focus + order.len() - 1) % order.len();
    }

    /// The editor behind the focused field, if it is a text field.
    pub fn focused_editor_mut(&mut self) -> Option<&mut FieldEditor> {
        match self.focused_field() {
            PanelField::Input => Some(&mut self.input),
            PanelField::Schema => self.schema.as_mut(),
            PanelField::Output => self.output_field.as_mut(),
            PanelField::FromFormat | PanelField::ToFormat => None,
        }
    }

    /// The selector group behind the focused field, if it is one.
    pub fn focused_selector_mut(&mut self) -> Option<&mut SelectorGroup> {
        match self.focused_field() {
            PanelField::FromFormat => self.from_format.as_mut(),
            PanelField::ToFormat => self.to_format.as_mut(),
            _ => None,
        }
    }

    /// Gather the panel's input into a request body.
    ///
    /// Mockify and the JSON Beautifier parse their input locally first; a
    /// parse failure is a local validation error and must never reach the
    /// dispatcher. The error string is already user-facing.
    pub fn build_request(&self) -> Result<Value, String> {
        match self.tool {
            ToolId::Mock => {
                serde_json::from_str::<Value>(self.input.content()).map_err(|e| e.to_string())
            }
            ToolId::Json => serde_json::from_str::<Value>(self.input.content())
                .map_err(|e| format!("Invalid JSON: {e}")),
            ToolId::Regex => Ok(json!({ "description": self.input.content() })),
            ToolId::Sql => Ok(json!({
                "schema": self.schema.as_ref().map(|s| s.content()).unwrap_or(""),
                "description": self.input.content(),
            })),
            ToolId::Config => {
                let from = self
                    .from_format
                    .as_ref()
                    .map(|g| g.active())
                    .unwrap_or(FormatChoice::Json);
                let to = self
                    .to_format
                    .as_ref()
                    .map(|g| g.active())
                    .unwrap_or(FormatChoice::Yaml);
                Ok(json!({
                    "input": self.input.content(),
                    "from": from.as_str(),
                    "to": to.as_str(),
                }))
            }
        }
    }

    /// Land a settled dispatch in the panel.
    ///
    /// ConfigSwitch writes into its editable output field (errors as
    /// `Error: <msg>`); every other tool goes through the output pane.
    pub fn apply_outcome(&mut self, outcome: DispatchOutcome) {
        match outcome {
            DispatchOutcome::Failure(msg) => {
                if let Some(field) = self.output_field.as_mut() {
                    field.set_content(format!("Error: {msg}"));
                } else {
                    self.output.show_error(msg);
                }
            }
            DispatchOutcome::Success(output) => match output {
                ToolOutput::Mock(mock) => {
                    self.output.show(OutputContent::MockUrl {
                        url: mock.url,
                        copied: false,
                    });
                }
                ToolOutput::Regex(generated) => {
                    self.output.show(OutputContent::RegexPair {
                        regex: generated.regex,
                        explanation: generated.explanation,
                    });
                }
                ToolOutput::Config(converted) => {
                    if let Some(field) = self.output_field.as_mut() {
                        field.set_content(converted.output);
                    }
                }
                ToolOutput::Sql(generated) => {
                    self.output.show_verbatim(generated.query);
                }
                ToolOutput::Json(formatted) => {
                    self.output.show_verbatim(formatted.formatted_json);
                }
            },
        }
    }

    /// Surface a local validation failure through the same error path a
    /// failed dispatch would use.
    pub fn apply_input_error(&mut self, message: String) {
        self.apply_outcome(DispatchOutcome::Failure(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolRegistry;
    use crate::types::{ConvertedConfig, FormattedJson, GeneratedQuery, GeneratedRegex, MockCreated};

    fn mount(tool: ToolId) -> ToolPanel {
        let registry = ToolRegistry::standard();
        ToolPanel::mount(registry.get(tool).unwrap())
    }

    #[test]
    fn test_mount_config_defaults_json_to_yaml() {
        let panel = mount(ToolId::Config);
        assert_eq!(
            panel.from_format.as_ref().unwrap().active(),
            FormatChoice::Json
        );
        assert_eq!(
            panel.to_format.as_ref().unwrap().active(),
            FormatChoice::Yaml
        );
        assert!(panel.output_field.is_some());
    }

    #[test]
    fn test_mount_is_fresh_state() {
        let mut panel = mount(ToolId::Regex);
        panel.input.insert_str("an email address");
        panel.output.show_verbatim("stale");

        let remounted = mount(ToolId::Regex);
        assert_eq!(remounted.input.content(), "");
        assert!(!remounted.output.is_visible());
        assert!(!remounted.submit.is_busy());
    }

    #[test]
    fn test_remount_changes_generation() {
        let first = mount(ToolId::Sql);
        let second = mount(ToolId::Sql);
        assert_ne!(first.generation(), second.generation());
    }

    #[test]
    fn test_build_request_regex() {
        let mut panel = mount(ToolId::Regex);
        panel.input.insert_str("match an email");
        assert_eq!(
            panel.build_request().unwrap(),
            json!({ "description": "match an email" })
        );
    }

    #[test]
    fn test_build_request_sql() {
        let mut panel = mount(ToolId::Sql);
        panel
            .schema
            .as_mut()
            .unwrap()
            .insert_str("CREATE TABLE users(id INT)");
        panel.input.insert_str("count users");
        assert_eq!(
            panel.build_request().unwrap(),
            json!({
                "schema": "CREATE TABLE users(id INT)",
                "description": "count users",
            })
        );
    }

    #[test]
    fn test_build_request_config_reads_active_selectors() {
        let mut panel = mount(ToolId::Config);
        panel.input.insert_str("{\"a\": 1}");
        // Default actives json -> yaml; flip the "to" group to toml
        panel.to_format.as_mut().unwrap().activate(FormatChoice::Toml);

        assert_eq!(
            panel.build_request().unwrap(),
            json!({
                "input": "{\"a\": 1}",
                "from": "json",
                "to": "toml",
            })
        );
    }

    #[test]
    fn test_build_request_mock_parses_input() {
        let mut panel = mount(ToolId::Mock);
        panel.input.insert_str(r#"{"name":"x"}"#);
        assert_eq!(panel.build_request().unwrap(), json!({ "name": "x" }));
    }

    #[test]
    fn test_build_request_mock_parse_failure_is_local() {
        let mut panel = mount(ToolId::Mock);
        panel.input.insert_str("not json");
        assert!(panel.build_request().is_err());
    }

    #[test]
    fn test_build_request_json_parse_failure_message() {
        let mut panel = mount(ToolId::Json);
        panel.input.insert_str("not json");
        let err = panel.build_request().unwrap_err();
        assert!(err.starts_with("Invalid JSON: "), "got: {err}");
    }

    #[test]
    fn test_apply_outcome_mock_url() {
        let mut panel = mount(ToolId::Mock);
        panel.apply_outcome(DispatchOutcome::Success(ToolOutput::Mock(MockCreated {
            url: "https://mock.example/abc123".to_string(),
        })));
        assert_eq!(panel.output.mock_url(), Some("https://mock.example/abc123"));
    }

    #[test]
    fn test_apply_outcome_regex_pair() {
        let mut panel = mount(ToolId::Regex);
        panel.apply_outcome(DispatchOutcome::Success(ToolOutput::Regex(GeneratedRegex {
            regex: r"^\d+$".to_string(),
            explanation: "digits only".to_string(),
        })));
        match panel.output.content() {
            Some(OutputContent::RegexPair { regex, explanation }) => {
                assert_eq!(regex, r"^\d+$");
                assert_eq!(explanation, "digits only");
            }
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn test_apply_outcome_sql_verbatim() {
        let mut panel = mount(ToolId::Sql);
        panel.apply_outcome(DispatchOutcome::Success(ToolOutput::Sql(GeneratedQuery {
            query: "SELECT COUNT(*) FROM users;".to_string(),
        })));
        assert_eq!(
            panel.output.content(),
            Some(&OutputContent::Verbatim(
                "SELECT COUNT(*) FROM users;".to_string()
            ))
        );
    }

    #[test]
    fn test_apply_outcome_json_verbatim() {
        let mut panel = mount(ToolId::Json);
        panel.apply_outcome(DispatchOutcome::Success(ToolOutput::Json(FormattedJson {
            formatted_json: "{\n  \"a\": 1\n}".to_string(),
        })));
        assert_eq!(
            panel.output.content(),
            Some(&OutputContent::Verbatim("{\n  \"a\": 1\n}".to_string()))
        );
    }

    #[test]
    fn test_apply_outcome_config_writes_output_field() {
        let mut panel = mount(ToolId::Config);
        panel.apply_outcome(DispatchOutcome::Success(ToolOutput::Config(
            ConvertedConfig {
                output: "a: 1\n".to_string(),
            },
        )));
        assert_eq!(panel.output_field.as_ref().unwrap().content(), "a: 1\n");
        // The shared output pane stays untouched for this tool
        assert!(!panel.output.is_visible());
    }

    #[test]
    fn test_apply_outcome_config_error_goes_to_field() {
        let mut panel = mount(ToolId::Config);
        panel.apply_outcome(DispatchOutcome::Failure("unsupported format".to_string()));
        assert_eq!(
            panel.output_field.as_ref().unwrap().content(),
            "Error: unsupported format"
        );
    }

    #[test]
    fn test_apply_outcome_error_for_pane_tools() {
        let mut panel = mount(ToolId::Sql);
        panel.apply_outcome(DispatchOutcome::Failure("description too short".to_string()));
        assert_eq!(
            panel.output.content(),
            Some(&OutputContent::Error("description too short".to_string()))
        );
    }

    #[test]
    fn test_focus_traversal_config() {
        let mut panel = mount(ToolId::Config);
        assert_eq!(panel.focused_field(), PanelField::Input);
        panel.focus_next();
        assert_eq!(panel.focused_field(), PanelField::FromFormat);
        assert!(panel.focused_selector_mut().is_some());
        panel.focus_next();
        assert_eq!(panel.focused_field(), PanelField::ToFormat);
        panel.focus_next();
        assert_eq!(panel.focused_field(), PanelField::Output);
        assert!(panel.focused_editor_mut().is_some());
        panel.focus_next();
        assert_eq!(panel.focused_field(), PanelField::Input);
        panel.focus_prev();
        assert_eq!(panel.focused_field(), PanelField::Output);
    }

    #[test]
    fn test_focus_traversal_sql() {
        let mut panel = mount(ToolId::Sql);
        assert_eq!(panel.focused_field(), PanelField::Schema);
        panel.focus_next();
        assert_eq!(panel.focused_field(), PanelField::Input);
    }
}
