use serde::Deserialize;

/// Identifier for one of the five DevKit tools.
///
/// The set is fixed and known at startup; the registry in `tools.rs` maps
/// each id to its descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolId {
    Mock,
    Regex,
    Config,
    Sql,
    Json,
}

impl ToolId {
    pub const ALL: [ToolId; 5] = [
        ToolId::Mock,
        ToolId::Regex,
        ToolId::Config,
        ToolId::Sql,
        ToolId::Json,
    ];
}

/// Success payload of `/mock/create`. The service also returns an `id`
/// field; only the URL is consumed here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MockCreated {
    pub url: String,
}

/// Success payload of `/regex/generate`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratedRegex {
    pub regex: String,
    pub explanation: String,
}

/// Success payload of `/config/convert`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConvertedConfig {
    pub output: String,
}

/// Success payload of `/sql/generate`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratedQuery {
    pub query: String,
}

/// Success payload of `/json/format`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FormattedJson {
    pub formatted_json: String,
}

/// One typed success payload per endpoint, validated at the dispatcher
/// boundary before any panel sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    Mock(MockCreated),
    Regex(GeneratedRegex),
    Config(ConvertedConfig),
    Sql(GeneratedQuery),
    Json(FormattedJson),
}

/// Result of one dispatch. Exactly one of the two sides is ever populated;
/// the enum makes that structural.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    Success(ToolOutput),
    Failure(String),
}

/// The UI element that owns the busy/enabled state of a submission.
///
/// `begin` swaps the label to an in-progress indicator and disables the
/// control; `finish` restores the idle label and re-enables it. The
/// dispatcher guarantees `finish` runs on every settling path.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitControl {
    idle_label: String,
    label: String,
    busy: bool,
}

impl SubmitControl {
    pub fn new(label: &str) -> Self {
        Self {
            idle_label: label.to_string(),
            label: label.to_string(),
            busy: false,
        }
    }

    pub fn begin(&mut self) {
        self.label = "Processing...".to_string();
        self.busy = true;
    }

    pub fn finish(&mut self) {
        self.label = self.idle_label.clone();
        self.busy = false;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }
}

/// Tracks which main panel has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// Left panel: tool navigation list.
    Nav,
    /// Right panel: the mounted tool panel.
    Tool,
}

/// Focusable slots inside a mounted tool panel. Which of these exist
/// depends on the tool; `panel.rs` defines the order per tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelField {
    Schema,
    Input,
    FromFormat,
    ToFormat,
    Output,
}

/// A config format selectable in the ConfigSwitch tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatChoice {
    Json,
    Yaml,
    Toml,
}

impl FormatChoice {
    pub const ALL: [FormatChoice; 3] = [FormatChoice::Json, FormatChoice::Yaml, FormatChoice::Toml];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormatChoice::Json => "json",
            FormatChoice::Yaml => "yaml",
            FormatChoice::Toml => "toml",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormatChoice::Json => "JSON",
            FormatChoice::Yaml => "YAML",
            FormatChoice::Toml => "TOML",
        }
    }
}

/// A pair of mutually exclusive format buttons. Exactly one choice is
/// active at all times; cycling replaces the active choice, it never
/// clears it.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorGroup {
    active: FormatChoice,
}

impl SelectorGroup {
    pub fn new(default: FormatChoice) -> Self {
        Self { active: default }
    }

    pub fn active(&self) -> FormatChoice {
        self.active
    }

    pub fn activate(&mut self, choice: FormatChoice) {
        self.active = choice;
    }

    pub fn cycle_next(&mut self) {
        let idx = FormatChoice::ALL
            .iter()
            .position(|c| *c == self.active)
            .unwrap_or(0);
        self.active = FormatChoice::ALL[(idx + 1) % FormatChoice::ALL.len()];
    }

    pub fn cycle_prev(&mut self) {
        let idx = FormatChoice::ALL
            .iter()
            .position(|c| *c == self.active)
            .unwrap_or(0);
        self.active =
            FormatChoice::ALL[(idx + FormatChoice::ALL.len() - 1) % FormatChoice::ALL.len()];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_control_begin_finish_restores_label() {
        let mut control = SubmitControl::new("Generate");
        assert_eq!(control.label(), "Generate");
        assert!(!control.is_busy());

        control.begin();
        assert_eq!(control.label(), "Processing...");
        assert!(control.is_busy());

        control.finish();
        assert_eq!(control.label(), "Generate");
        assert!(!control.is_busy());
    }

    #[test]
    fn test_submit_control_finish_is_stable() {
        let mut control = SubmitControl::new("Convert");
        let before = control.clone();

        control.begin();
        control.finish();
        assert_eq!(control, before);

        // A second finish must not change anything either
        control.finish();
        assert_eq!(control, before);
    }

    #[test]
    fn test_selector_group_always_one_active() {
        let mut group = SelectorGroup::new(FormatChoice::Json);
        assert_eq!(group.active(), FormatChoice::Json);

        group.cycle_next();
        assert_eq!(group.active(), FormatChoice::Yaml);
        group.cycle_next();
        assert_eq!(group.active(), FormatChoice::Toml);
        group.cycle_next();
        assert_eq!(group.active(), FormatChoice::Json);

        group.cycle_prev();
        assert_eq!(group.active(), FormatChoice::Toml);
    }

    #[test]
    fn test_selector_group_activate_replaces() {
        let mut group = SelectorGroup::new(FormatChoice::Yaml);
        group.activate(FormatChoice::Toml);
        assert_eq!(group.active(), FormatChoice::Toml);
        assert_eq!(group.active().as_str(), "toml");
    }

    #[test]
    fn test_format_choice_wire_values() {
        assert_eq!(FormatChoice::Json.as_str(), "json");
        assert_eq!(FormatChoice::Yaml.as_str(), "yaml");
        assert_eq!(FormatChoice::Toml.as_str(), "toml");
    }
}
