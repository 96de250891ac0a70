//! Core data structures for Terraform plans
//!
//! These types mirror the subset of `terraform show -json` output that the
//! formatter reads. Unknown fields are ignored so newer plan formats still load.

use serde::Deserialize;
use serde_json::{Map, Value};

/// A Terraform plan as emitted by `terraform show -json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TerraformPlan {
    #[serde(default)]
    pub format_version: Option<String>,
    #[serde(default)]
    pub terraform_version: Option<String>,
    #[serde(default)]
    pub resource_changes: Vec<ResourceChange>,
    #[serde(default)]
    pub output_changes: Map<String, Value>,
}

/// A planned change to a single resource instance
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceChange {
    pub address: String,
    #[serde(rename = "type", default)]
    pub resource_type: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub module_address: Option<String>,
    pub change: Change,
}

/// The before/after description of a change
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Change {
    pub actions: Vec<String>,
    #[serde(default)]
    pub before: Option<Value>,
    #[serde(default)]
    pub after: Option<Value>,
    #[serde(default)]
    pub after_unknown: Option<Value>,
    #[serde(default)]
    pub before_sensitive: Option<Value>,
    #[serde(default)]
    pub after_sensitive: Option<Value>,
}

/// What Terraform will do to a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    Update,
    Delete,
    Replace,
    Read,
    NoOp,
    Unknown,
}

impl Action {
    /// Derive the action from Terraform's `actions` list
    pub fn from_actions(actions: &[String]) -> Self {
        match actions {
            [a] if a == "create" => Action::Create,
            [a] if a == "update" => Action::Update,
            [a] if a == "delete" => Action::Delete,
            [a] if a == "read" => Action::Read,
            [a] if a == "no-op" => Action::NoOp,
            [a1, a2] if a1 == "delete" && a2 == "create" => Action::Replace,
            [a1, a2] if a1 == "create" && a2 == "delete" => Action::Replace,
            _ => Action::Unknown,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Action::Create => "+",
            Action::Update => "~",
            Action::Delete => "-",
            Action::Replace => "-/+",
            Action::Read => "<=",
            Action::NoOp => " ",
            Action::Unknown => "?",
        }
    }

    /// Past-tense label used in "will be ..." headers
    pub fn label(&self) -> &'static str {
        match self {
            Action::Create => "created",
            Action::Update => "changed",
            Action::Delete => "destroyed",
            Action::Replace => "replaced",
            Action::Read => "read during apply",
            Action::NoOp => "unchanged",
            Action::Unknown => "unknown",
        }
    }

    /// CSS class used by the HTML renderer
    pub fn css_class(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "destroy",
            Action::Replace => "replace",
            Action::Read => "read",
            Action::NoOp | Action::Unknown => "unknown",
        }
    }

    /// Whether the resource appears in rendered listings
    pub fn is_listed(&self) -> bool {
        !matches!(self, Action::NoOp | Action::Unknown)
    }
}

impl ResourceChange {
    pub fn action(&self) -> Action {
        Action::from_actions(&self.change.actions)
    }
}

/// Per-action resource counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanSummary {
    pub create: usize,
    pub update: usize,
    pub delete: usize,
    pub replace: usize,
    pub read: usize,
}

impl PlanSummary {
    pub fn record(&mut self, action: Action) {
        match action {
            Action::Create => self.create += 1,
            Action::Update => self.update += 1,
            Action::Delete => self.delete += 1,
            Action::Replace => self.replace += 1,
            Action::Read => self.read += 1,
            Action::NoOp | Action::Unknown => {}
        }
    }

    pub fn to_add(&self) -> usize {
        self.create
    }

    /// Replacements count as changes, not as an add plus a destroy
    pub fn to_change(&self) -> usize {
        self.update + self.replace
    }

    pub fn to_destroy(&self) -> usize {
        self.delete
    }

    pub fn has_changes(&self) -> bool {
        self.create + self.update + self.replace + self.delete > 0
    }
}

impl TerraformPlan {
    /// Parse a plan from its JSON text
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Resources that appear in listings, paired with their action
    pub fn listed_changes(&self) -> Vec<(&ResourceChange, Action)> {
        self.resource_changes
            .iter()
            .map(|rc| (rc, rc.action()))
            .filter(|(_, action)| action.is_listed())
            .collect()
    }

    pub fn summary(&self) -> PlanSummary {
        let mut summary = PlanSummary::default();
        for change in &self.resource_changes {
            summary.record(change.action());
        }
        summary
    }

    /// Output changes that do something, in name order
    pub fn changed_outputs(&self) -> Vec<(&str, Change)> {
        self.output_changes
            .iter()
            .filter_map(|(name, value)| {
                let change: Change = serde_json::from_value(value.clone()).ok()?;
                let action = Action::from_actions(&change.actions);
                action.is_listed().then_some((name.as_str(), change))
            })
            .collect()
    }

    /// Keep only resources whose address matches `pattern`
    pub fn retain_matching(&mut self, pattern: &regex::Regex) {
        self.resource_changes.retain(|rc| pattern.is_match(&rc.address));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn actions(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_action_from_actions() {
        assert_eq!(Action::from_actions(&actions(&["create"])), Action::Create);
        assert_eq!(Action::from_actions(&actions(&["update"])), Action::Update);
        assert_eq!(Action::from_actions(&actions(&["delete"])), Action::Delete);
        assert_eq!(Action::from_actions(&actions(&["read"])), Action::Read);
        assert_eq!(Action::from_actions(&actions(&["no-op"])), Action::NoOp);
        assert_eq!(
            Action::from_actions(&actions(&["delete", "create"])),
            Action::Replace
        );
        assert_eq!(
            Action::from_actions(&actions(&["create", "delete"])),
            Action::Replace
        );
        assert_eq!(Action::from_actions(&actions(&["unknown"])), Action::Unknown);
        assert_eq!(Action::from_actions(&[]), Action::Unknown);
    }

    #[test]
    fn test_parse_minimal_plan() {
        let plan = TerraformPlan::from_json(
            r#"{"resource_changes":[{"address":"aws_instance.web","type":"aws_instance","change":{"actions":["create"],"before":null,"after":{"ami":"ami-1"}}}]}"#,
        )
        .unwrap();

        assert_eq!(plan.resource_changes.len(), 1);
        assert_eq!(plan.resource_changes[0].resource_type, "aws_instance");
        assert_eq!(plan.resource_changes[0].action(), Action::Create);
        assert!(plan.resource_changes[0].change.before.is_none());
    }

    #[test]
    fn test_missing_resource_changes_is_empty_plan() {
        let plan = TerraformPlan::from_json(r#"{"format_version":"1.2"}"#).unwrap();
        assert!(plan.resource_changes.is_empty());
        assert!(!plan.summary().has_changes());
    }

    #[test]
    fn test_summary_counts_replace_as_change() {
        let plan = TerraformPlan::from_json(
            &json!({
                "resource_changes": [
                    {"address": "a.one", "change": {"actions": ["create"]}},
                    {"address": "a.two", "change": {"actions": ["create"]}},
                    {"address": "a.three", "change": {"actions": ["update"]}},
                    {"address": "a.four", "change": {"actions": ["delete", "create"]}},
                    {"address": "a.five", "change": {"actions": ["delete"]}},
                    {"address": "a.six", "change": {"actions": ["no-op"]}}
                ]
            })
            .to_string(),
        )
        .unwrap();

        let summary = plan.summary();
        assert_eq!(summary.to_add(), 2);
        assert_eq!(summary.to_change(), 2);
        assert_eq!(summary.to_destroy(), 1);
        assert!(summary.has_changes());
        assert_eq!(plan.listed_changes().len(), 5);
    }

    #[test]
    fn test_read_only_plan_has_no_changes() {
        let mut summary = PlanSummary::default();
        summary.record(Action::Read);
        summary.record(Action::NoOp);
        assert_eq!(summary.read, 1);
        assert!(!summary.has_changes());
    }

    #[test]
    fn test_changed_outputs_skips_no_op() {
        let plan = TerraformPlan::from_json(
            &json!({
                "output_changes": {
                    "ip": {"actions": ["create"], "before": null, "after": "10.0.0.1"},
                    "name": {"actions": ["no-op"], "before": "x", "after": "x"}
                }
            })
            .to_string(),
        )
        .unwrap();

        let outputs = plan.changed_outputs();
        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].0, "ip");
    }

    #[test]
    fn test_retain_matching() {
        let mut plan = TerraformPlan::from_json(
            &json!({
                "resource_changes": [
                    {"address": "module.net.aws_vpc.main", "change": {"actions": ["create"]}},
                    {"address": "aws_instance.web", "change": {"actions": ["create"]}}
                ]
            })
            .to_string(),
        )
        .unwrap();

        plan.retain_matching(&regex::Regex::new(r"^module\.net\.").unwrap());
        assert_eq!(plan.resource_changes.len(), 1);
        assert_eq!(plan.resource_changes[0].address, "module.net.aws_vpc.main");
    }
}
