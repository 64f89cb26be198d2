//! Rule registry: annotation name to rule binding

use crate::traits::ValidationRule;
use crate::validators::{NumberValidator, StringValidator, UuidValidator};
use std::collections::HashMap;
use std::sync::Arc;

/// Maps annotation names to rules.
///
/// Each [`crate::Validator`] owns its registry; there is no process-wide
/// table. Cloning is cheap, rules are shared behind `Arc`.
#[derive(Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, Arc<dyn ValidationRule>>,
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.names())
            .finish()
    }
}

impl RuleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Registry seeded with `number`, `string` and `uuid`
    pub fn with_builtins() -> Self {
        Self::with_string_validator(StringValidator::new())
    }

    pub(crate) fn with_string_validator(string: StringValidator) -> Self {
        let mut registry = Self::new();
        registry.register(NumberValidator::NAME, NumberValidator::new());
        registry.register(StringValidator::NAME, string);
        registry.register(UuidValidator::NAME, UuidValidator::new());
        registry
    }

    /// Bind `name` to `rule`. Replaces (and returns) any rule already bound to
    /// that name, built-ins included.
    pub fn register<R>(&mut self, name: impl Into<String>, rule: R) -> Option<Arc<dyn ValidationRule>>
    where
        R: ValidationRule + 'static,
    {
        self.register_arc(name, Arc::new(rule))
    }

    /// Bind an already shared rule
    pub fn register_arc(
        &mut self,
        name: impl Into<String>,
        rule: Arc<dyn ValidationRule>,
    ) -> Option<Arc<dyn ValidationRule>> {
        let name = name.into();
        let previous = self.rules.insert(name.clone(), rule);
        if previous.is_some() {
            tracing::debug!("Rule '{}' replaced", name);
        }
        previous
    }

    /// Look up the rule bound to `name`
    pub fn resolve(&self, name: &str) -> Option<&Arc<dyn ValidationRule>> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::Params;
    use crate::error::CheckResult;
    use crate::validators::CustomValidator;
    use crate::value::FieldValue;

    struct AlwaysOk;

    impl ValidationRule for AlwaysOk {
        fn validate(&self, _field: &str, _value: &FieldValue<'_>, _params: &Params) -> CheckResult {
            Ok(())
        }

        fn rule_name(&self) -> &str {
            "always_ok"
        }
    }

    #[test]
    fn test_builtins() {
        let registry = RuleRegistry::with_builtins();
        assert_eq!(registry.names(), vec!["number", "string", "uuid"]);
        assert_eq!(registry.resolve("number").unwrap().rule_name(), "number");
        assert!(registry.resolve("email").is_none());
    }

    #[test]
    fn test_empty_registry() {
        let registry = RuleRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.resolve("number").is_none());
    }

    #[test]
    fn test_register_adds_rule() {
        let mut registry = RuleRegistry::with_builtins();
        let previous = registry.register("always_ok", AlwaysOk);

        assert!(previous.is_none());
        assert_eq!(registry.len(), 4);
        assert!(registry.contains("always_ok"));
    }

    #[test]
    fn test_register_overrides_builtin() {
        let mut registry = RuleRegistry::with_builtins();
        let previous = registry.register("uuid", CustomValidator::new("uuid", |_, _| None));

        assert_eq!(previous.unwrap().rule_name(), "uuid");
        assert_eq!(registry.len(), 3);

        let rule = registry.resolve("uuid").unwrap();
        let result = rule.validate("id", &FieldValue::Str("not-a-uuid"), &Params::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = RuleRegistry::new();
        registry.register("check", CustomValidator::new("first", |_, _| Some("first".into())));
        registry.register("check", CustomValidator::new("second", |_, _| None));

        assert_eq!(registry.resolve("check").unwrap().rule_name(), "second");
    }
}
