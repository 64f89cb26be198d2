//! Record traversal engine

use crate::annotation::Annotation;
use crate::config::ValidatorConfig;
use crate::error::{CheckError, SchemaError, ValidationErrors, ValidationResult, Violation};
use crate::registry::RuleRegistry;
use crate::traits::{Record, ValidationRule};
use crate::validators::{CustomValidator, StringValidator};
use std::sync::Arc;

/// Validates records against their field annotations.
///
/// A validator is immutable once built. It can be shared across threads and
/// reused; validating the same record twice gives the same result.
#[derive(Debug, Clone)]
pub struct Validator {
    registry: RuleRegistry,
    config: ValidatorConfig,
}

impl Validator {
    /// Validator with the built-in rules and default configuration
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Validator with the built-ins plus the given custom validators, applied
    /// in order so a later tag overrides an earlier one
    pub fn with_custom<I>(custom: I) -> Self
    where
        I: IntoIterator<Item = CustomValidator>,
    {
        custom
            .into_iter()
            .fold(Self::builder(), |builder, validator| builder.custom(validator))
            .build()
    }

    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Run every annotated field of `record` through its rule.
    ///
    /// Returns the collected violations (empty when the record is valid), or
    /// the first schema error met, which ends the pass. Type mismatches on a
    /// [`Record::loosely_typed`] record are collected as violations.
    pub fn check<R>(&self, record: &R) -> Result<ValidationErrors, SchemaError>
    where
        R: Record + ?Sized,
    {
        let mut errors = ValidationErrors::new();
        let fields = record.fields();
        let loose = record.loosely_typed();

        for field in &fields {
            let raw = match field.annotation {
                Some(raw) if !Annotation::is_skip(raw, self.config.get_skip_token()) => raw,
                _ => {
                    if *self.config.get_log_skipped() {
                        tracing::trace!("Skipping field '{}': not annotated", field.name);
                    }
                    continue;
                }
            };

            let annotation = Annotation::parse(raw);
            let rule = match self.registry.resolve(annotation.name()) {
                Some(rule) => rule,
                None => {
                    tracing::debug!(
                        "Skipping field '{}': no rule named '{}'",
                        field.name,
                        annotation.name()
                    );
                    continue;
                }
            };

            tracing::trace!("Validating field '{}' with rule '{}'", field.name, rule.rule_name());
            match rule.validate(field.name, &field.value, annotation.params()) {
                Ok(()) => {}
                Err(CheckError::Violation(violation)) => errors.add(violation),
                Err(CheckError::Schema(SchemaError::TypeMismatch {
                    field,
                    expected,
                    found,
                    ..
                })) if loose => errors.add(Violation::with_code(
                    field,
                    format!("must be {}, found {}", expected, found),
                    "invalid_type",
                )),
                Err(CheckError::Schema(err)) => return Err(err),
            }
        }

        tracing::debug!(
            "Validated '{}': {} field(s), {} violation(s)",
            record.record_name(),
            fields.len(),
            errors.len()
        );

        Ok(errors)
    }

    /// Validate a record, returning every violation at once.
    ///
    /// # Panics
    ///
    /// Panics when the record's annotations do not fit its fields (a rule
    /// applied to a value of the wrong type, a malformed parameter or
    /// pattern). These are defects in the record definition, not bad data.
    pub fn validate<R>(&self, record: &R) -> ValidationResult<()>
    where
        R: Record + ?Sized,
    {
        match self.check(record) {
            Ok(errors) => errors.into_result(),
            Err(err) => fatal(record.record_name(), err),
        }
    }

    /// Like [`Validator::validate`], returning the violations as a list
    pub fn violations<R>(&self, record: &R) -> Vec<Violation>
    where
        R: Record + ?Sized,
    {
        match self.validate(record) {
            Ok(()) => Vec::new(),
            Err(errors) => errors.into_causes(),
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn fatal(record: &str, err: SchemaError) -> ! {
    tracing::error!("Invalid validation schema for {}: {}", record, err);
    panic!("{}", err)
}

/// Builder for [`Validator`]
pub struct ValidatorBuilder {
    config: ValidatorConfig,
    builtins: bool,
    rules: Vec<(String, Arc<dyn ValidationRule>)>,
}

impl Default for ValidatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidatorBuilder {
    pub fn new() -> Self {
        Self {
            config: ValidatorConfig::default(),
            builtins: true,
            rules: Vec::new(),
        }
    }

    /// Set the configuration
    pub fn config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Start from an empty registry instead of the built-ins
    pub fn without_builtins(mut self) -> Self {
        self.builtins = false;
        self
    }

    /// Register a rule under `name`, replacing any rule of that name
    pub fn rule<R>(mut self, name: impl Into<String>, rule: R) -> Self
    where
        R: ValidationRule + 'static,
    {
        self.rules.push((name.into(), Arc::new(rule)));
        self
    }

    /// Register a custom validator under its tag
    pub fn custom(self, validator: CustomValidator) -> Self {
        let tag = validator.tag().to_string();
        self.rule(tag, validator)
    }

    pub fn build(self) -> Validator {
        let mut registry = if self.builtins {
            RuleRegistry::with_string_validator(
                StringValidator::new().word_boundaries(*self.config.get_word_boundaries()),
            )
        } else {
            RuleRegistry::new()
        };

        for (name, rule) in self.rules {
            registry.register_arc(name, rule);
        }

        tracing::debug!("Validator built with rules {:?}", registry.names());

        Validator {
            registry,
            config: self.config,
        }
    }
}
