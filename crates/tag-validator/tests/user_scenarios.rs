use tag_validator::{CustomValidator, Record, Validator, Violation};

#[derive(Debug, Clone, Record)]
struct User {
    #[validate("uuid")]
    id: String,
    #[validate("string,min=2,max=10,pattern=^[a-zA-Z]+$")]
    name: String,
    #[validate("string,required,min=2,max=10", rename = "lastName")]
    last_name: String,
    #[validate("number,min=18,max=20")]
    age: i32,
}

fn valid_user() -> User {
    User {
        id: "ba6516aa-3cb8-4592-b3cf-ba3ad9e176ae".to_string(),
        name: "name".to_string(),
        last_name: "lastName".to_string(),
        age: 19,
    }
}

fn violations(user: &User) -> Vec<Violation> {
    Validator::new().violations(user)
}

#[test]
fn scenario_a_valid_user() {
    assert!(violations(&valid_user()).is_empty());
    assert!(Validator::new().validate(&valid_user()).is_ok());
}

#[test]
fn scenario_b_malformed_id() {
    let user = User {
        id: "id".to_string(),
        ..valid_user()
    };

    let found = violations(&user);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].field, "id");
    assert_eq!(found[0].code, "invalid_identifier_format");
    assert_eq!(found[0].message, "invalid identifier format");
}

#[test]
fn scenario_c_name_fails_pattern() {
    let user = User {
        name: "name007".to_string(),
        ..valid_user()
    };

    let found = violations(&user);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].field, "name");
    assert_eq!(found[0].code, "pattern_mismatch");
}

#[test]
fn scenario_d_missing_last_name() {
    let user = User {
        last_name: String::new(),
        ..valid_user()
    };

    let found = violations(&user);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].field, "lastName");
    assert_eq!(found[0].message, "must not be empty");
}

#[test]
fn scenario_e_age_above_maximum() {
    let user = User {
        age: 99,
        ..valid_user()
    };

    let found = violations(&user);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].field, "age");
    assert_eq!(found[0].code, "above_maximum");
}

#[test]
fn scenario_f_three_violations() {
    let user = User {
        id: "ba3ad9e176ae".to_string(),
        name: "y".to_string(),
        last_name: "lastName".to_string(),
        age: 8,
    };

    let errors = Validator::new().validate(&user).unwrap_err();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors.fields(), vec!["id", "name", "age"]);

    let codes: Vec<&str> = errors.iter().map(|v| v.code.as_str()).collect();
    assert_eq!(
        codes,
        vec!["invalid_identifier_format", "below_minimum", "below_minimum"]
    );

    let rendered = errors.to_string();
    assert!(rendered.contains("id: invalid identifier format"));
    assert!(rendered.contains("name: is below minimum length 2"));
    assert!(rendered.contains("age: is below minimum 18"));
}

#[test]
fn every_field_failing_reports_one_violation_each() {
    let user = User {
        id: String::new(),
        name: "12345678901".to_string(),
        last_name: String::new(),
        age: -1,
    };

    let found = violations(&user);
    assert_eq!(found.len(), 4);
    assert_eq!(found[1].code, "above_maximum");
    assert_eq!(found[2].code, "empty");
}

#[test]
fn custom_validator_overrides_builtin_string() {
    let permissive = CustomValidator::new("string", |_, _| None);
    let validator = Validator::with_custom([permissive]);

    let user = User {
        name: "y".to_string(),
        last_name: String::new(),
        ..valid_user()
    };

    assert!(validator.validate(&user).is_ok());
}

#[test]
fn aggregate_error_unwraps_to_causes() {
    let user = User {
        id: "id".to_string(),
        age: 99,
        ..valid_user()
    };

    let err: Box<dyn std::error::Error> = Box::new(Validator::new().validate(&user).unwrap_err());
    let errors = err
        .downcast::<tag_validator::ValidationErrors>()
        .expect("aggregate error");
    let causes = errors.into_causes();

    assert_eq!(causes.len(), 2);
    assert_eq!(causes[0].to_string(), "id: invalid identifier format");
    assert_eq!(causes[1].to_string(), "age: is above maximum 20");
}

#[test]
fn validator_is_shareable_across_threads() {
    let validator = std::sync::Arc::new(Validator::new());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let validator = validator.clone();
            std::thread::spawn(move || {
                let user = User {
                    age: 17 + i,
                    ..valid_user()
                };
                validator.violations(&user).len()
            })
        })
        .collect();

    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, vec![1, 0, 0, 0]);
}

#[test]
#[should_panic(expected = "expects a string")]
fn mismatched_annotation_panics() {
    #[derive(Record)]
    struct Broken {
        #[validate("string,min=2")]
        age: i32,
    }

    let _ = Validator::new().validate(&Broken { age: 19 });
}
