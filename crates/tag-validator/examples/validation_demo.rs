//! Validation demo: derived records, custom validators and runtime schemas
//!
//! Run with `RUST_LOG=tag_validator=trace` to see the engine's decisions.

use serde_json::json;
use tag_validator::{CustomValidator, Record, Schema, Validator, ValidatorConfig};
use tracing_subscriber::EnvFilter;

#[derive(Record)]
struct User {
    #[validate("uuid")]
    id: String,
    #[validate("string,min=2,max=10,pattern=^[a-zA-Z]+$")]
    name: String,
    #[validate("string,required,min=2,max=10", rename = "lastName")]
    last_name: String,
    #[validate("number,min=18,max=20")]
    age: i32,
    #[validate("role")]
    role: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("tag-validator demo");
    println!("==================\n");

    let validator = Validator::builder()
        .config(ValidatorConfig::default())
        .custom(CustomValidator::new("role", |value, _params| match value.as_str() {
            Some("admin") | Some("member") => None,
            _ => Some("must be admin or member".to_string()),
        }))
        .build();

    let users = [
        User {
            id: "ba6516aa-3cb8-4592-b3cf-ba3ad9e176ae".to_string(),
            name: "name".to_string(),
            last_name: "lastName".to_string(),
            age: 19,
            role: "admin".to_string(),
        },
        User {
            id: "ba3ad9e176ae".to_string(),
            name: "y".to_string(),
            last_name: "lastName".to_string(),
            age: 8,
            role: "guest".to_string(),
        },
    ];

    for user in &users {
        report(&validator, user, &user.id);
    }

    println!("\nRuntime schema");
    println!("--------------");

    let schema = Schema::new("Signup")
        .field("email", "string,required,pattern=^[^@ ]+@[^@ ]+$")
        .field("age", "number,min=13");

    let payload = json!({ "email": "not-an-email", "age": 12 });
    match validator.validate_json(&schema, &payload) {
        Ok(()) => println!("  signup is valid"),
        Err(errors) => println!("  {}", errors.to_json()),
    }
}

fn report<R: Record>(validator: &Validator, record: &R, label: &str) {
    match validator.validate(record) {
        Ok(()) => println!("  {} is valid", label),
        Err(errors) => {
            println!("  {} has {} violation(s):", label, errors.len());
            for violation in errors.causes() {
                println!("    - {} [{}]", violation, violation.code);
            }
        }
    }
}
