use tag_validator::{Record, Validator};

#[derive(Record)]
pub struct User {
    #[validate("uuid")]
    id: String,
    #[validate("string,min=2,max=10")]
    name: String,
    #[validate("number,min=18,max=20")]
    age: i32,
}

fn main() {
    let user = User {
        id: "ba6516aa-3cb8-4592-b3cf-ba3ad9e176ae".to_string(),
        name: "name".to_string(),
        age: 19,
    };
    assert!(Validator::new().validate(&user).is_ok());
}
