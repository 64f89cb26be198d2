use tag_validator::{Record, ToFieldValue};

#[derive(Record)]
pub struct Labelled<T: ToFieldValue> {
    #[validate("string,required")]
    label: String,
    #[validate("number,min=0")]
    value: T,
}

fn main() {
    let labelled = Labelled { label: "count".to_string(), value: 3u16 };
    assert_eq!(labelled.fields().len(), 2);
}
