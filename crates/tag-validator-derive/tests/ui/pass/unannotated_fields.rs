use std::collections::HashMap;
use tag_validator::Record;

#[derive(Record)]
pub struct Document {
    #[validate("string,required", rename = "title")]
    heading: String,
    #[validate("-")]
    draft: bool,
    metadata: HashMap<String, String>,
    #[validate("-")]
    attachments: Vec<Vec<u8>>,
}

fn main() {
    let doc = Document {
        heading: "Intro".to_string(),
        draft: true,
        metadata: HashMap::new(),
        attachments: Vec::new(),
    };
    let fields = doc.fields();
    assert_eq!(fields[0].name, "title");
    assert!(fields[2].annotation.is_none());
    assert!(fields[3].value.is_unset());
    let _ = (&doc.draft, &doc.metadata, &doc.attachments);
}
