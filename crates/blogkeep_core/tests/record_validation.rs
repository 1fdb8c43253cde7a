use blogkeep_core::{Author, Category, Post, PostDraft, ValidationError};

fn text(len: usize) -> String {
    "x".repeat(len)
}

#[test]
fn author_requires_a_name() {
    assert_eq!(Author::new("").unwrap_err(), ValidationError::EmptyName);

    let mut author = Author::new("Le Guin").unwrap();
    assert_eq!(author.set_name(""), Err(ValidationError::EmptyName));
    assert_eq!(author.name(), "Le Guin");
}

#[test]
fn author_phone_number_must_be_ten_characters() {
    let mut author = Author::new("Le Guin").unwrap();

    assert_eq!(
        author.set_phone_number(Some("12345".to_string())),
        Err(ValidationError::InvalidPhoneNumber { length: 5 })
    );
    assert_eq!(author.phone_number(), None);

    author
        .set_phone_number(Some("1234567890".to_string()))
        .unwrap();
    assert_eq!(author.phone_number(), Some("1234567890"));

    assert!(author.set_phone_number(Some("12345678901".to_string())).is_err());
    assert_eq!(author.phone_number(), Some("1234567890"));

    author.set_phone_number(Some(String::new())).unwrap();
    assert_eq!(author.phone_number(), None);
}

#[test]
fn new_author_is_unsaved() {
    let author = Author::new("Butler")
        .unwrap()
        .with_phone_number("5551234567")
        .unwrap();
    assert!(!author.is_persisted());
    assert_eq!(author.id(), None);
    assert_eq!(author.created_at(), None);
    assert_eq!(author.updated_at(), None);
}

#[test]
fn post_requires_a_title() {
    assert_eq!(
        Post::new("", "Fiction").unwrap_err(),
        ValidationError::EmptyTitle
    );

    let mut post = Post::new("Dune", "Fiction").unwrap();
    assert_eq!(post.set_title(""), Err(ValidationError::EmptyTitle));
    assert_eq!(post.title(), "Dune");
}

#[test]
fn post_content_has_a_minimum_length() {
    let mut post = Post::new("Dune", "Fiction").unwrap();

    assert_eq!(
        post.set_content(Some(text(249))),
        Err(ValidationError::ContentTooShort { length: 249 })
    );
    assert_eq!(post.content(), None);

    post.set_content(Some(text(250))).unwrap();
    assert_eq!(post.content().map(str::len), Some(250));
}

#[test]
fn post_summary_has_a_maximum_length() {
    let mut post = Post::new("Dune", "Fiction").unwrap();

    assert_eq!(
        post.set_summary(Some(text(251))),
        Err(ValidationError::SummaryTooLong { length: 251 })
    );
    post.set_summary(Some(text(250))).unwrap();
    assert_eq!(post.summary().map(str::len), Some(250));
}

#[test]
fn length_rules_count_characters_not_bytes() {
    let mut post = Post::new("Dune", "Fiction").unwrap();
    // 250 two-byte characters.
    post.set_summary(Some("é".repeat(250))).unwrap();
    assert!(post.set_content(Some("é".repeat(249))).is_err());
}

#[test]
fn post_category_must_be_known() {
    assert_eq!(
        Post::new("Dune", "Sci-Fi").unwrap_err(),
        ValidationError::InvalidCategory("Sci-Fi".to_string())
    );

    let mut post = Post::new("Dune", "Fiction").unwrap();
    assert_eq!(post.category(), Category::Fiction);

    post.set_category(Some("Non-Fiction")).unwrap();
    assert_eq!(post.category(), Category::NonFiction);

    assert_eq!(
        post.set_category(None),
        Err(ValidationError::MissingCategory)
    );
    assert_eq!(post.category(), Category::NonFiction);
}

#[test]
fn draft_without_category_is_rejected() {
    let draft = PostDraft {
        title: "Dune".to_string(),
        ..PostDraft::default()
    };
    assert_eq!(
        Post::from_draft(&draft).unwrap_err(),
        ValidationError::MissingCategory
    );
}

#[test]
fn apply_draft_is_all_or_nothing() {
    let mut post = Post::new("Dune", "Fiction").unwrap();
    post.set_summary(Some("A desert planet.".to_string()))
        .unwrap();
    let before = post.clone();

    let draft = PostDraft {
        title: "Dune Messiah".to_string(),
        content: None,
        summary: Some(text(300)),
        category: Some("Fiction".to_string()),
    };
    assert!(post.apply_draft(&draft).is_err());
    assert_eq!(post, before);
}

#[test]
fn serialization_uses_column_names_and_category_labels() {
    let mut post = Post::new("Silent Spring", "Non-Fiction").unwrap();
    post.set_summary(Some("Pesticides.".to_string())).unwrap();

    let json = serde_json::to_value(&post).unwrap();
    assert_eq!(json["title"], "Silent Spring");
    assert_eq!(json["category"], "Non-Fiction");
    assert_eq!(json["summary"], "Pesticides.");
    assert!(json["content"].is_null());
    assert!(json["id"].is_null());

    let decoded: Post = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, post);
}

#[test]
fn deserialization_runs_field_validators() {
    let bad_author = serde_json::json!({ "name": "", "phone_number": null });
    let err = serde_json::from_value::<Author>(bad_author).unwrap_err();
    assert!(
        err.to_string().contains("Author must have a name"),
        "unexpected error: {err}"
    );

    let bad_post = serde_json::json!({ "title": "Dune", "category": "Sci-Fi" });
    let err = serde_json::from_value::<Post>(bad_post).unwrap_err();
    assert!(
        err.to_string().contains("Invalid post category"),
        "unexpected error: {err}"
    );

    let no_category = serde_json::json!({ "title": "Dune" });
    assert!(serde_json::from_value::<Post>(no_category).is_err());
}

#[test]
fn setters_reject_nul_and_keep_previous_value() {
    let mut author = Author::new("Le Guin").unwrap();
    assert_eq!(
        author.set_name("Le\0Guin"),
        Err(ValidationError::ContainsNul { field: "name" })
    );
    assert_eq!(author.name(), "Le Guin");

    let mut post = Post::new("Dune", "Fiction").unwrap();
    assert!(post.set_summary(Some("sand\0".to_string())).is_err());
    assert_eq!(post.summary(), None);
}
