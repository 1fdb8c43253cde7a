use blogkeep_core::db::open_db_in_memory;
use blogkeep_core::{
    Category, Post, PostListQuery, PostRepository, RecordKind, RepoError, SqlitePostRepository,
};

fn long_text() -> String {
    "Arrakis ".repeat(40)
}

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePostRepository::new(&conn);

    let mut post = Post::new("Dune", "Fiction").unwrap();
    post.set_content(Some(long_text())).unwrap();
    post.set_summary(Some("Spice and sand.".to_string()))
        .unwrap();
    let id = repo.create_post(&post).unwrap();

    let loaded = repo.get_post(id).unwrap().unwrap();
    assert_eq!(loaded.id(), Some(id));
    assert_eq!(loaded.title(), "Dune");
    assert_eq!(loaded.content(), Some(long_text().as_str()));
    assert_eq!(loaded.summary(), Some("Spice and sand."));
    assert_eq!(loaded.category(), Category::Fiction);
    assert!(loaded.created_at().is_some());
}

#[test]
fn stored_category_uses_canonical_label() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePostRepository::new(&conn);

    let id = repo
        .create_post(&Post::new("Cosmos", "Non-Fiction").unwrap())
        .unwrap();
    let stored: String = conn
        .query_row("SELECT category FROM posts WHERE id = ?1;", [id], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(stored, "Non-Fiction");
}

#[test]
fn update_overwrites_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePostRepository::new(&conn);

    let id = repo
        .create_post(&Post::new("Draft", "Fiction").unwrap())
        .unwrap();
    let mut post = repo.get_post(id).unwrap().unwrap();
    post.set_title("Final").unwrap();
    post.set_category(Some("Non-Fiction")).unwrap();
    post.set_summary(Some("short".to_string())).unwrap();
    repo.update_post(&post).unwrap();

    let loaded = repo.get_post(id).unwrap().unwrap();
    assert_eq!(loaded.title(), "Final");
    assert_eq!(loaded.category(), Category::NonFiction);
    assert_eq!(loaded.summary(), Some("short"));
}

#[test]
fn update_requires_a_saved_post() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePostRepository::new(&conn);

    let err = repo
        .update_post(&Post::new("Unsaved", "Fiction").unwrap())
        .unwrap_err();
    assert!(matches!(err, RepoError::NotPersisted(RecordKind::Post)));
}

#[test]
fn missing_post_reads_as_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePostRepository::new(&conn);
    assert!(repo.get_post(42).unwrap().is_none());
}

#[test]
fn list_filters_by_category_and_paginates() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePostRepository::new(&conn);

    for (title, category) in [
        ("Dune", "Fiction"),
        ("Cosmos", "Non-Fiction"),
        ("Solaris", "Fiction"),
        ("Hyperion", "Fiction"),
    ] {
        repo.create_post(&Post::new(title, category).unwrap())
            .unwrap();
    }

    let fiction = repo
        .list_posts(&PostListQuery {
            category: Some(Category::Fiction),
            ..PostListQuery::default()
        })
        .unwrap();
    let titles: Vec<&str> = fiction.iter().map(Post::title).collect();
    assert_eq!(titles, ["Dune", "Solaris", "Hyperion"]);

    let page = repo
        .list_posts(&PostListQuery {
            category: Some(Category::Fiction),
            limit: Some(1),
            offset: 1,
        })
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].title(), "Solaris");

    let all = repo.list_posts(&PostListQuery::default()).unwrap();
    assert_eq!(all.len(), 4);
}
