use relbooks::domain::DomainError;
use relbooks::{db, demo, seed};

#[tokio::test]
async fn test_demo_renders_all_three_reports() {
    let mut out = Vec::new();
    demo::run("sqlite::memory:", &mut out).await.expect("demo");
    let output = String::from_utf8(out).expect("utf8 output");

    // One banner per read path, in order.
    let book_banner = output
        .find("[Book: has one Publisher, many-to-many Author]")
        .expect("book banner");
    let author_banner = output
        .find("[Author: many-to-many Book]")
        .expect("author banner");
    let publisher_banner = output
        .find("[Publisher: has many Book]")
        .expect("publisher banner");
    assert!(book_banner < author_banner);
    assert!(author_banner < publisher_banner);

    // Two book sections, two author sections, one publisher section.
    assert_eq!(output.matches("=========== ").count(), 5);
    for name in [
        seed::BOOK_TITLE_1,
        seed::BOOK_TITLE_2,
        seed::AUTHOR_NAME_1,
        seed::AUTHOR_NAME_2,
        seed::PUBLISHER_NAME,
    ] {
        assert!(
            output.contains(&format!("=========== {} ==========", name)),
            "missing section for {}",
            name
        );
    }

    // Book sections carry the hydrated publisher inline.
    assert!(output.contains("publisher: {id: 1, name: test-publisher}"));

    // Association lines: author-1 wrote two books, author-2 one, and the
    // publisher's catalogue holds both books. Counted across sections so
    // the assertions hold regardless of row order.
    assert_eq!(output.matches("books-0: ").count(), 3);
    assert_eq!(output.matches("books-1: ").count(), 2);
    assert_eq!(output.matches("authors-0: ").count(), 2);
    assert_eq!(output.matches("authors-1: ").count(), 1);
}

#[tokio::test]
async fn test_demo_rerun_is_identical() {
    let dir = std::env::temp_dir().join(format!("relbooks-demo-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join("rerun.db");
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite://{}?mode=rwc", path.display());

    let mut first = Vec::new();
    demo::run(&url, &mut first).await.expect("first run");

    let mut second = Vec::new();
    demo::run(&url, &mut second).await.expect("second run");

    assert!(!first.is_empty());
    assert_eq!(first, second);

    let _ = std::fs::remove_file(&path);
    let _ = std::fs::remove_dir(&dir);
}

#[tokio::test]
async fn test_unreachable_database_aborts() {
    let mut out = Vec::new();
    let result = demo::run("sqlite://no-such-dir/absent.db", &mut out).await;

    assert!(matches!(result, Err(DomainError::Connection(_))));
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_connect_reports_connection_error() {
    let result = db::connect("sqlite://no-such-dir/absent.db").await;
    assert!(matches!(result, Err(DomainError::Connection(_))));
}
