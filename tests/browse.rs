//! End-to-end runs over a JSON catalog and a state file on disk.

use estate_scout::catalog::{BuiltinCatalog, JsonFileCatalog};
use estate_scout::config::Config;
use estate_scout::inquiry::InquiryForm;
use estate_scout::state::UserState;
use estate_scout::{App, Catalog, Category, SearchFilter};

fn write_catalog(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("catalog.json");
    let json = serde_json::to_string_pretty(&BuiltinCatalog::properties()).unwrap();
    std::fs::write(&path, json).unwrap();
    path
}

fn config(dir: &std::path::Path) -> Config {
    let mut config = Config::default();
    config.catalog.source = write_catalog(dir).display().to_string();
    config.state.path = dir.join("state").join("state.json");
    config
}

#[tokio::test]
async fn file_catalog_searches_like_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(dir.path());
    let catalog = Catalog::load(&JsonFileCatalog::new(path)).await.unwrap();

    let ids = |filter: SearchFilter| -> Vec<String> {
        catalog.search(&filter).iter().map(|p| p.id.clone()).collect()
    };

    assert_eq!(ids(SearchFilter::new("", Category::House)), ["2", "3"]);
    assert_eq!(ids(SearchFilter::new("Brooklyn", Category::All)), ["4"]);
    assert!(ids(SearchFilter::new("zzz-nomatch", Category::All)).is_empty());
    assert_eq!(ids(SearchFilter::new("nyc", Category::Apartment)), ["1"]);
}

#[tokio::test]
async fn favorites_survive_between_runs() {
    let dir = tempfile::tempdir().unwrap();

    let mut first = App::open(config(dir.path())).await.unwrap();
    first.toggle_favorite("6").unwrap();
    first.show("6").unwrap();
    first.persist().await.unwrap();

    let mut second = App::open(config(dir.path())).await.unwrap();
    assert!(second.favorites().contains("Waterfront Condo ♥"));
    assert!(second.profile().contains("   1  Properties Viewed"));

    second.remove_favorite("6");
    second
        .contact(
            "6",
            InquiryForm {
                name: "Jo".to_string(),
                email: "jo@example.com".to_string(),
                message: "Is there a viewing this week?".to_string(),
                ..InquiryForm::default()
            },
        )
        .unwrap();
    second.persist().await.unwrap();

    let state = UserState::load(&dir.path().join("state").join("state.json"))
        .await
        .unwrap();
    assert!(state.favorites.is_empty());
    assert_eq!(state.inquiries.len(), 1);
    assert_eq!(state.inquiries[0].owner_name, "Carlos Martinez");
}

#[tokio::test]
async fn missing_catalog_file_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.catalog.source = dir.path().join("absent.json").display().to_string();

    let err = App::open(config).await.err().unwrap();
    assert!(err.to_string().starts_with("Failed to load catalog from"));
}
