use folio_core::{
    CatalogItem, CatalogStore, DetailOverlay, LoadError, LoadState, MediaSelection, MemorySource,
    OverlayPhase, select_media,
};
use folio_types::{CategoryFilter, ItemId, MediaRef, Project, ProjectCategory, Skill, SkillCategory};

fn project(json: &str) -> Project {
    serde_json::from_str(json).unwrap()
}

const PROJECTS: &str = r#"[
    {"id": 1, "title": "Shop", "category": "Web", "thumbnail": "/img/shop.png"},
    {"id": 2, "title": "Tracker", "category": "Mobile", "thumbnail": "/img/tracker.png"}
]"#;

#[tokio::test]
async fn mobile_filter_shows_only_mobile_projects() -> anyhow::Result<()> {
    let source = MemorySource::new().with_document("projects.json", PROJECTS);
    let mut store = CatalogStore::<Project>::new();
    assert_eq!(store.load(&source, "projects.json").await?, 2);

    store.set_filter(CategoryFilter::Only(ProjectCategory::Mobile));
    let ids: Vec<&ItemId> = store.filtered().map(|p| p.id()).collect();
    assert_eq!(ids, vec![&ItemId::Number(2)]);
    Ok(())
}

#[tokio::test]
async fn close_after_zoom_clears_both_layers() -> anyhow::Result<()> {
    let source = MemorySource::new().with_document("projects.json", PROJECTS);
    let mut store = CatalogStore::<Project>::new();
    store.load(&source, "projects.json").await?;

    let mut overlay = DetailOverlay::new();
    let first = &store.items()[0];
    overlay.open(first);
    assert!(overlay.zoom(MediaRef::new("x")));
    overlay.close();

    assert_eq!(overlay.phase(), OverlayPhase::Closed);
    assert!(overlay.selected(&store).is_none());
    assert!(overlay.zoomed().is_none());
    Ok(())
}

#[test]
fn video_is_chosen_over_image_grid() {
    let item = project(
        r#"{"id": "v", "title": "Demo", "thumbnail": "/t.png",
            "video": "/demo.mp4", "images": ["a", "b", "c"]}"#,
    );
    assert_eq!(select_media(&item), MediaSelection::Video("/demo.mp4"));
    assert!(item.media().is_empty());
}

#[test]
fn two_images_show_the_thumbnail() {
    let item = project(
        r#"{"id": "t", "title": "Demo", "thumbnail": "/t.png", "images": ["a", "b"]}"#,
    );
    assert_eq!(select_media(&item), MediaSelection::Thumbnail("/t.png"));
    assert_eq!(item.media(), vec![MediaRef::new("/t.png")]);
}

#[test]
fn empty_video_string_does_not_count_as_video() {
    let item = project(
        r#"{"id": "e", "title": "Demo", "thumbnail": "/t.png", "video": "",
            "images": ["a", "b", "c"]}"#,
    );
    assert!(matches!(select_media(&item), MediaSelection::Grid(images) if images.len() == 3));
}

#[tokio::test]
async fn network_failure_leaves_empty_view_and_reports_error() {
    let source = MemorySource::new().with_failure(
        "projects.json",
        LoadError::Transport("connection reset".into()),
    );
    let mut store = CatalogStore::<Project>::new();
    let err = store.load(&source, "projects.json").await.unwrap_err();

    assert_eq!(err, LoadError::Transport("connection reset".into()));
    assert_eq!(store.filtered_len(), 0);
    assert_eq!(store.state(), &LoadState::Failed(err));
}

#[tokio::test]
async fn unknown_category_is_only_visible_under_all() -> anyhow::Result<()> {
    let source = MemorySource::new().with_document(
        "projects.json",
        r#"[
            {"id": 1, "title": "A", "category": "Desktop", "thumbnail": "/a.png"},
            {"id": 2, "title": "B", "thumbnail": "/b.png"},
            {"id": 3, "title": "C", "category": "Other", "thumbnail": "/c.png"}
        ]"#,
    );
    let mut store = CatalogStore::<Project>::new();
    store.load(&source, "projects.json").await?;

    assert_eq!(store.filtered_len(), 3);
    for category in [ProjectCategory::Web, ProjectCategory::Mobile] {
        assert_eq!(store.count_matching(CategoryFilter::Only(category)), 0);
    }
    assert_eq!(
        store.count_matching(CategoryFilter::Only(ProjectCategory::Other)),
        1
    );
    Ok(())
}

#[test]
fn reload_without_selected_item_closes_overlay() {
    let mut store = CatalogStore::<Skill>::new();
    let rust = Skill {
        id: ItemId::from("languages-0"),
        name: "Rust".into(),
        icon: String::new(),
        proficiency: 90,
        category: SkillCategory::Languages,
    };
    store.apply(Ok(vec![rust.clone()])).unwrap();

    let mut overlay = DetailOverlay::new();
    overlay.open(&rust);
    assert!(!overlay.reconcile(&store));

    store.apply(Ok(Vec::new())).unwrap();
    assert!(overlay.reconcile(&store));
    assert_eq!(overlay.phase(), OverlayPhase::Closed);
}

#[test]
fn reload_that_drops_zoomed_image_returns_to_detail() {
    let gallery = project(
        r#"{"id": 7, "title": "Gallery", "thumbnail": "/t.png",
            "images": ["/a.png", "/b.png", "/c.png"]}"#,
    );
    let mut store = CatalogStore::<Project>::new();
    store.apply(Ok(vec![gallery.clone()])).unwrap();

    let mut overlay = DetailOverlay::new();
    overlay.open(&gallery);
    assert!(overlay.zoom(MediaRef::new("/c.png")));

    // Same images, reordered: the zoom survives.
    store
        .apply(Ok(vec![project(
            r#"{"id": 7, "title": "Gallery", "thumbnail": "/t.png",
                "images": ["/c.png", "/a.png", "/b.png"]}"#,
        )]))
        .unwrap();
    assert!(!overlay.reconcile(&store));
    assert_eq!(overlay.zoomed(), Some(&MediaRef::new("/c.png")));

    store
        .apply(Ok(vec![project(
            r#"{"id": 7, "title": "Gallery", "thumbnail": "/t.png",
                "images": ["/a.png", "/b.png", "/d.png"]}"#,
        )]))
        .unwrap();
    assert!(overlay.reconcile(&store));
    assert_eq!(overlay.phase(), OverlayPhase::DetailOpen);
    assert_eq!(overlay.detail_id(), Some(&ItemId::Number(7)));
    assert!(overlay.zoomed().is_none());
}
