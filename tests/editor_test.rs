//! 編集フローのシナリオテスト
//!
//! ストア・下書き・コントローラを組み合わせた動作を検証

use lopam_common::{
    Article, CommitAction, ContentDocument, ContentStore, DeleteOutcome, EditMode,
    EditingController, Error, FixedClock, MemoryPersistence, Persistence, Project, Result,
};

/// 常に失敗する保存先
struct FailingPersistence;

impl Persistence for FailingPersistence {
    fn persist(&self, _document: &ContentDocument) -> Result<()> {
        Err(Error::Persist("connection refused".to_string()))
    }
}

fn seed() -> ContentDocument {
    ContentDocument {
        articles: vec![Article {
            id: "a".to_string(),
            title: "X".to_string(),
            excerpt: "excerpt".to_string(),
            content: "<p>body</p>".to_string(),
            date: "2024-01-15".to_string(),
            read_time: "8 min read".to_string(),
            tags: vec!["LOPAM".to_string()],
            published: true,
        }],
        projects: vec![Project {
            id: "sneaklin".to_string(),
            title: "Sneaklin".to_string(),
            role: "Frontend Developer".to_string(),
            summary: "E-commerce platform".to_string(),
            tech: vec!["React".to_string(), "Bootstrap".to_string()],
            live_demo: Some("https://lopam.pario.la/sneaklin".to_string()),
            ..Default::default()
        }],
    }
}

fn controller() -> EditingController<MemoryPersistence, FixedClock> {
    EditingController::new(
        ContentStore::from_document(seed()),
        MemoryPersistence::new(),
        FixedClock::new(1_705_312_800_000, "2024-01-15"),
    )
}

/// 既存記事のタイトルを X → Y に変更
#[test]
fn test_edit_title_in_place() {
    let mut ctrl = controller();
    ctrl.begin_edit::<Article>("a").expect("編集開始失敗");
    ctrl.draft_mut::<Article>()
        .expect("編集中ではない")
        .set_field("title", "Y")
        .expect("更新失敗");

    let outcome = ctrl.commit::<Article>().expect("コミット失敗");
    assert_eq!(outcome.action, CommitAction::Replaced);

    let articles = ctrl.records::<Article>();
    assert_eq!(articles.len(), 1);
    let a = articles.get("a").expect("記事が無い");
    assert_eq!(a.title, "Y");
    assert_eq!(a.read_time, "8 min read");
    assert_eq!(a.tags, vec!["LOPAM"]);
}

/// タイトル空のまま新規作成 → 拒否され Creating のまま
#[test]
fn test_create_without_title_is_rejected() {
    let mut ctrl = controller();
    ctrl.begin_create::<Article>();
    {
        let draft = ctrl.draft_mut::<Article>().expect("編集中ではない");
        draft.set_field("excerpt", "Short").expect("更新失敗");
        draft.set_field("content", "<p>Long</p>").expect("更新失敗");
    }

    let err = ctrl.commit::<Article>().unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().starts_with(lopam_common::VALIDATION_MESSAGE));
    assert_eq!(ctrl.mode::<Article>(), &EditMode::Creating);
    assert_eq!(ctrl.export(), seed());
    assert_eq!(ctrl.persistence().count(), 0);

    // 修正して再送信できる
    ctrl.draft_mut::<Article>()
        .expect("編集中ではない")
        .set_field("title", "Fixed")
        .expect("更新失敗");
    assert!(ctrl.commit::<Article>().is_ok());
    assert_eq!(ctrl.records::<Article>().len(), 2);
}

/// 削除の確認を断る → 変化なし
#[test]
fn test_delete_declined() {
    let mut ctrl = controller();
    let outcome = ctrl.delete::<Article>("a", &mut |_: &str| false).expect("削除失敗");
    assert_eq!(outcome, DeleteOutcome::Declined);
    assert_eq!(ctrl.export(), seed());
    assert_eq!(ctrl.persistence().count(), 0);
}

/// 削除を確認 → 消える、保存先に渡される
#[test]
fn test_delete_confirmed() {
    let mut ctrl = controller();
    let outcome = ctrl.delete::<Article>("a", &mut |_: &str| true).expect("削除失敗");
    assert_eq!(outcome, DeleteOutcome::Deleted { persisted: true });
    assert!(!ctrl.records::<Article>().contains("a"));

    let saved = ctrl.persistence().last().expect("保存されていない");
    assert!(saved.articles.is_empty());
    assert_eq!(saved.projects.len(), 1);
}

/// 新規プロジェクトは末尾に追加され、リスト項目はそのまま保存される
#[test]
fn test_create_project_with_lists() {
    let mut ctrl = controller();
    ctrl.begin_create::<Project>();
    {
        let draft = ctrl.draft_mut::<Project>().expect("編集中ではない");
        draft.set_field("title", "UniChow").expect("更新失敗");
        draft.set_field("role", "Full-stack Developer").expect("更新失敗");
        draft.set_field("summary", "Campus food wallet").expect("更新失敗");
        draft.add_list_item("tech", "Paystack").expect("追加失敗");
        draft.add_list_item("tech", "Paystack").expect("追加失敗");
        draft.add_list_item("responsibilities", "Wallet flows").expect("追加失敗");
    }

    let outcome = ctrl.commit::<Project>().expect("コミット失敗");
    assert_eq!(outcome.id, "project-1705312800000");

    let projects = ctrl.records::<Project>().records();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id, "sneaklin");
    assert_eq!(projects[1].tech, vec!["Paystack"]);
    assert_eq!(projects[1].live_demo, None);
}

/// 保存に失敗してもメモリ上の変更は残る
#[test]
fn test_persist_failure_does_not_roll_back() {
    let mut ctrl = EditingController::new(
        ContentStore::from_document(seed()),
        FailingPersistence,
        FixedClock::default(),
    );
    ctrl.begin_edit::<Project>("sneaklin").expect("編集開始失敗");
    ctrl.draft_mut::<Project>()
        .expect("編集中ではない")
        .remove_list_item("tech", "Bootstrap")
        .expect("削除失敗");

    let outcome = ctrl.commit::<Project>().expect("コミット失敗");
    assert!(!outcome.persisted);
    assert_eq!(
        ctrl.records::<Project>().get("sneaklin").map(|p| p.tech.clone()),
        Some(vec!["React".to_string()])
    );
    assert!(ctrl.mode::<Project>().is_idle());
}

/// 編集中に別の記事の編集を始めると下書きが入れ替わる
#[test]
fn test_begin_edit_switches_target() {
    let mut ctrl = controller();
    ctrl.begin_create::<Article>();
    ctrl.draft_mut::<Article>()
        .expect("編集中ではない")
        .set_field("title", "discarded")
        .expect("更新失敗");

    ctrl.begin_edit::<Article>("a").expect("編集開始失敗");
    assert_eq!(ctrl.mode::<Article>(), &EditMode::EditingExisting("a".to_string()));
    assert_eq!(ctrl.draft::<Article>().fields().title, "X");
}
