//! 下書きとコミットの性質テスト

use lopam_common::{
    Article, ContentDocument, ContentStore, DraftBuffer, EditingController, FixedClock,
    MemoryPersistence, Project, Record,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn list_field() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("tech"), Just("impact"), Just("responsibilities")]
}

fn items() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,6}", 0..8)
}

fn new_controller(count: usize) -> EditingController<MemoryPersistence, FixedClock> {
    let articles = (0..count)
        .map(|i| Article {
            id: format!("seed-{}", i),
            title: format!("Seed {}", i),
            ..Default::default()
        })
        .collect();
    EditingController::new(
        ContentStore::from_document(ContentDocument {
            articles,
            projects: vec![],
        }),
        MemoryPersistence::new(),
        FixedClock::default(),
    )
}

proptest! {
    #[test]
    fn prop_add_twice_keeps_single_copy(field in list_field(), seed in items(), value in "[a-z]{1,6}") {
        let mut draft = DraftBuffer::new(Project::default());
        for item in &seed {
            draft.add_list_item(field, item).unwrap();
        }
        draft.add_list_item(field, &value).unwrap();
        draft.add_list_item(field, &value).unwrap();

        let list = draft.fields().list(field).unwrap();
        prop_assert_eq!(list.iter().filter(|item| **item == value).count(), 1);
    }

    #[test]
    fn prop_lists_never_hold_duplicates(field in list_field(), values in items()) {
        let mut draft = DraftBuffer::new(Project::default());
        for value in &values {
            draft.add_list_item(field, value).unwrap();
        }

        let list = draft.fields().list(field).unwrap();
        let unique: HashSet<&String> = list.iter().collect();
        prop_assert_eq!(unique.len(), list.len());
    }

    #[test]
    fn prop_add_then_remove_restores_list(seed in items(), value in "[A-Z]{1,6}") {
        // 大文字の値は seed（小文字）と重ならない
        let mut draft = DraftBuffer::new(Article::default());
        for item in &seed {
            draft.add_list_item("tags", item).unwrap();
        }
        let before = draft.fields().tags.clone();

        draft.add_list_item("tags", &value).unwrap();
        draft.remove_list_item("tags", &value).unwrap();
        prop_assert_eq!(&draft.fields().tags, &before);
    }

    #[test]
    fn prop_valid_create_appends_one_unique_record(
        existing in 0usize..5,
        commits in 1usize..5,
        title in "[A-Za-z ]{1,20}",
    ) {
        let mut ctrl = new_controller(existing);
        for _ in 0..commits {
            ctrl.begin_create::<Article>();
            let draft = ctrl.draft_mut::<Article>().unwrap();
            draft.set_field("title", title.as_str()).unwrap();
            draft.set_field("excerpt", "excerpt").unwrap();
            draft.set_field("content", "<p>content</p>").unwrap();

            let before = ctrl.records::<Article>().len();
            ctrl.commit::<Article>().unwrap();
            prop_assert_eq!(ctrl.records::<Article>().len(), before + 1);
            prop_assert!(ctrl.mode::<Article>().is_idle());
        }

        let ids: HashSet<&str> = ctrl.records::<Article>().iter().map(|a| a.id()).collect();
        prop_assert_eq!(ids.len(), existing + commits);
    }

    #[test]
    fn prop_invalid_commit_changes_nothing(
        title in prop_oneof![Just(String::new()), "[a-z]{1,5}"],
        excerpt in prop_oneof![Just(String::new()), "[a-z]{1,5}"],
        content in prop_oneof![Just(String::new()), "[a-z]{1,5}"],
    ) {
        prop_assume!(title.is_empty() || excerpt.is_empty() || content.is_empty());

        let mut ctrl = new_controller(2);
        let before = ctrl.export();
        ctrl.begin_create::<Article>();
        {
            let draft = ctrl.draft_mut::<Article>().unwrap();
            draft.set_field("title", title.as_str()).unwrap();
            draft.set_field("excerpt", excerpt.as_str()).unwrap();
            draft.set_field("content", content.as_str()).unwrap();
        }

        prop_assert!(ctrl.commit::<Article>().unwrap_err().is_validation());
        prop_assert_eq!(ctrl.export(), before);
        prop_assert!(!ctrl.mode::<Article>().is_idle());
    }

    #[test]
    fn prop_edit_keeps_length_and_other_ids(count in 1usize..6, pick in 0usize..6, title in "[a-z]{1,8}") {
        let mut ctrl = new_controller(count);
        let target = format!("seed-{}", pick % count);
        let ids_before: Vec<String> = ctrl.records::<Article>().iter().map(|a| a.id.clone()).collect();

        ctrl.begin_edit::<Article>(&target).unwrap();
        {
            let draft = ctrl.draft_mut::<Article>().unwrap();
            draft.set_field("title", title.as_str()).unwrap();
            draft.set_field("excerpt", "e").unwrap();
            draft.set_field("content", "c").unwrap();
        }
        ctrl.commit::<Article>().unwrap();

        let ids_after: Vec<String> = ctrl.records::<Article>().iter().map(|a| a.id.clone()).collect();
        prop_assert_eq!(ids_after, ids_before);
        prop_assert_eq!(&ctrl.records::<Article>().get(&target).unwrap().title, &title);
    }
}
