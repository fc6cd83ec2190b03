use axum::http::StatusCode;

use crate::tests::helper;

#[tokio::test]
async fn test_notes() {
    let mut app = helper::setup_test_app().await;

    // verify empty note list
    let (status_code, notes) = helper::list_notes(&mut app).await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!(Some(Vec::<helper::Note>::new()), notes);

    // create first note
    let (status_code, buy_milk, _) = helper::maybe_create_note(&mut app, "buy milk").await;
    assert_eq!(StatusCode::CREATED, status_code);
    assert!(buy_milk.is_some());
    let buy_milk = buy_milk.unwrap();
    assert_eq!("buy milk".to_string(), buy_milk.content);
    assert!(!buy_milk.created_at.is_empty());

    assert_eq!(vec!["buy milk"], helper::list_note_contents(&mut app).await);

    // second note is listed first
    let (status_code, call_bob, _) = helper::maybe_create_note(&mut app, "call bob").await;
    assert_eq!(StatusCode::CREATED, status_code);
    let call_bob = call_bob.unwrap();
    assert_ne!(buy_milk.id, call_bob.id);

    assert_eq!(
        vec!["call bob", "buy milk"],
        helper::list_note_contents(&mut app).await
    );

    // delete responds with the removed note
    let (status_code, deleted, _) = helper::maybe_delete_note(&mut app, buy_milk.id).await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!(Some(buy_milk), deleted);

    let (status_code, notes) = helper::list_notes(&mut app).await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!(Some(vec![call_bob]), notes);
}

#[tokio::test]
async fn test_note_content_is_trimmed() {
    let mut app = helper::setup_test_app().await;

    let (status_code, note, _) = helper::maybe_create_note(&mut app, "  water plants \n").await;
    assert_eq!(StatusCode::CREATED, status_code);
    assert_eq!("water plants".to_string(), note.unwrap().content);

    assert_eq!(vec!["water plants"], helper::list_note_contents(&mut app).await);
}

#[tokio::test]
async fn test_note_blank_content() {
    let mut app = helper::setup_test_app().await;

    for content in ["", "   ", "\t\n"] {
        let (status_code, note, error) = helper::maybe_create_note(&mut app, content).await;
        assert_eq!(StatusCode::BAD_REQUEST, status_code);
        assert_eq!(None, note);
        assert_eq!(Some("Content can not be empty".to_string()), error);
    }

    // nothing was stored
    assert!(helper::list_note_contents(&mut app).await.is_empty());
}

#[tokio::test]
async fn test_note_delete_twice() {
    let mut app = helper::setup_test_app().await;

    let (_, note, _) = helper::maybe_create_note(&mut app, "call bob").await;
    let note = note.unwrap();

    let (status_code, _, _) = helper::maybe_delete_note(&mut app, note.id).await;
    assert_eq!(StatusCode::OK, status_code);

    let (status_code, deleted, error) = helper::maybe_delete_note(&mut app, note.id).await;
    assert_eq!(StatusCode::NOT_FOUND, status_code);
    assert_eq!(None, deleted);
    assert_eq!(Some("Note not found".to_string()), error);
}

#[tokio::test]
async fn test_note_delete_unknown_id() {
    let mut app = helper::setup_test_app().await;

    let (_, note, _) = helper::maybe_create_note(&mut app, "buy milk").await;
    let note = note.unwrap();

    let (status_code, _, error) = helper::maybe_delete_note(&mut app, note.id + 1).await;
    assert_eq!(StatusCode::NOT_FOUND, status_code);
    assert_eq!(Some("Note not found".to_string()), error);

    // the existing note is untouched
    assert_eq!(vec!["buy milk"], helper::list_note_contents(&mut app).await);
}

#[tokio::test]
async fn test_note_invalid_id() {
    let mut app = helper::setup_test_app().await;

    let (status_code, _, error) = helper::maybe_delete_note_with_str(&mut app, "some-id").await;
    assert_eq!(StatusCode::BAD_REQUEST, status_code);
    assert_eq!(Some("Invalid path parameter".to_string()), error);
}

#[tokio::test]
async fn test_list_is_idempotent() {
    let mut app = helper::setup_test_app().await;

    for content in ["one", "two", "three"] {
        let (status_code, _, _) = helper::maybe_create_note(&mut app, content).await;
        assert_eq!(StatusCode::CREATED, status_code);
    }

    let (_, first) = helper::list_notes(&mut app).await;
    let (_, second) = helper::list_notes(&mut app).await;

    assert_eq!(first, second);
    assert_eq!(
        vec!["three", "two", "one"],
        first
            .unwrap()
            .into_iter()
            .map(|note| note.content)
            .collect::<Vec<_>>()
    );
}
