mod common;

use chrono::{DateTime, TimeZone, Utc};
use mockito::Matcher;
use projects_mytube::db::user_data::models::{SubscriptionCategory, UserSettings};
use projects_mytube::youtube::aggregate::{
    uploads_for_all_subscriptions, uploads_for_category, UploadsForAllSubscriptionsError,
    UploadsForCategoryError,
};
use serde_json::json;

use common::{activity, client_for, ids, page, subscription};

fn entry(
    id: i32,
    channel_id: &str,
    category: &str,
    last_checked: Option<DateTime<Utc>>,
) -> SubscriptionCategory {
    SubscriptionCategory {
        id,
        user_name: "kusinwolf".to_string(),
        channel_id: channel_id.to_string(),
        category: category.to_string(),
        last_checked,
    }
}

fn settings() -> UserSettings {
    let checkpoint = Utc.with_ymd_and_hms(2024, 2, 1, 8, 30, 0).unwrap();
    UserSettings {
        categories: vec!["music".to_string(), "games".to_string()],
        subscription_to_category: vec![
            entry(1, "UC_a", "music", Some(checkpoint)),
            entry(2, "UC_b", "games", Some(checkpoint)),
            entry(3, "UC_c", "music", None),
        ],
    }
}

#[tokio::test]
async fn unknown_category_fails_without_network_calls() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = uploads_for_category(&client, &settings(), "nonexistent")
        .await
        .unwrap_err();

    match err {
        UploadsForCategoryError::UnknownCategory { category } => assert_eq!(category, "nonexistent"),
        other => panic!("unexpected error: {other}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn category_uploads_follow_table_order_and_checkpoints() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let channel_a = server
        .mock("GET", "/youtube/v3/activities")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("channelId".into(), "UC_a".into()),
            Matcher::UrlEncoded("publishedAfter".into(), "2024-02-01T08:30:00Z".into()),
        ]))
        .with_status(200)
        .with_body(page(
            vec![
                activity("a1", "UC_a", "upload"),
                activity("a2", "UC_a", "like"),
                activity("a3", "UC_a", "upload"),
            ],
            None,
        ))
        .expect(1)
        .create_async()
        .await;
    let channel_b = server
        .mock("GET", "/youtube/v3/activities")
        .match_query(Matcher::UrlEncoded("channelId".into(), "UC_b".into()))
        .expect(0)
        .create_async()
        .await;
    // No checkpoint yet, so no lower bound is sent.
    let channel_c = server
        .mock("GET", "/youtube/v3/activities")
        .match_query(Matcher::Regex("channelId=UC_c&maxResults=50$".into()))
        .with_status(200)
        .with_body(page(vec![activity("c1", "UC_c", "upload")], None))
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let uploads = uploads_for_category(&client, &settings(), "music").await?;

    assert_eq!(ids(&uploads), vec!["a1", "a3", "c1"]);
    channel_a.assert_async().await;
    channel_b.assert_async().await;
    channel_c.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn category_with_no_subscriptions_is_empty() -> anyhow::Result<()> {
    let server = mockito::Server::new_async().await;
    let mut settings = settings();
    settings.categories.push("news".to_string());

    let client = client_for(&server);
    let uploads = uploads_for_category(&client, &settings, "news").await?;

    assert!(uploads.is_empty());
    Ok(())
}

#[tokio::test]
async fn failing_channel_fails_the_whole_category() {
    let mut server = mockito::Server::new_async().await;

    let _channel_a = server
        .mock("GET", "/youtube/v3/activities")
        .match_query(Matcher::UrlEncoded("channelId".into(), "UC_a".into()))
        .with_status(200)
        .with_body(page(vec![activity("a1", "UC_a", "upload")], None))
        .create_async()
        .await;
    let _channel_c = server
        .mock("GET", "/youtube/v3/activities")
        .match_query(Matcher::UrlEncoded("channelId".into(), "UC_c".into()))
        .with_status(500)
        .with_body("backend error")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = uploads_for_category(&client, &settings(), "music")
        .await
        .unwrap_err();

    match err {
        UploadsForCategoryError::GetActivitiesFor { channel_id, .. } => assert_eq!(channel_id, "UC_c"),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn every_subscription_carries_its_uploads() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let since = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();

    let _subscriptions = server
        .mock("GET", "/youtube/v3/subscriptions")
        .match_query(Matcher::UrlEncoded("mine".into(), "true".into()))
        .with_status(200)
        .with_body(page(
            vec![subscription("s1", "UC_a"), subscription("s2", "UC_b")],
            None,
        ))
        .create_async()
        .await;
    let _channel_a = server
        .mock("GET", "/youtube/v3/activities")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("channelId".into(), "UC_a".into()),
            Matcher::UrlEncoded("publishedAfter".into(), "2024-03-01T00:00:00Z".into()),
        ]))
        .with_status(200)
        .with_body(page(
            vec![activity("a1", "UC_a", "upload"), activity("a2", "UC_a", "bulletin")],
            None,
        ))
        .create_async()
        .await;
    let _channel_b = server
        .mock("GET", "/youtube/v3/activities")
        .match_query(Matcher::UrlEncoded("channelId".into(), "UC_b".into()))
        .with_status(200)
        .with_body(page(vec![], None))
        .create_async()
        .await;

    let client = client_for(&server);
    let subscriptions = uploads_for_all_subscriptions(&client, Some(since)).await?;

    assert_eq!(ids(&subscriptions), vec!["s1", "s2"]);
    assert_eq!(ids(subscriptions[0]["activities"].as_array().unwrap()), vec!["a1"]);
    assert_eq!(subscriptions[1]["activities"], json!([]));
    assert_eq!(
        subscriptions[0]["snippet"]["resourceId"]["channelId"],
        json!("UC_a")
    );
    Ok(())
}

#[tokio::test]
async fn subscription_without_channel_is_reported() {
    let mut server = mockito::Server::new_async().await;

    let _subscriptions = server
        .mock("GET", "/youtube/v3/subscriptions")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(page(vec![json!({ "id": "broken", "snippet": {} })], None))
        .create_async()
        .await;

    let client = client_for(&server);
    let err = uploads_for_all_subscriptions(&client, None).await.unwrap_err();

    match err {
        UploadsForAllSubscriptionsError::SubscriptionChannelMissing { subscription_id } => {
            assert_eq!(subscription_id, "broken")
        }
        other => panic!("unexpected error: {other}"),
    }
}
