//! Runs against the PostgreSQL server named by `DATABASE_URL` and is skipped
//! when it is unset. Every test works inside its own schema in a test
//! transaction, so nothing is left behind.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, Pool, TestCustomizer};
use diesel::PgConnection;
use projects_mytube::db::user_data::queries::{advance_last_checked, get_subscription_to_category};
use projects_mytube::db::user_data::store::{
    LoadUserSettingsError, PgUserSettings, UserSettingsStore,
};
use projects_mytube::db::PgPool;

const MIGRATION: &str =
    include_str!("../migrations/2024-01-01-000000_create_mytube/up.sql");

/// Single-connection pool with the tables created in `schema`, or `None`
/// when no database is configured.
fn test_pool(schema: &str) -> anyhow::Result<Option<Arc<PgPool>>> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        return Ok(None);
    };

    let pool = Pool::builder()
        .max_size(1)
        .connection_customizer(Box::new(TestCustomizer))
        .build(ConnectionManager::<PgConnection>::new(url))?;

    let mut conn = pool.get()?;
    conn.batch_execute(&format!(
        "CREATE SCHEMA {schema}; SET search_path TO {schema};"
    ))?;
    conn.batch_execute(MIGRATION)?;
    conn.batch_execute(
        "INSERT INTO user_data (user_name, categories) VALUES
            ('kusinwolf', ARRAY['music', 'gaming']);
         INSERT INTO subscription_to_category (user_name, channel_id, category) VALUES
            ('kusinwolf', 'UC_b', 'music'),
            ('kusinwolf', 'UC_a', 'music'),
            ('kusinwolf', 'UC_g', 'gaming'),
            ('kusinwolf', 'UC_c', 'music');",
    )?;
    drop(conn);

    Ok(Some(Arc::new(pool)))
}

#[test]
fn mapping_table_comes_back_in_insertion_order() -> anyhow::Result<()> {
    let Some(pool) = test_pool("mytube_order")? else {
        return Ok(());
    };
    let mut conn = pool.get()?;

    let entries = get_subscription_to_category(&mut conn, "kusinwolf")?;

    let channels: Vec<&str> = entries.iter().map(|entry| entry.channel_id.as_str()).collect();
    assert_eq!(channels, vec!["UC_b", "UC_a", "UC_g", "UC_c"]);
    assert!(entries.windows(2).all(|pair| pair[0].id < pair[1].id));
    Ok(())
}

#[test]
fn advancing_a_category_leaves_the_others_alone() -> anyhow::Result<()> {
    let Some(pool) = test_pool("mytube_advance")? else {
        return Ok(());
    };
    let mut conn = pool.get()?;
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();

    let updated = advance_last_checked(&mut conn, "kusinwolf", "music", at)?;
    assert_eq!(updated, 3);

    for entry in get_subscription_to_category(&mut conn, "kusinwolf")? {
        let expected = (entry.category == "music").then_some(at);
        assert_eq!(entry.last_checked, expected, "{}", entry.channel_id);
    }

    let untouched = advance_last_checked(&mut conn, "someone-else", "music", at)?;
    assert_eq!(untouched, 0);
    Ok(())
}

#[test]
fn stored_settings_carry_categories_and_checkpoints() -> anyhow::Result<()> {
    let Some(pool) = test_pool("mytube_settings")? else {
        return Ok(());
    };

    let settings = PgUserSettings::new(pool, "kusinwolf").user_settings()?;

    assert_eq!(settings.categories, vec!["music", "gaming"]);
    assert!(settings.has_category("gaming"));
    let music: Vec<&str> = settings
        .entries_for("music")
        .map(|entry| entry.channel_id.as_str())
        .collect();
    assert_eq!(music, vec!["UC_b", "UC_a", "UC_c"]);
    Ok(())
}

#[test]
fn unknown_user_is_reported() -> anyhow::Result<()> {
    let Some(pool) = test_pool("mytube_missing")? else {
        return Ok(());
    };

    let result = PgUserSettings::new(pool, "nobody").user_settings();

    assert!(matches!(
        result,
        Err(LoadUserSettingsError::UserNotFound { user }) if user == "nobody"
    ));
    Ok(())
}
