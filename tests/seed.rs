mod common;

use std::{fs, path::PathBuf};

use chrono::NaiveDate;
use marketplace_api::{
    config::FixturePaths,
    seed::{Fixtures, SeedSummary, read_fixtures, seed_store},
    services::{offer_service, order_service, user_service},
};

fn bundled_fixtures() -> FixturePaths {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data");
    FixturePaths {
        users: root.join("users.json"),
        orders: root.join("orders.json"),
        offers: root.join("offers.json"),
    }
}

#[tokio::test]
async fn bundled_fixtures_seed_every_table() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let paths = bundled_fixtures();
    let fixtures = read_fixtures(&paths).await?;

    let summary = seed_store(&state.orm, &fixtures).await?;
    assert_eq!(
        summary,
        SeedSummary {
            users: fixtures.users.len(),
            orders: fixtures.orders.len(),
            offers: fixtures.offers.len(),
        }
    );

    let users = user_service::list_users(&state).await?.data.unwrap().items;
    assert_eq!(users.len(), fixtures.users.len());
    for (user, fixture) in users.iter().zip(&fixtures.users) {
        assert_eq!(Some(user.id), fixture.id);
        assert_eq!(user.first_name, fixture.payload.first_name);
        assert_eq!(user.email, fixture.payload.email);
        assert_eq!(user.phone, fixture.payload.phone);
    }

    let order = order_service::get_order(&state, 1).await?.data.unwrap();
    assert_eq!(order.start_date, NaiveDate::from_ymd_opt(2013, 2, 8));

    let offers = offer_service::list_offers(&state).await?.data.unwrap().items;
    assert_eq!(offers.len(), fixtures.offers.len());
    Ok(())
}

#[tokio::test]
async fn generated_ids_continue_after_seeded_ones() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let fixtures = read_fixtures(&bundled_fixtures()).await?;
    seed_store(&state.orm, &fixtures).await?;

    let created = user_service::create_user(&state, common::user_payload("new"))
        .await?
        .data
        .unwrap();
    let max_seeded = fixtures.users.iter().filter_map(|f| f.id).max().unwrap();
    assert!(created.id > max_seeded);
    Ok(())
}

#[tokio::test]
async fn fixture_entries_without_id_get_one_assigned() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let fixtures = Fixtures::parse(
        r#"[{"first_name":"Solo","last_name":"Rider"}]"#,
        r#"[{"name":"Errand","customer_id":1,"start_date":"01/15/2020"}]"#,
        "[]",
    )?;

    seed_store(&state.orm, &fixtures).await?;

    let users = user_service::list_users(&state).await?.data.unwrap().items;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, 1);
    assert_eq!(users[0].age, None);
    let orders = order_service::list_orders(&state).await?.data.unwrap().items;
    assert_eq!(orders[0].start_date, NaiveDate::from_ymd_opt(2020, 1, 15));
    Ok(())
}

#[tokio::test]
async fn malformed_date_fails_before_anything_is_stored() -> anyhow::Result<()> {
    let result = Fixtures::parse(
        r#"[{"id":1,"first_name":"A","last_name":"B"}]"#,
        r#"[{"id":1,"start_date":"the thirteenth"}]"#,
        "[]",
    );
    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("orders fixture"));
    Ok(())
}

#[tokio::test]
async fn failing_row_rolls_back_the_whole_seed() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    // The offer points at an order that does not exist.
    let fixtures = Fixtures::parse(
        r#"[{"id":1,"first_name":"A","last_name":"B"}]"#,
        r#"[{"id":1,"name":"Job","customer_id":1}]"#,
        r#"[{"id":1,"order_id":2,"executor_id":1}]"#,
    )?;

    assert!(seed_store(&state.orm, &fixtures).await.is_err());

    let users = user_service::list_users(&state).await?.data.unwrap().items;
    let orders = order_service::list_orders(&state).await?.data.unwrap().items;
    assert!(users.is_empty());
    assert!(orders.is_empty());
    Ok(())
}

#[tokio::test]
async fn invalid_user_fixture_is_rejected() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let fixtures = Fixtures::parse(
        r#"[{"id":1,"first_name":"Young","last_name":"One","age":12}]"#,
        "[]",
        "[]",
    )?;

    let err = seed_store(&state.orm, &fixtures).await.unwrap_err();
    assert!(format!("{err:#}").contains("users fixture entry 0"));
    assert!(user_service::list_users(&state).await?.data.unwrap().items.is_empty());
    Ok(())
}

#[tokio::test]
async fn unreadable_fixture_names_the_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let users = dir.path().join("users.json");
    fs::write(&users, "[]")?;
    let paths = FixturePaths {
        users,
        orders: dir.path().join("missing-orders.json"),
        offers: dir.path().join("offers.json"),
    };

    let err = read_fixtures(&paths).await.unwrap_err();
    assert!(err.to_string().contains("missing-orders.json"));
    Ok(())
}
