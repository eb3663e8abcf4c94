//! Startup seeding from JSON fixture files.
//!
//! Each fixture file is an array of objects shaped like the matching request
//! body, with an optional `id` that is kept as the primary key. All three files
//! are validated and inserted in one transaction: users, then orders, then
//! offers, so foreign keys always point at rows that already exist.

use std::path::Path;

use anyhow::Context;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbBackend,
    Statement, TransactionTrait,
};
use sea_orm::ActiveValue::{NotSet, Set};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::{
    config::FixturePaths,
    dto::{Validate, offers::OfferPayload, orders::OrderPayload, users::UserPayload},
    entity::{offers, orders, users},
    services::{order_service, user_service},
};

/// One fixture entry: the request body plus an optional fixed primary key.
#[derive(Debug, Clone, Deserialize)]
pub struct Fixture<T> {
    pub id: Option<i32>,
    #[serde(flatten)]
    pub payload: T,
}

#[derive(Debug, Clone, Default)]
pub struct Fixtures {
    pub users: Vec<Fixture<UserPayload>>,
    pub orders: Vec<Fixture<OrderPayload>>,
    pub offers: Vec<Fixture<OfferPayload>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub orders: usize,
    pub offers: usize,
}

impl Fixtures {
    pub fn parse(users: &str, orders: &str, offers: &str) -> anyhow::Result<Self> {
        Ok(Self {
            users: parse_fixture(users).context("invalid users fixture")?,
            orders: parse_fixture(orders).context("invalid orders fixture")?,
            offers: parse_fixture(offers).context("invalid offers fixture")?,
        })
    }

    fn validate(&self) -> anyhow::Result<()> {
        for (idx, fixture) in self.users.iter().enumerate() {
            fixture
                .payload
                .validate()
                .with_context(|| format!("users fixture entry {idx}"))?;
        }
        for (idx, fixture) in self.orders.iter().enumerate() {
            fixture
                .payload
                .validate()
                .with_context(|| format!("orders fixture entry {idx}"))?;
        }
        Ok(())
    }
}

fn parse_fixture<T: DeserializeOwned>(raw: &str) -> anyhow::Result<Vec<Fixture<T>>> {
    Ok(serde_json::from_str(raw)?)
}

pub async fn read_fixtures(paths: &FixturePaths) -> anyhow::Result<Fixtures> {
    let users = read_file(&paths.users).await?;
    let orders = read_file(&paths.orders).await?;
    let offers = read_file(&paths.offers).await?;
    Fixtures::parse(&users, &orders, &offers)
}

async fn read_file(path: &Path) -> anyhow::Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read fixture {}", path.display()))
}

/// Insert every fixture row in a single transaction.
///
/// Nothing is committed unless all rows validate and insert cleanly.
pub async fn seed_store(
    conn: &DatabaseConnection,
    fixtures: &Fixtures,
) -> anyhow::Result<SeedSummary> {
    fixtures.validate()?;

    let txn = conn.begin().await?;

    for fixture in &fixtures.users {
        let mut active = users::ActiveModel {
            id: fixture_id(fixture.id),
            ..Default::default()
        };
        user_service::apply_payload(&mut active, fixture.payload.clone());
        active
            .insert(&txn)
            .await
            .with_context(|| format!("failed to insert user {:?}", fixture.id))?;
    }

    for fixture in &fixtures.orders {
        let mut active = orders::ActiveModel {
            id: fixture_id(fixture.id),
            ..Default::default()
        };
        order_service::apply_payload(&mut active, fixture.payload.clone());
        active
            .insert(&txn)
            .await
            .with_context(|| format!("failed to insert order {:?}", fixture.id))?;
    }

    for fixture in &fixtures.offers {
        offers::ActiveModel {
            id: fixture_id(fixture.id),
            order_id: Set(fixture.payload.order_id),
            executor_id: Set(fixture.payload.executor_id),
        }
        .insert(&txn)
        .await
        .with_context(|| format!("failed to insert offer {:?}", fixture.id))?;
    }

    sync_id_sequences(&txn).await?;
    txn.commit().await?;

    let summary = SeedSummary {
        users: fixtures.users.len(),
        orders: fixtures.orders.len(),
        offers: fixtures.offers.len(),
    };
    tracing::info!(
        users = summary.users,
        orders = summary.orders,
        offers = summary.offers,
        "store seeded"
    );
    Ok(summary)
}

fn fixture_id(id: Option<i32>) -> sea_orm::ActiveValue<i32> {
    match id {
        Some(id) => Set(id),
        None => NotSet,
    }
}

/// Postgres serial sequences do not advance on explicit ids.
async fn sync_id_sequences(txn: &DatabaseTransaction) -> anyhow::Result<()> {
    let backend = txn.get_database_backend();
    if backend != DbBackend::Postgres {
        return Ok(());
    }
    for table in ["users", "orders", "offers"] {
        let sql = format!(
            "SELECT setval(pg_get_serial_sequence('{table}', 'id'), \
             COALESCE((SELECT MAX(id) FROM {table}), 0) + 1, false)"
        );
        txn.execute(Statement::from_string(backend, sql)).await?;
    }
    Ok(())
}
