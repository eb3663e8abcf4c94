use std::time::Duration;

use anyhow::Result;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema,
    sea_query::{Expr, Table},
};

use crate::{
    dto::users::MIN_AGE,
    entity::{Offers, Orders, Users, users},
};

/// Idle timeout and lifetime for the in-memory SQLite connection: effectively forever.
const MEMORY_CONN_KEEPALIVE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Create a SeaORM connection.
pub async fn create_orm_conn(database_url: &str) -> Result<DatabaseConnection> {
    let conn = Database::connect(connect_options(database_url)).await?;
    Ok(conn)
}

/// Pool options for `database_url`.
///
/// An in-memory SQLite database lives only as long as its connection, and every
/// pooled connection to `:memory:` opens its own empty database. Such URLs get a
/// single connection that the pool never reaps.
pub fn connect_options(database_url: &str) -> ConnectOptions {
    let mut options = ConnectOptions::new(database_url.to_owned());
    if database_url.starts_with("sqlite") && database_url.contains(":memory:") {
        options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(MEMORY_CONN_KEEPALIVE)
            .max_lifetime(MEMORY_CONN_KEEPALIVE);
    }
    options
}

/// Drop and recreate the `users`, `orders` and `offers` tables from the entity definitions.
///
/// Tables are dropped dependents first and created in foreign-key order. The
/// age floor is added as a CHECK constraint on top of what the entity derives.
pub async fn reset_schema(conn: &DatabaseConnection) -> Result<()> {
    let backend = conn.get_database_backend();

    let drops = [
        Table::drop().table(Offers).if_exists().to_owned(),
        Table::drop().table(Orders).if_exists().to_owned(),
        Table::drop().table(Users).if_exists().to_owned(),
    ];
    for stmt in drops {
        conn.execute(backend.build(&stmt)).await?;
    }

    let schema = Schema::new(backend);
    let mut users_table = schema.create_table_from_entity(Users);
    users_table.check(Expr::col(users::Column::Age).gte(MIN_AGE));

    let creates = [
        users_table,
        schema.create_table_from_entity(Orders),
        schema.create_table_from_entity(Offers),
    ];
    for stmt in creates {
        conn.execute(backend.build(&stmt)).await?;
    }

    tracing::info!("schema recreated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_YEAR: Duration = Duration::from_secs(365 * 24 * 60 * 60);

    #[test]
    fn memory_database_keeps_its_only_connection() {
        let options = connect_options("sqlite::memory:");
        assert_eq!(options.get_max_connections(), Some(1));
        assert_eq!(options.get_min_connections(), Some(1));
        assert!(options.get_idle_timeout().is_some_and(|t| t >= ONE_YEAR));
        assert!(options.get_max_lifetime().is_some_and(|t| t >= ONE_YEAR));
    }

    #[test]
    fn file_and_server_databases_use_pool_defaults() {
        for url in ["sqlite://marketplace.db?mode=rwc", "postgres://localhost/marketplace"] {
            let options = connect_options(url);
            assert_eq!(options.get_max_connections(), None);
            assert_eq!(options.get_idle_timeout(), None);
            assert_eq!(options.get_max_lifetime(), None);
        }
    }
}
