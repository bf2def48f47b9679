crate::define_id_enum! {
    /// Managed datastore identifier
    DatastoreId {
        Postgres => "postgres" : "PostgreSQL" | "postgresql" | "pg",
        Mysql => "mysql" : "MySQL" | "mariadb",
        Mongodb => "mongodb" : "MongoDB" | "mongo",
        Redis => "redis" : "Redis",
    }
}

impl DatastoreId {
    /// Service name used for the CI service container. Doubles as the
    /// container hostname inside the workflow job.
    pub fn service_name(&self) -> &'static str {
        self.token()
    }

    /// Pinned image for the CI service container.
    pub fn image(&self) -> &'static str {
        match self {
            DatastoreId::Postgres => "postgres:15",
            DatastoreId::Mysql => "mysql:8",
            DatastoreId::Mongodb => "mongo:6",
            DatastoreId::Redis => "redis:7",
        }
    }

    /// Well-known port the service listens on.
    pub fn port(&self) -> u16 {
        match self {
            DatastoreId::Postgres => 5432,
            DatastoreId::Mysql => 3306,
            DatastoreId::Mongodb => 27017,
            DatastoreId::Redis => 6379,
        }
    }

    /// Environment variable the application reads its connection string from.
    pub fn env_var(&self) -> &'static str {
        match self {
            DatastoreId::Postgres | DatastoreId::Mysql => "DATABASE_URL",
            DatastoreId::Mongodb => "MONGODB_URI",
            DatastoreId::Redis => "REDIS_URL",
        }
    }

    /// URL scheme for connection strings.
    pub fn scheme(&self) -> &'static str {
        match self {
            DatastoreId::Postgres => "postgresql",
            DatastoreId::Mysql => "mysql",
            DatastoreId::Mongodb => "mongodb",
            DatastoreId::Redis => "redis",
        }
    }

    /// Health check command for the CI service container.
    pub fn health_cmd(&self) -> &'static str {
        match self {
            DatastoreId::Postgres => "pg_isready",
            DatastoreId::Mysql => "mysqladmin ping",
            DatastoreId::Mongodb => "mongosh --eval 'db.runCommand({ping:1})'",
            DatastoreId::Redis => "redis-cli ping",
        }
    }

    /// Heroku add-on plan, where one exists.
    pub fn heroku_addon(&self) -> Option<&'static str> {
        match self {
            DatastoreId::Postgres => Some("heroku-postgresql:mini"),
            DatastoreId::Mysql => Some("jawsdb:kitefin"),
            DatastoreId::Redis => Some("heroku-redis:mini"),
            DatastoreId::Mongodb => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        postgres = { DatastoreId::Postgres, 5432, "DATABASE_URL" },
        mysql = { DatastoreId::Mysql, 3306, "DATABASE_URL" },
        mongodb = { DatastoreId::Mongodb, 27017, "MONGODB_URI" },
        redis = { DatastoreId::Redis, 6379, "REDIS_URL" },
    )]
    fn test_datastore_wiring(ds: DatastoreId, port: u16, env_var: &str) {
        assert_eq!(ds.port(), port);
        assert_eq!(ds.env_var(), env_var);
        assert!(ds.image().starts_with(ds.service_name()));
    }

    #[test]
    fn test_datastore_canonical_order() {
        // BTreeSet iteration over datastores follows declaration order, which
        // keeps rendered service blocks stable across runs.
        let mut all: Vec<_> = DatastoreId::all_variants().to_vec();
        all.sort();
        assert_eq!(all, DatastoreId::all_variants());
    }

    #[test]
    fn test_mongodb_has_no_heroku_addon() {
        assert!(DatastoreId::Mongodb.heroku_addon().is_none());
        assert!(DatastoreId::Postgres.heroku_addon().is_some());
    }
}
