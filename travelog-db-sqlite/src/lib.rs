#[macro_use]
extern crate diesel;

use anyhow::Result as Fallible;
use diesel::{r2d2, sqlite::SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::{
    cell::{RefCell, RefMut},
    sync::Arc,
};
use travelog_core::{repositories as repo, usecases as uc};

mod models;
mod repo_impl;
mod schema;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

type Connection = SqliteConnection;

type ConnectionManager = r2d2::ConnectionManager<Connection>;
type ConnectionPool = r2d2::Pool<ConnectionManager>;
type PooledConnection = r2d2::PooledConnection<ConnectionManager>;

type SharedConnectionPool = Arc<RwLock<ConnectionPool>>;

pub struct DbReadOnly<'a> {
    _locked_pool: RwLockReadGuard<'a, ConnectionPool>,
    conn: RefCell<PooledConnection>,
}

impl<'a> DbReadOnly<'a> {
    fn try_new(pool: &'a SharedConnectionPool) -> Fallible<Self> {
        let locked_pool = pool.read();
        let conn = locked_pool.get().inspect_err(|err| {
            log::error!("Failed to obtain pooled database connection for read-only access: {err}");
        })?;
        Ok(Self {
            _locked_pool: locked_pool,
            conn: RefCell::new(conn),
        })
    }
}

pub struct DbReadWrite<'a> {
    _locked_pool: RwLockWriteGuard<'a, ConnectionPool>,
    conn: RefCell<PooledConnection>,
}

/// A connection within a running transaction.
pub struct DbConnection<'a> {
    conn: RefCell<&'a mut SqliteConnection>,
}

impl<'a> DbConnection<'a> {
    fn new(conn: &'a mut SqliteConnection) -> Self {
        Self {
            conn: RefCell::new(conn),
        }
    }
}

impl<'a> DbReadWrite<'a> {
    fn try_new(pool: &'a SharedConnectionPool) -> Fallible<Self> {
        let locked_pool = pool.write();
        let conn = locked_pool.get().inspect_err(|err| {
            log::error!("Failed to obtain pooled database connection for read/write access: {err}");
        })?;
        Ok(Self {
            _locked_pool: locked_pool,
            conn: RefCell::new(conn),
        })
    }

    /// Runs `f` within a single transaction.
    ///
    /// All changes are rolled back if `f` fails.
    pub fn transaction<T, F, E>(&mut self, f: F) -> Result<T, uc::Error>
    where
        F: FnOnce(&DbConnection) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        let mut usecase_error = None;
        use diesel::Connection;
        // The use case error must be smuggled out of the
        // transaction closure, Diesel only knows its own errors.
        self.conn
            .borrow_mut()
            .transaction(|conn| {
                f(&DbConnection::new(conn))
                    .map_err(Into::into)
                    .map_err(|err| {
                        usecase_error = Some(err);
                        diesel::result::Error::RollbackTransaction
                    })
            })
            .map_err(|err| {
                if let Some(usecase_error) = usecase_error {
                    debug_assert!(matches!(err, diesel::result::Error::RollbackTransaction));
                    usecase_error
                } else {
                    uc::Error::Repo(repo_impl::from_diesel_err(err))
                }
            })
    }

    fn sqlite_conn(&self) -> RefMut<PooledConnection> {
        self.conn.borrow_mut()
    }
}

#[derive(Clone)]
pub struct Connections {
    // Only a single connection with write access will be
    // handed out at a time from the pool. Multiple read
    // connections can be accessed concurrently. This locking
    // pattern around the connection pool prevents SQLITE_LOCKED
    // ("database is locked") errors.
    pool: SharedConnectionPool,
}

/// Configure the database engine
///
/// Some values like the text encoding can only be changed once after the
/// database has initially been created.
pub fn initialize_database(connection: &mut SqliteConnection) -> Fallible<()> {
    use diesel::connection::SimpleConnection as _;
    connection.batch_execute(
        r#"
PRAGMA journal_mode = WAL;        -- better write-concurrency
PRAGMA wal_checkpoint(TRUNCATE);  -- truncate possibly large WAL files from the last run
PRAGMA encoding = 'UTF-8';
"#,
    )?;
    Ok(())
}

// Per-connection settings that must be applied to every pooled connection
#[derive(Debug)]
struct ConnectionSettings;

impl r2d2::CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionSettings {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        use diesel::connection::SimpleConnection as _;
        conn.batch_execute(
            r#"
PRAGMA synchronous = NORMAL;      -- fsync only in critical moments, safe for journal_mode = WAL
PRAGMA foreign_keys = 1;          -- check foreign key constraints
PRAGMA defer_foreign_keys = 1;    -- delay enforcement of foreign key constraints until commit
PRAGMA busy_timeout = 5000;
"#,
        )
        .map_err(r2d2::Error::QueryError)
    }
}

impl Connections {
    pub fn init(url: &str, pool_size: u32) -> Fallible<Self> {
        // Establish a test connection before creating the connection pool to fail early.
        // r2d2 would otherwise retry silently on inaccessible files.
        use diesel::Connection as _;
        let _ = diesel::SqliteConnection::establish(url)?;
        let manager = ConnectionManager::new(url);
        let pool = ConnectionPool::builder()
            .max_size(pool_size)
            .connection_customizer(Box::new(ConnectionSettings))
            .build(manager)?;
        initialize_database(&mut *pool.get()?)?;
        Ok(Self::new(pool))
    }

    fn new(pool: ConnectionPool) -> Self {
        Self {
            pool: Arc::new(RwLock::new(pool)),
        }
    }

    pub fn shared(&self) -> Fallible<DbReadOnly> {
        DbReadOnly::try_new(&self.pool)
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite> {
        DbReadWrite::try_new(&self.pool)
    }
}

pub fn run_embedded_database_migrations(conn: DbReadWrite<'_>) -> Fallible<()> {
    log::info!("Running embedded database migrations");
    conn.sqlite_conn()
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| anyhow::anyhow!("Failed to run database migrations: {err}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use travelog_core::{entities::*, repositories::*, RepoError};
    use travelog_entities::builders::*;

    fn setup() -> Connections {
        // A single pooled connection, otherwise every
        // connection would open its own in-memory database.
        let connections = Connections::init(":memory:", 1).unwrap();
        run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
        connections
    }

    fn create_user(db: &DbReadWrite, account: &str, nickname: &str) -> UserId {
        let user = User::build().account(account).nickname(nickname).finish();
        db.create_user(&user).unwrap()
    }

    fn create_published(db: &DbReadWrite, author: UserId, title: &str, created: i64) -> TravelId {
        let mut t = Travelogue::build()
            .title(title)
            .status(TravelogueStatus::Published)
            .images(vec!["https://img.example.com/a.jpg", "https://img.example.com/b.jpg"])
            .created_at(Timestamp::from_millis(created))
            .finish();
        t.author = author;
        db.create_travelogue(&t).unwrap()
    }

    #[test]
    fn create_and_update_travelogue() {
        let connections = setup();
        let db = connections.exclusive().unwrap();
        let author = create_user(&db, "traveller", "Mia");
        let id = create_published(&db, author, "Kyoto", 1);
        let mut t = db.get_travelogue(id).unwrap();
        assert_eq!(t.author, author);
        assert_eq!(t.images.len(), 2);
        assert_eq!(t.images[1].order, 1);

        t.title = "Kyoto in spring".into();
        t.images.truncate(1);
        t.status = TravelogueStatus::Deleted;
        db.update_travelogue(&t).unwrap();
        let (t, author_info) = db.get_travelogue_with_author(id).unwrap();
        assert_eq!(t.title, "Kyoto in spring");
        assert_eq!(t.images.len(), 1);
        assert_eq!(t.status, TravelogueStatus::Deleted);
        assert_eq!(author_info.nickname, "Mia");

        assert!(matches!(
            db.get_travelogue(TravelId::new(99)),
            Err(RepoError::NotFound)
        ));
    }

    #[test]
    fn duplicate_accounts() {
        let connections = setup();
        let db = connections.exclusive().unwrap();
        create_user(&db, "traveller", "Mia");
        let user = User::build().account("traveller").finish();
        assert!(matches!(db.create_user(&user), Err(RepoError::AlreadyExists)));
        assert_eq!(db.count_users().unwrap(), 1);
    }

    #[test]
    fn query_with_filters_and_pagination() {
        let connections = setup();
        let db = connections.exclusive().unwrap();
        let mia = create_user(&db, "traveller-mia", "Mia");
        let leo = create_user(&db, "traveller-leo", "Leo");
        for i in 1..=12 {
            create_published(&db, mia, &format!("Trip #{i}"), i);
        }
        let leos = create_published(&db, leo, "100% fun_trip", 100);
        let mut deleted = db.get_travelogue(leos).unwrap();
        deleted.status = TravelogueStatus::Deleted;
        let hidden = db.create_travelogue(&deleted).unwrap();

        let query = TravelogueQuery::default();
        let page = Pagination {
            offset: Some(10),
            limit: Some(10),
        };
        let (data, total) = db.query_travelogues(&query, &page).unwrap();
        assert_eq!(total, 13);
        assert_eq!(data.len(), 3);
        assert!(data.iter().all(|(t, _)| t.id != hidden));

        let query = TravelogueQuery {
            keyword: Some("LEO".into()),
            ..Default::default()
        };
        let (data, total) = db.query_travelogues(&query, &Pagination::default()).unwrap();
        assert_eq!(total, 1);
        assert_eq!(data[0].1.nickname, "Leo");

        let query = TravelogueQuery {
            keyword: Some("100%".into()),
            ..Default::default()
        };
        assert_eq!(db.query_travelogues(&query, &Pagination::default()).unwrap().1, 1);
        let query = TravelogueQuery {
            keyword: Some("_".into()),
            ..Default::default()
        };
        assert_eq!(db.query_travelogues(&query, &Pagination::default()).unwrap().1, 1);

        let query = TravelogueQuery {
            author: Some(AuthorFilter::Nickname("Mia".into())),
            order: SortOrder::Asc,
            ..Default::default()
        };
        let (data, total) = db.query_travelogues(&query, &Pagination::default()).unwrap();
        assert_eq!(total, 12);
        assert_eq!(data[0].0.title, "Trip #1");
        assert_eq!(data[0].0.images.len(), 2);
    }

    #[test]
    fn offset_past_the_largest_sqlite_integer() {
        let connections = setup();
        let db = connections.exclusive().unwrap();
        let mia = create_user(&db, "traveller-mia", "Mia");
        create_published(&db, mia, "Kyoto", 1);
        let page = Pagination {
            offset: Some(u64::MAX - 9),
            limit: Some(10),
        };
        let (data, total) = db.query_travelogues(&TravelogueQuery::default(), &page).unwrap();
        assert!(data.is_empty());
        assert_eq!(total, 1);
    }

    #[test]
    fn toggle_likes() {
        let connections = setup();
        let db = connections.exclusive().unwrap();
        let mia = create_user(&db, "traveller-mia", "Mia");
        let leo = create_user(&db, "traveller-leo", "Leo");
        let id = create_published(&db, mia, "Kyoto", 1);

        let liked = db.toggle_like(leo, id).unwrap();
        assert!(liked.liked);
        assert_eq!(liked.likes, 1);
        assert!(db.is_liked_by(leo, id).unwrap());

        let query = TravelogueQuery {
            liked_by: Some(leo),
            ..Default::default()
        };
        assert_eq!(db.query_travelogues(&query, &Pagination::default()).unwrap().1, 1);

        let unliked = db.toggle_like(leo, id).unwrap();
        assert!(!unliked.liked);
        assert_eq!(unliked.likes, 0);
        assert_eq!(db.get_travelogue(id).unwrap().likes, 0);
        assert_eq!(db.query_travelogues(&query, &Pagination::default()).unwrap().1, 0);
    }

    #[test]
    fn review_records_and_statistics() {
        let connections = setup();
        let db = connections.exclusive().unwrap();
        let mia = create_user(&db, "traveller-mia", "Mia");
        let id = create_published(&db, mia, "Kyoto", 1);
        for (action, reason, time) in [
            (ReviewAction::Reject, Some("广告内容".to_owned()), 10),
            (ReviewAction::Approve, None, 20),
        ] {
            db.add_review_record(&NewReviewRecord {
                travelogue: id,
                action,
                rejection_reason: reason,
                reviewer: None,
                review_time: Timestamp::from_millis(time),
            })
            .unwrap();
        }
        let records = db.load_review_records(id).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].action, ReviewAction::Reject);
        assert_eq!(records[0].rejection_reason.as_deref(), Some("广告内容"));

        let stats = db.count_travelogues_by_status().unwrap();
        assert_eq!(stats, vec![(TravelogueStatus::Published, 1)]);
    }

    #[test]
    fn messages() {
        let connections = setup();
        let db = connections.exclusive().unwrap();
        let mia = create_user(&db, "traveller-mia", "Mia");
        let id = db
            .create_message(&NewMessage {
                recipient: mia,
                kind: MessageKind::Review,
                title: "Travelogue published".into(),
                content: "".into(),
                outcome: Some(ReviewOutcome::Approved),
                travelogue: None,
                from_user: None,
                created_at: Timestamp::from_millis(1),
            })
            .unwrap();
        assert!(db
            .messages_of_user(mia, Some(MessageKind::Like))
            .unwrap()
            .is_empty());
        db.mark_message_read(mia, id).unwrap();
        let messages = db.messages_of_user(mia, None).unwrap();
        assert!(messages[0].is_read);
        assert_eq!(messages[0].outcome, Some(ReviewOutcome::Approved));
        assert!(matches!(
            db.mark_message_read(UserId::new(42), id),
            Err(RepoError::NotFound)
        ));
    }

    #[test]
    fn mark_all_messages_read() {
        let connections = setup();
        let db = connections.exclusive().unwrap();
        let mia = create_user(&db, "traveller-mia", "Mia");
        let leo = create_user(&db, "traveller-leo", "Leo");
        for (recipient, created) in [(mia, 1), (mia, 2), (mia, 3), (leo, 4)] {
            db.create_message(&NewMessage {
                recipient,
                kind: MessageKind::Like,
                title: "New like".into(),
                content: "".into(),
                outcome: None,
                travelogue: None,
                from_user: Some("Someone".into()),
                created_at: Timestamp::from_millis(created),
            })
            .unwrap();
        }
        let newest = db.messages_of_user(mia, None).unwrap()[0].id;
        db.mark_message_read(mia, newest).unwrap();

        assert_eq!(db.mark_all_messages_read(mia).unwrap(), 2);
        assert!(db.messages_of_user(mia, None).unwrap().iter().all(|m| m.is_read));
        assert!(!db.messages_of_user(leo, None).unwrap()[0].is_read);
        assert_eq!(db.mark_all_messages_read(mia).unwrap(), 0);
    }
}
