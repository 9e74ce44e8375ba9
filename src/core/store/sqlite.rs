//! SQLite-backed configuration store.
//!
//! One `config_master` table holds every entry. The schema is embedded and
//! applied on open, so a fresh path yields a ready database.

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{
    params, params_from_iter, Connection, ErrorCode, OptionalExtension, Row, Transaction,
    TransactionBehavior,
};
use tracing::{debug, info};

use super::{DeletePolicy, LookupField, Store, StoreOptions, Upsert};
use crate::core::domain::{ConfigEntry, NewEntry, Scope};
use crate::core::types::EntryId;
use crate::error::{Result, StoreError};

const SCHEMA: &str = include_str!("schema.sql");

const COLUMNS: &str = "id, project_code, env_code, module_code, config_key, config_value, \
     config_alias, auto_alias, config_type, is_encrypted, is_deleted, description, \
     sort_order, created_time, updated_time";

const ORDER: &str = " ORDER BY project_code, env_code, module_code, config_key";

/// SQLite store.
pub struct SqliteStore {
    conn: Connection,
    delete: DeletePolicy,
}

impl SqliteStore {
    /// Open (creating if needed) the database at `path`.
    ///
    /// Parent directories are created and the schema is applied.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the database cannot be opened or
    /// bootstrapped, or an I/O error if the directory cannot be created.
    pub fn open(path: &Path, options: &StoreOptions) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let existed = path.exists();
        debug!(path = %path.display(), existed, "opening store");

        let conn = Connection::open(path)
            .map_err(|e| StoreError::unavailable(format!("open {}", path.display()), e))?;
        conn.busy_timeout(options.busy_timeout)
            .map_err(|e| StoreError::unavailable("set busy timeout", e))?;
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            ",
        )
        .map_err(|e| StoreError::unavailable("apply pragmas", e))?;

        let store = Self::bootstrap(conn, options)?;
        if !existed {
            info!(path = %path.display(), "database created");
        }
        Ok(store)
    }

    /// Open a private in-memory database.
    pub fn open_in_memory(options: &StoreOptions) -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StoreError::unavailable("open in-memory database", e))?;
        Self::bootstrap(conn, options)
    }

    fn bootstrap(conn: Connection, options: &StoreOptions) -> Result<Self> {
        conn.execute_batch(SCHEMA)
            .map_err(|e| StoreError::unavailable("apply schema", e))?;
        Ok(Self {
            conn,
            delete: options.delete,
        })
    }

    /// Delete policy in effect.
    pub fn delete_policy(&self) -> DeletePolicy {
        self.delete
    }

    fn begin(&mut self, what: &str) -> Result<Transaction<'_>> {
        self.conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| StoreError::unavailable(format!("begin {what}"), e).into())
    }

    fn query_entries(&self, sql: &str, values: &[&str]) -> Result<Vec<ConfigEntry>> {
        debug!(sql, ?values, "query");
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params_from_iter(values.iter()), map_entry)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    fn query_strings(&self, sql: &str, values: &[&str]) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params_from_iter(values.iter()), |row| row.get(0))?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}

/// Append `AND column = ?` for each constrained dimension, collecting values.
fn push_scope<'a>(
    sql: &mut String,
    values: &mut Vec<&'a str>,
    filters: [(&'static str, Option<&'a str>); 3],
) {
    for (column, value) in filters {
        if let Some(value) = value {
            sql.push_str(" AND ");
            sql.push_str(column);
            sql.push_str(" = ?");
            values.push(value);
        }
    }
}

fn scope_filters(scope: &Scope) -> [(&'static str, Option<&str>); 3] {
    [
        ("project_code", scope.project_filter()),
        ("env_code", scope.environment_filter()),
        ("module_code", scope.module_filter()),
    ]
}

fn column(field: LookupField) -> &'static str {
    match field {
        LookupField::Key => "config_key",
        LookupField::Alias => "config_alias",
        LookupField::AutoAlias => "auto_alias",
    }
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_time(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn map_entry(row: &Row<'_>) -> rusqlite::Result<ConfigEntry> {
    Ok(ConfigEntry {
        id: row.get(0)?,
        scope: Scope::new(
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
        ),
        key: row.get(4)?,
        value: row.get(5)?,
        alias: row.get(6)?,
        auto_alias: row.get(7)?,
        config_type: row.get(8)?,
        encrypted: row.get(9)?,
        deleted: row.get(10)?,
        description: row.get(11)?,
        sort_order: row.get(12)?,
        created: parse_time(row, 13)?,
        updated: parse_time(row, 14)?,
    })
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == ErrorCode::ConstraintViolation
                && e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

fn upsert_inner(tx: &Transaction<'_>, entry: &NewEntry) -> Result<Upsert> {
    let scope = &entry.scope;
    let existing: Option<EntryId> = tx
        .query_row(
            "SELECT id FROM config_master
             WHERE project_code = ?1 AND env_code = ?2 AND module_code = ?3
               AND config_key = ?4 AND is_deleted = 0",
            params![scope.project, scope.environment, scope.module, entry.key],
            |row| row.get(0),
        )
        .optional()?;

    let ts = now();
    match existing {
        Some(id) => {
            tx.execute(
                "UPDATE config_master
                 SET config_value = ?2, config_alias = ?3, auto_alias = ?4, config_type = ?5,
                     is_encrypted = ?6, description = ?7, sort_order = ?8, updated_time = ?9
                 WHERE id = ?1",
                params![
                    id,
                    entry.value,
                    entry.alias,
                    entry.auto_alias,
                    entry.config_type,
                    entry.encrypted,
                    entry.description,
                    entry.sort_order,
                    ts,
                ],
            )?;
            Ok(Upsert::Updated(id))
        }
        None => {
            tx.execute(
                "INSERT INTO config_master (
                    project_code, env_code, module_code, config_key, config_value,
                    config_alias, auto_alias, config_type, is_encrypted, is_deleted,
                    description, sort_order, created_time, updated_time
                 ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, 0, ?10, ?11, ?12, ?12)",
                params![
                    scope.project,
                    scope.environment,
                    scope.module,
                    entry.key,
                    entry.value,
                    entry.alias,
                    entry.auto_alias,
                    entry.config_type,
                    entry.encrypted,
                    entry.description,
                    entry.sort_order,
                    ts,
                ],
            )
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StoreError::DuplicateKey {
                        scope: scope.clone(),
                        key: entry.key.clone(),
                    }
                } else {
                    StoreError::Query(e)
                }
            })?;
            Ok(Upsert::Created(tx.last_insert_rowid()))
        }
    }
}

impl Store for SqliteStore {
    fn upsert(&mut self, entry: &NewEntry) -> Result<Upsert> {
        let tx = self.begin("upsert")?;

        match upsert_inner(&tx, entry) {
            Ok(outcome) => {
                tx.commit()
                    .map_err(|e| StoreError::unavailable("commit upsert", e))?;
                info!(
                    key = %entry.key,
                    scope = %entry.scope,
                    created = outcome.is_created(),
                    "upserted entry"
                );
                Ok(outcome)
            }
            Err(e) => {
                let _ = tx.rollback();
                Err(e)
            }
        }
    }

    fn find(&self, scope: &Scope, field: LookupField, value: &str) -> Result<Vec<ConfigEntry>> {
        let mut sql = format!(
            "SELECT {COLUMNS} FROM config_master WHERE is_deleted = 0 AND {} = ?",
            column(field)
        );
        let mut values = vec![value];
        push_scope(&mut sql, &mut values, scope_filters(scope));
        sql.push_str(ORDER);
        self.query_entries(&sql, &values)
    }

    fn get(&self, id: EntryId) -> Result<Option<ConfigEntry>> {
        let sql = format!("SELECT {COLUMNS} FROM config_master WHERE id = ?1");
        Ok(self
            .conn
            .query_row(&sql, params![id], map_entry)
            .optional()?)
    }

    fn delete(&mut self, id: EntryId) -> Result<usize> {
        let policy = self.delete;
        let tx = self.begin("delete")?;

        let result = match policy {
            DeletePolicy::Soft => tx.execute(
                "UPDATE config_master SET is_deleted = 1, updated_time = ?2
                 WHERE id = ?1 AND is_deleted = 0",
                params![id, now()],
            ),
            DeletePolicy::Hard => tx.execute(
                "DELETE FROM config_master WHERE id = ?1 AND is_deleted = 0",
                params![id],
            ),
        };

        match result {
            Ok(affected) => {
                tx.commit()
                    .map_err(|e| StoreError::unavailable("commit delete", e))?;
                info!(id, affected, ?policy, "deleted entry");
                Ok(affected)
            }
            Err(e) => {
                let _ = tx.rollback();
                Err(e.into())
            }
        }
    }

    fn list(&self, scope: &Scope) -> Result<Vec<ConfigEntry>> {
        let mut sql = format!("SELECT {COLUMNS} FROM config_master WHERE is_deleted = 0");
        let mut values = Vec::new();
        push_scope(&mut sql, &mut values, scope_filters(scope));
        sql.push_str(ORDER);
        self.query_entries(&sql, &values)
    }

    fn distinct_projects(&self) -> Result<Vec<String>> {
        self.query_strings(
            "SELECT DISTINCT project_code FROM config_master WHERE is_deleted = 0 ORDER BY 1",
            &[],
        )
    }

    fn distinct_environments(&self, scope: &Scope) -> Result<Vec<String>> {
        let mut sql = String::from("SELECT DISTINCT env_code FROM config_master WHERE is_deleted = 0");
        let mut values = Vec::new();
        let [project, _, _] = scope_filters(scope);
        push_scope(&mut sql, &mut values, [project, ("env_code", None), ("module_code", None)]);
        sql.push_str(" ORDER BY 1");
        self.query_strings(&sql, &values)
    }

    fn distinct_modules(&self, scope: &Scope) -> Result<Vec<String>> {
        let mut sql =
            String::from("SELECT DISTINCT module_code FROM config_master WHERE is_deleted = 0");
        let mut values = Vec::new();
        let [project, environment, _] = scope_filters(scope);
        push_scope(&mut sql, &mut values, [project, environment, ("module_code", None)]);
        sql.push_str(" ORDER BY 1");
        self.query_strings(&sql, &values)
    }
}
