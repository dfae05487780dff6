//! Mapping SeaORM errors onto repository errors.

use sea_orm::{DbErr, SqlErr};

use blog_core::error::RepoError;

pub(crate) fn map_db_error(err: DbErr) -> RepoError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        return RepoError::Constraint(detail);
    }

    match err {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => RepoError::NotFound,
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => {
            let err_str = other.to_string();
            let lowered = err_str.to_lowercase();
            if lowered.contains("duplicate") || lowered.contains("unique") {
                RepoError::Constraint(err_str)
            } else {
                RepoError::Query(err_str)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_messages_become_constraint_errors() {
        let err = DbErr::Custom("UNIQUE constraint failed: posts.title".to_string());
        assert!(matches!(map_db_error(err), RepoError::Constraint(_)));
    }

    #[test]
    fn missing_rows_become_not_found() {
        assert!(matches!(map_db_error(DbErr::RecordNotUpdated), RepoError::NotFound));
    }

    #[test]
    fn other_errors_are_query_errors() {
        let err = DbErr::Custom("syntax error".to_string());
        assert!(matches!(map_db_error(err), RepoError::Query(_)));
    }
}
