use rusqlite::{Params, Row, Statement};

/// Map one SQLite row into a model.
pub trait FromSqliteRow: Sized {
    fn from_row(row: &Row) -> rusqlite::Result<Self>;

    fn query_all<P: Params>(stmt: &mut Statement<'_>, params: P) -> rusqlite::Result<Vec<Self>> {
        stmt.query_map(params, Self::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()
    }
}
