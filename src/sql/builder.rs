//! Builds parameterized UPDATE statements from an ordered column/value list.

use crate::error::AppError;
use crate::sql::params::SqlArg;
use uuid::Uuid;

/// Statement text plus its positional parameters, ready for the store to
/// bind and execute.
#[derive(Debug)]
pub struct UpdateQuery {
    pub sql: String,
    pub params: Vec<SqlArg>,
}

/// Accumulates `column = $n` pairs in insertion order and folds them into a
/// single UPDATE. Callers push only the columns a request actually carries,
/// so full and partial updates share one statement path.
#[derive(Debug)]
pub struct UpdateBuilder {
    table: &'static str,
    pk_column: &'static str,
    columns: Vec<&'static str>,
    params: Vec<SqlArg>,
}

impl UpdateBuilder {
    pub fn new(table: &'static str, pk_column: &'static str) -> Self {
        UpdateBuilder {
            table,
            pk_column,
            columns: Vec::new(),
            params: Vec::new(),
        }
    }

    pub fn set(&mut self, column: &'static str, value: impl Into<SqlArg>) -> &mut Self {
        self.columns.push(column);
        self.params.push(value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Fold into `UPDATE <table> SET c1 = $1, ..., updated_at = NOW()
    /// WHERE <pk> = $n`, with the primary key taking the final parameter
    /// slot. A builder with zero columns is refused rather than emitting a
    /// no-op statement.
    pub fn build(self, pk: Uuid) -> Result<UpdateQuery, AppError> {
        if self.columns.is_empty() {
            return Err(AppError::NothingToUpdate);
        }
        let mut sets: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| format!("{} = ${}", col, i + 1))
            .collect();
        sets.push("updated_at = NOW()".to_string());
        let mut params = self.params;
        params.push(SqlArg::Uuid(pk));
        let sql = format!(
            "UPDATE {} SET {} WHERE {} = ${}",
            self.table,
            sets.join(", "),
            self.pk_column,
            params.len()
        );
        Ok(UpdateQuery { sql, params })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_column_numbers_pk_second() {
        let mut b = UpdateBuilder::new("van", "van_id");
        b.set("price", 500i64);
        let id = Uuid::new_v4();
        let q = b.build(id).unwrap();
        assert_eq!(
            q.sql,
            "UPDATE van SET price = $1, updated_at = NOW() WHERE van_id = $2"
        );
        assert_eq!(q.params, vec![SqlArg::I64(500), SqlArg::Uuid(id)]);
    }

    #[test]
    fn columns_keep_insertion_order() {
        let mut b = UpdateBuilder::new("engine", "id");
        b.set("displacement_in_cc", 2000i64)
            .set("no_of_cylinders", 4i32)
            .set("material", "iron");
        let id = Uuid::new_v4();
        let q = b.build(id).unwrap();
        assert_eq!(
            q.sql,
            "UPDATE engine SET displacement_in_cc = $1, no_of_cylinders = $2, \
             material = $3, updated_at = NOW() WHERE id = $4"
        );
        assert_eq!(q.params.len(), 4);
        assert_eq!(q.params[3], SqlArg::Uuid(id));
    }

    #[test]
    fn empty_set_is_refused() {
        let b = UpdateBuilder::new("engine", "id");
        assert!(b.is_empty());
        match b.build(Uuid::new_v4()) {
            Err(AppError::NothingToUpdate) => {}
            other => panic!("expected NothingToUpdate, got {:?}", other.map(|q| q.sql)),
        }
    }

    #[test]
    fn parameter_numbering_is_dense() {
        let mut b = UpdateBuilder::new("van", "van_id");
        b.set("name", "Traveller").set("price", 900000i64);
        let q = b.build(Uuid::new_v4()).unwrap();
        assert!(q.sql.contains("name = $1"));
        assert!(q.sql.contains("price = $2"));
        assert!(q.sql.contains("WHERE van_id = $3"));
    }
}
