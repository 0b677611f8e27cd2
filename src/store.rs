use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set, SqlErr,
    sea_query::{Expr, Func, SimpleExpr},
};

use crate::{
    entities::film,
    error::{AppError, AppResult},
    models::{ListFilmsQuery, NewFilm},
};

/// All database access for film rows. Every method scopes its query to one
/// tenant's email.
#[derive(Clone)]
pub struct FilmStore {
    db: DatabaseConnection,
}

impl FilmStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, email: &str, query: &ListFilmsQuery) -> AppResult<Vec<film::Model>> {
        let mut select = film::Entity::find().filter(film::Column::Email.eq(email));

        if let Some(genre) = non_empty(&query.genre) {
            select = select.filter(contains_ci(film::Column::Genre, genre));
        }
        if let Some(title) = non_empty(&query.title) {
            select = select.filter(contains_ci(film::Column::Title, title));
        }
        if let Some(is_watched) = non_empty(&query.is_watched) {
            // Only the literal string "true" filters to watched films; any
            // other non-empty value filters to unwatched.
            select = select.filter(film::Column::IsWatched.eq(is_watched == "true"));
        }

        Ok(select.all(&self.db).await?)
    }

    pub async fn count(&self, email: &str) -> AppResult<u64> {
        Ok(film::Entity::find()
            .filter(film::Column::Email.eq(email))
            .count(&self.db)
            .await?)
    }

    pub async fn insert(&self, email: &str, new_film: NewFilm) -> AppResult<film::Model> {
        let model = film::ActiveModel {
            id: Default::default(),
            email: Set(email.to_string()),
            title: Set(new_film.title),
            genre: Set(new_film.genre),
            release_year: Set(new_film.release_year),
            is_watched: Set(new_film.is_watched),
        };

        match model.insert(&self.db).await {
            Ok(created) => Ok(created),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(AppError::DuplicateFilm),
                _ => Err(err.into()),
            },
        }
    }

    /// Deletes at most one row. Matching nothing is not an error.
    pub async fn delete_by_id(&self, email: &str, id: i32) -> AppResult<u64> {
        let result = film::Entity::delete_many()
            .filter(film::Column::Id.eq(id))
            .filter(film::Column::Email.eq(email))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn delete_all(&self, email: &str) -> AppResult<u64> {
        let result = film::Entity::delete_many()
            .filter(film::Column::Email.eq(email))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected)
    }
}

/// An empty query parameter counts as absent and applies no filter.
fn non_empty(param: &Option<String>) -> Option<&str> {
    param.as_deref().filter(|value| !value.is_empty())
}

/// Case-insensitive substring match, spelled out with LOWER so the semantics
/// do not depend on the backend's LIKE collation.
fn contains_ci(column: film::Column, needle: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(column))).like(format!("%{}%", needle.to_lowercase()))
}
