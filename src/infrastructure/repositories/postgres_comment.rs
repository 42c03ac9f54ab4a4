// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::comment::{
    Comment, CommentAuthor, CommentContent, CommentFilter, CommentId, CommentRepository,
    NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COMMENT_COLUMNS: &str = "id, article_id, author, content, created_date, approved";

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn apply_filter<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a CommentFilter) {
        let mut has_where = false;
        if let Some(approved) = filter.approved {
            builder.push(" WHERE approved = ");
            builder.push_bind(approved);
            has_where = true;
        }

        if let Some((start, end)) = filter.created_between {
            builder.push(if has_where { " AND " } else { " WHERE " });
            builder.push("created_date >= ");
            builder.push_bind(start);
            builder.push(" AND created_date < ");
            builder.push_bind(end);
        }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    author: String,
    content: String,
    created_date: DateTime<Utc>,
    approved: bool,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            author: CommentAuthor::new(row.author)?,
            content: CommentContent::new(row.content)?,
            created_date: row.created_date,
            approved: row.approved,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let sql = format!(
            "INSERT INTO comments (article_id, author, content, created_date, approved)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COMMENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(i64::from(comment.article_id))
            .bind(comment.author.as_str())
            .bind(comment.content.as_str())
            .bind(comment.created_date)
            .bind(comment.approved)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let sql = format!("SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1");
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn set_approved(&self, id: CommentId, approved: bool) -> DomainResult<Comment> {
        let sql = format!(
            "UPDATE comments SET approved = $2 WHERE id = $1 RETURNING {COMMENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(i64::from(id))
            .bind(approved)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;

        Comment::try_from(row)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }

    async fn list_approved_for_article(
        &self,
        article_id: ArticleId,
    ) -> DomainResult<Vec<Comment>> {
        let sql = format!(
            "SELECT {COMMENT_COLUMNS} FROM comments
             WHERE article_id = $1 AND approved = TRUE
             ORDER BY created_date ASC, id ASC"
        );
        let rows = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(i64::from(article_id))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    async fn count(&self, filter: &CommentFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM comments");
        Self::apply_filter(&mut builder, filter);

        let total: i64 = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(total).unwrap_or(0))
    }

    async fn list_page(
        &self,
        filter: &CommentFilter,
        offset: u64,
        limit: u32,
    ) -> DomainResult<Vec<Comment>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COMMENT_COLUMNS} FROM comments"));
        Self::apply_filter(&mut builder, filter);
        builder.push(" ORDER BY created_date DESC, id DESC LIMIT ");
        builder.push_bind(i64::from(limit));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(offset).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<CommentRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }
}
