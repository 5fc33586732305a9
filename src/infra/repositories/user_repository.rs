//! User repository implementation.
//!
//! Every write runs in its own transaction: it either commits in full or
//! leaves the table untouched.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, EntityTrait, NotSet, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; fails with `Conflict` if name or email is taken
    async fn create(&self, name: String, email: String) -> AppResult<User>;

    /// List all users in insertion order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Replace name and email of an existing user
    async fn update(&self, id: i32, name: String, email: String) -> AppResult<User>;

    /// Permanently delete user by ID
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// SeaORM-backed implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Commit on success, roll back on error.
    async fn finish<T>(txn: DatabaseTransaction, result: AppResult<T>) -> AppResult<T> {
        match result {
            Ok(value) => {
                txn.commit().await?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }

    /// Reject a write whose name or email already belongs to another user.
    async fn ensure_unique<C: ConnectionTrait>(
        conn: &C,
        name: &str,
        email: &str,
        except: Option<i32>,
    ) -> AppResult<()> {
        let mut query = UserEntity::find().filter(
            Condition::any()
                .add(user::Column::Name.eq(name))
                .add(user::Column::Email.eq(email)),
        );
        if let Some(id) = except {
            query = query.filter(user::Column::Id.ne(id));
        }

        match query.one(conn).await? {
            Some(existing) if existing.name == name => {
                Err(AppError::conflict(format!("User with name '{}'", name)))
            }
            Some(_) => Err(AppError::conflict(format!("User with email '{}'", email))),
            None => Ok(()),
        }
    }

    async fn insert_in(txn: &DatabaseTransaction, name: String, email: String) -> AppResult<User> {
        Self::ensure_unique(txn, &name, &email, None).await?;

        let active_model = ActiveModel {
            id: NotSet,
            name: Set(name),
            email: Set(email),
        };

        let model = active_model.insert(txn).await?;
        Ok(User::from(model))
    }

    async fn update_in(
        txn: &DatabaseTransaction,
        id: i32,
        name: String,
        email: String,
    ) -> AppResult<User> {
        let existing = UserEntity::find_by_id(id)
            .one(txn)
            .await?
            .ok_or_not_found()?;

        Self::ensure_unique(txn, &name, &email, Some(id)).await?;

        let mut active: ActiveModel = existing.into();
        active.name = Set(name);
        active.email = Set(email);

        let model = active.update(txn).await?;
        Ok(User::from(model))
    }

    async fn delete_in(txn: &DatabaseTransaction, id: i32) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id).exec(txn).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, name: String, email: String) -> AppResult<User> {
        let txn = self.db.begin().await?;
        let result = Self::insert_in(&txn, name, email).await;
        Self::finish(txn, result).await
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id).one(&self.db).await?;

        Ok(result.map(User::from))
    }

    async fn update(&self, id: i32, name: String, email: String) -> AppResult<User> {
        let txn = self.db.begin().await?;
        let result = Self::update_in(&txn, id, name, email).await;
        Self::finish(txn, result).await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let txn = self.db.begin().await?;
        let result = Self::delete_in(&txn, id).await;
        Self::finish(txn, result).await
    }
}
