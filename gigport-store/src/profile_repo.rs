use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use gigport_core::{
    AuthRecord, BoxError, NewUser, ProfileRecord, ProfileRepository, ProfileType, ProfileUpdate,
};

pub struct PgProfileRepository {
    pub pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch(&self, user_id: Uuid) -> Result<Option<ProfileRecord>, BoxError> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            "{PROFILE_SELECT} WHERE u.id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(ProfileRow::into_record).transpose()
    }
}

const PROFILE_SELECT: &str = "SELECT u.id AS user_id, u.username, u.first_name, u.last_name, u.email, u.is_staff,
        p.type AS profile_type, p.tel, p.location, p.description, p.file,
        p.working_hours, p.uploaded_at, p.created_at
 FROM users u
 JOIN profiles p ON p.user_id = u.id";

#[derive(sqlx::FromRow)]
struct ProfileRow {
    user_id: Uuid,
    username: String,
    first_name: String,
    last_name: String,
    email: String,
    is_staff: bool,
    profile_type: String,
    tel: String,
    location: String,
    description: String,
    file: Option<String>,
    working_hours: String,
    uploaded_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl ProfileRow {
    fn into_record(self) -> Result<ProfileRecord, BoxError> {
        Ok(ProfileRecord {
            user_id: self.user_id,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            profile_type: self.profile_type.parse().map_err(BoxError::from)?,
            tel: self.tel,
            location: self.location,
            description: self.description,
            file: self.file,
            working_hours: self.working_hours,
            uploaded_at: self.uploaded_at,
            created_at: self.created_at,
            is_staff: self.is_staff,
        })
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    async fn create_user(&self, user: &NewUser) -> Result<ProfileRecord, BoxError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO users (id, username, email, password_hash) VALUES ($1, $2, $3, $4)",
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .execute(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO profiles (user_id, type) VALUES ($1, $2)")
            .bind(user.id)
            .bind(user.profile_type.as_str())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        self.fetch(user.id)
            .await?
            .ok_or_else(|| BoxError::from("profile vanished right after insert"))
    }

    async fn find_auth_by_username(&self, username: &str) -> Result<Option<AuthRecord>, BoxError> {
        #[derive(sqlx::FromRow)]
        struct AuthRow {
            user_id: Uuid,
            username: String,
            email: String,
            password_hash: String,
            is_staff: bool,
        }

        let row = sqlx::query_as::<_, AuthRow>(
            "SELECT id AS user_id, username, email, password_hash, is_staff
             FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| AuthRecord {
            user_id: r.user_id,
            username: r.username,
            email: r.email,
            password_hash: r.password_hash,
            is_staff: r.is_staff,
        }))
    }

    async fn username_or_email_exists(&self, username: &str, email: &str) -> Result<bool, BoxError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM users WHERE username = $1 OR email = $2)",
        )
        .bind(username)
        .bind(email)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn get(&self, user_id: Uuid) -> Result<Option<ProfileRecord>, BoxError> {
        self.fetch(user_id).await
    }

    async fn update(&self, user_id: Uuid, update: &ProfileUpdate) -> Result<Option<ProfileRecord>, BoxError> {
        let mut tx = self.pool.begin().await?;

        let users = sqlx::query(
            "UPDATE users
             SET username = COALESCE($2, username),
                 first_name = COALESCE($3, first_name),
                 last_name = COALESCE($4, last_name),
                 email = COALESCE($5, email)
             WHERE id = $1",
        )
        .bind(user_id)
        .bind(&update.username)
        .bind(&update.first_name)
        .bind(&update.last_name)
        .bind(&update.email)
        .execute(&mut *tx)
        .await?;

        if users.rows_affected() == 0 {
            return Ok(None);
        }

        // uploaded_at refreshes only when the stored locator actually changes.
        sqlx::query(
            "UPDATE profiles
             SET tel = COALESCE($2, tel),
                 location = COALESCE($3, location),
                 description = COALESCE($4, description),
                 working_hours = COALESCE($5, working_hours),
                 uploaded_at = CASE
                     WHEN $6::text IS NOT NULL AND $6 IS DISTINCT FROM file THEN now()
                     ELSE uploaded_at
                 END,
                 file = COALESCE($6, file)
             WHERE user_id = $1",
        )
        .bind(user_id)
        .bind(&update.tel)
        .bind(&update.location)
        .bind(&update.description)
        .bind(&update.working_hours)
        .bind(&update.file)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        self.fetch(user_id).await
    }

    async fn list_by_type(&self, profile_type: ProfileType) -> Result<Vec<ProfileRecord>, BoxError> {
        let rows = sqlx::query_as::<_, ProfileRow>(&format!(
            "{PROFILE_SELECT} WHERE p.type = $1 ORDER BY p.created_at"
        ))
        .bind(profile_type.as_str())
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(ProfileRow::into_record).collect()
    }

    async fn user_exists(&self, user_id: Uuid) -> Result<bool, BoxError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn count_by_type(&self, profile_type: ProfileType) -> Result<i64, BoxError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM profiles WHERE type = $1")
            .bind(profile_type.as_str())
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
