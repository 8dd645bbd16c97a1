use super::IMemberRepo;
use huddle_domain::Member;
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresMemberRepo {
    pool: PgPool,
}

impl PostgresMemberRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MemberRaw {
    member_uid: Uuid,
    name: String,
    phone_number: Option<String>,
    slack_username: Option<String>,
}

impl From<MemberRaw> for Member {
    fn from(raw: MemberRaw) -> Self {
        Self {
            id: raw.member_uid.into(),
            name: raw.name,
            phone_number: raw.phone_number,
            slack_username: raw.slack_username,
        }
    }
}

#[async_trait::async_trait]
impl IMemberRepo for PostgresMemberRepo {
    async fn insert(&self, member: &Member) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO members(member_uid, name, phone_number, slack_username)
            VALUES($1, $2, $3, $4)
            "#,
        )
        .bind(member.id.inner_ref())
        .bind(&member.name)
        .bind(&member.phone_number)
        .bind(&member.slack_username)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Member>> {
        let members: Vec<MemberRaw> = sqlx::query_as(
            r#"
            SELECT * FROM members
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(members.into_iter().map(|m| m.into()).collect())
    }
}
