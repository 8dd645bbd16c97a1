mod inmemory;
mod postgres;

use huddle_domain::Member;
pub use inmemory::InMemoryMemberRepo;
pub use postgres::PostgresMemberRepo;

#[async_trait::async_trait]
pub trait IMemberRepo: Send + Sync {
    async fn insert(&self, member: &Member) -> anyhow::Result<()>;
    async fn find_all(&self) -> anyhow::Result<Vec<Member>>;
}

#[cfg(test)]
mod tests {
    use crate::HuddleContext;
    use huddle_domain::Member;

    #[tokio::test]
    async fn insert_and_list() {
        let ctx = HuddleContext::create_inmemory();

        assert!(ctx.repos.members.find_all().await.unwrap().is_empty());

        let member = Member::new("Ola Nordmann".into(), Some("+4790000000".into()), None);
        ctx.repos
            .members
            .insert(&member)
            .await
            .expect("To insert member");

        let all = ctx.repos.members.find_all().await.unwrap();
        assert_eq!(all, vec![member]);
    }

    #[tokio::test]
    async fn lists_members_in_insertion_order() {
        let ctx = HuddleContext::create_inmemory();

        let first = Member::new("First".into(), None, Some("first".into()));
        let second = Member::new("Second".into(), None, None);
        ctx.repos.members.insert(&first).await.unwrap();
        ctx.repos.members.insert(&second).await.unwrap();

        let all = ctx.repos.members.find_all().await.unwrap();
        assert_eq!(all, vec![first, second]);
    }
}
