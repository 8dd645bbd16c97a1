use super::IMemberRepo;
use huddle_domain::Member;
use std::sync::Mutex;

pub struct InMemoryMemberRepo {
    members: Mutex<Vec<Member>>,
}

impl InMemoryMemberRepo {
    pub fn new() -> Self {
        Self {
            members: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IMemberRepo for InMemoryMemberRepo {
    async fn insert(&self, member: &Member) -> anyhow::Result<()> {
        let mut members = self.members.lock().unwrap();
        members.push(member.clone());
        Ok(())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Member>> {
        let members = self.members.lock().unwrap();
        Ok(members.clone())
    }
}
