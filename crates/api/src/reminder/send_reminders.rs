use crate::shared::usecase::UseCase;
use futures::future::join_all;
use huddle_domain::{ContactChannel, Member};
use huddle_infra::HuddleContext;
use tracing::error;

/// The daily broadcast: sends every still-upcoming reminder to every
/// member over that member's channel.
#[derive(Debug)]
pub struct SendRemindersUseCase;

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendRemindersUseCase {
    type Response = ();
    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &HuddleContext) -> Result<Self::Response, Self::Errors> {
        let now = ctx.sys.now();

        let reminders = ctx
            .repos
            .reminders
            .find_after(now)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        for reminder in reminders {
            // Membership may change while a run is in progress, so the
            // member list is fetched fresh for every reminder.
            let members = ctx
                .repos
                .members
                .find_all()
                .await
                .map_err(|_| UseCaseError::StorageError)?;

            let deliveries = members.iter().filter_map(|member| {
                member
                    .contact()
                    .map(|contact| deliver(ctx, member, contact, &reminder.message))
            });

            join_all(deliveries).await;
        }

        Ok(())
    }
}

/// A single delivery attempt. Failures are logged and never propagated:
/// one unreachable member must not cost the other members their reminder.
async fn deliver(ctx: &HuddleContext, member: &Member, contact: ContactChannel, message: &str) {
    let res = match contact {
        ContactChannel::Sms(phone_number) => ctx.messengers.sms.send(&phone_number, message).await,
        ContactChannel::SlackDM(username) => {
            ctx.messengers.chat.post_message(&username, message).await
        }
    };

    if let Err(e) = res {
        error!(
            "Failed to deliver reminder to member {}: {:?}",
            member.id, e
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::usecase::execute;
    use chrono::{DateTime, Duration, Utc};
    use huddle_domain::Reminder;
    use huddle_infra::{
        HuddleContext, ISys, InMemoryChatService, InMemorySmsService, Messengers, OutboundSms,
    };
    use std::sync::Arc;

    struct StaticTimeSys(DateTime<Utc>);
    impl ISys for StaticTimeSys {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    struct TestApp {
        ctx: HuddleContext,
        sms: Arc<InMemorySmsService>,
        chat: Arc<InMemoryChatService>,
    }

    fn setup() -> TestApp {
        let mut ctx = HuddleContext::create_inmemory();
        let sms = Arc::new(InMemorySmsService::new());
        let chat = Arc::new(InMemoryChatService::new());
        ctx.messengers = Messengers {
            sms: sms.clone(),
            chat: chat.clone(),
        };
        TestApp { ctx, sms, chat }
    }

    async fn insert_member(
        ctx: &HuddleContext,
        name: &str,
        phone: Option<&str>,
        slack: Option<&str>,
    ) {
        let member = Member::new(
            name.into(),
            phone.map(|p| p.to_string()),
            slack.map(|s| s.to_string()),
        );
        ctx.repos.members.insert(&member).await.unwrap();
    }

    async fn insert_reminder(ctx: &HuddleContext, message: &str, time: DateTime<Utc>) {
        let reminder = Reminder::new(message.into(), time);
        ctx.repos.reminders.insert(&reminder).await.unwrap();
    }

    #[actix_web::test]
    async fn broadcasts_upcoming_reminder_over_the_right_channels() {
        let app = setup();
        insert_member(&app.ctx, "A", Some("+15550001"), None).await;
        insert_member(&app.ctx, "B", None, Some("bee")).await;
        insert_member(&app.ctx, "C", None, None).await;
        insert_reminder(&app.ctx, "standup", Utc::now() + Duration::days(1)).await;

        execute(SendRemindersUseCase, &app.ctx).await.unwrap();

        let sent_sms = app.sms.sent.lock().unwrap();
        assert_eq!(
            *sent_sms,
            vec![OutboundSms {
                to: "+15550001".into(),
                body: "standup".into(),
            }]
        );
        let sent_dms = app.chat.sent.lock().unwrap();
        assert_eq!(sent_dms.len(), 1);
        assert_eq!(sent_dms[0].channel, "bee");
        assert_eq!(sent_dms[0].text, "standup");
    }

    #[actix_web::test]
    async fn ignores_reminders_whose_time_has_passed() {
        let app = setup();
        insert_member(&app.ctx, "A", Some("+15550001"), None).await;
        insert_reminder(&app.ctx, "yesterday", Utc::now() - Duration::days(1)).await;

        execute(SendRemindersUseCase, &app.ctx).await.unwrap();

        assert!(app.sms.sent.lock().unwrap().is_empty());
        assert!(app.chat.sent.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn a_reminder_due_exactly_now_is_not_broadcast() {
        let mut app = setup();
        let now = Utc::now();
        app.ctx.sys = Arc::new(StaticTimeSys(now));
        insert_member(&app.ctx, "A", Some("+15550001"), None).await;
        insert_reminder(&app.ctx, "right now", now).await;

        execute(SendRemindersUseCase, &app.ctx).await.unwrap();

        assert!(app.sms.sent.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn prefers_sms_when_member_has_both_contacts() {
        let app = setup();
        insert_member(&app.ctx, "A", Some("+15550001"), Some("alice")).await;
        insert_reminder(&app.ctx, "standup", Utc::now() + Duration::days(1)).await;

        execute(SendRemindersUseCase, &app.ctx).await.unwrap();

        assert_eq!(app.sms.sent.lock().unwrap().len(), 1);
        assert!(app.chat.sent.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn one_failed_delivery_does_not_stop_the_rest() {
        let app = setup();
        insert_member(&app.ctx, "A", Some("+15550001"), None).await;
        insert_member(&app.ctx, "B", Some("+15550002"), None).await;
        insert_member(&app.ctx, "C", None, Some("cee")).await;
        insert_reminder(&app.ctx, "standup", Utc::now() + Duration::days(1)).await;

        app.sms.unreachable.lock().unwrap().push("+15550001".into());

        execute(SendRemindersUseCase, &app.ctx).await.unwrap();

        let sent_sms = app.sms.sent.lock().unwrap();
        assert_eq!(sent_sms.len(), 1);
        assert_eq!(sent_sms[0].to, "+15550002");
        assert_eq!(app.chat.sent.lock().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn broadcasts_every_upcoming_reminder_on_every_run() {
        let app = setup();
        insert_member(&app.ctx, "A", Some("+15550001"), None).await;
        insert_reminder(&app.ctx, "standup", Utc::now() + Duration::days(1)).await;
        insert_reminder(&app.ctx, "retro", Utc::now() + Duration::days(2)).await;

        execute(SendRemindersUseCase, &app.ctx).await.unwrap();
        // Nothing is marked as sent, so the next run broadcasts again
        execute(SendRemindersUseCase, &app.ctx).await.unwrap();

        assert_eq!(app.sms.sent.lock().unwrap().len(), 4);
    }
}
