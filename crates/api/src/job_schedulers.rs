use crate::reminder::send_reminders::SendRemindersUseCase;
use crate::shared::usecase::execute;
use actix_web::rt::time::sleep;
use chrono::{Local, NaiveDateTime};
use huddle_infra::HuddleContext;

/// Time from `now` until the next occurrence of `send_hour` o'clock,
/// rolling over to tomorrow when today's send time has already passed.
/// Always strictly positive.
pub fn time_until_next_send(now: NaiveDateTime, send_hour: u32) -> chrono::Duration {
    let todays_send = now
        .date()
        .and_hms_opt(send_hour, 0, 0)
        .expect("Send hour to be a valid hour of the day");
    let next_send = if todays_send > now {
        todays_send
    } else {
        todays_send + chrono::Duration::days(1)
    };

    next_send - now
}

pub fn start_send_reminders_job(ctx: HuddleContext) {
    actix_web::rt::spawn(async move {
        loop {
            let now = ctx.sys.now().with_timezone(&Local).naive_local();
            let until_next_run = time_until_next_send(now, ctx.config.send_reminders_hour)
                .to_std()
                .expect("Next send time to be in the future");
            sleep(until_next_run).await;

            // The run gets its own task so that a slow batch can never
            // delay the schedule.
            let context = ctx.clone();
            actix_web::rt::spawn(async move {
                let _ = execute(SendRemindersUseCase, &context).await;
            });
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 3, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn next_send_works() {
        assert_eq!(time_until_next_send(at(7, 59, 0), 8).num_seconds(), 60);
        assert_eq!(time_until_next_send(at(7, 59, 59), 8).num_seconds(), 1);
        assert_eq!(
            time_until_next_send(at(8, 0, 0), 8).num_seconds(),
            24 * 3600
        );
        assert_eq!(
            time_until_next_send(at(8, 0, 1), 8).num_seconds(),
            24 * 3600 - 1
        );
        assert_eq!(
            time_until_next_send(at(20, 0, 0), 8).num_seconds(),
            12 * 3600
        );
        assert_eq!(time_until_next_send(at(0, 0, 0), 8).num_seconds(), 8 * 3600);
    }

    #[test]
    fn next_send_rolls_over_month_boundaries() {
        let now = NaiveDate::from_ymd_opt(2021, 2, 28)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        assert_eq!(time_until_next_send(now, 8).num_seconds(), 23 * 3600);
    }
}
