use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Local wall-clock hour at which the daily reminder broadcast runs
    pub send_reminders_hour: u32,
}

impl Config {
    pub fn new() -> Self {
        let default_port = "3000";
        let port = std::env::var("PORT").unwrap_or(default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };

        let default_send_hour = "8";
        let send_hour = std::env::var("REMINDERS_SEND_HOUR").unwrap_or(default_send_hour.into());
        let send_reminders_hour = match send_hour.parse::<u32>() {
            Ok(hour) if hour < 24 => hour,
            _ => {
                warn!(
                    "The given REMINDERS_SEND_HOUR: {} is not a valid hour of the day, falling back to the default: {}.",
                    send_hour, default_send_hour
                );
                default_send_hour.parse::<u32>().unwrap()
            }
        };

        Self {
            port,
            send_reminders_hour,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
