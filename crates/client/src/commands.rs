use anyhow::bail;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Watch,
    EnableNotifications,
    TestNotification,
    Offline,
}

pub const USAGE: &str =
    "usage: signal-watcher [watch | enable-notifications | test-notification | offline]";

impl Command {
    pub fn parse<I>(mut args: I) -> anyhow::Result<Self>
    where
        I: Iterator<Item = String>,
    {
        let command = match args.next().as_deref() {
            None | Some("watch") => Command::Watch,
            Some("enable-notifications") => Command::EnableNotifications,
            Some("test-notification") => Command::TestNotification,
            Some("offline") => Command::Offline,
            Some(other) => bail!("unknown command {:?}\n{}", other, USAGE),
        };

        if let Some(extra) = args.next() {
            bail!("unexpected argument {:?}\n{}", extra, USAGE);
        }
        Ok(command)
    }
}
