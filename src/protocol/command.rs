#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ping,
    EntrySave,
    EntryCreate,
    ConfigShow,
    Unknown,
}

impl From<&str> for Command {
    fn from(s: &str) -> Self {
        match s {
            "ping" => Command::Ping,
            "entry.save" => Command::EntrySave,
            "entry.create" => Command::EntryCreate,
            "config.show" => Command::ConfigShow,
            _ => Command::Unknown,
        }
    }
}
