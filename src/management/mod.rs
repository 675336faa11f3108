mod session;
mod settings;

pub use session::FetchSession;
pub use session::Ticket;
pub use settings::SettingsManager;
