mod config;

pub use self::config::current;
pub use self::config::Config;
pub use self::config::CONFIG;
