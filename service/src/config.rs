use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// The host interface to listen for incoming connections
    #[arg(short, long, env, default_value = "0.0.0.0")]
    pub interface: Option<String>,

    /// The host TCP port to listen for incoming connections
    #[arg(short, long, env, default_value_t = 3000)]
    pub port: u16,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new([
            "OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE",
            "off", "error", "warn", "info", "debug", "trace"
        ])
            .map(|s| s.parse::<LevelFilter>().unwrap_or(LevelFilter::Info)),
        )]
    pub log_level_filter: LevelFilter,

    /// Directory whose files are served for any path without a dedicated route
    #[arg(long, env, default_value = "public")]
    static_dir: PathBuf,

    /// The HTML page served at `/`
    #[arg(long, env, default_value = "public/chat.html")]
    chat_page: PathBuf,

    /// Seconds between keep-alive comments on idle SSE connections. These writes are
    /// what lets the server notice a client that went away without closing.
    #[arg(long, env, default_value_t = 15, value_parser = clap::value_parser!(u64).range(1..))]
    pub sse_keep_alive_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    /// Address to bind the listener to, `interface:port`.
    pub fn listen_addr(&self) -> String {
        format!(
            "{}:{}",
            self.interface.as_deref().unwrap_or("0.0.0.0"),
            self.port
        )
    }

    pub fn static_dir(&self) -> &PathBuf {
        &self.static_dir
    }

    pub fn chat_page(&self) -> &PathBuf {
        &self.chat_page
    }

    pub fn set_static_dir(mut self, static_dir: PathBuf) -> Self {
        self.static_dir = static_dir;
        self
    }

    pub fn set_chat_page(mut self, chat_page: PathBuf) -> Self {
        self.chat_page = chat_page;
        self
    }
}
