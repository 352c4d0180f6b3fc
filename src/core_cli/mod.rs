use clap::Parser;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "volftpd", about = "An FTP server exposing host volumes.")]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "")]
    pub config: String,

    /// Listening port, overrides the configuration file
    #[arg(short = 'p', long)]
    pub listen_port: Option<u16>,

    /// Enable verbose mode
    #[arg(short, long)]
    pub verbose: bool,
}
