// Protocol engine plumbing
pub mod context;
pub mod dispatcher;
pub mod ftpcommand;
pub mod handlers;
pub mod utils;

// Here's the list of the FTP commands implemented
pub mod cdup;
pub mod cwd;
pub mod dele;
pub mod list;
pub mod mkd;
pub mod pass;
pub mod pwd;
pub mod retr;
pub mod rmd;
pub mod rnfr;
pub mod rnto;
pub mod stor;
pub mod syst;
pub mod type_;
pub mod user;
