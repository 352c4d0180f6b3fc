// src/constants.rs

pub const USERNAME_REGEX: &str = r"^[a-zA-Z0-9]{1,32}$";

/// Volume letters exposed under the virtual root, in listing order.
pub const DRIVE_LETTERS: [char; 8] = ['C', 'D', 'E', 'F', 'G', 'X', 'Y', 'Z'];

/// Upper bound for a single control-channel read.
pub const MAX_COMMAND_LENGTH: u64 = 1024;
/// Chunk size used on the data channel and for file I/O.
pub const DATA_BUFFER_SIZE: usize = 64 * 1024;

pub const DEFAULT_CONFIG_PATH: &str = "/etc/volftpd.conf";

pub const LISTING_OWNER: &str = "XBOX";
pub const LISTING_GROUP: &str = "XBOX";
pub const LISTING_PERMISSIONS: &str = "rwxr-xr-x";
pub const VOLUME_TIMESTAMP: &str = "2020-03-02 10:41";

pub const REPLY_PLEASE_LOGIN: &str = "220 Please enter your login name now.\r\n";
pub const REPLY_PASSWORD_REQUIRED: &str = "331 Password required.\r\n";
pub const REPLY_USER_LOGGED_IN: &str = "230 User logged in, proceed.\r\n";
pub const REPLY_LOGIN_FAILED: &str = "530 login authentication failed.\r\n";
pub const REPLY_NOT_LOGGED_IN: &str = "530 Not logged in.\r\n";
pub const REPLY_UNIX_TYPE_L8: &str = "215 UNIX type: L8\r\n";
pub const REPLY_PORT_COMMAND_OK: &str = "200 Port command ok.\r\n";
pub const REPLY_SOCKET_CREATION_FAILED: &str = "425 Socket creation failed.\r\n";
pub const REPLY_NO_DATA_CONNECTION: &str = "425 No data connection.\r\n";
pub const REPLY_UNKNOWN_ADDRESS_FAMILY: &str = "502 Unknown address family; use (1,2)\r\n";
pub const REPLY_SYNTAX_ERROR: &str = "501 Syntax error in parameters or arguments.\r\n";
pub const REPLY_OPENING_DATA_CONNECTION_FOR_LS: &str =
    "150 Opening ASCII data connection for ls\r\n";
pub const REPLY_TRANSFER_FINISHED: &str =
    "226 Data transfer finished successfully. Data connection closed.\r\n";
pub const REPLY_TRANSFER_ABORTED: &str = "426 Connection closed; transfer aborted.\r\n";
pub const REPLY_LOCAL_ERROR: &str = "451 Requested action aborted. Local error in processing.\r\n";
pub const REPLY_PARAMETER_NOT_IMPLEMENTED: &str = "504 Command parameter not implemented.\r\n";
pub const REPLY_FILE_ACTION_OK: &str = "250 Requested file action ok.\r\n";
pub const REPLY_ACTION_NOT_TAKEN: &str = "553 Requested action not taken.\r\n";
pub const REPLY_DIRECTORY_NOT_FOUND: &str = "550 Failed to change directory.\r\n";
pub const REPLY_PENDING_FURTHER_INFORMATION: &str =
    "350 File action pending further information.\r\n";
pub const REPLY_BAD_SEQUENCE: &str = "503 Bad sequence of commands.\r\n";
pub const REPLY_IDLE_TIMEOUT: &str = "421 Idle timeout, closing control connection.\r\n";
pub const REPLY_LINE_TOO_LONG: &str = "500 Line too long.\r\n";
