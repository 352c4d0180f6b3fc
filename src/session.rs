use crate::core_network::connector::DataStream;
use crate::core_path::HostPath;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferMode {
    #[default]
    Binary,
    Ascii,
}

impl TransferMode {
    pub fn name(&self) -> &'static str {
        match self {
            TransferMode::Binary => "IMAGE",
            TransferMode::Ascii => "ASCII",
        }
    }
}

/// Per-connection protocol state.
pub struct Session {
    pub working_directory: String,
    pub is_authenticated: bool,
    pub transfer_mode: TransferMode,
    pub rename_from: Option<HostPath>,
    /// Active-mode data connection opened by PORT/EPRT, consumed by the next
    /// transfer command.
    pub data_stream: Option<DataStream>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            working_directory: String::from("/"),
            is_authenticated: false,
            transfer_mode: TransferMode::Binary,
            rename_from: None,
            data_stream: None,
        }
    }

    pub fn take_data_stream(&mut self) -> Option<DataStream> {
        self.data_stream.take()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("working_directory", &self.working_directory)
            .field("is_authenticated", &self.is_authenticated)
            .field("transfer_mode", &self.transfer_mode)
            .field("rename_from", &self.rename_from)
            .field("data_connected", &self.data_stream.is_some())
            .finish()
    }
}
