use std::fmt;
use std::path::Path;

/// Top-level application error type
#[derive(Debug)]
pub enum AppError {
    /// Browser lifecycle errors
    Browser(BrowserError),
    /// Audit engine errors
    Audit(AuditError),
    /// Input resolution errors
    Input(InputError),
    /// File operation errors
    File(FileError),
    /// Configuration errors
    Config(ConfigError),
    /// Anything else (wraps third-party errors)
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Browser(e) => write!(f, "browser error: {}", e),
            AppError::Audit(e) => write!(f, "audit error: {}", e),
            AppError::Input(e) => write!(f, "input error: {}", e),
            AppError::File(e) => write!(f, "file error: {}", e),
            AppError::Config(e) => write!(f, "config error: {}", e),
            AppError::Other(msg) => write!(f, "error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Browser(e) => Some(e),
            AppError::Audit(e) => Some(e),
            AppError::Input(e) => Some(e),
            AppError::File(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// Browser lifecycle errors
#[derive(Debug)]
pub enum BrowserError {
    /// Building the launch configuration failed
    ConfigurationFailed { message: String },
    /// Launching the shared audit browser failed
    LaunchFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The DevTools endpoint never became reachable
    DebuggerUnreachable {
        port: u16,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Printing a report to PDF failed
    PdfRenderFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for BrowserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrowserError::ConfigurationFailed { message } => {
                write!(f, "failed to configure headless browser: {}", message)
            }
            BrowserError::LaunchFailed { source } => {
                write!(f, "failed to launch Chrome: {}", source)
            }
            BrowserError::DebuggerUnreachable { port, source } => {
                write!(f, "Chrome debugger unreachable on port {}: {}", port, source)
            }
            BrowserError::PdfRenderFailed { source } => {
                write!(f, "PDF rendering failed: {}", source)
            }
        }
    }
}

impl std::error::Error for BrowserError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BrowserError::ConfigurationFailed { .. } => None,
            BrowserError::LaunchFailed { source }
            | BrowserError::DebuggerUnreachable { source, .. }
            | BrowserError::PdfRenderFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

/// Audit engine errors
#[derive(Debug)]
pub enum AuditError {
    /// Spawning the engine process failed
    SpawnFailed {
        binary: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The engine exited with a failure status
    EngineFailed { url: String, stderr: String },
    /// The engine produced no report file
    ReportMissing { path: String },
    /// The engine's JSON report did not match the expected schema
    ReportParseFailed {
        url: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for AuditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditError::SpawnFailed { binary, source } => {
                write!(f, "failed to run '{}': {}", binary, source)
            }
            AuditError::EngineFailed { url, stderr } => {
                write!(f, "audit of {} failed: {}", url, stderr)
            }
            AuditError::ReportMissing { path } => {
                write!(f, "engine produced no report at {}", path)
            }
            AuditError::ReportParseFailed { url, source } => {
                write!(f, "invalid score report for {}: {}", url, source)
            }
        }
    }
}

impl std::error::Error for AuditError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuditError::SpawnFailed { source, .. }
            | AuditError::ReportParseFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// Input resolution errors
#[derive(Debug)]
pub enum InputError {
    /// No URLs left after resolution
    NoUrls,
    /// The @file reference could not be read
    UrlFileUnreadable {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NoUrls => write!(f, "no URLs provided"),
            InputError::UrlFileUnreadable { path, source } => {
                write!(f, "cannot read URL list {}: {}", path, source)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::NoUrls => None,
            InputError::UrlFileUnreadable { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

/// File operation errors
#[derive(Debug)]
pub enum FileError {
    /// File does not exist
    NotFound { path: String },
    /// Reading a file failed
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Writing a file failed
    WriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// A file held something other than a score report
    InvalidReport {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::NotFound { path } => write!(f, "file not found: {}", path),
            FileError::ReadFailed { path, source } => {
                write!(f, "failed to read {}: {}", path, source)
            }
            FileError::WriteFailed { path, source } => {
                write!(f, "failed to write {}: {}", path, source)
            }
            FileError::InvalidReport { path, source } => {
                write!(f, "{} is not a valid score report: {}", path, source)
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::ReadFailed { source, .. }
            | FileError::WriteFailed { source, .. }
            | FileError::InvalidReport { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    /// A pro output format was requested without a valid license
    LicenseRequired { format: String },
    /// The output directory could not be created
    OutputDirFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::LicenseRequired { format } => {
                write!(
                    f,
                    "pro format '{}' requires a license key. Demo: --license DEMO-PRO",
                    format
                )
            }
            ConfigError::OutputDirFailed { path, source } => {
                write!(f, "cannot create output directory {}: {}", path, source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::LicenseRequired { .. } => None,
            ConfigError::OutputDirFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

// ========== Conversions from common error types ==========
// anyhow already accepts AppError through its blanket impl for
// std::error::Error types, so no From<AppError> for anyhow::Error is needed.

impl From<chromiumoxide::error::CdpError> for AppError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        AppError::Browser(BrowserError::PdfRenderFailed {
            source: Box::new(err),
        })
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: String::new(),
            source: Box::new(err),
        })
    }
}

// ========== Convenience constructors ==========

impl AppError {
    /// Browser launch failure
    pub fn browser_launch_failed(
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Browser(BrowserError::LaunchFailed {
            source: Box::new(source),
        })
    }

    /// DevTools endpoint probe failure
    pub fn debugger_unreachable(
        port: u16,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Browser(BrowserError::DebuggerUnreachable {
            port,
            source: Box::new(source),
        })
    }

    /// Engine spawn failure
    pub fn audit_spawn_failed(
        binary: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Audit(AuditError::SpawnFailed {
            binary: binary.into(),
            source: Box::new(source),
        })
    }

    /// Unparsable engine report
    pub fn report_parse_failed(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Audit(AuditError::ReportParseFailed {
            url: url.into(),
            source: Box::new(source),
        })
    }

    /// Unreadable or invalid comparison file
    pub fn invalid_report_file(
        path: &Path,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::File(FileError::InvalidReport {
            path: path.display().to_string(),
            source: Box::new(source),
        })
    }
}

// ========== Result type alias ==========

/// Application result type
pub type AppResult<T> = Result<T, AppError>;
