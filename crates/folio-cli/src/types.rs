use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ViewModeArg {
    Minimal,
    Compact,
    Standard,
    Verbose,
}

impl fmt::Display for ViewModeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewModeArg::Minimal => write!(f, "minimal"),
            ViewModeArg::Compact => write!(f, "compact"),
            ViewModeArg::Standard => write!(f, "standard"),
            ViewModeArg::Verbose => write!(f, "verbose"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PageArg {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl fmt::Display for PageArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageArg::Home => write!(f, "home"),
            PageArg::About => write!(f, "about"),
            PageArg::Skills => write!(f, "skills"),
            PageArg::Projects => write!(f, "projects"),
            PageArg::Experience => write!(f, "experience"),
            PageArg::Contact => write!(f, "contact"),
        }
    }
}
