use clap::ValueEnum;
use tack_config::Mode;

/// Build mode selectable on the command line
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ModeArg {
    /// Unhashed names, source maps, hot reload and linting
    #[value(name = "development", alias = "dev")]
    Development,

    /// Hashed names, minification and bundle analysis
    #[value(name = "production", alias = "prod")]
    Production,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Development => Mode::Development,
            ModeArg::Production => Mode::Production,
        }
    }
}

/// Shape of the printed configuration
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum PrintFormat {
    /// Tagged configuration structure
    #[value(name = "typed")]
    Typed,

    /// Bundler runtime object
    #[value(name = "webpack")]
    Webpack,
}
