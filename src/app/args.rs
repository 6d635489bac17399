use std::path::PathBuf;

use clap::Parser;
use tracing::level_filters::LevelFilter;

use crate::tracker::Category;

#[derive(Parser, Debug)]
#[command(name = "GodTimer", version, long_about = None)]
#[command(about = "Keeps one running clock per activity category", long_about = None)]
pub struct AppArgs {
    #[arg(
        short,
        long,
        default_value_t = Category::Meditation,
        help = "Category that receives time first. Accepts G, O, D or the full name"
    )]
    pub category: Category,
    #[arg(long, help = "Show hours and minutes only once the clock passes one hour")]
    pub compact: bool,
    #[arg(
        long,
        help = "Application directory. By default $XDG_STATE_HOME/godtimer or $HOME/.local/state/godtimer"
    )]
    pub dir: Option<PathBuf>,
    /// This option is for debugging purposes only.
    #[arg(long = "log-console")]
    pub log_console: bool,
    #[arg(long = "log-filter")]
    pub log: Option<LevelFilter>,
}

#[cfg(test)]
mod args_tests {
    use clap::Parser;
    use tracing::level_filters::LevelFilter;

    use crate::tracker::Category;

    use super::AppArgs;

    #[test]
    fn defaults() {
        let args = AppArgs::try_parse_from(["godtimer"]).unwrap();
        assert_eq!(args.category, Category::Meditation);
        assert!(!args.compact);
        assert!(args.dir.is_none());
        assert!(args.log.is_none());
    }

    #[test]
    fn parses_flags() {
        let args = AppArgs::try_parse_from([
            "godtimer",
            "--category",
            "o",
            "--compact",
            "--log-filter",
            "debug",
            "--log-console",
        ])
        .unwrap();
        assert_eq!(args.category, Category::Office);
        assert!(args.compact);
        assert!(args.log_console);
        assert_eq!(args.log, Some(LevelFilter::DEBUG));
    }

    #[test]
    fn rejects_unknown_category() {
        assert!(AppArgs::try_parse_from(["godtimer", "-c", "gym"]).is_err());
    }
}
