use clap::Parser;

/// Arguments for check command
///
/// Every flag has an environment variable fallback named after the pipeline
/// input it carries, so the tool can be driven either interactively or from a
/// CI step's exported environment.
#[derive(Parser, Debug, Clone)]
#[command(after_help = "EXAMPLES:\n  \
                  Validate a single bundle:\n    playprep check --app-path /deploy/app.aab --track production\n\n\
                  Expansion files, one slot per APK (empty slot = none):\n    playprep check --app-path 'a.apk|b.apk' --expansionfile-path 'main:a.obb|' --track beta\n\n\
                  Staged rollout to 20% of users:\n    playprep check --track production --user-fraction 0.2 --app-path app.aab")]
pub struct CheckArgs {
    /// Path or URL of the service account JSON key (file:// paths are
    /// validated against the filesystem)
    #[arg(long, env = "service_account_json_key_path", hide_env_values = true)]
    pub service_account_json_key_path: String,

    /// Package name of the app (e.g. com.example.app)
    #[arg(long, env = "package_name")]
    pub package_name: String,

    /// App binaries to upload; newline, literal "\n" or "|" separated list of
    /// .apk/.aab paths
    #[arg(long, env = "app_path")]
    pub app_path: String,

    /// Expansion files, "|" separated, positionally matching the app list;
    /// each entry is "main:<path>" or "patch:<path>", empty entry for none
    #[arg(long, env = "expansionfile_path")]
    pub expansionfile_path: Option<String>,

    /// Release track to upload to (e.g. internal, alpha, beta, production)
    #[arg(long, env = "track")]
    pub track: String,

    /// Fraction of users receiving the staged rollout, exclusive (0.0, 1.0)
    #[arg(long, env = "user_fraction")]
    pub user_fraction: Option<f64>,

    /// In-app update priority, 0 (lowest) to 5 (highest)
    #[arg(long, env = "update_priority", default_value_t = 0)]
    pub update_priority: i64,

    /// Directory of per-locale release notes
    #[arg(long, env = "whatsnews_dir")]
    pub whatsnews_dir: Option<String>,

    /// Deobfuscation mapping.txt to upload alongside the binaries
    #[arg(long, env = "mapping_file")]
    pub mapping_file: Option<String>,

    /// Print the resolved upload plan as JSON
    #[arg(long)]
    pub json: bool,
}
