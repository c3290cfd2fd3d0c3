//! App binary selection policy
//!
//! Classifies parsed app list tokens by extension and applies the upload
//! preference: an `.aab` always wins over `.apk`s, and at most one `.aab` is
//! ever uploaded (the Play API accepts a single bundle per release, while
//! split APKs may be uploaded together). Ambiguities never fail the run; they
//! are reported as warnings so the pipeline log shows what was dropped and
//! why. The caller decides how to emit them.

use std::path::Path;

/// Format family of an app binary, keyed by its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppFormat {
    /// Android App Bundle (.aab), the preferred upload format
    Bundle,
    /// APK (.apk), the legacy upload format
    Apk,
    /// Extension not recognized; never selected
    Unknown,
}

fn classify(path: &str) -> AppFormat {
    let ext = Path::new(path)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());
    match ext.as_deref() {
        Some("aab") => AppFormat::Bundle,
        Some("apk") => AppFormat::Apk,
        _ => AppFormat::Unknown,
    }
}

/// Result of applying the selection policy to a parsed app list.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// App paths to upload, in encountered order
    pub apps: Vec<String>,
    /// Advisory messages for anything ambiguous or dropped
    pub warnings: Vec<String>,
}

/// Apply the upload preference policy to parsed app list tokens.
///
/// If any `.aab` is present, exactly the first one is selected and every
/// `.apk` is discarded; otherwise all `.apk`s are selected in order. Tokens
/// with an unrecognized extension are never selected and produce a warning
/// carrying the untouched token text.
pub fn select_apps<S: AsRef<str>>(tokens: &[S]) -> Selection {
    let mut aabs: Vec<String> = Vec::new();
    let mut apks: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    for token in tokens {
        let pth = token.as_ref();
        match classify(pth) {
            AppFormat::Bundle => aabs.push(pth.to_string()),
            AppFormat::Apk => apks.push(pth.to_string()),
            AppFormat::Unknown => warnings.push(format!(
                "unknown app path extension in path: {}, supported extensions: .apk, .aab",
                pth
            )),
        }
    }

    if !aabs.is_empty() && !apks.is_empty() {
        warnings.push(format!(
            "Both .aab and .apk files provided, using the .aab file(s): {}",
            aabs.join(",")
        ));
    }

    if aabs.len() > 1 {
        warnings.push(format!(
            "More than 1 .aab files provided, using the first: {}",
            aabs[0]
        ));
    }

    let apps = if aabs.is_empty() {
        apks
    } else {
        aabs.truncate(1);
        aabs
    };

    Selection { apps, warnings }
}
