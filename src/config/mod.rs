//! Release configuration and the validation pass
//!
//! [`CheckConfig`] is the typed form of the release step's inputs. Its
//! [`validate`](CheckConfig::validate) method runs the whole preflight in
//! order, failing on the first violation: scalar ranges, the optional
//! credential/mapping/what's-new paths, app selection and existence, and
//! expansion file alignment. The selection itself is pure and exposed
//! separately so the caller can surface its warnings even when a later check
//! fails the run.

use serde::Serialize;

use crate::applist::{Selection, parse_app_list, select_apps};
use crate::common::fs::{is_dir_exists, is_path_exists};
use crate::error::{PlayprepError, Result, path_check_failed};
use crate::expansion::expansion_file_entries;

const FILE_SCHEME: &str = "file://";

/// Typed release step inputs
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Secret; only the stripped file:// path may appear in errors
    pub service_account_json_key_path: String,
    pub package_name: String,
    pub app_path: String,
    pub expansionfile_path: Option<String>,
    pub track: String,
    pub user_fraction: Option<f64>,
    pub update_priority: i64,
    pub whatsnews_dir: Option<String>,
    pub mapping_file: Option<String>,
}

/// The resolved upload plan, ready to hand to the publishing API
#[derive(Debug, Serialize, PartialEq)]
pub struct UploadPlan {
    pub package_name: String,
    pub track: String,
    /// App binaries to upload, in order
    pub apps: Vec<String>,
    /// One entry per app when expansion files are configured, empty otherwise
    pub expansion_files: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_fraction: Option<f64>,
    pub update_priority: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsnews_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapping_file: Option<String>,
}

impl From<crate::cli::CheckArgs> for CheckConfig {
    fn from(args: crate::cli::CheckArgs) -> Self {
        Self {
            service_account_json_key_path: args.service_account_json_key_path,
            package_name: args.package_name,
            app_path: args.app_path,
            expansionfile_path: args.expansionfile_path,
            track: args.track,
            user_fraction: args.user_fraction,
            update_priority: args.update_priority,
            whatsnews_dir: args.whatsnews_dir,
            mapping_file: args.mapping_file,
        }
    }
}

impl CheckConfig {
    /// Parse the app list and apply the selection policy. Pure; never fails.
    pub fn app_selection(&self) -> Selection {
        select_apps(&parse_app_list(&self.app_path))
    }

    /// Run the full validation pass over an already-computed selection.
    ///
    /// Aborts on the first violation. The selection is taken by value so the
    /// surviving app paths move into the plan unchanged.
    pub fn validate(&self, selection: Selection) -> Result<UploadPlan> {
        self.validate_ranges()?;
        self.validate_json_key_path()?;
        self.validate_whatsnews_dir()?;
        self.validate_mapping_file()?;
        self.validate_apps(&selection.apps)?;

        let expansion_files = expansion_file_entries(
            &selection.apps,
            self.expansionfile_path.as_deref().unwrap_or(""),
        )?;

        Ok(UploadPlan {
            package_name: self.package_name.clone(),
            track: self.track.clone(),
            apps: selection.apps,
            expansion_files,
            user_fraction: self.user_fraction,
            update_priority: self.update_priority,
            whatsnews_dir: self.whatsnews_dir.clone(),
            mapping_file: self.mapping_file.clone(),
        })
    }

    /// user_fraction lives in the open interval (0, 1); update_priority in [0, 5].
    fn validate_ranges(&self) -> Result<()> {
        if let Some(fraction) = self.user_fraction {
            if fraction <= 0.0 || fraction >= 1.0 {
                return Err(PlayprepError::UserFractionOutOfRange { value: fraction });
            }
        }

        if !(0..=5).contains(&self.update_priority) {
            return Err(PlayprepError::UpdatePriorityOutOfRange {
                value: self.update_priority,
            });
        }

        Ok(())
    }

    /// The key is only a filesystem path when given with a file:// scheme;
    /// anything else (inline JSON, remote URL) is the upload step's problem.
    fn validate_json_key_path(&self) -> Result<()> {
        let Some(pth) = self.service_account_json_key_path.strip_prefix(FILE_SCHEME) else {
            return Ok(());
        };

        match is_path_exists(pth) {
            Ok(true) => Ok(()),
            Ok(false) => Err(PlayprepError::JsonKeyNotFound {
                path: pth.to_string(),
            }),
            Err(err) => Err(path_check_failed("json key path", pth, &err)),
        }
    }

    fn validate_whatsnews_dir(&self) -> Result<()> {
        let Some(dir) = self.whatsnews_dir.as_deref().filter(|d| !d.is_empty()) else {
            return Ok(());
        };

        match is_dir_exists(dir) {
            Ok(true) => Ok(()),
            Ok(false) => Err(PlayprepError::WhatsnewsDirNotFound {
                path: dir.to_string(),
            }),
            Err(err) => Err(path_check_failed("what's new directory", dir, &err)),
        }
    }

    fn validate_mapping_file(&self) -> Result<()> {
        let Some(pth) = self.mapping_file.as_deref().filter(|p| !p.is_empty()) else {
            return Ok(());
        };

        match is_path_exists(pth) {
            Ok(true) => Ok(()),
            Ok(false) => Err(PlayprepError::MappingFileNotFound {
                path: pth.to_string(),
            }),
            Err(err) => Err(path_check_failed("mapping file", pth, &err)),
        }
    }

    /// At least one app must survive selection, and every survivor must exist.
    fn validate_apps(&self, apps: &[String]) -> Result<()> {
        if apps.is_empty() {
            return Err(PlayprepError::NoAppProvided);
        }

        for pth in apps {
            match is_path_exists(pth) {
                Ok(true) => {}
                Ok(false) => {
                    return Err(PlayprepError::AppNotFound { path: pth.clone() });
                }
                Err(err) => return Err(path_check_failed("app", pth, &err)),
            }
        }

        Ok(())
    }
}
